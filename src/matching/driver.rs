use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::debug;

use super::error::{Error, Result};
use super::group::group_by_length;
use super::solve::friendly_count;
use super::types::{Bucket, BucketResult, CountReport};

/// Parallel count over a whole word list: group by length, one worker per bucket, sum.
///
/// Always equal to [`friendly_count`] on the same list.
pub fn concurrent_friendly_count<W>(words: Vec<W>) -> Result<usize>
where
    W: AsRef<[u8]> + Send,
{
    let buckets = group_by_length(words);
    Ok(run_all_buckets_parallel(buckets, false)?.total)
}

/// Run the sequential count on every bucket in parallel and gather per-bucket results.
pub fn run_all_buckets_parallel<W>(buckets: Vec<Bucket<W>>, show_progress: bool) -> Result<CountReport>
where
    W: AsRef<[u8]> + Send,
{
    let pb = if show_progress {
        let pb = ProgressBar::new(buckets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} buckets {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let report = run_buckets_with(buckets, |b| friendly_count(&b.words), &pb);
    pb.finish_and_clear();
    report
}

/// Fan-out/fan-in core. `worker` runs once per bucket on the rayon pool; each result
/// lands in its own slot and the slots are summed after every worker has returned.
///
/// A panicking worker turns into [`Error::WorkerPanicked`] and no total is produced.
pub fn run_buckets_with<W, F>(
    mut buckets: Vec<Bucket<W>>,
    worker: F,
    pb: &ProgressBar,
) -> Result<CountReport>
where
    W: AsRef<[u8]> + Send,
    F: Fn(&Bucket<W>) -> usize + Sync,
{
    if buckets.is_empty() {
        return Ok(CountReport::empty());
    }

    let t0 = Instant::now();

    // cost sort heavy first
    buckets.sort_by_key(|b| std::cmp::Reverse(b.cost()));

    let mut results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| -> Result<BucketResult> {
            let t = Instant::now();
            let friendly = panic::catch_unwind(AssertUnwindSafe(|| worker(&bucket)))
                .map_err(|payload| Error::worker_panicked(bucket.len, payload))?;
            let elapsed = t.elapsed();
            debug!(
                "[bucket len={}] words={} friendly={} in {:.3}s",
                bucket.len,
                bucket.n_words(),
                friendly,
                elapsed.as_secs_f64()
            );
            pb.inc(1);
            Ok(BucketResult {
                len: bucket.len,
                words: bucket.n_words(),
                friendly,
                elapsed,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    results.sort_by_key(|r| r.len);
    let total = results.iter().map(|r| r.friendly).sum();

    Ok(CountReport {
        buckets: results,
        total,
        wall: t0.elapsed(),
    })
}
