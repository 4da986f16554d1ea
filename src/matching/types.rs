use std::time::Duration;

/// A word is a plain byte string; no case folding or Unicode handling.
pub type Word = Vec<u8>;

/// Length-homogeneous slice of a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<W> {
    pub len: usize,
    pub words: Vec<W>,
}

impl<W: AsRef<[u8]>> Bucket<W> {
    #[inline]
    pub fn n_words(&self) -> usize {
        self.words.len()
    }

    /// Rough comparison cost of a full scan, used to schedule heavy buckets first.
    #[inline]
    pub fn cost(&self) -> u64 {
        let n = self.words.len() as u64;
        n * n * (std::cmp::max(1, self.len) as u64)
    }
}

/// Partial result produced by one worker.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub len: usize,
    pub words: usize,
    pub friendly: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct CountReport {
    pub buckets: Vec<BucketResult>, // ascending by len
    pub total: usize,
    pub wall: Duration,
}

impl CountReport {
    pub fn empty() -> Self {
        Self {
            buckets: Vec::new(),
            total: 0,
            wall: Duration::ZERO,
        }
    }

    /// Sum of per-worker elapsed time.
    pub fn busy(&self) -> Duration {
        self.buckets.iter().map(|b| b.elapsed).sum()
    }
}
