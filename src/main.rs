use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use friendly::matching::{self, CountReport, Word};
use friendly::runtime;

/// Word list used when no input is given.
const DEMO_WORDS: [&str; 13] = [
    "LALALA", "XOXOXO", "GCGCGC", "HHHCCC", "BBBMMM", "EGONUH", "HHRGOE", "XOXO", "JUJU",
    "JKKK", "J", "", "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Parallel,
    Sequential,
    Both,
}

/// Count the words of a list that have at least one friendly counterpart.
#[derive(Debug, Parser)]
#[command(name = "friendly", version)]
struct Cli {
    /// Newline-separated word list (`-` for stdin); the built-in demo list if omitted
    words: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::Parallel)]
    mode: Mode,

    /// Worker pool size (otherwise FRIENDLY_THREADS, RAYON_NUM_THREADS, ... or all cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Show a progress bar over length buckets
    #[arg(long)]
    progress: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn load(cli: &Cli) -> Result<Vec<Word>> {
    match &cli.words {
        Some(path) => {
            info!("[load] reading words from {}", path.display());
            let words = matching::load_word_list(path)?;
            info!("[load] {} entries", words.len());
            Ok(words)
        }
        None => {
            info!("[load] no input given; using the built-in demo list");
            Ok(DEMO_WORDS.iter().map(|w| w.as_bytes().to_vec()).collect())
        }
    }
}

fn report(r: &CountReport) {
    for b in &r.buckets {
        info!(
            "[bucket len={}] words={} friendly={} | {:.3}s",
            b.len,
            b.words,
            b.friendly,
            b.elapsed.as_secs_f64()
        );
    }
    info!(
        "Friendly total: {} (buckets={}, wall={:.3}s, sum_bucket={:.3}s)",
        r.total,
        r.buckets.len(),
        r.wall.as_secs_f64(),
        r.busy().as_secs_f64()
    );
}

fn run_parallel(words: Vec<Word>, progress: bool) -> Result<usize> {
    let buckets = matching::group_by_length(words);
    debug!("[group] {} length buckets", buckets.len());
    let r = matching::run_all_buckets_parallel(buckets, progress)?;
    report(&r);
    Ok(r.total)
}

fn run_sequential(words: &[Word]) -> usize {
    let t0 = Instant::now();
    let total = matching::friendly_count(words);
    info!(
        "[sequential] friendly={} in {:.3}s",
        total,
        t0.elapsed().as_secs_f64()
    );
    total
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    runtime::configure_thread_pool(cli.threads);

    let words = load(&cli)?;
    let total = match cli.mode {
        Mode::Parallel => run_parallel(words, cli.progress)?,
        Mode::Sequential => run_sequential(&words),
        Mode::Both => {
            let seq = run_sequential(&words);
            let par = run_parallel(words, cli.progress)?;
            if seq != par {
                bail!("parallel count {par} disagrees with sequential count {seq}");
            }
            par
        }
    };

    println!("{total}");
    Ok(())
}
