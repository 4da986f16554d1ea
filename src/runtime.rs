use rayon::ThreadPoolBuilder;
use std::sync::Once;
use tracing::{info, warn};

const ENV_HINTS: [&str; 6] = [
    "FRIENDLY_THREADS",
    "RAYON_NUM_THREADS",
    "SLURM_CPUS_PER_TASK",
    "SLURM_CPUS_ON_NODE",
    "PBS_NP",
    "OMP_NUM_THREADS",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadConfig {
    pub count: usize,
    pub source: String,
}

fn parse_env_threads<F>(keys: &[&str], lookup: F) -> Option<ThreadConfig>
where
    F: Fn(&str) -> Option<String>,
{
    for &key in keys {
        if let Some(v) = lookup(key) {
            if let Ok(val) = v.trim().parse::<usize>() {
                if val > 0 {
                    return Some(ThreadConfig {
                        count: val,
                        source: key.to_string(),
                    });
                }
            }
        }
    }
    None
}

/// Pick the pool size: explicit value, then the first usable env hint, then the
/// machine's available parallelism.
pub fn detect_thread_config<F>(explicit: Option<usize>, lookup: F) -> ThreadConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(count) = explicit.filter(|&n| n > 0) {
        return ThreadConfig {
            count,
            source: "--threads".to_string(),
        };
    }

    if let Some(cfg) = parse_env_threads(&ENV_HINTS, lookup) {
        return cfg;
    }

    let fallback = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .max(1);

    ThreadConfig {
        count: fallback,
        source: "available_parallelism".to_string(),
    }
}

/// Size the global rayon pool once per process. Later calls are no-ops.
pub fn configure_thread_pool(explicit: Option<usize>) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let cfg = detect_thread_config(explicit, |k| std::env::var(k).ok());
        match ThreadPoolBuilder::new()
            .num_threads(cfg.count)
            .thread_name(|i| format!("friendly-worker-{i}"))
            .build_global()
        {
            Ok(_) => {
                info!("[threads] rayon pool = {} threads (hint: {})", cfg.count, cfg.source);
            }
            Err(err) => {
                warn!("[threads] failed to configure rayon pool ({err}); continuing with default");
            }
        }
    });
}
