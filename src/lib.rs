pub mod error;
pub mod game;
pub mod stats;

#[cfg(feature = "server")]
pub mod hosting;

pub use error::*;

/// Win rate expressed as a percentage in [0, 100].
pub type Percent = f64;

// ============================================================================
// GAME CONSTANTS
// ============================================================================
/// Rounds retained by the in-memory round log before the oldest is evicted.
pub const ROUND_HISTORY: usize = 1024;
/// Default number of rounds returned by the recent rounds query.
pub const RECENT_DEFAULT: usize = 20;
/// Upper bound on rounds returned by the recent rounds query.
pub const RECENT_MAXIMUM: usize = 100;
/// Service name reported by the API health endpoint.
pub const SERVICE_NAME: &str = "rps-backend";

/// Trait for piping values through functions.
/// Enables fluent method chaining: `value.pipe(f)` instead of `f(value)`.
pub trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}
impl<T> Pipe for T {}

/// Milliseconds since the Unix epoch.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("ctrl-c handler");
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
