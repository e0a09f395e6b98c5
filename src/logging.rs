use anyhow::{Context, Result};
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};
use log::{error, info};

use crate::therapist::store::data_dir;

pub const DEFAULT_LOG_SPEC: &str = "warn,mirrormirror=debug,mirror_model=debug";

/// Starts with the built-in spec; the configured one is applied once the config is read.
pub fn init() -> LoggerHandle {
    let logger = Logger::try_with_str(DEFAULT_LOG_SPEC)
        .expect("log config text")
        .log_to_file(
            FileSpec::default()
                .directory(data_dir().join("logs"))
                .basename("mirrormirror"),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .duplicate_to_stderr(Duplicate::Info) // request traces stay in the file
        .start()
        .expect("log init");

    let orig_hook = std::panic::take_hook();
    let logger_for_panic = logger.clone();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("Panic: {panic_info}");
        logger_for_panic.flush();
        orig_hook(panic_info);
        std::process::exit(1);
    }));
    logger
}

pub fn apply_spec(logger: &LoggerHandle, spec: &str) -> Result<()> {
    if spec == DEFAULT_LOG_SPEC {
        return Ok(());
    }
    logger
        .parse_new_spec(spec)
        .with_context(|| format!("Invalid log spec {spec:?}, keeping {DEFAULT_LOG_SPEC:?}"))?;
    info!("Log spec: {spec}");
    Ok(())
}
