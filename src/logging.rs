use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, Naming};

/// Initialize file-backed logging with size-based rotation. Only the
/// CLI entry point calls this, once; library code just emits `log::*`.
pub fn setup_logging() {
    Logger::try_with_env_or_str("info") // env override, fallback to "info"
        .unwrap()
        .log_to_file(FileSpec::default().directory("./log/music-bingo"))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // 10 MB per file
            Naming::Numbers,
            Cleanup::KeepLogFiles(5),
        )
        .start()
        .unwrap();
}
