use tracing::Level;

/// уровень логирования по флагам командной строки
pub fn level(verbose: u8, quiet: bool) -> Level
{
    match (quiet, verbose) {
        (true, _) => Level::WARN,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    }
}

/// логи - в stderr, stdout остаётся чистым
pub fn setup_logging(level: Level)
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
