//! tlang CLI entry point

fn main() {
    // Structured logging with env-based filter. Defaults to `warn` so reports on stdout are not interleaved with logs;
    // `RUST_LOG=tlang_syntax=trace` shows every matched terminal.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    tlang::cli::run();
}
