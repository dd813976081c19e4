use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// JSON lines for CloudWatch, which stamps ingestion time itself.
/// `RUST_LOG` overrides the default INFO filter.
pub fn init() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_line_number(true)
        .init();
}

fn filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
