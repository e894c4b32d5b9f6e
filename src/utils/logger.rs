use tracing::Subscriber;
use tracing_subscriber::fmt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over `default_directives`.
fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

fn fmt_layer<S>() -> fmt::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        "sports_store=debug,info"
    } else {
        "sports_store=info"
    };

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(fmt_layer().compact())
        .init();
}

/// Structured output for running behind a log collector.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("sports_store=info"))
        .with(fmt_layer().json())
        .init();
}
