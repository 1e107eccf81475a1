use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "basic_demos=debug,info"
    } else {
        "basic_demos=warn"
    }
}

// stdout carries the demo report, so logs always go to stderr.
fn init(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

pub fn init_cli_logger(verbose: bool) {
    init(verbose, false);
}

/// JSON log lines, used alongside `--json` reports.
pub fn init_json_logger(verbose: bool) {
    init(verbose, true);
}
