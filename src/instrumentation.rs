use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
use tracing_subscriber::{filter::LevelFilter, prelude::*};

/// Log level for the number of `-v` flags given on the command line.
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install logging to stderr and, optionally, tracing to chrome://tracing or
/// https://ui.perfetto.dev/
///
/// Make sure to store the guard in a variable in the scope to be instrumented, otherwise the trace
/// will be disabled immediately.
pub fn init(verbosity: u8, chrome: bool) -> Option<FlushGuard> {
    let (chrome_layer, guard) = if chrome {
        let (layer, guard) = ChromeLayerBuilder::new().build();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(chrome_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(level_filter(verbosity)),
        )
        .init();

    guard
}
