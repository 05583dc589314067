use slog::{o, Drain, Logger};
use slog_term::{CompactFormat, TermDecorator};

pub use slog_async::Async;

/// Creates the root [`Logger`] of the application.
///
/// Records are written asynchronously to the terminal in compact format,
/// with the `prefix` set as the `service` key of every record.
pub fn new_logger(prefix: &str) -> Logger {
    let decorator = TermDecorator::new().build();
    let drain = CompactFormat::new(decorator).build().fuse();
    let drain = Async::new(drain).build().fuse();

    Logger::root(drain, o!("service" => prefix.to_string()))
}
