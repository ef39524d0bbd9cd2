// A minimal stderr logger for the `log` facade. Filtering is done through
// `log::set_max_level`, so every record that reaches this logger is printed.

use log::{self, Log};

#[derive(Debug)]
pub struct Logger(());

const LOGGER: &Logger = &Logger(());

impl Logger {
    /// Installs the logger globally and sets the maximum level to `level`.
    pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match record.line() {
            Some(line) => eprintln!(
                "{}|{}:{}: {}",
                record.level(),
                record.target(),
                line,
                record.args()
            ),
            None => eprintln!("{}|{}: {}", record.level(), record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}
