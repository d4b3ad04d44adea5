//! Global install runs in its own test binary: `log` accepts one backend per
//! process.

use log::{Log, Metadata, Record};
use rolling_logger::{global, init, InitError, RollingLogger};

struct OtherLogger;

impl Log for OtherLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, _: &Record) {}

    fn flush(&self) {}
}

static OTHER: OtherLogger = OtherLogger;

#[test]
fn test_init_after_foreign_logger_is_not_published() {
    log::set_logger(&OTHER).unwrap();

    let err = init(RollingLogger::new(8)).unwrap_err();

    assert!(matches!(err, InitError::AlreadyInitialized));
    assert!(global().is_none());
}
