use rolling_logger::{global, init, RollingLogger};

#[test]
fn test_installed_logger_receives_records() {
    let logger = init(RollingLogger::new(8)).unwrap();
    assert!(std::ptr::eq(logger, global().unwrap()));

    log::info!("installed");
    assert!(logger.recent().iter().any(|entry| entry.message == "installed"));

    assert!(init(RollingLogger::new(8)).is_err());
    assert!(std::ptr::eq(logger, global().unwrap()));
}
