pub mod fixtures;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver, OpsLog};

use tessera::{db::Builder, driver::Sqlite, Db};

/// Installs a `tracing` subscriber writing to the test output.
///
/// Filtered by `RUST_LOG`; calling it more than once is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Connects `builder` to a fresh in-memory SQLite database, logging every
/// driver operation.
pub async fn setup_db(mut builder: Builder) -> (Db, OpsLog) {
    init_tracing();

    let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
    let ops_log = driver.ops_log_handle();

    let db = builder.build(driver).await.unwrap();
    (db, ops_log)
}
