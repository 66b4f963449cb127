pub use tessera_core::driver::{
    operation::{self, Operation},
    Connection, Driver, Response, Rows,
};

#[cfg(feature = "sqlite")]
pub use tessera_driver_sqlite::Sqlite;
