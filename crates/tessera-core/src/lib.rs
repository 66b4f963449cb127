pub mod driver;
pub use driver::Connection;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Column, Table};

pub mod stmt;

/// A Result type alias that uses Tessera's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
