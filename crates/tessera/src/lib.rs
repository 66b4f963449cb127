pub mod db;
pub use db::{Builder, Db, Transaction};

pub mod driver;

mod load;
pub use load::{Field, Load};

pub use tessera_core::{
    bail, err,
    schema::{self, Column, Table},
    stmt::{self, Statement, Type, Value, ValueRecord},
    Error, Result,
};
