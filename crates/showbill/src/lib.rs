pub mod datasets;

mod model;
pub use model::{Model, SharedConnection};

pub use showbill_core::{
    driver,
    schema::{self, Column, Dataset, Schema, Variable},
    stmt, Connection, Error, Result,
};

#[cfg(feature = "sqlite")]
pub use showbill_driver_sqlite as sqlite;
