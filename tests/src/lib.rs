
mod setup;
pub use setup::{connect, exec_sql};
