mod row;
pub use row::Row;

mod select;
pub use select::Select;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;
