mod serializer;
pub use serializer::Serializer;

mod stmt;
pub use stmt::Statement;
