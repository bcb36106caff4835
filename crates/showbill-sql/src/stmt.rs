use showbill_core::{schema, stmt};

/// SQL statements understood by the serializer.
#[derive(Debug)]
pub enum Statement<'a> {
    /// `CREATE TABLE`, derived from a dataset schema
    CreateTable(&'a schema::Schema),

    /// `SELECT`
    Query(&'a stmt::Select),
}

impl<'a> Statement<'a> {
    pub fn create_table(schema: &'a schema::Schema) -> Self {
        Self::CreateTable(schema)
    }

    pub fn query(select: &'a stmt::Select) -> Self {
        Self::Query(select)
    }
}
