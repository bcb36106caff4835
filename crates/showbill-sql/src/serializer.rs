mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

use crate::Statement;
use showbill_core::{schema, stmt};

/// Serialize a statement to a SQL string.
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

impl Serializer {
    pub fn sqlite() -> Self {
        Self {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn serialize(&self, stmt: &Statement<'_>) -> String {
        let mut ret = match stmt {
            Statement::CreateTable(schema) => self.serialize_create_table(schema),
            Statement::Query(select) => self.serialize_select(select),
        };

        ret.push(';');
        ret
    }

    fn serialize_select(&self, select: &stmt::Select) -> String {
        let mut sql = String::from("SELECT ");

        for (index, column) in select.columns.iter().enumerate() {
            if index > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&Ident(column).to_string());
        }

        sql.push_str(" FROM ");
        sql.push_str(&Ident(&select.table).to_string());
        sql
    }

    fn serialize_create_table(&self, schema: &schema::Schema) -> String {
        let mut sql = format!("CREATE TABLE {} (", Ident(&schema.table));

        for (index, column) in schema.columns.iter().enumerate() {
            if index > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&Ident(&column.name).to_string());
            sql.push(' ');
            if column.auto_increment {
                // SQLite only auto-increments the integer primary key
                sql.push_str("INTEGER PRIMARY KEY AUTOINCREMENT");
            } else {
                sql.push_str(self.flavor.column_ty(&column.ty));
            }
        }

        sql.push(')');
        sql
    }
}
