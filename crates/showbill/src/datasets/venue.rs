use showbill_core::{
    schema::{Column, Dataset, Schema, Variable},
    stmt::{Row, Type},
    Result,
};

/// One row of the `venue` table.
///
/// Venues carry no date column, so the model returns them unfiltered, in
/// query order.
#[derive(Debug, Clone)]
pub struct Venue {
    id: Variable,
    name: Variable,
    city: Variable,
}

impl Venue {
    pub fn id(&self) -> Option<i64> {
        self.id.value().as_i64()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.value().as_str()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.value().as_str()
    }

    pub fn id_variable(&self) -> &Variable {
        &self.id
    }

    pub fn name_variable(&self) -> &Variable {
        &self.name
    }

    pub fn city_variable(&self) -> &Variable {
        &self.city
    }
}

impl Dataset for Venue {
    fn schema() -> Schema {
        Schema::new(
            "venue",
            vec![
                Column::new("id", Type::I64).auto_increment(),
                Column::new("name", Type::String),
                Column::new("city", Type::String),
            ],
        )
    }

    fn load(row: &Row) -> Result<Self> {
        Ok(Self {
            id: Variable::hydrate("id", Type::I64, row),
            name: Variable::hydrate("name", Type::String, row),
            city: Variable::hydrate("city", Type::String, row),
        })
    }
}
