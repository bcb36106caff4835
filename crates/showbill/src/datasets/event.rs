use chrono::NaiveDate;
use showbill_core::{
    schema::{Column, Dataset, Schema, Variable},
    stmt::{Row, Type},
    Result,
};

/// One row of the `event` table: a single listed show.
///
/// Getters return the raw scalar, `None` while the column is null or the
/// variable unbound; the `*_variable` accessors expose the binding itself.
#[derive(Debug, Clone)]
pub struct Event {
    id: Variable,
    name: Variable,
    date_start: Variable,
    number_of_days: Variable,
    venue_id: Variable,
    url: Variable,
    sold_out: Variable,
}

impl Event {
    pub fn id(&self) -> Option<i64> {
        self.id.value().as_i64()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.value().as_str()
    }

    pub fn date_start(&self) -> Option<NaiveDate> {
        self.date_start.value().as_date()
    }

    pub fn number_of_days(&self) -> Option<i64> {
        self.number_of_days.value().as_i64()
    }

    pub fn venue_id(&self) -> Option<i64> {
        self.venue_id.value().as_i64()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.value().as_str()
    }

    pub fn sold_out(&self) -> Option<bool> {
        self.sold_out.value().as_bool()
    }

    pub fn id_variable(&self) -> &Variable {
        &self.id
    }

    pub fn name_variable(&self) -> &Variable {
        &self.name
    }

    pub fn date_start_variable(&self) -> &Variable {
        &self.date_start
    }

    pub fn number_of_days_variable(&self) -> &Variable {
        &self.number_of_days
    }

    pub fn venue_id_variable(&self) -> &Variable {
        &self.venue_id
    }

    pub fn url_variable(&self) -> &Variable {
        &self.url
    }

    pub fn sold_out_variable(&self) -> &Variable {
        &self.sold_out
    }
}

impl Dataset for Event {
    fn schema() -> Schema {
        Schema::new(
            "event",
            vec![
                Column::new("id", Type::I64).auto_increment(),
                Column::new("name", Type::String),
                Column::new("date_start", Type::Date),
                Column::new("number_of_days", Type::I64),
                Column::new("venue_id", Type::I64),
                Column::new("url", Type::String),
                Column::new("sold_out", Type::Bool),
            ],
        )
        .with_date_start("date_start")
    }

    fn load(row: &Row) -> Result<Self> {
        Ok(Self {
            id: Variable::hydrate("id", Type::I64, row),
            name: Variable::hydrate("name", Type::String, row),
            date_start: Variable::hydrate("date_start", Type::Date, row),
            number_of_days: Variable::hydrate("number_of_days", Type::I64, row),
            venue_id: Variable::hydrate("venue_id", Type::I64, row),
            url: Variable::hydrate("url", Type::String, row),
            sold_out: Variable::hydrate("sold_out", Type::Bool, row),
        })
    }

    fn date_start(&self) -> Option<NaiveDate> {
        self.date_start.value().as_date()
    }
}
