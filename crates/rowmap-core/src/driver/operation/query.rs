use super::Operation;
use crate::Value;

#[derive(Debug, Clone)]
pub struct Query {
    /// Which table to query
    pub table: String,

    /// Column-equality filters, all of which must match
    pub filters: Vec<Filter>,

    /// Child tables to eager-load as embedded arrays
    pub embed: Vec<Embed>,

    /// When true, at most one row is expected. Absence may be reported as
    /// an empty result or as a record-not-found error; the dispatcher
    /// treats both the same way.
    pub single: bool,
}

/// A column-equality filter. This is the only filter shape the mapping
/// layer issues; richer predicates are out of scope.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

/// An eager-load clause: embed rows of `table` whose `foreign_key` column
/// matches the parent row's id, under the `alias` key of each returned
/// parent row.
#[derive(Debug, Clone)]
pub struct Embed {
    pub alias: String,
    pub table: String,
    pub foreign_key: String,
}

impl Query {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: vec![],
            embed: vec![],
            single: false,
        }
    }

    pub fn filter(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Returns the filtered value for a column, if a filter on it exists.
    pub fn filter_on(&self, column: &str) -> Option<&Value> {
        self.filters
            .iter()
            .find(|filter| filter.column == column)
            .map(|filter| &filter.value)
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
