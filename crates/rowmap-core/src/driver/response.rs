use crate::{Result, Row};

use anyhow::anyhow;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result rows
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(rows: Vec<Row>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self.rows {
            Rows::Values(rows) => Ok(rows),
            Rows::Count(count) => Err(anyhow!("expected rows, driver returned count {count}").into()),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            Rows::Values(rows) => {
                Err(anyhow!("expected count, driver returned {} rows", rows.len()).into())
            }
        }
    }
}
