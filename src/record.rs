use std::fmt;
use std::str::FromStr;

use crate::error::MalformedRecordError;

/// Column names in the order they appear on every line.
pub const COLUMNS: [&str; 7] = [
    "min_deviation",
    "max_deviation",
    "default_volatility",
    "tau",
    "first_advantage",
    "rating_periods_per_day",
    "avg_deviance",
];

pub const HEADER: &str =
    "min_deviation,max_deviation,default_volatility,tau,first_advantage,rating_periods_per_day,avg_deviance";

/// One row of a tuning sweep report: the parameters that were tried and the
/// deviance they scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentRecord {
    pub min_deviation: f64,
    pub max_deviation: f64,
    pub default_volatility: f64,
    pub tau: f64,
    pub first_advantage: f64,
    pub rating_periods_per_day: f64,
    pub avg_deviance: f64,
}

impl ExperimentRecord {
    pub fn from_fields(fields: [f64; 7]) -> Self {
        let [
            min_deviation,
            max_deviation,
            default_volatility,
            tau,
            first_advantage,
            rating_periods_per_day,
            avg_deviance,
        ] = fields;
        Self {
            min_deviation,
            max_deviation,
            default_volatility,
            tau,
            first_advantage,
            rating_periods_per_day,
            avg_deviance,
        }
    }

    pub fn fields(&self) -> [f64; 7] {
        [
            self.min_deviation,
            self.max_deviation,
            self.default_volatility,
            self.tau,
            self.first_advantage,
            self.rating_periods_per_day,
            self.avg_deviance,
        ]
    }
}

impl FromStr for ExperimentRecord {
    type Err = MalformedRecordError;

    /// Parses an already trimmed data line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != COLUMNS.len() {
            return Err(MalformedRecordError::FieldCount { found: parts.len() });
        }

        let mut fields = [0.0; 7];
        for ((slot, raw), column) in fields.iter_mut().zip(&parts).zip(COLUMNS) {
            *slot = raw
                .trim()
                .parse()
                .map_err(|_| MalformedRecordError::InvalidNumber {
                    column,
                    value: (*raw).to_string(),
                })?;
        }
        Ok(Self::from_fields(fields))
    }
}

impl fmt::Display for ExperimentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing `.0` on integral values.
        for (idx, value) in self.fields().iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value:?}")?;
        }
        Ok(())
    }
}
