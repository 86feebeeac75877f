use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::consts::{EPF_RATE, ESIC_RATE};

/// Record as handed over by the extraction service, nothing trusted yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAttendanceRecord {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub present_day: Option<Value>,
    #[serde(default)]
    pub total_day: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    pub present_days: f64,
    pub total_days: f64,
}

impl AttendanceRecord {
    /// Negative when the extracted data claims more present days than the period has.
    pub fn absent_days(&self) -> f64 {
        self.total_days - self.present_days
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("record is missing `{0}`")]
    Missing(&'static str),
    #[error("`{0}` is not a number")]
    NotANumber(&'static str),
}

impl TryFrom<&RawAttendanceRecord> for AttendanceRecord {
    type Error = RecordError;

    fn try_from(raw: &RawAttendanceRecord) -> Result<Self, Self::Error> {
        let name = match &raw.name {
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            Some(Value::Number(name)) => name.to_string(),
            _ => return Err(RecordError::Missing("name")),
        };

        Ok(Self {
            name,
            present_days: coerce_days(raw.present_day.as_ref(), "present_day")?,
            total_days: coerce_days(raw.total_day.as_ref(), "total_day")?,
        })
    }
}

fn coerce_days(value: Option<&Value>, field: &'static str) -> Result<f64, RecordError> {
    match value {
        None | Some(Value::Null) => Err(RecordError::Missing(field)),
        Some(Value::Number(n)) => n.as_f64().ok_or(RecordError::NotANumber(field)),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| RecordError::NotANumber(field)),
        Some(_) => Err(RecordError::NotANumber(field)),
    }
}

/// Whole batch is usable only if every single record is.
pub fn is_valid(records: &[RawAttendanceRecord]) -> bool {
    records.iter().all(|raw| AttendanceRecord::try_from(raw).is_ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub gross: f64,
    pub epf: f64,
    pub esic: f64,
    pub net: f64,
}

impl SalaryBreakdown {
    /// Non-numeric input ends up as NaN in every field, callers validate before.
    pub fn calculate(present_days: f64, wage_per_day: f64) -> Self {
        let gross = present_days * wage_per_day;
        let epf = gross * EPF_RATE;
        let esic = gross * ESIC_RATE;

        Self {
            gross,
            epf,
            esic,
            net: gross - (epf + esic),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub employee_count: u64,
    pub total_gross: f64,
    pub total_net: f64,
    pub total_present_days: f64,
}

impl AttendanceSummary {
    /// Sums unrounded breakdowns, rounding belongs to whoever displays the totals.
    pub fn aggregate(records: &[AttendanceRecord], wage_per_day: f64) -> Self {
        records.iter().fold(Self::default(), |acc, record| {
            let salary = SalaryBreakdown::calculate(record.present_days, wage_per_day);

            Self {
                employee_count: acc.employee_count + 1,
                total_gross: acc.total_gross + salary.gross,
                total_net: acc.total_net + salary.net,
                total_present_days: acc.total_present_days + record.present_days,
            }
        })
    }
}
