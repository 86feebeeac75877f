use serde::{Deserialize, Serialize};

use crate::payroll::AttendanceSummary;

/// The three scalars the attendance screen hands to the invoice screen.
///
/// Copied by value, later changes on the attendance side never reach an invoice already opened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handoff {
    pub total_employees: u64,
    pub total_present_days: f64,
    pub per_day: f64,
}

impl Handoff {
    pub fn from_summary(summary: &AttendanceSummary, per_day: f64) -> Self {
        Self {
            total_employees: summary.employee_count,
            total_present_days: summary.total_present_days,
            per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_summary() {
        let summary = AttendanceSummary {
            employee_count: 3,
            total_gross: 31688.0,
            total_net: 27647.82,
            total_present_days: 68.0,
        };

        assert_eq!(
            Handoff::from_summary(&summary, 466.0),
            Handoff { total_employees: 3, total_present_days: 68.0, per_day: 466.0 }
        );
    }
}
