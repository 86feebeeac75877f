use super::*;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct UploadQuery {
    pub(super) file_name: Option<String>,
    pub(super) per_day: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ReportRequest {
    #[serde(default)]
    pub(super) extracted_data: Vec<RawAttendanceRecord>,
    pub(super) per_day: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(super) enum ReportState {
    Empty,
    Invalid,
    Ready,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct AttendanceReport {
    pub(super) state: ReportState,
    pub(super) message: Option<String>,
    pub(super) per_day: f64,
    pub(super) rows: Vec<AttendanceRow>,
    pub(super) summary: Option<AttendanceReportSummary>,
    pub(super) handoff: Option<Handoff>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct AttendanceRow {
    pub(super) name: String,
    pub(super) present_days: f64,
    pub(super) total_days: f64,
    pub(super) absent_days: f64,
    pub(super) attendance_rate: String,
    pub(super) gross: String,
    pub(super) epf: String,
    pub(super) esic: String,
    pub(super) net: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct AttendanceReportSummary {
    pub(super) employee_count: u64,
    pub(super) total_present_days: f64,
    pub(super) total_gross: f64,
    pub(super) total_net: f64,
    pub(super) total_gross_display: String,
    pub(super) total_net_display: String,
}
