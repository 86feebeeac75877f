use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{config::PayrollSettings, extraction::ExtractionClient, payroll::{self, AttendanceRecord, AttendanceSummary, RawAttendanceRecord, SalaryBreakdown}, session::Handoff, utils::{format_money, format_percentage}};

use model::*;

mod model;

/// Scanned attendance sheets get well past the default payload limit
const MAX_DOCUMENT_SIZE: usize = 20 * 1024 * 1024;

pub(super) const NO_DATA_MESSAGE: &str = "Upload an attendance file to see salary calculations and insights";
const INVALID_DATA_MESSAGE: &str = "Some required fields (name, present day, or total day) are missing in the uploaded data.";

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::PayloadConfig::new(MAX_DOCUMENT_SIZE))
        .service(upload)
        .service(report);
}

#[post("/upload")]
async fn upload(
    extraction: web::Data<ExtractionClient>,
    settings: web::Data<PayrollSettings>,
    query: web::Query<UploadQuery>,
    document: web::Bytes,
) -> impl Responder {
    if document.is_empty() {
        return Err(actix_web::error::ErrorBadRequest("no attendance file uploaded"))
    }

    let UploadQuery { file_name, per_day } = query.into_inner();
    let per_day = per_day.unwrap_or(settings.default_per_day);
    let file_name = file_name.unwrap_or_else(|| "attendance".to_owned());

    // A failed upload is the same as an upload with nothing in it
    let records = match extraction.extract(file_name, document.to_vec()).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "upload error");
            Vec::new()
        }
    };

    Ok(web::Json(build_report(&records, per_day)))
}

#[post("/report")]
async fn report(settings: web::Data<PayrollSettings>, payload: web::Json<ReportRequest>) -> impl Responder {
    let per_day = payload.per_day.unwrap_or(settings.default_per_day);

    web::Json(build_report(&payload.extracted_data, per_day))
}

fn build_report(records: &[RawAttendanceRecord], per_day: f64) -> AttendanceReport {
    if per_day <= 0.0 {
        warn!(per_day, "daily wage rate is not positive");
    }

    if records.is_empty() {
        return AttendanceReport {
            state: ReportState::Empty,
            message: Some(NO_DATA_MESSAGE.to_owned()),
            per_day,
            rows: Vec::new(),
            summary: None,
            handoff: None,
        }
    }

    if !payroll::is_valid(records) {
        for (index, raw) in records.iter().enumerate() {
            if let Err(e) = AttendanceRecord::try_from(raw) {
                warn!(index, error = %e, "unreadable attendance record");
            }
        }

        return AttendanceReport {
            state: ReportState::Invalid,
            message: Some(INVALID_DATA_MESSAGE.to_owned()),
            per_day,
            rows: Vec::new(),
            summary: None,
            handoff: None,
        }
    }

    // every record made it through the gate above
    let records = records
        .iter()
        .filter_map(|raw| AttendanceRecord::try_from(raw).ok())
        .collect::<Vec<_>>();

    let rows = records.iter().map(|record| build_row(record, per_day)).collect();
    let summary = AttendanceSummary::aggregate(&records, per_day);

    AttendanceReport {
        state: ReportState::Ready,
        message: None,
        per_day,
        rows,
        summary: Some(AttendanceReportSummary {
            employee_count: summary.employee_count,
            total_present_days: summary.total_present_days,
            total_gross: summary.total_gross,
            total_net: summary.total_net,
            total_gross_display: format_money(summary.total_gross),
            total_net_display: format_money(summary.total_net),
        }),
        handoff: Some(Handoff::from_summary(&summary, per_day)),
    }
}

fn build_row(record: &AttendanceRecord, per_day: f64) -> AttendanceRow {
    let absent_days = record.absent_days();
    if absent_days < 0.0 {
        warn!(name = %record.name, present_days = record.present_days, total_days = record.total_days, "more present days than days in period");
    }

    let salary = SalaryBreakdown::calculate(record.present_days, per_day);

    AttendanceRow {
        name: record.name.clone(),
        present_days: record.present_days,
        total_days: record.total_days,
        absent_days,
        attendance_rate: format_percentage(record.present_days, record.total_days),
        gross: format_money(salary.gross),
        epf: format_money(salary.epf),
        esic: format_money(salary.esic),
        net: format_money(salary.net),
    }
}
