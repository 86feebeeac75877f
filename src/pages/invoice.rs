use actix_web::{get, http::header::{ContentDisposition, ContentType}, web, HttpResponse, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{invoice::{InvoiceMetadata, InvoiceTotals}, session::Handoff, template::InvoiceTemplate, utils::{download_file_name, format_money}};

use extractor::InvoiceRequest;
use model::*;

mod extractor;
mod model;

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(preview)
        .service(document);
}

fn prepare(request: &InvoiceRequest, template: &InvoiceTemplate) -> (InvoiceTotals, InvoiceMetadata) {
    let Handoff { total_present_days, per_day, .. } = request.handoff;

    let totals = InvoiceTotals::compute(total_present_days, per_day);
    let metadata = InvoiceMetadata::generate(Local::now().date_naive(), request.bill_to.as_deref(), &template.default_bill_to);

    (totals, metadata)
}

#[get("")]
async fn preview(template: web::Data<InvoiceTemplate>, request: InvoiceRequest) -> impl Responder {
    let (totals, metadata) = prepare(&request, &template);

    web::Json(InvoicePreview {
        handoff: request.handoff,
        display: InvoiceTotalsDisplay::new(request.handoff.per_day, &totals),
        grand_total_in_words: totals.grand_total_in_words(),
        metadata,
        totals,
    })
}

#[get("/document")]
async fn document(template: web::Data<InvoiceTemplate>, request: InvoiceRequest) -> impl Responder {
    let (totals, metadata) = prepare(&request, &template);
    let file_name = download_file_name(request.bill_to.as_deref(), &metadata.invoice_number);

    info!(invoice_number = %metadata.invoice_number, grand_total = totals.grand_total, "rendering invoice document");

    let body = template.document(&request.handoff, &totals, &metadata).to_string();

    HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .insert_header(ContentDisposition::attachment(file_name))
        .body(body)
}
