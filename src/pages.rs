use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};

use crate::config::PayrollSettings;

mod attendance;
mod invoice;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(index)
        .service(web::scope("/attendance")
            .configure(attendance::config))
        .service(web::scope("/invoice")
            .configure(invoice::config));
}

#[derive(Debug, Serialize, Deserialize)]
struct Index {
    title: String,
    default_per_day: f64,
    calculation_info: Vec<String>,
    message: String,
}

/// Start screen, also where an invoice without hand-off lands
#[get("/")]
async fn index(settings: web::Data<PayrollSettings>) -> impl Responder {
    web::Json(Index {
        title: "Attendance Management System".to_owned(),
        default_per_day: settings.default_per_day,
        calculation_info: vec![
            "EPF: 12% of gross salary".to_owned(),
            "ESIC: 0.75% of gross salary".to_owned(),
            "Net = Gross - (EPF + ESIC)".to_owned(),
        ],
        message: attendance::NO_DATA_MESSAGE.to_owned(),
    })
}
