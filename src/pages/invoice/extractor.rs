use actix_web::{body, dev, error::QueryPayloadError, http::{header::{self, ContentType}, StatusCode}, FromRequest, HttpRequest, HttpResponse, ResponseError};
use futures_util::future::{ready, Ready};
use thiserror::Error;
use tracing::debug;

use super::*;

/// Hand-off from the attendance screen plus the optional bill-to name.
///
/// Without all three hand-off values there is nothing to invoice, so the
/// request is sent back to the start screen instead of failing.
pub(super) struct InvoiceRequest {
    pub(super) handoff: Handoff,
    pub(super) bill_to: Option<String>,
}

#[derive(Debug, Error)]
pub(super) enum InvoiceRequestError {
    #[error("missing invoice hand-off")]
    MissingHandoff,
    #[error("invalid invoice query: {0}")]
    InvalidQuery(#[from] QueryPayloadError),
}

impl ResponseError for InvoiceRequestError {
    fn error_response(&self) -> HttpResponse<body::BoxBody> {
        let mut response = HttpResponse::build(self.status_code());

        // back to the start screen, there is nothing to invoice
        if let InvoiceRequestError::MissingHandoff = self {
            response.insert_header((header::LOCATION, "/"));
        }

        response
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            InvoiceRequestError::MissingHandoff => StatusCode::FOUND,
            InvoiceRequestError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl FromRequest for InvoiceRequest {
    type Error = InvoiceRequestError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<InvoiceRequest, InvoiceRequestError> {
    let query = web::Query::<InvoiceQuery>::from_query(req.query_string())?.into_inner();

    let InvoiceQuery {
        total_employees: Some(total_employees),
        total_present_days: Some(total_present_days),
        per_day: Some(per_day),
        bill_to,
    } = query
    else {
        debug!(query = %req.query_string(), "invoice opened without hand-off");

        return Err(InvoiceRequestError::MissingHandoff)
    };

    Ok(InvoiceRequest {
        handoff: Handoff {
            total_employees,
            total_present_days,
            per_day,
        },
        bill_to,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{get, test, App, Responder};

    use super::*;

    #[get("/")]
    async fn test_handler(request: InvoiceRequest) -> impl Responder {
        web::Json(request.handoff)
    }

    #[actix_web::test]
    async fn test_invoice_request_extractor() {
        let app = test::init_service(
            App::new()
                .service(test_handler)
        ).await;

        let req = test::TestRequest::default()
            .uri("/?total_employees=2&total_present_days=58&per_day=466")
            .to_request();

        let handoff: Handoff = test::call_and_read_body_json(&app, req).await;
        assert_eq!(handoff, Handoff { total_employees: 2, total_present_days: 58.0, per_day: 466.0 });
    }

    #[actix_web::test]
    async fn test_missing_handoff_redirects_home() {
        let app = test::init_service(
            App::new()
                .service(test_handler)
        ).await;

        for uri in ["/", "/?total_employees=2&total_present_days=58", "/?per_day=466&total_present_days=58"] {
            let req = test::TestRequest::default()
                .uri(uri)
                .to_request();

            let response = test::call_service(&app, req).await;
            assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
            assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

            let body = test::read_body(response).await;
            assert_eq!(body, "missing invoice hand-off");
        }
    }

    #[actix_web::test]
    async fn test_non_numeric_wage_is_rejected() {
        let app = test::init_service(
            App::new()
                .service(test_handler)
        ).await;

        let req = test::TestRequest::default()
            .uri("/?total_employees=2&total_present_days=58&per_day=abc")
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/plain; charset=utf-8");

        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).starts_with("invalid invoice query"));
    }

    #[actix_web::test]
    async fn test_invoice_request_error_response() {
        let missing = InvoiceRequestError::MissingHandoff;
        assert_eq!(missing.status_code(), StatusCode::FOUND);

        let response = missing.error_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/plain; charset=utf-8");

        let invalid = web::Query::<InvoiceQuery>::from_query("per_day=abc").unwrap_err();
        let invalid = InvoiceRequestError::from(invalid);
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert!(invalid.error_response().headers().get(header::LOCATION).is_none());
    }
}
