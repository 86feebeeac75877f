use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::payroll::RawAttendanceRecord;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("extraction service returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Envelope {
    result: String,
}

#[derive(Deserialize)]
struct Extracted {
    #[serde(default)]
    extracted_data: Vec<RawAttendanceRecord>,
}

/// Client for the remote service that reads attendance documents.
pub struct ExtractionClient {
    client: reqwest::Client,
    url: String,
}

impl ExtractionClient {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Sends the document as the `file` part of a multipart upload.
    ///
    /// No retry and no timeout, the caller decides what a failure means.
    pub async fn extract(&self, file_name: String, document: Vec<u8>) -> Result<Vec<RawAttendanceRecord>, ExtractError> {
        info!(url = %self.url, file_name = %file_name, size = document.len(), "uploading attendance document");

        let form = Form::new().part("file", Part::bytes(document).file_name(file_name));
        let resp = self.client.post(&self.url).multipart(form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExtractError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope = resp.json().await?;
        debug!(result = %envelope.result, "raw extraction result");

        let records = parse_result(&envelope.result)?;
        info!(count = records.len(), "extracted attendance records");

        Ok(records)
    }
}

/// The service wraps its JSON in a markdown code fence inside the `result` string.
pub fn parse_result(result: &str) -> Result<Vec<RawAttendanceRecord>, serde_json::Error> {
    let cleaned = result.replace("```json", "").replace("```", "");
    let extracted: Extracted = serde_json::from_str(&cleaned)?;

    Ok(extracted.extracted_data)
}

#[cfg(test)]
mod tests {
    use actix_web::{post, web, App, HttpResponse, HttpServer, Responder};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_fenced_result() {
        let result = "```json\n{\"extracted_data\": [{\"name\": \"Asha\", \"present_day\": 26, \"total_day\": 30}]}\n```";

        let records = parse_result(result).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, Some(json!("Asha")));
        assert_eq!(records[0].present_day, Some(json!(26)));
    }

    #[test]
    fn test_parse_unfenced_result() {
        let records = parse_result("{\"extracted_data\": []}").unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_missing_extracted_data() {
        let records = parse_result("```json{\"something_else\": 1}```").unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_malformed_result() {
        assert!(parse_result("```json\n{\"extracted_data\": [\n```").is_err());
        assert!(parse_result("I could not read this document").is_err());
    }

    #[post("/upload/")]
    async fn fake_upload(body: web::Bytes) -> impl Responder {
        // the multipart body carries the part name and the document bytes
        let body = String::from_utf8_lossy(&body);
        if !body.contains("name=\"file\"") || !body.contains("attendance sheet") {
            return HttpResponse::BadRequest().finish();
        }

        HttpResponse::Ok().json(json!({
            "result": "```json\n{\"extracted_data\": [{\"name\": \"Asha\", \"present_day\": 26, \"total_day\": 30}, {\"name\": \"Bharat\", \"present_day\": 30, \"total_day\": 30}]}\n```"
        }))
    }

    #[post("/broken/")]
    async fn broken_upload() -> impl Responder {
        HttpResponse::InternalServerError().body("model overloaded")
    }

    #[actix_web::test]
    async fn test_extract_against_local_service() {
        let server = HttpServer::new(|| App::new().service(fake_upload).service(broken_upload))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let address = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let client = ExtractionClient::new(format!("http://{address}/upload/"));
        let records = client.extract("march.pdf".to_owned(), b"attendance sheet".to_vec()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, Some(json!("Bharat")));

        let client = ExtractionClient::new(format!("http://{address}/broken/"));
        let error = client.extract("march.pdf".to_owned(), b"attendance sheet".to_vec()).await.unwrap_err();
        assert!(matches!(error, ExtractError::Server { status: 500, .. }));

        handle.stop(false).await;
    }
}
