use std::fs::OpenOptions;

use actix_web::{web, App, HttpServer};
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{filter, fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::extraction::ExtractionClient;

mod config;
mod consts;
mod utils;

mod extraction;
mod invoice;
mod pages;
mod payroll;
mod session;
mod template;
mod words;

#[actix_web::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let log_file = OpenOptions::new()
        .append(true)
        .create(true)
        .open("trace.log")
        .unwrap();

    let subscriber = Registry::default()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_line_number(true)
                .with_filter(EnvFilter::from_default_env())
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(filter::LevelFilter::from_level(Level::TRACE))
        );

    tracing::subscriber::set_global_default(subscriber).unwrap();

    let config::Config {
        host_address,
        extractor_url,
        payroll,
        invoice_template,
    } = config::load();

    let extraction = web::Data::new(ExtractionClient::new(extractor_url));
    let payroll = web::Data::new(payroll);
    let invoice_template = web::Data::new(invoice_template);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(extraction.clone())
            .app_data(payroll.clone())
            .app_data(invoice_template.clone())
            .wrap(TracingLogger::default())
            .configure(pages::config)
    });

    let server = server.bind(host_address).unwrap();
    info!(addresses = ?server.addrs(), "listening");

    server.run().await.unwrap();
}
