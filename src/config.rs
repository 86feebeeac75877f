use std::{env, net::{SocketAddr, ToSocketAddrs as _}};

use tracing::info;

use crate::{consts, template::InvoiceTemplate};

pub struct Config {
    pub host_address: SocketAddr,

    pub extractor_url: String,

    pub payroll: PayrollSettings,

    pub invoice_template: InvoiceTemplate,
}

/// Shared with handlers through `web::Data`
#[derive(Debug, Clone, Copy)]
pub struct PayrollSettings {
    pub default_per_day: f64,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            default_per_day: consts::DEFAULT_PER_DAY,
        }
    }
}

pub fn load() -> Config {
    Config {
        host_address: load_host_address(),
        extractor_url: load_extractor_url(),
        payroll: PayrollSettings {
            default_per_day: load_default_per_day(),
        },
        invoice_template: load_invoice_template(),
    }
}

fn load_host_address() -> SocketAddr {
    info!("Loading environment `HOST_ADDRESS`");

    let var = env::var("HOST_ADDRESS").unwrap_or_else(|_| "127.0.0.1:0".to_string());

    var.to_socket_addrs()
        .expect("`HOST_ADDRESS` is not in a valid format").nth(0)
        .expect("unable to resolve host from `HOST_ADDRESS`")
}

fn load_extractor_url() -> String {
    info!("Loading environment `EXTRACTOR_URL`");

    env::var("EXTRACTOR_URL").unwrap_or_else(|_| consts::DEFAULT_EXTRACTOR_URL.to_string())
}

fn load_default_per_day() -> f64 {
    info!("Loading environment `DEFAULT_PER_DAY`");

    let Ok(var) = env::var("DEFAULT_PER_DAY") else {
        return consts::DEFAULT_PER_DAY
    };

    var.parse().expect("`DEFAULT_PER_DAY` must be a number")
}

fn load_invoice_template() -> InvoiceTemplate {
    info!("Loading environment `INVOICE_TEMPLATE`");

    match env::var("INVOICE_TEMPLATE") {
        Ok(path) => InvoiceTemplate::from_path(&path)
            .unwrap_or_else(|e| panic!("unable to load invoice template from `{path}`: {e}")),
        Err(_) => InvoiceTemplate::builtin().expect("built-in invoice template must be valid"),
    }
}
