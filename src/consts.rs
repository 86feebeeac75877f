/// Employee side deductions, percent of gross
pub const EPF_RATE: f64 = 0.12;
pub const ESIC_RATE: f64 = 0.0075;

/// Invoice side rates, percent of the man-day amount
pub const SERVICE_CHARGE_RATE: f64 = 0.07;
pub const INVOICE_PF_RATE: f64 = 0.13;
pub const INVOICE_ESIC_RATE: f64 = 0.0325;
pub const CGST_RATE: f64 = 0.09;
pub const SGST_RATE: f64 = 0.09;

pub const DEFAULT_PER_DAY: f64 = 466.0;

pub const DEFAULT_EXTRACTOR_URL: &str = "https://ai-invoice-generator-python.onrender.com/upload/";
