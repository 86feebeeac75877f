use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{consts::{CGST_RATE, INVOICE_ESIC_RATE, INVOICE_PF_RATE, SERVICE_CHARGE_RATE, SGST_RATE}, utils::round_half_up, words};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub base_total: f64,
    pub service_charge: f64,
    pub pf: f64,
    pub esic: f64,
    pub sub_total: f64,
    pub round_off_sub_total: f64,
    pub round_off_diff: f64,
    pub total_before_tax: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub grand_total: f64,
}

impl InvoiceTotals {
    /// Rounds exactly twice: the PF + ESIC sub total before the service
    /// charge is added, and the grand total after GST. CGST and SGST are taken
    /// from the unrounded pre-tax total.
    pub fn compute(total_present_days: f64, wage_per_day: f64) -> Self {
        let base_total = total_present_days * wage_per_day;
        let service_charge = base_total * SERVICE_CHARGE_RATE;
        let pf = base_total * INVOICE_PF_RATE;
        let esic = base_total * INVOICE_ESIC_RATE;

        // service charge stays out of the sub total
        let sub_total = base_total + pf + esic;
        let round_off_sub_total = round_half_up(sub_total);
        let round_off_diff = round_off_sub_total - sub_total;

        let total_before_tax = round_off_sub_total + service_charge;
        let cgst = total_before_tax * CGST_RATE;
        let sgst = total_before_tax * SGST_RATE;
        let grand_total = round_half_up(total_before_tax + cgst + sgst);

        Self {
            base_total,
            service_charge,
            pf,
            esic,
            sub_total,
            round_off_sub_total,
            round_off_diff,
            total_before_tax,
            cgst,
            sgst,
            grand_total,
        }
    }

    /// Grand total spelled out, non finite or negative totals read as zero
    pub fn grand_total_in_words(&self) -> String {
        let amount = if self.grand_total.is_finite() && self.grand_total > 0.0 {
            self.grand_total as u64
        } else {
            0
        };

        words::to_words(amount)
    }
}

/// Header fields of one rendered invoice. Regenerated every time, nothing here is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMetadata {
    pub bill_to: String,
    pub date: String,
    pub invoice_number: String,
    pub month_of: String,
}

impl InvoiceMetadata {
    pub fn generate(today: NaiveDate, bill_to: Option<&str>, default_bill_to: &str) -> Self {
        Self::with_suffix(today, bill_to, default_bill_to, rand::random_range(100..=999))
    }

    /// The suffix only makes numbers less likely to collide within a day, it is not a sequence.
    fn with_suffix(today: NaiveDate, bill_to: Option<&str>, default_bill_to: &str, suffix: u16) -> Self {
        let bill_to = bill_to
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(default_bill_to)
            .to_owned();

        Self {
            bill_to,
            date: today.format("%d/%m/%Y").to_string(),
            invoice_number: format!("INV{:04}{:02}{:02}{suffix:03}", today.year(), today.month(), today.day()),
            month_of: today.format("%B %Y").to_string().to_uppercase(),
        }
    }
}
