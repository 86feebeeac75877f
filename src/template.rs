use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{invoice::{InvoiceMetadata, InvoiceTotals}, session::Handoff, utils::format_money};

const BUILTIN_TEMPLATE: &str = include_str!("../assets/invoice_template.json");

const PAGE_WIDTH: usize = 80;

/// Literal business text of the printed invoice. Kept out of the code so
/// bank details or the certification wording can change without a rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTemplate {
    pub company_name: String,
    pub company_lines: Vec<String>,
    pub title: String,
    pub default_bill_to: String,
    pub client_lines: Vec<String>,
    pub service_category: String,
    pub service_description: String,
    pub sac_code: String,
    pub gst_note: Vec<String>,
    pub bank_name: String,
    pub bank_lines: Vec<String>,
    pub tax_identity: String,
    pub certification: String,
    pub signature: String,
    pub labels: InvoiceLabels,
}

/// Captions printed next to the figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLabels {
    pub invoice_number: String,
    pub date: String,
    pub month_of: String,
    /// S. No., description, SAC, man days, rate, amount
    pub columns: [String; 6],
    pub line_total: String,
    pub pf: String,
    pub esic: String,
    pub sub_total: String,
    pub service_charge: String,
    pub total_before_tax: String,
    pub cgst: String,
    pub sgst: String,
    pub grand_total: String,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unable to read invoice template: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid invoice template: {0}")]
    Json(#[from] serde_json::Error),
}

impl InvoiceTemplate {
    pub fn builtin() -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(BUILTIN_TEMPLATE)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let content = fs::read_to_string(path)?;

        Ok(serde_json::from_str(&content)?)
    }

    pub fn document<'a>(&'a self, handoff: &'a Handoff, totals: &'a InvoiceTotals, metadata: &'a InvoiceMetadata) -> InvoiceDocument<'a> {
        InvoiceDocument {
            template: self,
            handoff,
            totals,
            metadata,
        }
    }
}

/// One page, fixed layout, plain text. Use `to_string()` to get the printable form.
pub struct InvoiceDocument<'a> {
    template: &'a InvoiceTemplate,
    handoff: &'a Handoff,
    totals: &'a InvoiceTotals,
    metadata: &'a InvoiceMetadata,
}

impl fmt::Display for InvoiceDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let InvoiceDocument { template, handoff, totals, metadata } = self;
        let labels = &template.labels;
        let width = PAGE_WIDTH;
        let rule = "=".repeat(width);
        let thin_rule = "-".repeat(width);

        // header
        writeln!(f, "{rule}")?;
        writeln!(f, "{:^width$}", template.company_name)?;
        for line in &template.company_lines {
            writeln!(f, "{line:^width$}")?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "{:^width$}", template.title)?;
        writeln!(f, "{rule}")?;

        // client block next to the metadata table
        let client = std::iter::once(metadata.bill_to.as_str())
            .chain(template.client_lines.iter().map(String::as_str))
            .collect::<Vec<_>>();
        let meta = [
            format!("{:<11} | {}", labels.invoice_number, metadata.invoice_number),
            format!("{:<11} | {}", labels.date, metadata.date),
            format!("{:<11} | {}", labels.month_of, metadata.month_of),
        ];
        for i in 0..client.len().max(meta.len()) {
            let left = client.get(i).copied().unwrap_or("");
            let right = meta.get(i).map(String::as_str).unwrap_or("");
            writeln!(f, "{left:<48}{right}")?;
        }
        writeln!(f, "{rule}")?;

        // line items
        let [number, description, sac, man_days, rate, amount] = &labels.columns;
        writeln!(f, "{number:<7}{description:<20}{sac:>8}{man_days:>23}{rate:>10}{amount:>12}")?;
        writeln!(f, "{thin_rule}")?;
        writeln!(f, "{}", template.service_category)?;
        writeln!(
            f,
            "{:<7}{:<20}{:>8}{:>23}{:>10}{:>12}",
            1,
            template.service_description,
            template.sac_code,
            handoff.total_present_days,
            format_money(handoff.per_day),
            format_money(totals.base_total),
        )?;
        writeln!(f, "{:>68}{:>12}", labels.line_total, format_money(totals.base_total))?;
        writeln!(f, "{rule}")?;

        // totals
        for (label, value) in [
            (&labels.pf, totals.pf),
            (&labels.esic, totals.esic),
            (&labels.sub_total, totals.sub_total),
            (&labels.service_charge, totals.service_charge),
            (&labels.total_before_tax, totals.total_before_tax),
        ] {
            writeln!(f, "{label:<64}{:>16}", format_money(value))?;
        }
        writeln!(f, "{thin_rule}")?;

        // gst note and bank transfer details
        for line in &template.gst_note {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{} {}", labels.cgst, format_money(totals.cgst))?;
        writeln!(f, "{} {}", labels.sgst, format_money(totals.sgst))?;
        writeln!(f)?;
        writeln!(f, "{}", template.bank_name)?;
        for line in &template.bank_lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{rule}")?;

        // grand total
        writeln!(f, "{:^width$}", format!("{} {}", labels.grand_total, totals.grand_total))?;
        writeln!(f, "{:^width$}", totals.grand_total_in_words())?;
        writeln!(f, "{rule}")?;

        // footer
        writeln!(f, "{}", template.tax_identity)?;
        writeln!(f)?;
        for line in wrap(&template.certification, width) {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "{:>width$}", template.signature)
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
