use super::*;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct InvoiceQuery {
    pub(super) total_employees: Option<u64>,
    pub(super) total_present_days: Option<f64>,
    pub(super) per_day: Option<f64>,
    pub(super) bill_to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct InvoicePreview {
    pub(super) handoff: Handoff,
    pub(super) metadata: InvoiceMetadata,
    pub(super) totals: InvoiceTotals,
    pub(super) display: InvoiceTotalsDisplay,
    pub(super) grand_total_in_words: String,
}

/// Totals the way they are printed: money at two decimals, grand total whole
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct InvoiceTotalsDisplay {
    pub(super) rate: String,
    pub(super) base_total: String,
    pub(super) service_charge: String,
    pub(super) pf: String,
    pub(super) esic: String,
    pub(super) sub_total: String,
    pub(super) round_off_sub_total: String,
    pub(super) round_off_diff: String,
    pub(super) total_before_tax: String,
    pub(super) cgst: String,
    pub(super) sgst: String,
    pub(super) grand_total: String,
}

impl InvoiceTotalsDisplay {
    pub(super) fn new(per_day: f64, totals: &InvoiceTotals) -> Self {
        Self {
            rate: format_money(per_day),
            base_total: format_money(totals.base_total),
            service_charge: format_money(totals.service_charge),
            pf: format_money(totals.pf),
            esic: format_money(totals.esic),
            sub_total: format_money(totals.sub_total),
            round_off_sub_total: format!("{}", totals.round_off_sub_total),
            round_off_diff: format_money(totals.round_off_diff),
            total_before_tax: format_money(totals.total_before_tax),
            cgst: format_money(totals.cgst),
            sgst: format_money(totals.sgst),
            grand_total: format!("{}", totals.grand_total),
        }
    }
}
