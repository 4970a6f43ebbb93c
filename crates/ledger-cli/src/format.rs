//! Display formatting for amounts, progress and approvals.

use ledger_core::models::{Amount, Approvals};

/// Rupee amount with thousands separators, e.g. `₹ 1,234.50`.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}₹ {}.{}", sign, group_thousands(whole), cents)
}

pub fn amount(amount: &Amount) -> String {
    currency(amount.value())
}

/// Progress with one decimal; missing progress reads as zero.
pub fn percent(progress: Option<f64>) -> String {
    format!("{:.1}%", progress.unwrap_or(0.0))
}

/// Votes cast in favour out of votes expected, e.g. `2 / 3`.
pub fn approvals<T: Approvals>(record: &T) -> String {
    format!("{} / {}", record.approved_count(), record.approval_total())
}

pub fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
