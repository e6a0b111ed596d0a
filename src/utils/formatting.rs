//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// 4550 → "R$ 45,50"
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let c = cents.abs();
    format!("{}R$ {},{:02}", sign, c / 100, c % 100)
}
