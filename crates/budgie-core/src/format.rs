//! Locale-aware money formatting and amount parsing

use crate::config::DisplayConfig;

/// Formats amounts and percentages using a [`DisplayConfig`]
#[derive(Debug, Clone, Default)]
pub struct MoneyFormatter {
    display: DisplayConfig,
}

impl MoneyFormatter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// `-$1,234.50` style output. Non-finite values print as zero.
    pub fn amount(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let digits = format!("{:.*}", self.display.decimals, value.abs());
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut out = String::new();
        let is_zero = digits.chars().all(|c| c == '0' || c == '.');
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&self.display.currency_symbol);
        out.push_str(&group_thousands(int_part, self.display.thousands_separator));
        if let Some(frac) = frac_part {
            out.push(self.display.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    /// One decimal place, using the configured decimal separator
    pub fn percent(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let text = format!("{:.1}%", value);
        if self.display.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.display.decimal_separator.to_string())
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Parse a user-typed amount such as `3.500,50`, `3,500.50` or `$ 1200`
///
/// When both `.` and `,` appear, the last one is the decimal separator.
/// A lone separator that occurs once is decimal if it matches the
/// configured decimal separator, or if it is not followed by exactly
/// three digits.
pub fn parse_amount(input: &str, display: &DisplayConfig) -> Result<f64, String> {
    let cleaned: String = input
        .trim()
        .trim_start_matches(display.currency_symbol.as_str())
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    let cleaned = cleaned.trim_start_matches(display.currency_symbol.as_str());

    if cleaned.is_empty() {
        return Err("Amount is empty".to_string());
    }

    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');
    let decimal = match (last_dot, last_comma) {
        (Some(d), Some(c)) => Some(if d > c { '.' } else { ',' }),
        (Some(_), None) => lone_separator_role(cleaned, '.', display),
        (None, Some(_)) => lone_separator_role(cleaned, ',', display),
        (None, None) => None,
    };

    let normalized: String = cleaned
        .chars()
        .filter_map(|c| match c {
            '.' | ',' if Some(c) == decimal => Some('.'),
            '.' | ',' => None,
            other => Some(other),
        })
        .collect();

    let value: f64 = normalized
        .parse()
        .map_err(|_| format!("Invalid amount: {}", input.trim()))?;
    if !value.is_finite() {
        return Err(format!("Invalid amount: {}", input.trim()));
    }
    Ok(value)
}

/// `Some(sep)` if a lone separator acts as the decimal point
fn lone_separator_role(text: &str, sep: char, display: &DisplayConfig) -> Option<char> {
    if text.matches(sep).count() > 1 {
        return None;
    }
    if sep == display.decimal_separator {
        return Some(sep);
    }
    let after = text.rsplit(sep).next().unwrap_or("");
    if after.len() == 3 && after.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(sep)
    }
}
