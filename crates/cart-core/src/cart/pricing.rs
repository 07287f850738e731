//! Price display formatting.

use crate::messages::Locale;

/// Format a price in Brazilian reais for the given locale.
///
/// Amounts are rounded to cents. `pt-BR` uses `.` for thousands and `,`
/// for decimals (`R$ 1.234,50`); `en` swaps them (`R$1,234.50`).
pub fn format_price(value: f64, locale: Locale) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let (group_sep, decimal_sep, prefix) = match locale {
        Locale::PtBr => ('.', ',', "R$ "),
        Locale::En => (',', '.', "R$"),
    };

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }

    format!("{}{}{}{}{:02}", sign, prefix, grouped, decimal_sep, cents % 100)
}
