use chrono::{Locale, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::filter::DateFilter;

mod bullet_points;

pub use bullet_points::BulletPointPrinter;

/// Currency display the way es-MX renders MXN: `$` symbol, comma-grouped
/// thousands, always two decimals, leading minus for negative amounts.
pub fn format_mxn(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rendered = format!("{rounded:.2}");
    let (integer, fraction) = rendered
        .split_once('.')
        .expect("a value rendered with two decimals always has a decimal point");
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{fraction}", group_thousands(integer))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Full Spanish date, e.g. "sábado 1 junio 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format_localized("%A %-d %B %Y", Locale::es_MX)
        .to_string()
}

/// Heading for the dashboard and the advice prompt, describing the
/// active filter.
pub fn period_label(filter: &DateFilter) -> String {
    match filter {
        DateFilter::ExactDate(date) => format_long_date(*date),
        DateFilter::DateRange { start, end } => {
            format!("{} a {}", format_long_date(*start), format_long_date(*end))
        }
        DateFilter::All => "todas las transacciones".to_string(),
    }
}
