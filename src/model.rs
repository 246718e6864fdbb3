use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Debug;

/// Date format used by the spreadsheet and everywhere we echo dates back
/// to the sheet's own representation.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn parse_date(date: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransactionKind {
    Gasto,
    Venta,
}

impl TransactionKind {
    /// Exact `type` column value in the spreadsheet. Anything else,
    /// including different casing, is not a valid transaction kind.
    pub fn from_wire(kind: &str) -> Option<Self> {
        match kind {
            "gasto" => Some(Self::Gasto),
            "venta" => Some(Self::Venta),
            _ => None,
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Gasto => "gasto",
            Self::Venta => "venta",
        }
    }
}

/// A single row of the spreadsheet after validation. Immutable once parsed.
#[derive(Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub payment: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
}

impl Debug for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            format_date(self.date),
            self.description,
            self.payment,
            self.kind.wire_name(),
            self.amount,
        )
    }
}

/// Totals for a filtered transaction set. Always recomputed in full,
/// never updated incrementally.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Summary {
    pub total_gastos: Decimal,
    pub total_ventas: Decimal,
    pub balance: Decimal,
}
