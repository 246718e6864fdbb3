use rust_decimal::Decimal;

use crate::model::{Summary, Transaction, TransactionKind};

/// Compute totals for a filtered transaction set.
///
/// An empty set yields the zero summary. The reference implementation kept
/// the previous summary around when the filter matched nothing, but that was
/// an artifact of conditional recomputation in its UI layer, not a rule of
/// the aggregation itself.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_gastos = Decimal::ZERO;
    let mut total_ventas = Decimal::ZERO;
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Gasto => total_gastos += transaction.amount,
            TransactionKind::Venta => total_ventas += transaction.amount,
        }
    }
    Summary {
        total_gastos,
        total_ventas,
        balance: total_ventas - total_gastos,
    }
}
