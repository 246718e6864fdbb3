use crate::model::{format_date, Summary, Transaction};

/// Natural-language prompt embedding the summary and the filtered
/// transactions, one bullet per row in the sheet's own column order.
pub fn build_prompt(
    summary: &Summary,
    transactions: &[Transaction],
    period_label: &str,
) -> String {
    let mut lines = vec![
        "Eres un asesor financiero inteligente.".to_string(),
        String::new(),
        "Te doy un resumen de mis finanzas.".to_string(),
        String::new(),
        format!("Resumen - {period_label}"),
        format!("- Total de ventas: {}", summary.total_ventas),
        format!("- Total de gastos: {}", summary.total_gastos),
        format!("- Balance neto: {}", summary.balance),
        "- Transacciones:".to_string(),
    ];
    lines.extend(transactions.iter().map(|t| {
        format!(
            "  - {} | {} | {} | {} | {}",
            format_date(t.date),
            t.description,
            t.payment,
            t.kind.wire_name(),
            t.amount,
        )
    }));
    lines.extend([
        String::new(),
        "Dame un análisis en 3 partes:\n\n1. Resumen general de la situación.\n\n2. Observaciones sobre los gastos y las ventas.\n\n3. Recomendaciones concretas para mejorar el balance.".to_string(),
        String::new(),
        "El tono debe ser claro, directo y útil.".to_string(),
    ]);
    lines.join("\n")
}
