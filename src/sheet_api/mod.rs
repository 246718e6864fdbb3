use anyhow::{bail, Context as _, Result};
use httpclient::{Client, InMemoryResponseExt as _};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::model::{self, Transaction, TransactionKind};

const REQUIRED_COLUMNS: [&str; 5] = ["date", "description", "payment", "type", "price"];

/// One raw data row, before validation.
#[derive(Debug, Deserialize)]
struct SheetRow {
    date: String,
    description: String,
    #[serde(default)]
    payment: String,
    #[serde(rename = "type")]
    kind: String,
    price: String,
}

/// Download the published spreadsheet and parse it. A failed download or an
/// undecodable sheet is a blocking error; there is no retry.
pub async fn fetch_transactions(client: &Client, url: &str) -> Result<Vec<Transaction>> {
    log::info!("Downloading transaction sheet...");
    let response = client
        .get(url)
        .await
        .context("Failed to download the transaction sheet")?;
    if !response.status().is_success() {
        bail!(
            "Transaction sheet request failed with status {}",
            response.status()
        );
    }
    let body = response
        .text()
        .context("Transaction sheet response was not readable text")?;
    let transactions = parse_csv(&body)?;
    log::info!("Loaded {} transactions", transactions.len());
    Ok(transactions)
}

/// Parse the sheet CSV into validated transactions.
///
/// The header row must carry the `date,description,payment,type,price`
/// columns or this is a structured error. Data rows that fail validation
/// (missing fields, unknown `type`, unparsable date or price, negative
/// price) are dropped silently and never reach the in-memory set.
pub fn parse_csv(input: &str) -> Result<Vec<Transaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read the sheet header row")?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            bail!("Sheet header is missing the '{column}' column");
        }
    }

    let mut transactions = Vec::new();
    for row in reader.deserialize::<SheetRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                log::debug!("Dropping undecodable row: {err}");
                continue;
            }
        };
        match validate_row(row) {
            Ok(transaction) => transactions.push(transaction),
            Err(reason) => log::debug!("Dropping invalid row: {reason}"),
        }
    }
    Ok(transactions)
}

fn validate_row(row: SheetRow) -> Result<Transaction, String> {
    if row.date.is_empty() {
        return Err("empty date".to_string());
    }
    if row.description.is_empty() {
        return Err("empty description".to_string());
    }
    if row.price.is_empty() {
        return Err("empty price".to_string());
    }
    let kind = TransactionKind::from_wire(&row.kind)
        .ok_or_else(|| format!("unknown type '{}'", row.kind))?;
    let date = model::parse_date(&row.date)
        .map_err(|_| format!("unparsable date '{}'", row.date))?;
    let amount: Decimal = row
        .price
        .parse()
        .map_err(|_| format!("unparsable price '{}'", row.price))?;
    if amount.is_sign_negative() {
        return Err(format!("negative price '{}'", row.price));
    }
    Ok(Transaction {
        date,
        description: row.description,
        payment: row.payment,
        kind,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const HEADER: &str = "date,description,payment,type,price";

    fn sheet(rows: &[&str]) -> String {
        let mut sheet = HEADER.to_string();
        for row in rows {
            sheet.push('\n');
            sheet.push_str(row);
        }
        sheet
    }

    #[test]
    fn parses_valid_rows() {
        let input = sheet(&[
            "01-06-2024,Coffee,cash,gasto,50",
            "01-06-2024,Client A,transfer,venta,500",
            "02-06-2024,Rent,cash,gasto,1200.50",
        ]);
        let transactions = parse_csv(&input).unwrap();
        assert_eq!(3, transactions.len());
        assert_eq!("Coffee", transactions[0].description);
        assert_eq!(TransactionKind::Gasto, transactions[0].kind);
        assert_eq!("transfer", transactions[1].payment);
        assert_eq!(TransactionKind::Venta, transactions[1].kind);
        assert_eq!("1200.50".parse::<Decimal>().unwrap(), transactions[2].amount);
        assert_eq!(
            model::parse_date("02-06-2024").unwrap(),
            transactions[2].date,
        );
    }

    #[test]
    fn keeps_input_order() {
        let input = sheet(&[
            "05-06-2024,Later,cash,gasto,1",
            "01-06-2024,Earlier,cash,venta,2",
        ]);
        let transactions = parse_csv(&input).unwrap();
        assert_eq!("Later", transactions[0].description);
        assert_eq!("Earlier", transactions[1].description);
    }

    #[test]
    fn quoted_cells_may_contain_commas() {
        let input = sheet(&["01-06-2024,\"Coffee, beans and filters\",cash,gasto,50"]);
        let transactions = parse_csv(&input).unwrap();
        assert_eq!("Coffee, beans and filters", transactions[0].description);
    }

    #[rstest]
    #[case::empty_date(",Coffee,cash,gasto,50")]
    #[case::empty_description("01-06-2024,,cash,gasto,50")]
    #[case::empty_price("01-06-2024,Coffee,cash,gasto,")]
    #[case::unknown_type("01-06-2024,Refund,cash,devolucion,50")]
    #[case::wrong_type_casing("01-06-2024,Coffee,cash,Gasto,50")]
    #[case::unparsable_date("2024-06-01,Coffee,cash,gasto,50")]
    #[case::unparsable_price("01-06-2024,Coffee,cash,gasto,abc")]
    #[case::negative_price("01-06-2024,Coffee,cash,gasto,-50")]
    #[case::too_few_columns("01-06-2024,Coffee,cash")]
    fn drops_invalid_row(#[case] row: &str) {
        let input = sheet(&[row, "02-06-2024,Rent,cash,gasto,1200"]);
        let transactions = parse_csv(&input).unwrap();
        assert_eq!(1, transactions.len());
        assert_eq!("Rent", transactions[0].description);
    }

    #[test]
    fn empty_payment_is_allowed() {
        let input = sheet(&["01-06-2024,Coffee,,gasto,50"]);
        let transactions = parse_csv(&input).unwrap();
        assert_eq!(1, transactions.len());
        assert_eq!("", transactions[0].payment);
    }

    #[test]
    fn missing_column_is_a_structured_error() {
        let input = "date,description,payment,price\n01-06-2024,Coffee,cash,50";
        let err = parse_csv(input).unwrap_err();
        assert!(err.to_string().contains("'type'"));
    }

    #[test]
    fn empty_input_is_a_structured_error() {
        assert!(parse_csv("").is_err());
    }

    #[test]
    fn header_only_sheet_yields_no_transactions() {
        assert_eq!(0, parse_csv(HEADER).unwrap().len());
    }
}
