use anyhow::{Context as _, Result};
use console::{pad_str, style, Alignment, StyledObject};
use indicatif::ProgressBar;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::aggregate::summarize;
use crate::args::{Args, Command};
use crate::config::Config;
use crate::filter::{filter_transactions, DateFilter};
use crate::model::{format_date, Summary, Transaction, TransactionKind};
use crate::terminal::{self, BulletPointPrinter};
use crate::{advice_api, sheet_api};

const SPINNER_TICK: Duration = Duration::from_millis(120);

pub async fn main(args: Args) -> Result<()> {
    let config = Config::load(&args.config)?;
    let cli = Cli::new(config);
    match args.command {
        Command::Resumen { filter } => cli.main_resumen(filter.to_filter()).await?,
        Command::Consejo { filter } => cli.main_consejo(filter.to_filter()).await?,
    }
    Ok(())
}

pub struct Cli {
    config: Config,
    http_client: httpclient::Client,
}

impl Cli {
    fn new(config: Config) -> Self {
        Self {
            config,
            http_client: httpclient::Client::new(),
        }
    }

    pub async fn main_resumen(&self, filter: DateFilter) -> Result<()> {
        let (filtered, summary) = self.load_filtered(&filter).await?;
        print_dashboard(&filter, &filtered, &summary);
        Ok(())
    }

    pub async fn main_consejo(&self, filter: DateFilter) -> Result<()> {
        self.config.advice.require_api_key()?;
        let (filtered, summary) = self.load_filtered(&filter).await?;
        print_summary_cards(&summary);
        println!();

        let spinner = spinner("Generando consejo financiero...");
        let advice = advice_api::get_financial_advice(
            &self.http_client,
            &self.config.advice,
            &summary,
            &filtered,
            &terminal::period_label(&filter),
        )
        .await;
        spinner.finish_and_clear();

        println!("{}", style_header("Consejo financiero:"));
        match advice {
            Some(text) => println!("{text}"),
            None => println!("No se pudo generar el consejo financiero."),
        }
        Ok(())
    }

    /// One fetch per invocation. The fetched set is an immutable snapshot;
    /// filtering and aggregation are pure functions over it.
    async fn load_filtered(&self, filter: &DateFilter) -> Result<(Vec<Transaction>, Summary)> {
        let spinner = spinner("Cargando datos financieros...");
        let transactions =
            sheet_api::fetch_transactions(&self.http_client, &self.config.sheet_url).await;
        spinner.finish_and_clear();
        let transactions = transactions.context("Error al cargar los datos")?;

        let filtered = filter_transactions(&transactions, filter);
        let summary = summarize(&filtered);
        Ok((filtered, summary))
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message);
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner
}

fn print_dashboard(filter: &DateFilter, transactions: &[Transaction], summary: &Summary) {
    println!("{}", style_header("Mis Finanzas"));
    println!("{}", style(terminal::period_label(filter)).italic());
    println!();
    print_summary_cards(summary);
    println!();
    println!("{}", style_header("Transacciones:"));
    if transactions.is_empty() {
        println!("No hay transacciones en este período");
    } else {
        let printer = BulletPointPrinter::new();
        for transaction in transactions {
            print_transaction(&printer, transaction);
        }
    }
}

fn print_summary_cards(summary: &Summary) {
    let printer = BulletPointPrinter::new();
    printer.print_item(format!(
        "{} {}",
        summary_label("Balance total:"),
        style_balance(summary.balance),
    ));
    printer.print_item(format!(
        "{} {}",
        summary_label("Total ventas:"),
        style(terminal::format_mxn(summary.total_ventas)).green(),
    ));
    printer.print_item(format!(
        "{} {}",
        summary_label("Total gastos:"),
        style(terminal::format_mxn(summary.total_gastos)).red(),
    ));
}

fn summary_label(label: &str) -> String {
    pad_str(label, 15, Alignment::Left, None).to_string()
}

fn print_transaction(printer: &BulletPointPrinter, transaction: &Transaction) {
    printer.print_item(format!(
        "{} {} {} {}",
        style_date(transaction.date),
        pad_str(
            &style_amount(transaction).to_string(),
            15,
            Alignment::Right,
            None
        ),
        style(&transaction.description).blue(),
        style_payment(&transaction.payment),
    ));
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_date(date: chrono::NaiveDate) -> StyledObject<String> {
    style(format_date(date)).cyan()
}

fn style_balance(balance: Decimal) -> StyledObject<String> {
    let styled = style(terminal::format_mxn(balance)).bold();
    if balance < Decimal::ZERO {
        styled.red()
    } else {
        styled.green()
    }
}

fn style_amount(transaction: &Transaction) -> StyledObject<String> {
    match transaction.kind {
        TransactionKind::Gasto => {
            style(format!("-{}", terminal::format_mxn(transaction.amount))).red()
        }
        TransactionKind::Venta => {
            style(format!("+{}", terminal::format_mxn(transaction.amount))).green()
        }
    }
}

fn style_payment(payment: &str) -> StyledObject<String> {
    style(format!("[{payment}]")).yellow()
}
