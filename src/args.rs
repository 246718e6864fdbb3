use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::DateFilter;
use crate::model;

/// Dashboard for the income/expense spreadsheet: filter by date, see the
/// totals, and optionally ask for financial advice.
#[derive(Parser, Debug)]
pub struct Args {
    /// Path to the YAML config file
    #[clap(short, long, default_value = "misfinanzas.yaml")]
    pub config: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the summary cards and the transaction table
    Resumen {
        #[clap(flatten)]
        filter: FilterArgs,
    },

    /// Ask the advice service for an analysis of the filtered period
    Consejo {
        #[clap(flatten)]
        filter: FilterArgs,
    },
}

/// Date selection shared by all subcommands. Exact date and range are
/// mutually exclusive; no flags means no filtering.
#[derive(Debug, clap::Args)]
pub struct FilterArgs {
    /// Only transactions on exactly this day
    #[clap(long, value_name = "DD-MM-AAAA", value_parser = parse_fecha, conflicts_with_all = ["desde", "hasta"])]
    pub fecha: Option<NaiveDate>,

    /// Start of an inclusive date range
    #[clap(long, value_name = "DD-MM-AAAA", value_parser = parse_fecha, requires = "hasta")]
    pub desde: Option<NaiveDate>,

    /// End of an inclusive date range
    #[clap(long, value_name = "DD-MM-AAAA", value_parser = parse_fecha, requires = "desde")]
    pub hasta: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> DateFilter {
        if let Some(fecha) = self.fecha {
            DateFilter::ExactDate(fecha)
        } else if let (Some(desde), Some(hasta)) = (self.desde, self.hasta) {
            DateFilter::DateRange {
                start: desde,
                end: hasta,
            }
        } else {
            DateFilter::All
        }
    }
}

fn parse_fecha(value: &str) -> Result<NaiveDate, String> {
    model::parse_date(value).map_err(|_| format!("'{value}' is not a DD-MM-AAAA date"))
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("misfinanzas").chain(argv.iter().copied()))
    }

    #[test]
    fn no_flags_means_no_filter() {
        let args = args(&["resumen"]).unwrap();
        let Command::Resumen { filter } = args.command else {
            panic!("expected resumen");
        };
        assert_eq!(DateFilter::All, filter.to_filter());
    }

    #[test]
    fn exact_date_filter() {
        let args = args(&["resumen", "--fecha", "01-06-2024"]).unwrap();
        let Command::Resumen { filter } = args.command else {
            panic!("expected resumen");
        };
        assert_eq!(
            DateFilter::ExactDate(model::parse_date("01-06-2024").unwrap()),
            filter.to_filter(),
        );
    }

    #[test]
    fn range_filter() {
        let args = args(&["consejo", "--desde", "01-06-2024", "--hasta", "02-06-2024"]).unwrap();
        let Command::Consejo { filter } = args.command else {
            panic!("expected consejo");
        };
        assert_eq!(
            DateFilter::DateRange {
                start: model::parse_date("01-06-2024").unwrap(),
                end: model::parse_date("02-06-2024").unwrap(),
            },
            filter.to_filter(),
        );
    }

    #[test]
    fn exact_date_and_range_are_mutually_exclusive() {
        assert!(args(&[
            "resumen",
            "--fecha",
            "01-06-2024",
            "--desde",
            "01-06-2024",
            "--hasta",
            "02-06-2024",
        ])
        .is_err());
    }

    #[test]
    fn range_ends_must_be_given_together() {
        assert!(args(&["resumen", "--desde", "01-06-2024"]).is_err());
        assert!(args(&["resumen", "--hasta", "02-06-2024"]).is_err());
    }

    #[test]
    fn bad_date_is_a_usage_error() {
        assert!(args(&["resumen", "--fecha", "2024-06-01"]).is_err());
        assert!(args(&["resumen", "--fecha", "mañana"]).is_err());
    }
}
