use crate::config::toml_config::OutputFormat;
use crate::domain::model::{format_value, ConversionResult, MatchCase, QuantityDomain};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// All results produced by one input line.
#[derive(Debug, Clone)]
pub struct QueryReport {
    pub query: String,
    pub results: Vec<ConversionResult>,
}

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    query: &'a str,
    domain: QuantityDomain,
    case: MatchCase,
    value: f64,
    unit: &'a str,
}

/// CSV/TSV row; the value is rounded to the configured precision.
#[derive(Debug, Serialize)]
struct TableRow<'a> {
    query: &'a str,
    domain: QuantityDomain,
    case: MatchCase,
    value: String,
    unit: &'a str,
}

fn rows(reports: &[QueryReport]) -> impl Iterator<Item = ResultRow<'_>> {
    reports.iter().flat_map(|report| {
        report.results.iter().map(move |result| ResultRow {
            query: &report.query,
            domain: result.domain,
            case: result.case,
            value: result.value,
            unit: &result.unit,
        })
    })
}

/// Writes reports in the requested format. `show_query` prefixes text lines
/// with their source query (batch input).
pub fn render<W: Write>(
    mut writer: W,
    reports: &[QueryReport],
    format: OutputFormat,
    precision: usize,
    show_query: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                for result in &report.results {
                    if show_query {
                        writeln!(writer, "{} = {}", report.query, result.display(precision))?;
                    } else {
                        writeln!(writer, "{}", result.display(precision))?;
                    }
                }
            }
        }
        OutputFormat::Json => {
            let rows: Vec<ResultRow<'_>> = rows(reports).collect();
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Tsv { b'\t' } else { b',' };
            let mut csv_writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(&mut writer);
            for row in rows(reports) {
                csv_writer.serialize(TableRow {
                    query: row.query,
                    domain: row.domain,
                    case: row.case,
                    value: format_value(row.value, precision),
                    unit: row.unit,
                })?;
            }
            csv_writer.flush()?;
        }
    }

    Ok(())
}
