use crate::utils::error::{Result, UnitQueryError};
use std::fs;
use std::io::{self, BufRead};

/// Where the CLI reads its queries from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    Inline(String),
    File(String),
    Stdin,
}

impl QueryInput {
    pub fn from_args(inline: Option<String>, input: Option<&str>) -> Result<Self> {
        match (inline, input) {
            (Some(query), None) => Ok(QueryInput::Inline(query)),
            (None, Some("-")) => Ok(QueryInput::Stdin),
            (None, Some(path)) => Ok(QueryInput::File(path.to_string())),
            (Some(_), Some(_)) => Err(UnitQueryError::ConfigError {
                message: "pass either an inline query or --input, not both".to_string(),
            }),
            (None, None) => Err(UnitQueryError::MissingConfigError {
                field: "query".to_string(),
            }),
        }
    }

    pub fn is_batch(&self) -> bool {
        !matches!(self, QueryInput::Inline(_))
    }

    /// Blank lines are skipped; surrounding `\r` from CRLF files is dropped.
    pub fn read_queries(&self) -> Result<Vec<String>> {
        match self {
            QueryInput::Inline(query) => Ok(vec![query.clone()]),
            QueryInput::File(path) => {
                let content = fs::read_to_string(path)?;
                Ok(collect_lines(content.lines().map(str::to_string)))
            }
            QueryInput::Stdin => {
                let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
                Ok(collect_lines(lines.into_iter()))
            }
        }
    }
}

fn collect_lines(lines: impl Iterator<Item = String>) -> Vec<String> {
    lines
        .map(|line| line.trim_end_matches('\r').to_string())
        .filter(|line| !line.trim().is_empty())
        .collect()
}
