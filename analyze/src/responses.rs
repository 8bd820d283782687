//! Loading survey responses and turning them into topic-model documents.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{ResponseRow, ResponseTable};

/// Field separator of the uploaded file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Pick `,` only when unquoted commas outnumber unquoted semicolons in
    /// the header line, otherwise `;`.
    #[default]
    Auto,
    Comma,
    Semicolon,
}

impl Delimiter {
    fn resolve(self, header_line: &str) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Auto => {
                let (semicolons, commas) = count_unquoted_separators(header_line);
                if commas > semicolons {
                    b','
                } else {
                    b';'
                }
            }
        }
    }
}

/// Counts `;` and `,` outside double-quoted cells.
fn count_unquoted_separators(line: &str) -> (usize, usize) {
    let mut in_quotes = false;
    let (mut semicolons, mut commas) = (0, 0);
    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => semicolons += 1,
            ',' if !in_quotes => commas += 1,
            _ => {}
        }
    }
    (semicolons, commas)
}

/// Reads a delimited file with a header row and checks that every
/// `required` column is present before returning.
pub fn read_responses<R: Read, S: AsRef<str>>(
    mut reader: R,
    delimiter: Delimiter,
    required: &[S],
) -> Result<ResponseTable> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let header_line = raw.lines().next().unwrap_or("");
    let separator = delimiter.resolve(header_line);
    debug!("Reading responses - delimiter={:?}", separator as char);

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(separator)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = ResponseRow::from_pairs(
            columns
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.as_str(), value)),
        );
        rows.push(row);
    }

    let table = ResponseTable::new(columns, rows);
    table.validate_columns(required)?;
    info!(
        "Loaded responses - rows={}, columns={}",
        table.len(),
        table.columns().len()
    );
    Ok(table)
}

pub fn read_responses_from_path<S: AsRef<str>>(
    path: &Path,
    delimiter: Delimiter,
    required: &[S],
) -> Result<ResponseTable> {
    let file = File::open(path)?;
    read_responses(file, delimiter, required)
}

/// Joins the given columns of every row with single spaces, in column order.
/// Missing answers contribute an empty string, so a row answering only the
/// first of two columns yields `"answer "`.
pub fn combine<S: AsRef<str>>(table: &ResponseTable, columns: &[S]) -> Result<Vec<String>> {
    table.validate_columns(columns)?;

    let documents = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(column.as_ref()).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Ok(documents)
}

/// The documents for one question, one per respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDocuments {
    pub column: String,
    pub documents: Vec<String>,
}

/// Per-question mode: every column becomes its own document set. The whole
/// schema is checked before any column is combined.
pub fn combine_each<S: AsRef<str>>(
    table: &ResponseTable,
    columns: &[S],
) -> Result<Vec<QuestionDocuments>> {
    table.validate_columns(columns)?;
    columns
        .iter()
        .map(|column| {
            Ok(QuestionDocuments {
                column: column.as_ref().to_string(),
                documents: combine(table, &[column.as_ref()])?,
            })
        })
        .collect()
}
