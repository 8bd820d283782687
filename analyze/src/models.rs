use std::collections::{BTreeSet, HashMap};

use crate::error::{AnalysisError, Result};

/// One respondent's answers, keyed by question column. Empty answers are
/// simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRow {
    values: HashMap<String, String>,
}

impl ResponseRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = ResponseRow::new();
        for (column, value) in pairs {
            row.insert(column, value);
        }
        row
    }

    /// Stores an answer; empty strings are treated as missing.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.values.insert(column.into(), value);
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// The loaded survey: header schema plus rows. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseTable {
    columns: Vec<String>,
    rows: Vec<ResponseRow>,
}

impl ResponseTable {
    pub fn new(columns: Vec<String>, rows: Vec<ResponseRow>) -> Self {
        ResponseTable { columns, rows }
    }

    /// Builds a table whose schema is every column any row answers.
    pub fn from_rows(rows: Vec<ResponseRow>) -> Self {
        let columns: BTreeSet<String> = rows
            .iter()
            .flat_map(|row| row.columns().map(str::to_string))
            .collect();
        ResponseTable {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ResponseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Fails on the first required column the schema lacks.
    pub fn validate_columns<S: AsRef<str>>(&self, required: &[S]) -> Result<()> {
        match required.iter().find(|column| !self.has_column(column.as_ref())) {
            Some(missing) => Err(AnalysisError::Schema(missing.as_ref().to_string())),
            None => Ok(()),
        }
    }

    /// All answers to one question, `None` where the respondent left it blank.
    pub fn column_values(&self, column: &str) -> Result<Vec<Option<&str>>> {
        self.validate_columns(&[column])?;
        Ok(self.rows.iter().map(|row| row.get(column)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_are_absent() {
        let row = ResponseRow::from_pairs([("q1", "hope"), ("q2", "")]);
        assert_eq!(row.get("q1"), Some("hope"));
        assert_eq!(row.get("q2"), None);
    }

    #[test]
    fn test_from_rows_collects_schema() {
        let table = ResponseTable::from_rows(vec![
            ResponseRow::from_pairs([("b", "x")]),
            ResponseRow::from_pairs([("a", "y")]),
        ]);
        assert_eq!(table.columns(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_validate_reports_missing_column() {
        let table = ResponseTable::new(vec!["q1".into()], vec![]);
        assert!(table.validate_columns(&["q1"]).is_ok());
        match table.validate_columns(&["q1", "q9"]) {
            Err(AnalysisError::Schema(column)) => assert_eq!(column, "q9"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_column_values() {
        let table = ResponseTable::new(
            vec!["q1".into()],
            vec![ResponseRow::from_pairs([("q1", "a")]), ResponseRow::new()],
        );
        assert_eq!(table.column_values("q1").unwrap(), vec![Some("a"), None]);
    }
}
