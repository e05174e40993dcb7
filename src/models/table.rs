use serde::Serialize;
use serde_json::Value;
use std::io;

use crate::error::{Error, Result};

/// Anything that can write itself out as comma-separated rows.
pub trait ToDelimited {
    /// Write this dataset to `wtr`, with or without the header line and the
    /// leading row-index column.
    fn write_delimited<W: io::Write>(
        &self,
        wtr: &mut csv::Writer<W>,
        header: bool,
        index: bool,
    ) -> Result<()>;

    /// Serialize into an in-memory buffer.
    fn to_delimited(&self, header: bool, index: bool) -> Result<Vec<u8>> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(vec![]);
        self.write_delimited(&mut wtr, header, index)?;
        wtr.into_inner().map_err(|e| Error::Io(e.into_error()))
    }
}

/// Where and how a table is exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub path: String,
    pub header: bool,
    pub index: bool,
}

impl ExportOptions {
    pub const DEFAULT_PATH: &'static str = "df.csv";

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            path: Self::DEFAULT_PATH.to_string(),
            header: true,
            index: true,
        }
    }
}

/// A small in-memory table: named columns, string cells and a row index.
///
/// Unless explicit labels are set with [`Table::with_index`], rows are
/// labelled `0, 1, 2, ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    index_name: Option<String>,
    index: Option<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Build a table from serializable records, one row per record. Columns
    /// are taken from the fields of the first record, in declaration order;
    /// fields missing from later records are left empty.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self> {
        let mut table = Table::default();
        for (index, record) in records.iter().enumerate() {
            let Value::Object(fields) = serde_json::to_value(record)? else {
                return Err(Error::NotARecord { index });
            };
            if index == 0 {
                table.columns = fields.keys().cloned().collect();
            }
            let row = table
                .columns
                .iter()
                .map(|column| fields.get(column).map(cell_text).unwrap_or_default())
                .collect();
            table.rows.push(row);
        }
        Ok(table)
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Name the index column. The name becomes the first header field.
    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = Some(name.into());
        self
    }

    /// Replace the default `0..n` row labels. There must be exactly one
    /// label per row by the time the table is written.
    pub fn with_index<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn index_label(&self, row: usize) -> String {
        match &self.index {
            Some(labels) => labels[row].clone(),
            None => row.to_string(),
        }
    }
}

impl ToDelimited for Table {
    fn write_delimited<W: io::Write>(
        &self,
        wtr: &mut csv::Writer<W>,
        header: bool,
        index: bool,
    ) -> Result<()> {
        if let Some((row, found)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != self.columns.len())
            .map(|(i, r)| (i, r.len()))
        {
            return Err(Error::RaggedRow {
                row,
                expected: self.columns.len(),
                found,
            });
        }

        if let Some(labels) = &self.index
            && labels.len() != self.rows.len()
        {
            return Err(Error::IndexLength {
                expected: self.rows.len(),
                found: labels.len(),
            });
        }

        if header {
            let mut record = Vec::with_capacity(self.columns.len() + 1);
            if index {
                record.push(self.index_name.as_deref().unwrap_or(""));
            }
            record.extend(self.columns.iter().map(String::as_str));
            wtr.write_record(&record)?;
        }

        for (i, row) in self.rows.iter().enumerate() {
            if index {
                let label = self.index_label(i);
                let record = std::iter::once(label.as_str()).chain(row.iter().map(String::as_str));
                wtr.write_record(record)?;
            } else {
                wtr.write_record(row)?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Render one JSON value the way a dataframe writes it to CSV.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
