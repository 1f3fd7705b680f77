//! # Population Table Loader
//!
//! Reads the semicolon-delimited CSV once, repairs its two-level header,
//! resolves where every needed column lives, and keeps the raw rows in
//! source order. Records are materialized from those rows on demand.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;

use crate::error::PopulationError;
use crate::header::{repair_header, ColumnLabel, CODE_LABEL, DEPARTMENTS_GROUP, NAME_LABEL};
use crate::number::clean_number;
use crate::record::{AgeBracket, AgeBreakdown, DepartmentRecord, PopulationGroup};

const BOM: char = '\u{feff}';

/// Column positions resolved from the repaired header.
#[derive(Debug, Clone)]
struct ColumnLayout {
    code: usize,
    name: Option<usize>,
    /// `counts[group][bracket]`, indexed like `PopulationGroup::ALL` and `AgeBracket::ALL`.
    counts: [[usize; 6]; 3],
}

impl ColumnLayout {
    fn resolve(columns: &[ColumnLabel]) -> Result<Self, PopulationError> {
        let find = |group: &str, label: &str| columns.iter().position(|c| c.is(group, label));
        let require = |group: &str, label: &str| {
            find(group, label).ok_or_else(|| PopulationError::missing_column(group, label))
        };

        let code = require(DEPARTMENTS_GROUP, CODE_LABEL)?;
        let name = find(DEPARTMENTS_GROUP, NAME_LABEL);

        let mut counts = [[0usize; 6]; 3];
        for (g, group) in PopulationGroup::ALL.into_iter().enumerate() {
            for (b, bracket) in AgeBracket::ALL.into_iter().enumerate() {
                counts[g][b] = require(group.label(), bracket.label())?;
            }
        }

        Ok(Self { code, name, counts })
    }
}

/// The loaded CSV: repaired header plus raw rows, immutable after load.
#[derive(Debug, Clone)]
pub struct PopulationTable {
    columns: Vec<ColumnLabel>,
    layout: ColumnLayout,
    rows: Vec<StringRecord>,
}

impl PopulationTable {
    /// Load the table from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PopulationError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PopulationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load the table from any reader yielding the CSV bytes.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, PopulationError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = reader.records();

        let groups = records
            .next()
            .transpose()?
            .ok_or(PopulationError::MissingHeader { row: 1 })?;
        let labels = records
            .next()
            .transpose()?
            .ok_or(PopulationError::MissingHeader { row: 2 })?;

        let groups: Vec<&str> = groups
            .iter()
            .enumerate()
            .map(|(i, cell)| if i == 0 { cell.trim_start_matches(BOM) } else { cell })
            .collect();
        let labels: Vec<&str> = labels.iter().collect();
        let columns = repair_header(&groups, &labels);
        let layout = ColumnLayout::resolve(&columns)?;

        let rows = records.collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            columns,
            layout,
            rows,
        })
    }

    /// Repaired column headers, in source order.
    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    /// Number of data rows, listed or not.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file had no data rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row as a record, in source order, without filtering.
    pub fn records(&self) -> impl Iterator<Item = DepartmentRecord> + '_ {
        self.rows.iter().map(|row| self.build_record(row))
    }

    /// Trimmed department code of a raw row.
    pub(crate) fn row_code<'a>(&self, row: &'a StringRecord) -> &'a str {
        row.get(self.layout.code).unwrap_or("").trim()
    }

    pub(crate) fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub(crate) fn build_record(&self, row: &StringRecord) -> DepartmentRecord {
        let name = self
            .layout
            .name
            .and_then(|i| row.get(i))
            .map(|n| n.trim().to_string())
            .unwrap_or_default();

        let mut record = DepartmentRecord {
            id: self.row_code(row).to_string(),
            name,
            ensemble: AgeBreakdown::default(),
            hommes: AgeBreakdown::default(),
            femmes: AgeBreakdown::default(),
        };

        for (g, group) in PopulationGroup::ALL.into_iter().enumerate() {
            let breakdown = record.group_mut(group);
            for (b, bracket) in AgeBracket::ALL.into_iter().enumerate() {
                *breakdown.get_mut(bracket) = clean_number(row.get(self.layout.counts[g][b]));
            }
        }

        record
    }
}
