//! # Two-Level Header Repair
//!
//! The source CSV spreads its header over two rows. The first row only
//! names a group on the first column it spans (merged cells), leaving the
//! rest blank:
//!
//! ```text
//! Départements;;Ensemble;;;;;;Hommes;;;;;;Femmes;;;;;
//! Code;Nom;0-19;20-39;40-59;60-74;75+;Total;0-19;...
//! ```
//!
//! [`repair_header`] forward-fills the group row so every column carries
//! its `(group, label)` pair, then names the department-name column
//! explicitly.

use std::fmt;

/// Group label of the department code and name columns.
pub const DEPARTMENTS_GROUP: &str = "Départements";

/// Sub-label of the department code column.
pub const CODE_LABEL: &str = "Code";

/// Sub-label of the department name column.
pub const NAME_LABEL: &str = "Nom";

/// Prefix spreadsheet exports use for the blank half of a merged header.
const PLACEHOLDER_PREFIX: &str = "Unnamed";

/// One repaired column header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnLabel {
    /// Top-level group, `None` when no named group precedes the column.
    pub group: Option<String>,
    /// Second-level label, kept as written (trimmed).
    pub label: String,
}

impl ColumnLabel {
    /// Build a label with a known group.
    pub fn new(group: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            label: label.into(),
        }
    }

    /// Whether this column is `(group, label)`.
    pub fn is(&self, group: &str, label: &str) -> bool {
        self.group.as_deref() == Some(group) && self.label == label
    }
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.group {
            Some(group) => write!(f, "({group}, {})", self.label),
            None => write!(f, "(-, {})", self.label),
        }
    }
}

fn is_placeholder(group: &str) -> bool {
    group.is_empty() || group.starts_with(PLACEHOLDER_PREFIX)
}

/// Rebuild `(group, label)` pairs from the two raw header rows.
///
/// Scans left to right carrying the last non-placeholder group. A group
/// cell is a placeholder when it is blank or starts with `Unnamed`. Both
/// levels are trimmed. Rows of unequal length are padded with blanks.
///
/// A `Nom` column left without a group afterwards is relabelled
/// `("Départements", "Nom")`.
pub fn repair_header<G, L>(groups: &[G], labels: &[L]) -> Vec<ColumnLabel>
where
    G: AsRef<str>,
    L: AsRef<str>,
{
    let width = groups.len().max(labels.len());
    let mut current: Option<String> = None;
    let mut columns = Vec::with_capacity(width);

    for i in 0..width {
        let group = groups.get(i).map_or("", |g| g.as_ref().trim());
        let label = labels.get(i).map_or("", |l| l.as_ref().trim());

        if !is_placeholder(group) {
            current = Some(group.to_string());
        }

        let group = match &current {
            None if label == NAME_LABEL => Some(DEPARTMENTS_GROUP.to_string()),
            other => other.clone(),
        };

        columns.push(ColumnLabel {
            group,
            label: label.to_string(),
        });
    }

    columns
}
