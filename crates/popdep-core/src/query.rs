//! # Department Queries
//!
//! The two read paths the API exposes. Both scan the table in source order
//! and build records on the fly.
//!
//! Listing applies a code allowlist (plain numeric codes, Corsica and the
//! overseas departments) to drop national subtotals and footnote lines.
//! Lookup by code does not: any raw row, however its code looks, can be
//! fetched directly.

use crate::record::DepartmentRecord;
use crate::table::PopulationTable;

/// Non-numeric or overseas codes accepted by [`is_listed_code`].
pub const SPECIAL_CODES: [&str; 7] = ["2A", "2B", "971", "972", "973", "974", "976"];

/// Whether a (trimmed) code names a department that belongs in the listing.
pub fn is_listed_code(code: &str) -> bool {
    let numeric = !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit());
    numeric || SPECIAL_CODES.contains(&code)
}

impl PopulationTable {
    /// All departments whose code passes [`is_listed_code`], in source order.
    pub fn list_departments(&self) -> Vec<DepartmentRecord> {
        self.rows()
            .iter()
            .filter(|row| is_listed_code(self.row_code(row)))
            .map(|row| self.build_record(row))
            .collect()
    }

    /// Number of rows [`PopulationTable::list_departments`] would return.
    pub fn listed_count(&self) -> usize {
        self.rows()
            .iter()
            .filter(|row| is_listed_code(self.row_code(row)))
            .count()
    }

    /// First row whose trimmed code equals `code` exactly.
    ///
    /// `code` itself is compared as given.
    pub fn find_department(&self, code: &str) -> Option<DepartmentRecord> {
        self.rows()
            .iter()
            .find(|row| self.row_code(row) == code)
            .map(|row| self.build_record(row))
    }
}
