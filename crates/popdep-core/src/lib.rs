//! # popdep-core: Department Population Table
//!
//! Turns the INSEE "estimation de population par département" CSV into
//! structured department records and answers the two lookups the API
//! serves: list every department, and fetch one by code.
//!
//! ## Pipeline
//!
//! ```text
//! CSV (';', two header rows)
//!   → header::repair_header      forward-fill the group row
//!   → table::PopulationTable     resolve column layout, keep raw rows
//!   → query                      list / find by code, on demand
//!   → record::DepartmentRecord   nested JSON shape
//! ```
//!
//! ## Crate Policy
//!
//! - The table is immutable once loaded. There is no write path.
//! - Records are derived per call from the raw row; nothing is cached.
//! - Unparseable numeric cells become `None`, never an error.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod header;
pub mod number;
pub mod query;
pub mod record;
pub mod summary;
pub mod table;

pub use error::PopulationError;
pub use header::{repair_header, ColumnLabel, DEPARTMENTS_GROUP};
pub use number::clean_number;
pub use query::{is_listed_code, SPECIAL_CODES};
pub use record::{AgeBracket, AgeBreakdown, DepartmentRecord, PopulationGroup};
pub use summary::{aggregate, FRANCE_ID, FRANCE_NAME};
pub use table::PopulationTable;
