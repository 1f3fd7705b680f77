//! # API Route Modules
//!
//! - `population`: department listing, lookup by code, national totals.

pub mod population;
