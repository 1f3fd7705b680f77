//! # Query Subcommands
//!
//! `list`, `get` and `france`, printing the same JSON the API returns.

use std::io::Write;

use anyhow::bail;
use clap::Args;
use popdep_core::PopulationTable;

use crate::output::write_json;
use crate::DataArgs;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

/// Arguments for the get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Department code, e.g. `01`, `2A`, `974`.
    pub code: String,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Arguments for the france subcommand.
#[derive(Args, Debug)]
pub struct FranceArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

pub fn list<W: Write>(table: &PopulationTable, out: &mut W, compact: bool) -> anyhow::Result<()> {
    write_json(out, &table.list_departments(), compact)
}

/// Print one department, or fail when no row has `code`.
pub fn get<W: Write>(
    table: &PopulationTable,
    code: &str,
    out: &mut W,
    compact: bool,
) -> anyhow::Result<()> {
    match table.find_department(code) {
        Some(record) => write_json(out, &record, compact),
        None => bail!("Département non trouvé: {code}"),
    }
}

pub fn france<W: Write>(table: &PopulationTable, out: &mut W, compact: bool) -> anyhow::Result<()> {
    write_json(out, &table.france_summary(), compact)
}
