//! JSON output helpers.

use std::io::Write;

use serde::Serialize;

/// Write `value` as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, compact: bool) -> anyhow::Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
