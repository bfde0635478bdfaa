use anyhow::Result;
use serde::Serialize;

use crate::types::OutputFormat;

/// Print a value as pretty JSON, or hand it to the plain renderer.
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, plain: impl FnOnce(&T)) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Plain => plain(value),
    }
    Ok(())
}
