//! Report command handlers

use anyhow::Result;

use circ_core::Library;

use crate::output::Output;

/// Print the library summary.
pub fn summary(library: &Library, output: &Output) -> Result<()> {
    output.print_summary(library);
    Ok(())
}

/// Print every member's borrowed items.
pub fn members(library: &Library, output: &Output) -> Result<()> {
    output.print_members(library);
    Ok(())
}

/// List catalog items with availability.
pub fn items(library: &Library, output: &Output) -> Result<()> {
    output.print_items(library);
    Ok(())
}
