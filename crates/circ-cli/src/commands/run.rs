//! Run command handler - apply a catalog's scripted transactions

use anyhow::Result;

use circ_core::CatalogFile;

use crate::output::Output;

/// Apply the catalog's transaction script, printing each outcome.
pub fn apply(catalog: CatalogFile, output: &Output) -> Result<()> {
    let (_, session) = super::settle(catalog);
    output.print_session(&session);
    Ok(())
}
