//! Borrow and return command handlers

use anyhow::Result;

use circ_core::Library;

use crate::output::Output;

/// Borrow an item on behalf of a member and print the outcome.
pub fn borrow(library: &mut Library, member_id: &str, item_id: &str, output: &Output) -> Result<()> {
    let outcome = library.borrow(member_id, item_id);
    output.print_outcome(&outcome);
    Ok(())
}

/// Return an item held by a member and print the outcome.
pub fn give_back(
    library: &mut Library,
    member_id: &str,
    item_id: &str,
    output: &Output,
) -> Result<()> {
    let outcome = library.give_back(member_id, item_id);
    output.print_outcome(&outcome);
    Ok(())
}
