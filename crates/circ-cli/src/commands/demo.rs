//! Demo command handler - replay the built-in sample session

use anyhow::Result;
use serde_json::json;

use circ_core::CatalogFile;

use crate::output::{members_json, session_entry, summary_json, Output, OutputFormat};

/// Build the sample catalog, run its transaction script, and print the
/// outcome lines followed by the two standard reports.
pub fn run(output: &Output) -> Result<()> {
    let (library, session) = super::settle(CatalogFile::sample());

    match output.format {
        OutputFormat::Human => {
            for (_, outcome) in &session {
                println!("{}", outcome);
            }
            println!();
            println!("--- Library summary ---");
            println!("{}", library.summary());
            println!();
            println!("--- Borrowed items ---");
            println!("{}", library.members_report());
        }
        OutputFormat::Json => {
            let value = json!({
                "session": session.iter().map(session_entry).collect::<Vec<_>>(),
                "summary": summary_json(&library),
                "members": members_json(&library),
            });
            println!("{}", serde_json::to_string_pretty(&value).unwrap());
        }
        OutputFormat::Quiet => {}
    }

    Ok(())
}
