//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use circ_core::{Action, Library, Missing, Outcome, Transaction};
use serde_json::json;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print the outcome of a single circulation request
    pub fn print_outcome(&self, outcome: &Outcome) {
        match self.format {
            OutputFormat::Human => println!("{}", outcome),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&outcome_json(outcome)).unwrap()
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a scripted session's outcomes, one per transaction
    pub fn print_session(&self, session: &[(Transaction, Outcome)]) {
        match self.format {
            OutputFormat::Human => {
                for (_, outcome) in session {
                    println!("{}", outcome);
                }
            }
            OutputFormat::Json => {
                let entries: Vec<_> = session.iter().map(session_entry).collect();
                println!("{}", serde_json::to_string_pretty(&entries).unwrap());
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print the library summary
    pub fn print_summary(&self, library: &Library) {
        match self.format {
            OutputFormat::Human => println!("{}", library.summary()),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary_json(library)).unwrap()
                );
            }
            OutputFormat::Quiet => {
                println!("{} {}", library.item_count(), library.member_count());
            }
        }
    }

    /// Print every member's borrowed items
    pub fn print_members(&self, library: &Library) {
        match self.format {
            OutputFormat::Human => println!("{}", library.members_report()),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&members_json(library)).unwrap()
                );
            }
            OutputFormat::Quiet => {
                for member in library.members() {
                    println!("{}", member.id);
                }
            }
        }
    }

    /// Print the item list with availability
    pub fn print_items(&self, library: &Library) {
        match self.format {
            OutputFormat::Human => {
                if library.items().is_empty() {
                    println!("No items in the catalog.");
                    return;
                }
                for item in library.items() {
                    let status = if item.available { "available" } else { "on loan" };
                    println!("{:<9} | {}", status, item.details());
                }
                println!("\n{} item(s)", library.item_count());
            }
            OutputFormat::Json => {
                let items: Vec<_> = library
                    .items()
                    .iter()
                    .map(|item| {
                        json!({
                            "id": item.id,
                            "details": item.details(),
                            "available": item.available,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&items).unwrap());
            }
            OutputFormat::Quiet => {
                for item in library.items() {
                    println!("{}", item.id);
                }
            }
        }
    }
}

/// JSON object for one outcome
pub fn outcome_json(outcome: &Outcome) -> serde_json::Value {
    json!({
        "status": outcome_status(outcome),
        "message": outcome.to_string(),
    })
}

/// JSON object for one scripted transaction and its outcome
pub fn session_entry((transaction, outcome): &(Transaction, Outcome)) -> serde_json::Value {
    let action = match transaction.action {
        Action::Borrow => "borrow",
        Action::Return => "return",
    };
    json!({
        "action": action,
        "member": transaction.member,
        "item": transaction.item,
        "status": outcome_status(outcome),
        "message": outcome.to_string(),
    })
}

/// JSON object for the library summary
pub fn summary_json(library: &Library) -> serde_json::Value {
    json!({
        "items": library
            .items()
            .iter()
            .map(|item| {
                json!({
                    "id": item.id,
                    "details": item.details(),
                    "available": item.available,
                })
            })
            .collect::<Vec<_>>(),
        "members": library
            .members()
            .iter()
            .map(|m| json!({"id": m.id, "name": m.name, "borrowed": m.loan_count()}))
            .collect::<Vec<_>>(),
    })
}

/// JSON array of members with their resolved loan detail lines
pub fn members_json(library: &Library) -> serde_json::Value {
    let members: Vec<_> = library
        .members()
        .iter()
        .map(|member| {
            let loans: Vec<_> = library
                .loans_for(member)
                .iter()
                .map(|item| item.details())
                .collect();
            json!({"id": member.id, "name": member.name, "loans": loans})
        })
        .collect();
    json!(members)
}

fn outcome_status(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Success(_) => "success",
        Outcome::ItemUnavailable => "item_unavailable",
        Outcome::NotFound(Missing::Member) => "member_not_found",
        Outcome::NotFound(Missing::MemberOrItem) => "member_or_item_not_found",
        Outcome::NotFound(Missing::Loan) => "loan_not_found",
    }
}
