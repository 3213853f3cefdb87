//! Report rendering
//!
//! Fixed-format string reports over the library: the per-member grouped
//! loan listing, the whole-catalog summary, and the all-members report.
//! Downstream consumers parse these strings, so the separators and
//! group order are part of the contract.

use crate::library::Library;
use crate::models::{Category, Member};

impl Library {
    /// One-line listing of a member's loans, grouped by category.
    ///
    /// Groups appear in [`Category::ALL`] order joined with `" | "`;
    /// details inside a group keep borrow order, joined with `"; "`.
    pub fn member_listing(&self, member: &Member) -> String {
        if member.loans.is_empty() {
            return "No borrowed items".to_string();
        }
        self.loan_groups(member).join(" | ")
    }

    /// Whole-catalog summary: every item's detail line, then each member
    /// with their open-loan count.
    pub fn summary(&self) -> String {
        let items = self
            .items()
            .iter()
            .map(|item| item.details())
            .collect::<Vec<_>>()
            .join("\n");
        let members = self
            .members()
            .iter()
            .map(|m| format!("{} (Borrowed: {})", m.name, m.loan_count()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Items:\n{}\n\nMembers:\n{}", items, members)
    }

    /// Every member's loan listing, one group per line, blocks separated
    /// by a blank line.
    pub fn members_report(&self) -> String {
        self.members()
            .iter()
            .map(|member| {
                let listing = if member.loans.is_empty() {
                    "No borrowed items".to_string()
                } else {
                    self.loan_groups(member).join("\n")
                };
                format!("{}:\n{}", member.name, listing)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Non-empty `"<Group>: detail; detail"` strings in canonical order.
    fn loan_groups(&self, member: &Member) -> Vec<String> {
        let loans = self.loans_for(member);
        Category::ALL
            .iter()
            .filter_map(|category| {
                let details = loans
                    .iter()
                    .filter(|item| item.category() == *category)
                    .map(|item| item.details())
                    .collect::<Vec<_>>();
                if details.is_empty() {
                    None
                } else {
                    Some(format!("{}: {}", category.group_label(), details.join("; ")))
                }
            })
            .collect()
    }
}
