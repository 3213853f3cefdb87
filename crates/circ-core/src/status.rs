//! Circulation outcomes
//!
//! Every borrow/return request resolves to an [`Outcome`] value rather
//! than an error: an unavailable item or a failed lookup is an ordinary
//! result of running a circulation desk, not a fault. The `Display`
//! impl renders the fixed status lines that reports and scripted
//! sessions print.

use std::fmt;

/// What a failed lookup was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// No member with the requested id.
    Member,
    /// Member or item lookup came up empty while handling a borrow.
    MemberOrItem,
    /// The item is not on the member's loan list.
    Loan,
}

/// Result of a borrow or return request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request went through; the message describes what happened.
    Success(String),
    /// The item is already out on loan.
    ItemUnavailable,
    /// A lookup came up empty; nothing was mutated.
    NotFound(Missing),
}

impl Outcome {
    /// Whether the request went through.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(msg) => f.write_str(msg),
            Outcome::ItemUnavailable => f.write_str("Item not available"),
            Outcome::NotFound(Missing::Member) => f.write_str("Member not found"),
            Outcome::NotFound(Missing::MemberOrItem) => f.write_str("Member or Item not found"),
            Outcome::NotFound(Missing::Loan) => f.write_str("Item not found in borrowed list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_displays_message() {
        let outcome = Outcome::Success("The Hobbit borrowed by Alice".to_string());
        assert_eq!(outcome.to_string(), "The Hobbit borrowed by Alice");
        assert!(outcome.is_success());
    }

    #[test]
    fn test_failure_display_lines() {
        assert_eq!(Outcome::ItemUnavailable.to_string(), "Item not available");
        assert_eq!(
            Outcome::NotFound(Missing::Member).to_string(),
            "Member not found"
        );
        assert_eq!(
            Outcome::NotFound(Missing::MemberOrItem).to_string(),
            "Member or Item not found"
        );
        assert_eq!(
            Outcome::NotFound(Missing::Loan).to_string(),
            "Item not found in borrowed list"
        );
    }

    #[test]
    fn test_failures_are_not_success() {
        assert!(!Outcome::ItemUnavailable.is_success());
        assert!(!Outcome::NotFound(Missing::Loan).is_success());
    }
}
