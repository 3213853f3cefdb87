//! Data models for the lending catalog
//!
//! Defines the core data structures: `Item` with its kind-specific
//! metadata, `Member`, and the `Loan` records linking the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::Outcome;

/// The five item categories, used to group member listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Book,
    Magazine,
    Dvd,
    Newspaper,
    Thesis,
}

impl Category {
    /// Canonical grouping order for reports.
    pub const ALL: [Category; 5] = [
        Category::Book,
        Category::Magazine,
        Category::Dvd,
        Category::Newspaper,
        Category::Thesis,
    ];

    /// Plural heading used when a member's loans are grouped by category.
    pub fn group_label(&self) -> &'static str {
        match self {
            Category::Book => "Books",
            Category::Magazine => "Magazines",
            Category::Dvd => "DVDs",
            Category::Newspaper => "Newspapers",
            Category::Thesis => "Theses",
        }
    }
}

/// Kind-specific metadata for a catalog item.
///
/// Serialized with an internal `kind` tag so catalog files can declare
/// items as `kind = "book"` plus the matching field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    Book { author: String },
    Magazine { issue: String },
    Dvd { minutes: u32 },
    Newspaper { date: String },
    Thesis { researcher: String },
}

impl ItemKind {
    /// The category this kind belongs to.
    pub fn category(&self) -> Category {
        match self {
            ItemKind::Book { .. } => Category::Book,
            ItemKind::Magazine { .. } => Category::Magazine,
            ItemKind::Dvd { .. } => Category::Dvd,
            ItemKind::Newspaper { .. } => Category::Newspaper,
            ItemKind::Thesis { .. } => Category::Thesis,
        }
    }
}

/// A catalog entry with an availability flag and kind-specific metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier assigned by the catalog maintainer (e.g. "B001")
    pub id: String,
    /// Display title
    pub title: String,
    /// Whether the item is on the shelf (false while on loan)
    #[serde(default = "default_available")]
    pub available: bool,
    /// Kind-specific metadata
    #[serde(flatten)]
    pub kind: ItemKind,
}

fn default_available() -> bool {
    true
}

impl Item {
    /// Create a new, available item.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            available: true,
            kind,
        }
    }

    /// The category this item belongs to.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// One-line description in the catalog's fixed per-kind format.
    pub fn details(&self) -> String {
        match &self.kind {
            ItemKind::Book { author } => {
                format!("Book: {} by {} (ID: {})", self.title, author, self.id)
            }
            ItemKind::Magazine { issue } => {
                format!("Magazine: {}, Issue: {} (ID: {})", self.title, issue, self.id)
            }
            ItemKind::Dvd { minutes } => {
                format!("DVD: {}, Duration: {} mins (ID: {})", self.title, minutes, self.id)
            }
            ItemKind::Newspaper { date } => {
                format!("Newspaper: {}, Date: {} (ID: {})", self.title, date, self.id)
            }
            ItemKind::Thesis { researcher } => {
                format!("Thesis: {} by {} (ID: {})", self.title, researcher, self.id)
            }
        }
    }

    /// Hand the item to a borrower.
    ///
    /// Refuses without mutating anything when the item is already out.
    pub fn check_out(&mut self, borrower: &str) -> Outcome {
        if !self.available {
            return Outcome::ItemUnavailable;
        }
        self.available = false;
        Outcome::Success(format!("{} borrowed by {}", self.title, borrower))
    }

    /// Put the item back on the shelf.
    ///
    /// Unconditional: whether the caller actually holds the item is
    /// checked against the member's loan list, not here.
    pub fn check_in(&mut self) -> Outcome {
        self.available = true;
        Outcome::Success(format!("{} returned", self.title))
    }
}

/// One member's hold on one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Id of the borrowed item
    pub item_id: String,
    /// When the item was checked out
    pub borrowed_at: DateTime<Utc>,
}

impl Loan {
    /// Record a loan starting now.
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            borrowed_at: Utc::now(),
        }
    }
}

/// A registered borrower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier (e.g. "M1001")
    pub id: String,
    /// Display name
    pub name: String,
    /// Currently held items, in borrow order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loans: Vec<Loan>,
}

impl Member {
    /// Register a member with no loans.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            loans: Vec::new(),
        }
    }

    /// Whether this member currently holds the item.
    pub fn has_loan(&self, item_id: &str) -> bool {
        self.loans.iter().any(|l| l.item_id == item_id)
    }

    /// Record a new loan. Adding an item already on the list is a no-op.
    pub fn add_loan(&mut self, loan: Loan) {
        if !self.has_loan(&loan.item_id) {
            self.loans.push(loan);
        }
    }

    /// Drop the loan for `item_id`, returning it if it was held.
    pub fn remove_loan(&mut self, item_id: &str) -> Option<Loan> {
        let pos = self.loans.iter().position(|l| l.item_id == item_id)?;
        Some(self.loans.remove(pos))
    }

    /// Number of items currently on loan to this member.
    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbit() -> Item {
        Item::new(
            "B001",
            "The Hobbit",
            ItemKind::Book {
                author: "J.R.R. Tolkien".to_string(),
            },
        )
    }

    #[test]
    fn test_new_item_is_available() {
        assert!(hobbit().available);
    }

    #[test]
    fn test_book_details() {
        assert_eq!(
            hobbit().details(),
            "Book: The Hobbit by J.R.R. Tolkien (ID: B001)"
        );
    }

    #[test]
    fn test_magazine_details() {
        let mag = Item::new(
            "M001",
            "National Geographic",
            ItemKind::Magazine {
                issue: "2023-01".to_string(),
            },
        );
        assert_eq!(
            mag.details(),
            "Magazine: National Geographic, Issue: 2023-01 (ID: M001)"
        );
    }

    #[test]
    fn test_dvd_details() {
        let dvd = Item::new("D001", "Inception", ItemKind::Dvd { minutes: 148 });
        assert_eq!(dvd.details(), "DVD: Inception, Duration: 148 mins (ID: D001)");
    }

    #[test]
    fn test_newspaper_details() {
        let paper = Item::new(
            "N001",
            "Bangkok Post",
            ItemKind::Newspaper {
                date: "2023-09-10".to_string(),
            },
        );
        assert_eq!(
            paper.details(),
            "Newspaper: Bangkok Post, Date: 2023-09-10 (ID: N001)"
        );
    }

    #[test]
    fn test_thesis_details() {
        let thesis = Item::new(
            "T001",
            "AI in Education",
            ItemKind::Thesis {
                researcher: "Dr. Somchai".to_string(),
            },
        );
        assert_eq!(
            thesis.details(),
            "Thesis: AI in Education by Dr. Somchai (ID: T001)"
        );
    }

    #[test]
    fn test_check_out_marks_unavailable() {
        let mut item = hobbit();
        let outcome = item.check_out("Alice");
        assert_eq!(
            outcome,
            Outcome::Success("The Hobbit borrowed by Alice".to_string())
        );
        assert!(!item.available);
    }

    #[test]
    fn test_check_out_refuses_item_on_loan() {
        let mut item = hobbit();
        item.check_out("Alice");
        let outcome = item.check_out("Bob");
        assert_eq!(outcome, Outcome::ItemUnavailable);
        assert!(!item.available);
    }

    #[test]
    fn test_check_in_is_unconditional() {
        let mut item = hobbit();
        // Never checked out, but check_in still reports the return.
        let outcome = item.check_in();
        assert_eq!(outcome, Outcome::Success("The Hobbit returned".to_string()));
        assert!(item.available);
    }

    #[test]
    fn test_category_order() {
        assert_eq!(
            Category::ALL,
            [
                Category::Book,
                Category::Magazine,
                Category::Dvd,
                Category::Newspaper,
                Category::Thesis,
            ]
        );
        assert_eq!(Category::Dvd.group_label(), "DVDs");
        assert_eq!(Category::Thesis.group_label(), "Theses");
    }

    #[test]
    fn test_member_loans() {
        let mut member = Member::new("M1001", "Alice");
        assert_eq!(member.loan_count(), 0);

        member.add_loan(Loan::new("B001"));
        member.add_loan(Loan::new("D001"));
        assert_eq!(member.loan_count(), 2);
        assert!(member.has_loan("B001"));

        // Duplicate item ids are not recorded twice.
        member.add_loan(Loan::new("B001"));
        assert_eq!(member.loan_count(), 2);

        let removed = member.remove_loan("B001");
        assert_eq!(removed.map(|l| l.item_id), Some("B001".to_string()));
        assert!(!member.has_loan("B001"));
        assert_eq!(member.loan_count(), 1);

        assert!(member.remove_loan("B001").is_none());
    }
}
