//! The library aggregate
//!
//! `Library` owns the canonical item and member collections and routes
//! borrow/return requests between them. Members never hold references
//! to items: a loan records the item's id, resolved against the
//! library's list on demand, so removing or reordering items can never
//! leave a member pointing at freed data.
//!
//! All lookups are linear scans over small in-memory vectors; the first
//! match wins when ids collide.

use tracing::{debug, warn};

use crate::models::{Item, Loan, Member};
use crate::status::{Missing, Outcome};

/// Aggregate root over the item and member collections.
#[derive(Debug, Clone, Default)]
pub struct Library {
    items: Vec<Item>,
    members: Vec<Member>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the catalog.
    ///
    /// Duplicate ids are accepted; lookups return the earliest match,
    /// so a later duplicate is shadowed.
    pub fn add_item(&mut self, item: Item) {
        if self.item(&item.id).is_some() {
            warn!(id = %item.id, "duplicate item id, earlier entry shadows this one");
        }
        self.items.push(item);
    }

    /// Register a member.
    ///
    /// Duplicate ids are accepted, with the same shadowing caveat as
    /// [`Library::add_item`].
    pub fn add_member(&mut self, member: Member) {
        if self.member(&member.id).is_some() {
            warn!(id = %member.id, "duplicate member id, earlier entry shadows this one");
        }
        self.members.push(member);
    }

    /// Look up an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Look up a member by id.
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All members, in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Borrow `item_id` on behalf of `member_id`.
    ///
    /// On success the item becomes unavailable and the member's loan
    /// list grows by one. An unavailable item or a failed lookup leaves
    /// every collection untouched.
    pub fn borrow(&mut self, member_id: &str, item_id: &str) -> Outcome {
        let member_pos = match self.members.iter().position(|m| m.id == member_id) {
            Some(pos) => pos,
            None => return Outcome::NotFound(Missing::MemberOrItem),
        };
        let item_pos = match self.items.iter().position(|i| i.id == item_id) {
            Some(pos) => pos,
            None => return Outcome::NotFound(Missing::MemberOrItem),
        };

        let borrower = self.members[member_pos].name.clone();
        let outcome = self.items[item_pos].check_out(&borrower);
        if outcome.is_success() {
            self.members[member_pos].add_loan(Loan::new(item_id));
            debug!(member = member_id, item = item_id, "item checked out");
        }
        outcome
    }

    /// Return `item_id` on behalf of `member_id`.
    ///
    /// The member's loan list is the guard: an item the member does not
    /// hold is refused without touching its availability.
    pub fn give_back(&mut self, member_id: &str, item_id: &str) -> Outcome {
        let member_pos = match self.members.iter().position(|m| m.id == member_id) {
            Some(pos) => pos,
            None => return Outcome::NotFound(Missing::Member),
        };
        if !self.members[member_pos].has_loan(item_id) {
            return Outcome::NotFound(Missing::Loan);
        }
        let item_pos = match self.items.iter().position(|i| i.id == item_id) {
            Some(pos) => pos,
            None => {
                // Loans only ever reference catalog items and items are
                // never removed, so this arm is unreachable in practice.
                warn!(member = member_id, item = item_id, "loan references an unknown item");
                return Outcome::NotFound(Missing::MemberOrItem);
            }
        };

        self.members[member_pos].remove_loan(item_id);
        debug!(member = member_id, item = item_id, "item returned");
        self.items[item_pos].check_in()
    }

    /// Items currently on loan to `member`, in borrow order.
    pub fn loans_for(&self, member: &Member) -> Vec<&Item> {
        member
            .loans
            .iter()
            .filter_map(|loan| {
                let item = self.item(&loan.item_id);
                if item.is_none() {
                    warn!(member = %member.id, item = %loan.item_id, "loan references an unknown item");
                }
                item
            })
            .collect()
    }
}
