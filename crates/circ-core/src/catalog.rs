//! Catalog seed files
//!
//! A catalog is described in TOML: the items on the shelves, the
//! registered members, and optionally a scripted list of borrow/return
//! transactions to run against it.
//!
//! ```toml
//! [[items]]
//! id = "B001"
//! title = "The Hobbit"
//! kind = "book"
//! author = "J.R.R. Tolkien"
//!
//! [[members]]
//! id = "M1001"
//! name = "Alice"
//!
//! [[transactions]]
//! action = "borrow"
//! member = "M1001"
//! item = "B001"
//! ```
//!
//! Transactions are not applied by [`CatalogFile::into_library`]; run
//! them through [`Library::borrow`] / [`Library::give_back`] so
//! availability flags and loan lists stay consistent.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::library::Library;
use crate::models::{Item, ItemKind, Member};

/// Errors raised while loading a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid catalog description.
    #[error("Invalid catalog file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// A borrow or return request scripted in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub action: Action,
    /// Member id the request runs on behalf of
    pub member: String,
    /// Item id the request targets
    pub item: String,
}

/// The two circulation actions a transaction can script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Borrow,
    Return,
}

/// On-disk description of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,
}

impl CatalogFile {
    /// Load a catalog description from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse a catalog description from a TOML string.
    pub fn parse(toml_content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_content)
    }

    /// Seed a library with the items and members.
    pub fn into_library(self) -> Library {
        let mut library = Library::new();
        for item in self.items {
            library.add_item(item);
        }
        for member in self.members {
            library.add_member(member);
        }
        library
    }

    /// The built-in sample catalog: five items of each kind, five
    /// members, and a transaction script lending one item of each kind
    /// to every member.
    pub fn sample() -> Self {
        fn book(id: &str, title: &str, author: &str) -> Item {
            Item::new(
                id,
                title,
                ItemKind::Book {
                    author: author.to_string(),
                },
            )
        }
        fn magazine(id: &str, title: &str, issue: &str) -> Item {
            Item::new(
                id,
                title,
                ItemKind::Magazine {
                    issue: issue.to_string(),
                },
            )
        }
        fn dvd(id: &str, title: &str, minutes: u32) -> Item {
            Item::new(id, title, ItemKind::Dvd { minutes })
        }
        fn newspaper(id: &str, title: &str, date: &str) -> Item {
            Item::new(
                id,
                title,
                ItemKind::Newspaper {
                    date: date.to_string(),
                },
            )
        }
        fn thesis(id: &str, title: &str, researcher: &str) -> Item {
            Item::new(
                id,
                title,
                ItemKind::Thesis {
                    researcher: researcher.to_string(),
                },
            )
        }
        fn borrow(member: &str, item: &str) -> Transaction {
            Transaction {
                action: Action::Borrow,
                member: member.to_string(),
                item: item.to_string(),
            }
        }

        CatalogFile {
            items: vec![
                book("B001", "The Hobbit", "J.R.R. Tolkien"),
                book("B002", "1984", "George Orwell"),
                book("B003", "To Kill a Mockingbird", "Harper Lee"),
                book("B004", "The Great Gatsby", "F. Scott Fitzgerald"),
                book("B005", "Moby Dick", "Herman Melville"),
                magazine("M001", "National Geographic", "2023-01"),
                magazine("M002", "Time", "2023-02"),
                magazine("M003", "Scientific American", "2022-12"),
                magazine("M004", "Forbes", "2023-03"),
                magazine("M005", "The New Yorker", "2023-03"),
                dvd("D001", "Inception", 148),
                dvd("D002", "The Matrix", 136),
                dvd("D003", "Interstellar", 169),
                dvd("D004", "Avatar", 162),
                dvd("D005", "The Godfather", 175),
                newspaper("N001", "Bangkok Post", "2023-09-10"),
                newspaper("N002", "The Guardian", "2023-09-11"),
                newspaper("N003", "The New York Times", "2023-09-12"),
                newspaper("N004", "Le Monde", "2023-09-13"),
                newspaper("N005", "El País", "2023-09-14"),
                thesis("T001", "AI in Education", "Dr. Somchai"),
                thesis("T002", "Climate Change Impacts", "Dr. Smith"),
                thesis("T003", "Quantum Computing", "Dr. Johnson"),
                thesis("T004", "Renewable Energy", "Dr. Brown"),
                thesis("T005", "Blockchain Technology", "Dr. Garcia"),
            ],
            members: vec![
                Member::new("M1001", "Alice"),
                Member::new("M1002", "Bob"),
                Member::new("M1003", "Charlie"),
                Member::new("M1004", "Diana"),
                Member::new("M1005", "Eve"),
            ],
            transactions: vec![
                borrow("M1001", "B001"),
                borrow("M1001", "M001"),
                borrow("M1001", "D001"),
                borrow("M1001", "N001"),
                borrow("M1001", "T001"),
                borrow("M1002", "B002"),
                borrow("M1002", "M002"),
                borrow("M1002", "D002"),
                borrow("M1002", "N002"),
                borrow("M1002", "T002"),
                borrow("M1003", "B003"),
                borrow("M1003", "M003"),
                borrow("M1003", "D003"),
                borrow("M1003", "N003"),
                borrow("M1003", "T003"),
                borrow("M1004", "B004"),
                borrow("M1004", "M004"),
                borrow("M1004", "D004"),
                borrow("M1004", "N004"),
                borrow("M1004", "T004"),
                borrow("M1005", "B005"),
                borrow("M1005", "M005"),
                borrow("M1005", "D005"),
                borrow("M1005", "N005"),
                borrow("M1005", "T005"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL_CATALOG: &str = r#"
        [[items]]
        id = "B001"
        title = "The Hobbit"
        kind = "book"
        author = "J.R.R. Tolkien"

        [[items]]
        id = "D001"
        title = "Inception"
        kind = "dvd"
        minutes = 148

        [[members]]
        id = "M1001"
        name = "Alice"

        [[transactions]]
        action = "borrow"
        member = "M1001"
        item = "B001"
    "#;

    #[test]
    fn test_parse_catalog_toml() {
        let catalog = CatalogFile::parse(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.members.len(), 1);
        assert_eq!(catalog.transactions.len(), 1);

        assert_eq!(
            catalog.items[0].kind,
            ItemKind::Book {
                author: "J.R.R. Tolkien".to_string()
            }
        );
        assert!(catalog.items[0].available);
        assert_eq!(catalog.items[1].kind, ItemKind::Dvd { minutes: 148 });
        assert_eq!(
            catalog.transactions[0],
            Transaction {
                action: Action::Borrow,
                member: "M1001".to_string(),
                item: "B001".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let result = CatalogFile::parse(
            r#"
            [[items]]
            id = "X001"
            title = "Mystery"
            kind = "scroll"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_CATALOG.as_bytes()).unwrap();

        let catalog = CatalogFile::load(file.path()).unwrap();
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.members[0].name, "Alice");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CatalogFile::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn test_into_library_seeds_collections() {
        let library = CatalogFile::parse(SMALL_CATALOG).unwrap().into_library();
        assert_eq!(library.item_count(), 2);
        assert_eq!(library.member_count(), 1);
        assert!(library.item("B001").is_some());
        assert!(library.member("M1001").is_some());
    }

    #[test]
    fn test_sample_shape() {
        let sample = CatalogFile::sample();
        assert_eq!(sample.items.len(), 25);
        assert_eq!(sample.members.len(), 5);
        assert_eq!(sample.transactions.len(), 25);
        assert!(sample.items.iter().all(|i| i.available));
    }

    #[test]
    fn test_sample_script_runs_clean() {
        let mut sample = CatalogFile::sample();
        let transactions = std::mem::take(&mut sample.transactions);
        let mut library = sample.into_library();

        for t in &transactions {
            let outcome = match t.action {
                Action::Borrow => library.borrow(&t.member, &t.item),
                Action::Return => library.give_back(&t.member, &t.item),
            };
            assert!(outcome.is_success(), "transaction failed: {:?}", t);
        }

        assert!(library.items().iter().all(|i| !i.available));
        assert!(library.members().iter().all(|m| m.loan_count() == 5));
    }
}
