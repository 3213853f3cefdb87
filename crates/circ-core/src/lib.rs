//! CIRC Core Library
//!
//! This crate provides the core functionality for CIRC, a small lending
//! catalog: items, members, and the library aggregate that routes
//! borrow/return requests between them.
//!
//! # Architecture
//!
//! The `Library` is the sole owner of the item and member collections.
//! Members record loans by item id; the library resolves those ids on
//! demand, so there are no shared references to keep alive. Every
//! circulation request resolves to an `Outcome` value rather than an
//! error.
//!
//! # Quick Start
//!
//! ```text
//! let mut library = CatalogFile::sample().into_library();
//!
//! let outcome = library.borrow("M1001", "B001");
//! println!("{}", outcome);   // The Hobbit borrowed by Alice
//!
//! println!("{}", library.summary());
//! ```
//!
//! # Modules
//!
//! - `library`: the aggregate owning items and members (main entry point)
//! - `models`: items, kinds, members, loans
//! - `status`: circulation outcomes
//! - `report`: fixed-format string reports
//! - `catalog`: TOML catalog seed files and the built-in sample
//! - `config`: application configuration

pub mod catalog;
pub mod config;
pub mod library;
pub mod models;
pub mod report;
pub mod status;

pub use catalog::{Action, CatalogError, CatalogFile, Transaction};
pub use config::Config;
pub use library::Library;
pub use models::{Category, Item, ItemKind, Loan, Member};
pub use status::{Missing, Outcome};
