//! Command handlers

pub mod circulation;
pub mod demo;
pub mod report;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use circ_core::{Action, CatalogFile, Config, Library, Outcome, Transaction};

/// Resolve the catalog source: explicit path, configured path, or the
/// built-in sample.
pub fn catalog_source(file: Option<&Path>) -> Result<CatalogFile> {
    if let Some(path) = file {
        return CatalogFile::load(path)
            .with_context(|| format!("Failed to load catalog file: {:?}", path));
    }

    let config = Config::load().context("Failed to load configuration")?;
    match config.catalog {
        Some(path) => CatalogFile::load(&path)
            .with_context(|| format!("Failed to load configured catalog: {:?}", path)),
        None => {
            debug!("no catalog configured, using the built-in sample");
            Ok(CatalogFile::sample())
        }
    }
}

/// Run one scripted transaction against the library.
pub fn apply_transaction(library: &mut Library, transaction: &Transaction) -> Outcome {
    match transaction.action {
        Action::Borrow => library.borrow(&transaction.member, &transaction.item),
        Action::Return => library.give_back(&transaction.member, &transaction.item),
    }
}

/// Build the library and apply the catalog's scripted transactions,
/// returning the settled library and what each transaction produced.
pub fn settle(mut catalog: CatalogFile) -> (Library, Vec<(Transaction, Outcome)>) {
    let transactions = std::mem::take(&mut catalog.transactions);
    let mut library = catalog.into_library();
    let session = transactions
        .into_iter()
        .map(|transaction| {
            let outcome = apply_transaction(&mut library, &transaction);
            (transaction, outcome)
        })
        .collect();
    (library, session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_settle_applies_sample_script() {
        let (library, session) = settle(CatalogFile::sample());

        assert_eq!(session.len(), 25);
        assert!(session.iter().all(|(_, outcome)| outcome.is_success()));
        assert!(library.members().iter().all(|m| m.loan_count() == 5));
        assert!(library.items().iter().all(|i| !i.available));
    }

    #[test]
    fn test_catalog_source_loads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[items]]
            id = "B001"
            title = "The Hobbit"
            kind = "book"
            author = "J.R.R. Tolkien"
            "#
        )
        .unwrap();

        let catalog = catalog_source(Some(file.path())).unwrap();
        assert_eq!(catalog.items.len(), 1);
        assert!(catalog.members.is_empty());
    }

    #[test]
    fn test_catalog_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = catalog_source(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }
}
