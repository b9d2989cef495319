pub mod add;
pub mod convert;
pub mod delete;
pub mod edit;
pub mod list;
pub mod months;
pub mod timeline;
pub mod today;

use std::path::Path;

use anyhow::{Context, Result};
use hilal_core::store::Store;

/// Opens the store, attaching the path to any error.
pub fn open_store(path: &Path) -> Result<Store> {
    Store::open(path).with_context(|| format!("Failed to open store at {}", path.display()))
}
