//! File and save-game helpers.
//!
//! Plain text read/write plus JSON persistence of inventory trees through the
//! `delver_data` definitions.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use delver_data::ComponentDef;
use log::{info, warn};

use crate::inventory::{Component, InventoryComponent};
use crate::loader::load_component;

pub const SAVE_DIR: &str = "saved_inventories";

/// Write `content` to `path`, replacing the file when `clear_first` is set and
/// appending to it otherwise. The file is created if missing.
///
/// # Errors
/// Returns an error if the file cannot be opened or written.
pub fn write_string_to_file(path: &Path, content: &str, clear_first: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(!clear_first)
        .truncate(clear_first)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Read the whole file at `path` into a string.
///
/// # Errors
/// Returns an error if the file is missing or not valid UTF-8.
pub fn read_string_from_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Serialize an inventory tree to pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn inventory_to_json(component: &dyn InventoryComponent) -> Result<String> {
    serde_json::to_string_pretty(&component.to_def())
        .with_context(|| format!("serializing inventory '{}'", component.name()))
}

/// Parse and build an inventory tree from JSON.
///
/// # Errors
/// Returns an error if the JSON is malformed or describes an invalid tree.
pub fn inventory_from_json(raw: &str) -> Result<Component> {
    let def: ComponentDef = serde_json::from_str(raw).context("parsing inventory JSON")?;
    load_component(&def).context("building inventory from definition")
}

/// Save an inventory tree to `path` as JSON, creating parent directories.
///
/// # Errors
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_inventory(path: &Path, component: &dyn InventoryComponent) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = inventory_to_json(component)?;
    write_string_to_file(path, &json, true)?;
    info!("saved inventory '{}' to {}", component.name(), path.display());
    Ok(())
}

/// Load an inventory tree previously written by [`save_inventory`].
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or built.
pub fn load_inventory(path: &Path) -> Result<Component> {
    let raw = read_string_from_file(path)?;
    inventory_from_json(&raw)
        .inspect_err(|err| warn!("failed to load inventory {}: {err:#}", path.display()))
        .with_context(|| format!("loading inventory {}", path.display()))
}
