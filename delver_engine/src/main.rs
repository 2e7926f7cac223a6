#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Delver **
//! Inventory demo for the delver console toolkit

use delver_engine::console::{self, ask_yes_no, press_any_key_alert, write_heading};
use delver_engine::math::round_to_precision;
use delver_engine::storage::{SAVE_DIR, save_inventory};
use delver_engine::style::GameStyle;
use delver_engine::theme::{current_theme_colors, init_themes};
use delver_engine::{Component, Container, Decorator, InventoryComponent, Item};

use anyhow::{Context, Result};
use log::{info, warn};

use std::io::{self, Write};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();
    if let Err(err) = init_themes() {
        warn!("themes unavailable: {err:#}");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let colors = current_theme_colors();

    write_heading(&mut out, "DUNGEON DELVER", 40, 4, true, Some(colors.heading.to_color()))?;

    let (mut backpack, ring_id) = starting_backpack().context("while packing the starting backpack")?;
    info!("starting backpack packed with {} items", backpack.len());
    show(&mut out, &backpack)?;

    if ask_yes_no(&mut input, &mut out, "Enchant the ring?", false, Some(colors.prompt.to_color()))? {
        enchant(&mut backpack, ring_id, 15);
        console::write(&mut out, &"The ring glows faintly.".enchanted_style().to_string(), true, None)?;
        show(&mut out, &backpack)?;
    }

    if ask_yes_no(&mut input, &mut out, "Save this inventory?", false, Some(colors.prompt.to_color()))? {
        let path = Path::new(SAVE_DIR).join("inventory.json");
        match save_inventory(&path, &backpack) {
            Ok(()) => console::write(&mut out, &format!("Saved to {}.", path.display()), true, None)?,
            Err(err) => console::write(&mut out, &format!("Save failed: {err:#}").error_style().to_string(), true, None)?,
        }
    }

    press_any_key_alert(&mut input, &mut out, Some("Farewell, delver."), false, Some(colors.alert.to_color()))?;
    Ok(())
}

fn starting_backpack() -> Result<(Container, delver_engine::ComponentId)> {
    let mut pouch = Container::new("Pouch")?;
    pouch.add(Box::new(Item::new("Gem", 1.0, 100)?));

    let ring = Item::new("Ring", 1.0, 20)?;
    let ring_id = ring.id();

    let mut backpack = Container::new("Backpack")?;
    backpack.add(Box::new(Item::new("Sword", 5.0, 50)?));
    backpack.add(Box::new(Item::new("Shield", 8.0, 30)?));
    backpack.add(Box::new(pouch));
    backpack.add(Box::new(ring));
    Ok((backpack, ring_id))
}

/// Replace the plain ring with an enchanted one, moved to the end of the backpack.
fn enchant(backpack: &mut Container, ring_id: delver_engine::ComponentId, bonus: i64) {
    if let Some(ring) = backpack.remove(ring_id) {
        let enchanted: Component = Box::new(Decorator::enchanted(ring, bonus));
        backpack.add(enchanted);
    } else {
        warn!("ring {ring_id} not found in backpack");
    }
}

fn show<W: Write>(out: &mut W, backpack: &Container) -> Result<()> {
    let colors = current_theme_colors();
    console::write_new_lines(out, 1)?;
    backpack.display(out, 0, Some(colors.container.to_color()))?;
    let totals = format!(
        "Total weight: {}  Total cost: {}",
        round_to_precision(backpack.weight(), 2),
        backpack.cost()
    );
    console::write(out, &totals.total_style().to_string(), true, None)?;
    out.flush()?;
    Ok(())
}

