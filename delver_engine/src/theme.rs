//! Theme system for customizable console colors.
//!
//! Themes are loaded from a TOML file and switched by name. The active palette
//! feeds both the [`GameStyle`](crate::style::GameStyle) helpers and the color
//! tokens handed to inventory display.

use anyhow::{Context, Result, anyhow};
use colored::Color;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, RwLock};

/// Default location of the bundled themes file.
pub const THEMES_FILE: &str = "delver_engine/data/themes.toml";

/// Environment variable overriding [`THEMES_FILE`].
pub const THEMES_FILE_VAR: &str = "DELVER_THEMES";

/// Environment variable naming the theme to activate at startup.
pub const THEME_VAR: &str = "DELVER_THEME";

/// RGB color representation for theme configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThemeColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a `colored::Color` usable as a display color token.
    pub fn to_color(&self) -> Color {
        Color::TrueColor {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// A named color scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// All color settings for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub prompt: ThemeColor,
    pub heading: ThemeColor,
    pub item: ThemeColor,
    pub container: ThemeColor,
    pub enchanted: ThemeColor,
    pub total: ThemeColor,
    pub alert: ThemeColor,
    pub error: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: "The default color scheme".to_string(),
            colors: ThemeColors::default(),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            prompt: ThemeColor::new(250, 200, 100),
            heading: ThemeColor::new(223, 77, 10),
            item: ThemeColor::new(220, 180, 40),
            container: ThemeColor::new(102, 208, 250),
            enchanted: ThemeColor::new(220, 40, 220),
            total: ThemeColor::new(110, 220, 110),
            alert: ThemeColor::new(230, 230, 30),
            error: ThemeColor::new(230, 30, 30),
        }
    }
}

/// Container for theme data loaded from TOML
#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeData {
    pub themes: Vec<Theme>,
}

/// Manages the catalog of available themes and the active selection.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: Arc<RwLock<Theme>>,
}

impl ThemeManager {
    /// Create a new theme manager seeded with the built-in default theme.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        let default_theme = Theme::default();
        themes.insert(default_theme.name.clone(), default_theme.clone());

        Self {
            themes,
            current_theme: Arc::new(RwLock::new(default_theme)),
        }
    }

    /// Load themes from a TOML file. A missing file leaves the catalog as is.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_themes_from_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            info!("no themes file at {}; using built-in colors", path.display());
            return Ok(());
        }

        let contents =
            fs::read_to_string(path).with_context(|| format!("reading themes file {}", path.display()))?;
        let theme_data: ThemeData =
            toml::from_str(&contents).with_context(|| format!("parsing themes file {}", path.display()))?;

        for theme in theme_data.themes {
            self.themes.insert(theme.name.clone(), theme);
        }
        Ok(())
    }

    /// Return an alphabetized list of installed theme names.
    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Switch to a different theme by name.
    ///
    /// # Errors
    /// Returns an error if no theme has that name.
    pub fn set_theme(&self, name: &str) -> Result<()> {
        let theme = self
            .themes
            .get(name)
            .ok_or_else(|| anyhow!("theme '{name}' not found"))?;

        let mut current = self
            .current_theme
            .write()
            .map_err(|_| anyhow!("failed to acquire theme lock"))?;
        *current = theme.clone();
        Ok(())
    }

    /// Get the currently active theme.
    pub fn current(&self) -> Arc<RwLock<Theme>> {
        Arc::clone(&self.current_theme)
    }

    /// Return the name of the active theme, falling back to `default`.
    pub fn current_name(&self) -> String {
        self.current_theme
            .read()
            .map(|t| t.name.clone())
            .unwrap_or_else(|_| "default".to_string())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global theme manager shared across modules.
pub static THEME_MANAGER: LazyLock<RwLock<ThemeManager>> = LazyLock::new(|| RwLock::new(ThemeManager::new()));

/// Resolve the themes file, honoring [`THEMES_FILE_VAR`].
pub fn themes_path() -> PathBuf {
    env::var_os(THEMES_FILE_VAR).map_or_else(|| PathBuf::from(THEMES_FILE), PathBuf::from)
}

/// Load themes into the global manager and activate the one named by
/// [`THEME_VAR`], if set. An unknown theme name is logged and ignored.
///
/// # Errors
/// Returns an error if the themes file exists but is unreadable or malformed.
pub fn init_themes() -> Result<()> {
    let mut manager = THEME_MANAGER
        .write()
        .map_err(|_| anyhow!("failed to acquire theme manager lock"))?;

    manager.load_themes_from_file(&themes_path())?;

    if let Ok(name) = env::var(THEME_VAR)
        && let Err(err) = manager.set_theme(&name)
    {
        warn!("{err}; keeping '{}'", manager.current_name());
    }
    Ok(())
}

/// Snapshot the color palette for the active theme, defaulting if unavailable.
pub fn current_theme_colors() -> ThemeColors {
    THEME_MANAGER
        .read()
        .ok()
        .and_then(|m| {
            let current = m.current();
            current.read().ok().map(|t| t.colors.clone())
        })
        .unwrap_or_default()
}
