//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate, using the active theme's palette.
//! Implementations for `&str` and `String` are provided so string literals can
//! be styled directly.

use colored::{ColoredString, Colorize};

use crate::theme::{ThemeColor, current_theme_colors};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn container_style(&self) -> ColoredString;
    fn enchanted_style(&self) -> ColoredString;
    fn heading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn total_style(&self) -> ColoredString;
    fn alert_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

fn paint(text: &str, color: ThemeColor) -> ColoredString {
    text.truecolor(color.r, color.g, color.b)
}

impl GameStyle for &str {
    fn item_style(&self) -> ColoredString {
        paint(self, current_theme_colors().item)
    }
    fn container_style(&self) -> ColoredString {
        paint(self, current_theme_colors().container).bold()
    }
    fn enchanted_style(&self) -> ColoredString {
        paint(self, current_theme_colors().enchanted).italic()
    }
    fn heading_style(&self) -> ColoredString {
        paint(self, current_theme_colors().heading).underline()
    }
    fn prompt_style(&self) -> ColoredString {
        paint(self, current_theme_colors().prompt)
    }
    fn total_style(&self) -> ColoredString {
        paint(self, current_theme_colors().total)
    }
    fn alert_style(&self) -> ColoredString {
        paint(self, current_theme_colors().alert).bold()
    }
    fn error_style(&self) -> ColoredString {
        paint(self, current_theme_colors().error)
    }
}

impl GameStyle for String {
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn container_style(&self) -> ColoredString {
        self.as_str().container_style()
    }
    fn enchanted_style(&self) -> ColoredString {
        self.as_str().enchanted_style()
    }
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn total_style(&self) -> ColoredString {
        self.as_str().total_style()
    }
    fn alert_style(&self) -> ColoredString {
        self.as_str().alert_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
