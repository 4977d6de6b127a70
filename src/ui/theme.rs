//! Design tokens for the Dashpush CLI.
//!
//! Design constraints:
//! - Only 5 semantic colors (`colors::*`)
//! - All icons must be sourced from this module

use crossterm::style::{Color, Stylize};

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const DEPLOY: &str = "📦";
    pub const REMOTE: &str = "📡";
    pub const CHECK: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    pub const DEPLOY: &str = "[DEPLOY]";
    pub const REMOTE: &str = "[REMOTE]";
    pub const CHECK: &str = "[CHECK]";
}

/// Paint `text` when color is enabled, pass it through otherwise.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_disabled_passes_text_through() {
        assert_eq!(paint("done", colors::SUCCESS, false), "done");
    }

    #[test]
    fn paint_enabled_wraps_in_escape_codes() {
        let painted = paint("done", colors::SUCCESS, true);
        assert!(painted.contains("done"));
        assert_ne!(painted, "done");
    }
}
