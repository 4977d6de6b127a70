//! Terminal output: design tokens, context, and view rendering

pub mod theme;
pub mod views;

use is_terminal::IsTerminal;

use crate::presentation::cli::ColorWhen;

/// Per-invocation output capabilities
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, color: Option<ColorWhen>) -> Self {
        let tty = std::io::stdout().is_terminal();
        let color = match color {
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Never) => false,
            _ => tty && !json,
        };
        // Windows consoles still trip over the emoji set.
        let unicode = !cfg!(windows);

        Self { color, unicode }
    }
}
