use std::io::IsTerminal;

use crossterm::style::Stylize;

/// Colour policy for rendered text. Plain when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// Colour on unless disabled explicitly or stdout is not a terminal.
    #[must_use]
    pub fn detect(no_color: bool) -> Self {
        Self {
            color: !no_color && std::io::stdout().is_terminal(),
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    #[must_use]
    pub fn heading(self, text: &str) -> String {
        self.paint(text, |value| value.bold().to_string())
    }

    #[must_use]
    pub fn accent(self, text: &str) -> String {
        self.paint(text, |value| value.cyan().to_string())
    }

    #[must_use]
    pub fn good(self, text: &str) -> String {
        self.paint(text, |value| value.green().to_string())
    }

    #[must_use]
    pub fn warn(self, text: &str) -> String {
        self.paint(text, |value| value.yellow().to_string())
    }

    #[must_use]
    pub fn bad(self, text: &str) -> String {
        self.paint(text, |value| value.red().to_string())
    }

    /// Green when `failures` is zero, red otherwise.
    #[must_use]
    pub fn status(self, text: &str, failures: usize) -> String {
        if failures == 0 {
            self.good(text)
        } else {
            self.bad(text)
        }
    }

    fn paint(self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_owned()
        }
    }
}
