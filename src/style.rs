//! ANSI terminal styling for tool reports

pub const RED: &str = "\x1b[31m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RESET: &str = "\x1b[0m";

/// Escape sequences used by the reports, empty when color is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Color unless disabled on the command line or through `NO_COLOR`
    pub fn detect(no_color_flag: bool) -> Self {
        let env_disabled = std::env::var_os("NO_COLOR").map_or(false, |v| !v.is_empty());
        Self::new(!no_color_flag && !env_disabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` in the given escape sequences followed by a reset
    pub fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.enabled || codes.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", codes.concat(), text, RESET)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(&[BRIGHT_RED], text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(&[BRIGHT_YELLOW], text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(&[BRIGHT_GREEN], text)
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(&[UNDERLINE, BOLD, BRIGHT_WHITE], text)
    }
}
