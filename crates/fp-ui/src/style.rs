use colored::{ColoredString, Colorize};

/// Semantic styles for inline status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Warning,
    Error,
}

impl Style {
    pub fn apply(self, text: &str) -> ColoredString {
        match self {
            Style::Success => text.green(),
            Style::Warning => text.yellow(),
            Style::Error => text.red(),
        }
    }
}

/// Extension trait to style any string-like value.
pub trait StyledText {
    fn with_style(&self, style: Style) -> ColoredString;
}

impl<T: AsRef<str> + ?Sized> StyledText for T {
    fn with_style(&self, style: Style) -> ColoredString {
        style.apply(self.as_ref())
    }
}
