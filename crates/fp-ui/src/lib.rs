//! # fp-ui
//!
//! Terminal text helpers shared by the finality provider selector: display
//! width measurement, width-aware padding, coarse truncation and message
//! styling.
//!
//! ## Example
//!
//! ```rust
//! use fp_ui::{Alignment, display_width, pad_text};
//!
//! let cell = pad_text("ノード", 8, Alignment::Left);
//! assert_eq!(display_width(&cell), 8);
//! ```

mod style;
mod terminal;

pub use style::{Style, StyledText};
pub use terminal::{Alignment, display_width, pad_text, truncate_coarse};

// Re-export commonly used items from dependencies
pub use colored::Colorize;
