pub mod detail;
pub mod prompt;
pub mod search;
pub mod session;
pub mod status;
pub mod table;

pub use detail::write_details;
pub use prompt::{LinePrompter, PromptInput, Prompter, TerminalPrompter};
pub use search::{SearchMatches, search_providers};
pub use session::{Session, SessionOutcome};
pub use status::{Status, classify};
pub use table::{TableError, format_commission, write_table};
