//! Interactive search and selection over a fetched provider listing.
//!
//! The session is a small state machine. It starts on the full listing; a
//! search term switches it to a filtered view of the matches, `b` switches it
//! back, and a number selects a provider. Every search runs against the full
//! listing, so at most one filter is active at a time. Rows keep the ordinal
//! they have in the full listing, and selecting by that ordinal always
//! resolves against the full listing.

use std::io::Write;
use std::num::IntErrorKind;

use anyhow::Result;
use fp_registry::FinalityProvider;
use fp_ui::{Style, StyledText};
use log::debug;

use crate::prompt::{PromptInput, Prompter};
use crate::search::search_providers;
use crate::table::write_table;

pub const FULL_LIST_PROMPT: &str =
    "Enter number to select, search term to filter, or 'q' to quit: ";
pub const FILTERED_PROMPT: &str =
    "Enter number to select, new search term, 'b' for full list, or 'q' to quit: ";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome<'a> {
    Selected {
        ordinal: usize,
        provider: &'a FinalityProvider,
    },
    /// `q`, an interrupt, or end of input.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    FullList,
    Filtered { term: String, ordinals: Vec<usize> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Blank,
    Quit,
    Back,
    /// Any input that parses as an integer, even when it was meant as a
    /// search term.
    Select(i64),
    Search(String),
}

fn parse_command(input: &str, filtered: bool) -> Command {
    let input = input.trim();
    if input.is_empty() {
        Command::Blank
    } else if input.eq_ignore_ascii_case("q") {
        Command::Quit
    } else if let Some(number) = parse_number(input) {
        Command::Select(number)
    } else if filtered && input.eq_ignore_ascii_case("b") {
        Command::Back
    } else {
        Command::Search(input.to_string())
    }
}

/// Integers too large for `i64` still count as numbers; they saturate and are
/// reported as out of range. Single underscores may group digits (`1_000`).
fn parse_number(input: &str) -> Option<i64> {
    let digits = strip_digit_separators(input)?;
    match digits.parse::<i64>() {
        Ok(number) => Some(number),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Remove underscores that sit between two digits. A leading, trailing or
/// doubled underscore makes the input a non-number.
fn strip_digit_separators(input: &str) -> Option<String> {
    if !input.contains('_') {
        return Some(input.to_string());
    }

    let digits = input.trim_start_matches(['+', '-']);
    let valid = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    valid.then(|| input.replace('_', ""))
}

pub struct Session<'a, P, W> {
    providers: &'a [FinalityProvider],
    prompter: P,
    out: W,
    view: View,
}

impl<'a, P: Prompter, W: Write> Session<'a, P, W> {
    /// Start on the full listing. The caller is expected to have displayed it.
    pub fn new(providers: &'a [FinalityProvider], prompter: P, out: W) -> Self {
        Self {
            providers,
            prompter,
            out,
            view: View::FullList,
        }
    }

    /// Search term of the filtered view, if one is active.
    pub fn active_filter(&self) -> Option<&str> {
        match &self.view {
            View::FullList => None,
            View::Filtered { term, .. } => Some(term),
        }
    }

    /// Prompt until a provider is selected or the user quits. Invalid input
    /// is reported and re-prompted without leaving the current view.
    pub fn run(&mut self) -> Result<SessionOutcome<'a>> {
        loop {
            let message = match self.view {
                View::FullList => FULL_LIST_PROMPT,
                View::Filtered { .. } => FILTERED_PROMPT,
            };
            self.out.flush()?;

            let input = match self.prompter.read_line(message)? {
                PromptInput::Line(line) => line,
                PromptInput::Interrupted | PromptInput::Eof => {
                    debug!("Session ended without a selection");
                    return Ok(SessionOutcome::Quit);
                }
            };

            if let Some(outcome) = self.step(&input)? {
                return Ok(outcome);
            }
        }
    }

    fn step(&mut self, input: &str) -> Result<Option<SessionOutcome<'a>>> {
        let filtered = matches!(self.view, View::Filtered { .. });
        match parse_command(input, filtered) {
            Command::Blank => Ok(None),
            Command::Quit => {
                debug!("Quit requested");
                Ok(Some(SessionOutcome::Quit))
            }
            Command::Back => {
                debug!("Leaving filter {:?}", self.active_filter());
                writeln!(self.out, "\nShowing full list:")?;
                write_table(&mut self.out, self.providers, None)?;
                self.view = View::FullList;
                Ok(None)
            }
            Command::Select(number) => self.select(number),
            Command::Search(term) => {
                self.search(term)?;
                Ok(None)
            }
        }
    }

    fn select(&mut self, number: i64) -> Result<Option<SessionOutcome<'a>>> {
        let providers = self.providers;
        let ordinal = usize::try_from(number).ok();

        let chosen = match &self.view {
            View::FullList => {
                let chosen = ordinal.filter(|k| (1..=providers.len()).contains(k));
                if chosen.is_none() {
                    let message =
                        format!("Please enter a number between 1 and {}", providers.len());
                    writeln!(self.out, "{}", message.with_style(Style::Warning))?;
                }
                chosen
            }
            View::Filtered { ordinals, .. } => {
                let chosen = ordinal.filter(|k| ordinals.contains(k));
                if chosen.is_none() {
                    let valid = ordinals
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    let message = format!("Please enter one of the displayed numbers: {valid}");
                    writeln!(self.out, "{}", message.with_style(Style::Warning))?;
                }
                chosen
            }
        };

        Ok(chosen.map(|ordinal| {
            debug!("Selected provider #{ordinal}");
            SessionOutcome::Selected {
                ordinal,
                provider: &providers[ordinal - 1],
            }
        }))
    }

    fn search(&mut self, term: String) -> Result<()> {
        let matches = search_providers(self.providers, &term);
        if matches.is_empty() {
            let message = format!("No providers found matching '{term}'. Try again.");
            writeln!(self.out, "{}", message.with_style(Style::Warning))?;
            return Ok(());
        }

        debug!("Search {term:?} matched ordinals {:?}", matches.ordinals);
        let message = format!("Found {} match(es) for '{term}':", matches.len());
        writeln!(self.out, "\n{}", message.with_style(Style::Success))?;
        write_table(
            &mut self.out,
            matches.providers.as_slice(),
            Some(matches.ordinals.as_slice()),
        )?;

        self.view = View::Filtered {
            term,
            ordinals: matches.ordinals,
        };
        Ok(())
    }
}
