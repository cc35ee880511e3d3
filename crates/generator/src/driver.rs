//! Scheme selection and per-selection dispatch
//!
//! A session reads selectors one per line until the sentinel `0`, the end of
//! input, or until every catalog scheme has been chosen. Each new selector is
//! dispatched to its generator as soon as it is read. A failing scheme is
//! reported and the session carries on with the next selector.

use std::io::{self, BufRead, Write};

use coregen_api::{Error, Result};
use coregen_params::{lookup, CatalogEntry, SchemeKind, CATALOG_SIZE, END_OF_INPUT};
use tracing::{debug, info, warn};

use crate::dispatcher::dispatch;
use crate::generate::{GeneratedScheme, Generator};

/// Prompt printed before each interactive read
pub const PROMPT: &str = "Choose a Scheme to support - 0 to finish: ";

/// Distinct selectors in the order they were chosen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id`; returns false if it was already selected
    pub fn insert(&mut self, id: u32) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Every catalog scheme has been selected
    pub fn is_full(&self) -> bool {
        self.ids.len() >= CATALOG_SIZE as usize
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.ids
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    AwaitingInput,
    Terminal,
}

/// Result of feeding one selector to the driver
#[derive(Debug)]
pub enum Step {
    /// New selector, to be generated now
    Recorded(&'static CatalogEntry),
    /// Already selected; nothing to do
    Duplicate(u32),
    /// Not in the catalog; the selection is unchanged
    Rejected(Error),
    /// The session is over
    Terminated,
}

/// State machine over a [`SelectionSet`]
#[derive(Debug)]
pub struct SelectionDriver {
    selection: SelectionSet,
    state: DriverState,
}

impl Default for SelectionDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionDriver {
    pub fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
            state: DriverState::AwaitingInput,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state == DriverState::Terminal
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn into_selection(self) -> SelectionSet {
        self.selection
    }

    pub fn feed(&mut self, id: u32) -> Step {
        if self.is_terminal() {
            return Step::Terminated;
        }
        if id == END_OF_INPUT {
            self.state = DriverState::Terminal;
            return Step::Terminated;
        }

        let entry = match lookup(id) {
            Ok(entry) => entry,
            Err(e) => return Step::Rejected(e),
        };
        if !self.selection.insert(id) {
            return Step::Duplicate(id);
        }
        if self.selection.is_full() {
            self.state = DriverState::Terminal;
        }
        Step::Recorded(entry)
    }
}

/// Where selectors come from
pub trait SelectionSource {
    /// Next selector; `None` at end of input
    fn next_selection(&mut self) -> Option<Result<u32>>;
}

impl SelectionSource for std::vec::IntoIter<u32> {
    fn next_selection(&mut self) -> Option<Result<u32>> {
        self.next().map(Ok)
    }
}

/// Line-oriented selector reader
///
/// In interactive mode the prompt is written to `prompt` before every read.
/// Blank lines are skipped. A read failure ends the input after it has been
/// reported once.
pub struct SelectionReader<R, W = io::Sink> {
    input: R,
    prompt: Option<W>,
    line: String,
    done: bool,
}

impl<R: BufRead> SelectionReader<R> {
    /// Reader that never prompts, for input files
    pub fn batch(input: R) -> Self {
        Self {
            input,
            prompt: None,
            line: String::new(),
            done: false,
        }
    }
}

impl<R: BufRead, W: Write> SelectionReader<R, W> {
    pub fn interactive(input: R, prompt: W) -> Self {
        Self {
            input,
            prompt: Some(prompt),
            line: String::new(),
            done: false,
        }
    }

    fn read_line(&mut self) -> io::Result<usize> {
        if let Some(out) = self.prompt.as_mut() {
            out.write_all(PROMPT.as_bytes())?;
            out.flush()?;
        }
        self.line.clear();
        self.input.read_line(&mut self.line)
    }
}

impl<R: BufRead, W: Write> SelectionSource for SelectionReader<R, W> {
    fn next_selection(&mut self) -> Option<Result<u32>> {
        while !self.done {
            match self.read_line() {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let text = self.line.trim();
                    if text.is_empty() {
                        continue;
                    }
                    return Some(
                        text.parse::<u32>()
                            .map_err(|_| Error::InvalidInput(text.to_owned())),
                    );
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(Error::Io {
                        context: "reading a selection".into(),
                        source,
                    }));
                }
            }
        }
        None
    }
}

/// What happened to one input of a session
#[derive(Debug)]
pub enum Outcome {
    Generated { id: u32, scheme: GeneratedScheme },
    Failed { id: u32, name: &'static str, error: Error },
    /// Input that named no scheme
    Rejected { error: Error },
}

/// Selection and per-input outcomes of a finished session
#[derive(Debug, Default)]
pub struct SessionReport {
    pub selection: SelectionSet,
    pub outcomes: Vec<Outcome>,
    /// Set when the scheme-independent tests could not be copied after the session
    pub closing_error: Option<Error>,
}

impl SessionReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &GeneratedScheme> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Generated { scheme, .. } => Some(scheme),
            _ => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (u32, &'static str, &Error)> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Failed { id, name, error } => Some((*id, *name, error)),
            _ => None,
        })
    }

    pub fn rejected(&self) -> impl Iterator<Item = &Error> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Rejected { error } => Some(error),
            _ => None,
        })
    }

    /// No selected scheme failed and the closing files were copied
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none() && self.closing_error.is_none()
    }

    /// Kinds present in the selection, in menu order
    pub fn kinds_selected(&self) -> Vec<SchemeKind> {
        let mut kinds: Vec<SchemeKind> = self
            .selection
            .as_slice()
            .iter()
            .filter_map(|id| lookup(*id).ok())
            .map(|entry| entry.scheme.kind())
            .collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }
}

/// Read selectors from `source` and generate each new one
pub fn run_session<S>(generator: &Generator<'_>, source: &mut S) -> SessionReport
where
    S: SelectionSource + ?Sized,
{
    let mut driver = SelectionDriver::new();
    let mut outcomes = Vec::new();

    while let Some(next) = source.next_selection() {
        let id = match next {
            Ok(id) => id,
            Err(error) => {
                warn!(%error, "skipping input");
                outcomes.push(Outcome::Rejected { error });
                continue;
            }
        };

        match driver.feed(id) {
            Step::Recorded(entry) => {
                info!(id, scheme = entry.scheme.name(), "selected");
                let result = dispatch(id).and_then(|reg| reg.run(generator));
                outcomes.push(match result {
                    Ok(scheme) => Outcome::Generated { id, scheme },
                    Err(error) => {
                        warn!(id, scheme = entry.scheme.name(), %error, "generation failed");
                        Outcome::Failed {
                            id,
                            name: entry.scheme.name(),
                            error,
                        }
                    }
                });
            }
            Step::Duplicate(id) => debug!(id, "already selected"),
            Step::Rejected(error) => {
                warn!(%error, "skipping input");
                outcomes.push(Outcome::Rejected { error });
            }
            Step::Terminated => {}
        }

        if driver.is_terminal() {
            break;
        }
    }

    SessionReport {
        selection: driver.into_selection(),
        outcomes,
        closing_error: None,
    }
}
