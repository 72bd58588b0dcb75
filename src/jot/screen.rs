//! Home-screen state machine.
//!
//! [`HomeScreen`] owns everything the home view is composed from: the note
//! snapshot, the search and find & replace panels with their terms, and the
//! loading flags. [`HomeScreen::view`] is a pure function from that state to
//! one of three mutually exclusive render states; the CLI (or any other UI)
//! only ever renders what `view` returns.
//!
//! Panels are mutually exclusive tabs: opening one closes the other. Closing
//! all panels also clears both panels' terms, so reopening either shows an
//! empty input.
//!
//! The async operations take a `CancellationToken` in place of the usual
//! is-mounted flag: the token is checked before each state-committing step,
//! and a cancelled token suppresses the write. Requests already in flight
//! are not aborted.

use crate::backend::NotesBackend;
use crate::commands::{self, CmdMessage};
use crate::model::Note;
use crate::session::Session;
use tokio_util::sync::CancellationToken;

/// What the home screen should render, composed by [`HomeScreen::view`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    /// Unauthenticated: prompt for login/signup.
    Lander,
    /// Initial fetch or a find & replace is in flight.
    Loading,
    Notes(NotesView),
}

/// The notes section, checked in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum NotesView {
    /// The filtered set, non-empty.
    List(Vec<Note>),
    /// Search is active and nothing matched.
    NoSearchMatches,
    /// A find term is set and nothing matched.
    NoReplaceMatches,
    /// No filter active and the server has no notes at all.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Search,
    FindReplace,
}

#[derive(Debug)]
pub struct HomeScreen {
    authenticated: bool,
    notes: Vec<Note>,
    is_loading: bool,
    is_find_replacing: bool,
    active_panel: Option<Panel>,
    search_term: String,
    find_term: String,
    replace_term: String,
}

impl HomeScreen {
    pub fn new(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            notes: Vec::new(),
            is_loading: false,
            is_find_replacing: false,
            active_panel: None,
            search_term: String::new(),
            find_term: String::new(),
            replace_term: String::new(),
        }
    }

    // --- Panel state controller ---

    pub fn open_panel(&mut self, panel: Panel) {
        self.active_panel = Some(panel);
    }

    pub fn close_panel(&mut self) {
        self.active_panel = None;
    }

    pub fn is_panel_open(&self, panel: Panel) -> bool {
        self.active_panel == Some(panel)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_find_term(&mut self, term: impl Into<String>) {
        self.find_term = term.into();
    }

    pub fn set_replace_term(&mut self, term: impl Into<String>) {
        self.replace_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn find_term(&self) -> &str {
        &self.find_term
    }

    pub fn replace_term(&self) -> &str {
        &self.replace_term
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn clear_find_replace(&mut self) {
        self.find_term.clear();
        self.replace_term.clear();
    }

    /// Exit every panel and reset both panels' term state.
    pub fn close_all_panels(&mut self) {
        self.active_panel = None;
        self.clear_search();
        self.clear_find_replace();
    }

    // --- Filtering ---

    /// The effective filter: the search term when present, else the find term.
    pub fn filter_term(&self) -> &str {
        if !self.search_term.is_empty() {
            &self.search_term
        } else {
            &self.find_term
        }
    }

    pub fn filtered_notes(&self) -> Vec<Note> {
        commands::filter::run(&self.notes, self.filter_term())
    }

    // --- Screen composer ---

    pub fn view(&self) -> ScreenView {
        if !self.authenticated {
            return ScreenView::Lander;
        }
        if self.is_loading || self.is_find_replacing {
            return ScreenView::Loading;
        }

        let filtered = self.filtered_notes();
        if !filtered.is_empty() {
            return ScreenView::Notes(NotesView::List(filtered));
        }
        if self.is_panel_open(Panel::Search) || !self.search_term.is_empty() {
            return ScreenView::Notes(NotesView::NoSearchMatches);
        }
        if !self.find_term.is_empty() {
            return ScreenView::Notes(NotesView::NoReplaceMatches);
        }
        // Only reached with no filter active: the backend truly has no notes.
        ScreenView::Notes(NotesView::Empty)
    }

    // --- Async orchestration ---

    /// Load the full note list, replacing the snapshot wholesale.
    /// Errors are surfaced as messages; the screen stays usable.
    pub async fn load<B: NotesBackend>(
        &mut self,
        backend: &B,
        cancel: &CancellationToken,
    ) -> Vec<CmdMessage> {
        if !self.authenticated {
            return Vec::new();
        }

        self.is_loading = true;
        let loaded = commands::list::run(backend).await;

        if cancel.is_cancelled() {
            log::info!("screen torn down; dropping loaded notes");
            return Vec::new();
        }

        let mut messages = Vec::new();
        match loaded {
            Ok(result) => self.notes = result.listed_notes,
            Err(e) => messages.push(CmdMessage::error(format!("Could not load notes: {}", e))),
        }
        self.is_loading = false;
        messages
    }

    /// Run a find & replace over the currently filtered notes, then swap the
    /// find term for the old replace term and refetch the list so the user
    /// immediately sees the effect. A refetch, not an optimistic patch.
    ///
    /// Silent no-op while another run is in flight or when unauthenticated.
    /// An empty filtered set issues no calls and never sets the loading flag.
    pub async fn find_replace<B: NotesBackend>(
        &mut self,
        backend: &B,
        cancel: &CancellationToken,
    ) -> Vec<CmdMessage> {
        if self.is_find_replacing || !self.authenticated {
            return Vec::new();
        }

        let filtered = self.filtered_notes();
        if filtered.is_empty() {
            return Vec::new();
        }

        self.is_find_replacing = true;

        let batch =
            commands::replace::run(backend, &filtered, &self.find_term, &self.replace_term).await;
        let mut messages = match batch {
            Ok(result) => result.messages,
            Err(e) => vec![CmdMessage::error(format!("Find & replace failed: {}", e))],
        };

        if cancel.is_cancelled() {
            log::info!("screen torn down; skipping post-replace state writes");
            return messages;
        }

        // Reset the terms, then seed the find term with the previous
        // replacement so re-filtering shows the swapped-in text.
        let previous_replace = self.replace_term.clone();
        self.clear_find_replace();
        self.find_term = previous_replace;

        // The batch may have partially failed; reload regardless so the
        // snapshot reflects whatever the server now holds.
        match commands::list::run(backend).await {
            Ok(result) => {
                if !cancel.is_cancelled() {
                    self.notes = result.listed_notes;
                }
            }
            Err(e) => messages.push(CmdMessage::error(format!("Could not reload notes: {}", e))),
        }

        if !cancel.is_cancelled() {
            self.is_find_replacing = false;
        }
        messages
    }
}
