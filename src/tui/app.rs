//! Application state for the TUI.

use crate::credentials::CredentialKey;
use crate::range::RangeSelection;
use crate::view::{DEFAULT_SYMBOL, ViewOutcome, ViewQuery};

use super::input::TextInput;

/// Central application state container.
pub struct App {
    // -- Controls --
    /// Stock symbol as typed; uppercased when a query is built.
    pub symbol_input: TextInput,
    /// Selected time range.
    pub range: RangeSelection,

    // -- Result --
    /// Outcome of the last completed interaction.
    pub outcome: Option<ViewOutcome>,
    /// Query currently being fetched, if any.
    pub loading: Option<ViewQuery>,
    /// First visible row of the raw data table.
    pub table_offset: usize,

    // -- UI State --
    /// Current focus.
    pub focus: Focus,
    /// Current input mode.
    pub mode: Mode,
    /// Credentials that were empty at startup.
    pub missing_credentials: Vec<CredentialKey>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new(missing_credentials: Vec<CredentialKey>) -> Self {
        Self {
            symbol_input: TextInput::with_content(DEFAULT_SYMBOL),
            range: RangeSelection::default(),
            outcome: None,
            loading: None,
            table_offset: 0,
            focus: Focus::SymbolInput,
            mode: Mode::Normal,
            missing_credentials,
            should_quit: false,
        }
    }

    /// The query described by the current controls.
    pub fn query(&self) -> ViewQuery {
        ViewQuery::new(self.symbol_input.as_str(), self.range)
    }

    /// Marks `query` as in flight.
    pub fn begin_loading(&mut self, query: &ViewQuery) {
        self.loading = Some(query.clone());
    }

    /// Stores the outcome of the finished fetch.
    pub fn finish_loading(&mut self, outcome: ViewOutcome) {
        self.loading = None;
        self.outcome = Some(outcome);
        self.table_offset = 0;
    }

    /// Selects `range`, returning `true` if it changed.
    pub fn select_range(&mut self, range: RangeSelection) -> bool {
        let changed = self.range != range;
        self.range = range;
        changed
    }

    /// Number of rows in the raw data table.
    pub fn row_count(&self) -> usize {
        match &self.outcome {
            Some(ViewOutcome::Chart(chart)) => chart.rows.len(),
            _ => 0,
        }
    }

    /// Scrolls the raw data table down one row.
    pub fn scroll_down(&mut self) {
        if self.table_offset + 1 < self.row_count() {
            self.table_offset += 1;
        }
    }

    /// Scrolls the raw data table up one row.
    pub fn scroll_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(1);
    }

    /// Moves focus to the next control.
    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SymbolInput => Focus::RangeSelector,
            Focus::RangeSelector => Focus::Table,
            Focus::Table => Focus::SymbolInput,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// UI focus targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SymbolInput,
    RangeSelector,
    Table,
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Editing the symbol.
    Insert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_query() {
        let app = App::default();
        assert_eq!(app.query(), ViewQuery::default());
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn query_uppercases_typed_symbol() {
        let mut app = App::default();
        app.symbol_input = TextInput::with_content("msft");
        assert_eq!(app.query().symbol(), "MSFT");
    }

    #[test]
    fn finishing_clears_loading_and_scroll() {
        let mut app = App::default();
        app.table_offset = 4;
        let query = app.query();
        app.begin_loading(&query);
        assert!(app.loading.is_some());
        app.finish_loading(ViewOutcome::Error("boom".into()));
        assert!(app.loading.is_none());
        assert_eq!(app.table_offset, 0);
        assert_eq!(app.row_count(), 0);
    }

    #[test]
    fn scrolling_without_rows_stays_at_top() {
        let mut app = App::default();
        app.scroll_down();
        assert_eq!(app.table_offset, 0);
        app.scroll_up();
        assert_eq!(app.table_offset, 0);
    }
}
