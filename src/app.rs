//! Application state and event-driven intent handling.
//!
//! `App` wraps the view-state controller with everything the event loop
//! needs: the loading/error flags, the explicit fetch-in-flight guard, the
//! search input buffer, and the async message channel connecting the fetch
//! task back to the main loop. All state mutations happen synchronously in
//! response to a key event or the completion of one fetch.

use crate::api::{CatalogClient, TransportError};
use crate::controller::{Controller, SortField, SortOrder};
use crate::models::Product;
use crate::view_state::PageView;
use tokio::sync::mpsc;

/// Page-size presets cycled by the `+`/`-` keys.
pub const PAGE_SIZE_PRESETS: [usize; 4] = [5, 10, 20, 50];

/// Which surface receives plain key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Table commands (sort, navigate, reload, quit)
    #[default]
    Table,
    /// Search box input
    Search,
}

/// Messages delivered from async tasks to the main event loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A fetch completed, successfully or not
    ProductsLoaded(Result<Vec<Product>, TransportError>),
}

/// Top-level application state.
pub struct App {
    /// View-state controller owning the record set and derivation inputs
    pub controller: Controller,
    /// Text currently in the search box (mirrors the controller's term)
    pub search_input: String,
    /// Which surface receives plain key presses
    pub focus: Focus,
    /// True while a fetch task is outstanding
    pub loading: bool,
    /// Displayable message from the last failed fetch
    pub error: Option<String>,
    /// Set when the UI needs redrawing
    pub needs_redraw: bool,
    /// Set when the user asked to quit
    pub should_quit: bool,

    /// Sender side of the app message channel (cloned into fetch tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    client: CatalogClient,
    /// Serializes fetches: a second fetch_all while one is outstanding is
    /// rejected rather than issued concurrently
    fetch_in_flight: bool,
}

impl App {
    /// Create the application state with a client for the configured
    /// endpoint.
    pub fn new() -> Self {
        Self::with_client(CatalogClient::new())
    }

    /// Create the application state with a specific catalog client.
    pub fn with_client(client: CatalogClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            controller: Controller::new(),
            search_input: String::new(),
            focus: Focus::default(),
            loading: false,
            error: None,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
            client,
            fetch_in_flight: false,
        }
    }

    /// Mark the UI dirty.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request application exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Derive the current page view for rendering.
    pub fn page_view(&self) -> PageView {
        PageView::derive(&self.controller)
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    /// Whether a fetch task is currently outstanding.
    pub fn is_fetch_in_flight(&self) -> bool {
        self.fetch_in_flight
    }

    /// Start a fetch unless one is already outstanding.
    ///
    /// Returns false (and does nothing) when a fetch is in flight. On true,
    /// the caller must eventually deliver `AppMessage::ProductsLoaded` to
    /// `handle_message`, which clears the guard.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_in_flight {
            tracing::debug!("fetch already in flight, ignoring");
            return false;
        }
        self.fetch_in_flight = true;
        self.loading = true;
        self.error = None;
        self.mark_dirty();
        true
    }

    /// Spawn the fetch task, respecting the in-flight guard.
    pub fn fetch_all(&mut self) {
        if !self.begin_fetch() {
            return;
        }
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_products().await;
            let _ = tx.send(AppMessage::ProductsLoaded(result));
        });
    }

    /// Apply an async message from a completed task.
    ///
    /// On a failed fetch the prior record set is left untouched; only the
    /// error message changes.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ProductsLoaded(result) => {
                self.fetch_in_flight = false;
                self.loading = false;
                match result {
                    Ok(products) => {
                        self.controller.set_products(products);
                        self.error = None;
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "product fetch failed");
                        self.error = Some(format!("Error loading products: {}", err));
                    }
                }
                self.mark_dirty();
            }
        }
    }

    // ========================================================================
    // User Intents
    // ========================================================================

    /// Append a character to the search box.
    pub fn search_push(&mut self, c: char) {
        self.search_input.push(c);
        self.on_search_changed();
    }

    /// Delete the last character from the search box.
    pub fn search_backspace(&mut self) {
        if self.search_input.pop().is_some() {
            self.on_search_changed();
        }
    }

    /// Clear the search box.
    pub fn search_clear(&mut self) {
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.on_search_changed();
        }
    }

    /// Propagate an edited search term to the controller.
    ///
    /// Searching before the first load triggers the load: the term is
    /// stored in the controller now and takes effect when `set_products`
    /// re-applies it on fetch completion.
    fn on_search_changed(&mut self) {
        self.controller.set_search_term(&self.search_input);
        if self.controller.is_unloaded() && !self.fetch_in_flight {
            self.fetch_all();
        }
        self.mark_dirty();
    }

    /// Set the sort key and direction.
    pub fn sort_by(&mut self, field: SortField, order: SortOrder) {
        self.controller.sort_by(field, order);
        self.mark_dirty();
    }

    /// Navigate to the next page, if any.
    pub fn next_page(&mut self) {
        self.controller.go_to_page(self.controller.page() + 1);
        self.mark_dirty();
    }

    /// Navigate to the previous page, if any.
    pub fn prev_page(&mut self) {
        if self.controller.page() > 1 {
            self.controller.go_to_page(self.controller.page() - 1);
        }
        self.mark_dirty();
    }

    /// Step to the next larger page-size preset.
    pub fn grow_page_size(&mut self) {
        let current = self.controller.page_size();
        if let Some(&next) = PAGE_SIZE_PRESETS.iter().find(|&&n| n > current) {
            self.controller.set_page_size(next);
        }
        self.mark_dirty();
    }

    /// Step to the next smaller page-size preset.
    pub fn shrink_page_size(&mut self) {
        let current = self.controller.page_size();
        if let Some(&prev) = PAGE_SIZE_PRESETS.iter().rev().find(|&&n| n < current) {
            self.controller.set_page_size(prev);
        }
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
