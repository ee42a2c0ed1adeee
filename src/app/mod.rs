//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`App`] - owns the navigation state, the learning snapshot and the UI state
//! - [`AppMessage`] - results sent back from spawned gateway calls
//!
//! Gateway calls never run inline. Each one is spawned on the tokio runtime
//! and reports back through `message_tx`; [`App::handle_message`] applies the
//! results in arrival order.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod view;

pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::config::ClientConfig;
use crate::gateway::LearningGateway;
use crate::input::CommandRegistry;
use crate::models::{Learning, LearningDetail};
use crate::state::{Modal, Screen, ToastState, ViewStateMachine};

/// Main application state
pub struct App {
    /// Which screen is active, and the selected learning on Detail
    pub nav: ViewStateMachine,
    /// Last fetched collection; replaced wholesale on every fetch
    pub learnings: Vec<Learning>,
    /// Last fetched detail (may belong to a previously selected learning)
    pub detail: Option<LearningDetail>,
    /// The one visible notification
    pub toasts: ToastState,
    /// Open modal form, if any
    pub modal: Option<Modal>,
    /// Bumped every time a form opens; create results only close their own form
    pub modal_generation: u64,
    /// Highlighted row on Dashboard / List
    pub selected_row: usize,
    /// Spawned gateway calls that have not reported back yet
    pub in_flight: usize,
    /// A create call is outstanding; Enter in any form is ignored until it reports back
    pub submitting: bool,
    /// Flag to indicate the app should quit
    pub should_quit: bool,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    pub config: ClientConfig,
    /// Maps key presses to commands
    pub command_registry: CommandRegistry,
    /// Store access (shared across async tasks)
    pub gateway: Arc<dyn LearningGateway>,
    /// Receiver for async results
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async results (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create a new App on the dashboard with an empty snapshot.
    ///
    /// Nothing is fetched until [`App::start`] is called.
    pub fn new(gateway: Arc<dyn LearningGateway>, config: ClientConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            nav: ViewStateMachine::new(),
            learnings: Vec::new(),
            detail: None,
            toasts: ToastState::new(config.toast_duration),
            modal: None,
            modal_generation: 0,
            selected_row: 0,
            in_flight: 0,
            submitting: false,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            config,
            command_registry: CommandRegistry::new(),
            gateway,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Load the data for the initial screen.
    pub fn start(&mut self) {
        let load = self.nav.reload();
        self.start_load(load);
    }

    pub fn screen(&self) -> &Screen {
        self.nav.screen()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Advance animations and expire toasts.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.toasts.expire(Instant::now()) {
            self.mark_dirty();
        }
        if self.is_loading() {
            // spinner
            self.mark_dirty();
        }
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Wait until every spawned call has reported back, applying results.
    ///
    /// Only usable while the app still owns its receiver; the TUI loop takes
    /// the receiver instead.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let msg = match self.message_rx.as_mut() {
                Some(rx) => rx.recv().await,
                None => break,
            };
            match msg {
                Some(msg) => self.handle_message(msg),
                None => break,
            }
        }
    }
}
