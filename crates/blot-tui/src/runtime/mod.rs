//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async request handlers send `UiEvent`s to `inbox_tx`; the runtime drains
//! `inbox_rx` each frame. Every spawned request is wrapped in a
//! `TaskStarted`/`TaskCompleted` lifecycle so the reducer can drop results
//! from superseded requests.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use blot_core::api::ApiClient;
use blot_core::auth::TokenStore;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame duration while requests are in flight (spinner animation).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state, the API client, and the token store.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: Arc<ApiClient>,
    token_store: TokenStore,
    /// Inbox sender - spawned handlers send events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and takes over the terminal.
    pub fn new(
        client: ApiClient,
        token_store: TokenStore,
        token: Option<String>,
        username_hint: Option<&str>,
    ) -> Result<Self> {
        // Set up panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(token, username_hint);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client: Arc::new(client),
            token_store,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        // A restored session fetches the collection before the first frame.
        let startup = self.state.startup_effects();
        self.execute_effects(startup);

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps frame rate at tick
                // cadence; input events batch their renders to the next Tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the terminal and the inbox, emitting Tick at the
    /// current cadence.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast cadence only while a request is in flight (spinner animation);
        // otherwise slow polling to save CPU.
        let tick_interval = if self.state.tasks.is_any_running() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - If we already have events to process, do a non-blocking poll
        // - Otherwise, block until the next tick is due
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async request with a uniform TaskStarted/TaskCompleted
    /// lifecycle. The handler is a pure async function returning the result
    /// event; the runtime wraps it and sends both ends to the inbox.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// The session token for an authenticated spawn, cloned at dispatch time.
    fn session_token(&self) -> Option<String> {
        let token = self.state.token.clone();
        if token.is_none() {
            tracing::warn!("authenticated effect dispatched without a session token");
        }
        token
    }

    /// Executes a single effect.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }

            // Token persistence failures must not take the session down;
            // they are logged and the in-memory session continues.
            UiEffect::PersistToken { token } => {
                if let Err(err) = self.token_store.save(&token) {
                    tracing::warn!(error = %err, "failed to persist session token");
                }
            }
            UiEffect::ClearToken => {
                if let Err(err) = self.token_store.clear() {
                    tracing::warn!(error = %err, "failed to remove session token");
                }
            }

            UiEffect::SpawnLogin {
                task,
                username,
                password,
            } => {
                let client = self.client.clone();
                self.spawn_task(TaskKind::Login, task, move || {
                    handlers::login(client, username, password)
                });
            }
            UiEffect::SpawnListArticles { task } => {
                let Some(token) = self.session_token() else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::ArticlesList, task, move || {
                    handlers::list_articles(client, token)
                });
            }
            UiEffect::SpawnCreateArticle { task, payload } => {
                let Some(token) = self.session_token() else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::ArticleCreate, task, move || {
                    handlers::create_article(client, token, payload)
                });
            }
            UiEffect::SpawnUpdateArticle { task, id, payload } => {
                let Some(token) = self.session_token() else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::ArticleUpdate, task, move || {
                    handlers::update_article(client, token, id, payload)
                });
            }
            UiEffect::SpawnDeleteArticle { task, id } => {
                let Some(token) = self.session_token() else {
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::ArticleDelete, task, move || {
                    handlers::delete_article(client, token, id)
                });
            }
        }
    }
}
