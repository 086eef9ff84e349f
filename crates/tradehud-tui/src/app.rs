//! Event loop and effect execution around the session controller.
//!
//! The controller stays pure: this module feeds it terminal events plus
//! completed fetch results, and executes the effects it returns. Gateway
//! fetches run as spawned tasks and funnel back through an mpsc channel, so
//! the controller itself never suspends.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use tradehud_core::{
    Effect, GatewayClient, RenderInstruction, SessionController, SessionEvent, TextMeasure,
};
use unicode_width::UnicodeWidthStr;

use crate::ui;

// The entry field accepts a little more than a valid ticker so the user
// sees their overlong input rejected instead of silently truncated.
const INPUT_CAP: usize = 8;

/// Terminal-cell text measurement for the label fitter.
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn width(&self, text: &str) -> f64 {
        UnicodeWidthStr::width(text) as f64
    }
}

pub struct App {
    controller: SessionController,
    gateway: Arc<dyn GatewayClient>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    /// Latest instruction from the controller; `None` until the first one.
    pub instruction: Option<RenderInstruction>,
    /// Ticker entry field, committed on Enter.
    pub input: String,
    should_quit: bool,
}

impl App {
    pub fn new(gateway: Arc<dyn GatewayClient>, terminal_cols: u16) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            controller: SessionController::new(
                ui::headline_budget(terminal_cols),
                Box::new(CellMeasure),
            ),
            gateway,
            events_tx,
            events_rx,
            instruction: None,
            input: String::new(),
            should_quit: false,
        }
    }

    /// Commit raw ticker text, as if the user pressed Enter.
    pub fn submit(&mut self, raw: String) {
        let effects = self.controller.handle(SessionEvent::Submit { raw });
        self.apply(effects);
    }

    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, &self))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
                    Event::Resize(cols, _) => {
                        let effects = self.controller.handle(SessionEvent::Resize {
                            headline_width: ui::headline_budget(cols),
                        });
                        self.apply(effects);
                    }
                    _ => {}
                }
            }

            // Drain completed fetches without blocking the draw loop.
            while let Ok(session_event) = self.events_rx.try_recv() {
                let effects = self.controller.handle(session_event);
                self.apply(effects);
            }
        }
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
                let effects = self.controller.handle(SessionEvent::ActivateHeadline);
                self.apply(effects);
            }
            (KeyCode::Enter, _) => {
                let raw = self.input.clone();
                self.submit(raw);
            }
            (KeyCode::Backspace, _) => {
                self.input.pop();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if self.input.chars().count() < INPUT_CAP {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(instruction) => self.instruction = Some(instruction),
                Effect::Dispatch { token, ticker } => {
                    debug!(%ticker, token, "dispatching gateway fetch");
                    let gateway = Arc::clone(&self.gateway);
                    let tx = self.events_tx.clone();
                    tokio::spawn(async move {
                        let session_event = match gateway.fetch_consolidated(&ticker).await {
                            Ok(payload) => SessionEvent::Resolve { token, payload },
                            Err(error) => SessionEvent::Reject { token, error },
                        };
                        // The receiver only goes away on shutdown.
                        let _ = tx.send(session_event);
                    });
                }
                Effect::OpenUrl(url) => {
                    if let Err(error) = open::that_detached(&url) {
                        warn!(%url, %error, "failed to open headline link");
                    }
                }
            }
        }
    }
}
