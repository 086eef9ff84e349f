//! HUD session controller.
//!
//! The validation -> fetch -> render state machine. All transitions run
//! through one function, `SessionController::handle(event) -> effects`, so
//! the machine is unit-testable without a display surface: the shell feeds
//! events in and executes the returned effects (dispatching fetches,
//! applying render instructions, opening links).
//!
//! # Concurrency model
//!
//! One logical thread of control; concurrency exists only as overlapping
//! asynchronous fetches that the shell runs on the controller's behalf.
//! Every dispatch mints a monotonically increasing request token. Only the
//! highest minted token is live: a resolve or reject carrying any older
//! token is discarded without touching state, which makes cancellation
//! implicit. Starting a new fetch orphans the previous one; nothing needs to
//! abort the underlying network call.

use crate::domain::{HudPayload, TickerSymbol};
use crate::error::ErrorCode;
use crate::fit::{self, TextMeasure};
use crate::format::{self, Tone};
use crate::gateway::{GatewayError, GatewayErrorKind};
use crate::render::{HudFrame, RenderInstruction, Slot, SlotValue};

/// Machine status; the machine is long-lived, there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Validating,
    Fetching,
    Rendered,
    Error,
}

/// The controller's single mutable record.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    /// Ticker currently considered current; set when a request is accepted
    /// for dispatch, never when its response arrives.
    pub active_ticker: Option<TickerSymbol>,
    /// Highest minted request token. Responses tagged with anything lower
    /// are stale.
    pub request_token: u64,
    /// Last accepted payload, kept only so a resize can re-fit the headline
    /// without a re-fetch.
    payload: Option<HudPayload>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            active_ticker: None,
            request_token: 0,
            payload: None,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Explicit user commit (Enter), carrying the raw input text.
    Submit { raw: String },
    /// A dispatched fetch resolved.
    Resolve { token: u64, payload: HudPayload },
    /// A dispatched fetch failed.
    Reject { token: u64, error: GatewayError },
    /// The headline width budget changed; re-fit only, no re-fetch.
    Resize { headline_width: f64 },
    /// The user activated the rendered headline.
    ActivateHeadline,
}

/// Instructions the shell executes after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start a gateway fetch; the eventual result comes back as a
    /// `Resolve`/`Reject` event carrying this token.
    Dispatch { token: u64, ticker: TickerSymbol },
    /// Replace the display surface contents.
    Render(RenderInstruction),
    /// Open an already-validated http(s) link outside the application.
    OpenUrl(String),
}

/// Owns the session state and composes render instructions.
pub struct SessionController {
    state: SessionState,
    headline_width: f64,
    measure: Box<dyn TextMeasure + Send>,
}

impl SessionController {
    /// `headline_width` is the initial width budget for the headline slot;
    /// `measure` is the display surface's text-measurement capability.
    pub fn new(headline_width: f64, measure: Box<dyn TextMeasure + Send>) -> Self {
        Self {
            state: SessionState::new(),
            headline_width,
            measure,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run one transition and return the effects to execute, in order.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        match event {
            SessionEvent::Submit { raw } => self.on_submit(&raw),
            SessionEvent::Resolve { token, payload } => self.on_resolve(token, payload),
            SessionEvent::Reject { token, error } => self.on_reject(token, &error),
            SessionEvent::Resize { headline_width } => self.on_resize(headline_width),
            SessionEvent::ActivateHeadline => self.on_activate(),
        }
    }

    fn on_submit(&mut self, raw: &str) -> Vec<Effect> {
        let outstanding = self.state.status == SessionStatus::Fetching;
        self.state.status = SessionStatus::Validating;

        let ticker = match TickerSymbol::parse(raw) {
            Ok(ticker) => ticker,
            Err(error) => return self.enter_error(ErrorCode::from_validation(&error)),
        };

        // Single-flight: an identical submit while its fetch is still
        // outstanding must not issue a second network call.
        if outstanding && self.state.active_ticker.as_ref() == Some(&ticker) {
            self.state.status = SessionStatus::Fetching;
            return Vec::new();
        }

        self.state.request_token += 1;
        let token = self.state.request_token;
        self.state.active_ticker = Some(ticker.clone());
        self.state.payload = None;
        self.state.status = SessionStatus::Fetching;

        vec![
            Effect::Render(RenderInstruction::Loading),
            Effect::Dispatch { token, ticker },
        ]
    }

    fn on_resolve(&mut self, token: u64, payload: HudPayload) -> Vec<Effect> {
        if !self.accepts(token) {
            return Vec::new();
        }

        self.state.status = SessionStatus::Rendered;
        let frame = self.compose_frame(&payload);
        self.state.payload = Some(payload);
        vec![Effect::Render(RenderInstruction::Hud(frame))]
    }

    fn on_reject(&mut self, token: u64, error: &GatewayError) -> Vec<Effect> {
        if !self.accepts(token) {
            return Vec::new();
        }

        let code = match error.kind() {
            GatewayErrorKind::NotFound => ErrorCode::NotFound,
            GatewayErrorKind::Network => ErrorCode::NetworkError,
            GatewayErrorKind::Unknown => ErrorCode::Unknown,
        };
        self.enter_error(code)
    }

    fn on_resize(&mut self, headline_width: f64) -> Vec<Effect> {
        if headline_width <= 0.0 {
            // Degenerate budget: leave prior content untouched.
            return Vec::new();
        }
        self.headline_width = headline_width;

        if self.state.status != SessionStatus::Rendered {
            return Vec::new();
        }
        match &self.state.payload {
            Some(payload) => {
                let frame = self.compose_frame(payload);
                vec![Effect::Render(RenderInstruction::Hud(frame))]
            }
            None => Vec::new(),
        }
    }

    fn on_activate(&mut self) -> Vec<Effect> {
        if self.state.status != SessionStatus::Rendered {
            return Vec::new();
        }
        let url = self
            .state
            .payload
            .as_ref()
            .and_then(|p| p.top_headline.as_ref())
            .and_then(|h| h.url.as_deref());
        match url {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                vec![Effect::OpenUrl(url.to_string())]
            }
            _ => Vec::new(),
        }
    }

    /// A response is applied only when it carries the live token while a
    /// fetch is actually outstanding; everything else is stale.
    fn accepts(&self, token: u64) -> bool {
        self.state.status == SessionStatus::Fetching && token == self.state.request_token
    }

    fn enter_error(&mut self, code: ErrorCode) -> Vec<Effect> {
        self.state.status = SessionStatus::Error;
        vec![Effect::Render(RenderInstruction::message(code))]
    }

    fn compose_frame(&self, payload: &HudPayload) -> HudFrame {
        let features = &payload.features;
        let quote = payload.quote.as_ref();

        let mut frame = HudFrame::default();

        let symbol = self
            .state
            .active_ticker
            .as_ref()
            .map(|t| t.to_string())
            .or_else(|| payload.ticker.clone())
            .unwrap_or_else(|| format::PLACEHOLDER.to_string());
        frame.set(Slot::Symbol, SlotValue::neutral(symbol));

        let r1_tone = Tone::of(features.r_1m);
        frame.set(
            Slot::Last,
            SlotValue::new(format::price(quote.and_then(|q| q.last)), r1_tone),
        );
        frame.set(
            Slot::BidAsk,
            SlotValue::neutral(format::bid_ask(
                quote.and_then(|q| q.bid),
                quote.and_then(|q| q.ask),
            )),
        );
        frame.set(
            Slot::Ret1m,
            SlotValue::new(format::ret_window("1m", features.r_1m), r1_tone),
        );
        frame.set(
            Slot::Ret5m,
            SlotValue::new(
                format::ret_window("5m", features.r_5m),
                Tone::of(features.r_5m),
            ),
        );

        let (arrow, arrow_tone) = format::sma_arrow(features.above_sma20);
        frame.set(Slot::SmaTrend, SlotValue::new(arrow, arrow_tone));

        frame.set(
            Slot::SentimentMean,
            SlotValue::new(
                format::signed_num(features.sent_mean),
                Tone::of(features.sent_mean),
            ),
        );
        frame.set(
            Slot::SentimentSigma,
            SlotValue::neutral(format::sigma(features.sent_std)),
        );

        let code = payload.recommendation.code.as_deref();
        frame.set(
            Slot::StrategyCode,
            match code {
                Some(code) if !code.trim().is_empty() => SlotValue::neutral(code.trim()),
                _ => SlotValue::placeholder(),
            },
        );

        match format::confidence_percent(payload.recommendation.confidence) {
            Some(percent) => {
                frame.confidence_bar_px = format::bar_width(percent);
                frame.set(Slot::ConfidenceLabel, SlotValue::neutral(format!("{percent}%")));
            }
            None => {
                frame.confidence_bar_px = 0.0;
                frame.set(Slot::ConfidenceLabel, SlotValue::placeholder());
            }
        }

        let summary = format::summary_text(&payload.one_liner.text, code);
        let line = format::headline_line(&summary, payload.top_headline.as_ref());
        let fitted = fit::fit(&line, self.measure.as_ref(), self.headline_width);
        frame.set(Slot::Headline, SlotValue::neutral(fitted));
        frame.headline_url = payload
            .top_headline
            .as_ref()
            .and_then(|h| h.url.clone())
            .filter(|u| u.starts_with("http://") || u.starts_with("https://"));

        frame.set(
            Slot::CacheAge,
            SlotValue::neutral(format::cache_age(payload.cache_age_seconds)),
        );

        frame
    }
}
