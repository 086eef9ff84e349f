//! # TradeHUD Core
//!
//! Session controller, label fitting, and gateway client for the TradeHUD
//! single-ticker ribbon.
//!
//! ## Overview
//!
//! This crate holds everything about the HUD that is independent of a
//! particular display surface:
//!
//! - **Validated ticker symbol** (1-5 uppercase ASCII letters) and the serde
//!   model of the consolidated gateway payload
//! - **Session controller**: the validation -> fetch -> render state machine
//!   with single-flight de-duplication and stale-response suppression
//! - **Label fitter**: binary-search word-bounded truncation over an
//!   injected text-measurement capability
//! - **Formatter**: pure field -> display-string mappings with per-slot
//!   placeholder degradation
//! - **Gateway client** for `GET /api/run?ticker=<SYMBOL>` with an HTTP
//!   transport abstraction
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Ticker symbol and gateway payload types |
//! | [`error`] | Validation errors and user-facing reason codes |
//! | [`fit`] | Word-bounded label fitting |
//! | [`format`] | Pure display formatting |
//! | [`gateway`] | Consolidated gateway client |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`render`] | Render instructions and display slots |
//! | [`session`] | The HUD session state machine |
//!
//! ## Quick Start
//!
//! ```rust
//! use tradehud_core::{Effect, SessionController, SessionEvent};
//!
//! // Measurement comes from the display surface; tests count chars.
//! let measure = Box::new(|text: &str| text.chars().count() as f64);
//! let mut controller = SessionController::new(80.0, measure);
//!
//! let effects = controller.handle(SessionEvent::Submit {
//!     raw: " aapl ".to_string(),
//! });
//! assert!(matches!(
//!     effects.last(),
//!     Some(Effect::Dispatch { token: 1, ticker }) if ticker.as_str() == "AAPL"
//! ));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐  events   ┌─────────────────────┐
//! │  Display Surface │──────────▶│  SessionController  │
//! │  (TUI ribbon)    │◀──────────│  handle -> effects  │
//! └──────────────────┘  render   └─────────┬───────────┘
//!                                          │ dispatch
//!                                          ▼
//!                          ┌──────────────────┐   ┌──────────────┐
//!                          │  GatewayClient   │──▶│  HttpClient  │
//!                          │  /api/run        │   │  (reqwest)   │
//!                          └──────────────────┘   └──────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Validation failures and gateway failures both end up as an
//! [`ErrorCode`] with one fixed user-facing message per code; a partially
//! malformed payload is not an error at all — each display slot degrades to
//! a placeholder independently.

pub mod domain;
pub mod error;
pub mod fit;
pub mod format;
pub mod gateway;
pub mod http_client;
pub mod render;
pub mod session;

// Re-export commonly used types at crate root for convenience

pub use domain::{Features, Headline, HudPayload, OneLiner, QuoteSnapshot, Recommendation, TickerSymbol};

pub use error::{ErrorCode, ValidationError};

pub use fit::{fit, TextMeasure, ELLIPSIS};

pub use format::{Tone, BAR_PX_PER_PERCENT, PLACEHOLDER};

pub use gateway::{GatewayClient, GatewayError, GatewayErrorKind, HttpGatewayClient};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient};

pub use render::{HudFrame, RenderInstruction, Slot, SlotValue};

pub use session::{Effect, SessionController, SessionEvent, SessionState, SessionStatus};
