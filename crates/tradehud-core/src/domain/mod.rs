//! Domain types: the validated ticker symbol and the consolidated payload.

mod payload;
mod ticker;

pub use payload::{Features, Headline, HudPayload, OneLiner, QuoteSnapshot, Recommendation};
pub use ticker::TickerSymbol;
