//! Render instructions emitted by the session controller.
//!
//! An instruction is the controller's whole output for one render pass:
//! constructed fresh, never mutated, and superseded entirely by the next
//! one. The display surface applies it verbatim.

use std::collections::BTreeMap;

use crate::error::ErrorCode;
use crate::format::{Tone, PLACEHOLDER};

/// Named display slot on the HUD ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Symbol,
    Last,
    BidAsk,
    Ret1m,
    Ret5m,
    SmaTrend,
    SentimentMean,
    SentimentSigma,
    StrategyCode,
    ConfidenceLabel,
    Headline,
    CacheAge,
}

impl Slot {
    pub const ALL: [Self; 12] = [
        Self::Symbol,
        Self::Last,
        Self::BidAsk,
        Self::Ret1m,
        Self::Ret5m,
        Self::SmaTrend,
        Self::SentimentMean,
        Self::SentimentSigma,
        Self::StrategyCode,
        Self::ConfidenceLabel,
        Self::Headline,
        Self::CacheAge,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Last => "last",
            Self::BidAsk => "bid_ask",
            Self::Ret1m => "ret_1m",
            Self::Ret5m => "ret_5m",
            Self::SmaTrend => "sma_trend",
            Self::SentimentMean => "sentiment_mean",
            Self::SentimentSigma => "sentiment_sigma",
            Self::StrategyCode => "strategy_code",
            Self::ConfidenceLabel => "confidence_label",
            Self::Headline => "headline",
            Self::CacheAge => "cache_age",
        }
    }
}

/// Formatted text plus the tone the surface colours it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotValue {
    pub text: String,
    pub tone: Tone,
}

impl SlotValue {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Neutral)
    }

    pub fn placeholder() -> Self {
        Self::neutral(PLACEHOLDER)
    }
}

/// One fully-composed render pass of the value slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HudFrame {
    slots: BTreeMap<Slot, SlotValue>,
    /// Confidence bar fill width, in pixels.
    pub confidence_bar_px: f64,
    /// Link opened when the user activates the headline.
    pub headline_url: Option<String>,
}

impl HudFrame {
    pub fn set(&mut self, slot: Slot, value: SlotValue) {
        self.slots.insert(slot, value);
    }

    pub fn slot(&self, slot: Slot) -> Option<&SlotValue> {
        self.slots.get(&slot)
    }

    /// Slot text with the neutral placeholder for anything unset.
    pub fn text(&self, slot: Slot) -> &str {
        self.slots.get(&slot).map_or(PLACEHOLDER, |v| v.text.as_str())
    }

    /// Slot tone, neutral for anything unset.
    pub fn tone(&self, slot: Slot) -> Tone {
        self.slots.get(&slot).map_or(Tone::Neutral, |v| v.tone)
    }
}

/// Full output of one controller transition, handed to the display surface.
///
/// Slot values and the message panel are mutually exclusive: `Loading` and
/// `Message` both clear every value slot to their respective placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    /// Clear value slots and show the loading placeholder.
    Loading,
    /// Show a fully-formatted frame; hides the message panel.
    Hud(HudFrame),
    /// Clear value slots and show the fixed message for `code`.
    Message {
        code: ErrorCode,
        text: &'static str,
    },
}

impl RenderInstruction {
    pub const fn message(code: ErrorCode) -> Self {
        Self::Message {
            code,
            text: code.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_slots_round_trip() {
        let mut frame = HudFrame::default();
        frame.set(Slot::Ret1m, SlotValue::new("1m +1.20%", Tone::Positive));

        let value = frame.slot(Slot::Ret1m).expect("slot set");
        assert_eq!(value.text, "1m +1.20%");
        assert_eq!(value.tone, Tone::Positive);
        assert!(frame.slot(Slot::CacheAge).is_none());
    }

    #[test]
    fn message_instruction_carries_the_fixed_text() {
        let instruction = RenderInstruction::message(ErrorCode::NetworkError);
        assert_eq!(
            instruction,
            RenderInstruction::Message {
                code: ErrorCode::NetworkError,
                text: "Network error. Please try again later.",
            }
        );
    }
}
