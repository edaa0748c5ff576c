//! Slider values to prose descriptors and sampling temperatures.

use crate::prompt::prompts;
use crate::song::spec::DEFAULT_SLIDER;

/// A 0-100 slider split into three bands.
///
/// Values strictly below `low_below` are low, strictly above `high_above`
/// are high, everything else (bounds included) is the middle band.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub label: &'static str,
    pub low_below: u8,
    pub high_above: u8,
    pub low: &'static str,
    pub mid: &'static str,
    pub high: &'static str,
}

impl Descriptor {
    pub fn describe(&self, value: u8) -> &'static str {
        if value < self.low_below {
            self.low
        } else if value > self.high_above {
            self.high
        } else {
            self.mid
        }
    }

    /// `"{label}: {descriptor}"`
    pub fn clause(&self, value: u8) -> String {
        format!("{}: {}", self.label, self.describe(value))
    }
}

pub const RHYME_VARIETY: Descriptor = Descriptor {
    label: "Rhyme Variety",
    low_below: 30,
    high_above: 70,
    low: "repeat similar sounds",
    mid: "moderate rhyme variety",
    high: "vary rhymes frequently",
};

pub const INTERNAL_RHYME: Descriptor = Descriptor {
    label: "Internal Rhyme",
    low_below: 20,
    high_above: 80,
    low: "no internal rhymes",
    mid: "some internal rhymes",
    high: "heavy internal rhyming",
};

pub const CADENCE: Descriptor = Descriptor {
    label: "Cadence",
    low_below: 30,
    high_above: 70,
    low: "simple, steady rhythm",
    mid: "moderate rhythmic variation",
    high: "syncopated, complex rhythms",
};

pub const WORD_CHOICE: Descriptor = Descriptor {
    label: "Word Choice",
    low_below: 30,
    high_above: 70,
    low: "plain, everyday language",
    mid: "balanced vocabulary",
    high: "poetic, elevated vocabulary",
};

pub const DIRECTNESS: Descriptor = Descriptor {
    label: "Style",
    low_below: 30,
    high_above: 70,
    low: "literal, direct meaning",
    mid: "balance of literal and figurative",
    high: "abstract, metaphorical",
};

/// How closely the model must follow the spec, keyed by `ai_freedom`.
pub const STRICTNESS: Descriptor = Descriptor {
    label: "Strictness",
    low_below: 30,
    high_above: 70,
    low: prompts::STRICT_ADHERENCE,
    mid: prompts::BALANCED_ADHERENCE,
    high: prompts::CREATIVE_LATITUDE,
};

/// Which formula turns `ai_freedom` into a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureMode {
    /// Generate, rewrite and rewrite-section: 0.3..=1.0
    Generation,
    /// 0.5..=1.0 plus 0.05 per variant index, capped at 1.0
    Variation { index: usize },
    /// 0.4..=0.9
    CustomEdit,
    /// Always 0.7
    Transform,
}

pub const MAX_TEMPERATURE: f64 = 1.0;
pub const TRANSFORM_TEMPERATURE: f64 = 0.7;

fn resolve_freedom(freedom: Option<u8>) -> u32 {
    u32::from(freedom.unwrap_or(DEFAULT_SLIDER).min(100))
}

/// `base + freedom/100 * span (+ jitter)`, all in hundredths.
///
/// Summing integers and dividing once keeps the result the correctly rounded
/// decimal, so 50 maps to exactly 0.65 rather than 0.6499999.
fn scaled(base: u32, span: u32, freedom: u32, jitter: u32) -> f64 {
    f64::from(base * 100 + span * freedom + jitter * 100) / 10_000.0
}

pub fn freedom_to_temperature(freedom: Option<u8>, mode: TemperatureMode) -> f64 {
    let freedom = resolve_freedom(freedom);
    match mode {
        TemperatureMode::Generation => scaled(30, 70, freedom, 0),
        TemperatureMode::Variation { index } => {
            // Anything past index 10 is pinned at the ceiling anyway.
            let jitter = (index.min(10) as u32) * 5;
            scaled(50, 50, freedom, jitter).min(MAX_TEMPERATURE)
        }
        TemperatureMode::CustomEdit => scaled(40, 50, freedom, 0),
        TemperatureMode::Transform => TRANSFORM_TEMPERATURE,
    }
}

pub fn strictness_directive(freedom: Option<u8>) -> &'static str {
    STRICTNESS.describe(freedom.unwrap_or(DEFAULT_SLIDER))
}
