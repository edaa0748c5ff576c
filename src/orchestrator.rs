//! Runs built instructions against a provider, one call or a parallel batch.

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::LyricError;
use crate::llm::TextProvider;
use crate::prompt::builder::{self, Instruction, Plan};
use crate::song::OperationContext;

/// Hard cap on parallel variants per request. Larger requests are clamped silently.
pub const MAX_VARIANTS: usize = 6;

pub fn clamp_variant_count(requested: usize) -> usize {
    requested.min(MAX_VARIANTS)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub index: usize,
    pub lyrics: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantFailure {
    pub index: usize,
    pub error: String,
}

/// Successful variants in index order, plus the per-index failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantBatch {
    pub variants: Vec<Variant>,
    /// The clamped count, not what the caller asked for.
    pub total_requested: usize,
    pub total_generated: usize,
    #[serde(skip)]
    pub failures: Vec<VariantFailure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Lyrics { lyrics: String },
    Variants(VariantBatch),
}

pub struct Orchestrator<'a> {
    provider: &'a dyn TextProvider,
    progress: Option<ProgressBar>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(provider: &'a dyn TextProvider) -> Self {
        Orchestrator {
            provider,
            progress: None,
        }
    }

    /// Tick `progress` once per finished variant call.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Validate, build and run one operation.
    pub fn run(&self, ctx: &OperationContext) -> Result<Outcome, LyricError> {
        ctx.validate()?;
        log::info!(
            "Running {} with provider {} ({})",
            ctx.kind().as_str(),
            self.provider.name(),
            self.provider.model()
        );
        match builder::build(ctx) {
            Plan::Single(instruction) => {
                let lyrics = self.generate_one(&instruction)?;
                Ok(Outcome::Lyrics { lyrics })
            }
            Plan::Fanout(instructions) => {
                self.generate_variants(instructions).map(Outcome::Variants)
            },
        }
    }

    pub fn generate_one(&self, instruction: &Instruction) -> Result<String, LyricError> {
        self.provider
            .generate(&instruction.instruction, instruction.temperature)
    }

    /// Run a built variations batch concurrently; slot `i` of the result is call `i`.
    pub fn generate_variants(
        &self,
        instructions: Vec<Instruction>,
    ) -> Result<VariantBatch, LyricError> {
        let count = instructions.len();
        if count == 0 {
            return Ok(VariantBatch {
                variants: Vec::new(),
                total_requested: 0,
                total_generated: 0,
                failures: Vec::new(),
            });
        }

        log::info!("Generating {count} variants in parallel");
        if let Some(pb) = &self.progress {
            pb.set_length(count as u64);
        }

        // One worker per variant so every call is in flight at once.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(count)
            .build()
            .map_err(|e| {
                LyricError::Configuration(format!("failed to start variant workers: {e}"))
            })?;

        // Slot i holds the outcome of call i regardless of completion order.
        let slots: Vec<Result<String, LyricError>> = pool.install(|| {
            instructions
                .par_iter()
                .map(|instruction| {
                    let result = self.generate_one(instruction);
                    if let Some(pb) = &self.progress {
                        pb.inc(1);
                    }
                    result
                })
                .collect()
        });

        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }

        let mut variants = Vec::new();
        let mut failures = Vec::new();
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Ok(lyrics) => variants.push(Variant { index, lyrics }),
                // Missing credentials fail every call the same way; report it once.
                Err(err @ LyricError::Configuration(_)) => return Err(err),
                Err(err) => {
                    log::error!("Variation {index} failed: {err}");
                    failures.push(VariantFailure {
                        index,
                        error: err.to_string(),
                    });
                }
            }
        }

        log::info!("{} of {count} variants generated", variants.len());

        Ok(VariantBatch {
            total_requested: count,
            total_generated: variants.len(),
            variants,
            failures,
        })
    }
}
