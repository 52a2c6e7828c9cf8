//! # Orchestrator
//!
//! Runs one pass of the pipeline: Symbol → Memory → Logic → Identity.
//!
//! The orchestrator holds nothing but its hook, so a single instance serves
//! any number of requests, and `&Orchestrator` can be shared across threads.

use crate::{
    AnalysisResult, CandidateResponse, IdentityStage, LogicStage, MemoryResult, MemoryStage, Meta,
    NoopHook, SafetyHook, SymbolStage,
};
use serde::{Deserialize, Serialize};

/// Raw outputs of the first three stages, keyed by stage name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub symbol: AnalysisResult,
    pub memory: MemoryResult,
    pub logic: CandidateResponse,
}

/// Result of one pipeline pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalOutput {
    pub reply: String,
    pub meta: Meta,
    pub trace: Trace,
}

/// Composes the four stages around a [`SafetyHook`].
#[derive(Debug, Clone, Default)]
pub struct Orchestrator<H = NoopHook> {
    hook: H,
}

impl Orchestrator<NoopHook> {
    /// Orchestrator with no plugin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: SafetyHook> Orchestrator<H> {
    /// Orchestrator using the given hook.
    #[must_use]
    pub fn with_hook(hook: H) -> Self {
        Self { hook }
    }

    /// Run one request through the pipeline.
    pub fn step(&self, text: &str) -> FinalOutput {
        tracing::trace!(input = text, "pipeline step");

        let symbol = SymbolStage::analyze(text, &self.hook);
        let memory = MemoryStage::retrieve(&symbol);
        let logic = LogicStage::reason(&symbol, &memory);
        let (reply, meta) = IdentityStage::finalize(logic.clone(), &self.hook);

        tracing::debug!(
            flags = symbol.flags.len(),
            refusal = meta.refusal,
            "pipeline step complete"
        );

        FinalOutput {
            reply,
            meta,
            trace: Trace {
                symbol,
                memory,
                logic,
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
