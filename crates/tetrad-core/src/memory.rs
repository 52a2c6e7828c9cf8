//! # Memory Stage
//!
//! Second stage. Returns the same empty recall for every input; nothing is
//! retrieved and nothing is quarantined yet.

use crate::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Output of the Memory stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryResult {
    pub facts: Vec<String>,
    pub coherence_score: f64,
    pub quarantined: Vec<String>,
}

impl Default for MemoryResult {
    fn default() -> Self {
        Self {
            facts: Vec::new(),
            coherence_score: 1.0,
            quarantined: Vec::new(),
        }
    }
}

pub struct MemoryStage;

impl MemoryStage {
    pub fn retrieve(_analysis: &AnalysisResult) -> MemoryResult {
        MemoryResult::default()
    }
}
