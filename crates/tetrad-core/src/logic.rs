//! # Logic Stage
//!
//! Third stage. Decides whether the request is safe and builds the candidate
//! reply with its rationale.
//!
//! - `safe` is true exactly when the Symbol stage reported no flags
//! - `why` is `"baseline"` followed by one `"pattern:<flag>"` per flag
//! - the reply is always [`PROTOTYPE_REPLY`]
//!
//! The memory result is accepted but not consulted.

use crate::{AnalysisResult, MemoryResult, BASELINE_REASON, PATTERN_PREFIX, PROTOTYPE_REPLY};
use serde::{Deserialize, Serialize};

/// Output of the Logic stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub reply: String,
    /// Rationale, in order.
    pub why: Vec<String>,
    pub safe: bool,
}

pub struct LogicStage;

impl LogicStage {
    pub fn reason(analysis: &AnalysisResult, _memory: &MemoryResult) -> CandidateResponse {
        let mut why = Vec::with_capacity(analysis.flags.len() + 1);
        why.push(BASELINE_REASON.to_string());
        why.extend(
            analysis
                .flags
                .iter()
                .map(|flag| format!("{}{}", PATTERN_PREFIX, flag.as_str())),
        );

        CandidateResponse {
            reply: PROTOTYPE_REPLY.to_string(),
            why,
            safe: !analysis.is_flagged(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
