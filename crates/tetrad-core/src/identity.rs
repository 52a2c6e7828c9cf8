//! # Identity Stage
//!
//! Final stage. Passes a safe candidate through untouched, or replaces an
//! unsafe one with a refusal rendered by the hook. When the hook cannot
//! render one, [`FALLBACK_REFUSAL`] is used instead.

use crate::{CandidateResponse, SafetyHook, FALLBACK_REFUSAL};
use serde::{Deserialize, Serialize};

/// Rationale attached to the final decision.
///
/// Serialized under `why` when the reply passed, `why_not` when refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rationale {
    Why(Vec<String>),
    WhyNot(Vec<String>),
}

/// Decision metadata returned with the final reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub refusal: bool,
    #[serde(flatten)]
    pub rationale: Rationale,
}

impl Meta {
    /// Metadata for a candidate that was passed through.
    #[must_use]
    pub fn passed(why: Vec<String>) -> Self {
        Self {
            refusal: false,
            rationale: Rationale::Why(why),
        }
    }

    /// Metadata for a refused candidate.
    #[must_use]
    pub fn refused(why_not: Vec<String>) -> Self {
        Self {
            refusal: true,
            rationale: Rationale::WhyNot(why_not),
        }
    }

    /// The rationale list, whichever way the decision went.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        match &self.rationale {
            Rationale::Why(reasons) | Rationale::WhyNot(reasons) => reasons,
        }
    }
}

pub struct IdentityStage;

impl IdentityStage {
    /// Produce the final reply and its metadata.
    pub fn finalize(candidate: CandidateResponse, hook: &dyn SafetyHook) -> (String, Meta) {
        if candidate.safe {
            return (candidate.reply, Meta::passed(candidate.why));
        }

        let reply = match hook.render_refusal(&candidate.why) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!(stage = "identity", "hook rendered an empty refusal, using fallback");
                FALLBACK_REFUSAL.to_string()
            }
            Err(err) => {
                tracing::debug!(stage = "identity", error = %err, "refusal renderer unavailable, using fallback");
                FALLBACK_REFUSAL.to_string()
            }
        };

        (reply, Meta::refused(candidate.why))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BrokenHook, ScriptedHook};
    use crate::{NoopHook, PROTOTYPE_REPLY};

    fn candidate(safe: bool, why: &[&str]) -> CandidateResponse {
        CandidateResponse {
            reply: PROTOTYPE_REPLY.to_string(),
            why: why.iter().map(|s| s.to_string()).collect(),
            safe,
        }
    }

    #[test]
    fn safe_candidate_passes_through() {
        let hook = ScriptedHook::default().with_refusal("never used");
        let (reply, meta) = IdentityStage::finalize(candidate(true, &["baseline"]), &hook);

        assert_eq!(reply, PROTOTYPE_REPLY);
        assert_eq!(meta, Meta::passed(vec!["baseline".to_string()]));
        assert!(!meta.refusal);
    }

    #[test]
    fn unsafe_candidate_uses_hook_refusal() {
        let hook = ScriptedHook::default().with_refusal("Let's try something else.");
        let (reply, meta) =
            IdentityStage::finalize(candidate(false, &["baseline", "pattern:dan"]), &hook);

        assert_eq!(reply, "Let's try something else.");
        assert!(meta.refusal);
        assert_eq!(meta.reasons(), ["baseline", "pattern:dan"]);
    }

    #[test]
    fn unsafe_candidate_falls_back_without_renderer() {
        let (reply, meta) = IdentityStage::finalize(candidate(false, &["baseline", "pattern:x"]), &NoopHook);
        assert_eq!(reply, FALLBACK_REFUSAL);
        assert!(meta.refusal);
    }

    #[test]
    fn unsafe_candidate_falls_back_on_failure() {
        let (reply, _) = IdentityStage::finalize(candidate(false, &["baseline"]), &BrokenHook);
        assert_eq!(reply, FALLBACK_REFUSAL);
    }

    #[test]
    fn blank_refusal_falls_back() {
        let hook = ScriptedHook::default().with_refusal("  \n");
        let (reply, _) = IdentityStage::finalize(candidate(false, &["baseline"]), &hook);
        assert_eq!(reply, FALLBACK_REFUSAL);
    }

    #[test]
    fn meta_serializes_rationale_key() {
        let passed = serde_json::to_value(Meta::passed(vec!["baseline".into()])).ok();
        assert_eq!(
            passed,
            Some(serde_json::json!({"refusal": false, "why": ["baseline"]}))
        );

        let refused = serde_json::to_value(Meta::refused(vec!["baseline".into()])).ok();
        assert_eq!(
            refused,
            Some(serde_json::json!({"refusal": true, "why_not": ["baseline"]}))
        );
    }

    #[test]
    fn meta_deserializes() {
        let meta: Option<Meta> =
            serde_json::from_str(r#"{"refusal": true, "why_not": ["baseline"]}"#).ok();
        assert_eq!(meta, Some(Meta::refused(vec!["baseline".into()])));
    }
}
