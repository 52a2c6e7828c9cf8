//! # Safety Hook
//!
//! The single extension point of the pipeline.
//!
//! A hook supplies two capabilities:
//! - `scan_patterns`: turn raw text into a list of [`Flag`]s
//! - `render_refusal`: turn a rationale list into a refusal message
//!
//! Hooks are best-effort collaborators. Any error they return is absorbed by
//! the calling stage, which substitutes its default (no flags, or the fixed
//! [`FALLBACK_REFUSAL`](crate::FALLBACK_REFUSAL)).

use crate::Flag;
use thiserror::Error;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors a hook may report. Never surfaced past the stage boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// The hook does not provide this capability.
    #[error("capability unavailable")]
    Unavailable,

    /// The hook tried and failed.
    #[error("hook failed: {0}")]
    Failed(String),

    /// The hook answered with something unusable.
    #[error("invalid hook output: {0}")]
    InvalidOutput(String),
}

// =============================================================================
// HOOK TRAIT
// =============================================================================

/// Pattern scanner and refusal renderer injected into the pipeline.
pub trait SafetyHook: Send + Sync {
    /// Scan raw input text for adversarial patterns.
    fn scan_patterns(&self, text: &str) -> Result<Vec<Flag>, HookError>;

    /// Render a refusal message for the given rationale list.
    fn render_refusal(&self, reasons: &[String]) -> Result<String, HookError>;
}

impl<H: SafetyHook + ?Sized> SafetyHook for &H {
    fn scan_patterns(&self, text: &str) -> Result<Vec<Flag>, HookError> {
        (**self).scan_patterns(text)
    }

    fn render_refusal(&self, reasons: &[String]) -> Result<String, HookError> {
        (**self).render_refusal(reasons)
    }
}

impl<H: SafetyHook + ?Sized> SafetyHook for Box<H> {
    fn scan_patterns(&self, text: &str) -> Result<Vec<Flag>, HookError> {
        (**self).scan_patterns(text)
    }

    fn render_refusal(&self, reasons: &[String]) -> Result<String, HookError> {
        (**self).render_refusal(reasons)
    }
}

// =============================================================================
// NOOP HOOK
// =============================================================================

/// The "no plugin installed" hook.
///
/// Never flags anything and has no refusal renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopHook;

impl SafetyHook for NoopHook {
    fn scan_patterns(&self, _text: &str) -> Result<Vec<Flag>, HookError> {
        Ok(Vec::new())
    }

    fn render_refusal(&self, _reasons: &[String]) -> Result<String, HookError> {
        Err(HookError::Unavailable)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_scan_is_empty() {
        assert_eq!(NoopHook.scan_patterns("anything at all"), Ok(vec![]));
    }

    #[test]
    fn noop_refusal_is_unavailable() {
        let result = NoopHook.render_refusal(&["baseline".to_string()]);
        assert_eq!(result, Err(HookError::Unavailable));
    }

    #[test]
    fn boxed_hook_delegates() {
        let hook: Box<dyn SafetyHook> = Box::new(NoopHook);
        assert_eq!(hook.scan_patterns("x"), Ok(vec![]));
        assert_eq!(hook.render_refusal(&[]), Err(HookError::Unavailable));
    }

    #[test]
    fn error_messages() {
        assert_eq!(HookError::Unavailable.to_string(), "capability unavailable");
        assert_eq!(
            HookError::Failed("exit status 2".into()).to_string(),
            "hook failed: exit status 2"
        );
    }
}
