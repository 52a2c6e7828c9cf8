//! Scripted hooks shared by the unit tests.

use crate::{Flag, HookError, SafetyHook};

/// Hook with canned answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHook {
    pub flags: Vec<&'static str>,
    pub refusal: Option<&'static str>,
}

impl ScriptedHook {
    pub fn flagging(flags: &[&'static str]) -> Self {
        Self {
            flags: flags.to_vec(),
            refusal: None,
        }
    }

    pub fn with_refusal(mut self, refusal: &'static str) -> Self {
        self.refusal = Some(refusal);
        self
    }
}

impl SafetyHook for ScriptedHook {
    fn scan_patterns(&self, _text: &str) -> Result<Vec<Flag>, HookError> {
        Ok(self.flags.iter().map(|f| Flag::new(*f)).collect())
    }

    fn render_refusal(&self, _reasons: &[String]) -> Result<String, HookError> {
        self.refusal
            .map(str::to_string)
            .ok_or(HookError::Unavailable)
    }
}

/// Hook whose every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenHook;

impl SafetyHook for BrokenHook {
    fn scan_patterns(&self, _text: &str) -> Result<Vec<Flag>, HookError> {
        Err(HookError::Failed("scanner crashed".into()))
    }

    fn render_refusal(&self, _reasons: &[String]) -> Result<String, HookError> {
        Err(HookError::Failed("renderer crashed".into()))
    }
}
