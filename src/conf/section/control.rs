use crate::control_state::DEFAULT_PROMPT;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ControlConfigSection {
    pub prompt: Option<String>,
}

impl ControlConfigSection {
    /// The configured prompt, or [`DEFAULT_PROMPT`].
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }
}
