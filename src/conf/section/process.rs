use crate::process::launch::LauncherKind;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProcessConfigSection {
    /// `fork` or `spawn`.
    pub launcher: Option<String>,
}

impl ProcessConfigSection {
    pub fn launcher_kind(&self) -> LauncherKind {
        if let Some(name) = self.launcher.as_ref() {
            if let Some(kind) = LauncherKind::from_name(name) {
                return kind;
            }
            warn!(launcher = %name, "unknown launcher in config, falling back to default");
        }

        LauncherKind::default()
    }
}
