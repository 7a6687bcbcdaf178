use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfigSection {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `debug` or `lsh::process=trace`.
    pub filter: Option<String>,
}
