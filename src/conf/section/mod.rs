mod control;
mod log;
mod process;

pub use control::ControlConfigSection;
pub use log::LogConfigSection;
pub use process::ProcessConfigSection;
