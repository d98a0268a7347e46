//! CLI command implementations.

mod config;
mod doctor;
mod render;
mod serve;
mod transcribe;

pub use config::run_config;
pub use doctor::run_doctor;
pub use render::run_render;
pub use serve::run_serve;
pub use transcribe::run_transcribe;
