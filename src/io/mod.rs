//! I/O layer: loading output parameters from config files and writing
//! parsed releases (or error records) as JSON documents.
pub mod config;
pub use config::load_params;

pub mod writers;
pub use writers::json::{ErrorRecord, INSUFFICIENT_ARGUMENTS, render_error, render_release};
