//! Host adapters for sdkprobe.
//!
//! Everything that touches the running process lives here: capturing the
//! environment, searching `PATH` for executables and writing Cargo
//! build-script directives.
#![deny(unsafe_code)]

pub mod build_script;
pub mod process_env;
pub mod tool_locator;

pub use build_script::{CargoDirectives, write_directives};
pub use process_env::snapshot_process_env;
pub use tool_locator::{PathToolLocator, exists};
