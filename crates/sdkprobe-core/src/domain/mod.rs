//! Pure domain types for SDK detection.
//!
//! These types carry no infrastructure dependencies. The environment is
//! always passed in as an [`EnvironmentSnapshot`], never read from the
//! process.

mod delta;
mod env;
mod layout;
mod result;

pub use delta::ConfigDelta;
pub use env::EnvironmentSnapshot;
pub use layout::{DEFAULT_PLATFORM_INCLUDE_SUBDIR, DEFAULT_PLATFORM_LIB_SUBDIR, SdkLayout};
pub use result::ProbeResult;
