//! Offline schema embedding generator.
//!
//! Provides:
//! - `embed`: builds the C string-literal declaration that embeds a schema
//! - `error`: the two failure kinds of a generation pass
//! - `runtime`: helper functions for running the generator against files
//!
//! The generator reads a SQL schema file, strips inline `--` comments, and
//! writes a header fragment declaring the schema as a single string constant.
//! It can be driven by the bundled binary or called from a build script via
//! [`runtime::generate`].

pub mod embed;
pub mod error;
pub mod runtime;

pub mod prelude {
    pub use crate::embed::*;
    pub use crate::error::*;
    pub use crate::runtime::*;
}
