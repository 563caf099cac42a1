//! Data types for the ProofRails API
//!
//! Request options are plain structs; response types are decoded leniently
//! because the server mixes snake_case and camelCase keys.

pub use common::*;
pub use iso::*;
pub use project::*;
pub use receipt::*;
pub use verification::*;

pub mod common;
pub mod iso;
pub mod project;
pub mod receipt;
pub mod verification;

pub(crate) mod record;
