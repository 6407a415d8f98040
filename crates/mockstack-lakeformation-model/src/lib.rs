//! Lake Formation model types for MockStack.
//!
//! This crate provides the Lake Formation API types needed by the MockStack
//! Lake Formation backend. The service speaks a JSON protocol, so the types
//! are hand-written with serde derives following the wire field naming.
// "LFTag" and friends appear throughout the AWS documentation text.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod output;
pub mod types;

pub use error::{LakeFormationError, LakeFormationErrorCode};
pub use types::{DataLakePrincipal, DataLakeResource, LFTagPair, Permission};
