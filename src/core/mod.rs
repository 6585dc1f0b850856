//! Core module containing the validation orchestration components
//!
//! This module contains:
//! - Text buffers backing the two input surfaces
//! - The local syntax gate run before any remote call
//! - The request coordinator and its state machine
//! - Issue normalization and annotation projection
//! - The session tying the components together

pub mod annotate;
mod buffer;
mod coordinator;
pub mod gate;
mod import;
mod issue;
mod session;
mod state;

pub use annotate::*;
pub use buffer::*;
pub use coordinator::*;
pub use gate::*;
pub use import::*;
pub use issue::*;
pub use session::*;
pub use state::*;
