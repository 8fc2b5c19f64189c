//! Core types for StickerFly.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod size;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use size::{SizeUnit, StickerSize};
pub use status::*;
