//! Core types for Samovar.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::Toman;
pub use status::{OrderStatus, Role};
