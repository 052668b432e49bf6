//! cracking-core
//!
//! Pure domain types for Cracking The Code: the profile record describing
//! the person being cared for, the audience and page vocabularies, and the
//! static education catalog. No I/O, no presentation.

pub mod education;
pub mod error;
pub mod models;
