//! cracking-portal
//!
//! The carer portal: a read-only projection of the profile record, rendered
//! as text through a Tera template and optionally packed into a DOCX for
//! printing.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
pub mod summary;
