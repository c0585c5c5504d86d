//! UI Components for the TalentHub site.
//!
//! # Layout Components
//! - [`Footer`] - Page footer with navigation, contact and legal links
//!
//! # Building Blocks
//! - [`Icon`] - Resolves an [`crate::IconKind`] to inline SVG

mod footer;
mod icon;

pub use footer::*;
pub use icon::*;
