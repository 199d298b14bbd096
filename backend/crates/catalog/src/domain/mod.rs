//! Domain Layer
//!
//! The category rule table and the validated category it produces.

pub mod entities;
pub mod rules;
