//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod catalogue;
pub mod cours;
pub mod forum;
pub mod forum_interaction;
pub mod health;
pub mod projets;
pub mod quiz;
pub mod taches;
