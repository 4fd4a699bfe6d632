//! Entity to model mappers
//!
//! This module provides conversions between domain entities (campus-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Values` structs: Prepare entity data in column representation

mod cours;
mod forum;
mod projet;

pub use forum::reactions_from_json;
pub use projet::TacheValues;
