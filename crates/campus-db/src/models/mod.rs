//! Database models - SQLx-compatible structs for PostgreSQL tables

mod catalogue;
mod cours;
mod forum;
mod projet;

pub use catalogue::{CourseModel, EventModel};
pub use cours::{CoursModel, QuizModel};
pub use forum::{CommentaireModel, PostModel, PostStatsModel, PostWithCountModel};
pub use projet::{ProjetModel, TacheModel, TacheWithProjetModel};
