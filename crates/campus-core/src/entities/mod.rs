//! Domain entities - core business objects

mod catalogue;
mod commentaire;
mod cours;
mod post;
mod projet;
mod quiz;
mod tache;

pub use catalogue::{Course, Event, NewCourse, NewEvent};
pub use commentaire::{Commentaire, NewCommentaire};
pub use cours::{Cours, NewCours, TypeContenu};
pub use post::{NewPost, Post, PostStats, ANONYMOUS_AUTHOR};
pub use projet::{NewProjet, Projet, ProjetRef};
pub use quiz::{parse_questions, NewQuiz, Quiz};
pub use tache::{NewTache, Tache, TacheWithProjet};
