//! Traits implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    CommentaireRepository, CourseRepository, CoursRepository, EventRepository, PostRepository,
    ProjetRepository, QuizRepository, RepoResult, TacheRepository,
};
