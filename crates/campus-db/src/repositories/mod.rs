//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in campus-core.
//! Each repository handles database operations for a specific domain entity.

mod catalogue;
mod commentaire;
mod cours;
mod error;
mod post;
mod projet;
mod tache;

pub use catalogue::{PgCourseRepository, PgEventRepository};
pub use commentaire::PgCommentaireRepository;
pub use cours::{PgCoursRepository, PgQuizRepository};
pub use error::map_db_error;
pub use post::PgPostRepository;
pub use projet::PgProjetRepository;
pub use tache::PgTacheRepository;
