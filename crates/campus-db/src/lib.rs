//! # campus-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `campus-core`. It handles:
//!
//! - Connection pool management and SQL migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use campus_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use campus_db::repositories::PgPostRepository;
//! use campus_core::traits::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let posts = PgPostRepository::new(pool);
//!
//!     let recent = posts.list_recent().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, create_pool_from_env, migrations_dir, run_migrations, DatabaseConfig, PgPool,
};
pub use repositories::{
    PgCommentaireRepository, PgCourseRepository, PgCoursRepository, PgEventRepository,
    PgPostRepository, PgProjetRepository, PgQuizRepository, PgTacheRepository,
};
