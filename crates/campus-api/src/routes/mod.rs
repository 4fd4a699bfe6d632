//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{
    admin, catalogue, cours, forum, forum_interaction, health, projets, quiz, taches,
};
use crate::state::AppState;

/// Create the main router with every route
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(projet_routes())
        .merge(tache_routes())
        .merge(forum_routes())
        .merge(forum_interaction_routes())
        .merge(admin_routes())
        .merge(cours_routes())
        .merge(catalogue_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn projet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projets",
            get(projets::list_projets).post(projets::create_projet),
        )
        .route("/projets/api/search", get(projets::search_projets))
        .route(
            "/projets/:id",
            get(projets::get_projet)
                .put(projets::update_projet)
                .delete(projets::delete_projet),
        )
}

fn tache_routes() -> Router<AppState> {
    Router::new()
        .route("/taches", get(taches::list_taches).post(taches::create_tache))
        .route("/taches/api/search", get(taches::search_taches))
        .route(
            "/taches/:id",
            get(taches::get_tache)
                .put(taches::update_tache)
                .delete(taches::delete_tache),
        )
}

fn forum_routes() -> Router<AppState> {
    Router::new()
        .route("/forum", get(forum::list_posts).post(forum::create_post))
        .route("/forum/search", get(forum::search_posts))
        .route(
            "/forum/:id",
            get(forum::get_post)
                .put(forum::update_post)
                .delete(forum::delete_post),
        )
        .route("/forum/:id/like", post(forum::like_post))
        .route("/forum/:id/comments/search", get(forum::search_comments))
}

/// Reaction and comment endpoints used by the forum pages
fn forum_interaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/forum-interaction/react/:id",
            post(forum_interaction::react_to_post),
        )
        .route(
            "/forum-interaction/comment-react/:id",
            post(forum_interaction::react_to_comment),
        )
        .route(
            "/forum-interaction/comment/:id",
            post(forum_interaction::add_comment),
        )
        .route(
            "/forum-interaction/comment-edit/:id",
            post(forum_interaction::edit_comment),
        )
        // Plain HTML forms can only POST
        .route(
            "/forum-interaction/comment-delete/:id",
            post(forum_interaction::delete_comment).delete(forum_interaction::delete_comment),
        )
}

/// Admin area: projects dashboard and forum moderation
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(projets::dashboard))
        .route("/admin/forum", get(admin::forum_dashboard))
        .route(
            "/admin/posts",
            get(admin::list_admin_posts).post(admin::create_admin_post),
        )
        .route(
            "/admin/posts/:id",
            put(admin::update_admin_post).delete(admin::delete_admin_post),
        )
        .route(
            "/admin/posts/all/:id",
            put(admin::update_any_post).delete(admin::delete_any_post),
        )
        .route(
            "/admin/posts/:id/comments/:comment_id",
            put(admin::update_post_comment).delete(admin::delete_post_comment),
        )
        .route(
            "/admin/comments/:id",
            put(admin::update_comment).delete(admin::delete_comment),
        )
}

fn cours_routes() -> Router<AppState> {
    Router::new()
        .route("/cours", get(cours::list_cours).post(cours::create_cours))
        .route(
            "/cours/:id",
            get(cours::get_cours)
                .put(cours::update_cours)
                .delete(cours::delete_cours),
        )
        .route("/cours/:id/quiz", get(cours::list_cours_quizzes))
        .route("/quiz", get(quiz::list_quizzes).post(quiz::create_quiz))
        .route(
            "/quiz/:id",
            get(quiz::get_quiz)
                .put(quiz::update_quiz)
                .delete(quiz::delete_quiz),
        )
}

fn catalogue_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(catalogue::list_courses).post(catalogue::create_course),
        )
        .route(
            "/events",
            get(catalogue::list_events).post(catalogue::create_event),
        )
}
