//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Results that combine several entities go through the small carrier
//! structs defined here.

use campus_core::entities::{
    Commentaire, Course, Cours, Event, Post, Projet, ProjetRef, Quiz, Tache, TacheWithProjet,
};

use super::responses::{
    CommentResponse, CommentSummary, CourseResponse, CoursDetailResponse, CoursResponse,
    EventResponse, ForumSearchItem, PostDetailResponse, PostResponse, ProjetDetailResponse,
    ProjetRefResponse, ProjetResponse, ProjetSearchItem, QuizResponse, TacheResponse,
    TacheSearchItem, TacheSummary,
};

/// Display format of creation dates in projet search results
pub const SEARCH_DATE_FORMAT: &str = "%d/%m/%Y";

// ============================================================================
// Projet / Tache Mappers
// ============================================================================

impl From<&Projet> for ProjetResponse {
    fn from(projet: &Projet) -> Self {
        Self {
            id: projet.id,
            nom: projet.nom.clone(),
            description: projet.description.clone(),
            date_creation: projet.date_creation,
            enabled: projet.enabled,
        }
    }
}

impl From<Projet> for ProjetResponse {
    fn from(projet: Projet) -> Self {
        Self::from(&projet)
    }
}

impl From<&Tache> for TacheResponse {
    fn from(tache: &Tache) -> Self {
        Self {
            id: tache.id,
            projet_id: tache.projet_id,
            titre: tache.titre.clone(),
            description: tache.description.clone(),
            statut: tache.statut,
            priorite: tache.priorite.value(),
            priorite_label: tache.priorite.label(),
            date_creation: tache.date_creation,
            enabled: tache.enabled,
        }
    }
}

impl From<Tache> for TacheResponse {
    fn from(tache: Tache) -> Self {
        Self::from(&tache)
    }
}

impl From<&Tache> for TacheSummary {
    fn from(tache: &Tache) -> Self {
        Self {
            id: tache.id,
            titre: tache.titre.clone(),
            statut: tache.statut,
            priorite: tache.priorite.value(),
        }
    }
}

impl From<&ProjetRef> for ProjetRefResponse {
    fn from(projet: &ProjetRef) -> Self {
        Self {
            id: projet.id,
            nom: projet.nom.clone(),
        }
    }
}

impl From<&TacheWithProjet> for TacheSearchItem {
    fn from(row: &TacheWithProjet) -> Self {
        let tache = &row.tache;
        Self {
            id: tache.id,
            titre: tache.titre.clone(),
            description: tache.description_excerpt(),
            statut: tache.statut,
            priorite: tache.priorite.value(),
            priorite_label: tache.priorite.label(),
            projet: ProjetRefResponse::from(&row.projet),
            enabled: tache.enabled,
        }
    }
}

/// A projet and its taches
#[derive(Debug, Clone)]
pub struct ProjetWithTaches {
    pub projet: Projet,
    pub taches: Vec<Tache>,
}

impl From<&ProjetWithTaches> for ProjetSearchItem {
    fn from(item: &ProjetWithTaches) -> Self {
        let projet = &item.projet;
        Self {
            id: projet.id,
            nom: projet.nom.clone(),
            description: projet.description_excerpt(),
            date_creation: projet.date_creation.format(SEARCH_DATE_FORMAT).to_string(),
            enabled: projet.enabled,
            taches: item.taches.iter().map(TacheSummary::from).collect(),
        }
    }
}

impl From<ProjetWithTaches> for ProjetDetailResponse {
    fn from(item: ProjetWithTaches) -> Self {
        Self {
            projet: ProjetResponse::from(&item.projet),
            taches: item.taches.iter().map(TacheResponse::from).collect(),
        }
    }
}

// ============================================================================
// Forum Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            views: post.views,
            likes: post.likes,
            image: post.image.clone(),
            link: post.link.clone(),
            tags: post.tag_list(),
            reactions: post.reactions.counts(),
            reactions_total: post.reactions.total(),
            created_by_admin: post.created_by_admin,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<&Commentaire> for CommentResponse {
    fn from(comment: &Commentaire) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content.clone(),
            author: comment.author.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            reactions: comment.reactions.counts(),
        }
    }
}

impl From<Commentaire> for CommentResponse {
    fn from(comment: Commentaire) -> Self {
        Self::from(&comment)
    }
}

impl From<&Commentaire> for CommentSummary {
    fn from(comment: &Commentaire) -> Self {
        Self {
            id: comment.id,
            author: comment.author.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

/// A post and its comments, newest first
#[derive(Debug, Clone)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Commentaire>,
}

impl From<PostWithComments> for ForumSearchItem {
    fn from(item: PostWithComments) -> Self {
        let PostWithComments { post, comments } = item;
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: post.created_at,
            image: post.image,
            tags: post.tags,
            views: post.views,
            comments_count: comments.len(),
            created_by_admin: post.created_by_admin,
            comments: comments.iter().map(CommentSummary::from).collect(),
        }
    }
}

impl From<PostWithComments> for PostDetailResponse {
    fn from(item: PostWithComments) -> Self {
        Self {
            post: PostResponse::from(&item.post),
            comments: item.comments.iter().map(CommentResponse::from).collect(),
        }
    }
}

// ============================================================================
// Cours / Quiz Mappers
// ============================================================================

impl From<&Cours> for CoursResponse {
    fn from(cours: &Cours) -> Self {
        Self {
            id: cours.id,
            titre: cours.titre.clone(),
            description: cours.description.clone(),
            date_publication: cours.date_publication,
            date_creation: cours.date_creation,
            visibilite: cours.visibilite,
            contenu: cours.contenu.clone(),
            type_contenu: cours.type_contenu,
            url_contenu: cours.url_contenu.clone(),
        }
    }
}

impl From<Cours> for CoursResponse {
    fn from(cours: Cours) -> Self {
        Self::from(&cours)
    }
}

impl From<&Quiz> for QuizResponse {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            cours_id: quiz.cours_id,
            titre: quiz.titre.clone(),
            description: quiz.description.clone(),
            questions: quiz.questions.clone(),
            date_creation: quiz.date_creation,
            date_echeance: quiz.date_echeance,
            duree: quiz.duree,
            score_max: quiz.score_max,
            tentatives: quiz.tentatives,
        }
    }
}

impl From<Quiz> for QuizResponse {
    fn from(quiz: Quiz) -> Self {
        Self::from(&quiz)
    }
}

/// A cours and its quizzes
#[derive(Debug, Clone)]
pub struct CoursWithQuizzes {
    pub cours: Cours,
    pub quizzes: Vec<Quiz>,
}

impl From<CoursWithQuizzes> for CoursDetailResponse {
    fn from(item: CoursWithQuizzes) -> Self {
        Self {
            cours: CoursResponse::from(&item.cours),
            quizzes: item.quizzes.iter().map(QuizResponse::from).collect(),
        }
    }
}

// ============================================================================
// Catalogue Mappers
// ============================================================================

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            date_creation: course.date_creation,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            titre: event.titre,
            description: event.description,
            lieu: event.lieu,
            date_evenement: event.date_evenement,
        }
    }
}
