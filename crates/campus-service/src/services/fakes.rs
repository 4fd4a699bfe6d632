//! In-memory repositories for service tests

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use campus_core::entities::{
    Commentaire, Course, Cours, Event, NewCommentaire, NewCourse, NewCours, NewEvent, NewPost,
    NewProjet, NewQuiz, NewTache, Post, PostStats, Projet, ProjetRef, Quiz, Tache,
    TacheWithProjet,
};
use campus_core::traits::{
    CommentaireRepository, CourseRepository, CoursRepository, EventRepository, PostRepository,
    ProjetRepository, QuizRepository, RepoResult, TacheRepository,
};
use campus_core::value_objects::{
    sort_by_comment_count, CommentaireFilter, CommentaireSortField, PostFilter, PostSortField,
    ProjetSearch, ProjetSortField, ReactionList, SortDirection, TacheSearch, TacheSortField,
    DEFAULT_SEARCH_LIMIT,
};
use campus_core::DomainError;
use chrono::{Duration, Utc};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    next_id: i64,
    projets: Vec<Projet>,
    taches: Vec<Tache>,
    posts: Vec<Post>,
    comments: Vec<Commentaire>,
    cours: Vec<Cours>,
    quizzes: Vec<Quiz>,
    courses: Vec<Course>,
    events: Vec<Event>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn comment_count(&self, post_id: i64) -> i64 {
        self.comments.iter().filter(|c| c.post_id == post_id).count() as i64
    }
}

/// Every repository trait over one shared in-memory state
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Insert a post directly, with a creation time `age_minutes` in the past
    pub fn seed_post(&self, title: &str, author: &str, admin: bool, age_minutes: i64) -> Post {
        let mut state = self.state();
        let post = Post {
            id: state.next_id(),
            title: title.to_string(),
            content: format!("{title} content"),
            author: author.to_string(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
            updated_at: None,
            views: 0,
            likes: 0,
            image: None,
            link: None,
            tags: None,
            reactions: ReactionList::new(),
            created_by_admin: admin,
        };
        state.posts.push(post.clone());
        post
    }

    /// Insert a comment directly
    pub fn seed_comment(&self, post_id: i64, author: &str, content: &str) -> Commentaire {
        let mut state = self.state();
        let comment = Commentaire {
            id: state.next_id(),
            post_id,
            content: content.to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
            updated_at: None,
            reactions: ReactionList::new(),
        };
        state.comments.push(comment.clone());
        comment
    }

    pub fn post(&self, id: i64) -> Option<Post> {
        self.state().posts.iter().find(|p| p.id == id).cloned()
    }

    pub fn comment(&self, id: i64) -> Option<Commentaire> {
        self.state().comments.iter().find(|c| c.id == id).cloned()
    }
}

/// Context whose repositories all share `store`
pub fn context(store: &Arc<MemoryStore>) -> ServiceContext {
    context_with_page_size(store, DEFAULT_SEARCH_LIMIT)
}

pub fn context_with_page_size(store: &Arc<MemoryStore>, page_size: i64) -> ServiceContext {
    ServiceContextBuilder::new()
        .search_page_size(page_size)
        .projet_repo(store.clone())
        .tache_repo(store.clone())
        .post_repo(store.clone())
        .commentaire_repo(store.clone())
        .cours_repo(store.clone())
        .quiz_repo(store.clone())
        .course_repo(store.clone())
        .event_repo(store.clone())
        .build()
        .unwrap()
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn directed<T, K: Ord>(items: &mut [T], direction: SortDirection, key: impl Fn(&T) -> K) {
    items.sort_by(|a, b| {
        let ord = key(a).cmp(&key(b));
        if direction.is_asc() {
            ord
        } else {
            ord.reverse()
        }
    });
}

// ============================================================================
// Projets / Taches
// ============================================================================

fn projet_matches(projet: &Projet, query: &ProjetSearch) -> bool {
    (!query.enabled_only || projet.enabled)
        && query.search.as_deref().is_none_or(|s| {
            contains(&projet.nom, s) || contains(&projet.description, s)
        })
        && query.dates.contains(projet.date_creation)
}

#[async_trait]
impl ProjetRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Projet>> {
        Ok(self.state().projets.iter().find(|p| p.id == id).cloned())
    }

    async fn list_enabled(&self) -> RepoResult<Vec<Projet>> {
        let mut projets: Vec<Projet> =
            self.state().projets.iter().filter(|p| p.enabled).cloned().collect();
        projets.reverse();
        Ok(projets)
    }

    async fn search(&self, query: &ProjetSearch) -> RepoResult<Vec<Projet>> {
        let mut projets: Vec<Projet> = self
            .state()
            .projets
            .iter()
            .filter(|p| projet_matches(p, query))
            .cloned()
            .collect();
        match query.sort {
            ProjetSortField::Nom => directed(&mut projets, query.direction, |p| p.nom.clone()),
            ProjetSortField::Date => {
                directed(&mut projets, query.direction, |p| (p.date_creation, p.id));
            }
            ProjetSortField::Id => directed(&mut projets, query.direction, |p| p.id),
        }
        Ok(query.page.slice(projets))
    }

    async fn count_search(&self, query: &ProjetSearch) -> RepoResult<i64> {
        Ok(self.state().projets.iter().filter(|p| projet_matches(p, query)).count() as i64)
    }

    async fn count(&self, enabled_only: bool) -> RepoResult<i64> {
        Ok(self
            .state()
            .projets
            .iter()
            .filter(|p| !enabled_only || p.enabled)
            .count() as i64)
    }

    async fn create(&self, projet: &NewProjet) -> RepoResult<Projet> {
        let mut state = self.state();
        let created = Projet {
            id: state.next_id(),
            nom: projet.nom.clone(),
            description: projet.description.clone(),
            date_creation: Utc::now(),
            enabled: projet.enabled,
        };
        state.projets.push(created.clone());
        Ok(created)
    }

    async fn update(&self, projet: &Projet) -> RepoResult<()> {
        let mut state = self.state();
        let slot = state
            .projets
            .iter_mut()
            .find(|p| p.id == projet.id)
            .ok_or(DomainError::ProjetNotFound(projet.id))?;
        *slot = projet.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.projets.len();
        state.projets.retain(|p| p.id != id);
        if state.projets.len() == before {
            return Err(DomainError::ProjetNotFound(id));
        }
        state.taches.retain(|t| t.projet_id != id);
        Ok(())
    }
}

fn tache_matches(tache: &Tache, query: &TacheSearch) -> bool {
    (!query.enabled_only || tache.enabled)
        && query.search.as_deref().is_none_or(|s| {
            contains(&tache.titre, s) || contains(&tache.description, s)
        })
        && query.projet_id.is_none_or(|id| tache.projet_id == id)
        && query.statut.is_none_or(|s| tache.statut == s)
        && query.priorite.is_none_or(|p| tache.priorite == p)
}

#[async_trait]
impl TacheRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Tache>> {
        Ok(self.state().taches.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Tache>> {
        let mut taches = self.state().taches.clone();
        taches.reverse();
        Ok(taches)
    }

    async fn find_by_projet(&self, projet_id: i64) -> RepoResult<Vec<Tache>> {
        Ok(self
            .state()
            .taches
            .iter()
            .filter(|t| t.projet_id == projet_id)
            .cloned()
            .collect())
    }

    async fn find_by_projets(&self, projet_ids: &[i64]) -> RepoResult<Vec<Tache>> {
        Ok(self
            .state()
            .taches
            .iter()
            .filter(|t| projet_ids.contains(&t.projet_id))
            .cloned()
            .collect())
    }

    async fn search(&self, query: &TacheSearch) -> RepoResult<Vec<TacheWithProjet>> {
        let state = self.state();
        let mut taches: Vec<Tache> = state
            .taches
            .iter()
            .filter(|t| tache_matches(t, query))
            .cloned()
            .collect();
        match query.sort {
            TacheSortField::Titre => directed(&mut taches, query.direction, |t| t.titre.clone()),
            TacheSortField::Date => directed(&mut taches, query.direction, |t| (t.date_creation, t.id)),
            TacheSortField::Statut => {
                directed(&mut taches, query.direction, |t| t.statut.as_str().to_string());
            }
            TacheSortField::Priorite => directed(&mut taches, query.direction, |t| t.priorite),
            TacheSortField::Id => directed(&mut taches, query.direction, |t| t.id),
        }
        Ok(query
            .page
            .slice(taches)
            .into_iter()
            .filter_map(|tache| {
                let projet = state.projets.iter().find(|p| p.id == tache.projet_id)?;
                Some(TacheWithProjet {
                    projet: ProjetRef::from(projet),
                    tache,
                })
            })
            .collect())
    }

    async fn count_search(&self, query: &TacheSearch) -> RepoResult<i64> {
        Ok(self.state().taches.iter().filter(|t| tache_matches(t, query)).count() as i64)
    }

    async fn count(&self, enabled_only: bool) -> RepoResult<i64> {
        Ok(self
            .state()
            .taches
            .iter()
            .filter(|t| !enabled_only || t.enabled)
            .count() as i64)
    }

    async fn create(&self, tache: &NewTache) -> RepoResult<Tache> {
        let mut state = self.state();
        if !state.projets.iter().any(|p| p.id == tache.projet_id) {
            return Err(DomainError::ProjetNotFound(tache.projet_id));
        }
        let created = Tache {
            id: state.next_id(),
            projet_id: tache.projet_id,
            titre: tache.titre.clone(),
            description: tache.description.clone(),
            statut: tache.statut,
            priorite: tache.priorite,
            date_creation: Utc::now(),
            enabled: tache.enabled,
        };
        state.taches.push(created.clone());
        Ok(created)
    }

    async fn update(&self, tache: &Tache) -> RepoResult<()> {
        let mut state = self.state();
        if !state.projets.iter().any(|p| p.id == tache.projet_id) {
            return Err(DomainError::ProjetNotFound(tache.projet_id));
        }
        let slot = state
            .taches
            .iter_mut()
            .find(|t| t.id == tache.id)
            .ok_or(DomainError::TacheNotFound(tache.id))?;
        *slot = tache.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.taches.len();
        state.taches.retain(|t| t.id != id);
        if state.taches.len() == before {
            return Err(DomainError::TacheNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Forum
// ============================================================================

fn post_matches(post: &Post, filter: &PostFilter) -> bool {
    filter
        .q
        .as_deref()
        .is_none_or(|q| contains(&post.title, q) || contains(&post.content, q))
        && (filter.tags.is_empty()
            || filter
                .tags
                .iter()
                .any(|tag| post.tags.as_deref().is_some_and(|t| contains(t, tag))))
        && filter.author.as_deref().is_none_or(|a| contains(&post.author, a))
        && filter.dates.contains(post.created_at)
        && filter.created_by_admin.is_none_or(|admin| post.created_by_admin == admin)
}

fn sort_posts(posts: &mut [Post], sort: PostSortField, direction: SortDirection) {
    match sort {
        PostSortField::Views => directed(posts, direction, |p| (p.views, p.id)),
        PostSortField::Title => directed(posts, direction, |p| (p.title.clone(), p.id)),
        PostSortField::Author => directed(posts, direction, |p| (p.author.clone(), p.id)),
        PostSortField::CreatedAt | PostSortField::CommentsCount => {
            directed(posts, direction, |p| (p.created_at, p.id));
        }
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        Ok(self.post(id))
    }

    async fn list_recent(&self) -> RepoResult<Vec<Post>> {
        let mut posts = self.state().posts.clone();
        sort_posts(&mut posts, PostSortField::CreatedAt, SortDirection::Desc);
        Ok(posts)
    }

    async fn list_admin_posts(&self) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> =
            self.state().posts.iter().filter(|p| p.created_by_admin).cloned().collect();
        sort_posts(&mut posts, PostSortField::CreatedAt, SortDirection::Desc);
        Ok(posts)
    }

    async fn search(&self, filter: &PostFilter) -> RepoResult<Vec<Post>> {
        let state = self.state();
        let mut posts: Vec<Post> =
            state.posts.iter().filter(|p| post_matches(p, filter)).cloned().collect();
        if filter.sort == PostSortField::CommentsCount {
            posts.sort_by_key(|p| p.id);
            let rows = posts
                .into_iter()
                .map(|p| {
                    let count = state.comment_count(p.id);
                    (p, count)
                })
                .collect();
            return Ok(filter.page.slice(sort_by_comment_count(rows, filter.direction)));
        }
        sort_posts(&mut posts, filter.sort, filter.direction);
        Ok(filter.page.slice(posts))
    }

    async fn count_search(&self, filter: &PostFilter) -> RepoResult<i64> {
        Ok(self.state().posts.iter().filter(|p| post_matches(p, filter)).count() as i64)
    }

    async fn find_by_ids(
        &self,
        ids: &[i64],
        sort: PostSortField,
        direction: SortDirection,
    ) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> =
            self.state().posts.iter().filter(|p| ids.contains(&p.id)).cloned().collect();
        sort_posts(&mut posts, sort, direction);
        Ok(posts)
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let mut state = self.state();
        let created = Post {
            id: state.next_id(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: Utc::now(),
            updated_at: None,
            views: 0,
            likes: 0,
            image: post.image.clone(),
            link: post.link.clone(),
            tags: post.tags.clone(),
            reactions: ReactionList::new(),
            created_by_admin: post.created_by_admin,
        };
        state.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut state = self.state();
        let slot = state
            .posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(DomainError::PostNotFound(post.id))?;
        *slot = post.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(DomainError::PostNotFound(id));
        }
        state.comments.retain(|c| c.post_id != id);
        Ok(())
    }

    async fn increment_views(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PostNotFound(id))?;
        post.views += 1;
        Ok(())
    }

    async fn increment_likes(&self, id: i64) -> RepoResult<i32> {
        let mut state = self.state();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PostNotFound(id))?;
        post.likes += 1;
        Ok(post.likes)
    }

    async fn update_reactions(&self, id: i64, reactions: &ReactionList) -> RepoResult<()> {
        let mut state = self.state();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PostNotFound(id))?;
        post.reactions = reactions.clone();
        Ok(())
    }

    async fn stats(&self) -> RepoResult<PostStats> {
        let state = self.state();
        Ok(PostStats {
            total_posts: state.posts.len() as i64,
            total_views: state.posts.iter().map(|p| i64::from(p.views)).sum(),
        })
    }
}

fn comment_matches(comment: &Commentaire, filter: &CommentaireFilter) -> bool {
    filter.post_id.is_none_or(|id| comment.post_id == id)
        && filter.author.as_deref().is_none_or(|a| comment.author == a)
        && filter.q.as_deref().is_none_or(|q| contains(&comment.content, q))
        && filter.dates.contains(comment.created_at)
}

fn newest_first(comments: &mut [Commentaire]) {
    directed(comments, SortDirection::Desc, |c| (c.created_at, c.id));
}

#[async_trait]
impl CommentaireRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Commentaire>> {
        Ok(self.comment(id))
    }

    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Commentaire>> {
        self.find_by_posts(&[post_id]).await
    }

    async fn find_by_posts(&self, post_ids: &[i64]) -> RepoResult<Vec<Commentaire>> {
        let mut comments: Vec<Commentaire> = self
            .state()
            .comments
            .iter()
            .filter(|c| post_ids.contains(&c.post_id))
            .cloned()
            .collect();
        newest_first(&mut comments);
        Ok(comments)
    }

    async fn search(&self, filter: &CommentaireFilter) -> RepoResult<Vec<Commentaire>> {
        let mut comments: Vec<Commentaire> = self
            .state()
            .comments
            .iter()
            .filter(|c| comment_matches(c, filter))
            .cloned()
            .collect();
        match filter.sort {
            CommentaireSortField::CreatedAt => {
                directed(&mut comments, filter.direction, |c| (c.created_at, c.id));
            }
            CommentaireSortField::Author => {
                directed(&mut comments, filter.direction, |c| (c.author.clone(), c.id));
            }
        }
        Ok(filter.page.slice(comments))
    }

    async fn count_search(&self, filter: &CommentaireFilter) -> RepoResult<i64> {
        Ok(self
            .state()
            .comments
            .iter()
            .filter(|c| comment_matches(c, filter))
            .count() as i64)
    }

    async fn find_post_ids_by_author(&self, author: &str) -> RepoResult<Vec<i64>> {
        let mut ids: Vec<i64> = self
            .state()
            .comments
            .iter()
            .filter(|c| contains(&c.author, author))
            .map(|c| c.post_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }

    async fn create(&self, commentaire: &NewCommentaire) -> RepoResult<Commentaire> {
        if self.post(commentaire.post_id).is_none() {
            return Err(DomainError::PostNotFound(commentaire.post_id));
        }
        Ok(self.seed_comment(commentaire.post_id, &commentaire.author, &commentaire.content))
    }

    async fn update(&self, commentaire: &Commentaire) -> RepoResult<()> {
        let mut state = self.state();
        let slot = state
            .comments
            .iter_mut()
            .find(|c| c.id == commentaire.id)
            .ok_or(DomainError::CommentaireNotFound(commentaire.id))?;
        *slot = commentaire.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.comments.len();
        state.comments.retain(|c| c.id != id);
        if state.comments.len() == before {
            return Err(DomainError::CommentaireNotFound(id));
        }
        Ok(())
    }

    async fn update_reactions(&self, id: i64, reactions: &ReactionList) -> RepoResult<()> {
        let mut state = self.state();
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::CommentaireNotFound(id))?;
        comment.reactions = reactions.clone();
        Ok(())
    }
}

// ============================================================================
// Cours / Quiz / Catalogue
// ============================================================================

#[async_trait]
impl CoursRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Cours>> {
        Ok(self.state().cours.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Cours>> {
        let mut cours = self.state().cours.clone();
        directed(&mut cours, SortDirection::Desc, |c| (c.date_publication, c.id));
        Ok(cours)
    }

    async fn create(&self, cours: &NewCours) -> RepoResult<Cours> {
        let mut state = self.state();
        let created = Cours {
            id: state.next_id(),
            titre: cours.titre.clone(),
            description: cours.description.clone(),
            date_publication: cours.date_publication,
            date_creation: Utc::now(),
            visibilite: cours.visibilite,
            contenu: cours.contenu.clone(),
            type_contenu: cours.type_contenu,
            url_contenu: cours.url_contenu.clone(),
        };
        state.cours.push(created.clone());
        Ok(created)
    }

    async fn update(&self, cours: &Cours) -> RepoResult<()> {
        let mut state = self.state();
        let slot = state
            .cours
            .iter_mut()
            .find(|c| c.id == cours.id)
            .ok_or(DomainError::CoursNotFound(cours.id))?;
        *slot = cours.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.cours.len();
        state.cours.retain(|c| c.id != id);
        if state.cours.len() == before {
            return Err(DomainError::CoursNotFound(id));
        }
        state.quizzes.retain(|q| q.cours_id != id);
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Quiz>> {
        Ok(self.state().quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Quiz>> {
        let mut quizzes = self.state().quizzes.clone();
        quizzes.reverse();
        Ok(quizzes)
    }

    async fn find_by_cours(&self, cours_id: i64) -> RepoResult<Vec<Quiz>> {
        let mut quizzes: Vec<Quiz> = self
            .state()
            .quizzes
            .iter()
            .filter(|q| q.cours_id == cours_id)
            .cloned()
            .collect();
        directed(&mut quizzes, SortDirection::Asc, |q| (q.date_echeance, q.id));
        Ok(quizzes)
    }

    async fn create(&self, quiz: &NewQuiz) -> RepoResult<Quiz> {
        let mut state = self.state();
        if !state.cours.iter().any(|c| c.id == quiz.cours_id) {
            return Err(DomainError::CoursNotFound(quiz.cours_id));
        }
        let created = Quiz {
            id: state.next_id(),
            cours_id: quiz.cours_id,
            titre: quiz.titre.clone(),
            description: quiz.description.clone(),
            questions: quiz.questions.clone(),
            date_creation: Utc::now(),
            date_echeance: quiz.date_echeance,
            duree: quiz.duree,
            score_max: quiz.score_max,
            tentatives: quiz.tentatives,
        };
        state.quizzes.push(created.clone());
        Ok(created)
    }

    async fn update(&self, quiz: &Quiz) -> RepoResult<()> {
        let mut state = self.state();
        if !state.cours.iter().any(|c| c.id == quiz.cours_id) {
            return Err(DomainError::CoursNotFound(quiz.cours_id));
        }
        let slot = state
            .quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(DomainError::QuizNotFound(quiz.id))?;
        *slot = quiz.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.quizzes.len();
        state.quizzes.retain(|q| q.id != id);
        if state.quizzes.len() == before {
            return Err(DomainError::QuizNotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn list_enabled(&self) -> RepoResult<Vec<Course>> {
        let mut courses: Vec<Course> =
            self.state().courses.iter().filter(|c| c.enabled).cloned().collect();
        courses.reverse();
        Ok(courses)
    }

    async fn create(&self, course: &NewCourse) -> RepoResult<Course> {
        let mut state = self.state();
        let created = Course {
            id: state.next_id(),
            title: course.title.clone(),
            description: course.description.clone(),
            date_creation: Utc::now(),
            enabled: course.enabled,
        };
        state.courses.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn list_enabled(&self) -> RepoResult<Vec<Event>> {
        let mut events: Vec<Event> =
            self.state().events.iter().filter(|e| e.enabled).cloned().collect();
        directed(&mut events, SortDirection::Asc, |e| (e.date_evenement, e.id));
        Ok(events)
    }

    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let mut state = self.state();
        let created = Event {
            id: state.next_id(),
            titre: event.titre.clone(),
            description: event.description.clone(),
            lieu: event.lieu.clone(),
            date_evenement: event.date_evenement,
            enabled: event.enabled,
        };
        state.events.push(created.clone());
        Ok(created)
    }
}
