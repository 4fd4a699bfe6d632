//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.
//! Query parameter DTOs keep raw strings and normalize them leniently:
//! unknown or malformed values fall back to defaults instead of failing.

use std::borrow::Cow;

use campus_core::entities::{parse_questions, TypeContenu};
use campus_core::value_objects::{
    non_empty, split_tags, CommentaireFilter, CommentaireSortField, DateRange, PageRequest,
    PostFilter, PostSortField, Priorite, ProjetSearch, ProjetSortField, SortDirection, Statut,
    TacheSearch, TacheSortField, DEFAULT_POST_LIMIT, DEFAULT_SEARCH_LIMIT,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError};

fn default_true() -> bool {
    true
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

// ============================================================================
// Field validators
// ============================================================================

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required"));
    }
    Ok(())
}

/// URL check that lets blank values through; they are stored as absent
fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        return Ok(());
    }
    Err(error("url", "Must be a valid URL"))
}

/// Trimmed comment length; blank content is reported by the comment service
fn comment_length(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len == 0 || (2..=1000).contains(&len) {
        return Ok(());
    }
    Err(error("length", "Comment must be 2-1000 characters"))
}

/// Optional cours content: blank means none, otherwise at least 5 characters
fn optional_contenu(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len == 0 || len >= 5 {
        return Ok(());
    }
    Err(error("length", "Content must be at least 5 characters"))
}

fn validate_statut(value: &str) -> Result<(), ValidationError> {
    Statut::parse(value)
        .map(|_| ())
        .ok_or_else(|| error("statut", "Statut must be one of: À faire, En cours, Terminée"))
}

/// Letters, digits, spaces, `_`, `,` and `-`
fn validate_tags(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | ',' | '-'));
    if !valid {
        return Err(error(
            "tags",
            "Tags may only contain letters, digits, spaces, underscores, commas and hyphens",
        ));
    }
    Ok(())
}

fn letters_and_spaces(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(error("letters", "Only letters and spaces are allowed"));
    }
    Ok(())
}

/// Letters, digits, whitespace and simple punctuation
fn simple_text(value: &str) -> Result<(), ValidationError> {
    let valid = value.chars().all(|c| {
        c.is_alphanumeric()
            || c.is_whitespace()
            || matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '’' | '-' | '(' | ')' | '"')
    });
    if !valid {
        return Err(error(
            "text",
            "Only letters, digits and simple punctuation are allowed",
        ));
    }
    Ok(())
}

fn validate_type_contenu(value: &str) -> Result<(), ValidationError> {
    TypeContenu::parse(value)
        .map(|_| ())
        .ok_or_else(|| error("type_contenu", "Content type must be pdf, video or texte"))
}

fn not_before_today(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if value.date_naive() < Utc::now().date_naive() {
        return Err(error("date", "The date cannot be in the past"));
    }
    Ok(())
}

fn validate_questions(value: &QuestionsInput) -> Result<(), ValidationError> {
    let count = value.to_vec().len();
    if !(3..=20).contains(&count) {
        return Err(error("questions", "A quiz needs between 3 and 20 questions"));
    }
    Ok(())
}

// ============================================================================
// Projet / Tache Requests
// ============================================================================

/// Create or replace a projet
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjetRequest {
    #[validate(
        length(max = 255, message = "Name must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub nom: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Create or replace a tache
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TacheRequest {
    pub projet_id: i64,

    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub titre: String,

    #[validate(custom(function = "not_blank"))]
    pub description: String,

    /// Defaults to "À faire"
    #[validate(custom(function = "validate_statut"))]
    pub statut: Option<String>,

    /// Defaults to 2 (Normale)
    #[validate(range(min = 1, max = 3, message = "Priority must be between 1 and 3"))]
    pub priorite: Option<i32>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl TacheRequest {
    pub fn statut(&self) -> Statut {
        self.statut.as_deref().and_then(Statut::parse).unwrap_or_default()
    }

    pub fn priorite(&self) -> Priorite {
        self.priorite.and_then(Priorite::from_value).unwrap_or_default()
    }
}

// ============================================================================
// Forum Requests
// ============================================================================

/// Create or replace a forum post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostRequest {
    #[validate(length(min = 3, max = 255, message = "Title must be 3-255 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 5000, message = "Content must be 10-5000 characters"))]
    pub content: String,

    /// Blank or missing falls back to "Anonyme"
    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: Option<String>,

    #[validate(custom(function = "optional_url"))]
    pub image: Option<String>,

    #[validate(custom(function = "optional_url"))]
    pub link: Option<String>,

    #[validate(
        length(max = 255, message = "Tags must be at most 255 characters"),
        custom(function = "validate_tags")
    )]
    pub tags: Option<String>,
}

/// New comment; fields are optional so a missing one reports "Missing fields"
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(custom(function = "comment_length"))]
    pub content: Option<String>,

    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: Option<String>,
}

/// Comment edit; a missing content reports "Content is required"
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EditCommentRequest {
    #[validate(custom(function = "comment_length"))]
    pub content: Option<String>,
}

/// Reaction toggle, sent as a form or JSON
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReactionRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub author: Option<String>,
}

// ============================================================================
// Cours / Quiz Requests
// ============================================================================

/// Create or replace a cours
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CoursRequest {
    #[validate(
        length(min = 5, max = 100, message = "Title must be 5-100 characters"),
        custom(function = "letters_and_spaces")
    )]
    pub titre: String,

    #[validate(
        length(min = 20, message = "Description must be at least 20 characters"),
        custom(function = "simple_text")
    )]
    pub description: String,

    #[validate(custom(function = "not_before_today"))]
    pub date_publication: DateTime<Utc>,

    #[serde(default)]
    pub visibilite: bool,

    #[validate(custom(function = "optional_contenu"))]
    pub contenu: Option<String>,

    #[validate(custom(function = "validate_type_contenu"))]
    pub type_contenu: Option<String>,

    #[validate(custom(function = "optional_url"))]
    pub url_contenu: Option<String>,
}

impl CoursRequest {
    pub fn type_contenu(&self) -> Option<TypeContenu> {
        self.type_contenu.as_deref().and_then(TypeContenu::parse)
    }
}

/// Quiz questions, as a JSON list or as newline-separated text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionsInput {
    List(Vec<String>),
    Text(String),
}

impl QuestionsInput {
    /// Trimmed questions with blanks dropped
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .iter()
                .map(|q| q.trim())
                .filter(|q| !q.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Text(text) => parse_questions(text),
        }
    }
}

/// Create or replace a quiz
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    pub cours_id: i64,

    #[validate(
        length(min = 5, max = 100, message = "Title must be 5-100 characters"),
        custom(function = "letters_and_spaces")
    )]
    pub titre: String,

    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,

    #[validate(custom(function = "validate_questions"))]
    pub questions: QuestionsInput,

    #[validate(custom(function = "not_before_today"))]
    pub date_echeance: DateTime<Utc>,

    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duree: Option<i32>,

    #[validate(range(min = 1, message = "Maximum score must be positive"))]
    pub score_max: i32,

    #[validate(range(min = 1, max = 3, message = "Attempts must be between 1 and 3"))]
    pub tentatives: i32,
}

// ============================================================================
// Catalogue Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub titre: String,

    pub description: Option<String>,

    #[validate(length(max = 255, message = "Place must be at most 255 characters"))]
    pub lieu: Option<String>,

    pub date_evenement: DateTime<Utc>,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Integer query value; anything unparseable is treated as absent
fn lenient_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// `GET /projets/api/search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjetSearchParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub page: Option<String>,
}

impl ProjetSearchParams {
    pub fn into_search(self, page_size: i64) -> ProjetSearch {
        ProjetSearch {
            search: non_empty(self.search.as_deref()),
            dates: DateRange::parse_dates(self.date_from.as_deref(), self.date_to.as_deref()),
            sort: ProjetSortField::parse(self.sort.as_deref()),
            direction: SortDirection::parse_or_desc(self.order.as_deref()),
            page: PageRequest::new(lenient_int(self.page.as_deref()).unwrap_or(1), page_size),
            enabled_only: true,
        }
    }
}

/// `GET /taches/api/search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TacheSearchParams {
    pub search: Option<String>,
    pub projet: Option<String>,
    pub statut: Option<String>,
    pub priorite: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
}

impl TacheSearchParams {
    pub fn into_search(self, page_size: i64) -> TacheSearch {
        let priorite = lenient_int(self.priorite.as_deref())
            .and_then(|p| i32::try_from(p).ok())
            .and_then(Priorite::from_value);
        TacheSearch {
            search: non_empty(self.search.as_deref()),
            projet_id: lenient_int(self.projet.as_deref()),
            statut: self.statut.as_deref().and_then(Statut::parse),
            priorite,
            sort: TacheSortField::parse(self.sort.as_deref()),
            direction: SortDirection::parse_or_desc(self.order.as_deref()),
            page: PageRequest::new(lenient_int(self.page.as_deref()).unwrap_or(1), page_size),
            enabled_only: true,
        }
    }
}

/// `GET /forum/search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSearchParams {
    pub q: Option<String>,
    pub tags: Option<String>,
    pub author: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub sort_field: Option<String>,
    pub sort_dir: Option<String>,
    /// Legacy direction parameter
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PostSearchParams {
    pub fn into_filter(self) -> PostFilter {
        PostFilter {
            q: non_empty(self.q.as_deref()),
            tags: self.tags.as_deref().map(split_tags).unwrap_or_default(),
            author: non_empty(self.author.as_deref()),
            dates: DateRange::parse_lenient(self.from_date.as_deref(), self.to_date.as_deref()),
            created_by_admin: None,
            sort: PostSortField::parse(self.sort_field.as_deref()),
            direction: SortDirection::resolve(self.sort_dir.as_deref(), self.sort.as_deref()),
            page: PageRequest::from_params(
                lenient_int(self.page.as_deref()),
                lenient_int(self.limit.as_deref()),
                DEFAULT_POST_LIMIT,
            ),
        }
    }
}

/// `GET /forum/:id/comments/search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSearchParams {
    pub q: Option<String>,
    pub author: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub sort_field: Option<String>,
    pub sort_dir: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CommentSearchParams {
    pub fn into_filter(self, post_id: i64) -> CommentaireFilter {
        CommentaireFilter {
            post_id: Some(post_id),
            author: non_empty(self.author.as_deref()),
            q: non_empty(self.q.as_deref()),
            dates: DateRange::parse_lenient(self.from_date.as_deref(), self.to_date.as_deref()),
            sort: CommentaireSortField::parse(self.sort_field.as_deref()),
            direction: SortDirection::resolve(self.sort_dir.as_deref(), self.sort.as_deref()),
            page: PageRequest::from_params(
                lenient_int(self.page.as_deref()),
                lenient_int(self.limit.as_deref()),
                DEFAULT_SEARCH_LIMIT,
            ),
        }
    }
}

/// `GET /admin/forum`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminForumParams {
    pub q: Option<String>,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post_request() -> PostRequest {
        PostRequest {
            title: "Bonjour".into(),
            content: "Un premier message du forum".into(),
            author: None,
            image: None,
            link: None,
            tags: Some("rust, web-dev".into()),
        }
    }

    #[test]
    fn test_post_request_validation() {
        assert!(post_request().validate().is_ok());

        let mut request = post_request();
        request.title = "Hi".into();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let mut request = post_request();
        request.tags = Some("rust;drop".into());
        assert!(request.validate().is_err());

        let mut request = post_request();
        request.image = Some("not a url".into());
        assert!(request.validate().is_err());

        let mut request = post_request();
        request.image = Some(String::new());
        request.link = Some("  ".into());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_comment_requests_leave_blank_content_to_the_service() {
        let blank = CommentRequest {
            content: Some(String::new()),
            author: Some("bob".into()),
        };
        assert!(blank.validate().is_ok());
        assert!(EditCommentRequest { content: Some("  ".into()) }.validate().is_ok());

        let short = CommentRequest {
            content: Some("a".into()),
            author: Some("bob".into()),
        };
        let errors = short.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));

        let long = EditCommentRequest {
            content: Some("x".repeat(1001)),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_tache_request_defaults_and_checks() {
        let mut request = TacheRequest {
            projet_id: 1,
            titre: "Rédiger".into(),
            description: "Le rapport".into(),
            statut: None,
            priorite: None,
            enabled: true,
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.statut(), Statut::AFaire);
        assert_eq!(request.priorite(), Priorite::Normale);

        request.statut = Some("Bloquée".into());
        request.priorite = Some(4);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("statut"));
        assert!(errors.field_errors().contains_key("priorite"));
    }

    #[test]
    fn test_projet_request_rejects_blank_name() {
        let request = ProjetRequest {
            nom: "   ".into(),
            description: "Une description assez longue".into(),
            enabled: true,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_questions_input() {
        let text: QuestionsInput = serde_json::from_value(serde_json::json!("A\n\n B \nC")).unwrap();
        assert_eq!(text.to_vec(), vec!["A", "B", "C"]);

        let list: QuestionsInput = serde_json::from_value(serde_json::json!(["A", " ", "B"])).unwrap();
        assert_eq!(list.to_vec(), vec!["A", "B"]);
        assert!(validate_questions(&list).is_err());
    }

    #[test]
    fn test_quiz_request_question_count() {
        let mut request = QuizRequest {
            cours_id: 1,
            titre: "Quiz de revision".into(),
            description: "Questions de revision sur le premier chapitre.".into(),
            questions: QuestionsInput::Text("Un ?\nDeux ?\nTrois ?".into()),
            date_echeance: Utc::now() + Duration::days(7),
            duree: Some(20),
            score_max: 10,
            tentatives: 2,
        };
        assert!(request.validate().is_ok());

        request.questions = QuestionsInput::List(vec!["Un ?".into(), "Deux ?".into()]);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("questions"));
    }

    #[test]
    fn test_cours_request_blank_optionals() {
        let request = CoursRequest {
            titre: "Analyse numerique".into(),
            description: "Introduction aux methodes numeriques, niveau licence.".into(),
            date_publication: Utc::now() + Duration::days(2),
            visibilite: true,
            contenu: Some(String::new()),
            type_contenu: None,
            url_contenu: Some(" ".into()),
        };
        assert!(request.validate().is_ok());

        let short = CoursRequest {
            contenu: Some("abc".into()),
            url_contenu: Some("pas une url".into()),
            ..request
        };
        let errors = short.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("contenu"));
        assert!(errors.field_errors().contains_key("url_contenu"));
    }

    #[test]
    fn test_cours_request_dates() {
        let mut request = CoursRequest {
            titre: "Analyse numerique".into(),
            description: "Introduction aux methodes numeriques, niveau licence.".into(),
            date_publication: Utc::now() + Duration::days(2),
            visibilite: true,
            contenu: None,
            type_contenu: Some("video".into()),
            url_contenu: Some("https://example.com/video".into()),
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.type_contenu(), Some(TypeContenu::Video));

        request.date_publication = Utc::now() - Duration::days(2);
        request.titre = "Cours 101".into();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date_publication"));
        assert!(errors.field_errors().contains_key("titre"));
    }

    #[test]
    fn test_post_search_params() {
        let params = PostSearchParams {
            tags: Some("rust, ,web".into()),
            sort_field: Some("commentsCount".into()),
            sort: Some("asc".into()),
            page: Some("abc".into()),
            limit: Some("500".into()),
            ..PostSearchParams::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.tags, vec!["rust", "web"]);
        assert_eq!(filter.sort, PostSortField::CommentsCount);
        assert_eq!(filter.direction, SortDirection::Asc);
        assert_eq!(filter.page.page(), 1);
        assert_eq!(filter.page.limit(), 100);
    }

    #[test]
    fn test_tache_search_params_ignore_invalid_values() {
        let params = TacheSearchParams {
            projet: Some("x".into()),
            statut: Some("Bloquée".into()),
            priorite: Some("7".into()),
            sort: Some("unknown".into()),
            order: Some("asc".into()),
            ..TacheSearchParams::default()
        };
        let search = params.into_search(50);
        assert_eq!(search.projet_id, None);
        assert_eq!(search.statut, None);
        assert_eq!(search.priorite, None);
        assert_eq!(search.sort, TacheSortField::Date);
        assert_eq!(search.direction, SortDirection::Asc);
        assert_eq!(search.page.limit(), 50);
    }

    #[test]
    fn test_projet_search_params_dates() {
        let params = ProjetSearchParams {
            date_from: Some("2024-02-01".into()),
            date_to: Some("garbage".into()),
            order: Some("sideways".into()),
            ..ProjetSearchParams::default()
        };
        let search = params.into_search(50);
        assert!(search.dates.from.is_some());
        assert!(search.dates.to.is_none());
        assert_eq!(search.direction, SortDirection::Desc);
    }
}
