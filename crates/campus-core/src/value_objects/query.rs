//! List query building blocks - sort direction, allow-listed sort fields, paging and date bounds
//!
//! Every parser in this module is lenient: an unknown or malformed value
//! falls back to the documented default instead of producing an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Upper bound for any requested page size
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Default page size for forum post listings
pub const DEFAULT_POST_LIMIT: i64 = 20;

/// Default page size for comment, projet and tache listings
pub const DEFAULT_SEARCH_LIMIT: i64 = 50;

// ============================================================================
// Sort direction
// ============================================================================

/// SQL sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Case-insensitive parse of `ASC` / `DESC`
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// `ASC` when the value says so, `DESC` for anything else
    pub fn parse_or_desc(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Resolve the direction of a forum listing
    ///
    /// `sortDir` wins when present. The legacy `sort` parameter is only
    /// consulted when `sortDir` is absent, and only when it is a valid
    /// direction. Everything else yields `DESC`.
    pub fn resolve(sort_dir: Option<&str>, legacy_sort: Option<&str>) -> Self {
        match non_blank(sort_dir) {
            Some(dir) => Self::parse(dir).unwrap_or_default(),
            None => non_blank(legacy_sort)
                .and_then(Self::parse)
                .unwrap_or_default(),
        }
    }

    #[inline]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    #[inline]
    pub fn is_asc(self) -> bool {
        self == Self::Asc
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Paging
// ============================================================================

/// A validated page request: `page >= 1`, `1 <= limit <= 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Build a page request, clamping out-of-range values
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    /// Build from optional query parameters
    pub fn from_params(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        Self::new(page.unwrap_or(1), limit.unwrap_or(default_limit))
    }

    /// First page with the given size
    pub fn first(limit: i64) -> Self {
        Self::new(1, limit)
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Cut this page out of an already sorted, unpaginated result
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_POST_LIMIT)
    }
}

// ============================================================================
// Sort fields
// ============================================================================

/// Allow-listed sort fields for posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PostSortField {
    #[default]
    CreatedAt,
    Views,
    Title,
    Author,
    CommentsCount,
}

impl PostSortField {
    /// Exact, case-sensitive match; unknown names fall back to `createdAt`
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("views") => Self::Views,
            Some("title") => Self::Title,
            Some("author") => Self::Author,
            Some("commentsCount") => Self::CommentsCount,
            _ => Self::CreatedAt,
        }
    }

    /// Column to order by; `None` for the in-memory comment-count sort
    pub fn column(self) -> Option<&'static str> {
        match self {
            Self::CreatedAt => Some("created_at"),
            Self::Views => Some("views"),
            Self::Title => Some("title"),
            Self::Author => Some("author"),
            Self::CommentsCount => None,
        }
    }
}

/// Allow-listed sort fields for comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommentaireSortField {
    #[default]
    CreatedAt,
    Author,
}

impl CommentaireSortField {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("author") => Self::Author,
            _ => Self::CreatedAt,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Author => "author",
        }
    }
}

/// Allow-listed sort fields for taches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TacheSortField {
    Titre,
    #[default]
    Date,
    Statut,
    Priorite,
    Id,
}

impl TacheSortField {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("titre") => Self::Titre,
            Some("statut") => Self::Statut,
            Some("priorite") => Self::Priorite,
            Some("id") => Self::Id,
            _ => Self::Date,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Titre => "titre",
            Self::Date => "date_creation",
            Self::Statut => "statut",
            Self::Priorite => "priorite",
            Self::Id => "id",
        }
    }
}

/// Allow-listed sort fields for projets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjetSortField {
    Nom,
    #[default]
    Date,
    Id,
}

impl ProjetSortField {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("nom") => Self::Nom,
            Some("id") => Self::Id,
            _ => Self::Date,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Nom => "nom",
            Self::Date => "date_creation",
            Self::Id => "id",
        }
    }
}

// ============================================================================
// Date bounds
// ============================================================================

/// Inclusive timestamp bounds on a creation date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// Lenient parse of forum-style bounds
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM` and
    /// `YYYY-MM-DD`. A date-only upper bound covers the whole day.
    /// Unparseable values are dropped.
    pub fn parse_lenient(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(|v| parse_timestamp(v, false)),
            to: to.and_then(|v| parse_timestamp(v, true)),
        }
    }

    /// Strict `YYYY-MM-DD` bounds; the upper bound covers the whole day
    pub fn parse_dates(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_date).map(start_of_day),
            to: to.and_then(parse_date).map(end_of_day),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether `at` falls within the bounds
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(last))
}

fn parse_timestamp(value: &str, upper: bool) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    parse_date(value).map(|date| if upper { end_of_day(date) } else { start_of_day(date) })
}
