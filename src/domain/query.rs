//! Query builder - translates request filter parameters into a structured
//! predicate over articles.
//!
//! Pure transformation, no I/O; the repository turns the predicate into SQL.

/// Visibility scope applied on top of the caller's filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Reader-facing access: only `published` articles are visible
    #[default]
    Published,
    /// Administrative access: all statuses, including drafts
    All,
}

/// Structured filter predicate over articles.
///
/// All filters are optional; absence means "no constraint". Present filters
/// combine with AND, except the search clause which matches title OR content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Featured flag match
    pub featured: Option<bool>,
    /// Tag membership: the label must appear in the article's tags
    pub tag: Option<String>,
    /// Case-insensitive substring match against title or content
    pub search: Option<String>,
    pub scope: Scope,
}

impl ArticleQuery {
    /// Unfiltered query over the given scope
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Build a query from raw request parameters.
    ///
    /// Empty-string parameters carry no constraint. The featured flag is
    /// supplied as text: exactly `"true"` means true, any other literal
    /// means false.
    pub fn from_params(
        scope: Scope,
        category: Option<String>,
        featured: Option<String>,
        tag: Option<String>,
        search: Option<String>,
    ) -> Self {
        Self {
            category: category.filter(|v| !v.is_empty()),
            featured: featured
                .filter(|v| !v.is_empty())
                .map(|v| v == "true"),
            tag: tag.filter(|v| !v.is_empty()),
            search: search.filter(|v| !v.is_empty()),
            scope,
        }
    }
}
