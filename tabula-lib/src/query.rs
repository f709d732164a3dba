//! Query-string generation for delegated page requests.

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::table::PageRequest;

/// Default one-based page.
pub const DEFAULT_PAGE: usize = 1;

/// Default page size.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Parameters for requesting one page of data from a record source.
///
/// Serializes to a query string with a fixed key order: `page`, `perpage`,
/// `search`, `searchfields`, `filter`, `sort`, `advance`. The first two are
/// always present; the rest only when non-empty.
///
/// # Example
///
/// ```
/// use tabula_lib::query::QueryParams;
///
/// let query = QueryParams::new()
///     .page(2)
///     .perpage(20)
///     .search("ab,c")
///     .to_query_string();
///
/// assert_eq!(query, "page=2&perpage=20&search=ab%2Cc");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    page: Option<usize>,
    perpage: Option<usize>,
    search: Option<String>,
    search_fields: Option<Vec<String>>,
    default_search_fields: Vec<String>,
    filter: Map<String, Value>,
    sort: Option<String>,
    advance: Option<String>,
}

impl QueryParams {
    /// Creates parameters with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds page and page size from a delegated-mode notification.
    pub fn for_request(request: PageRequest) -> Self {
        Self::new().page(request.page).perpage(request.perpage)
    }

    /// Sets the one-based page; zero means "use the default".
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size; zero means "use the default".
    pub fn perpage(mut self, perpage: usize) -> Self {
        self.perpage = Some(perpage);
        self
    }

    /// Sets the free-text search.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the fields to search, overriding the defaults.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the fields used when no explicit search fields are given.
    pub fn default_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the structured filter.
    ///
    /// Anything other than a JSON object is replaced by an empty mapping.
    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = match filter {
            Value::Object(map) => map,
            other => {
                log::warn!("[query] non-object filter replaced by empty mapping: {}", other);
                Map::new()
            }
        };
        self
    }

    /// Sets the sort spec (`"<key>:<asc|desc>"`).
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the opaque advanced-query passthrough.
    pub fn advance(mut self, advance: impl Into<String>) -> Self {
        self.advance = Some(advance.into());
        self
    }

    /// Effective one-based page.
    pub fn effective_page(&self) -> usize {
        self.page.filter(|&p| p > 0).unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size.
    pub fn effective_perpage(&self) -> usize {
        self.perpage.filter(|&p| p > 0).unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Effective search fields: the explicit list, else the defaults.
    pub fn effective_search_fields(&self) -> &[String] {
        self.search_fields
            .as_deref()
            .unwrap_or(&self.default_search_fields)
    }

    /// Serializes to `application/x-www-form-urlencoded` text.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &self.effective_page().to_string());
        serializer.append_pair("perpage", &self.effective_perpage().to_string());

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("search", search);
        }

        let fields = self.effective_search_fields();
        if !fields.is_empty() {
            serializer.append_pair("searchfields", &fields.join(","));
        }

        if !self.filter.is_empty() {
            let blob = Value::Object(self.filter.clone()).to_string();
            serializer.append_pair("filter", &blob);
        }

        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("sort", sort);
        }

        if let Some(advance) = self.advance.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("advance", advance);
        }

        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_always_emitted() {
        assert_eq!(QueryParams::new().to_query_string(), "page=1&perpage=10");
        assert_eq!(
            QueryParams::new().page(0).perpage(0).to_query_string(),
            "page=1&perpage=10"
        );
    }

    #[test]
    fn test_search_is_encoded() {
        let query = QueryParams::new().page(2).perpage(20).search("ab,c").to_query_string();
        assert!(query.contains("page=2"));
        assert!(query.contains("perpage=20"));
        assert!(query.contains("search=ab%2Cc"));
        assert!(!query.contains("sort="));
        assert!(!query.contains("filter="));
        assert!(!query.contains("advance="));
    }

    #[test]
    fn test_canonical_order() {
        let query = QueryParams::new()
            .advance("x")
            .sort("name:asc")
            .filter(json!({"status": "active"}))
            .search_fields(["name", "email"])
            .search("bob")
            .perpage(5)
            .page(3)
            .to_query_string();
        assert_eq!(
            query,
            "page=3&perpage=5&search=bob&searchfields=name%2Cemail\
             &filter=%7B%22status%22%3A%22active%22%7D&sort=name%3Aasc&advance=x"
        );
    }

    #[test]
    fn test_search_fields_fall_back_to_defaults() {
        let params = QueryParams::new().default_search_fields(["title"]);
        assert_eq!(params.to_query_string(), "page=1&perpage=10&searchfields=title");

        let params = params.search_fields(Vec::<String>::new());
        assert_eq!(params.to_query_string(), "page=1&perpage=10");
    }

    #[test]
    fn test_non_object_filter_becomes_empty() {
        let query = QueryParams::new().filter(json!(["a", "b"])).to_query_string();
        assert_eq!(query, "page=1&perpage=10");

        let query = QueryParams::new().filter(json!({})).to_query_string();
        assert_eq!(query, "page=1&perpage=10");
    }

    #[test]
    fn test_space_encoded_as_plus() {
        let query = QueryParams::new().search("a b").to_query_string();
        assert!(query.ends_with("search=a+b"));
    }

    #[test]
    fn test_for_request() {
        let params = QueryParams::for_request(PageRequest { page: 4, perpage: 50 });
        assert_eq!(params.to_query_string(), "page=4&perpage=50");
    }
}
