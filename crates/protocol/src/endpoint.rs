//! Read API paths shared by the client and the server.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Common prefix of every widget read endpoint.
pub const API_PREFIX: &str = "/api/widget";

/// Characters left unescaped in a path segment (RFC 3986 unreserved set).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a single path segment.
///
/// # Examples
///
/// ```
/// use kbw_protocol::endpoint::encode_segment;
///
/// assert_eq!(encode_segment("kb-1"), "kb-1");
/// assert_eq!(encode_segment("../admin"), "..%2Fadmin");
/// ```
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// One of the four read endpoints, with its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/widget/kb/{id}`
    KnowledgeBase(String),
    /// `GET /api/widget/categories/{knowledgeBaseId}`
    Categories(String),
    /// `GET /api/widget/articles/{categoryId}`
    Articles(String),
    /// `GET /api/widget/article/{articleId}`
    Article(String),
}

impl Endpoint {
    /// Returns the path of this endpoint, with the identifier encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_protocol::Endpoint;
    ///
    /// assert_eq!(Endpoint::KnowledgeBase("kb-1".into()).path(), "/api/widget/kb/kb-1");
    /// assert_eq!(Endpoint::Article("a/1".into()).path(), "/api/widget/article/a%2F1");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "{API_PREFIX}/{}/{}",
            self.route_segment(),
            encode_segment(self.id())
        )
    }

    /// Returns the identifier carried by this endpoint.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::KnowledgeBase(id)
            | Self::Categories(id)
            | Self::Articles(id)
            | Self::Article(id) => id,
        }
    }

    /// Returns the fixed segment naming the route.
    #[must_use]
    pub const fn route_segment(&self) -> &'static str {
        match self {
            Self::KnowledgeBase(_) => "kb",
            Self::Categories(_) => "categories",
            Self::Articles(_) => "articles",
            Self::Article(_) => "article",
        }
    }

    /// Returns the human name of the resource, as used in error messages.
    #[must_use]
    pub const fn resource_name(&self) -> &'static str {
        match self {
            Self::KnowledgeBase(_) => "knowledge base",
            Self::Categories(_) => "categories",
            Self::Articles(_) => "articles",
            Self::Article(_) => "article",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
