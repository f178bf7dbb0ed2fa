//! Paging request and response envelope

use derive_builder::Builder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use url::Url;

use crate::error::{Error, Result};

/// Query for one page of a paginated listing.
///
/// Sent as exactly four query parameters: `page`, `size`, `sort` and `query`.
/// Empty strings are still sent. Build one with [`PageRequest::builder`], which
/// rejects a zero page size.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PageRequest {
    /// Zero based page number
    #[builder(default)]
    page: u32,

    /// Number of elements per page, must be positive
    #[builder(default = "100")]
    size: u32,

    /// Sort field with a direction sigil, e.g. `+name` or `-createdAt`
    #[builder(default)]
    sort: String,

    /// Free-text filter
    #[builder(default)]
    query: String,
}

impl PageRequest {
    /// Create a builder for constructing a PageRequest.
    pub fn builder() -> PageRequestBuilder {
        PageRequestBuilder::default()
    }

    /// Zero based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of elements per page.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Sort field with its direction sigil.
    pub fn sort(&self) -> &str {
        &self.sort
    }

    /// Free-text filter.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The four query parameters, in the order they are appended.
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.clone()),
            ("query", self.query.clone()),
        ]
    }

    /// Append the paging parameters to a request URL.
    pub fn append_to(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in self.query_pairs() {
            pairs.append_pair(key, &value);
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 100,
            sort: String::new(),
            query: String::new(),
        }
    }
}

impl PageRequestBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.size == Some(0) {
            return Err("page size must be positive".to_string());
        }
        Ok(())
    }
}

/// One slice of a paginated listing.
///
/// The envelope is the same for every resource; `content` stays undecoded
/// until the caller asks for its own element type with [`Page::decode_content`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,

    /// Total number of elements over all pages
    #[serde(default)]
    pub total_elements: u64,

    /// Number of elements in this page
    #[serde(default)]
    pub number_of_elements: u32,

    /// Requested page size
    #[serde(default)]
    pub size: u32,

    /// Zero based number of this page
    #[serde(default)]
    pub number: u32,

    /// Raw JSON array of resource records
    pub content: Box<RawValue>,
}

impl Page {
    /// Decode the page content into the caller's element type.
    pub fn decode_content<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        serde_json::from_str(self.content.get()).map_err(|e| Error::Decode {
            message: format!("page content: {e}"),
            status: None,
        })
    }

    /// Whether this is the last page of the listing.
    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages
    }
}
