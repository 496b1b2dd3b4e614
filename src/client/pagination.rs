//! Pagination parameters for list requests

/// Page requested when none is given
pub const DEFAULT_PAGE: u32 = 1;

/// Items per page when none is given
pub const DEFAULT_LIMIT: u32 = 20;

/// Page/limit pair sent as query parameters.
///
/// Pages are 1-based. Both values are clamped to at least 1.
///
/// # Example
/// ```ignore
/// let params = PageParams::new().page(2).limit(50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the number of items per page.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Query string pairs
    pub fn to_query_params(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}
