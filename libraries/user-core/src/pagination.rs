//! Page envelope for list results
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Largest page size a caller may request
pub const MAX_PER_PAGE: u32 = 100;

/// Requested page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageParams {
    /// Create page parameters
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Check both values are positive and the size is within `max_per_page`
    ///
    /// # Errors
    ///
    /// Returns one field error per out-of-range value.
    pub fn validate(&self, max_per_page: u32) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.page == 0 {
            errors.push("page", "must be greater than or equal to 1");
        }
        if self.per_page == 0 {
            errors.push("per_page", "must be greater than or equal to 1");
        } else if self.per_page > max_per_page {
            errors.push(
                "per_page",
                format!("must be less than or equal to {max_per_page}"),
            );
        }

        errors.into_result(*self)
    }

    fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.per_page as usize)
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Requested page number
    pub page: u32,

    /// Requested page size
    pub per_page: u32,

    /// Length of the full listing
    pub total: u64,

    /// `ceil(total / per_page)`
    pub total_pages: u64,

    /// Items on this page; empty past the last page
    pub data: Vec<T>,
}

/// Slice `items` into the page described by `params`
///
/// Never fails: a page past the end yields empty `data` with the same
/// `total` and `total_pages`. A zero `per_page` is treated as 1.
pub fn paginate<T>(items: Vec<T>, params: PageParams) -> Page<T> {
    let per_page = params.per_page.max(1);
    let params = PageParams::new(params.page.max(1), per_page);

    let total = items.len() as u64;
    let total_pages = total.div_ceil(u64::from(per_page));

    let data = items
        .into_iter()
        .skip(params.offset())
        .take(per_page as usize)
        .collect();

    Page {
        page: params.page,
        per_page,
        total,
        total_pages,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_defaults_fill_missing_query_fields() {
        let params: PageParams = serde_json::from_str(r#"{"per_page": 5}"#).unwrap();
        assert_eq!(params, PageParams::new(1, 5));
    }

    #[test]
    fn test_middle_page() {
        let page = paginate((1..=10).collect(), PageParams::new(2, 3));

        assert_eq!(page.data, vec![4, 5, 6]);
        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate((1..=10).collect(), PageParams::new(4, 3));
        assert_eq!(page.data, vec![10]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = paginate((1..=10).collect::<Vec<i32>>(), PageParams::new(9, 3));

        assert!(page.data.is_empty());
        assert_eq!(page.page, 9);
        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_empty_listing() {
        let page = paginate(Vec::<i32>::new(), PageParams::default());

        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_validate_rejects_zero_and_oversized() {
        let errors = PageParams::new(0, 0).validate(MAX_PER_PAGE).unwrap_err();
        assert!(errors.contains("page"));
        assert!(errors.contains("per_page"));

        let errors = PageParams::new(1, MAX_PER_PAGE + 1)
            .validate(MAX_PER_PAGE)
            .unwrap_err();
        assert_eq!(errors.fields().len(), 1);

        assert!(PageParams::new(3, MAX_PER_PAGE).validate(MAX_PER_PAGE).is_ok());
    }
}
