use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::domain::entities::GeneratedName;
use crate::error::AppError;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 25;
const MIN_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 1000;

/// Query-string pagination. Values arrive as strings, hence `DisplayFromStr`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Resolves (offset, limit, page, page_size), rejecting out-of-range input.
    pub fn validate_and_get_offset_limit(&self) -> Result<(usize, usize, u32, u32), AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page == 0 {
            return Err(AppError::bad_request(
                "page must be greater than zero",
                serde_json::json!({"page": page}),
            ));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("pageSize must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"),
                serde_json::json!({"pageSize": page_size}),
            ));
        }
        let offset = (page as usize - 1) * page_size as usize;
        Ok((offset, page_size as usize, page, page_size))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedNamesResponse {
    pub items: Vec<GeneratedName>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let params = PaginationParams::default();
        let (offset, limit, page, page_size) =
            params.validate_and_get_offset_limit().unwrap();
        assert_eq!((offset, limit, page, page_size), (0, 25, 1, 25));
    }

    #[test]
    fn test_offset_advances_with_page() {
        let params = PaginationParams {
            page: Some(3),
            page_size: Some(10),
        };
        let (offset, limit, ..) = params.validate_and_get_offset_limit().unwrap();
        assert_eq!((offset, limit), (20, 10));
    }

    #[test]
    fn test_out_of_range_page_size_rejected() {
        let params = PaginationParams {
            page: Some(1),
            page_size: Some(5),
        };
        assert!(params.validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_zero_page_rejected() {
        let params = PaginationParams {
            page: Some(0),
            page_size: None,
        };
        assert!(params.validate_and_get_offset_limit().is_err());
    }
}
