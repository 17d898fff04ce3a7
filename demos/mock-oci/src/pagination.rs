use axum::http::HeaderValue;
use serde::Deserialize;

use crate::errors::MockError;

pub(crate) const OPC_NEXT_PAGE: &str = "opc-next-page";

const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    pub(crate) limit: Option<usize>,
    pub(crate) page: Option<String>,
}

/// One page of a listing and the cursor to the next one.
#[derive(Debug)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) next_page: Option<String>,
}

impl<T> Page<T> {
    pub(crate) fn next_page_header(&self) -> Option<HeaderValue> {
        self.next_page
            .as_deref()
            .and_then(|cursor| HeaderValue::from_str(cursor).ok())
    }
}

impl PageQuery {
    /// Cursors are opaque to clients, here they encode the offset of the next item.
    pub(crate) fn paginate<T: Clone>(&self, all: &[T]) -> Result<Page<T>, MockError> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(MockError::InvalidParameter {
                name: "limit",
                reason: "must be at least 1".to_string(),
            });
        }
        let offset = match &self.page {
            None => 0,
            Some(page) => page
                .strip_prefix("offset-")
                .and_then(|offset| offset.parse::<usize>().ok())
                .ok_or_else(|| MockError::InvalidParameter {
                    name: "page",
                    reason: format!("unknown cursor '{page}'"),
                })?,
        };

        let items = all.iter().skip(offset).take(limit).cloned().collect();
        let end = offset.saturating_add(limit);
        let next_page = (end < all.len()).then(|| format!("offset-{end}"));

        Ok(Page { items, next_page })
    }
}
