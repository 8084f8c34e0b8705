//! API response types
//!
//! Write endpoints answer with a small acknowledgement body; list endpoints
//! return plain JSON arrays that the views paginate client-side.

use serde::{Deserialize, Serialize};

/// Acknowledgement body returned by write endpoints.
///
/// The API is inconsistent about the message field's casing, so both
/// spellings are accepted here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Ack {
    /// Server message, or the supplied fallback when none was sent.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

/// Pagination metadata for a client-side page over an in-memory list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            ((total as f64) / (per_page as f64)).ceil() as u32
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// One page of an already-fetched list.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice a fetched list into a 1-based page for display.
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Page<T> {
    let total = items.len() as u64;
    let page = page.max(1);
    let start = ((page - 1) as usize) * per_page as usize;
    let slice = if start >= items.len() {
        &[]
    } else {
        let end = (start + per_page as usize).min(items.len());
        &items[start..end]
    };
    Page {
        items: slice.to_vec(),
        pagination: Pagination::new(page, per_page, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_reads_both_message_spellings() {
        let a: Ack = serde_json::from_str(r#"{"success":false,"Message":"nope"}"#).unwrap();
        assert!(!a.success);
        assert_eq!(a.message_or("fallback"), "nope");

        let b: Ack = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(b.success);
        assert_eq!(b.message_or("fallback"), "fallback");
    }

    #[test]
    fn paginate_math() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.pagination.total_pages, 3);

        // Past the end yields an empty page, not a panic
        let page = paginate(&items, 9, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 25);
    }
}
