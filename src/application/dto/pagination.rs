use serde::{Deserialize, Serialize};

/// Offset pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// `page` and `page_size` are expected to be normalized already.
    pub fn new(items: Vec<T>, total_count: u64, page: u32, page_size: u32) -> Self {
        let size = u64::from(page_size.max(1));
        let total_pages = total_count.div_ceil(size).max(1);
        Self {
            items,
            total_count,
            page,
            page_size,
            total_pages,
            has_previous_page: page > 1,
            has_next_page: u64::from(page) < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_still_has_one_page() {
        let page: Page<u8> = Page::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 23, 2, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);

        let last = Page::new(vec![1], 23, 3, 10);
        assert!(!last.has_next_page);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let page = Page::new(vec![0; 10], 20, 2, 10);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Page::new(vec!["a"], 1, 1, 10)).unwrap();
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["hasNextPage"], false);
    }
}
