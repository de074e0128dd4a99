//! Pure pagination math for renderers.

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> u32 {
    u32::try_from(item_count.div_ceil(per_page.max(1))).unwrap_or(u32::MAX)
}

/// Return start/end indices for a one-based page window.
pub fn page_window(total_items: usize, per_page: usize, page: u32) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = (page as usize)
        .saturating_sub(1)
        .saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(25, 10, 1), (0, 10));
        assert_eq!(page_window(25, 10, 3), (20, 25));
        assert_eq!(page_window(25, 10, 4), (25, 25));
        assert_eq!(page_window(25, 10, 0), (0, 10));
    }
}
