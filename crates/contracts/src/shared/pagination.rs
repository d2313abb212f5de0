use std::ops::Range;

/// `ceil(total / page_size)`; zero when there is nothing to show.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Index window of a 1-based `page`, clipped to `total`.
pub fn page_window(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 24), 0);
        assert_eq!(total_pages(1, 24), 1);
        assert_eq!(total_pages(24, 24), 1);
        assert_eq!(total_pages(25, 24), 2);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_every_page_has_expected_size() {
        for total in [0usize, 1, 5, 23, 24, 25, 47, 48, 49, 100] {
            let size: usize = 24;
            let pages = total_pages(total, size);
            let mut seen = 0;
            for page in 1..=pages {
                let window = page_window(total, page, size);
                assert_eq!(window.len(), size.min(total - (page - 1) * size));
                assert_eq!(window.start, seen);
                seen = window.end;
            }
            assert_eq!(seen, total);
        }
    }

    #[test]
    fn test_out_of_range_window_is_empty() {
        assert!(page_window(10, 5, 24).is_empty());
        assert_eq!(page_window(10, 0, 24), 0..10);
    }
}
