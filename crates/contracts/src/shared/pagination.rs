//! Client-side pagination over an already filtered list.
//!
//! Pages are 1-based. Nothing here panics on out-of-range input; callers get
//! an empty page or a clamped page number instead.

/// Number of pages needed for `count` items. Zero items means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Item range `[start, end)` of a page, `None` when the page is empty.
fn page_bounds(len: usize, page_size: usize, page_number: usize) -> Option<(usize, usize)> {
    if page_size == 0 || page_number == 0 {
        return None;
    }
    let start = (page_number - 1).checked_mul(page_size)?;
    if start >= len {
        return None;
    }
    Some((start, start.saturating_add(page_size).min(len)))
}

/// Contiguous slice `[(page-1)*size, page*size)` clipped to `items`.
pub fn page<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    match page_bounds(items.len(), page_size, page_number) {
        Some((start, end)) => &items[start..end],
        None => &[],
    }
}

/// Clamp `page_number` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page_number: usize, count: usize, page_size: usize) -> usize {
    page_number.clamp(1, total_pages(count, page_size).max(1))
}

/// "Showing {first} to {last} of {total}" numbers for the list footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based index of the first visible item, 0 when nothing is visible.
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn new(count: usize, page_size: usize, page_number: usize) -> Self {
        match page_bounds(count, page_size, page_number) {
            Some((start, end)) => Self {
                first: start + 1,
                last: end,
                total: count,
            },
            None => Self { first: 0, last: 0, total: count },
        }
    }

    pub fn summary(&self, noun: &str) -> String {
        format!("Showing {} to {} of {} {}", self.first, self.last, self.total, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(50, 10), 5);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slices() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page(&items, 10, 1), &items[0..10]);
        assert_eq!(page(&items, 10, 3), &[21, 22, 23]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=23).collect();
        assert!(page(&items, 10, 0).is_empty());
        assert!(page(&items, 10, 4).is_empty());
        assert!(page(&items, 10, usize::MAX).is_empty());
        assert!(page(&items, 0, 1).is_empty());
        assert!(page::<u32>(&[], 10, 1).is_empty());
    }

    #[test]
    fn test_page_never_exceeds_size() {
        let items: Vec<u32> = (0..97).collect();
        for size in 1..15 {
            for number in 0..(items.len() + 3) {
                let slice = page(&items, size, number);
                assert!(slice.len() <= size);
                if let Some(last) = slice.last() {
                    assert!((*last as usize) < items.len());
                }
            }
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 23, 10), 1);
        assert_eq!(clamp_page(2, 23, 10), 2);
        assert_eq!(clamp_page(9, 23, 10), 3);
        assert_eq!(clamp_page(4, 0, 10), 1);
    }

    #[test]
    fn test_page_window_summary() {
        assert_eq!(PageWindow::new(23, 10, 3).summary("orders"), "Showing 21 to 23 of 23 orders");
        assert_eq!(PageWindow::new(23, 10, 1), PageWindow { first: 1, last: 10, total: 23 });
        assert_eq!(PageWindow::new(0, 10, 1), PageWindow { first: 0, last: 0, total: 0 });
    }
}
