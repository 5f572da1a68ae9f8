// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure pagination over an in-memory snapshot.
//!
//! Pages are zero-based internally; only the renderer shows one-based
//! numbers. Callers are expected to clamp a requested page with
//! [`clamp_page`] before slicing, so stored page indexes stay valid even
//! after the underlying list shrinks.

/// One page of a snapshot, with everything the renderer needs to number
/// items continuously and decide which navigation buttons to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Zero-based index of this page.
    pub index: usize,
    /// Index of the first item on this page within the whole list.
    pub offset: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Number of pages needed for `len` items. Zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 { 0 } else { len.div_ceil(page_size) }
}

/// Clamps a requested page index into the valid range for `len` items.
/// An empty list clamps everything to page zero.
pub fn clamp_page(len: usize, page: usize, page_size: usize) -> usize {
    let total = total_pages(len, page_size);
    if total == 0 { 0 } else { page.min(total - 1) }
}

/// Slices one page out of `items`. A page beyond the end yields an empty
/// item slice rather than panicking.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), page_size);
    let offset = page.saturating_mul(page_size);
    let end = offset.saturating_add(page_size).min(items.len());
    let slice = if offset >= items.len() {
        &items[..0]
    } else {
        &items[offset..end]
    };
    Page {
        items: slice,
        index: page,
        offset,
        total_pages: total,
        has_prev: page > 0,
        has_next: total > 0 && page + 1 < total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_items_in_pages_of_five() {
        let items: Vec<u32> = (0..12).collect();

        let first = paginate(&items, 0, 5);
        assert_eq!(first.items, &[0, 1, 2, 3, 4]);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let middle = paginate(&items, 1, 5);
        assert_eq!(middle.items, &[5, 6, 7, 8, 9]);
        assert_eq!(middle.offset, 5);
        assert!(middle.has_prev);
        assert!(middle.has_next);

        let last = paginate(&items, 2, 5);
        assert_eq!(last.items, &[10, 11]);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn single_page_has_no_navigation() {
        let items = [1, 2, 3];
        let page = paginate(&items, 0, 5);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn empty_list_yields_zero_pages() {
        let items: [u32; 0] = [];
        assert_eq!(total_pages(0, 5), 0);
        let page = paginate(&items, 0, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn page_beyond_end_is_empty_not_a_panic() {
        let items = [1, 2, 3];
        let page = paginate(&items, 9, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.index, 9);
    }

    #[test]
    fn clamp_pulls_overflowing_pages_back() {
        assert_eq!(clamp_page(12, 0, 5), 0);
        assert_eq!(clamp_page(12, 2, 5), 2);
        assert_eq!(clamp_page(12, 3, 5), 2);
        assert_eq!(clamp_page(12, usize::MAX, 5), 2);
        assert_eq!(clamp_page(0, 7, 5), 0);
        // Exactly full pages: 10 items fit in 2 pages of 5.
        assert_eq!(clamp_page(10, 2, 5), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_pages_partition_the_list(len in 0..200usize, page_size in 1..20usize) {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, page_size);

            let mut seen = Vec::new();
            for page in 0..total {
                let p = paginate(&items, page, page_size);
                prop_assert!(p.items.len() <= page_size);
                prop_assert!(page + 1 == total || p.items.len() == page_size);
                seen.extend_from_slice(p.items);
            }
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn prop_clamped_page_is_always_renderable(
            len in 0..200usize,
            page in 0..1000usize,
            page_size in 1..20usize,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let clamped = clamp_page(len, page, page_size);
            let p = paginate(&items, clamped, page_size);

            if len == 0 {
                prop_assert_eq!(clamped, 0);
                prop_assert!(p.items.is_empty());
            } else {
                // A clamped page of a non-empty list is never blank.
                prop_assert!(!p.items.is_empty());
                prop_assert!(clamped < p.total_pages);
            }
        }

        #[test]
        fn prop_navigation_flags_match_position(len in 1..200usize, page_size in 1..20usize) {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, page_size);
            for page in 0..total {
                let p = paginate(&items, page, page_size);
                prop_assert_eq!(p.has_prev, page > 0);
                prop_assert_eq!(p.has_next, page + 1 < total);
            }
        }
    }
}
