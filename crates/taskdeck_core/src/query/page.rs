//! Fixed-size pagination over ordered views.
//!
//! # Responsibility
//! - Slice an ordered sequence into 1-based fixed-size pages.
//! - Derive the pager rail (numbered links with elided gaps).
//!
//! # Invariants
//! - Out-of-range pages (including page 0) yield an empty slice, never
//!   an error.
//! - `total_pages` is `ceil(len / page_size)`, 0 for an empty sequence.

/// Upper bound on numbered links in the pager rail before gaps appear.
const MAX_VISIBLE_PAGE_LINKS: usize = 5;

/// One page of an ordered sequence plus page arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on the requested page; empty when out of range.
    pub items: &'a [T],
    /// Total number of pages at this page size.
    pub total_pages: usize,
}

/// Slices `items` into fixed-size pages and returns the 1-based `page`.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    if page_size == 0 {
        return Page {
            items: &[],
            total_pages: 0,
        };
    }
    let total_pages = items.len().div_ceil(page_size);
    if page == 0 {
        return Page {
            items: &[],
            total_pages,
        };
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Page {
            items: &[],
            total_pages,
        };
    }
    let end = (start + page_size).min(items.len());
    Page {
        items: &items[start..end],
        total_pages,
    }
}

/// Pager rail entry: a numbered page link or an elided gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// Link to the given 1-based page.
    Page(usize),
    /// Elision marker between non-adjacent links.
    Gap,
}

/// Builds the pager rail for `current_page` of `total_pages`.
///
/// Up to five pages are listed in full. Beyond that the rail keeps the
/// first and last page visible and windows around the current page:
/// near the start it shows pages 1-4, near the end the last four, and
/// in the middle the current page with one neighbor on each side.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<PageLink> {
    if total_pages <= MAX_VISIBLE_PAGE_LINKS {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let mut links = Vec::new();
    if current_page <= 3 {
        links.extend((1..=4).map(PageLink::Page));
        links.push(PageLink::Gap);
        links.push(PageLink::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Gap);
        links.extend((total_pages - 3..=total_pages).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Gap);
        links.extend((current_page - 1..=current_page + 1).map(PageLink::Page));
        links.push(PageLink::Gap);
        links.push(PageLink::Page(total_pages));
    }
    links
}
