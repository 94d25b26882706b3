//! Splits ordered lists into fixed-size pages and builds the page number indicator.

use std::ops::RangeInclusive;

/// The number of rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u64 = 15;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The number of transactions to display per page.
    pub default_page_size: u64,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_pages: 5,
        }
    }
}

/// Why a page has the items it has.
///
/// A page outside of `1..=total_pages` is not an error, it is just empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The page holds at least one item.
    Items,
    /// There is nothing to page through.
    Empty,
    /// There are items, but none on the requested page.
    OutOfRange,
}

/// One page of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The items on this page, in list order.
    pub items: Vec<T>,
    /// The 1-based number of this page.
    pub page: u64,
    /// How many pages the whole list spans.
    pub total_pages: u64,
    pub status: PageStatus,
}

/// The number of pages needed for `item_count` items, zero when there are no items.
pub fn page_count(item_count: usize, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    (item_count as u64).div_ceil(page_size)
}

/// Get the items on `page` (1-based) when `items` is split into pages of `page_size`.
///
/// The slice `[(page - 1) * page_size, page * page_size)` is clipped to the
/// bounds of `items`, so the last page may be short and any page past the end
/// is empty.
pub fn paginate<T: Clone>(items: &[T], page: u64, page_size: u64) -> Page<T> {
    let total_pages = page_count(items.len(), page_size);

    let page_items: &[T] = if page == 0 || page > total_pages {
        &[]
    } else {
        let start = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let end = usize::try_from(page.saturating_mul(page_size))
            .unwrap_or(usize::MAX)
            .min(items.len());

        items.get(start..end).unwrap_or(&[])
    };

    let status = if items.is_empty() {
        PageStatus::Empty
    } else if page_items.is_empty() {
        PageStatus::OutOfRange
    } else {
        PageStatus::Items
    };

    Page {
        items: page_items.to_vec(),
        page,
        total_pages,
        status,
    }
}

/// One element of the page number strip under a paginated table.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    Page(u64),
    CurrPage(u64),
    Ellipsis,
    NextButton(u64),
    BackButton(u64),
}

/// The run of page numbers shown around `curr_page`, at most `max_pages` long.
fn visible_window(curr_page: u64, page_count: u64, max_pages: u64) -> RangeInclusive<u64> {
    if page_count <= max_pages {
        return 1..=page_count;
    }

    let start = curr_page
        .saturating_sub(max_pages / 2)
        .max(1)
        .min(page_count - max_pages + 1);

    start..=(start + max_pages - 1)
}

/// Build the page strip for `curr_page` out of `page_count` pages.
///
/// The first and last pages are always reachable, with an ellipsis standing in
/// for any gap between them and the visible window. A page past the end gets a
/// back button to the last page.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let window = visible_window(curr_page, page_count, max_pages.max(1));
    let (first, last) = (*window.start(), *window.end());
    let mut indicators = Vec::new();

    if curr_page > 1 {
        indicators.push(PaginationIndicator::BackButton(
            (curr_page - 1).min(page_count.max(1)),
        ));
    }

    if first > 1 {
        indicators.push(PaginationIndicator::Page(1));

        if first > 2 {
            indicators.push(PaginationIndicator::Ellipsis);
        }
    }

    indicators.extend(window.map(|page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    }));

    if last < page_count {
        if last + 1 < page_count {
            indicators.push(PaginationIndicator::Ellipsis);
        }

        indicators.push(PaginationIndicator::Page(page_count));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}
