//! Listing-parameter normalization and pagination link computation.
//!
//! This module owns the two request-scoped computations behind every listing
//! page: coercing the raw `search` / `order` / `page` query parameters into
//! usable values, and turning (current page, total pages, filter context)
//! into the set of navigation links the renderer shows. It is pure: no
//! storage types leak in, and every function is deterministic in its inputs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{DEFAULT_PAGE_NUMBER, PAGE_SIZE, PAGE_WINDOW};

/// Listing sort order, `new` (default) or `old` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortOrder {
    #[serde(rename = "new")]
    Newest,
    #[serde(rename = "old")]
    Oldest,
}

impl SortOrder {
    /// Parse the raw `order` query parameter. Only the exact value `old`
    /// selects oldest-first; anything else (including absence) is newest.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("old") => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }

    /// Wire value, as it appears in query strings.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Newest => "new",
            SortOrder::Oldest => "old",
        }
    }
}

/// Coerce the raw `page` query parameter to a positive page number.
///
/// Missing, unparseable, and zero values all fall back to page 1; no error
/// is surfaced for a malformed page.
pub fn parse_page_number(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(DEFAULT_PAGE_NUMBER)
}

/// Total page count for a matching-row count: `ceil(total / PAGE_SIZE)`.
///
/// An empty listing yields 0 pages; the presentation side floors that to 1.
pub fn total_pages(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

/// Number of rows to skip for a (1-based) page number.
pub fn offset(page: u64) -> u64 {
    (page.max(1) - 1) * PAGE_SIZE
}

/// One entry in the rendered page-link strip: either a numbered link or a
/// non-navigable ellipsis placeholder.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageLink {
    /// Page number; absent on ellipsis entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Link target; absent on ellipsis entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub is_current: bool,
    pub is_ellipsis: bool,
}

impl PageLink {
    fn numbered(page: u64, url: String, is_current: bool) -> Self {
        Self {
            page: Some(page),
            url: Some(url),
            is_current,
            is_ellipsis: false,
        }
    }

    fn ellipsis() -> Self {
        Self {
            page: None,
            url: None,
            is_current: false,
            is_ellipsis: true,
        }
    }
}

/// Navigation links for one listing page.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationView {
    /// Link to the previous page, present iff the current page is not the first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_url: Option<String>,
    /// Link to the next page, present iff the current page is not the last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// Page-link strip with out-of-window runs collapsed to ellipses
    pub pages: Vec<PageLink>,
}

/// Build the query string for one page link, preserving the active search
/// term (percent-encoded) and sort order so navigation never drops them.
fn page_url(page: u64, search: Option<&str>, order: Option<SortOrder>) -> String {
    let mut url = format!("?page={}", page);
    if let Some(term) = search.filter(|term| !term.is_empty()) {
        url.push_str(&format!("&search={}", urlencoding::encode(term)));
    }
    if let Some(order) = order {
        url.push_str(&format!("&order={}", order.as_param()));
    }
    url
}

/// Compute the pagination view for a listing page.
///
/// Zero inputs floor to 1, so an empty listing renders as page 1 of 1 with a
/// single non-navigable current link. A page gets a direct link when it is
/// the first page, the last page, or within [`PAGE_WINDOW`] of the current
/// page; each excluded run collapses to exactly one ellipsis entry, guarded
/// by checking the last emitted entry rather than a global flag.
pub fn paginate(
    current_page: u64,
    total_pages: u64,
    search: Option<&str>,
    order: Option<SortOrder>,
) -> PaginationView {
    let total = total_pages.max(1);
    let current = current_page.max(1);

    let mut view = PaginationView {
        prev_url: None,
        next_url: None,
        pages: Vec::new(),
    };

    if current > 1 {
        view.prev_url = Some(page_url(current - 1, search, order));
    }
    if current < total {
        view.next_url = Some(page_url(current + 1, search, order));
    }

    for i in 1..=total {
        let in_window = i >= current.saturating_sub(PAGE_WINDOW) && i <= current + PAGE_WINDOW;
        if i == 1 || i == total || in_window {
            view.pages
                .push(PageLink::numbered(i, page_url(i, search, order), i == current));
        } else if view.pages.last().is_some_and(|last| !last.is_ellipsis) {
            view.pages.push(PageLink::ellipsis());
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(view: &PaginationView) -> Vec<Option<u64>> {
        view.pages.iter().map(|link| link.page).collect()
    }

    fn numbered(view: &PaginationView) -> Vec<u64> {
        view.pages.iter().filter_map(|link| link.page).collect()
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(11), 3);
    }

    #[test]
    fn offset_is_page_minus_one_times_page_size() {
        assert_eq!(offset(1), 0);
        assert_eq!(offset(2), 5);
        assert_eq!(offset(4), 15);
        // unnormalized zero behaves like page 1
        assert_eq!(offset(0), 0);
    }

    #[test]
    fn page_number_parsing_defaults_to_one() {
        assert_eq!(parse_page_number(None), 1);
        assert_eq!(parse_page_number(Some("3")), 3);
        assert_eq!(parse_page_number(Some(" 2 ")), 2);
        assert_eq!(parse_page_number(Some("abc")), 1);
        assert_eq!(parse_page_number(Some("")), 1);
        assert_eq!(parse_page_number(Some("0")), 1);
        assert_eq!(parse_page_number(Some("-2")), 1);
        assert_eq!(parse_page_number(Some("2.5")), 1);
    }

    #[test]
    fn order_parsing_only_old_is_oldest() {
        assert_eq!(SortOrder::from_param(None), SortOrder::Newest);
        assert_eq!(SortOrder::from_param(Some("new")), SortOrder::Newest);
        assert_eq!(SortOrder::from_param(Some("old")), SortOrder::Oldest);
        assert_eq!(SortOrder::from_param(Some("OLD")), SortOrder::Newest);
        assert_eq!(SortOrder::from_param(Some("whatever")), SortOrder::Newest);
    }

    #[test]
    fn middle_page_window_collapses_both_sides() {
        let view = paginate(5, 10, None, None);

        assert_eq!(
            labels(&view),
            vec![
                Some(1),
                None, // ellipsis for 2
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                None, // ellipsis for 8..=9
                Some(10),
            ]
        );

        let current: Vec<u64> = view
            .pages
            .iter()
            .filter(|link| link.is_current)
            .filter_map(|link| link.page)
            .collect();
        assert_eq!(current, vec![5]);

        assert_eq!(view.prev_url.as_deref(), Some("?page=4"));
        assert_eq!(view.next_url.as_deref(), Some("?page=6"));
    }

    #[test]
    fn ellipsis_is_never_duplicated() {
        let view = paginate(10, 20, None, None);
        // 1 .. 8 9 10 11 12 .. 20
        assert_eq!(
            numbered(&view),
            vec![1, 8, 9, 10, 11, 12, 20]
        );
        let ellipses = view.pages.iter().filter(|link| link.is_ellipsis).count();
        assert_eq!(ellipses, 2);
        for pair in view.pages.windows(2) {
            assert!(!(pair[0].is_ellipsis && pair[1].is_ellipsis));
        }
    }

    #[test]
    fn first_page_of_three_has_no_prev_and_no_ellipsis() {
        let view = paginate(1, 3, None, None);

        assert!(view.prev_url.is_none());
        assert_eq!(view.next_url.as_deref(), Some("?page=2"));
        assert_eq!(numbered(&view), vec![1, 2, 3]);
        assert!(view.pages.iter().all(|link| !link.is_ellipsis));
        assert!(view.pages[0].is_current);
        assert!(!view.pages[1].is_current);
    }

    #[test]
    fn contiguous_run_when_total_fits_in_window() {
        // 2 * PAGE_WINDOW + 1 pages around the middle: no gaps to collapse
        let view = paginate(3, 5, None, None);
        assert_eq!(numbered(&view), vec![1, 2, 3, 4, 5]);
        assert!(view.pages.iter().all(|link| !link.is_ellipsis));
    }

    #[test]
    fn single_page_has_no_navigation() {
        let view = paginate(1, 1, None, None);

        assert!(view.prev_url.is_none());
        assert!(view.next_url.is_none());
        assert_eq!(view.pages.len(), 1);
        assert!(view.pages[0].is_current);
        assert_eq!(view.pages[0].page, Some(1));
    }

    #[test]
    fn zero_total_pages_floors_to_one() {
        // Empty listing: ceil(0 / PAGE_SIZE) = 0 pages, shown as page 1 of 1.
        let view = paginate(1, 0, None, None);

        assert!(view.prev_url.is_none());
        assert!(view.next_url.is_none());
        assert_eq!(numbered(&view), vec![1]);
        assert!(view.pages[0].is_current);
    }

    #[test]
    fn zero_current_page_floors_to_one() {
        let view = paginate(0, 3, None, None);
        assert!(view.prev_url.is_none());
        assert_eq!(view.next_url.as_deref(), Some("?page=2"));
        assert!(view.pages[0].is_current);
    }

    #[test]
    fn last_page_has_no_next() {
        let view = paginate(10, 10, None, None);
        assert_eq!(view.prev_url.as_deref(), Some("?page=9"));
        assert!(view.next_url.is_none());
        assert_eq!(numbered(&view), vec![1, 8, 9, 10]);
    }

    #[test]
    fn urls_preserve_search_and_order() {
        let view = paginate(2, 5, Some("node js"), Some(SortOrder::Oldest));

        assert_eq!(
            view.prev_url.as_deref(),
            Some("?page=1&search=node%20js&order=old")
        );
        assert_eq!(
            view.next_url.as_deref(),
            Some("?page=3&search=node%20js&order=old")
        );

        for link in view.pages.iter().filter(|link| !link.is_ellipsis) {
            let url = link.url.as_deref().unwrap();
            let page = link.page.unwrap();
            assert!(url.starts_with(&format!("?page={}", page)));
            assert!(url.contains("search=node%20js"));
            assert!(url.contains("order=old"));
        }

        // Decoding the search parameter recovers the literal term.
        assert_eq!(urlencoding::decode("node%20js").unwrap(), "node js");
    }

    #[test]
    fn empty_search_is_dropped_from_urls() {
        let view = paginate(1, 2, Some(""), Some(SortOrder::Newest));
        assert_eq!(view.next_url.as_deref(), Some("?page=2&order=new"));
    }

    #[test]
    fn computation_is_deterministic() {
        let first =
            serde_json::to_value(paginate(3, 7, Some("rust"), Some(SortOrder::Newest))).unwrap();
        let second =
            serde_json::to_value(paginate(3, 7, Some("rust"), Some(SortOrder::Newest))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ellipsis_entries_serialize_without_page_or_url() {
        let view = paginate(5, 10, None, None);
        let json = serde_json::to_value(&view).unwrap();

        let pages = json["pages"].as_array().unwrap();
        let ellipsis = pages
            .iter()
            .find(|entry| entry["is_ellipsis"] == true)
            .unwrap();
        assert!(ellipsis.get("page").is_none());
        assert!(ellipsis.get("url").is_none());

        let first = &pages[0];
        assert_eq!(first["page"], 1);
        assert_eq!(first["url"], "?page=1");
    }
}
