//! Sectioned view model consumed by the presentation layer.

use crate::entity::RepoEntity;

/// Index of the fixed recommendations section.
pub const SECTION_RECOMMENDED: usize = 0;
/// Index of the search-results section.
pub const SECTION_SEARCH_RESULTS: usize = 1;

/// Two-section, indexable display structure.
///
/// Section 0 holds the fixed recommendations (populated once, at startup);
/// section 1 holds the current search results, replaced wholesale after each
/// successful search with items already in descending-popularity order.
#[derive(Debug, Clone, Default)]
pub struct ViewData {
    recommended: Vec<RepoEntity>,
    search_results: Vec<RepoEntity>,
}

impl ViewData {
    /// Create an empty view model: two sections, zero items each.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recommendations backing list. Called once, at startup.
    pub fn set_recommended(&mut self, items: Vec<RepoEntity>) {
        self.recommended = items;
    }

    /// Replace the search-results backing list with already-sorted items.
    pub fn set_searched(&mut self, items: Vec<RepoEntity>) {
        self.search_results = items;
    }

    /// Number of sections. Always 2.
    #[must_use]
    pub fn section_count(&self) -> usize {
        2
    }

    /// Display title for a section. The search-results title carries the
    /// current result count.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range section index.
    #[must_use]
    pub fn title(&self, section: usize) -> String {
        match section {
            SECTION_RECOMMENDED => "Recommended".to_string(),
            SECTION_SEARCH_RESULTS => format!("Search Results ({})", self.search_results.len()),
            _ => panic!("section index out of range: {section}"),
        }
    }

    /// Number of items in a section.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range section index.
    #[must_use]
    pub fn item_count(&self, section: usize) -> usize {
        self.section(section).len()
    }

    /// Item at a position. Out-of-range access is a contract violation.
    ///
    /// # Panics
    ///
    /// Panics when `section` or `index` is out of range.
    #[must_use]
    pub fn item(&self, section: usize, index: usize) -> &RepoEntity {
        &self.section(section)[index]
    }

    /// Tolerant lookup for UI layers documented to probe past the end.
    #[must_use]
    pub fn get(&self, section: usize, index: usize) -> Option<&RepoEntity> {
        let items = match section {
            SECTION_RECOMMENDED => &self.recommended,
            SECTION_SEARCH_RESULTS => &self.search_results,
            _ => return None,
        };
        items.get(index)
    }

    fn section(&self, section: usize) -> &[RepoEntity] {
        match section {
            SECTION_RECOMMENDED => &self.recommended,
            SECTION_SEARCH_RESULTS => &self.search_results,
            _ => panic!("section index out of range: {section}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn repo(id: u64, name: &str, stars: u64) -> RepoEntity {
        RepoEntity {
            id,
            name: name.to_string(),
            html_url: Url::parse("http://example.com/").expect("static URL"),
            description: String::new(),
            stargazers_count: stars,
        }
    }

    #[test]
    fn empty_view_has_fixed_sections() {
        let data = ViewData::new();
        assert_eq!(data.section_count(), 2);
        assert_eq!(data.item_count(SECTION_RECOMMENDED), 0);
        assert_eq!(data.item_count(SECTION_SEARCH_RESULTS), 0);
        assert_eq!(data.title(SECTION_RECOMMENDED), "Recommended");
        assert_eq!(data.title(SECTION_SEARCH_RESULTS), "Search Results (0)");
    }

    #[test]
    fn searched_title_reflects_count() {
        let mut data = ViewData::new();
        data.set_searched(vec![repo(1, "a", 1), repo(2, "b", 0)]);
        assert_eq!(data.title(SECTION_SEARCH_RESULTS), "Search Results (2)");
    }

    #[test]
    fn sections_are_independent() {
        let mut data = ViewData::new();
        data.set_recommended(vec![repo(1, "rec", 9)]);
        data.set_searched(vec![repo(2, "hit", 1), repo(3, "miss", 0)]);

        assert_eq!(data.item_count(SECTION_RECOMMENDED), 1);
        assert_eq!(data.item_count(SECTION_SEARCH_RESULTS), 2);
        assert_eq!(data.item(SECTION_RECOMMENDED, 0).name, "rec");
        assert_eq!(data.item(SECTION_SEARCH_RESULTS, 1).name, "miss");
    }

    #[test]
    fn set_searched_replaces_wholesale() {
        let mut data = ViewData::new();
        data.set_searched(vec![repo(1, "old", 1)]);
        data.set_searched(vec![repo(2, "new", 2)]);
        assert_eq!(data.item_count(SECTION_SEARCH_RESULTS), 1);
        assert_eq!(data.item(SECTION_SEARCH_RESULTS, 0).name, "new");
    }

    #[test]
    fn get_is_tolerant_of_out_of_range() {
        let data = ViewData::new();
        assert!(data.get(SECTION_RECOMMENDED, 0).is_none());
        assert!(data.get(SECTION_SEARCH_RESULTS, 99).is_none());
        assert!(data.get(7, 0).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn item_panics_on_bad_section() {
        let data = ViewData::new();
        let _ = data.item(2, 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn item_panics_on_bad_index() {
        let data = ViewData::new();
        let _ = data.item(SECTION_RECOMMENDED, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn title_panics_on_bad_section() {
        let data = ViewData::new();
        let _ = data.title(2);
    }
}
