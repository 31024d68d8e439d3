//! View state - tag filter, selection, and the derived essay list
//!
//! Pure in-memory state over a loaded collection. The collection itself is
//! never mutated here; the filtered view and tag list are derived on demand.

use indexmap::IndexSet;

use crate::content::Essay;

/// How the reader overlay was dismissed. All paths are equivalent and run
/// the same transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Escape,
    Backdrop,
}

/// Client-side view state over a loaded essay collection
#[derive(Debug, Default)]
pub struct ViewState {
    essays: Vec<Essay>,
    filter: Option<String>,
    selected: Option<String>,
}

impl ViewState {
    /// Build view state over a loaded collection (date-descending order
    /// is the loader's responsibility and is preserved here).
    pub fn new(essays: Vec<Essay>) -> Self {
        Self {
            essays,
            filter: None,
            selected: None,
        }
    }

    /// The full, unfiltered collection in loaded order
    pub fn essays(&self) -> &[Essay] {
        &self.essays
    }

    /// Replace the active tag filter; `None` clears it
    pub fn set_filter(&mut self, tag: Option<&str>) {
        self.filter = tag.map(|t| t.to_string());
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Essays matching the active filter, in the original order.
    /// With no filter this is the whole collection.
    pub fn filtered(&self) -> Vec<&Essay> {
        match &self.filter {
            None => self.essays.iter().collect(),
            Some(tag) => self.essays.iter().filter(|e| e.has_tag(tag)).collect(),
        }
    }

    /// Distinct tags across the full collection, in order of first appearance
    pub fn all_tags(&self) -> Vec<&str> {
        let mut tags: IndexSet<&str> = IndexSet::new();
        for essay in &self.essays {
            for tag in &essay.tags {
                tags.insert(tag.as_str());
            }
        }
        tags.into_iter().collect()
    }

    /// Set or clear the opened essay. A slug not present in the collection
    /// clears the selection.
    pub fn select(&mut self, slug: Option<&str>) {
        self.selected = slug
            .filter(|s| self.essays.iter().any(|e| e.slug == *s))
            .map(|s| s.to_string());
    }

    /// The currently opened essay, if any
    pub fn selected(&self) -> Option<&Essay> {
        let slug = self.selected.as_deref()?;
        self.essays.iter().find(|e| e.slug == slug)
    }

    /// Overlay visibility is purely a function of selection
    pub fn overlay_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Close the reader overlay. Explicit close, escape, and backdrop all
    /// land here.
    pub fn close(&mut self, reason: CloseReason) {
        if self.selected.is_some() {
            tracing::debug!(?reason, "closing reader overlay");
        }
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn essay(slug: &str, date: &str, tags: &[&str]) -> Essay {
        Essay {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            description: format!("About {slug}."),
            date: date.to_string(),
            sort_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured: false,
            external_url: None,
            content: String::new(),
        }
    }

    fn sample_state() -> ViewState {
        ViewState::new(vec![
            essay("newest", "2024-06-01", &["tech", "writing"]),
            essay("middle", "2024-01-01", &["mind"]),
            essay("oldest", "2023-12-01", &["tech"]),
        ])
    }

    #[test]
    fn test_no_filter_equals_full_collection() {
        let state = sample_state();
        let filtered: Vec<&str> = state.filtered().iter().map(|e| e.slug.as_str()).collect();
        let all: Vec<&str> = state.essays().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut state = sample_state();
        state.set_filter(Some("tech"));
        let filtered: Vec<&str> = state.filtered().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(filtered, vec!["newest", "oldest"]);
    }

    #[test]
    fn test_filter_can_be_cleared() {
        let mut state = sample_state();
        state.set_filter(Some("mind"));
        assert_eq!(state.filtered().len(), 1);
        state.set_filter(None);
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let mut state = sample_state();
        state.set_filter(Some("nonexistent"));
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_all_tags_distinct_first_seen_order() {
        let state = sample_state();
        assert_eq!(state.all_tags(), vec!["tech", "writing", "mind"]);
    }

    #[test]
    fn test_select_and_close_paths() {
        for reason in [CloseReason::Button, CloseReason::Escape, CloseReason::Backdrop] {
            let mut state = sample_state();
            state.select(Some("middle"));
            assert!(state.overlay_open());
            assert_eq!(state.selected().unwrap().slug, "middle");

            state.close(reason);
            assert!(!state.overlay_open());
            assert!(state.selected().is_none());
        }
    }

    #[test]
    fn test_select_unknown_slug_clears_selection() {
        let mut state = sample_state();
        state.select(Some("newest"));
        state.select(Some("no-such-essay"));
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_select_none_clears_selection() {
        let mut state = sample_state();
        state.select(Some("oldest"));
        state.select(None);
        assert!(!state.overlay_open());
    }

    #[test]
    fn test_filter_does_not_affect_selection_or_tags() {
        let mut state = sample_state();
        state.select(Some("middle"));
        state.set_filter(Some("tech"));
        // selection survives filtering, and the tag list stays global
        assert_eq!(state.selected().unwrap().slug, "middle");
        assert_eq!(state.all_tags(), vec!["tech", "writing", "mind"]);
    }
}
