//! Category-filtered carousel.
//!
//! [`CarouselFilter`] keeps a fixed item collection, an active category
//! filter, and a wrap-around position inside the filtered subset. Changing
//! the filter always resets the position to the first matching item.
//!
//! The filtered subset is cached as a list of indices into the original
//! collection and rebuilt on every [`set_filter`](CarouselFilter::set_filter),
//! so it can never go stale.

use log::{debug, warn};

use crate::cursor::WrapCursor;
use crate::error::CarouselError;

/// Wildcard filter that shows every item.
pub const ALL_CATEGORY: &str = "all";

/// Anything that carries a category label.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

/// Filterable, wrap-around carousel over a static item collection.
#[derive(Clone, Debug)]
pub struct CarouselFilter<T> {
    items: Vec<T>,
    categories: Vec<String>,
    active: String,
    filtered: Vec<usize>,
    cursor: WrapCursor,
}

impl<T: Categorized> CarouselFilter<T> {
    /// Creates a carousel with an explicit category list, showing all items.
    ///
    /// Duplicate labels and the wildcard itself are dropped from the list.
    pub fn new<I, S>(items: Vec<T>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut known: Vec<String> = Vec::new();
        for category in categories {
            let category = category.into();
            if category != ALL_CATEGORY && !known.contains(&category) {
                known.push(category);
            }
        }

        let filtered: Vec<usize> = (0..items.len()).collect();
        let cursor = WrapCursor::new(filtered.len());

        Self {
            items,
            categories: known,
            active: ALL_CATEGORY.to_string(),
            filtered,
            cursor,
        }
    }

    /// Creates a carousel whose categories are collected from the items in
    /// first-appearance order.
    pub fn from_items(items: Vec<T>) -> Self {
        let categories: Vec<String> = items.iter().map(|i| i.category().to_string()).collect();
        Self::new(items, categories)
    }

    /// Switches the active filter and rewinds to the first matching item.
    ///
    /// Unknown categories are rejected without touching the current state.
    pub fn set_filter(&mut self, category: &str) -> Result<(), CarouselError> {
        if !self.is_known(category) {
            warn!("rejected unknown carousel category '{category}'");
            return Err(CarouselError::InvalidCategory(category.to_string()));
        }

        self.active = category.to_string();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| category == ALL_CATEGORY || item.category() == category)
            .map(|(i, _)| i)
            .collect();
        self.cursor.reset(self.filtered.len());

        debug!(
            "carousel filter set to '{}' ({} items)",
            self.active,
            self.filtered.len()
        );
        Ok(())
    }

    /// Advances to the next visible item, wrapping to the first.
    pub fn next(&mut self) {
        self.cursor.next();
    }

    /// Steps back to the previous visible item, wrapping to the last.
    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    /// Jumps to a position within the visible items.
    pub fn select_index(&mut self, index: usize) -> Result<(), CarouselError> {
        self.cursor.select(index).inspect_err(|e| warn!("{e}"))
    }

    /// Item at the current position, or `None` when nothing matches the filter.
    pub fn current(&self) -> Option<&T> {
        let pos = self.cursor.index()?;
        self.items.get(self.filtered[pos])
    }

    /// Items matching the active filter, in original order.
    pub fn visible_items(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.items[i]).collect()
    }

    /// Position within the visible items, `None` when empty.
    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    #[inline]
    pub fn active_filter(&self) -> &str {
        &self.active
    }

    /// Known categories, without the wildcard.
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Filter choices for a button row: the wildcard, then each category.
    pub fn filter_options(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORY)
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }

    /// Number of visible items.
    #[inline]
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// The whole collection, ignoring the filter.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn is_known(&self, category: &str) -> bool {
        category == ALL_CATEGORY || self.categories.iter().any(|c| c == category)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        cat: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.cat
        }
    }

    fn item(id: u32, cat: &'static str) -> Item {
        Item { id, cat }
    }

    fn sample() -> CarouselFilter<Item> {
        CarouselFilter::new(
            vec![item(1, "a"), item(2, "b"), item(3, "a")],
            ["a", "b", "c"],
        )
    }

    fn ids(c: &CarouselFilter<Item>) -> Vec<u32> {
        c.visible_items().iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_starts_unfiltered() {
        let c = sample();
        assert_eq!(c.active_filter(), ALL_CATEGORY);
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(ids(&c), vec![1, 2, 3]);
    }

    #[test]
    fn test_example_walkthrough() {
        let mut c = sample();

        c.set_filter("a").unwrap();
        assert_eq!(ids(&c), vec![1, 3]);
        assert_eq!(c.current_index(), Some(0));

        c.next();
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.current().map(|i| i.id), Some(3));

        c.next();
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.current().map(|i| i.id), Some(1));

        c.set_filter(ALL_CATEGORY).unwrap();
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(ids(&c), vec![1, 2, 3]);
    }

    #[test]
    fn test_previous_from_start_goes_to_last() {
        let mut c = sample();
        c.previous();
        assert_eq!(c.current_index(), Some(2));
        assert_eq!(c.current().map(|i| i.id), Some(3));
    }

    #[test]
    fn test_filter_change_resets_index() {
        let mut c = sample();
        c.next();
        c.next();
        c.set_filter("b").unwrap();
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.current().map(|i| i.id), Some(2));
    }

    #[test]
    fn test_reselecting_same_filter_resets_index() {
        let mut c = sample();
        c.set_filter("a").unwrap();
        c.next();
        c.set_filter("a").unwrap();
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn test_empty_category_degrades_gracefully() {
        let mut c = sample();
        c.set_filter("c").unwrap();
        assert!(c.is_empty());
        assert_eq!(c.current_index(), None);
        assert_eq!(c.current(), None);
        c.next();
        c.previous();
        assert_eq!(c.current(), None);
        assert!(c.visible_items().is_empty());
    }

    #[test]
    fn test_invalid_category_leaves_state() {
        let mut c = sample();
        c.set_filter("a").unwrap();
        c.next();
        let err = c.set_filter("nonexistent").unwrap_err();
        assert_eq!(err, CarouselError::InvalidCategory("nonexistent".into()));
        assert_eq!(c.active_filter(), "a");
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut c = sample();
        c.set_filter("a").unwrap();
        c.next();
        let err = c.select_index(5).unwrap_err();
        assert_eq!(err, CarouselError::IndexOutOfRange { index: 5, len: 2 });
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn test_select_index() {
        let mut c = sample();
        c.select_index(2).unwrap();
        assert_eq!(c.current().map(|i| i.id), Some(3));
    }

    #[test]
    fn test_empty_collection() {
        let mut c: CarouselFilter<Item> = CarouselFilter::new(vec![], ["a"]);
        assert_eq!(c.current(), None);
        c.next();
        assert_eq!(c.current_index(), None);
        assert!(c.select_index(0).is_err());
        c.set_filter("a").unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_from_items_collects_categories_in_order() {
        let c = CarouselFilter::from_items(vec![item(1, "web"), item(2, "trading"), item(3, "web")]);
        assert_eq!(c.categories(), ["web".to_string(), "trading".to_string()]);
        assert_eq!(c.filter_options(), vec!["all", "web", "trading"]);
    }

    #[test]
    fn test_wildcard_not_stored_as_category() {
        let c = CarouselFilter::new(vec![item(1, "a")], ["all", "a", "a"]);
        assert_eq!(c.categories(), ["a".to_string()]);
    }

    #[test]
    fn test_works_over_references() {
        let owned = vec![item(1, "a"), item(2, "b")];
        let mut c = CarouselFilter::from_items(owned.iter().collect());
        c.set_filter("b").unwrap();
        assert_eq!(c.current().map(|i| i.id), Some(2));
    }
}
