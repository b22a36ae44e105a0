use crate::error::DashboardError;
use crate::model_hub::CategoryFilter;

/// View-local tab state.
///
/// Starts on tab 0 with the category filter (if the view has one) set to
/// [`CategoryFilter::All`]. Moving to a different tab resets the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    index: usize,
    len: usize,
    category: Option<CategoryFilter>,
}

impl TabSelection {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            category: None,
        }
    }

    pub fn with_category_filter(len: usize) -> Self {
        Self {
            category: Some(CategoryFilter::All),
            ..Self::new(len)
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves to tab `k`. Returns whether anything changed.
    pub fn select(&mut self, k: usize) -> Result<bool, DashboardError> {
        if k >= self.len {
            return Err(DashboardError::TabOutOfRange {
                index: k,
                len: self.len,
            });
        }
        if k == self.index {
            return Ok(false);
        }
        self.index = k;
        if let Some(category) = self.category.as_mut() {
            *category = CategoryFilter::All;
        }
        Ok(true)
    }

    /// Active filter; views without filtering always see `All`.
    pub fn category(&self) -> CategoryFilter {
        self.category.unwrap_or_default()
    }

    pub fn set_category(&mut self, filter: CategoryFilter) -> Result<(), DashboardError> {
        match self.category.as_mut() {
            Some(category) => {
                *category = filter;
                Ok(())
            }
            None => Err(DashboardError::CategoryFilterUnsupported),
        }
    }

    /// The entry for the current tab.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_hub::ModelCategory;

    #[test]
    fn test_defaults() {
        let tabs = TabSelection::with_category_filter(2);
        assert_eq!(tabs.index(), 0);
        assert_eq!(tabs.category(), CategoryFilter::All);
    }

    #[test]
    fn test_out_of_range_leaves_state() {
        let mut tabs = TabSelection::new(4);
        tabs.select(2).unwrap();
        let err = tabs.select(4).unwrap_err();
        assert_eq!(err, DashboardError::TabOutOfRange { index: 4, len: 4 });
        assert_eq!(tabs.index(), 2);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut tabs = TabSelection::with_category_filter(2);
        tabs.set_category(CategoryFilter::Only(ModelCategory::Vision)).unwrap();
        assert_eq!(tabs.select(0), Ok(false));
        assert_eq!(tabs.category(), CategoryFilter::Only(ModelCategory::Vision));
    }

    #[test]
    fn test_tab_change_resets_category() {
        let mut tabs = TabSelection::with_category_filter(2);
        tabs.set_category(CategoryFilter::Only(ModelCategory::Reasoning)).unwrap();
        assert_eq!(tabs.select(1), Ok(true));
        assert_eq!(tabs.category(), CategoryFilter::All);
    }

    #[test]
    fn test_filter_unsupported_without_category() {
        let mut tabs = TabSelection::new(6);
        assert_eq!(
            tabs.set_category(CategoryFilter::All),
            Err(DashboardError::CategoryFilterUnsupported)
        );
    }

    #[test]
    fn test_empty_selection_rejects_everything() {
        let mut tabs = TabSelection::new(0);
        assert!(tabs.is_empty());
        assert!(tabs.select(0).is_err());
        assert_eq!(tabs.pick::<u8>(&[]), None);
    }
}
