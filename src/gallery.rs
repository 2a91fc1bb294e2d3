use tracing::debug;

use crate::card::Categorized;
use crate::constants::ALL_CATEGORY;
use crate::error::Result;
use crate::pager::RevealPager;
use crate::viewport::Breakpoints;

/// A category-filtered grid revealed batch by batch.
pub struct Gallery<T> {
    items: Vec<T>,
    category: String,
    filtered: Vec<usize>,
    batches: Breakpoints,
    pager: RevealPager,
}

impl<T: Categorized> Gallery<T> {
    pub fn new(items: Vec<T>, batches: Breakpoints, viewport_width: u32) -> Result<Self> {
        let filtered: Vec<usize> = (0..items.len()).collect();
        let pager = RevealPager::new(batches.items_for(viewport_width), filtered.len())?;
        Ok(Self {
            items,
            category: ALL_CATEGORY.to_string(),
            filtered,
            batches,
            pager,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn pager(&self) -> &RevealPager {
        &self.pager
    }

    /// Number of items in the current category.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn select_category(&mut self, id: &str) {
        self.category = id.to_string();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| id == ALL_CATEGORY || item.category() == id)
            .map(|(i, _)| i)
            .collect();
        self.pager.reset(self.filtered.len());
        debug!(category = id, matches = self.filtered.len(), "category selected");
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.filtered[self.pager.visible_range()]
            .iter()
            .map(|&i| &self.items[i])
    }

    pub fn show_more(&mut self) -> usize {
        self.pager.show_more()
    }

    pub fn show_less(&mut self) -> usize {
        self.pager.show_less()
    }

    pub fn resize(&mut self, viewport_width: u32) -> Result<()> {
        self.pager.set_batch(self.batches.items_for(viewport_width))
    }
}
