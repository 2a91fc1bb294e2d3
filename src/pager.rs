//! "Show more" pagination.
//!
//! A reveal counter that only grows in whole batches and snaps back to one
//! batch on "show less" or when the underlying list changes.

use std::ops::Range;

use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPager {
    batch: usize,
    displayed: usize,
    item_count: usize,
}

impl RevealPager {
    pub fn new(batch: usize, item_count: usize) -> Result<Self> {
        if batch == 0 {
            return Err(Error::config("batch size must be positive"));
        }
        Ok(Self {
            batch,
            displayed: batch,
            item_count,
        })
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of items to draw.
    pub fn visible(&self) -> usize {
        self.displayed.min(self.item_count)
    }

    pub fn visible_range(&self) -> Range<usize> {
        0..self.visible()
    }

    pub fn can_show_more(&self) -> bool {
        self.visible() < self.item_count
    }

    pub fn can_show_less(&self) -> bool {
        self.displayed > self.batch
    }

    pub fn show_more(&mut self) -> usize {
        if self.can_show_more() {
            self.displayed += self.batch;
            debug!(displayed = self.displayed, total = self.item_count, "show more");
        }
        self.visible()
    }

    pub fn show_less(&mut self) -> usize {
        self.displayed = self.batch;
        self.visible()
    }

    /// New list (category change): back to a single batch.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.displayed = self.batch;
    }

    /// Reveal the next batch and return the indexes it added.
    pub fn next_batch(&mut self) -> Range<usize> {
        let start = self.visible();
        let end = self.show_more();
        start..end
    }

    /// The batch size follows the viewport. A reveal that went no further
    /// than two batches collapses back to one batch of the new size.
    pub fn set_batch(&mut self, batch: usize) -> Result<()> {
        if batch == 0 {
            return Err(Error::config("batch size must be positive"));
        }
        self.batch = batch;
        if self.displayed <= batch * 2 {
            self.displayed = batch;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_more_sequence_clamps_at_total() {
        let mut pager = RevealPager::new(8, 20).unwrap();
        assert_eq!(pager.visible(), 8);
        assert!(pager.can_show_more());

        assert_eq!(pager.show_more(), 16);
        assert_eq!(pager.show_more(), 20);
        assert!(!pager.can_show_more());
        assert_eq!(pager.show_more(), 20);
        assert!(pager.can_show_less());
    }

    #[test]
    fn test_show_less() {
        let mut pager = RevealPager::new(4, 10).unwrap();
        pager.show_more();
        pager.show_more();
        assert_eq!(pager.show_less(), 4);
        assert!(!pager.can_show_less());
        assert!(pager.can_show_more());
    }

    #[test]
    fn test_small_list() {
        let pager = RevealPager::new(8, 3).unwrap();
        assert_eq!(pager.visible(), 3);
        assert!(!pager.can_show_more());
        assert!(!pager.can_show_less());

        let empty = RevealPager::new(8, 0).unwrap();
        assert_eq!(empty.visible_range(), 0..0);
        assert!(!empty.can_show_more());
    }

    #[test]
    fn test_reset_on_new_list() {
        let mut pager = RevealPager::new(8, 40).unwrap();
        pager.show_more();
        pager.show_more();
        pager.reset(12);
        assert_eq!(pager.visible(), 8);
        assert_eq!(pager.item_count(), 12);
    }

    #[test]
    fn test_next_batch_ranges() {
        let mut pager = RevealPager::new(16, 40).unwrap();
        assert_eq!(pager.visible_range(), 0..16);
        assert_eq!(pager.next_batch(), 16..32);
        assert_eq!(pager.next_batch(), 32..40);
        assert_eq!(pager.next_batch(), 40..40);
    }

    #[test]
    fn test_set_batch_collapses_small_reveals() {
        let mut pager = RevealPager::new(8, 50).unwrap();
        pager.show_more();
        // 16 <= 2 * 8: collapses to the new batch
        pager.set_batch(8).unwrap();
        assert_eq!(pager.visible(), 8);

        pager.show_more();
        pager.show_more();
        pager.show_more();
        assert_eq!(pager.visible(), 32);
        // 32 > 2 * 4: the user's reveal is kept
        pager.set_batch(4).unwrap();
        assert_eq!(pager.visible(), 32);
        assert_eq!(pager.batch(), 4);
    }

    #[test]
    fn test_set_batch_uses_unclamped_reveal() {
        let mut pager = RevealPager::new(8, 18).unwrap();
        pager.show_more();
        assert_eq!(pager.show_more(), 18);
        // 24 requested > 2 * 10, so the reveal survives although only 18 exist
        pager.set_batch(10).unwrap();
        assert_eq!(pager.visible(), 18);
        assert_eq!(pager.batch(), 10);
    }

    #[test]
    fn test_zero_batch_rejected() {
        assert!(RevealPager::new(0, 10).is_err());
        let mut pager = RevealPager::new(4, 10).unwrap();
        assert!(pager.set_batch(0).is_err());
    }
}
