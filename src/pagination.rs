use std::num::NonZeroUsize;
use std::ops::Range;

/// Cursor over a fixed-length list split into pages of `per_page` items.
///
/// Pages are 1-based. Stepping past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: NonZeroUsize,
    total_items: usize,
}

impl Paginator {
    pub fn new(total_items: usize, per_page: NonZeroUsize) -> Self {
        Self {
            page: 1,
            per_page,
            total_items,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Never less than 1, so an empty list still has a (blank) first page.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page.get()).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Index range of the current page, clamped to the list length.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page.get()).min(self.total_items);
        let end = (self.page * self.per_page.get()).min(self.total_items);
        start..end
    }

    /// The current page as exactly `per_page` slots, `None` filling the tail.
    /// Full pages are returned the same way so the grid never changes shape.
    pub fn slots<'a, T>(&self, items: &'a [T]) -> Vec<Option<&'a T>> {
        let page = items.get(self.range()).unwrap_or_default();
        (0..self.per_page.get()).map(|i| page.get(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR: NonZeroUsize = NonZeroUsize::new(4).unwrap();

    #[test]
    fn test_total_pages() {
        assert_eq!(Paginator::new(6, FOUR).total_pages(), 2);
        assert_eq!(Paginator::new(8, FOUR).total_pages(), 2);
        assert_eq!(Paginator::new(9, FOUR).total_pages(), 3);
        assert_eq!(Paginator::new(1, FOUR).total_pages(), 1);
        assert_eq!(Paginator::new(0, FOUR).total_pages(), 1);
    }

    #[test]
    fn test_prev_at_first_page_is_noop() {
        let mut p = Paginator::new(6, FOUR);
        assert!(!p.has_prev());
        assert!(!p.prev());
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_next_then_saturate() {
        let mut p = Paginator::new(6, FOUR);
        assert!(p.next());
        assert_eq!(p.page(), 2);
        assert!(!p.has_next());
        assert!(!p.next());
        assert_eq!(p.page(), 2);
        assert!(p.prev());
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_slots_full_first_page() {
        let items = [1, 2, 3, 4, 5, 6];
        let p = Paginator::new(items.len(), FOUR);
        assert_eq!(p.range(), 0..4);
        assert_eq!(
            p.slots(&items),
            vec![Some(&1), Some(&2), Some(&3), Some(&4)]
        );
    }

    #[test]
    fn test_slots_last_page_padded() {
        let items = [1, 2, 3, 4, 5, 6];
        let mut p = Paginator::new(items.len(), FOUR);
        p.next();
        assert_eq!(p.range(), 4..6);
        assert_eq!(p.slots(&items), vec![Some(&5), Some(&6), None, None]);
    }

    #[test]
    fn test_every_page_slice_matches() {
        let items: Vec<usize> = (0..11).collect();
        let mut p = Paginator::new(items.len(), FOUR);
        loop {
            let start = (p.page() - 1) * 4;
            let slots = p.slots(&items);
            assert_eq!(slots.len(), 4);
            for (i, slot) in slots.iter().enumerate() {
                assert_eq!(*slot, items.get(start + i));
            }
            if !p.next() {
                break;
            }
        }
        assert_eq!(p.page(), 3);
    }

    #[test]
    fn test_empty_list_all_placeholders() {
        let items: [u8; 0] = [];
        let mut p = Paginator::new(0, FOUR);
        assert_eq!(p.slots(&items), vec![None, None, None, None]);
        assert!(!p.next());
        assert!(!p.prev());
    }
}
