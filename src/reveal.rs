//! One-shot "reveal on scroll" bookkeeping for project cards.

/// Fraction of a card that must be in the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Per-slot stagger between cards revealed together.
pub const STAGGER_MS: u32 = 150;

pub fn reveal_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Watch {
    Armed,
    Fired,
    Released,
}

/// Accepts at most one qualifying notification, then goes deaf.
///
/// `Fired` and `Released` are both terminal, so a late notification after
/// teardown can never flip the card to visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    watch: Watch,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self { watch: Watch::Armed }
    }
}

impl RevealLatch {
    /// Feed one observer notification. Returns `true` exactly once: on the
    /// first notification that is intersecting with at least
    /// [`REVEAL_THRESHOLD`] of the card visible, while still armed.
    ///
    /// The observer also reports the initial state on registration, where a
    /// sliver of overlap counts as intersecting, hence the ratio check.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.watch == Watch::Armed && intersecting && ratio >= REVEAL_THRESHOLD {
            self.watch = Watch::Fired;
            true
        } else {
            false
        }
    }

    pub fn release(&mut self) {
        if self.watch == Watch::Armed {
            self.watch = Watch::Released;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false, 0.0));
        assert_eq!(latch.watch, Watch::Armed);
        assert!(latch.observe(true, 0.5));
        assert_eq!(latch.watch, Watch::Fired);
        assert!(!latch.observe(true, 1.0));
        assert!(!latch.observe(false, 0.0));
        assert_eq!(latch.watch, Watch::Fired);
    }

    #[test]
    fn test_sliver_below_threshold_does_not_fire() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(true, 0.03));
        assert_eq!(latch.watch, Watch::Armed);
        assert!(latch.observe(true, REVEAL_THRESHOLD));
        assert_eq!(latch.watch, Watch::Fired);
    }

    #[test]
    fn test_release_before_fire() {
        let mut latch = RevealLatch::default();
        latch.release();
        assert_eq!(latch.watch, Watch::Released);
        assert!(!latch.observe(true, 1.0));
        assert_eq!(latch.watch, Watch::Released);
    }

    #[test]
    fn test_release_after_fire_keeps_revealed() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 1.0));
        latch.release();
        assert_eq!(latch.watch, Watch::Fired);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(reveal_delay_ms(0), 0);
        assert_eq!(reveal_delay_ms(1), 150);
        assert_eq!(reveal_delay_ms(3), 450);
    }

    #[test]
    fn test_stagger_saturates() {
        assert_eq!(reveal_delay_ms(usize::MAX), u32::MAX);
        assert_eq!(reveal_delay_ms(u32::MAX as usize / 2), u32::MAX);
    }
}
