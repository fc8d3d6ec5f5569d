//! Static rectangular no-entry regions.

/// Axis-aligned rectangle that explosion points cannot enter.
///
/// Containment is inclusive on all four bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Barrier {
    pub start_x: i32,
    pub end_x: i32,
    pub start_y: i32,
    pub end_y: i32,
}

impl Barrier {
    pub const fn new(start_x: i32, end_x: i32, start_y: i32, end_y: i32) -> Self {
        Self {
            start_x,
            end_x,
            start_y,
            end_y,
        }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.start_x && x <= self.end_x && y >= self.start_y && y <= self.end_y
    }

    /// Cells painted on the grid when the barrier is added.
    ///
    /// The painted footprint is half-open (`start..end` on both axes) and so
    /// is one row and one column narrower than the blocking region.
    pub fn footprint(&self) -> impl Iterator<Item = (i32, i32)> {
        let (sx, ex, sy, ey) = (self.start_x, self.end_x, self.start_y, self.end_y);
        (sy..ey).flat_map(move |y| (sx..ex).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let b = Barrier::new(2, 5, 10, 12);
        assert!(b.contains(2, 10));
        assert!(b.contains(5, 10));
        assert!(b.contains(2, 12));
        assert!(b.contains(5, 12));
        assert!(!b.contains(1, 11));
        assert!(!b.contains(6, 11));
        assert!(!b.contains(3, 9));
        assert!(!b.contains(3, 13));
    }

    #[test]
    fn footprint_is_half_open() {
        let b = Barrier::new(1, 4, 16, 17);
        let cells: Vec<_> = b.footprint().collect();
        assert_eq!(cells, vec![(1, 16), (2, 16), (3, 16)]);
    }

    #[test]
    fn degenerate_barrier_paints_nothing_but_still_blocks() {
        let b = Barrier::new(7, 7, 3, 3);
        assert_eq!(b.footprint().count(), 0);
        assert!(b.contains(7, 3));
    }
}
