/// Row-major flat grid. No per-cell objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    /// Square grid, the only shape the tablecloth uses.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// True if the signed position lies inside the grid.
    #[inline]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h
    }

    /// Rows top to bottom. Yields nothing for an empty grid.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; a zero-width grid has no data anyway.
        self.data.chunks(self.w.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_zeroed() {
        let g: Grid<u64> = Grid::square(3);
        assert_eq!(g.data.len(), 9);
        assert!(g.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn set_then_get_is_row_major() {
        let mut g: Grid<u64> = Grid::new(3, 2);
        g.set(2, 1, 7);
        assert_eq!(g.get(2, 1), 7);
        assert_eq!(g.data[5], 7);
    }

    #[test]
    fn contains_rejects_negative_and_overflow() {
        let g: Grid<u8> = Grid::square(2);
        assert!(g.contains(0, 0));
        assert!(g.contains(1, 1));
        assert!(!g.contains(-1, 0));
        assert!(!g.contains(0, 2));
    }

    #[test]
    fn rows_of_empty_grid() {
        let g: Grid<u64> = Grid::square(0);
        assert_eq!(g.rows().count(), 0);
    }

    #[test]
    fn rows_split_by_width() {
        let mut g: Grid<u64> = Grid::square(2);
        g.set(1, 0, 1);
        g.set(0, 1, 2);
        let rows: Vec<&[u64]> = g.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[2, 0][..]]);
    }
}
