//! Mapping presentation-layer points to board cells.
//!
//! The engine knows nothing about windows or terminals. A front end hands
//! [`Game::attempt_move`](crate::Game::attempt_move) a point in its own
//! coordinate system together with a resolver for that system.

use tracing::trace;

/// Maps a point to `(row, col)`.
///
/// Return `None` when the point lies outside the drawable board. A resolver
/// may return coordinates outside `0..3`; the engine rejects those as out of
/// range.
pub trait CellResolver<P> {
    /// Resolves a point to a cell.
    fn resolve(&self, point: P) -> Option<(usize, usize)>;
}

impl<P, F> CellResolver<P> for F
where
    F: Fn(P) -> Option<(usize, usize)>,
{
    fn resolve(&self, point: P) -> Option<(usize, usize)> {
        self(point)
    }
}

/// Fixed linear mapping: a rectangle split into three equal bands per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandResolver {
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
}

impl BandResolver {
    /// Side length of the stock square window, in pixels.
    pub const DEFAULT_SIZE: f64 = 900.0;

    /// A `width` by `height` region anchored at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width,
            height,
        }
    }

    /// Moves the region's top-left corner.
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    fn band(offset: f64, extent: f64) -> Option<usize> {
        if extent <= 0.0 || !(0.0..extent).contains(&offset) {
            return None;
        }
        Some(((offset * 3.0 / extent) as usize).min(2))
    }
}

impl Default for BandResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)
    }
}

/// `(x, y)` with x growing rightwards and y growing downwards.
impl CellResolver<(f64, f64)> for BandResolver {
    fn resolve(&self, (x, y): (f64, f64)) -> Option<(usize, usize)> {
        let col = Self::band(x - self.origin_x, self.width)?;
        let row = Self::band(y - self.origin_y, self.height)?;
        trace!(x, y, row, col, "Resolved point");
        Some((row, col))
    }
}

/// Terminal cells, `(column, row)` as reported by mouse events.
impl CellResolver<(u16, u16)> for BandResolver {
    fn resolve(&self, (x, y): (u16, u16)) -> Option<(usize, usize)> {
        self.resolve((f64::from(x), f64::from(y)))
    }
}
