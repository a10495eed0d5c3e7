use alloc::boxed::Box;
use alloc::sync::Arc;

/// The row-height oracle a list model must implement.
///
/// The engine queries heights on demand and caches nothing: a row may be
/// measured several times within a single layout pass, so implementations
/// that compute heights lazily (text shaping, image decoding) should cache
/// on their side if the cost matters.
///
/// `height_for_width` is always called with the usable row width, i.e. the
/// viewport width minus the spacing on both sides. The returned height is
/// trusted as-is — the engine performs no clamping, even for zero or
/// negative values, and has no error channel; report a sentinel (e.g. `0`)
/// when a height cannot be produced.
pub trait RowMetrics {
    fn row_count(&self) -> usize;

    fn height_for_width(&self, row: usize, width: i32) -> i32;
}

impl<M: RowMetrics + ?Sized> RowMetrics for &M {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn height_for_width(&self, row: usize, width: i32) -> i32 {
        (**self).height_for_width(row, width)
    }
}

impl<M: RowMetrics + ?Sized> RowMetrics for &mut M {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn height_for_width(&self, row: usize, width: i32) -> i32 {
        (**self).height_for_width(row, width)
    }
}

impl<M: RowMetrics + ?Sized> RowMetrics for Box<M> {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn height_for_width(&self, row: usize, width: i32) -> i32 {
        (**self).height_for_width(row, width)
    }
}

impl<M: RowMetrics + ?Sized> RowMetrics for Arc<M> {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn height_for_width(&self, row: usize, width: i32) -> i32 {
        (**self).height_for_width(row, width)
    }
}
