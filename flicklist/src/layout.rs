use alloc::vec::Vec;

use crate::{Point, Rect, RowMetrics, ScrollHint, ScrollWindow, Size};

/// The virtualized row-layout engine.
///
/// `Layout` borrows the row-height oracle together with the viewport
/// geometry and spacing for the duration of one pass; every operation is a
/// pure function of those plus a [`ScrollWindow`]. Nothing is cached between
/// calls — conversions between row/offset space and pixel space are bounded
/// walks that query the oracle as they go.
///
/// Row tops include the leading spacing: the anchor row's top sits at
/// `viewport.y + offset + spacing`, and each subsequent row advances by
/// `height + spacing`. `visual_rect`, `row_at`, and the paint walk all share
/// this convention.
pub struct Layout<'a, M: ?Sized> {
    metrics: &'a M,
    viewport: Rect,
    spacing: i32,
}

impl<'a, M: RowMetrics + ?Sized> Layout<'a, M> {
    pub fn new(metrics: &'a M, viewport: Rect, spacing: i32) -> Self {
        Self {
            metrics,
            viewport,
            spacing,
        }
    }

    pub fn metrics(&self) -> &'a M {
        self.metrics
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// The usable row width: viewport width minus spacing on both sides.
    ///
    /// May be zero or negative for very narrow viewports; the value is
    /// passed to the oracle untouched.
    pub fn row_width(&self) -> i32 {
        self.viewport.width - self.spacing * 2
    }

    fn height(&self, row: usize) -> i32 {
        self.metrics.height_for_width(row, self.row_width())
    }

    /// The vertical distance one row occupies, gap included.
    fn step(&self, row: usize) -> i32 {
        self.height(row) + self.spacing
    }

    /// The rectangle `row` occupies on the viewport, clipped to the viewport,
    /// or the empty rect when the row is out of range, precedes the anchor,
    /// or lies past the viewport bottom.
    ///
    /// The walk starts at the anchor and stops as soon as the running top
    /// edge leaves the viewport, so the cost is bounded by the visible
    /// window, not the model size. Rows before the anchor are defined as not
    /// visible; callers that need them must scroll first.
    pub fn visual_rect(&self, window: &ScrollWindow, row: usize) -> Rect {
        let Some(first) = window.anchor else {
            return Rect::default();
        };
        if row < first || row >= self.metrics.row_count() {
            return Rect::default();
        }

        let r = self.viewport;
        let width = self.row_width();
        let x = r.x + self.spacing;
        let mut y = r.y + window.offset + self.spacing;
        let mut height = self.metrics.height_for_width(first, width);

        let mut tmp = first;
        while tmp < row {
            y += height + self.spacing;
            if y > r.bottom() {
                return Rect::default();
            }
            tmp += 1;
            height = self.metrics.height_for_width(tmp, width);
        }

        r.intersect(Rect::new(x, y, width, height))
    }

    /// Hit-tests a viewport-space point to a row index.
    ///
    /// Points outside the horizontal row band, in the spacing strip between
    /// two rows, or past the laid-out content report `None`. The walk runs
    /// forward or backward from the anchor depending on where the point lies
    /// relative to the anchor's top edge.
    pub fn row_at(&self, window: &ScrollWindow, point: Point) -> Option<usize> {
        let Some(first) = window.anchor else {
            return None;
        };
        let count = self.metrics.row_count();
        if first >= count {
            return None;
        }
        let r = self.viewport;
        let width = self.row_width();
        let x = r.x + self.spacing;
        if point.x < x || point.x > x + width {
            return None;
        }

        let mut y = r.y + window.offset + self.spacing;
        if point.y >= y {
            let mut row = first;
            while row < count {
                if point.y < y {
                    // Landed in the gap before this row.
                    return None;
                }
                let height = self.metrics.height_for_width(row, width);
                if point.y < y + height {
                    return Some(row);
                }
                y += height + self.spacing;
                if y > r.bottom() {
                    return None;
                }
                row += 1;
            }
            None
        } else {
            let mut row = first;
            while row > 0 {
                row -= 1;
                let height = self.metrics.height_for_width(row, width);
                y -= height + self.spacing;
                if point.y >= y + height {
                    // Gap between this row and the one below it.
                    return None;
                }
                if point.y >= y {
                    return Some(row);
                }
            }
            None
        }
    }

    /// The `(anchor, offset)` pair of the fully-scrolled position: the last
    /// row's bottom edge flush with the viewport bottom (the trailing
    /// spacing strip may stay hidden).
    ///
    /// When the content does not overfill the viewport this is
    /// `(row 0, offset 0)` — a short list cannot scroll at all. For an empty
    /// model the window is empty.
    pub fn bottom_window(&self) -> ScrollWindow {
        let count = self.metrics.row_count();
        if count == 0 {
            return ScrollWindow::empty();
        }

        let r = self.viewport;
        let width = self.row_width();
        let mut acc = 0i32;
        let mut row = count;
        while row > 0 && acc < r.height {
            row -= 1;
            acc += self.metrics.height_for_width(row, width) + self.spacing;
        }

        if acc >= r.height {
            ScrollWindow::new(row, r.height - acc)
        } else {
            ScrollWindow::new(0, 0)
        }
    }

    /// The most negative offset [`Layout::normalize`] will allow, i.e. the
    /// offset component of [`Layout::bottom_window`]. Zero when the content
    /// is shorter than the viewport.
    pub fn max_offset(&self) -> i32 {
        self.bottom_window().offset
    }

    /// True iff there is more content below the current viewport-full of
    /// rows starting at `row` — walking forward from `row` for one viewport
    /// height leaves rows unconsumed.
    pub fn can_scroll_down(&self, row: usize) -> bool {
        let count = self.metrics.row_count();
        if row >= count {
            return false;
        }

        let r = self.viewport;
        let width = self.row_width();
        let mut y = r.y + self.spacing;
        let mut row = row;
        while y < r.bottom() && row < count {
            y += self.metrics.height_for_width(row, width) + self.spacing;
            row += 1;
        }
        row < count
    }

    /// The delta to add to the current offset (via the caller's scroll
    /// application) so that `row`'s top lands `expected_offset` pixels below
    /// the anchor's normalized top position.
    ///
    /// All scroll hints reduce to this: they differ only in the
    /// `expected_offset` they request. Returns 0 for an empty window.
    pub fn calculate_scroll(&self, window: &ScrollWindow, row: usize, expected_offset: i32) -> i32 {
        let Some(first) = window.anchor else {
            return 0;
        };
        if row >= self.metrics.row_count() {
            return 0;
        }

        let mut delta = expected_offset - window.offset;
        if row < first {
            for tmp in row..first {
                delta += self.step(tmp);
            }
        } else {
            for tmp in first..row {
                delta -= self.step(tmp);
            }
        }
        delta
    }

    /// The scroll delta that realizes a [`ScrollHint`] for `row`, or `None`
    /// when nothing should happen — the row is out of range, the window is
    /// empty, or an `EnsureVisible` row is already on screen.
    ///
    /// Each hint just picks the `expected_offset` handed to
    /// [`Self::calculate_scroll`]: top of the viewport, bottom-flush,
    /// vertically centered, or top when not yet visible.
    pub fn scroll_delta_for(
        &self,
        window: &ScrollWindow,
        row: usize,
        hint: ScrollHint,
    ) -> Option<i32> {
        if window.anchor.is_none() || row >= self.metrics.row_count() {
            return None;
        }
        let expected = match hint {
            ScrollHint::EnsureVisible => {
                if !self.visual_rect(window, row).is_empty() {
                    return None;
                }
                0
            }
            ScrollHint::PositionAtTop => 0,
            ScrollHint::PositionAtBottom => {
                self.viewport.height - self.height(row) - self.spacing
            }
            ScrollHint::PositionAtCenter => {
                (self.viewport.height - self.height(row)) / 2 - self.spacing
            }
        };
        Some(self.calculate_scroll(window, row, expected))
    }

    /// Re-anchors `window` after an arbitrary scroll delta so the anchor is
    /// again the row intersecting the viewport top, with
    /// `offset ∈ (-(height(anchor) + spacing), 0]`.
    ///
    /// Both ends clamp explicitly: scrolling past the content start lands on
    /// `(row 0, offset 0)`; scrolling past the content end snaps to
    /// [`Layout::bottom_window`]. Applying this to an already-normalized
    /// window is a no-op.
    pub fn normalize(&self, window: &mut ScrollWindow) {
        let count = self.metrics.row_count();
        let Some(mut row) = window.anchor else {
            window.offset = 0;
            return;
        };
        if count == 0 {
            window.reset();
            return;
        }
        if row >= count {
            row = count - 1;
            window.offset = 0;
        }

        let mut offset = window.offset;
        if offset > 0 {
            while offset > 0 && row > 0 {
                row -= 1;
                offset -= self.step(row);
            }
            if offset > 0 {
                offset = 0;
            }
        } else if offset < 0 {
            while row + 1 < count {
                let step = self.step(row);
                if -offset < step {
                    break;
                }
                offset += step;
                row += 1;
            }

            if !self.can_scroll_down(row) {
                let bottom = self.bottom_window();
                if let Some(bottom_row) = bottom.anchor {
                    if row > bottom_row || (row == bottom_row && offset < bottom.offset) {
                        fltrace!(
                            row,
                            offset,
                            bottom_row,
                            bottom_offset = bottom.offset,
                            "normalize: clamped to bottom window"
                        );
                        row = bottom_row;
                        offset = bottom.offset;
                    }
                }
            }
        }

        window.anchor = Some(row);
        window.offset = offset;
    }

    /// Total content extent: the size the host scroll-area chrome should
    /// report. Width is the viewport width; height sums every row plus the
    /// spacing before and after each. O(row count).
    pub fn scrolled_area_size(&self) -> Size {
        let row_width = self.row_width();
        let mut height = self.spacing;
        for row in 0..self.metrics.row_count() {
            height = height.saturating_add(self.metrics.height_for_width(row, row_width))
                .saturating_add(self.spacing);
        }
        Size::new(self.viewport.width, height)
    }

    /// How far the viewport top sits below the content start for `window`.
    /// Zero for an empty window.
    pub fn scroll_top(&self, window: &ScrollWindow) -> i32 {
        let Some(anchor) = window.anchor else {
            return 0;
        };
        let width = self.row_width();
        let mut top = 0i32;
        for row in 0..anchor.min(self.metrics.row_count()) {
            top = top
                .saturating_add(self.metrics.height_for_width(row, width))
                .saturating_add(self.spacing);
        }
        top - window.offset
    }

    /// The paint-time walk: emits `(row, rect)` for every row intersecting
    /// the viewport, in order, starting at the anchor.
    ///
    /// Rects are the rows' full laid-out rectangles, not clipped to the
    /// viewport — the renderer decides how to clip. A single forward pass,
    /// O(visible rows), independent of the model size.
    pub fn for_each_visible_row(&self, window: &ScrollWindow, mut f: impl FnMut(usize, Rect)) {
        let Some(first) = window.anchor else {
            return;
        };
        let count = self.metrics.row_count();
        let r = self.viewport;
        let width = self.row_width();
        let x = r.x + self.spacing;
        let mut y = r.y + window.offset + self.spacing;

        let mut row = first;
        while y < r.bottom() && row < count {
            let height = self.metrics.height_for_width(row, width);
            f(row, Rect::new(x, y, width, height));
            y += height + self.spacing;
            row += 1;
        }
    }

    /// Collects the visible rows into `out` (clears `out` first).
    ///
    /// Convenience wrapper over [`Self::for_each_visible_row`]; adapters on
    /// a hot paint path should prefer the callback form and reuse a scratch
    /// buffer.
    pub fn collect_visible_rows(&self, window: &ScrollWindow, out: &mut Vec<(usize, Rect)>) {
        out.clear();
        self.for_each_visible_row(window, |row, rect| out.push((row, rect)));
    }

    /// True iff any row in the inclusive range `[first, last]` currently
    /// intersects the viewport. The repaint probe used by the mutation
    /// reconciler.
    pub fn any_row_visible(&self, window: &ScrollWindow, first: usize, last: usize) -> bool {
        let count = self.metrics.row_count();
        if count == 0 || window.anchor.is_none() {
            return false;
        }
        let last = last.min(count - 1);
        for row in first..=last {
            if !self.visual_rect(window, row).is_empty() {
                return true;
            }
        }
        false
    }
}
