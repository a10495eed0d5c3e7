use alloc::sync::Arc;
use core::fmt;

use flicklist::{Rect, Size};

/// Fired when the view needs the host to schedule a repaint.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Fired when the total content extent changed; the argument is the size the
/// host scroll-area chrome should adopt.
pub type ContentResizeHook = Arc<dyn Fn(Size) + Send + Sync>;

/// Fired with the touched row index by the gesture entry points.
pub type RowSignalHook = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::ListView`].
///
/// Cheap to clone: hooks are stored in `Arc`s. `spacing` and `viewport` seed
/// the view's initial state; both are mutable on the view afterwards.
#[derive(Clone, Default)]
pub struct ListViewOptions {
    /// Empty space around every row, vertically and horizontally. Negative
    /// values are clamped to 0 by the view.
    pub spacing: i32,
    pub viewport: Rect,
    pub on_repaint: Option<RepaintHook>,
    pub on_content_resize: Option<ContentResizeHook>,
    pub row_touched: Option<RowSignalHook>,
    pub row_long_touched: Option<RowSignalHook>,
    pub row_double_touched: Option<RowSignalHook>,
}

impl ListViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_on_repaint(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_repaint = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_content_resize(
        mut self,
        f: Option<impl Fn(Size) + Send + Sync + 'static>,
    ) -> Self {
        self.on_content_resize = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_row_touched(mut self, f: Option<impl Fn(usize) + Send + Sync + 'static>) -> Self {
        self.row_touched = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_row_long_touched(
        mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.row_long_touched = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_row_double_touched(
        mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.row_double_touched = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl fmt::Debug for ListViewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListViewOptions")
            .field("spacing", &self.spacing)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
