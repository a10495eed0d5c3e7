use alloc::sync::Arc;
use core::cell::Cell;
use core::fmt;

use flicklist::{
    Layout, ModelEvent, Point, Rect, RowMetrics, ScrollHint, ScrollWindow, Size,
};

use crate::{ListViewOptions, RowPainter};

/// A serializable snapshot of a view's layout state, for persisting scroll
/// positions across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    pub window: ScrollWindow,
    pub viewport: Rect,
    pub spacing: i32,
}

/// A mobile-style virtualized list view, generic over its row model.
///
/// The view owns the [`ScrollWindow`] and drives the `flicklist` layout
/// engine; the host toolkit supplies everything else through discrete
/// events: scroll deltas ([`ListView::scroll_by`]), viewport changes
/// ([`ListView::set_viewport`]), model change notifications
/// ([`ListView::model_event`]), gesture taps, and paint requests
/// ([`ListView::paint`]). Refresh needs flow back out through the
/// `on_repaint`/`on_content_resize` hooks.
///
/// All operations are synchronous and meant to run on the host UI thread.
/// Hooks fire at most once per mutation; wrap several mutations in
/// [`ListView::batch_update`] to coalesce them into a single
/// repaint/resize notification.
pub struct ListView<M> {
    model: Option<Arc<M>>,
    window: ScrollWindow,
    viewport: Rect,
    spacing: i32,
    options: ListViewOptions,

    notify_depth: Cell<usize>,
    pending_repaint: Cell<bool>,
    pending_resize: Cell<bool>,
}

impl<M: RowMetrics> ListView<M> {
    pub fn new(options: ListViewOptions) -> Self {
        let spacing = options.spacing.max(0);
        let viewport = options.viewport;
        Self {
            model: None,
            window: ScrollWindow::empty(),
            viewport,
            spacing,
            options,
            notify_depth: Cell::new(0),
            pending_repaint: Cell::new(false),
            pending_resize: Cell::new(false),
        }
    }

    pub fn model(&self) -> Option<&Arc<M>> {
        self.model.as_ref()
    }

    /// Installs a new row model and anchors the first row when the model is
    /// non-empty.
    ///
    /// Change notifications are not wired automatically: subscribe this
    /// view's [`ListView::model_event`] to the model's notifier (and
    /// unsubscribe the previous model's handle) in the host glue.
    pub fn set_model(&mut self, model: Arc<M>) {
        self.window = if model.row_count() > 0 {
            ScrollWindow::new(0, 0)
        } else {
            ScrollWindow::empty()
        };
        self.model = Some(model);
        self.batch_update(|view| {
            view.request_resize();
            view.request_repaint();
        });
    }

    pub fn take_model(&mut self) -> Option<Arc<M>> {
        let model = self.model.take();
        self.window.reset();
        self.batch_update(|view| {
            view.request_resize();
            view.request_repaint();
        });
        model
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Sets the space around rows. Negative values clamp to 0; a change lays
    /// the rows out again (extent + repaint).
    pub fn set_spacing(&mut self, spacing: i32) {
        let spacing = spacing.max(0);
        if self.spacing == spacing {
            return;
        }
        self.spacing = spacing;
        self.renormalize();
        self.batch_update(|view| {
            view.request_resize();
            view.request_repaint();
        });
    }

    /// Adopts a new viewport rectangle (host resize).
    ///
    /// Recomputes the reported extent, and when the content now terminates
    /// above the viewport bottom, keeps the last row pinned to the bottom
    /// edge.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.batch_update(|view| {
            view.request_resize();
            view.request_repaint();
            view.pin_to_bottom_if_short();
        });
    }

    /// Applies a raw scroll delta to the window offset and re-anchors.
    ///
    /// Negative `dy` scrolls toward the end of the list (content moves up).
    /// Out-of-content deltas clamp at both ends; a repaint fires only when
    /// the window actually moved.
    pub fn scroll_by(&mut self, dy: i32) {
        let Some(model) = self.model.clone() else {
            return;
        };
        if self.window.is_empty() {
            return;
        }
        let layout = Layout::new(&*model, self.viewport, self.spacing);
        let before = self.window;
        self.window.offset += dy;
        layout.normalize(&mut self.window);
        if self.window != before {
            self.request_repaint();
        }
    }

    /// Scrolls so that `row` ends up where `hint` asks. Out-of-range rows
    /// are a no-op.
    pub fn scroll_to(&mut self, row: usize, hint: ScrollHint) {
        let Some(model) = self.model.clone() else {
            return;
        };
        let layout = Layout::new(&*model, self.viewport, self.spacing);
        let Some(delta) = layout.scroll_delta_for(&self.window, row, hint) else {
            return;
        };
        self.scroll_by(delta);
    }

    /// Feeds one model change notification through the mutation reconciler.
    ///
    /// The model must already be in its post-change state when this runs.
    pub fn model_event(&mut self, event: ModelEvent) {
        let Some(model) = self.model.clone() else {
            return;
        };
        let layout = Layout::new(&*model, self.viewport, self.spacing);
        let reaction = layout.reconcile(&mut self.window, event);
        if reaction.resize {
            self.request_resize();
        }
        if reaction.repaint {
            self.request_repaint();
        }
    }

    /// The rectangle `row` occupies on the viewport (clipped), or the empty
    /// rect when it is not visible.
    pub fn visual_rect(&self, row: usize) -> Rect {
        match &self.model {
            Some(model) => Layout::new(&**model, self.viewport, self.spacing)
                .visual_rect(&self.window, row),
            None => Rect::default(),
        }
    }

    /// The row under a viewport-space point, if any.
    pub fn row_at(&self, point: Point) -> Option<usize> {
        let model = self.model.as_ref()?;
        Layout::new(&**model, self.viewport, self.spacing).row_at(&self.window, point)
    }

    /// The size the host scroll-area chrome should report for the content.
    pub fn content_size(&self) -> Size {
        match &self.model {
            Some(model) => {
                Layout::new(&**model, self.viewport, self.spacing).scrolled_area_size()
            }
            None => Size::new(self.viewport.width, self.spacing),
        }
    }

    /// Walks the visible rows and hands each to `painter`. One forward
    /// pass, O(visible rows).
    pub fn paint<S>(&self, surface: &mut S, painter: &mut impl RowPainter<S>) {
        let Some(model) = &self.model else {
            return;
        };
        let layout = Layout::new(&**model, self.viewport, self.spacing);
        layout.for_each_visible_row(&self.window, |row, rect| {
            painter.draw_row(surface, rect, row);
        });
    }

    /// Gesture entry point: a tap at `point`. Hit-tests and emits the
    /// `row_touched` signal; returns the row that was hit, if any.
    pub fn touch(&self, point: Point) -> Option<usize> {
        let row = self.row_at(point)?;
        if let Some(hook) = &self.options.row_touched {
            hook(row);
        }
        Some(row)
    }

    /// Gesture entry point: a long press at `point`.
    pub fn long_touch(&self, point: Point) -> Option<usize> {
        let row = self.row_at(point)?;
        if let Some(hook) = &self.options.row_long_touched {
            hook(row);
        }
        Some(row)
    }

    /// Gesture entry point: a double tap at `point`.
    pub fn double_touch(&self, point: Point) -> Option<usize> {
        let row = self.row_at(point)?;
        if let Some(hook) = &self.options.row_double_touched {
            hook(row);
        }
        Some(row)
    }

    pub fn set_on_repaint(&mut self, f: Option<impl Fn() + Send + Sync + 'static>) {
        self.options.on_repaint = f.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_content_resize(&mut self, f: Option<impl Fn(Size) + Send + Sync + 'static>) {
        self.options.on_content_resize = f.map(|f| Arc::new(f) as _);
    }

    pub fn set_row_touched(&mut self, f: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.options.row_touched = f.map(|f| Arc::new(f) as _);
    }

    pub fn set_row_long_touched(&mut self, f: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.options.row_long_touched = f.map(|f| Arc::new(f) as _);
    }

    pub fn set_row_double_touched(&mut self, f: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.options.row_double_touched = f.map(|f| Arc::new(f) as _);
    }

    /// Captures the layout state for persistence.
    pub fn state(&self) -> ViewState {
        ViewState {
            window: self.window,
            viewport: self.viewport,
            spacing: self.spacing,
        }
    }

    /// Restores a previously captured state. The window is re-normalized
    /// against the current model, so a stale anchor lands somewhere valid.
    pub fn restore_state(&mut self, state: ViewState) {
        self.spacing = state.spacing.max(0);
        self.viewport = state.viewport;
        self.window = state.window;
        self.renormalize();
        self.batch_update(|view| {
            view.request_resize();
            view.request_repaint();
        });
    }

    /// Runs several mutations with repaint/resize notifications coalesced:
    /// the hooks fire at most once each when the outermost batch ends.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 {
            if self.pending_resize.replace(false) {
                self.notify_resize();
            }
            if self.pending_repaint.replace(false) {
                self.notify_repaint();
            }
        }
    }

    fn renormalize(&mut self) {
        let Some(model) = self.model.clone() else {
            self.window.reset();
            return;
        };
        Layout::new(&*model, self.viewport, self.spacing).normalize(&mut self.window);
    }

    /// After a resize: when the content ends above the viewport bottom,
    /// scroll so the last row hugs the bottom edge again.
    fn pin_to_bottom_if_short(&mut self) {
        let Some(model) = self.model.clone() else {
            return;
        };
        let count = model.row_count();
        if count == 0 || self.window.is_empty() {
            return;
        }
        let layout = Layout::new(&*model, self.viewport, self.spacing);
        let content = layout.scrolled_area_size();
        if content.height - layout.scroll_top(&self.window) <= self.viewport.height {
            self.scroll_to(count - 1, ScrollHint::PositionAtBottom);
        }
    }

    fn request_repaint(&self) {
        if self.notify_depth.get() > 0 {
            self.pending_repaint.set(true);
            return;
        }
        self.notify_repaint();
    }

    fn request_resize(&self) {
        if self.notify_depth.get() > 0 {
            self.pending_resize.set(true);
            return;
        }
        self.notify_resize();
    }

    fn notify_repaint(&self) {
        if let Some(hook) = &self.options.on_repaint {
            hook();
        }
    }

    fn notify_resize(&self) {
        if let Some(hook) = &self.options.on_content_resize {
            hook(self.content_size());
        }
    }
}

impl<M> fmt::Debug for ListView<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("has_model", &self.model.is_some())
            .field("window", &self.window)
            .field("viewport", &self.viewport)
            .field("spacing", &self.spacing)
            .finish_non_exhaustive()
    }
}
