use flicklist::Rect;

/// Per-row drawing strategy, invoked once per visible row per paint.
///
/// `rect` is the row's full laid-out rectangle in viewport space; it may
/// extend past the viewport edges, and the painter decides how to clip.
/// `S` is whatever drawing handle the host toolkit paints with — the layout
/// side never inspects it.
pub trait RowPainter<S> {
    fn draw_row(&mut self, surface: &mut S, rect: Rect, row: usize);
}

impl<S, F> RowPainter<S> for F
where
    F: FnMut(&mut S, Rect, usize),
{
    fn draw_row(&mut self, surface: &mut S, rect: Rect, row: usize) {
        self(surface, rect, row)
    }
}
