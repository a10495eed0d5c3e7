use flicklist::{Layout, ModelEvent, Rect, RowMetrics, ScrollWindow};

struct Rows(Vec<i32>);

impl RowMetrics for Rows {
    fn row_count(&self) -> usize {
        self.0.len()
    }

    fn height_for_width(&self, row: usize, _width: i32) -> i32 {
        self.0[row]
    }
}

fn main() {
    let viewport = Rect::new(0, 0, 320, 120);
    let mut model = Rows(vec![30, 40, 50, 30, 40, 50]);
    let mut window = ScrollWindow::new(1, -10);

    // Remove the two rows at the top; the anchor was row 1, so it falls to
    // the row just below the removed range and the sub-row offset is gone.
    model.0.drain(0..2);
    let layout = Layout::new(&model, viewport, 2);
    let reaction = layout.reconcile(&mut window, ModelEvent::RowsRemoved { first: 0, last: 1 });
    println!("after removal: {window:?}, {reaction:?}");

    // Append rows below the viewport: extent changes, nothing repaints.
    model.0.extend([25, 25]);
    let layout = Layout::new(&model, viewport, 2);
    let reaction = layout.reconcile(
        &mut window,
        ModelEvent::RowsInserted { first: 4, last: 5 },
    );
    println!("after append: {window:?}, {reaction:?}");
    println!("content = {:?}", layout.scrolled_area_size());

    // A full reset forgets the layout entirely.
    model.0.clear();
    let layout = Layout::new(&model, viewport, 2);
    layout.reconcile(&mut window, ModelEvent::Reset);
    println!("after reset: {window:?}");
}
