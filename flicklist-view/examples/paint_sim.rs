use std::sync::Arc;

use flicklist::{Point, Rect, RowMetrics, ScrollHint};
use flicklist_view::{ListView, ListViewOptions};

struct Log(Vec<&'static str>);

impl RowMetrics for Log {
    fn row_count(&self) -> usize {
        self.0.len()
    }

    fn height_for_width(&self, row: usize, _width: i32) -> i32 {
        // Pretend long lines wrap onto a second line.
        if self.0[row].len() > 24 { 28 } else { 14 }
    }
}

fn main() {
    let model = Arc::new(Log(vec![
        "boot: ok",
        "net: carrier acquired on wlan0 after two retries",
        "disk: scrub scheduled",
        "ui: theme reloaded",
        "sync: 1,204 items fetched from three remotes",
        "idle",
    ]));

    let mut view = ListView::new(
        ListViewOptions::new()
            .with_spacing(2)
            .with_viewport(Rect::new(0, 0, 240, 72))
            .with_on_content_resize(Some(|size| println!("[chrome] content -> {size:?}")))
            .with_on_repaint(Some(|| println!("[chrome] repaint")))
            .with_row_touched(Some(|row| println!("[signal] row {row} touched"))),
    );
    view.set_model(Arc::clone(&model));

    let mut frame = String::new();
    let mut painter = |frame: &mut String, rect: Rect, row: usize| {
        frame.push_str(&format!("{:>3} y={:<4} {}\n", row, rect.y, model.0[row]));
    };

    view.paint(&mut frame, &mut painter);
    print!("{frame}");

    println!("-- scroll to the end --");
    view.scroll_to(5, ScrollHint::PositionAtBottom);

    frame.clear();
    view.paint(&mut frame, &mut painter);
    print!("{frame}");

    view.touch(Point::new(10, 10));
}
