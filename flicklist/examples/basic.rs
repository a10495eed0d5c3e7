use flicklist::{Layout, Point, Rect, RowMetrics, ScrollWindow};

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
    let model = Rows((0..1_000).map(|i| 16 + (i % 5) * 8).collect());
    let viewport = Rect::new(0, 0, 320, 240);
    let layout = Layout::new(&model, viewport, 4);

    let mut window = ScrollWindow::new(0, 0);
    println!("content = {:?}", layout.scrolled_area_size());

    // Drag the content up by 500px and see where the anchor lands.
    window.offset -= 500;
    layout.normalize(&mut window);
    println!("after 500px scroll: {window:?}");

    layout.for_each_visible_row(&window, |row, rect| {
        println!("  row {row:4} at {rect:?}");
    });

    println!(
        "row under (10, 100): {:?}",
        layout.row_at(&window, Point::new(10, 100))
    );

    // Jump to the end; normalize clamps to the fully-scrolled window.
    window.offset += layout.calculate_scroll(&window, 999, 0);
    layout.normalize(&mut window);
    println!("at the bottom: {window:?} (max_offset = {})", layout.max_offset());
}
