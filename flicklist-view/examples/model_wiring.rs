//! Observer wiring between a mutable model and a view: the model owns a
//! `ModelNotifier`, the glue subscribes the view's `model_event`, and a model
//! swap unsubscribes the old handle before installing the new model.

use std::sync::{Arc, Mutex};

use flicklist::{ModelNotifier, Rect, RowMetrics};
use flicklist_view::{ListView, ListViewOptions};

struct Feed {
    rows: Mutex<Vec<i32>>,
    notifier: Mutex<ModelNotifier>,
}

impl Feed {
    fn new(rows: Vec<i32>) -> Self {
        Self {
            rows: Mutex::new(rows),
            notifier: Mutex::new(ModelNotifier::new()),
        }
    }

    fn push(&self, height: i32) {
        let last = {
            let mut rows = self.rows.lock().unwrap();
            rows.push(height);
            rows.len() - 1
        };
        self.notifier.lock().unwrap().rows_inserted(last, last);
    }

    fn remove_first(&self) {
        self.rows.lock().unwrap().remove(0);
        self.notifier.lock().unwrap().rows_removed(0, 0);
    }
}

impl RowMetrics for Feed {
    fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn height_for_width(&self, row: usize, _width: i32) -> i32 {
        self.rows.lock().unwrap()[row]
    }
}

fn wire(view: &Arc<Mutex<ListView<Feed>>>, feed: &Arc<Feed>) -> flicklist::SubscriptionId {
    let sink = Arc::clone(view);
    feed.notifier
        .lock()
        .unwrap()
        .subscribe(move |event| sink.lock().unwrap().model_event(event))
}

fn main() {
    let options = ListViewOptions::new()
        .with_spacing(2)
        .with_viewport(Rect::new(0, 0, 160, 90))
        .with_on_content_resize(Some(|size| println!("[chrome] content -> {size:?}")));

    let view = Arc::new(Mutex::new(ListView::new(options)));

    let feed = Arc::new(Feed::new(vec![20, 20, 20]));
    view.lock().unwrap().set_model(Arc::clone(&feed));
    let subscription = wire(&view, &feed);

    feed.push(40);
    feed.remove_first();
    println!("window after mutations: {:?}", view.lock().unwrap().window());

    // Swap in a different feed: detach the old handlers first so the stale
    // model stops driving the view.
    feed.notifier.lock().unwrap().unsubscribe(subscription);
    let other = Arc::new(Feed::new(vec![30; 10]));
    view.lock().unwrap().set_model(Arc::clone(&other));
    let _subscription = wire(&view, &other);

    other.push(30);
    // The detached feed no longer reaches the view.
    feed.push(99);
    println!("window after swap: {:?}", view.lock().unwrap().window());
}
