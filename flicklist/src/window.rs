/// The minimal scroll state of a virtualized list: which row anchors the top
/// of the viewport, and how far above the viewport top that row's own top
/// sits.
///
/// `anchor == None` means no rows are laid out (empty model, or layout has
/// not run yet); `offset` is meaningless then and kept at 0. A normalized
/// window keeps `offset` in `(-(height(anchor) + spacing), 0]` — the anchor
/// is always the row actually intersecting the viewport top edge.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`
/// so adapters can persist scroll positions across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollWindow {
    pub anchor: Option<usize>,
    pub offset: i32,
}

impl ScrollWindow {
    /// The window of a freshly constructed (or reset) view: nothing laid out.
    pub const fn empty() -> Self {
        Self {
            anchor: None,
            offset: 0,
        }
    }

    pub const fn new(anchor: usize, offset: i32) -> Self {
        Self {
            anchor: Some(anchor),
            offset,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.anchor.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}
