use crate::{Layout, ModelEvent, RowMetrics, ScrollWindow};

/// What the owner of a [`ScrollWindow`] should refresh after reconciling a
/// model event: `resize` means the total content extent must be recomputed
/// and re-reported to the host scroll chrome, `repaint` means the changed
/// range touched visible rows (or the whole view must redraw).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reaction {
    pub repaint: bool,
    pub resize: bool,
}

impl Reaction {
    pub const fn any(&self) -> bool {
        self.repaint || self.resize
    }
}

impl<M: RowMetrics + ?Sized> Layout<'_, M> {
    /// Adjusts `window` for a model change so it stays valid and visually
    /// stable, and reports what needs refreshing.
    ///
    /// Structural changes favor keeping *some* valid anchor over preserving
    /// the exact pixel position: whenever the anchor row's identity becomes
    /// ambiguous (it was removed, or took part in a move), the sub-row
    /// offset is discarded. The oracle must already reflect the mutated
    /// model when this runs.
    pub fn reconcile(&self, window: &mut ScrollWindow, event: ModelEvent) -> Reaction {
        fldebug!(?event, anchor = ?window.anchor, offset = window.offset, "reconcile");
        match event {
            ModelEvent::Reset => {
                window.reset();
                Reaction {
                    repaint: true,
                    resize: true,
                }
            }

            ModelEvent::RowsInserted { first, last } => {
                if window.is_empty() && self.row_count() > 0 {
                    window.anchor = Some(0);
                    window.offset = 0;
                }
                Reaction {
                    repaint: self.any_row_visible(window, first, last),
                    resize: true,
                }
            }

            ModelEvent::RowsRemoved { first, last } => {
                let count = self.row_count();
                let before = *window;
                if let Some(anchor) = window.anchor {
                    if count == 0 {
                        window.reset();
                    } else if anchor >= first && anchor <= last {
                        // The anchor itself went away: fall back to the row
                        // just above the removed range, or the one just below
                        // it when the range started at the top.
                        let next = if first > 0 { first - 1 } else { last + 1 };
                        window.anchor = Some(next.min(count - 1));
                        window.offset = 0;
                    } else if anchor >= count {
                        // Rows removed above/below shifted the end of the
                        // model past the anchor.
                        flwarn!(anchor, count, "reconcile: anchor past the end after removal");
                        window.anchor = Some(count - 1);
                        window.offset = 0;
                    }
                }
                // A re-anchored window always repaints: the rows under the
                // viewport are different even when the removed range itself
                // no longer probes as visible.
                Reaction {
                    repaint: *window != before || self.any_row_visible(window, first, last),
                    resize: true,
                }
            }

            ModelEvent::RowsMoved {
                source_first,
                source_last,
                destination,
            } => {
                let span = source_last.saturating_sub(source_first);
                if let Some(anchor) = window.anchor {
                    let in_source = anchor >= source_first && anchor <= source_last;
                    let in_destination = anchor >= destination && anchor <= destination + span;
                    if in_source || in_destination {
                        // A reorder makes the sub-row pixel offset
                        // meaningless for the anchor.
                        window.offset = 0;
                    }
                }
                // The destination probe only runs when the source range did
                // not already demand a repaint.
                let repaint = self.any_row_visible(window, source_first, source_last)
                    || self.any_row_visible(window, destination, destination + span);
                Reaction {
                    repaint,
                    resize: false,
                }
            }

            ModelEvent::DataChanged { first, last } => Reaction {
                repaint: self.any_row_visible(window, first, last),
                resize: false,
            },
        }
    }

    fn row_count(&self) -> usize {
        self.metrics().row_count()
    }
}
