use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::ModelEvent;

/// A handler registered with a [`ModelNotifier`].
pub type ModelEventHandler = Arc<dyn Fn(ModelEvent) + Send + Sync>;

/// Handle returned by [`ModelNotifier::subscribe`]; pass it back to
/// [`ModelNotifier::unsubscribe`] to detach the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Typed change-notification fan-out for row models.
///
/// The engine itself only consumes [`ModelEvent`]s; this helper is for the
/// *model* side of the contract. A model implementation embeds a
/// `ModelNotifier`, calls the emit methods after each mutation, and views
/// subscribe/unsubscribe across model swaps — plain observer wiring, no
/// runtime machinery.
///
/// Handlers run synchronously, in subscription order, on the emitting
/// thread. Emitting from inside a handler is not supported.
#[derive(Default)]
pub struct ModelNotifier {
    handlers: Vec<(SubscriptionId, ModelEventHandler)>,
    next_id: u64,
}

impl ModelNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        handler: impl Fn(ModelEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers.push((id, Arc::new(handler)));
        id
    }

    /// Detaches a previously registered handler. Returns `false` when the
    /// id was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sid, _)| *sid != id);
        self.handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn emit(&self, event: ModelEvent) {
        fltrace!(?event, handlers = self.handlers.len(), "emit");
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    pub fn data_changed(&self, first: usize, last: usize) {
        self.emit(ModelEvent::DataChanged { first, last });
    }

    pub fn reset(&self) {
        self.emit(ModelEvent::Reset);
    }

    pub fn rows_inserted(&self, first: usize, last: usize) {
        self.emit(ModelEvent::RowsInserted { first, last });
    }

    pub fn rows_removed(&self, first: usize, last: usize) {
        self.emit(ModelEvent::RowsRemoved { first, last });
    }

    pub fn rows_moved(&self, source_first: usize, source_last: usize, destination: usize) {
        self.emit(ModelEvent::RowsMoved {
            source_first,
            source_last,
            destination,
        });
    }
}

impl fmt::Debug for ModelNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelNotifier")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
