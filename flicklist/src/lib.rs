//! A headless virtualized row-layout engine for mobile-style list views.
//!
//! For the widget-facing shell (model swapping, scroll hints, gesture
//! signals, painting), see the `flicklist-view` crate.
//!
//! This crate focuses on the core math of an anchored, variable-row-height
//! list: converting between row/offset space and pixel scroll space,
//! re-anchoring after arbitrary scroll deltas, and keeping the visible
//! window valid while the model mutates underneath it. There is no per-row
//! pixel cache — every conversion is a bounded walk against a caller-owned
//! [`RowMetrics`] oracle.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - the viewport rectangle and inter-row spacing
//! - scroll deltas (wheel/drag) and model change notifications
//! - row heights on demand via [`RowMetrics`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod layout;
mod metrics;
mod notifier;
mod reconcile;
mod types;
mod window;


pub use layout::Layout;
pub use metrics::RowMetrics;
pub use notifier::{ModelEventHandler, ModelNotifier, SubscriptionId};
pub use reconcile::Reaction;
pub use types::{ModelEvent, Point, Rect, ScrollHint, Size};
pub use window::ScrollWindow;
