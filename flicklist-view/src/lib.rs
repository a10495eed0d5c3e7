//! Widget-facing shell for the `flicklist` layout engine.
//!
//! The `flicklist` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the list-view object a host toolkit embeds:
//!
//! - [`ListView`]: model swapping, spacing, scroll hints, hit testing,
//!   resize handling with pin-to-bottom, gesture signals, and coalesced
//!   repaint/resize notification
//! - [`RowPainter`]: the injected per-row drawing strategy
//!
//! It stays framework-agnostic: painting goes through a caller-chosen
//! surface type, and refresh requests come back as plain callbacks.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod options;
mod painter;
mod view;


pub use options::{
    ContentResizeHook, ListViewOptions, RepaintHook, RowSignalHook,
};
pub use painter::RowPainter;
pub use view::{ListView, ViewState};
