//! Pull-to-refresh containers.
//!
//! This module provides the core [`RefreshLayout`] container and the
//! capabilities its edges build on:
//! - [`RefreshLayout`] - the container coordinating header, content and footer
//! - [`Refreshable`] - the capability of an edge to react to refresh gestures
//! - [`ViewRefreshable`] - an adapter that turns any sized element into an edge
//! - [`RefreshSignal`] - a one-shot handle that finishes a refresh cycle
//!
//! # Example
//! ```ignore
//! use refresh_ui_widget::refresh::RefreshLayout;
//! use refresh_ui_core::Axis;
//!
//! let mut layout = RefreshLayout::new(Axis::Vertical)
//!     .header(spinner)
//!     .content(list)
//!     .on_refresh(reload_listener);
//! ```

mod layout;
mod refreshable;
mod signal;


pub use layout::{
    NestedScrollParent, OnRefresh, RefreshLayout, Role, SavedState, Side, State,
    DRAG_DAMPING, SETTLE_DURATION,
};
pub use refreshable::{RefreshView, Refreshable, ViewRefreshable};
pub use signal::RefreshSignal;
