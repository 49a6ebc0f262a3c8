//! The built-in widgets for refresh_ui.
//!
//! The crate revolves around [`refresh::RefreshLayout`], a container that
//! turns drag gestures on its content into refresh cycles, and ships the
//! indicator elements that visualize those cycles.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use refresh_ui_core as core;

pub mod indicator;
pub mod refresh;

pub use indicator::{AnimationRefreshView, Composition, TextRefreshView};
pub use refresh::{
    OnRefresh, RefreshLayout, RefreshSignal, RefreshView, Refreshable,
    ViewRefreshable,
};
