//! refresh_ui is a pull-to-refresh widget library.
//!
//! A [`RefreshLayout`] wraps a scrollable content element together with an
//! optional header and footer. When a drag would move the content past its
//! edge, the container takes over: the overshoot becomes a damped content
//! offset, the edge element receives progress feedback, and releasing the
//! drag past the activation distance starts a refresh.
//!
//! # Overview
//! Build a container, hand it a header, and listen for refresh starts:
//!
//! ```no_run
//! use refresh_ui::refresh::{OnRefresh, RefreshLayout, RefreshSignal};
//! use refresh_ui::{Axis, Size};
//!
//! struct Reload;
//!
//! impl OnRefresh for Reload {
//!     fn on_refresh_start(&mut self, is_header: bool) {
//!         println!("refreshing (header: {is_header})");
//!     }
//!
//!     fn on_refresh_complete(&mut self, _signal: &RefreshSignal) -> bool {
//!         false
//!     }
//! }
//!
//! let mut layout = RefreshLayout::new(Axis::Vertical).on_refresh(Reload);
//! layout.layout(Size::new(360.0, 640.0));
//! ```
//!
//! Feed it touch events with [`RefreshLayout::on_touch_event`] (or wire it as
//! a nested-scroll parent of a scrollable child), pump
//! [`RefreshLayout::on_frame`] from your frame clock, and call
//! [`RefreshLayout::complete_refresh`] once new data arrived.
//!
//! Headers and footers are anything implementing [`refresh::Refreshable`];
//! the [`indicator`] module ships ready-made animated ones.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use refresh_ui_core as core;
pub use refresh_ui_widget as widget;

pub use widget::indicator;
pub use widget::refresh;

pub use crate::core::alignment;
pub use crate::core::animation;
pub use crate::core::axis;
pub use crate::core::padding;
pub use crate::core::time;
pub use crate::core::touch;
pub use crate::core::{
    Alignment, Animation, Axes, Axis, Padding, Point, Rectangle, Size, Vector,
};

pub use refresh::{OnRefresh, RefreshLayout, RefreshSignal, Refreshable, State};
