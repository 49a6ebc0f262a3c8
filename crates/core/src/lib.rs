//! The core ideas of refresh_ui.
//!
//! This crate contains the foundations shared by every refresh widget:
//! geometry, alignment, axes, touch events, time, and animation. It is
//! renderer-agnostic and carries no platform dependencies.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alignment;
pub mod animation;
pub mod axis;
pub mod padding;
pub mod time;
pub mod touch;

mod point;
mod rectangle;
mod size;
mod vector;

pub use alignment::Alignment;
pub use animation::Animation;
pub use axis::{Axes, Axis};
pub use padding::Padding;
pub use point::Point;
pub use rectangle::Rectangle;
pub use size::Size;
pub use vector::Vector;
