//! Ready-made refresh indicators.
//!
//! This module provides indicator elements that plug into a refresh
//! container as header or footer:
//! - [`AnimationRefreshView`] - plays keyframe [`Composition`]s driven by the
//!   refresh gesture
//! - [`TextRefreshView`] - stacks a gesture-tracking status label on top of
//!   an animated indicator
//!
//! Compositions are timing descriptions loaded from RON documents; see
//! [`Composition::from_file`].

mod animation;
mod composition;
mod text;

pub use animation::{AnimationRefreshView, Phase};
pub use composition::{Composition, LoadError};
pub use text::TextRefreshView;
