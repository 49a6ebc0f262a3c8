//! Scroll axes and axis masks.
use crate::Size;

/// The axis a refresh container operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// The vertical axis: pulls move content up and down.
    #[default]
    Vertical,

    /// The horizontal axis: pulls move content left and right.
    Horizontal,
}

impl Axis {
    /// Returns the [`Axes`] mask equivalent to this [`Axis`].
    pub fn axes(self) -> Axes {
        match self {
            Self::Vertical => Axes::VERTICAL,
            Self::Horizontal => Axes::HORIZONTAL,
        }
    }

    /// Returns the extent of the given [`Size`] along this [`Axis`].
    pub fn main(self, size: Size) -> f32 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Returns the extent of the given [`Size`] across this [`Axis`].
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Self::Vertical => size.width,
            Self::Horizontal => size.height,
        }
    }
}

bitflags::bitflags! {
    /// The set of axes a nested scroll gesture moves along.
    ///
    /// A scrollable child announces the axes of a starting gesture; an
    /// ancestor accepts the gesture only if the mask intersects its own
    /// configured [`Axis`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Axes: u32 {
        /// The gesture moves along the vertical axis.
        const VERTICAL = 1 << 0;

        /// The gesture moves along the horizontal axis.
        const HORIZONTAL = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_mask() {
        assert!(Axis::Vertical.axes().contains(Axes::VERTICAL));
        assert!(!Axis::Vertical.axes().contains(Axes::HORIZONTAL));
        assert!(
            (Axes::VERTICAL | Axes::HORIZONTAL).intersects(Axis::Horizontal.axes())
        );
    }

    #[test]
    fn test_main_cross() {
        let size = Size::new(30.0, 80.0);

        assert_eq!(Axis::Vertical.main(size), 80.0);
        assert_eq!(Axis::Vertical.cross(size), 30.0);
        assert_eq!(Axis::Horizontal.main(size), 30.0);
        assert_eq!(Axis::Horizontal.cross(size), 80.0);
    }
}
