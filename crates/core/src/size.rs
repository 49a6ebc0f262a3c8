use crate::{Padding, Vector};

/// An amount of space in 2 dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// The width.
    pub width: f32,

    /// The height.
    pub height: f32,
}

impl Size {
    /// A [`Size`] with zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new [`Size`] with the given width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Increments the [`Size`] to account for the given padding.
    pub fn expand(self, padding: impl Into<Padding>) -> Self {
        let padding = padding.into();

        Self::new(
            self.width + padding.horizontal(),
            self.height + padding.vertical(),
        )
    }

    /// Shrinks the [`Size`] by the given padding, clamping at zero.
    pub fn shrink(self, padding: impl Into<Padding>) -> Self {
        let padding = padding.into();

        Self::new(
            (self.width - padding.horizontal()).max(0.0),
            (self.height - padding.vertical()).max(0.0),
        )
    }
}

impl From<[f32; 2]> for Size {
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(width, height)
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl From<Size> for Vector {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
