//! The refresh capability of header and footer elements.
use crate::core::{Axis, Padding, Size};

use std::cell::RefCell;
use std::rc::Rc;

/// A visual element that can take part in a refresh container's layout.
pub trait RefreshView {
    /// The measured size of the element.
    fn size(&self) -> Size;

    /// The margins around the element.
    fn margins(&self) -> Padding {
        Padding::ZERO
    }
}

/// The capability of a header or footer element to react to refresh
/// gestures.
///
/// Elements that do not implement this capability can still serve as header
/// or footer through [`ViewRefreshable`].
pub trait Refreshable: RefreshView {
    /// Whether this element can never trigger a refresh.
    ///
    /// Indicator-only elements receive drag feedback but always settle back
    /// on release; a "no more data" footer is the typical case.
    fn is_indicator(&self) -> bool {
        false
    }

    /// Notifies the element of drag progress.
    ///
    /// A `delta` of 0 is the rest position and 1 is a pull that fully covers
    /// the activation distance. The value is not clamped; implementations
    /// that cannot use over-range feedback clamp it themselves.
    fn on_offset(&mut self, delta: f32);

    /// Notifies the element that the drag was released.
    ///
    /// `is_trigger` is true when the release starts a refresh.
    fn on_release(&mut self, is_trigger: bool);

    /// Returns the element to its rest appearance.
    fn on_reset(&mut self);

    /// The activation distance in pixels along the given [`Axis`].
    ///
    /// A release only triggers a refresh once the content offset magnitude
    /// reaches this distance.
    fn content_size(&self, axis: Axis) -> i32 {
        let margins = self.margins();
        let margins = match axis {
            Axis::Vertical => margins.vertical(),
            Axis::Horizontal => margins.horizontal(),
        };

        (axis.main(self.size()) + margins) as i32
    }
}

/// Adapts a plain element into a [`Refreshable`].
///
/// The wrapped element keeps its size and margin semantics, so it still
/// defines an activation distance, but it receives no drag feedback.
#[derive(Debug, Clone)]
pub struct ViewRefreshable<V> {
    view: V,
}

impl<V> ViewRefreshable<V>
where
    V: RefreshView,
{
    /// Wraps the given element.
    pub fn new(view: V) -> Self {
        Self { view }
    }

    /// Returns the wrapped element.
    pub fn into_inner(self) -> V {
        self.view
    }
}

impl<V> RefreshView for ViewRefreshable<V>
where
    V: RefreshView,
{
    fn size(&self) -> Size {
        self.view.size()
    }

    fn margins(&self) -> Padding {
        self.view.margins()
    }
}

impl<V> Refreshable for ViewRefreshable<V>
where
    V: RefreshView,
{
    fn on_offset(&mut self, _delta: f32) {}

    fn on_release(&mut self, _is_trigger: bool) {}

    fn on_reset(&mut self) {}
}

impl<T> RefreshView for Rc<RefCell<T>>
where
    T: RefreshView,
{
    fn size(&self) -> Size {
        self.borrow().size()
    }

    fn margins(&self) -> Padding {
        self.borrow().margins()
    }
}

impl<T> Refreshable for Rc<RefCell<T>>
where
    T: Refreshable,
{
    fn is_indicator(&self) -> bool {
        self.borrow().is_indicator()
    }

    fn on_offset(&mut self, delta: f32) {
        self.borrow_mut().on_offset(delta);
    }

    fn on_release(&mut self, is_trigger: bool) {
        self.borrow_mut().on_release(is_trigger);
    }

    fn on_reset(&mut self) {
        self.borrow_mut().on_reset();
    }

    fn content_size(&self, axis: Axis) -> i32 {
        self.borrow().content_size(axis)
    }
}
