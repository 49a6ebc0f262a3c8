//! A container that turns drag gestures into refresh cycles.
//!
//! [`RefreshLayout`] owns the layout of an optional header, an optional
//! footer, and a scrollable content child. It arbitrates nested scrolling
//! with the content, maps drag deltas to a damped content offset, and runs
//! the settle animation that commits or cancels a refresh.
//!
//! # Example
//! ```no_run
//! use refresh_ui_widget::refresh::{OnRefresh, RefreshLayout, RefreshSignal};
//! use refresh_ui_core::{Alignment, Axis, Size};
//!
//! struct Reload;
//!
//! impl OnRefresh for Reload {
//!     fn on_refresh_start(&mut self, is_header: bool) {
//!         println!("refreshing (header: {is_header})");
//!     }
//! }
//!
//! let mut layout = RefreshLayout::new(Axis::Vertical).on_refresh(Reload);
//! layout.layout(Size::new(360.0, 640.0));
//! ```

use crate::core::time::{Duration, Instant};
use crate::core::{
    Alignment, Animation, Axes, Axis, Padding, Point, Rectangle, Size, Vector, touch,
};
use crate::refresh::{RefreshSignal, RefreshView, Refreshable, ViewRefreshable};

use serde::{Deserialize, Serialize};

use std::cell::Cell;
use std::rc::Rc;

/// The fraction of a raw drag delta that becomes content offset.
pub const DRAG_DAMPING: f32 = 0.5;

/// How long the settle animation takes to reach its target.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

/// The minimum finger travel before a touch becomes a drag.
const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// The phase of a [`RefreshLayout`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum State {
    /// At rest; the content sits at offset 0.
    #[default]
    Idle,

    /// A drag is pulling the content away from its top edge.
    DragFromTop,

    /// A drag is pulling the content away from its bottom edge.
    DragFromBottom,

    /// A drag is pulling the content away from its left edge.
    DragFromLeft,

    /// A drag is pulling the content away from its right edge.
    DragFromRight,

    /// A refresh is running; the content rests at the activation distance.
    Refreshing,

    /// The settle animation is moving the content to its target offset.
    Settling,
}

impl State {
    /// Returns true if a drag is currently tracked.
    pub fn is_dragging(self) -> bool {
        matches!(
            self,
            Self::DragFromTop
                | Self::DragFromBottom
                | Self::DragFromLeft
                | Self::DragFromRight
        )
    }

    /// Returns true while a refresh cycle is in flight, from the first drag
    /// until the settle animation returns the content to rest.
    pub fn in_refresh_process(self) -> bool {
        self.is_dragging() || matches!(self, Self::Refreshing | Self::Settling)
    }
}

/// The role of a child inside a [`RefreshLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The element revealed by pulling from the leading edge.
    Header,

    /// The element revealed by pulling from the trailing edge.
    Footer,

    /// The scrollable content.
    Content,
}

/// The side that owns a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The header element.
    Header,

    /// The footer element.
    Footer,
}

/// The callback surface of a refresh cycle.
pub trait OnRefresh {
    /// Called once the settle animation commits a refresh.
    ///
    /// `is_header` is true when the header side triggered; on a horizontal
    /// axis that means the left side.
    fn on_refresh_start(&mut self, is_header: bool);

    /// Called by [`RefreshLayout::complete_refresh`].
    ///
    /// Return true to intercept the reset and drive it later through the
    /// given [`RefreshSignal`].
    fn on_refresh_complete(&mut self, signal: &RefreshSignal) -> bool {
        let _ = signal;
        false
    }
}

/// The parent side of the nested scrolling protocol.
///
/// [`RefreshLayout`] implements this trait itself, so a container can act as
/// the nested-scroll parent of another container's content.
pub trait NestedScrollParent {
    /// A nested scroll is starting. Return true to take part in it.
    fn on_start_nested_scroll(&mut self, child: Role, axes: Axes) -> bool;

    /// The child scrolled; the unconsumed portion is what it could not
    /// scroll itself.
    fn on_nested_scroll(
        &mut self,
        dx_consumed: i32,
        dy_consumed: i32,
        dx_unconsumed: i32,
        dy_unconsumed: i32,
    );

    /// The child is about to scroll by the given delta. Returns the portion
    /// consumed by the parent.
    fn on_nested_pre_scroll(&mut self, dx: i32, dy: i32) -> (i32, i32);

    /// The nested scroll ended.
    fn on_stop_nested_scroll(&mut self);

    /// The child flung. Return true to consume the fling.
    fn on_nested_fling(&mut self, velocity_x: f32, velocity_y: f32, consumed: bool) -> bool;

    /// The child is about to fling. Return true to consume the fling.
    fn on_nested_pre_fling(&mut self, velocity_x: f32, velocity_y: f32) -> bool;
}

/// The persistable fields of a [`RefreshLayout`].
///
/// The active target is stored as a [`Side`] tag, never as a reference; on
/// restore the live header or footer child is re-bound by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// The state machine phase.
    pub state: State,

    /// The content offset in pixels.
    pub content_offset: i32,

    /// The side that owned the last drag, if any.
    pub last_target: Option<Side>,
}

struct Edge {
    view: Box<dyn Refreshable>,
    gravity: Alignment,
    frame: Rectangle,
}

struct Content {
    view: Box<dyn RefreshView>,
    horizontal: Alignment,
    vertical: Alignment,
    frame: Rectangle,
}

struct Settle {
    animation: Animation<bool>,
    from: i32,
    to: i32,
}

/// A container coordinating a header, a footer, and scrollable content into
/// pull-to-refresh gestures.
pub struct RefreshLayout {
    axis: Axis,
    touch_slop: f32,
    padding: Padding,
    bounds: Size,

    header: Option<Edge>,
    footer: Option<Edge>,
    content: Option<Content>,

    state: State,
    target_state: State,
    content_offset: i32,
    target: Option<Side>,
    last_target: Option<Side>,
    settle: Option<Settle>,

    finger: Option<touch::Finger>,
    pressed: Point,
    last: Point,

    pending_reset: Rc<Cell<bool>>,

    parent: Option<Box<dyn NestedScrollParent>>,
    parent_accepted: bool,

    internal_on_refresh: Option<Box<dyn OnRefresh>>,
    on_refresh: Option<Box<dyn OnRefresh>>,
    on_offset_change: Option<Box<dyn FnMut(i32)>>,
}

impl RefreshLayout {
    /// Creates a new [`RefreshLayout`] operating on the given [`Axis`].
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            touch_slop: DEFAULT_TOUCH_SLOP,
            padding: Padding::ZERO,
            bounds: Size::ZERO,
            header: None,
            footer: None,
            content: None,
            state: State::Idle,
            target_state: State::Idle,
            content_offset: 0,
            target: None,
            last_target: None,
            settle: None,
            finger: None,
            pressed: Point::ORIGIN,
            last: Point::ORIGIN,
            pending_reset: Rc::new(Cell::new(false)),
            parent: None,
            parent_accepted: false,
            internal_on_refresh: None,
            on_refresh: None,
            on_offset_change: None,
        }
    }

    /// Sets the minimum finger travel before a touch becomes a drag.
    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Sets the padding around the content area.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the header element with its cross-axis gravity.
    pub fn header(mut self, view: impl Refreshable + 'static, gravity: Alignment) -> Self {
        self.header = Some(Edge {
            view: Box::new(view),
            gravity,
            frame: Rectangle::ZERO,
        });
        self
    }

    /// Sets a plain element as header, wrapped in a [`ViewRefreshable`].
    pub fn header_view(self, view: impl RefreshView + 'static, gravity: Alignment) -> Self {
        self.header(ViewRefreshable::new(view), gravity)
    }

    /// Sets the footer element with its cross-axis gravity.
    pub fn footer(mut self, view: impl Refreshable + 'static, gravity: Alignment) -> Self {
        self.footer = Some(Edge {
            view: Box::new(view),
            gravity,
            frame: Rectangle::ZERO,
        });
        self
    }

    /// Sets a plain element as footer, wrapped in a [`ViewRefreshable`].
    pub fn footer_view(self, view: impl RefreshView + 'static, gravity: Alignment) -> Self {
        self.footer(ViewRefreshable::new(view), gravity)
    }

    /// Sets the scrollable content element.
    pub fn content(mut self, view: impl RefreshView + 'static) -> Self {
        self.content = Some(Content {
            view: Box::new(view),
            horizontal: Alignment::Start,
            vertical: Alignment::Start,
            frame: Rectangle::ZERO,
        });
        self
    }

    /// Sets the alignment of the content inside the container.
    pub fn content_gravity(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        if let Some(content) = &mut self.content {
            content.horizontal = horizontal;
            content.vertical = vertical;
        }
        self
    }

    /// Sets the refresh listener.
    pub fn on_refresh(mut self, listener: impl OnRefresh + 'static) -> Self {
        self.on_refresh = Some(Box::new(listener));
        self
    }

    /// Sets a listener that runs before the external one and may intercept
    /// completion on its own. Meant for embedding frameworks.
    pub fn internal_on_refresh(mut self, listener: impl OnRefresh + 'static) -> Self {
        self.internal_on_refresh = Some(Box::new(listener));
        self
    }

    /// Sets the observer notified with the raw pixel offset on every change.
    pub fn on_offset_change(mut self, observer: impl FnMut(i32) + 'static) -> Self {
        self.on_offset_change = Some(Box::new(observer));
        self
    }

    /// Sets the outer nested-scroll parent this container reports to.
    pub fn nested_parent(mut self, parent: impl NestedScrollParent + 'static) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// The axis this container operates on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The current phase of the container.
    pub fn state(&self) -> State {
        self.state
    }

    /// The current content offset in pixels.
    ///
    /// Negative values mean the header side is pulled into view.
    pub fn content_offset(&self) -> i32 {
        self.content_offset
    }

    /// The visual translation of the children for the current offset.
    pub fn translation(&self) -> Vector {
        let offset = -self.content_offset as f32;

        match self.axis {
            Axis::Vertical => Vector::new(0.0, offset),
            Axis::Horizontal => Vector::new(offset, 0.0),
        }
    }

    /// The frame of the header, translated by the current offset.
    pub fn header_frame(&self) -> Option<Rectangle> {
        self.header.as_ref().map(|edge| edge.frame + self.translation())
    }

    /// The frame of the footer, translated by the current offset.
    pub fn footer_frame(&self) -> Option<Rectangle> {
        self.footer.as_ref().map(|edge| edge.frame + self.translation())
    }

    /// The frame of the content, translated by the current offset.
    pub fn content_frame(&self) -> Option<Rectangle> {
        self.content
            .as_ref()
            .map(|content| content.frame + self.translation())
    }

    /// Computes the frames of header, content, and footer for the given
    /// bounds.
    ///
    /// The header abuts the leading edge of the content area just outside
    /// the container, the footer abuts the trailing edge, and the content
    /// fills the padded interior. Cross-axis placement follows each child's
    /// gravity.
    pub fn layout(&mut self, bounds: Size) {
        self.bounds = bounds;

        let interior = Rectangle::new(
            Point::new(self.padding.left, self.padding.top),
            bounds.shrink(self.padding),
        );

        if let Some(content) = &mut self.content {
            let size = content.view.size();
            let width = fit(size.width, interior.width);
            let height = fit(size.height, interior.height);

            content.frame = Rectangle::new(
                Point::new(
                    interior.x + content.horizontal.align(width, interior.width),
                    interior.y + content.vertical.align(height, interior.height),
                ),
                Size::new(width, height),
            );
        }

        let axis = self.axis;

        if let Some(edge) = &mut self.header {
            edge.frame = layout_edge(edge, axis, interior, true);
        }

        if let Some(edge) = &mut self.footer {
            edge.frame = layout_edge(edge, axis, interior, false);
        }
    }

    /// Decides whether to take part in a starting nested scroll.
    ///
    /// Only the content child is accepted, and only when the gesture moves
    /// along the configured axis.
    pub fn on_start_nested_scroll(&mut self, child: Role, axes: Axes) -> bool {
        matches!(child, Role::Content) && axes.intersects(self.axis.axes())
    }

    /// Feeds a scroll delta from the content into the container.
    ///
    /// The unconsumed portion is what the content could not scroll itself;
    /// it is damped by [`DRAG_DAMPING`] and becomes content offset. The drag
    /// target is bound lazily: header for pulls away from the leading edge,
    /// footer for the trailing edge.
    pub fn on_nested_scroll(
        &mut self,
        dx_consumed: i32,
        dy_consumed: i32,
        dx_unconsumed: i32,
        dy_unconsumed: i32,
    ) {
        let _ = (dx_consumed, dy_consumed);

        match self.axis {
            Axis::Vertical => {
                if dy_unconsumed != 0 {
                    self.settle = None;
                    self.set_state(if dy_unconsumed > 0 {
                        State::DragFromBottom
                    } else {
                        State::DragFromTop
                    });
                    self.prepare_target(dy_unconsumed < 0);
                    self.offset_content(self.content_offset + self.resolve_offset(dy_unconsumed));
                }
            }
            Axis::Horizontal => {
                if dx_unconsumed != 0 {
                    self.settle = None;
                    self.set_state(if dx_unconsumed > 0 {
                        State::DragFromRight
                    } else {
                        State::DragFromLeft
                    });
                    self.prepare_target(dx_unconsumed < 0);
                    self.offset_content(self.content_offset + self.resolve_offset(dx_unconsumed));
                }
            }
        }
    }

    /// Lets the container consume a delta before the content scrolls.
    ///
    /// While dragging, the damped delta keeps moving the offset; a delta
    /// that would push the offset across the rest position snaps it to 0
    /// and ends the drag instead. While any refresh phase is in flight, the
    /// full delta along the axis is consumed so the content cannot scroll
    /// underneath.
    pub fn on_nested_pre_scroll(&mut self, dx: i32, dy: i32) -> (i32, i32) {
        if self.state.is_dragging() {
            let delta = match self.axis {
                Axis::Vertical => dy,
                Axis::Horizontal => dx,
            };
            let next = self.content_offset + self.resolve_offset(delta);

            if self.crosses_rest(delta, next) {
                self.offset_content(0);
                self.set_state(State::Idle);
                return (0, 0);
            }

            self.offset_content(next);
        }

        if self.state.in_refresh_process() {
            match self.axis {
                Axis::Vertical => (0, dy),
                Axis::Horizontal => (dx, 0),
            }
        } else {
            (0, 0)
        }
    }

    /// Ends a nested scroll, promoting the drag to a refresh or settling
    /// back to rest.
    ///
    /// A drag promotes when the offset magnitude has reached the target's
    /// activation distance and the target is not indicator-only; the settle
    /// animation then moves the offset to exactly the signed activation
    /// distance. Anything else settles back to 0.
    pub fn on_stop_nested_scroll(&mut self) {
        if matches!(self.state, State::Refreshing | State::Settling) {
            return;
        }

        let target_size = self
            .target
            .map_or(0, |side| self.activation_distance(side));

        if target_size > 0 {
            let content_size = self
                .last_target
                .map_or(0, |side| self.activation_distance(side));
            let is_indicator = self
                .target
                .and_then(|side| self.edge(side))
                .is_none_or(|edge| edge.view.is_indicator());

            if self.content_offset.abs() >= content_size && !is_indicator {
                self.release_target(true);
                self.target_state = State::Refreshing;
                self.animate_content_to(if self.content_offset > 0 {
                    content_size
                } else {
                    -content_size
                });
            } else {
                self.release_target(false);
                self.animate_reset_content();
            }
        } else {
            self.animate_reset_content();
        }
    }

    /// Reports whether a fling from the content is consumed.
    pub fn on_nested_fling(&mut self, velocity_x: f32, velocity_y: f32, consumed: bool) -> bool {
        let _ = (velocity_x, velocity_y, consumed);

        self.state.in_refresh_process()
    }

    /// Reports whether an imminent fling from the content is consumed.
    pub fn on_nested_pre_fling(&mut self, velocity_x: f32, velocity_y: f32) -> bool {
        let _ = (velocity_x, velocity_y);

        self.state.in_refresh_process()
    }

    /// Handles a raw touch event on the container itself.
    ///
    /// Touch drags are gated by the touch slop and then routed through the
    /// same nested-scroll path as content-driven drags, so both input
    /// sources share one state machine.
    pub fn on_touch_event(&mut self, event: &touch::Event) {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if self.finger.is_some() {
                    return;
                }

                self.finger = Some(id);
                self.pressed = position;
                self.last = position;
                self.parent_accepted = match &mut self.parent {
                    Some(parent) => {
                        parent.on_start_nested_scroll(Role::Content, self.axis.axes())
                    }
                    None => false,
                };
            }
            touch::Event::FingerMoved { id, position } => {
                if self.finger != Some(id) {
                    return;
                }

                let mut delta_y = (self.last.y - position.y) as i32;
                let mut delta_x = (self.last.x - position.x) as i32;

                match self.axis {
                    Axis::Vertical => {
                        if self.parent_accepted {
                            if let Some(parent) = &mut self.parent {
                                let (_, consumed) = parent.on_nested_pre_scroll(0, delta_y);
                                delta_y -= consumed;
                            }
                        }

                        if self.state == State::Idle
                            && (self.pressed.y - position.y).abs() > self.touch_slop
                        {
                            self.set_state(if delta_y < 0 {
                                State::DragFromTop
                            } else {
                                State::DragFromBottom
                            });
                            self.prepare_target(delta_y < 0);
                        }

                        if matches!(self.state, State::DragFromTop | State::DragFromBottom) {
                            self.on_nested_scroll(0, 0, 0, delta_y);

                            // Report the delta as fully consumed upstream
                            if self.parent_accepted {
                                if let Some(parent) = &mut self.parent {
                                    parent.on_nested_scroll(0, delta_y, 0, 0);
                                }
                            }
                        }
                    }
                    Axis::Horizontal => {
                        if self.parent_accepted {
                            if let Some(parent) = &mut self.parent {
                                let (consumed, _) = parent.on_nested_pre_scroll(delta_x, 0);
                                delta_x -= consumed;
                            }
                        }

                        if self.state == State::Idle
                            && (self.pressed.x - position.x).abs() > self.touch_slop
                        {
                            self.set_state(if delta_x < 0 {
                                State::DragFromLeft
                            } else {
                                State::DragFromRight
                            });
                            self.prepare_target(delta_x < 0);
                        }

                        if matches!(self.state, State::DragFromLeft | State::DragFromRight) {
                            self.on_nested_scroll(0, 0, delta_x, 0);

                            if self.parent_accepted {
                                if let Some(parent) = &mut self.parent {
                                    parent.on_nested_scroll(delta_x, 0, 0, 0);
                                }
                            }
                        }
                    }
                }

                self.last = position;
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                if self.finger != Some(id) {
                    return;
                }

                self.finger = None;

                if self.parent_accepted {
                    if let Some(parent) = &mut self.parent {
                        parent.on_stop_nested_scroll();
                    }
                    self.parent_accepted = false;
                }

                self.on_stop_nested_scroll();
            }
        }
    }

    /// Advances the settle animation and runs deferred completions.
    ///
    /// Returns true if another frame should be scheduled.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        if self.pending_reset.replace(false) {
            self.complete_refresh_immediately();
        }

        let Some(settle) = &self.settle else {
            return false;
        };

        let from = settle.from;
        let to = settle.to;
        let progress = settle
            .animation
            .is_animating(now)
            .then(|| settle.animation.interpolate(0.0, 1.0, now));

        match progress {
            Some(t) => {
                // Ease-out cubic, matching the settle deceleration curve
                let eased = 1.0 - (1.0 - t).powi(3);
                let offset = from as f32 + (to - from) as f32 * eased;

                self.offset_content(offset.round() as i32);

                true
            }
            None => {
                self.offset_content(to);
                self.finish_settle();

                false
            }
        }
    }

    /// Triggers a refresh programmatically.
    ///
    /// No-op while already refreshing, when the requested side has no child,
    /// or when its element is indicator-only.
    pub fn set_refresh(&mut self, is_from_header: bool) {
        if self.state == State::Refreshing {
            return;
        }

        self.prepare_target(is_from_header);

        let Some(side) = self.target else {
            return;
        };

        let axis = self.axis;
        let Some(edge) = self.edge_mut(side) else {
            return;
        };

        if edge.view.is_indicator() {
            return;
        }

        let distance = edge.view.content_size(axis);

        self.set_state(State::Refreshing);
        self.target_state = State::Refreshing;
        self.release_target(true);
        self.animate_content_to(if is_from_header { -distance } else { distance });
    }

    /// Completes the running refresh.
    ///
    /// The completion is first offered to the internal listener, then to the
    /// external one; either may intercept by returning true and finish later
    /// through the provided [`RefreshSignal`]. With no interception, the
    /// container settles back to rest right away.
    pub fn complete_refresh(&mut self) {
        let signal = RefreshSignal::new(Rc::clone(&self.pending_reset));

        let mut intercept = match &mut self.internal_on_refresh {
            Some(listener) => listener.on_refresh_complete(&signal),
            None => false,
        };

        if !intercept {
            if let Some(listener) = &mut self.on_refresh {
                intercept = listener.on_refresh_complete(&signal);
            }
        }

        log::debug!("refresh complete (intercepted: {intercept})");

        if !intercept {
            self.complete_refresh_immediately();
        }
    }

    /// Captures the persistable fields of the container.
    pub fn save_instance_state(&self) -> SavedState {
        SavedState {
            state: self.state,
            content_offset: self.content_offset,
            last_target: self.last_target,
        }
    }

    /// Restores previously captured fields.
    ///
    /// The last target is re-bound by role against the current children; a
    /// stored side with no live child restores as no target. A state saved
    /// mid-settle resumes as a settle back to rest.
    pub fn restore_instance_state(&mut self, saved: SavedState) {
        log::debug!(
            "restoring refresh state {:?} at offset {}",
            saved.state,
            saved.content_offset
        );

        self.state = saved.state;
        self.last_target = saved
            .last_target
            .filter(|&side| self.edge(side).is_some());
        self.offset_content(saved.content_offset);

        match self.state {
            State::Refreshing => self.prepare_target(saved.content_offset < 0),
            State::Settling => self.animate_reset_content(),
            _ => {}
        }
    }

    fn set_state(&mut self, state: State) {
        if self.state != state {
            log::trace!("refresh state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    fn resolve_offset(&self, delta: i32) -> i32 {
        (delta as f32 * DRAG_DAMPING) as i32
    }

    fn edge(&self, side: Side) -> Option<&Edge> {
        match side {
            Side::Header => self.header.as_ref(),
            Side::Footer => self.footer.as_ref(),
        }
    }

    fn edge_mut(&mut self, side: Side) -> Option<&mut Edge> {
        match side {
            Side::Header => self.header.as_mut(),
            Side::Footer => self.footer.as_mut(),
        }
    }

    fn activation_distance(&self, side: Side) -> i32 {
        self.edge(side)
            .map_or(0, |edge| edge.view.content_size(self.axis))
    }

    /// Binds the drag target lazily; a bound target stays bound until the
    /// cycle resets.
    fn prepare_target(&mut self, is_from_header: bool) {
        if self.target.is_some() {
            return;
        }

        let side = if is_from_header {
            Side::Header
        } else {
            Side::Footer
        };

        if self.edge(side).is_some() {
            self.target = Some(side);
            self.last_target = Some(side);
        }
    }

    /// Applies a new content offset: reports progress to the bound target,
    /// notifies the offset observer, and stores the offset.
    ///
    /// Progress is `-offset / activation distance`, unclamped; a zero
    /// activation distance reports 0 instead of dividing.
    fn offset_content(&mut self, offset: i32) {
        if let Some(side) = self.last_target {
            let axis = self.axis;

            if let Some(edge) = self.edge_mut(side) {
                let distance = edge.view.content_size(axis);
                let delta = if distance == 0 {
                    0.0
                } else {
                    -offset as f32 / distance as f32
                };

                edge.view.on_offset(delta);
            }
        }

        if let Some(notify) = &mut self.on_offset_change {
            notify(offset);
        }

        self.content_offset = offset;
    }

    fn release_target(&mut self, is_trigger: bool) {
        if let Some(side) = self.last_target {
            if let Some(edge) = self.edge_mut(side) {
                edge.view.on_release(is_trigger);
            }
        }
    }

    fn crosses_rest(&self, delta: i32, next: i32) -> bool {
        match self.state {
            State::DragFromBottom | State::DragFromRight => delta < 0 && next < 0,
            State::DragFromTop | State::DragFromLeft => delta > 0 && next > 0,
            _ => false,
        }
    }

    fn complete_refresh_immediately(&mut self) {
        if self.state.is_dragging() || self.state == State::Refreshing {
            self.animate_reset_content();
        }
    }

    fn animate_reset_content(&mut self) {
        self.target = None;
        self.target_state = State::Idle;
        self.animate_content_to(0);
    }

    /// Starts the settle animation towards the given offset, replacing any
    /// in-flight one. A target equal to the current offset completes the
    /// transition at once.
    fn animate_content_to(&mut self, to: i32) {
        if to == self.content_offset {
            self.settle = None;
            self.finish_settle();
            return;
        }

        self.set_state(State::Settling);
        self.settle = Some(Settle {
            animation: Animation::new(false)
                .duration(SETTLE_DURATION)
                .go(true, Instant::now()),
            from: self.content_offset,
            to,
        });
    }

    /// Commits the settle target state and dispatches the resulting
    /// notification.
    fn finish_settle(&mut self) {
        self.settle = None;
        self.set_state(self.target_state);

        match self.state {
            State::Idle => {
                if let Some(side) = self.last_target {
                    if let Some(edge) = self.edge_mut(side) {
                        edge.view.on_reset();
                    }
                }
            }
            State::Refreshing => {
                let is_header = self.content_offset < 0;

                log::debug!("refresh started (header: {is_header})");

                if let Some(listener) = &mut self.internal_on_refresh {
                    listener.on_refresh_start(is_header);
                }

                if let Some(listener) = &mut self.on_refresh {
                    listener.on_refresh_start(is_header);
                }
            }
            _ => {}
        }

        self.target_state = State::Idle;
    }
}

impl NestedScrollParent for RefreshLayout {
    fn on_start_nested_scroll(&mut self, child: Role, axes: Axes) -> bool {
        Self::on_start_nested_scroll(self, child, axes)
    }

    fn on_nested_scroll(
        &mut self,
        dx_consumed: i32,
        dy_consumed: i32,
        dx_unconsumed: i32,
        dy_unconsumed: i32,
    ) {
        Self::on_nested_scroll(self, dx_consumed, dy_consumed, dx_unconsumed, dy_unconsumed);
    }

    fn on_nested_pre_scroll(&mut self, dx: i32, dy: i32) -> (i32, i32) {
        Self::on_nested_pre_scroll(self, dx, dy)
    }

    fn on_stop_nested_scroll(&mut self) {
        Self::on_stop_nested_scroll(self);
    }

    fn on_nested_fling(&mut self, velocity_x: f32, velocity_y: f32, consumed: bool) -> bool {
        Self::on_nested_fling(self, velocity_x, velocity_y, consumed)
    }

    fn on_nested_pre_fling(&mut self, velocity_x: f32, velocity_y: f32) -> bool {
        Self::on_nested_pre_fling(self, velocity_x, velocity_y)
    }
}

fn fit(extent: f32, available: f32) -> f32 {
    if extent <= 0.0 {
        available
    } else {
        extent.min(available)
    }
}

fn layout_edge(edge: &Edge, axis: Axis, interior: Rectangle, leading: bool) -> Rectangle {
    let size = edge.view.size();
    let margins = edge.view.margins();

    match axis {
        Axis::Vertical => {
            let x = interior.x
                + margins.left
                + edge
                    .gravity
                    .align(size.width + margins.horizontal(), interior.width);
            let y = if leading {
                interior.y - margins.bottom - size.height
            } else {
                interior.y + interior.height + margins.top
            };

            Rectangle::new(Point::new(x, y), size)
        }
        Axis::Horizontal => {
            let y = interior.y
                + margins.top
                + edge
                    .gravity
                    .align(size.height + margins.vertical(), interior.height);
            let x = if leading {
                interior.x - margins.right - size.width
            } else {
                interior.x + interior.width + margins.left
            };

            Rectangle::new(Point::new(x, y), size)
        }
    }
}
