//! Animate your widgets.
use crate::time::{Duration, Instant};

pub use lilt::{Easing, FloatRepresentable as Float, Interpolable};

/// The animation of some particular state.
#[derive(Debug, Clone)]
pub struct Animation<T>
where
    T: Clone + Copy + PartialEq + Float,
{
    raw: lilt::Animated<T, Instant>,
}

impl<T> Animation<T>
where
    T: Clone + Copy + PartialEq + Float,
{
    /// Creates a new [`Animation`] with the given initial state.
    pub fn new(state: T) -> Self {
        Self {
            raw: lilt::Animated::new(state),
        }
    }

    /// Sets the [`Easing`] function of the [`Animation`].
    pub fn easing(mut self, easing: Easing) -> Self {
        self.raw = self.raw.easing(easing);
        self
    }

    /// Sets the duration of the [`Animation`] to 100ms.
    pub fn very_quick(self) -> Self {
        self.duration(Duration::from_millis(100))
    }

    /// Sets the duration of the [`Animation`] to 200ms.
    pub fn quick(self) -> Self {
        self.duration(Duration::from_millis(200))
    }

    /// Sets the duration of the [`Animation`] to 400ms.
    pub fn slow(self) -> Self {
        self.duration(Duration::from_millis(400))
    }

    /// Sets the duration of the [`Animation`] to the given value.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.raw = self.raw.duration(duration.as_secs_f32() * 1_000.0);
        self
    }

    /// Sets a delay before the [`Animation`] starts.
    pub fn delay(mut self, duration: Duration) -> Self {
        self.raw = self.raw.delay(duration.as_secs_f32() * 1_000.0);
        self
    }

    /// Makes the [`Animation`] repeat the given amount of times.
    pub fn repeat(mut self, times: u32) -> Self {
        self.raw = self.raw.repeat(times);
        self
    }

    /// Makes the [`Animation`] repeat forever.
    pub fn repeat_forever(mut self) -> Self {
        self.raw = self.raw.repeat_forever();
        self
    }

    /// Makes the [`Animation`] reverse direction on every repetition.
    pub fn auto_reverse(mut self) -> Self {
        self.raw = self.raw.auto_reverse();
        self
    }

    /// Transitions the [`Animation`] to the given new state at the given time.
    pub fn go(mut self, new_state: T, at: Instant) -> Self {
        self.go_mut(new_state, at);
        self
    }

    /// Transitions the [`Animation`] to the given new state at the given
    /// time, by reference.
    pub fn go_mut(&mut self, new_state: T, at: Instant) {
        self.raw.transition(new_state, at);
    }

    /// Returns true if the [`Animation`] is still in progress at the given
    /// time.
    pub fn is_animating(&self, at: Instant) -> bool {
        self.raw.in_progress(at)
    }

    /// Returns the current state of the [`Animation`].
    pub fn value(&self) -> T {
        self.raw.value
    }
}

impl Animation<bool> {
    /// Projects the [`Animation`] into an interpolated value between `start`
    /// and `end` at the given time.
    pub fn interpolate<I>(&self, start: I, end: I, at: Instant) -> I
    where
        I: Interpolable + Clone,
    {
        self.raw.animate_bool(start, end, at)
    }
}
