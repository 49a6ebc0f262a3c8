//! A refresh indicator that plays keyframe compositions.
use crate::core::time::Instant;
use crate::core::{Animation, Padding, Size};
use crate::indicator::Composition;
use crate::refresh::{RefreshView, Refreshable};

/// The playback phase of an [`AnimationRefreshView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// At rest; the pull composition sits on its first frame.
    #[default]
    Idle,

    /// A drag is scrubbing the pull composition.
    Drag,

    /// The refresh composition is looping.
    Refreshing,
}

/// A header or footer element driven by two keyframe compositions.
///
/// The pull composition is scrubbed by drag progress, so a pull that covers
/// the activation distance plays it through exactly once. The refresh
/// composition loops from the moment a release triggers a refresh until the
/// element is reset.
///
/// Both compositions are optional and can be swapped at any time; events
/// that arrive without one are visual no-ops. The element never acts as an
/// indicator-only target.
#[derive(Debug, Clone)]
pub struct AnimationRefreshView {
    size: Size,
    margins: Padding,
    phase: Phase,
    pull: Option<Composition>,
    refresh: Option<Composition>,
    progress: f32,
    player: Option<Animation<bool>>,
}

impl AnimationRefreshView {
    /// Creates a new [`AnimationRefreshView`] with the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            margins: Padding::ZERO,
            phase: Phase::Idle,
            pull: None,
            refresh: None,
            progress: 0.0,
            player: None,
        }
    }

    /// Sets the margins of the [`AnimationRefreshView`].
    pub fn margins(mut self, margins: impl Into<Padding>) -> Self {
        self.margins = margins.into();
        self
    }

    /// Sets or clears the composition scrubbed while pulling.
    pub fn set_pull_animation(&mut self, composition: Option<Composition>) {
        self.pull = composition;
        self.apply_phase(self.phase);
    }

    /// Sets or clears the composition looped while refreshing.
    pub fn set_refresh_animation(&mut self, composition: Option<Composition>) {
        self.refresh = composition;
        self.apply_phase(self.phase);
    }

    /// The current playback [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The frame to draw at the given time.
    ///
    /// While idle or dragging this is the pull composition frame matching
    /// the drag progress; while refreshing it follows the looping playback
    /// of the refresh composition. Without a composition for the current
    /// phase the first frame is reported.
    pub fn current_frame(&self, now: Instant) -> u32 {
        match self.phase {
            Phase::Idle | Phase::Drag => self
                .pull
                .as_ref()
                .map_or(0, |composition| composition.frame_at(self.progress)),
            Phase::Refreshing => match (&self.refresh, &self.player) {
                (Some(composition), Some(player)) => {
                    composition.frame_at(player.interpolate(0.0, 1.0, now))
                }
                _ => 0,
            },
        }
    }

    fn apply_phase(&mut self, phase: Phase) {
        match phase {
            Phase::Idle => {
                self.progress = 0.0;
                self.player = None;
            }
            Phase::Drag => {}
            Phase::Refreshing => {
                self.player = self.refresh.as_ref().map(|composition| {
                    Animation::new(false)
                        .duration(composition.duration())
                        .repeat_forever()
                        .go(true, Instant::now())
                });
            }
        }

        self.phase = phase;
    }
}

impl RefreshView for AnimationRefreshView {
    fn size(&self) -> Size {
        self.size
    }

    fn margins(&self) -> Padding {
        self.margins
    }
}

impl Refreshable for AnimationRefreshView {
    fn on_offset(&mut self, delta: f32) {
        if self.phase == Phase::Idle {
            self.apply_phase(Phase::Drag);
        }

        if self.phase == Phase::Drag {
            self.progress = delta.abs().min(1.0);
        }
    }

    fn on_release(&mut self, is_trigger: bool) {
        if is_trigger {
            self.apply_phase(Phase::Refreshing);
        }
    }

    fn on_reset(&mut self) {
        self.apply_phase(Phase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull_composition() -> Composition {
        Composition {
            name: "pull-arrow".to_owned(),
            frame_rate: 60.0,
            frame_count: 91,
        }
    }

    fn refresh_composition() -> Composition {
        Composition {
            name: "refresh-spinner".to_owned(),
            frame_rate: 30.0,
            frame_count: 48,
        }
    }

    #[test]
    fn test_scrubs_pull_composition() {
        let mut view = AnimationRefreshView::new(Size::new(40.0, 40.0));
        view.set_pull_animation(Some(pull_composition()));

        assert_eq!(view.phase(), Phase::Idle);
        assert_eq!(view.current_frame(Instant::now()), 0);

        view.on_offset(0.5);
        assert_eq!(view.phase(), Phase::Drag);
        assert_eq!(view.current_frame(Instant::now()), 45);

        // Over-range pulls pin the last frame
        view.on_offset(1.4);
        assert_eq!(view.current_frame(Instant::now()), 90);

        view.on_offset(-0.5);
        assert_eq!(view.current_frame(Instant::now()), 45);
    }

    #[test]
    fn test_trigger_starts_refresh_loop() {
        let mut view = AnimationRefreshView::new(Size::new(40.0, 40.0));
        view.set_pull_animation(Some(pull_composition()));
        view.set_refresh_animation(Some(refresh_composition()));

        view.on_offset(1.0);
        view.on_release(true);

        assert_eq!(view.phase(), Phase::Refreshing);
    }

    #[test]
    fn test_release_without_trigger_keeps_phase() {
        let mut view = AnimationRefreshView::new(Size::new(40.0, 40.0));

        view.on_offset(0.8);
        view.on_release(false);

        assert_eq!(view.phase(), Phase::Drag);
    }

    #[test]
    fn test_reset_returns_to_rest() {
        let mut view = AnimationRefreshView::new(Size::new(40.0, 40.0));
        view.set_pull_animation(Some(pull_composition()));
        view.set_refresh_animation(Some(refresh_composition()));

        view.on_offset(1.0);
        view.on_release(true);
        view.on_reset();

        assert_eq!(view.phase(), Phase::Idle);
        assert_eq!(view.current_frame(Instant::now()), 0);
    }

    #[test]
    fn test_tolerates_missing_compositions() {
        let mut view = AnimationRefreshView::new(Size::new(40.0, 40.0));

        view.on_offset(0.7);
        assert_eq!(view.current_frame(Instant::now()), 0);

        view.on_release(true);
        assert_eq!(view.phase(), Phase::Refreshing);
        assert_eq!(view.current_frame(Instant::now()), 0);

        view.on_reset();
        assert_eq!(view.phase(), Phase::Idle);
    }

    #[test]
    fn test_swap_composition_mid_phase() {
        let mut view = AnimationRefreshView::new(Size::new(40.0, 40.0));

        view.on_offset(1.0);
        view.on_release(true);

        // A refresh composition arriving late still starts the loop
        view.set_refresh_animation(Some(refresh_composition()));
        assert_eq!(view.phase(), Phase::Refreshing);

        view.set_refresh_animation(None);
        assert_eq!(view.current_frame(Instant::now()), 0);
    }

    #[test]
    fn test_never_indicator() {
        let view = AnimationRefreshView::new(Size::new(40.0, 40.0));

        assert!(!view.is_indicator());
    }
}
