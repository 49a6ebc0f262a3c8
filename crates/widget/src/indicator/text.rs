//! A labeled refresh indicator.
use crate::core::{Padding, Size};
use crate::indicator::{AnimationRefreshView, Phase};
use crate::refresh::{RefreshView, Refreshable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Pull,
    Release,
    Refreshing,
}

/// A refresh element that stacks a status label on top of an
/// [`AnimationRefreshView`].
///
/// The label tracks the refresh gesture: it invites a pull while the drag is
/// short of the activation distance, asks for a release once the pull covers
/// it, and announces the refresh after a triggering release. The animation
/// below receives the same events unchanged.
#[derive(Debug, Clone)]
pub struct TextRefreshView {
    animation: AnimationRefreshView,
    label: Label,
    label_size: Size,
    pull_text: String,
    release_text: String,
    refreshing_text: String,
}

impl TextRefreshView {
    /// Creates a new [`TextRefreshView`] around the given animation.
    pub fn new(animation: AnimationRefreshView) -> Self {
        Self {
            animation,
            label: Label::Pull,
            label_size: Size::ZERO,
            pull_text: String::from("Pull to refresh"),
            release_text: String::from("Release to refresh"),
            refreshing_text: String::from("Refreshing"),
        }
    }

    /// Sets the measured size of the label.
    pub fn label_size(mut self, size: Size) -> Self {
        self.label_size = size;
        self
    }

    /// Sets the label shown while the pull is short of the activation
    /// distance.
    pub fn pull_text(mut self, text: impl Into<String>) -> Self {
        self.pull_text = text.into();
        self
    }

    /// Sets the label shown once the pull covers the activation distance.
    pub fn release_text(mut self, text: impl Into<String>) -> Self {
        self.release_text = text.into();
        self
    }

    /// Sets the label shown while refreshing.
    pub fn refreshing_text(mut self, text: impl Into<String>) -> Self {
        self.refreshing_text = text.into();
        self
    }

    /// The label to display for the current gesture.
    pub fn label(&self) -> &str {
        match self.label {
            Label::Pull => &self.pull_text,
            Label::Release => &self.release_text,
            Label::Refreshing => &self.refreshing_text,
        }
    }

    /// The animated indicator below the label.
    pub fn animation(&self) -> &AnimationRefreshView {
        &self.animation
    }

    /// Sets or clears the composition scrubbed while pulling.
    pub fn set_pull_animation(
        &mut self,
        composition: Option<crate::indicator::Composition>,
    ) {
        self.animation.set_pull_animation(composition);
    }

    /// Sets or clears the composition looped while refreshing.
    pub fn set_refresh_animation(
        &mut self,
        composition: Option<crate::indicator::Composition>,
    ) {
        self.animation.set_refresh_animation(composition);
    }
}

impl RefreshView for TextRefreshView {
    fn size(&self) -> Size {
        let animation = self.animation.size();

        Size::new(
            animation.width.max(self.label_size.width),
            animation.height + self.label_size.height,
        )
    }

    fn margins(&self) -> Padding {
        RefreshView::margins(&self.animation)
    }
}

impl Refreshable for TextRefreshView {
    fn on_offset(&mut self, delta: f32) {
        self.animation.on_offset(delta);

        if self.animation.phase() != Phase::Refreshing {
            self.label = if delta.abs() < 1.0 {
                Label::Pull
            } else {
                Label::Release
            };
        }
    }

    fn on_release(&mut self, is_trigger: bool) {
        self.animation.on_release(is_trigger);

        if is_trigger {
            self.label = Label::Refreshing;
        }
    }

    fn on_reset(&mut self) {
        self.animation.on_reset();
        self.label = Label::Pull;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Axis;

    fn view() -> TextRefreshView {
        TextRefreshView::new(AnimationRefreshView::new(Size::new(40.0, 40.0)))
            .label_size(Size::new(120.0, 20.0))
    }

    #[test]
    fn test_label_follows_gesture() {
        let mut view = view();

        assert_eq!(view.label(), "Pull to refresh");

        view.on_offset(0.4);
        assert_eq!(view.label(), "Pull to refresh");

        view.on_offset(1.0);
        assert_eq!(view.label(), "Release to refresh");

        view.on_release(true);
        assert_eq!(view.label(), "Refreshing");

        // Settle offsets must not override the announcement
        view.on_offset(0.9);
        assert_eq!(view.label(), "Refreshing");

        view.on_reset();
        assert_eq!(view.label(), "Pull to refresh");
    }

    #[test]
    fn test_canceled_release_keeps_drag_label() {
        let mut view = view();

        view.on_offset(1.2);
        view.on_release(false);
        assert_eq!(view.label(), "Release to refresh");

        view.on_offset(0.3);
        assert_eq!(view.label(), "Pull to refresh");
    }

    #[test]
    fn test_custom_texts() {
        let mut view = view()
            .pull_text("keep pulling")
            .release_text("let go")
            .refreshing_text("working");

        assert_eq!(view.label(), "keep pulling");

        view.on_offset(1.0);
        assert_eq!(view.label(), "let go");

        view.on_release(true);
        assert_eq!(view.label(), "working");
    }

    #[test]
    fn test_stacked_size() {
        let view = view();

        assert_eq!(view.size(), Size::new(120.0, 60.0));
        assert_eq!(view.content_size(Axis::Vertical), 60);
        assert_eq!(view.content_size(Axis::Horizontal), 120);
    }
}
