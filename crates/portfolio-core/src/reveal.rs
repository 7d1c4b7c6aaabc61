//! Section reveal transitions.
//!
//! Every section starts Hidden (transparent, shifted down) and becomes
//! Visible exactly once per page load: the hero right after the first render,
//! every other section the first time it enters the viewport. Inside a
//! staggered section, child items follow one after another with a fixed
//! delay between them.
//!
//! The model is independent of any renderer. [`MotionSettings`] turns a phase
//! into a [`TransitionStyle`] that the UI writes as inline CSS, and
//! [`MotionSettings::sample`] interpolates the same transition in Rust.
//! With [`MotionSettings::instant`] every transition completes immediately
//! and the end state is unchanged.
//!
//! Viewport detection is a capability ([`ViewportObserver`]). Observers may
//! report the same section any number of times; [`RevealController`] is what
//! guarantees a section reveals only once.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Visual state of a section or item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Visible,
}

impl RevealPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealPhase::Hidden => "hidden",
            RevealPhase::Visible => "visible",
        }
    }
}

/// What starts a section's reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    /// Immediately after the first render
    OnMount,
    /// The first time the section intersects the viewport
    OnViewportEntry,
}

/// Opacity and vertical offset at one point of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    /// Downward offset in px
    pub offset_y: f32,
}

impl Keyframe {
    pub const VISIBLE: Keyframe = Keyframe {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub const fn hidden(offset_y: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
        }
    }

    /// Linear blend between two keyframes, `t` clamped to `[0, 1]`
    pub fn lerp(from: Keyframe, to: Keyframe, t: f32) -> Keyframe {
        let t = clamp_unit(t);
        Keyframe {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
        }
    }
}

fn clamp_unit(t: f32) -> f32 {
    if t.is_nan() {
        1.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Progress curve of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic ease-out
    #[default]
    EaseOut,
    /// Cubic ease-in-out
    EaseInOut,
    /// Jumps straight to the end state
    Instant,
}

impl Easing {
    /// Map linear progress to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = clamp_unit(t);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Instant => 1.0,
        }
    }

    /// CSS timing function with the same curve
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Easing::Instant => "step-start",
        }
    }
}

/// Timing of reveal transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub duration: Duration,
    /// Delay between consecutive staggered items
    pub stagger: Duration,
    pub easing: Easing,
    pub hidden_offset: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            stagger: Duration::from_millis(200),
            easing: Easing::EaseOut,
            hidden_offset: 20.0,
        }
    }
}

impl MotionSettings {
    /// Settings for reduced motion: no duration, no stagger
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            stagger: Duration::ZERO,
            easing: Easing::Instant,
            ..Self::default()
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero() || self.easing == Easing::Instant
    }

    pub fn keyframe(&self, phase: RevealPhase) -> Keyframe {
        match phase {
            RevealPhase::Hidden => Keyframe::hidden(self.hidden_offset),
            RevealPhase::Visible => Keyframe::VISIBLE,
        }
    }

    /// Start delay of the `index`-th staggered item
    pub fn item_delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger.saturating_mul(index)
    }

    /// Style for a section that reveals as one block
    pub fn section_style(&self, phase: RevealPhase) -> TransitionStyle {
        self.style(phase, Duration::ZERO)
    }

    /// Style for the `index`-th item of a staggered section
    pub fn item_style(&self, phase: RevealPhase, index: usize) -> TransitionStyle {
        let delay = match phase {
            RevealPhase::Visible => self.item_delay(index),
            RevealPhase::Hidden => Duration::ZERO,
        };
        self.style(phase, delay)
    }

    fn style(&self, phase: RevealPhase, delay: Duration) -> TransitionStyle {
        if self.is_instant() {
            return TransitionStyle {
                keyframe: self.keyframe(phase),
                duration: Duration::ZERO,
                delay: Duration::ZERO,
                easing: Easing::Instant,
            };
        }
        TransitionStyle {
            keyframe: self.keyframe(phase),
            duration: self.duration,
            delay,
            easing: self.easing,
        }
    }

    /// Keyframe of the `index`-th item, `elapsed` after a `from -> to` change
    pub fn sample(
        &self,
        from: RevealPhase,
        to: RevealPhase,
        elapsed: Duration,
        index: usize,
    ) -> Keyframe {
        let start = self.keyframe(from);
        let end = self.keyframe(to);
        if self.is_instant() {
            return end;
        }

        let delay = self.item_delay(index);
        if elapsed <= delay {
            return start;
        }
        let t = (elapsed - delay).as_secs_f32() / self.duration.as_secs_f32();
        Keyframe::lerp(start, end, self.easing.apply(t))
    }
}

/// A keyframe plus the transition that leads to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    pub keyframe: Keyframe,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl TransitionStyle {
    /// Inline CSS declarations
    pub fn to_css(&self) -> String {
        let Keyframe { opacity, offset_y } = self.keyframe;
        if self.duration.is_zero() {
            return format!(
                "opacity: {opacity}; transform: translateY({offset_y}px); transition: none;"
            );
        }
        let duration = self.duration.as_millis();
        let delay = self.delay.as_millis();
        let easing = self.easing.css();
        format!(
            "opacity: {opacity}; transform: translateY({offset_y}px); \
             transition: opacity {duration}ms {easing} {delay}ms, \
             transform {duration}ms {easing} {delay}ms;"
        )
    }
}

/// Notification from a viewport observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEntry {
    /// The section intersected the viewport
    Entered(Section),
    /// Intersection cannot be observed on this platform
    Unsupported,
}

/// Reports sections entering the viewport.
///
/// `Ok(None)` means the observer has stopped for good.
pub trait ViewportObserver {
    type Error: fmt::Display;

    fn next_entry(
        &mut self,
    ) -> impl Future<Output = Result<Option<ViewportEntry>, Self::Error>>;
}

/// Receives viewport entries and owns the reveal phases
pub trait RevealSink {
    /// Apply one entry, returning the sections it revealed
    fn apply(&mut self, entry: ViewportEntry) -> Vec<Section>;

    /// True once every section is visible
    fn is_complete(&self) -> bool;
}

/// Reveal phase of every section, each changing at most once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealController {
    phases: BTreeMap<Section, RevealPhase>,
    fired: usize,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealController {
    pub fn new() -> Self {
        Self {
            phases: Section::ALL
                .into_iter()
                .map(|section| (section, RevealPhase::Hidden))
                .collect(),
            fired: 0,
        }
    }

    pub fn phase(&self, section: Section) -> RevealPhase {
        self.phases.get(&section).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.phase(section) == RevealPhase::Visible
    }

    /// Number of reveal transitions fired so far
    pub fn fired_count(&self) -> usize {
        self.fired
    }

    pub fn is_complete(&self) -> bool {
        Section::ALL.iter().all(|s| self.is_visible(*s))
    }

    /// Viewport-triggered sections still waiting for their reveal
    pub fn pending(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| s.trigger() == RevealTrigger::OnViewportEntry && !self.is_visible(*s))
            .collect()
    }

    /// Reveal the sections that animate on mount
    pub fn mount(&mut self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| s.trigger() == RevealTrigger::OnMount)
            .filter(|s| self.reveal(*s))
            .collect()
    }

    /// Whether `entry` would change any phase
    pub fn accepts(&self, entry: &ViewportEntry) -> bool {
        match entry {
            ViewportEntry::Entered(section) => {
                section.trigger() == RevealTrigger::OnViewportEntry && !self.is_visible(*section)
            }
            ViewportEntry::Unsupported => !self.is_complete(),
        }
    }

    pub fn handle(&mut self, entry: ViewportEntry) -> Vec<Section> {
        match entry {
            ViewportEntry::Entered(section)
                if section.trigger() == RevealTrigger::OnViewportEntry =>
            {
                if self.reveal(section) {
                    vec![section]
                } else {
                    Vec::new()
                }
            }
            ViewportEntry::Entered(_) => Vec::new(),
            ViewportEntry::Unsupported => self.reveal_all(),
        }
    }

    /// Make every remaining section visible
    pub fn reveal_all(&mut self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.reveal(*s))
            .collect()
    }

    fn reveal(&mut self, section: Section) -> bool {
        let phase = self.phases.entry(section).or_default();
        if *phase == RevealPhase::Visible {
            return false;
        }
        *phase = RevealPhase::Visible;
        self.fired += 1;
        tracing::trace!(section = %section, "Reveal fired");
        true
    }
}

impl RevealSink for RevealController {
    fn apply(&mut self, entry: ViewportEntry) -> Vec<Section> {
        self.handle(entry)
    }

    fn is_complete(&self) -> bool {
        RevealController::is_complete(self)
    }
}

/// How [`drive_reveals`] finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOutcome {
    /// Every section revealed through the observer
    Completed,
    /// Observer stopped early; `revealed` sections were force-revealed
    ObserverClosed { revealed: usize },
    /// Observer failed; `revealed` sections were force-revealed
    ObserverFailed { revealed: usize },
}

/// Feed observer entries into `sink` until every section is visible.
///
/// If the observer stops or fails first, the remaining sections are revealed
/// so no content stays hidden.
pub async fn drive_reveals<O, S>(observer: &mut O, sink: &mut S) -> DriveOutcome
where
    O: ViewportObserver,
    S: RevealSink,
{
    loop {
        if sink.is_complete() {
            return DriveOutcome::Completed;
        }

        match observer.next_entry().await {
            Ok(Some(entry)) => {
                for section in sink.apply(entry) {
                    tracing::debug!(section = %section, ?entry, "Section revealed");
                }
            }
            Ok(None) => {
                let revealed = sink.apply(ViewportEntry::Unsupported).len();
                tracing::warn!(revealed, "Viewport observer closed, revealing remaining sections");
                return DriveOutcome::ObserverClosed { revealed };
            }
            Err(e) => {
                let revealed = sink.apply(ViewportEntry::Unsupported).len();
                tracing::warn!(error = %e, revealed, "Viewport observer failed, revealing remaining sections");
                return DriveOutcome::ObserverFailed { revealed };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let controller = RevealController::new();
        for section in Section::ALL {
            assert_eq!(controller.phase(section), RevealPhase::Hidden);
        }
        assert_eq!(controller.fired_count(), 0);
        assert_eq!(controller.pending().len(), 7);
    }

    #[test]
    fn mount_reveals_hero_once() {
        let mut controller = RevealController::new();
        assert_eq!(controller.mount(), vec![Section::Hero]);
        assert!(controller.mount().is_empty());
        assert!(controller.is_visible(Section::Hero));
        assert_eq!(controller.fired_count(), 1);
    }

    #[test]
    fn entry_fires_once() {
        let mut controller = RevealController::new();
        let entry = ViewportEntry::Entered(Section::Skills);
        assert!(controller.accepts(&entry));
        assert_eq!(controller.handle(entry), vec![Section::Skills]);
        assert!(!controller.accepts(&entry));
        assert!(controller.handle(entry).is_empty());
        assert_eq!(controller.fired_count(), 1);
    }

    #[test]
    fn viewport_entry_ignored_for_hero() {
        let mut controller = RevealController::new();
        let entry = ViewportEntry::Entered(Section::Hero);
        assert!(!controller.accepts(&entry));
        assert!(controller.handle(entry).is_empty());
        assert!(!controller.is_visible(Section::Hero));
    }

    #[test]
    fn unsupported_reveals_everything() {
        let mut controller = RevealController::new();
        controller.mount();
        controller.handle(ViewportEntry::Entered(Section::About));
        let revealed = controller.handle(ViewportEntry::Unsupported);
        assert_eq!(revealed.len(), 6);
        assert!(controller.is_complete());
        assert!(!controller.accepts(&ViewportEntry::Unsupported));
        assert_eq!(controller.fired_count(), Section::ALL.len());
    }

    #[test]
    fn item_delays_step_by_stagger() {
        let motion = MotionSettings::default();
        assert_eq!(motion.item_delay(0), Duration::ZERO);
        assert_eq!(motion.item_delay(1), Duration::from_millis(200));
        assert_eq!(motion.item_delay(3), Duration::from_millis(600));
    }

    #[test]
    fn hidden_style_has_no_delay() {
        let style = MotionSettings::default().item_style(RevealPhase::Hidden, 4);
        assert_eq!(style.delay, Duration::ZERO);
        assert_eq!(style.keyframe, Keyframe::hidden(20.0));
    }

    #[test]
    fn visible_css() {
        let css = MotionSettings::default()
            .item_style(RevealPhase::Visible, 2)
            .to_css();
        assert_eq!(
            css,
            "opacity: 1; transform: translateY(0px); \
             transition: opacity 500ms cubic-bezier(0.33, 1, 0.68, 1) 400ms, \
             transform 500ms cubic-bezier(0.33, 1, 0.68, 1) 400ms;"
        );
    }

    #[test]
    fn hidden_css() {
        let css = MotionSettings::default()
            .section_style(RevealPhase::Hidden)
            .to_css();
        assert!(css.starts_with("opacity: 0; transform: translateY(20px);"));
    }

    #[test]
    fn instant_css_has_no_transition() {
        let css = MotionSettings::instant()
            .item_style(RevealPhase::Visible, 5)
            .to_css();
        assert_eq!(css, "opacity: 1; transform: translateY(0px); transition: none;");
    }

    #[test]
    fn sample_respects_delay_and_duration() {
        let motion = MotionSettings {
            easing: Easing::Linear,
            ..MotionSettings::default()
        };
        let hidden = motion.keyframe(RevealPhase::Hidden);
        let at = |ms: u64, index: usize| {
            motion.sample(
                RevealPhase::Hidden,
                RevealPhase::Visible,
                Duration::from_millis(ms),
                index,
            )
        };

        assert_eq!(at(0, 0), hidden);
        assert_eq!(at(200, 1), hidden);
        let mid = at(450, 1);
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!((mid.offset_y - 10.0).abs() < 1e-3);
        assert_eq!(at(700, 1), Keyframe::VISIBLE);
        assert_eq!(at(10_000, 1), Keyframe::VISIBLE);
    }

    #[test]
    fn instant_sample_is_end_state() {
        let motion = MotionSettings::instant();
        let kf = motion.sample(RevealPhase::Hidden, RevealPhase::Visible, Duration::ZERO, 7);
        assert_eq!(kf, Keyframe::VISIBLE);
    }

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
        assert_eq!(Easing::Instant.apply(0.0), 1.0);
        assert_eq!(Easing::Linear.apply(f32::NAN), 1.0);
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
    }
}
