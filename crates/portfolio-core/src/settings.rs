//! Site settings.
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::navigation::ScrollBehavior;
use crate::reveal::{Easing, MotionSettings};

const MAX_STAGGER_MS: u64 = 5_000;
const MAX_DURATION_MS: u64 = 10_000;
/// Larger margins can shrink the observed viewport to nothing
const MAX_TRIGGER_MARGIN_PX: u32 = 1_000;

/// Whether transitions animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    Full,
    /// Transitions complete instantly and scrolling jumps
    Reduced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub motion: MotionPreference,
    pub reveal_duration_ms: u64,
    /// Delay between consecutive staggered items
    pub stagger_ms: u64,
    /// Downward offset of hidden content
    pub hidden_offset_px: f32,
    /// How far a section must be inside the viewport before it reveals
    pub trigger_margin_px: u32,
    pub easing: Easing,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            motion: MotionPreference::Full,
            reveal_duration_ms: 500,
            stagger_ms: 200,
            hidden_offset_px: 20.0,
            trigger_margin_px: 100,
            easing: Easing::EaseOut,
        }
    }
}

impl SiteSettings {
    pub fn from_json_str(json: &str) -> PortfolioResult<Self> {
        let settings: SiteSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), motion = ?settings.motion, "Loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        if !self.hidden_offset_px.is_finite() || self.hidden_offset_px < 0.0 {
            return Err(PortfolioError::InvalidSettings(format!(
                "hidden_offset_px must be a non-negative number, got {}",
                self.hidden_offset_px
            )));
        }
        if self.stagger_ms > MAX_STAGGER_MS {
            return Err(PortfolioError::InvalidSettings(format!(
                "stagger_ms must be at most {MAX_STAGGER_MS}, got {}",
                self.stagger_ms
            )));
        }
        if self.reveal_duration_ms > MAX_DURATION_MS {
            return Err(PortfolioError::InvalidSettings(format!(
                "reveal_duration_ms must be at most {MAX_DURATION_MS}, got {}",
                self.reveal_duration_ms
            )));
        }
        if self.trigger_margin_px > MAX_TRIGGER_MARGIN_PX {
            return Err(PortfolioError::InvalidSettings(format!(
                "trigger_margin_px must be at most {MAX_TRIGGER_MARGIN_PX}, got {}",
                self.trigger_margin_px
            )));
        }
        Ok(())
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion == MotionPreference::Reduced
    }

    pub fn motion_settings(&self) -> MotionSettings {
        if self.reduced_motion() {
            return MotionSettings::instant();
        }
        MotionSettings {
            duration: Duration::from_millis(self.reveal_duration_ms),
            stagger: Duration::from_millis(self.stagger_ms),
            easing: self.easing,
            hidden_offset: self.hidden_offset_px,
        }
    }

    pub fn scroll_behavior(&self) -> ScrollBehavior {
        if self.reduced_motion() {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        }
    }
}
