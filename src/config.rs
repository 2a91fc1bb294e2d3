//! Carousel and pager configuration.
//!
//! Every page instantiates the engine from a named preset; a JSON file can
//! override any field, and the CLI can override a few more on top.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Error, Result};
use crate::layout::{Geometry, TrackLayout};
use crate::state::ResizePolicy;
use crate::viewport::Breakpoints;

/// How many dots sit under the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotMode {
    /// A fixed number of proportional markers.
    Fixed(usize),
    /// One dot per reachable cursor position (hero slider).
    PerPosition,
}

impl Default for DotMode {
    fn default() -> Self {
        DotMode::Fixed(DEFAULT_DOT_COUNT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    pub dots: DotMode,
    pub autoplay: bool,
    pub interval_secs: f32,
    pub pause_on_hover: bool,
    pub layout: TrackLayout,
    pub geometry: Geometry,
    pub resize_policy: ResizePolicy,
    pub resize_debounce_secs: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::fixed(3),
            dots: DotMode::default(),
            autoplay: true,
            interval_secs: AUTO_ADVANCE_INTERVAL,
            pause_on_hover: false,
            layout: TrackLayout::Aligned,
            geometry: Geometry::default(),
            resize_policy: ResizePolicy::Clamp,
            resize_debounce_secs: RESIZE_DEBOUNCE,
        }
    }
}

impl CarouselConfig {
    pub fn preset(name: &str) -> Result<Self> {
        let breakpoints = Breakpoints::preset(name)?;
        let config = match name {
            "positions" => Self {
                breakpoints,
                layout: TrackLayout::Adaptive { centered_below: 600 },
                ..Self::default()
            },
            "videos" => Self {
                breakpoints,
                interval_secs: VIDEO_ADVANCE_INTERVAL,
                pause_on_hover: true,
                layout: TrackLayout::Percent,
                resize_policy: ResizePolicy::Reset,
                ..Self::default()
            },
            "hero" => Self {
                breakpoints,
                dots: DotMode::PerPosition,
                pause_on_hover: true,
                layout: TrackLayout::Percent,
                ..Self::default()
            },
            "compact" => Self {
                breakpoints,
                ..Self::default()
            },
            "strip" => Self {
                breakpoints,
                interval_secs: 6.0,
                ..Self::default()
            },
            other => return Err(Error::UnknownPreset(other.to_string())),
        };
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.breakpoints.validate()?;
        if self.dots == DotMode::Fixed(0) {
            return Err(Error::config("dot count must be at least 1"));
        }

        let floats = [
            ("interval_secs", self.interval_secs),
            ("resize_debounce_secs", self.resize_debounce_secs),
            ("geometry.card_size", self.geometry.card_size),
            ("geometry.gap", self.geometry.gap),
            ("geometry.container_width", self.geometry.container_width),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(Error::config(format!("{name} must be finite, got {value}")));
            }
        }

        // One step per frame at most
        if self.autoplay && self.interval_secs < FRAME_TIME {
            return Err(Error::config(format!(
                "auto-advance interval must be at least {FRAME_TIME}s, got {}",
                self.interval_secs
            )));
        }
        if self.resize_debounce_secs < 0.0 {
            return Err(Error::config("resize debounce cannot be negative"));
        }
        if self.geometry.card_size < 0.0 || self.geometry.gap < 0.0 {
            return Err(Error::config("card size and gap cannot be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Batch size per viewport width.
    pub batch: Breakpoints,
}

impl PagerConfig {
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "photos" | "faculty" => Ok(Self {
                batch: Breakpoints::preset(name)?,
            }),
            other => Err(Error::UnknownPreset(other.to_string())),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.batch.validate()?;
        Ok(config)
    }
}
