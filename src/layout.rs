use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GAP;

/// How the track is shifted to bring the cursor card into view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TrackLayout {
    /// Cursor card aligned to the left edge, pixel offsets.
    Aligned,
    /// Cursor card centered in the container, pixel offsets.
    Centered,
    /// Cards sized to `100 / V` percent, offsets in percent.
    Percent,
    /// Centered below `centered_below` viewport width, aligned above it.
    Adaptive { centered_below: u32 },
}

/// Measured sizes of the track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub card_size: f32,
    pub gap: f32,
    pub container_width: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            card_size: 0.0,
            gap: DEFAULT_GAP,
            container_width: 0.0,
        }
    }
}

impl Geometry {
    fn stride(&self) -> f32 {
        self.card_size + self.gap
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Translation {
    Pixels(f32),
    Percent { offset: f32, card_width: f32 },
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Pixels(px) => write!(f, "translateX({}px)", px),
            Translation::Percent { offset, .. } => write!(f, "translateX({}%)", offset),
        }
    }
}

impl TrackLayout {
    pub fn translate(
        &self,
        cursor: usize,
        items_in_view: usize,
        viewport_width: u32,
        geometry: &Geometry,
    ) -> Translation {
        let c = cursor as f32;
        match *self {
            TrackLayout::Aligned => Translation::Pixels(-(c * geometry.stride())),
            TrackLayout::Centered => {
                let center = geometry.container_width / 2.0 - geometry.card_size / 2.0;
                Translation::Pixels(center - c * geometry.stride())
            }
            TrackLayout::Percent => {
                let card_width = 100.0 / items_in_view.max(1) as f32;
                Translation::Percent {
                    offset: -(c * card_width),
                    card_width,
                }
            }
            TrackLayout::Adaptive { centered_below } => {
                let layout = if viewport_width < centered_below {
                    TrackLayout::Centered
                } else {
                    TrackLayout::Aligned
                };
                layout.translate(cursor, items_in_view, viewport_width, geometry)
            }
        }
    }
}

/// Everything a view needs to draw one carousel state.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub cursor: usize,
    pub max_cursor: usize,
    pub item_count: usize,
    pub items_in_view: usize,
    pub translation: Translation,
    pub dot_count: usize,
    pub active_dot: usize,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Activity flag per dot, in order.
    pub fn dots(&self) -> Vec<bool> {
        (0..self.dot_count).map(|i| i == self.active_dot).collect()
    }

    /// Indexes of the cards currently inside the view.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.cursor + self.items_in_view).min(self.item_count);
        self.cursor.min(end)..end
    }
}
