pub const FPS: u32 = 60;                      // Frames per second of the simulation loop
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const DEFAULT_DOT_COUNT: usize = 3;       // Proportional position markers under each carousel
pub const DEFAULT_GAP: f32 = 20.0;            // Gap between cards when the stylesheet gives none (px)

pub const AUTO_ADVANCE_INTERVAL: f32 = 5.0;   // Default auto-advance period (seconds)
pub const VIDEO_ADVANCE_INTERVAL: f32 = 3.0;  // Video strip advances faster (seconds)
pub const RESIZE_DEBOUNCE: f32 = 0.25;        // Quiet time after the last resize before recomputing (seconds)

pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";
pub const ALL_CATEGORY: &str = "all";
