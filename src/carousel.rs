//! The carousel engine.
//!
//! One `Carousel` per slider on a page. It owns the cursor, the view count
//! derived from the viewport, its auto-advance timer and the resize debounce,
//! and pushes a `Frame` to its renderer after every change.

use tracing::{debug, trace};

use crate::config::{CarouselConfig, DotMode};
use crate::engine::Render;
use crate::error::Result;
use crate::layout::{Frame, Geometry};
use crate::state::{AutoplayState, ResizePolicy};
use crate::timer::{Debounce, Interval};

pub struct Carousel<R: Render> {
    config: CarouselConfig,

    item_count: usize,
    items_in_view: usize,
    cursor: usize,
    viewport_width: u32,

    autoplay: Interval,
    resize: Debounce,
    pending_width: Option<u32>,
    hovered: bool,

    renderer: R,
}

impl<R: Render> Carousel<R> {
    pub fn new(config: CarouselConfig, viewport_width: u32, renderer: R) -> Result<Self> {
        config.validate()?;

        let mut autoplay = Interval::new(config.interval_secs);
        if config.autoplay {
            autoplay.start();
        }
        let resize = Debounce::new(config.resize_debounce_secs);
        let items_in_view = config.breakpoints.items_for(viewport_width);

        Ok(Self {
            config,
            item_count: 0,
            items_in_view,
            cursor: 0,
            viewport_width,
            autoplay,
            resize,
            pending_width: None,
            hovered: false,
            renderer,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_in_view(&self) -> usize {
        self.items_in_view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn max_cursor(&self) -> usize {
        self.item_count.saturating_sub(self.items_in_view)
    }

    pub fn dot_count(&self) -> usize {
        match self.config.dots {
            DotMode::Fixed(count) => count,
            DotMode::PerPosition => self.max_cursor() + 1,
        }
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Replace the item list (by count) and go back to the first card.
    pub fn set_items(&mut self, count: usize) -> Frame {
        debug!(count, items_in_view = self.items_in_view, "carousel items set");
        self.item_count = count;
        self.cursor = 0;
        self.render()
    }

    /// Apply the breakpoint table to `width` and return the new view count.
    pub fn recompute_items_in_view(&mut self, width: u32) -> usize {
        let previous = self.items_in_view;
        self.viewport_width = width;
        self.items_in_view = self.config.breakpoints.items_for(width);

        if previous != self.items_in_view {
            debug!(width, previous, items_in_view = self.items_in_view, "view count changed");
            if self.config.resize_policy == ResizePolicy::Reset {
                self.cursor = 0;
            }
        }
        // Clamp either way so the cursor never points past the last full view
        self.cursor = self.cursor.min(self.max_cursor());

        self.items_in_view
    }

    /// Move the cursor by `direction`, wrapping at both ends.
    pub fn step(&mut self, direction: i32) -> Frame {
        let max = self.max_cursor() as i64;
        let next = self.cursor as i64 + direction as i64;

        self.cursor = if next > max {
            0
        } else if next < 0 {
            max as usize
        } else {
            next as usize
        };
        debug!(direction, cursor = self.cursor, max, "carousel step");

        self.render()
    }

    /// Jump to the cursor position a dot stands for.
    pub fn jump_to_dot(&mut self, dot: usize) -> Frame {
        self.cursor = self.cursor_for_dot(dot);
        debug!(dot, cursor = self.cursor, "carousel jump");
        self.render()
    }

    /// Cursor value mapped from a dot index, proportionally over `[0, max]`.
    pub fn cursor_for_dot(&self, dot: usize) -> usize {
        let dots = self.dot_count();
        let max = self.max_cursor();
        if dots <= 1 || max == 0 {
            return 0;
        }
        let dot = dot.min(dots - 1);
        let cursor = (dot as f64 / (dots - 1) as f64 * max as f64).round() as usize;
        cursor.min(max)
    }

    pub fn active_dot(&self) -> usize {
        let dots = self.dot_count();
        let max = self.max_cursor().max(1);
        let dot = (self.cursor as f64 / max as f64 * dots as f64).floor() as usize;
        dot.min(dots.saturating_sub(1))
    }

    /// Current state, without notifying the renderer.
    pub fn frame(&self) -> Frame {
        Frame {
            cursor: self.cursor,
            max_cursor: self.max_cursor(),
            item_count: self.item_count,
            items_in_view: self.items_in_view,
            translation: self.config.layout.translate(
                self.cursor,
                self.items_in_view,
                self.viewport_width,
                &self.config.geometry,
            ),
            dot_count: self.dot_count(),
            active_dot: self.active_dot(),
        }
    }

    pub fn render(&mut self) -> Frame {
        let frame = self.frame();
        trace!(translation = %frame.translation, active_dot = frame.active_dot, "render");
        self.renderer.render(&frame);
        frame
    }

    /// Card and container sizes measured by the host.
    pub fn set_geometry(&mut self, geometry: Geometry) -> Frame {
        self.config.geometry = geometry;
        self.render()
    }

    // --- Manual navigation: same moves, but the auto-advance waits a full period again ---

    pub fn next(&mut self) -> Frame {
        self.autoplay.restart();
        self.step(1)
    }

    pub fn prev(&mut self) -> Frame {
        self.autoplay.restart();
        self.step(-1)
    }

    pub fn select_dot(&mut self, dot: usize) -> Frame {
        self.autoplay.restart();
        self.jump_to_dot(dot)
    }

    // --- Resize & timers ---

    /// Record a new viewport width; it is applied once resizing settles.
    pub fn resize(&mut self, width: u32) {
        self.pending_width = Some(width);
        self.resize.trigger();
    }

    /// Recompute the view count for `width` right away and re-render.
    pub fn apply_resize(&mut self, width: u32) -> Frame {
        self.resize.cancel();
        self.pending_width = None;
        self.recompute_items_in_view(width);
        self.render()
    }

    /// Advance both timers by `dt` seconds. Returns the number of auto steps taken.
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.resize.tick(dt) {
            if let Some(width) = self.pending_width.take() {
                self.apply_resize(width);
            }
        }

        let fired = self.autoplay.tick(dt);
        for _ in 0..fired {
            self.step(1);
        }
        fired
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if !self.config.pause_on_hover {
            return;
        }
        if hovered {
            self.autoplay.pause();
        } else {
            self.autoplay.resume();
        }
    }

    pub fn start_autoplay(&mut self) {
        self.autoplay.start();
        if self.hovered && self.config.pause_on_hover {
            self.autoplay.pause();
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Stop every timer. The carousel stays usable for manual navigation.
    pub fn teardown(&mut self) {
        debug!("carousel teardown");
        self.autoplay.stop();
        self.resize.cancel();
        self.pending_width = None;
    }
}
