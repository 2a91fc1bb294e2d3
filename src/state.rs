#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoplayState {
    Running, // Timer accumulates and fires steps
    Paused,  // Pointer is over the carousel, time is frozen
    Stopped, // Timer cleared (teardown, or never started)
}

/// What happens to the cursor when a resize changes the items-in-view count.
#[derive(Debug, PartialEq, Clone, Copy, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Keep the cursor, pulled back inside the new range.
    #[default]
    Clamp,
    /// Go back to the first card whenever the view count changes.
    Reset,
}
