use crate::layout::Frame;

/// Receives every frame a carousel produces. This is where a host binds the
/// engine to its view (DOM transform, terminal line, test recorder).
pub trait Render {
    fn render(&mut self, frame: &Frame);
}

impl<F> Render for F
where
    F: FnMut(&Frame),
{
    fn render(&mut self, frame: &Frame) {
        self(frame)
    }
}

/// Renderer for carousels nobody draws.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Render for Headless {
    fn render(&mut self, _frame: &Frame) {}
}

/// Keeps every rendered frame in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub frames: Vec<Frame>,
}

impl Recorder {
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn cursors(&self) -> Vec<usize> {
        self.frames.iter().map(|frame| frame.cursor).collect()
    }
}

impl Render for Recorder {
    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
