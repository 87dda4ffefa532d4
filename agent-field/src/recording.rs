use crate::{Canvas, Rect, Rgba, Segment};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize { width: u32, height: u32 },
    SetTransform { scale: f32 },
    FillRect { rect: Rect, color: Rgba },
    StrokePath { segments: Vec<Segment>, color: Rgba },
}

/// A canvas that keeps the draw calls it receives instead of rasterizing
/// them. Useful for headless hosts and for inspecting a frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn fill_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillRect { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::StrokePath { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(DrawCall::Resize { width, height });
    }

    fn set_transform(&mut self, scale: f32) {
        self.calls.push(DrawCall::SetTransform { scale });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_path(&mut self, segments: &[Segment], color: Rgba) {
        self.calls.push(DrawCall::StrokePath {
            segments: segments.to_vec(),
            color,
        });
    }
}
