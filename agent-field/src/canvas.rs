//! Drawing surface abstraction. Everything the field draws goes through
//! [`Canvas`] in logical coordinates; implementors apply the scale transform.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

pub trait Canvas {
    /// Resize the backing store, in physical pixels. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Set the logical-to-physical scale applied to every later draw call.
    fn set_transform(&mut self, scale: f32);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Stroke every segment with a 1-unit line, as a single batched call.
    fn stroke_path(&mut self, segments: &[Segment], color: Rgba);
}
