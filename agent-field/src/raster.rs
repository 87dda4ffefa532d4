use crate::{Canvas, Point, Rect, Rgba, Segment};

/// Software canvas over a row-major RGBA8 buffer in physical pixels.
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    scale: f32,
    frame: Vec<u8>,
}

impl RasterCanvas {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            scale: 1.0,
            frame: vec![],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixel_index(x as i64, y as i64).map(|index| {
            let mut result = [0; 4];
            result.copy_from_slice(&self.frame[index..index + 4]);
            result
        })
    }

    fn pixel_index(&self, x: i64, y: i64) -> Option<usize> {
        if (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y) {
            Some(4 * (y as usize * self.width as usize + x as usize))
        } else {
            None
        }
    }

    fn blend_at(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(index) = self.pixel_index(x, y) {
            blend_over(&mut self.frame[index..index + 4], color);
        }
    }

    fn to_physical(&self, point: Point) -> (i64, i64) {
        (
            (point.x * self.scale).round() as i64,
            (point.y * self.scale).round() as i64,
        )
    }

    fn line_thickness(&self) -> i64 {
        (self.scale.round() as i64).max(1)
    }

    // Bresenham; each step along the major axis paints a span of `thickness`
    // pixels across it, so no pixel is blended twice for one segment.
    fn stroke_segment(&mut self, segment: Segment, color: Rgba) {
        let (mut x, mut y) = self.to_physical(segment.from);
        let (x_end, y_end) = self.to_physical(segment.to);
        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        let step_x = if x < x_end { 1 } else { -1 };
        let step_y = if y < y_end { 1 } else { -1 };
        let x_major = dx >= -dy;
        let thickness = self.line_thickness();
        let span_start = -(thickness - 1) / 2;

        let mut error = dx + dy;
        loop {
            for offset in span_start..span_start + thickness {
                if x_major {
                    self.blend_at(x, y + offset, color);
                } else {
                    self.blend_at(x + offset, y, color);
                }
            }
            if x == x_end && y == y_end {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }
}

impl Default for RasterCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RasterCanvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.frame = [0, 0, 0, 0xff].repeat(width as usize * height as usize);
    }

    fn set_transform(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let (left, top) = self.to_physical(Point::new(rect.x, rect.y));
        let far_corner = Point::new(rect.x + rect.width, rect.y + rect.height);
        let (right, bottom) = self.to_physical(far_corner);
        let left = left.max(0);
        let top = top.max(0);
        let right = right.min(self.width as i64);
        let bottom = bottom.min(self.height as i64);

        for y in top..bottom {
            for x in left..right {
                self.blend_at(x, y, color);
            }
        }
    }

    fn stroke_path(&mut self, segments: &[Segment], color: Rgba) {
        for segment in segments {
            self.stroke_segment(*segment, color);
        }
    }
}

// Source-over onto an opaque destination.
// From https://en.wikipedia.org/wiki/Alpha_compositing
fn blend_over(below: &mut [u8], above: Rgba) {
    let alpha = if above.a.is_nan() {
        0.0
    } else {
        above.a.clamp(0.0, 1.0)
    };
    if alpha == 0.0 {
        return;
    }

    for (channel, above) in below.iter_mut().zip([above.r, above.g, above.b]) {
        let blended = above as f32 * alpha + *channel as f32 * (1.0 - alpha);
        *channel = blended.round() as u8;
    }
    below[3] = 0xff;
}
