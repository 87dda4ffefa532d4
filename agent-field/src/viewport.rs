use crate::Bounds;

pub const MIN_PIXEL_RATIO: f64 = 1.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// What the host window reports on resize: its size in logical units and its
/// device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowMetrics {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl WindowMetrics {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// From a physical pixel size and the window's scale factor.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new(
            width as f64 / scale_factor,
            height as f64 / scale_factor,
            scale_factor,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    logical_width: u32,
    logical_height: u32,
    pixel_ratio: f64,
}

impl Viewport {
    pub fn from_window(window: WindowMetrics) -> Self {
        Self {
            logical_width: floor_to_u32(window.width),
            logical_height: floor_to_u32(window.height),
            pixel_ratio: Self::clamp_pixel_ratio(window.device_pixel_ratio),
        }
    }

    fn clamp_pixel_ratio(ratio: f64) -> f64 {
        if ratio.is_nan() {
            MIN_PIXEL_RATIO
        } else {
            ratio.clamp(MIN_PIXEL_RATIO, MAX_PIXEL_RATIO)
        }
    }

    pub fn logical_width(&self) -> u32 {
        self.logical_width
    }

    pub fn logical_height(&self) -> u32 {
        self.logical_height
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.logical_width as f32, self.logical_height as f32)
    }

    /// Backing-store size in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            floor_to_u32(self.logical_width as f64 * self.pixel_ratio),
            floor_to_u32(self.logical_height as f64 * self.pixel_ratio),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.logical_width == 0 || self.logical_height == 0
    }
}

// `as` saturates, so negative and NaN sizes become 0.
fn floor_to_u32(value: f64) -> u32 {
    value.floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_clamped() {
        let ratio = |dpr| Viewport::from_window(WindowMetrics::new(10.0, 10.0, dpr)).pixel_ratio();
        assert_eq!(ratio(0.5), 1.0);
        assert_eq!(ratio(0.0), 1.0);
        assert_eq!(ratio(1.5), 1.5);
        assert_eq!(ratio(3.0), 2.0);
        assert_eq!(ratio(f64::INFINITY), 2.0);
        assert_eq!(ratio(f64::NAN), 1.0);
    }

    #[test]
    fn logical_size_is_floored() {
        let viewport = Viewport::from_window(WindowMetrics::new(800.7, 600.2, 1.0));
        assert_eq!(viewport.logical_width(), 800);
        assert_eq!(viewport.logical_height(), 600);
        assert_eq!(viewport.bounds(), Bounds::new(800.0, 600.0));
    }

    #[test]
    fn backing_size_scales_by_ratio() {
        let viewport = Viewport::from_window(WindowMetrics::new(801.0, 451.0, 1.5));
        assert_eq!(viewport.backing_size(), (1201, 676));
    }

    #[test]
    fn negative_size_becomes_empty() {
        let viewport = Viewport::from_window(WindowMetrics::new(-20.0, 100.0, 1.0));
        assert_eq!(viewport.logical_width(), 0);
        assert!(viewport.is_empty());
    }

    #[test]
    fn physical_metrics_convert_to_logical() {
        let window = WindowMetrics::from_physical(2560, 1440, 2.0);
        assert_eq!(window, WindowMetrics::new(1280.0, 720.0, 2.0));
    }
}
