use winit::dpi::PhysicalSize;

/// Rectangle of the render target that NDC maps onto, in physical pixels.
///
/// Tracks the drawable size: every resize replaces it with
/// `(0, 0, width, height)` of the new framebuffer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole framebuffer of `size`.
    #[inline]
    pub fn from_size(size: PhysicalSize<u32>) -> Self {
        Self::new(0.0, 0.0, size.width as f32, size.height as f32)
    }

    /// A zero-area viewport cannot be drawn into (e.g. minimized window).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_covers_whole_target() {
        let vp = Viewport::from_size(PhysicalSize::new(800, 600));
        assert_eq!(vp, Viewport::new(0.0, 0.0, 800.0, 600.0));
        assert!(vp.is_valid());
    }

    #[test]
    fn zero_area_is_invalid() {
        assert!(!Viewport::from_size(PhysicalSize::new(0, 600)).is_valid());
        assert!(!Viewport::from_size(PhysicalSize::new(800, 0)).is_valid());
    }
}
