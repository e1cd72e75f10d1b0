/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// Values are written to the render target as-is; on a non-sRGB surface a
/// component `c` lands in the framebuffer as `round(c * 255)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// 8-bit quantization of the clamped color, as stored by a `*8Unorm` target.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        let q = |v: f32| (v * 255.0).round() as u8;
        [q(c.r), q(c.g), q(c.b), q(c.a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_like_an_unorm_target() {
        assert_eq!(Color::rgba(0.2, 0.3, 0.3, 1.0).to_rgba8(), [51, 77, 77, 255]);
        assert_eq!(Color::rgba(1.0, 0.5, 0.2, 1.0).to_rgba8(), [255, 128, 51, 255]);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(Color::rgba(-1.0, 2.0, 0.0, 1.5).to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn converts_to_wgpu_color() {
        let c: wgpu::Color = Color::rgb(0.2, 0.3, 0.3).into();
        assert!((c.r - 0.2).abs() < 1e-6);
        assert!((c.g - 0.3).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}
