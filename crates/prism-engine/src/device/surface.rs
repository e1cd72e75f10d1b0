//! Surface policy helpers. Kept free of live GPU objects so they can be tested.

use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the surface format.
///
/// With `prefer_srgb` an sRGB format wins, otherwise a linear one does; if the
/// preferred kind is missing the first advertised format is used.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb)
        .or_else(|| formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies `new_size` to `config`.
///
/// Returns `true` when the surface must be reconfigured. wgpu rejects a 0x0
/// surface, so a zero dimension leaves `config` untouched.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    new_size: PhysicalSize<u32>,
) -> bool {
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Fmt};

    fn config(width: u32, height: u32) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: Fmt::Bgra8Unorm,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Alpha::Opaque,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn linear_format_preferred_by_default() {
        let formats = [Fmt::Bgra8UnormSrgb, Fmt::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn srgb_format_when_requested() {
        let formats = [Fmt::Rgba8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Rgba8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(choose_surface_format(&[Fmt::Bgra8UnormSrgb], false), Some(Fmt::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&[], false), None);
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn unsupported_alpha_request_is_ignored() {
        let supported = [Alpha::Opaque];
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PreMultiplied)), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::Opaque)), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&[], None), Alpha::Auto);
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_updates_config() {
        let mut cfg = config(800, 600);
        assert!(apply_resize(&mut cfg, PhysicalSize::new(1024, 768)));
        assert_eq!((cfg.width, cfg.height), (1024, 768));
    }

    #[test]
    fn zero_resize_defers_configuration() {
        let mut cfg = config(800, 600);
        assert!(!apply_resize(&mut cfg, PhysicalSize::new(0, 0)));
        assert_eq!((cfg.width, cfg.height), (800, 600));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn surface_errors_map_to_actions() {
        use wgpu::SurfaceError as E;
        assert_eq!(classify_surface_error(&E::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&E::Other), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&E::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
