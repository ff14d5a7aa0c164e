//! Renderer configuration.
//!
//! All the numeric knobs that the render pipeline treats as constants during
//! a frame live here, so applications tune them in one place instead of
//! hunting through the draw code.

/// What to do when a collection has more visible instances than fit in one
/// per-batch upload buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep the first `max_instances` instances and drop the rest for this
    /// frame (logged, never fatal). One draw call per collection.
    Truncate,
    /// Process the collection in windows of `max_instances` and emit one
    /// draw call per window, so every visible instance is drawn.
    Split,
}

/// Tunable renderer parameters.
///
/// | Field           | Effect                                              |
/// |-----------------|-----------------------------------------------------|
/// | `znear`/`zfar`  | clipping-range extremes; also bound the frustum     |
/// | `fov`           | horizontal field of view — the frustum cone angle   |
/// | `max_instances` | batch size ceiling, bounded by the upload buffer    |
/// | `max_lights`    | lights uploaded per frame; extra lights are ignored |
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Horizontal field of view in radians. The vertical extent is derived
    /// from this and the viewport aspect ratio.
    pub fov: f32,
    /// Maximum instances a single batch upload can carry. Values above the
    /// shader-side array bound are clamped at renderer construction.
    pub max_instances: usize,
    /// Maximum simultaneous lights per frame, clamped likewise.
    pub max_lights: usize,
    /// Behavior when visible instances exceed `max_instances`.
    pub overflow: OverflowPolicy,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            znear: 0.1,
            zfar: 100.0,
            fov: std::f32::consts::FRAC_PI_3,
            max_instances: 100,
            max_lights: 10,
            overflow: OverflowPolicy::Truncate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let cfg = RendererConfig::default();
        assert_eq!(cfg.max_instances, 100);
        assert_eq!(cfg.max_lights, 10);
        assert_eq!(cfg.overflow, OverflowPolicy::Truncate);
        assert!(cfg.znear < cfg.zfar);
    }
}
