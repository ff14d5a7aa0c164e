/// Instance compaction — turns a collection's instance list into the dense
/// visible-index lists the instanced draw path uploads.
///
/// The shader contract is an indirection: the record buffer holds one packed
/// record per instance (by index) and the visible-index list selects which
/// records the draw actually touches. Both buffers have a fixed capacity, so
/// a collection can produce at most `capacity` drawable instances per batch;
/// [`OverflowPolicy`](vantage_core::OverflowPolicy) decides whether the
/// overflow is dropped or drawn in further batches.
use crate::scene::culling::Frustum;
use crate::scene::instance::Instance;

/// One batch worth of culling output.
///
/// `start` is the offset of the window inside the collection; `indices` are
/// window-relative, so index `i` addresses record slot `i` of the batch's
/// record upload (`instances[start + i]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSlice {
    pub start: usize,
    pub indices: Vec<u32>,
}

impl BatchSlice {
    #[inline]
    pub fn visible_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Scans `instances` in storage order and returns the indices whose cached
/// AABB survives the frustum test.
///
/// Only the first `capacity` instances are considered: the record buffer the
/// indices address holds `capacity` records, so instances beyond it could
/// never be drawn. The overflow is silently truncated — a documented
/// limitation of the fixed-size upload buffer, not an error.
pub fn compact(instances: &[Instance], frustum: &Frustum, capacity: usize) -> Vec<u32> {
    instances
        .iter()
        .take(capacity)
        .enumerate()
        .filter(|(_, inst)| frustum.contains_aabb(inst.aabb()))
        .map(|(i, _)| i as u32)
        .collect()
}

/// Window-based compaction for [`OverflowPolicy::Split`]: every instance is
/// considered, producing one [`BatchSlice`] per `capacity`-sized window that
/// has at least one survivor.
pub fn compact_windows(
    instances: &[Instance],
    frustum: &Frustum,
    capacity: usize,
) -> Vec<BatchSlice> {
    instances
        .chunks(capacity.max(1))
        .enumerate()
        .map(|(w, window)| BatchSlice {
            start: w * capacity.max(1),
            indices: compact(window, frustum, capacity),
        })
        .filter(|slice| !slice.indices.is_empty())
        .collect()
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::instance::Material;
    use glam::{Mat4, Vec3};

    const CUBE_CORNERS: [Vec3; 8] = [
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(-0.5, -0.5, -0.5),
    ];

    fn cube_at(pos: Vec3) -> Instance {
        Instance::new(
            Mat4::from_translation(pos),
            Material::default(),
            &CUBE_CORNERS,
        )
    }

    /// Camera at (0,0,-5) looking down +Z with the window's 16:9 aspect.
    fn test_frustum() -> Frustum {
        Frustum::from_params(
            0.1,
            100.0,
            std::f32::consts::FRAC_PI_3,
            720.0 / 1280.0,
            &Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)),
        )
    }

    #[test]
    fn end_to_end_scene_culls_the_stray_cube() {
        // Three cubes as placed by the demo scene; the third sits behind the
        // camera's near plane and must be culled.
        let instances = vec![
            cube_at(Vec3::new(0.0, 0.0, 0.0)),
            cube_at(Vec3::new(2.0, 1.0, 2.0)),
            cube_at(Vec3::new(-8.8, 0.3, -8.8)),
        ];
        let visible = compact(&instances, &test_frustum(), 100);
        assert_eq!(visible, vec![0, 1]);
    }

    #[test]
    fn compaction_matches_independent_visibility() {
        let frustum = test_frustum();
        let instances: Vec<Instance> = (0..20)
            .map(|i| cube_at(Vec3::new(i as f32 * 2.0 - 10.0, 0.0, 4.0)))
            .collect();

        let visible = compact(&instances, &frustum, 100);
        let expected: Vec<u32> = instances
            .iter()
            .enumerate()
            .filter(|(_, inst)| frustum.contains_aabb(inst.aabb()))
            .map(|(i, _)| i as u32)
            .collect();
        assert_eq!(visible, expected);
        // Order is non-decreasing in original index.
        assert!(visible.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn truncation_caps_at_capacity() {
        let instances: Vec<Instance> = (0..7)
            .map(|i| cube_at(Vec3::new(0.0, 0.0, i as f32 * 0.1)))
            .collect();
        let visible = compact(&instances, &test_frustum(), 3);
        assert_eq!(visible, vec![0, 1, 2]);
    }

    #[test]
    fn zero_survivors_yield_empty_list() {
        let instances = vec![cube_at(Vec3::new(0.0, 0.0, -500.0))];
        assert!(compact(&instances, &test_frustum(), 100).is_empty());
    }

    #[test]
    fn split_windows_cover_every_visible_instance() {
        let frustum = test_frustum();
        let instances: Vec<Instance> = (0..7)
            .map(|i| cube_at(Vec3::new(0.0, 0.0, i as f32 * 0.1)))
            .collect();

        let slices = compact_windows(&instances, &frustum, 3);
        assert_eq!(slices.len(), 3); // 3 + 3 + 1
        assert_eq!(slices[0].start, 0);
        assert_eq!(slices[1].start, 3);
        assert_eq!(slices[2].start, 6);

        // Window-relative indices reassemble into the full visible set.
        let reassembled: Vec<u32> = slices
            .iter()
            .flat_map(|s| s.indices.iter().map(move |i| s.start as u32 + i))
            .collect();
        let unbounded = compact(&instances, &frustum, usize::MAX);
        assert_eq!(reassembled, unbounded);
    }

    #[test]
    fn split_skips_fully_culled_windows() {
        let frustum = test_frustum();
        let mut instances: Vec<Instance> =
            (0..3).map(|_| cube_at(Vec3::new(0.0, 0.0, -500.0))).collect();
        instances.push(cube_at(Vec3::ZERO));

        let slices = compact_windows(&instances, &frustum, 3);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].start, 3);
        assert_eq!(slices[0].indices, vec![0]);
    }
}
