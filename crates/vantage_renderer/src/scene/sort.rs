/// Back-to-front ordering for transparent instances.
///
/// Alpha blending composites correctly only when farther surfaces are drawn
/// first. Each instance gets a camera-space depth proxy and the collection
/// is drawn in descending-depth order; the ordering is applied to the
/// visible-index list before upload so the GPU walks the instances
/// farthest-first.
use std::cmp::Ordering;

use glam::{Mat4, Vec4};

use crate::scene::instance::Instance;

/// Depth keys never sink below this floor: instances at or behind the camera
/// all tie here instead of producing an undefined ordering, and anything
/// farther than the floor ties too, keeping its insertion order. Matches the
/// planar geometry this proxy is built for.
const DEPTH_FLOOR: f32 = 0.1;

/// Camera-space depth proxy for one world transform: the minimum Z among the
/// four local XY-plane corners `(±1, ±1, 0)`, seeded with [`DEPTH_FLOOR`].
pub fn depth_key(world: &Mat4, view: &Mat4) -> f32 {
    let mut depth = DEPTH_FLOOR;
    for j in 0..4u32 {
        let corner = Vec4::new(
            -1.0 + 2.0 * (j % 2) as f32,
            -1.0 + 2.0 * (j / 2) as f32,
            0.0,
            1.0,
        );
        let z = (*view * *world * corner).z;
        depth = depth.min(z);
    }
    depth
}

/// Produces the draw order for a transparent collection: indices into
/// `instances`, farthest first.
///
/// The sort is stable, so instances with identical depth keys keep their
/// insertion order — two coplanar quads never flicker between frames.
pub fn sort_back_to_front(instances: &[Instance], camera_world: &Mat4) -> Vec<usize> {
    let view = camera_world.inverse();
    let mut keyed: Vec<(usize, f32)> = instances
        .iter()
        .enumerate()
        .map(|(i, inst)| (i, depth_key(inst.transform(), &view)))
        .collect();
    // Descending by depth; stable for ties.
    keyed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(i, _)| i).collect()
}

/// Reorders a compacted visible-index list by a draw order.
///
/// Walks `order` and keeps the entries that survived compaction, so the
/// uploaded list is both culled and depth-sorted.
pub fn apply_order(visible: &[u32], order: &[usize]) -> Vec<u32> {
    order
        .iter()
        .map(|&i| i as u32)
        .filter(|i| visible.contains(i))
        .collect()
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::instance::Material;
    use glam::Vec3;

    const PLANE_CORNERS: [Vec3; 4] = [
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(-1.0, -1.0, 0.0),
    ];

    fn plane(world: Mat4) -> Instance {
        Instance::new(world, Material::default(), &PLANE_CORNERS)
    }

    #[test]
    fn farther_plane_draws_first() {
        // The demo scene's two transparent quads: one just behind the camera
        // plane, one farther ahead and scaled. The far one clamps to the
        // depth floor, the near one goes negative, so the far one leads.
        let near = plane(Mat4::from_translation(Vec3::new(-2.125, 1.0, -1.25)));
        let far = plane(
            Mat4::from_translation(Vec3::new(-1.125, 1.0, 3.25)) * Mat4::from_scale(Vec3::splat(2.0)),
        );

        let order = sort_back_to_front(&[near, far], &Mat4::IDENTITY);
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn behind_camera_instances_tie_at_the_floor() {
        // One plane behind the camera, one far ahead: the far one clamps to
        // the floor, the behind one goes negative, so the far one leads.
        let behind = plane(Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0)));
        let ahead = plane(Mat4::from_translation(Vec3::new(0.0, 0.0, 30.0)));
        let order = sort_back_to_front(&[behind.clone(), ahead.clone()], &Mat4::IDENTITY);
        assert_eq!(order, vec![1, 0]);

        // Reversed input, same conclusion.
        let order = sort_back_to_front(&[ahead, behind], &Mat4::IDENTITY);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn equal_depths_keep_insertion_order() {
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, 4.0));
        let instances = vec![plane(world), plane(world), plane(world)];
        for _ in 0..5 {
            assert_eq!(
                sort_back_to_front(&instances, &Mat4::IDENTITY),
                vec![0, 1, 2]
            );
        }
    }

    #[test]
    fn order_applies_to_compacted_indices() {
        // Visible set {0, 2, 3} drawn in order 3, 1, 0, 2 → upload 3, 0, 2.
        assert_eq!(apply_order(&[0, 2, 3], &[3, 1, 0, 2]), vec![3, 0, 2]);
    }

    #[test]
    fn rotated_plane_uses_nearest_corner() {
        // A quad rotated about Y spans a depth range; once its nearest corner
        // dips below the floor, that corner is the key — not the center.
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, 0.5))
            * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4);
        let key = depth_key(&world, &Mat4::IDENTITY);
        let half_span = std::f32::consts::FRAC_PI_4.sin();
        assert!((key - (0.5 - half_span)).abs() < 1e-4);
    }

    #[test]
    fn planes_beyond_the_floor_tie_there() {
        let a = plane(Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)));
        let b = plane(Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)));
        let view = Mat4::IDENTITY;
        assert_eq!(depth_key(a.transform(), &view), DEPTH_FLOOR);
        assert_eq!(depth_key(b.transform(), &view), DEPTH_FLOOR);
        // Tie → insertion order wins, deterministically.
        assert_eq!(sort_back_to_front(&[a, b], &Mat4::IDENTITY), vec![0, 1]);
    }
}
