/// Frustum culling — CPU-side visibility test for axis-aligned bounding boxes.
///
/// ## Algorithm
///
/// The frustum is built geometrically: the four near-plane and four far-plane
/// corners are computed in camera space from `tan(fov/2)` half-extents, moved
/// into world space by the camera's world transform, and each of the six
/// faces becomes a plane `Vec4(nx, ny, nz, d)` with the normal pointing into
/// the view volume.
///
/// For an AABB to be **completely outside** one plane it is sufficient to
/// show that its *positive vertex* (the corner farthest along the plane's
/// normal) has a negative signed distance to the plane.  If no such plane
/// exists, the AABB is considered **visible**.  This is O(6) per object and
/// cheap enough to run on the CPU every frame before batches are built.
use glam::{Mat4, Vec3, Vec4};

use vantage_core::Camera;

// ── AABB ─────────────────────────────────────────────────────────────────────

/// World-space axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    /// Degenerate box at the origin — the state of an instance before its
    /// first update with a non-empty support set.
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Computes the world-space box bounding `support_points` under `world`.
    ///
    /// Returns `None` for an empty support set; callers keep their previous
    /// box in that case rather than collapsing it.
    pub fn from_support_points(support_points: &[Vec3], world: &Mat4) -> Option<Self> {
        let mut points = support_points.iter();
        let first = world.transform_point3(*points.next()?);
        let mut aabb = Self {
            min: first,
            max: first,
        };
        for p in points {
            let v = world.transform_point3(*p);
            aabb.min = aabb.min.min(v);
            aabb.max = aabb.max.max(v);
        }
        Some(aabb)
    }
}

// ── Frustum ──────────────────────────────────────────────────────────────────

/// Six planes bounding the view volume.
///
/// Plane order is far, near, then the four side faces; the order carries no
/// meaning beyond being tested exhaustively.  Each plane satisfies
/// `dot(normal, p) + d >= 0` for points inside the volume.
#[derive(Clone, Debug)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    /// Builds the frustum for the camera's current transform and projection
    /// parameters.
    pub fn from_camera(camera: &Camera) -> Self {
        Self::from_params(
            camera.znear,
            camera.zfar,
            camera.fov,
            camera.aspect,
            &camera.transform,
        )
    }

    /// Builds the frustum from raw projection parameters.
    ///
    /// `fov` is the horizontal field of view; `aspect` (`height / width`)
    /// scales the vertical extent.  `camera_world` maps camera space (with
    /// `+Z` forward) to world space.
    pub fn from_params(near: f32, far: f32, fov: f32, aspect: f32, camera_world: &Mat4) -> Self {
        let face = |dist: f32| -> [Vec3; 4] {
            let hw = dist * (fov * 0.5).tan();
            let hh = hw * aspect;
            [
                Vec3::new(hw, hh, dist),
                Vec3::new(-hw, hh, dist),
                Vec3::new(-hw, -hh, dist),
                Vec3::new(hw, -hh, dist),
            ]
            .map(|p| camera_world.transform_point3(p))
        };
        let n = face(near);
        let f = face(far);

        // Quad windings chosen so every normal points into the volume.
        let planes = [
            plane(f[3], f[2], f[1], f[0]), // far
            plane(n[0], n[1], n[2], n[3]), // near
            plane(f[0], f[1], n[1], n[0]), // top
            plane(f[1], f[2], n[2], n[1]), // left
            plane(f[2], f[3], n[3], n[2]), // bottom
            plane(f[3], f[0], n[0], n[3]), // right
        ];
        Self { planes }
    }

    /// Returns `true` if the AABB **might** intersect the view volume.
    ///
    /// Conservative: false positives are possible near plane corners, false
    /// negatives are not.  Rejection short-circuits on the first separating
    /// plane.
    #[inline]
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            // Positive vertex: the corner maximizing dot(normal, v).
            let p = Vec4::new(
                if plane.x < 0.0 { aabb.min.x } else { aabb.max.x },
                if plane.y < 0.0 { aabb.min.y } else { aabb.max.y },
                if plane.z < 0.0 { aabb.min.z } else { aabb.max.z },
                1.0,
            );
            if plane.dot(p) < 0.0 {
                return false; // completely outside this plane
            }
        }
        true
    }
}

/// Plane through a quad: normal from two edges, distance from the centroid.
fn plane(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Vec4 {
    let normal = (p1 - p0).cross(p3 - p0).normalize();
    let centroid = (p0 + p1 + p2 + p3) * 0.25;
    normal.extend(-normal.dot(centroid))
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::new(center - Vec3::splat(0.5), center + Vec3::splat(0.5))
    }

    #[test]
    fn aabb_bounds_transformed_support_points() {
        let points = [
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(-0.5, -0.5, -0.5),
        ];
        let world = Mat4::from_rotation_y(0.8) * Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let aabb = Aabb::from_support_points(&points, &world).unwrap();

        let first = world.transform_point3(points[0]);
        let mut touched_min = first;
        let mut touched_max = first;
        for p in points {
            let v = world.transform_point3(p);
            assert!(v.cmpge(aabb.min - 1e-5).all() && v.cmple(aabb.max + 1e-5).all());
            touched_min = touched_min.min(v);
            touched_max = touched_max.max(v);
        }
        // Tight: every face is touched by at least one transformed point.
        assert!(aabb.min.abs_diff_eq(touched_min, 1e-5));
        assert!(aabb.max.abs_diff_eq(touched_max, 1e-5));
    }

    #[test]
    fn empty_support_set_yields_none() {
        assert!(Aabb::from_support_points(&[], &Mat4::IDENTITY).is_none());
    }

    #[test]
    fn point_between_near_and_far_is_visible() {
        // Camera at the origin looking down +Z.
        let frustum = Frustum::from_params(0.1, 100.0, std::f32::consts::FRAC_PI_3, 0.5625, &Mat4::IDENTITY);
        let near_box = Aabb::new(Vec3::new(-0.01, -0.01, 5.0), Vec3::new(0.01, 0.01, 5.02));
        assert!(frustum.contains_aabb(&near_box));

        let beyond_far = Aabb::new(Vec3::new(-0.01, -0.01, 150.0), Vec3::new(0.01, 0.01, 150.02));
        assert!(!frustum.contains_aabb(&beyond_far));
    }

    #[test]
    fn box_behind_camera_is_culled() {
        let frustum = Frustum::from_params(0.1, 100.0, std::f32::consts::FRAC_PI_3, 0.5625, &Mat4::IDENTITY);
        assert!(!frustum.contains_aabb(&unit_box_at(Vec3::new(0.0, 0.0, -10.0))));
    }

    #[test]
    fn no_false_negatives_for_contained_boxes() {
        // 100 random camera transforms; a small box placed on the view axis
        // halfway to the far plane must always survive the test.
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let camera_world = Mat4::from_translation(Vec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            )) * Mat4::from_rotation_y(rng.gen_range(0.0..std::f32::consts::TAU))
                * Mat4::from_rotation_x(rng.gen_range(-1.0..1.0));

            let frustum =
                Frustum::from_params(0.1, 100.0, std::f32::consts::FRAC_PI_3, 0.75, &camera_world);
            let center = camera_world.transform_point3(Vec3::new(0.0, 0.0, 50.0));
            let size = rng.gen_range(0.05..2.0);
            let aabb = Aabb::new(center - Vec3::splat(size), center + Vec3::splat(size));
            assert!(frustum.contains_aabb(&aabb));
        }
    }

    #[test]
    fn frustum_follows_camera_rotation() {
        // Camera rotated 90° to look down +X: a box ahead on +X is visible,
        // the same box on +Z no longer is.
        let camera_world = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let frustum =
            Frustum::from_params(0.1, 100.0, std::f32::consts::FRAC_PI_3, 0.5625, &camera_world);
        assert!(frustum.contains_aabb(&unit_box_at(Vec3::new(10.0, 0.0, 0.0))));
        assert!(!frustum.contains_aabb(&unit_box_at(Vec3::new(0.0, 0.0, 10.0))));
    }
}
