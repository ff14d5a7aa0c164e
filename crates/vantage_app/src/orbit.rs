/// Mouse-driven orbit camera.
///
/// Dragging rotates the rig around the origin, scrolling zooms. The rig
/// produces the camera world transform directly; the renderer derives the
/// view matrix by inversion.
use glam::Mat4;

use vantage_core::{InputState, MouseButton};

pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: -0.35,
            distance: 10.0,
        }
    }
}

impl OrbitCamera {
    const ROTATE_SPEED: f32 = 0.006;
    const ZOOM_SPEED: f32 = 0.8;
    const PITCH_LIMIT: f32 = 1.5;

    pub fn update(&mut self, input: &mut InputState) {
        let (dx, dy) = input.consume_mouse_delta();
        if input.is_button_down(MouseButton::Left) {
            self.yaw -= dx * Self::ROTATE_SPEED;
            self.pitch = (self.pitch - dy * Self::ROTATE_SPEED)
                .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        }
        self.distance = (self.distance - input.consume_scroll() * Self::ZOOM_SPEED).clamp(2.0, 60.0);
    }

    /// Camera-to-world matrix: orbit rotation, then backing away from the
    /// origin along the local view axis.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw)
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -self.distance))
    }
}
