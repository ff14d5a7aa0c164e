use std::collections::HashSet;

/// Re-exported key and mouse enums from `winit` so callers don't depend on
/// winit directly.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// State of the keyboard and mouse at a given moment.
///
/// The window event loop feeds this structure; camera controllers and app
/// logic query it through the helpers below.
#[derive(Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_released: Vec<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    mouse_pos: (f64, f64),
    /// movement since last `consume_mouse_delta`
    mouse_delta: (f32, f32),
    /// scroll since last `consume_scroll`
    scroll: f32,
}

impl InputState {
    pub fn new() -> Self {
        Default::default()
    }

    /// Called by the event loop when a keyboard event arrives.
    pub fn update_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
            self.keys_released.push(key);
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// True if the key was released since the last `end_frame`. Toggle
    /// actions (pause, post-process) fire on key-up.
    pub fn just_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
        } else {
            self.mouse_buttons.remove(&button);
        }
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        let (px, py) = self.mouse_pos;
        self.mouse_pos = (x, y);
        self.mouse_delta.0 += (x - px) as f32;
        self.mouse_delta.1 += (y - py) as f32;
    }

    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse_pos
    }

    /// Retrieve and reset the mouse movement delta (pixels) since the last
    /// call — used for camera orbit rotations.
    pub fn consume_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    pub fn add_scroll(&mut self, amount: f32) {
        self.scroll += amount;
    }

    /// Retrieve and reset accumulated scroll — used for camera zoom.
    pub fn consume_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }

    /// Clear per-frame edge state. Call after all consumers have run.
    pub fn end_frame(&mut self) {
        self.keys_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_tracking() {
        let mut state = InputState::new();
        assert!(!state.is_key_pressed(KeyCode::KeyP));
        state.update_key(KeyCode::KeyP, true);
        assert!(state.is_key_pressed(KeyCode::KeyP));
        state.update_key(KeyCode::KeyP, false);
        assert!(!state.is_key_pressed(KeyCode::KeyP));
        assert!(state.just_released(KeyCode::KeyP));
        state.end_frame();
        assert!(!state.just_released(KeyCode::KeyP));
    }

    #[test]
    fn mouse_delta_accumulates_and_resets() {
        let mut state = InputState::new();
        state.set_mouse_position(10.0, 20.0);
        state.consume_mouse_delta();
        state.set_mouse_position(15.0, 25.0);
        state.set_mouse_position(16.0, 24.0);
        assert_eq!(state.consume_mouse_delta(), (6.0, 4.0));
        assert_eq!(state.consume_mouse_delta(), (0.0, 0.0));
    }
}
