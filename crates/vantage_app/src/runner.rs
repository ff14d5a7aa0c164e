/// winit event loop driving the renderer.
///
/// The per-frame order is the one the pipeline requires: scene update
/// (refreshes transforms and AABBs), camera input, then cull + render. A
/// frame that fails to present is logged and skipped; the loop continues
/// with fresh input.
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use vantage_core::{InputState, TimeClock};

use crate::graphics::GraphicsState;
use crate::orbit::OrbitCamera;
use crate::scene::DemoScene;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

#[derive(Default)]
struct App {
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    scene: Option<DemoScene>,
    input: InputState,
    orbit: OrbitCamera,
    clock: Option<TimeClock>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title("Vantage")
            .with_inner_size(winit::dpi::PhysicalSize::new(WIDTH, HEIGHT));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(err) => {
                log::error!("window creation failed: {err}");
                event_loop.exit();
                return;
            }
        };

        let mut graphics = match pollster::block_on(GraphicsState::new(window.clone(), WIDTH, HEIGHT))
        {
            Ok(g) => g,
            Err(err) => {
                log::error!("graphics init failed: {err}");
                event_loop.exit();
                return;
            }
        };
        self.scene = Some(DemoScene::build(&mut graphics.renderer));
        self.window = Some(window);
        self.graphics = Some(graphics);
        self.clock = Some(TimeClock::new());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = &mut self.graphics {
                    gfx.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input
                        .update_key(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input
                    .update_mouse_button(button, state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.set_mouse_position(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                self.input.add_scroll(amount);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let (Some(gfx), Some(scene), Some(clock), Some(window)) = (
            &mut self.graphics,
            &mut self.scene,
            &mut self.clock,
            &self.window,
        ) else {
            return;
        };

        let time = clock.tick();

        // 1. Scene update — transforms (and cached AABBs) settle before
        //    culling reads them.
        scene.update(&mut gfx.renderer, time, &self.input);

        // 2. Camera input.
        self.orbit.update(&mut self.input);
        gfx.renderer.camera.transform = self.orbit.transform();

        // 3. Cull + render + present.
        if let Err(err) = gfx.render_frame() {
            log::warn!("frame skipped: {err}");
        }

        self.input.end_frame();
        window.request_redraw();
    }
}

pub fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    // Poll: render continuously, no sleeping between frames.
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}
