//! WASM entry point - the blocky critter in a browser canvas.
//!
//! The DOM control surface is replaced by key bindings: 1/2/3 toggle the
//! upper-arm, lower-arm, and global animations; Shift+click toggles poke
//! mode as on native.

use crate::figure::Rig;
use crate::input::{OrbitCamera, Pointer};
use crate::pose::PoseState;
use crate::render::{FigureRenderer, GpuContext};
use crate::scene::compose;
use crate::sched::{FrameDriver, PerformanceClock};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::web::EventLoopExtWebSys;
use winit::platform::web::WindowAttributesExtWebSys;
use winit::window::{Window, WindowId};

struct AppState {
    context: Option<GpuContext>,
    renderer: Option<FigureRenderer>,
}

struct App {
    window: Option<Arc<Window>>,
    state: Rc<RefCell<AppState>>,
    rig: Rig,
    pose: PoseState,
    camera: OrbitCamera,
    pointer: Pointer,
    driver: FrameDriver<PerformanceClock>,
    mouse_pos: (f32, f32),
    shift_held: bool,
    init_pending: bool,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            state: Rc::new(RefCell::new(AppState {
                context: None,
                renderer: None,
            })),
            rig: Rig::critter(),
            pose: PoseState::new(),
            camera: OrbitCamera::new(),
            pointer: Pointer::new(),
            driver: FrameDriver::new(PerformanceClock),
            mouse_pos: (0.0, 0.0),
            shift_held: false,
            init_pending: false,
        }
    }

    fn render(&mut self) {
        let state = self.state.borrow();
        let Some(context) = state.context.as_ref() else {
            return;
        };
        let Some(renderer) = state.renderer.as_ref() else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(o) => o,
            Err(_) => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let commands = compose(&self.rig, &self.pose);
        renderer.render(context, &view, &commands, self.camera.matrix());
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_pending {
            return;
        }
        self.init_pending = true;

        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
            .expect("Could not find canvas element with id 'canvas'");

        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let window_attrs = Window::default_attributes()
            .with_canvas(Some(canvas))
            .with_inner_size(PhysicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.window = Some(window.clone());
        self.driver.start();

        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let context = match GpuContext::new(window.clone()).await {
                Ok(context) => context,
                Err(e) => {
                    log::error!("Graphics setup failed: {e}");
                    return;
                }
            };
            let renderer = FigureRenderer::new(&context);

            let mut state = state.borrow_mut();
            state.context = Some(context);
            state.renderer = Some(renderer);

            window.request_redraw();
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.driver.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let mut state = self.state.borrow_mut();
                if let Some(context) = &mut state.context {
                    context.resize(size);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_held = modifiers.state().shift_key();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        match code {
                            KeyCode::Digit1 => {
                                self.pose.animate_upper_arm = !self.pose.animate_upper_arm;
                            }
                            KeyCode::Digit2 => {
                                self.pose.animate_lower_arm = !self.pose.animate_lower_arm;
                            }
                            KeyCode::Digit3 => {
                                self.pose.animate_all = !self.pose.animate_all;
                            }
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    if state == ElementState::Pressed {
                        let (x, y) = self.mouse_pos;
                        if let Some(poke) =
                            self.pointer.press(x, y, self.shift_held, &mut self.pose)
                        {
                            log::info!("poke mode: {poke}");
                        }
                    } else {
                        self.pointer.release();
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.mouse_pos = (x, y);
                if self.pointer.motion(x, y, &mut self.camera) {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.driver.tick(&mut self.pose);
                self.render();

                if self.driver.is_running() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).expect("Failed to init logger");

    let event_loop = EventLoop::new().unwrap();
    let app = App::new();

    event_loop.spawn_app(app);
}
