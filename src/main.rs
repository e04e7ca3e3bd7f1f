use blocky_critter::figure::Rig;
use blocky_critter::input::{OrbitCamera, Pointer};
use blocky_critter::pose::PoseState;
use blocky_critter::render::{FigureRenderer, GpuContext};
use blocky_critter::scene::compose;
use blocky_critter::sched::{FrameDriver, SystemClock};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

struct App {
    window: Option<Arc<Window>>,
    context: Option<GpuContext>,
    renderer: Option<FigureRenderer>,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    rig: Rig,
    pose: PoseState,
    camera: OrbitCamera,
    pointer: Pointer,
    driver: FrameDriver<SystemClock>,
    yaw_slider: f32,
    mouse_pos: (f32, f32),
    shift_held: bool,
    gui_hovered: bool,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            context: None,
            renderer: None,
            egui_state: None,
            egui_renderer: None,
            rig: Rig::critter(),
            pose: PoseState::new(),
            camera: OrbitCamera::new(),
            pointer: Pointer::new(),
            driver: FrameDriver::new(SystemClock::new()),
            yaw_slider: 0.0,
            mouse_pos: (0.0, 0.0),
            shift_held: false,
            gui_hovered: false,
        }
    }

    fn render(&mut self) {
        let (Some(window), Some(context)) = (self.window.as_ref(), self.context.as_ref()) else {
            return;
        };
        let (Some(egui_state), Some(renderer)) =
            (self.egui_state.as_mut(), self.renderer.as_ref())
        else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => return,
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = egui_state.take_egui_input(window);
        let egui_ctx = egui_state.egui_ctx().clone();

        let mut pose = self.pose;
        let mut yaw = self.yaw_slider;
        let mut yaw_changed = false;

        let full_output = egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Critter Controls")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.checkbox(&mut pose.animate_upper_arm, "Animate Upper Arms");
                    ui.checkbox(&mut pose.animate_lower_arm, "Animate Lower Arms");
                    ui.checkbox(&mut pose.animate_all, "Animate Everything");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Upper arm:");
                        ui.add(egui::Slider::new(&mut pose.upper_arm, -180.0..=180.0).suffix("°"));
                    });
                    ui.horizontal(|ui| {
                        ui.label("Lower arm:");
                        ui.add(egui::Slider::new(&mut pose.lower_arm, -180.0..=180.0).suffix("°"));
                    });
                    ui.horizontal(|ui| {
                        ui.label("Yaw:");
                        if ui
                            .add(egui::Slider::new(&mut yaw, 0.0..=360.0).suffix("°"))
                            .changed()
                        {
                            yaw_changed = true;
                        }
                    });

                    ui.separator();
                    if pose.poke {
                        ui.colored_label(egui::Color32::YELLOW, "POKE MODE");
                    }
                    ui.small("Drag: orbit");
                    ui.small("Shift+click: poke mode");
                });
        });

        self.gui_hovered = egui_ctx.is_pointer_over_area();
        self.pose = pose;
        if yaw_changed {
            self.yaw_slider = yaw;
            self.camera.set_base_yaw(yaw);
        }

        let egui_state = self.egui_state.as_mut().unwrap();
        egui_state.handle_platform_output(window, full_output.platform_output);
        let clipped_primitives =
            egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let commands = compose(&self.rig, &self.pose);
        renderer.render(context, &view, &commands, self.camera.matrix());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.size.width, context.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };
        self.render_egui(
            &view,
            clipped_primitives,
            screen_descriptor,
            full_output.textures_delta,
        );

        output.present();
    }

    fn render_egui(
        &mut self,
        view: &wgpu::TextureView,
        clipped_primitives: Vec<egui::ClippedPrimitive>,
        screen_descriptor: egui_wgpu::ScreenDescriptor,
        textures_delta: egui::TexturesDelta,
    ) {
        let Some(context) = self.context.as_ref() else {
            return;
        };
        let Some(mut egui_renderer) = self.egui_renderer.take() else {
            return;
        };

        for (id, delta) in &textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
        }

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Egui Encoder"),
            });

        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }

        context.queue.submit(std::iter::once(encoder.finish()));

        for id in &textures_delta.free {
            egui_renderer.free_texture(id);
        }

        self.egui_renderer = Some(egui_renderer);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Blocky Critter")
            .with_inner_size(winit::dpi::LogicalSize::new(900, 900));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let context = match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(context) => context,
            Err(e) => {
                log::error!("Graphics setup failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = FigureRenderer::new(&context);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx,
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(&context.device, context.config.format, None, 1, false);

        self.context = Some(context);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);

        self.driver.start();
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Releases end a drag even when the pointer is over the controls
        // window, so handle them before egui can consume the event.
        if let WindowEvent::MouseInput {
            state: ElementState::Released,
            button: MouseButton::Left,
            ..
        } = event
        {
            self.pointer.release();
        }

        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.driver.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    context.resize(size);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_held = modifiers.state().shift_key();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                        self.driver.stop();
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !self.gui_hovered {
                    let (x, y) = self.mouse_pos;
                    if self
                        .pointer
                        .press(x, y, self.shift_held, &mut self.pose)
                        .is_some()
                    {
                        log::info!("poke mode: {}", self.pose.poke);
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

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("event loop error");
}
