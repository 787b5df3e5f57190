use anyhow::{Context, Result};
use candela_input::{CameraAction, InputTracker, MouseTracker};
use candela_render_wgpu::{FlyCamera, SceneRenderer};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "candela-viewer", about = "Candle still-life viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the scene's texture images
    #[arg(long, default_value = "textures")]
    textures: PathBuf,
}

/// Map a physical key onto a camera action. All bindings live here; the
/// input crate never sees key codes.
fn map_key(key: KeyCode) -> Option<CameraAction> {
    match key {
        KeyCode::KeyW => Some(CameraAction::MoveForward),
        KeyCode::KeyS => Some(CameraAction::MoveBackward),
        KeyCode::KeyA => Some(CameraAction::StrafeLeft),
        KeyCode::KeyD => Some(CameraAction::StrafeRight),
        KeyCode::KeyQ => Some(CameraAction::MoveUp),
        KeyCode::KeyE => Some(CameraAction::MoveDown),
        KeyCode::KeyP => Some(CameraAction::ToggleProjection),
        KeyCode::Escape => Some(CameraAction::Quit),
        _ => None,
    }
}

/// Camera and input state, independent of the GPU objects.
struct AppState {
    camera: FlyCamera,
    input: InputTracker,
    mouse: MouseTracker,
    last_frame: Instant,
}

impl AppState {
    fn new() -> Self {
        Self {
            camera: FlyCamera::default(),
            input: InputTracker::new(),
            mouse: MouseTracker::new(),
            last_frame: Instant::now(),
        }
    }

    fn update(&mut self, dt: f32) {
        for action in self.input.held_actions() {
            match action {
                CameraAction::MoveForward => self.camera.move_forward(dt),
                CameraAction::MoveBackward => self.camera.move_backward(dt),
                CameraAction::StrafeLeft => self.camera.move_left(dt),
                CameraAction::StrafeRight => self.camera.move_right(dt),
                CameraAction::MoveUp => self.camera.move_up(dt),
                CameraAction::MoveDown => self.camera.move_down(dt),
                CameraAction::ToggleProjection | CameraAction::Quit => {}
            }
        }
        if self.input.take_toggle_edge() {
            self.camera.toggle_projection();
        }
    }
}

struct GpuApp {
    state: AppState,
    textures_dir: PathBuf,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<SceneRenderer>,
    init_error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(textures_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(),
            textures_dir,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            init_error: None,
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("Candela")
            .with_inner_size(PhysicalSize::new(800u32, 600));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        // Capture the cursor for mouse look. Confined keeps cursor-position
        // events flowing; Locked is the fallback where Confined is
        // unsupported.
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
        {
            tracing::warn!("cursor grab unavailable: {e}");
        }
        window.set_cursor_visible(false);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("candela_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.aspect = size.width as f32 / size.height.max(1) as f32;

        let renderer = SceneRenderer::new(
            &device,
            &queue,
            surface_format,
            size.width,
            size.height,
            &self.textures_dir,
        )
        .context("renderer setup")?;

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        Ok(())
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = (now - self.state.last_frame).as_secs_f32().min(0.1);
        self.state.last_frame = now;
        self.state.update(dt);

        let (Some(surface), Some(device), Some(queue)) =
            (&self.surface, &self.device, &self.queue)
        else {
            return;
        };

        let output = match surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(config) = &self.config {
                    surface.configure(device, config);
                }
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(renderer) = &self.renderer {
            renderer.render(device, queue, &view, &self.state.camera);
        }

        output.present();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_gpu(event_loop) {
            tracing::error!("initialization failed: {e:#}");
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.aspect =
                        config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                match map_key(key) {
                    Some(CameraAction::Quit) if pressed => event_loop.exit(),
                    Some(action) => self.state.input.set_pressed(action, pressed),
                    None => {}
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (dx, dy) = self.state.mouse.update(position.x, position.y);
                self.state.camera.look(dx, dy);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 20.0) as f32,
                };
                self.state.camera.zoom(scroll_y);
            }
            WindowEvent::Focused(true) => {
                // Relatch so a cursor warp while unfocused cannot jerk the
                // view on the next motion event.
                self.state.mouse.reset();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("candela-viewer starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(cli.textures);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.init_error {
        return Err(err);
    }

    Ok(())
}
