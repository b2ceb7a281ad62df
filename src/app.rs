use log::{debug, error, info, warn};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};

use crate::{
    config::ViewerConfig,
    error::{Result, ViewerError},
    frame::FrameContext,
    gfx::{
        rendering::RenderEngine,
        scene::{Palette, Scene},
    },
};

const CONTROLS: &[(&str, &str)] = &[
    ("W A S D", "move"),
    ("Space / Left Shift", "up / down"),
    ("Mouse", "look around"),
    ("Scroll", "zoom"),
    ("1 2 3 4", "front, top, side, corner view"),
    ("L", "toggle the lamp"),
    ("Esc", "quit"),
];

/// The viewer: a window, the room and the render loop
pub struct ViewerApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    frame: FrameContext,
    focused: bool,
    error: Option<ViewerError>,
}

impl ViewerApp {
    /// Build the room and the event loop; the window opens in [`ViewerApp::run`]
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;

        let scene = Scene::furnished_room(config.room, &Palette::default(), config.light_position);
        let frame = FrameContext::new(&config);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene,
                frame,
                focused: false,
                error: None,
            },
        })
    }

    /// Run until the window closes
    ///
    /// Returns the first fatal error raised inside the loop, if any.
    pub fn run(mut self) -> Result<()> {
        log_controls();

        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ViewerError) {
        error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop.create_window(
            WindowAttributes::default()
                .with_title(self.config.title.clone())
                .with_inner_size(LogicalSize::new(self.config.width, self.config.height)),
        )?;
        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        self.frame.resize(width, height);

        let config = &self.config;
        let render_engine = pollster::block_on(RenderEngine::new(
            window_handle.clone(),
            width,
            height,
            config,
        ))?;

        render_engine.upload_scene(&mut self.scene);
        self.render_engine = Some(render_engine);

        self.focused = window_handle.has_focus();
        capture_cursor(&window_handle, self.focused);
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
            && event.state == ElementState::Pressed
        {
            event_loop.exit();
            return;
        }
        self.frame.camera_manager.process_keyboard_event(event);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        self.frame.step(&mut self.scene);
        self.scene.update_all_transforms(render_engine.queue());
        render_engine.update(&self.frame.camera_manager.camera.uniform, &self.frame.light);

        if let Err(err) = render_engine.render_frame(&self.scene, self.frame.light.on) {
            self.fail(event_loop, err);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if width == 0 || height == 0 {
                    debug!("Ignoring resize to {}x{}", width, height);
                    return;
                }
                self.frame.resize(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    self.frame.camera_manager.controller.reset();
                }
                if let Some(window) = self.window.as_ref() {
                    capture_cursor(window, focused);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::MouseWheel { .. } => {
                if self.focused {
                    self.frame.camera_manager.process_window_event(&event);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if self.focused {
            self.frame.camera_manager.process_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.scene.release_gpu_resources();
        info!("Exiting after {} frames", self.frame.timer.frame_count());
    }
}

/// Grab and hide the cursor, or give it back
fn capture_cursor(window: &Window, capture: bool) {
    let result = if capture {
        window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
    } else {
        window.set_cursor_grab(CursorGrabMode::None)
    };

    if let Err(err) = result {
        warn!("Could not change cursor grab: {err}");
    }
    window.set_cursor_visible(!capture);
}

fn log_controls() {
    info!("Controls:");
    for (input, action) in CONTROLS {
        info!("  {:<20} {}", input, action);
    }
}
