use anyhow::Context;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::ViewerConfig,
    gfx::{camera::FixedCamera, rendering::RenderEngine, scene::Scene},
    input::{command_for_window_event, HELP_TEXT},
    simulation::state::{CommandOutcome, ViewerState},
};

/// The interactive room viewer
pub struct RoomViewApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    camera: FixedCamera,
    state: ViewerState,
    /// First fatal error raised inside the event loop
    error: Option<anyhow::Error>,
}

impl RoomViewApp {
    /// Builds the viewer state and scene meshes
    ///
    /// The window and GPU resources are created once the event loop starts.
    pub fn new(config: ViewerConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let scene = Scene::from_config(&config).context("Failed to build scene meshes")?;

        Ok(Self {
            event_loop,
            app_state: AppState {
                camera: FixedCamera::from_config(&config),
                state: ViewerState::new(&config),
                config,
                window: None,
                render_engine: None,
                scene,
                error: None,
            },
        })
    }

    /// Runs the event loop until the window closes or quit is requested
    pub fn run(mut self) -> anyhow::Result<()> {
        println!("{}", HELP_TEXT);

        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop
            .run_app(&mut self.app_state)
            .context("Event loop failed")?;

        match self.app_state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let (width, height) = self.config.window_size;
        let window = event_loop
            .create_window(
                WindowAttributes::default()
                    .with_title(self.config.window_title.clone())
                    .with_inner_size(LogicalSize::new(width, height)),
            )
            .context("Failed to create window")?;
        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        let window_clone = window_handle.clone();
        let renderer = pollster::block_on(RenderEngine::new(
            window_clone,
            width,
            height,
            &self.config,
        ))?;

        self.scene
            .init_gpu_resources(renderer.device(), renderer.draw_bind_group_layout());
        self.camera.resize_projection(width, height);
        self.render_engine = Some(renderer);

        info!("Viewer ready ({}x{})", width, height);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        error!("{:#}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        self.state.tick();
        self.scene.update(render_engine.queue(), &self.state);
        render_engine.update(self.camera.uniform());

        match render_engine.render_frame(&self.scene, self.state.wireframe()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_engine.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => warn!("Surface timeout, skipping frame"),
            Err(e) => self.fail(event_loop, anyhow::anyhow!("Surface error: {}", e)),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(command) = command_for_window_event(&event) {
            match self.state.apply(command) {
                CommandOutcome::Continue => {}
                CommandOutcome::ShowHelp => println!("{}", HELP_TEXT),
                CommandOutcome::Exit => event_loop.exit(),
            }
            return;
        }

        match event {
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera.resize_projection(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
