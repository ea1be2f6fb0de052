//! WGPU-based rendering engine for the room viewer
//!
//! Owns the surface, device, depth buffer, and the two scene pipelines:
//! `"Solid"` fills triangles, `"Wireframe"` draws their edges when the
//! adapter supports line polygon mode.

use anyhow::{anyhow, Context};
use log::{info, warn};
use std::sync::Arc;
use wgpu::Device;

use crate::{
    config::ViewerConfig,
    gfx::{
        camera::camera_utils::CameraUniform,
        resources::{
            draw_bindings::create_draw_bind_group_layout,
            global_bindings::GlobalBindings,
            texture_resource::TextureResource,
        },
        scene::scene::Scene,
    },
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

pub const SOLID_PIPELINE: &str = "Solid";
pub const WIREFRAME_PIPELINE: &str = "Wireframe";

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    pipeline_manager: PipelineManager,
    global_bindings: GlobalBindings,
    draw_bind_group_layout: wgpu::BindGroupLayout,
    clear_color: wgpu::Color,
    warned_no_wireframe: bool,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// Requests `POLYGON_MODE_LINE` when the adapter offers it; without it
    /// the wireframe pipeline is not created and wireframe mode draws solid.
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `viewer_config` - Supplies the clear color
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        viewer_config: &ViewerConfig,
    ) -> anyhow::Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to request adapter")?;
        info!("Using adapter: {}", adapter.get_info().name);

        let line_mode = adapter.features().contains(wgpu::Features::POLYGON_MODE_LINE);
        let required_features = if line_mode {
            wgpu::Features::POLYGON_MODE_LINE
        } else {
            warn!("Adapter lacks POLYGON_MODE_LINE, wireframe mode will draw solid");
            wgpu::Features::empty()
        };

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features,
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to request a device")?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface reports no supported formats"))?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            // Motion advances once per frame, so pace frames to the display
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_bindings = GlobalBindings::new(&device);
        let draw_bind_group_layout = create_draw_bind_group_layout(&device);

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager
            .load_shader("scene", include_str!("scene.wgsl"))
            .context("Failed to load scene shader")?;

        let base = PipelineConfig::default()
            .with_shader("scene")
            .with_color_format(format)
            .with_depth_format(TextureResource::DEPTH_FORMAT)
            .with_cull_mode(None)
            .with_bind_group_layouts(vec![
                global_bindings.bind_group_layout().clone(),
                draw_bind_group_layout.clone(),
            ]);

        pipeline_manager.register_pipeline(
            SOLID_PIPELINE,
            base.clone()
                .with_label(SOLID_PIPELINE)
                .with_polygon_mode(wgpu::PolygonMode::Fill),
        );
        if line_mode {
            pipeline_manager.register_pipeline(
                WIREFRAME_PIPELINE,
                base.with_label(WIREFRAME_PIPELINE)
                    .with_polygon_mode(wgpu::PolygonMode::Line),
            );
        }

        if let Err(errors) = pipeline_manager.create_all_pipelines() {
            for error in &errors {
                warn!("{}", error);
            }
        }
        if pipeline_manager.pipeline(SOLID_PIPELINE).is_none() {
            return Err(anyhow!("The solid scene pipeline could not be created"));
        }

        let [r, g, b] = viewer_config.clear_color;

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            pipeline_manager,
            global_bindings,
            draw_bind_group_layout,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
            warned_no_wireframe: false,
        })
    }

    /// Picks the pipeline for the requested mode
    ///
    /// Falls back to the solid pipeline, warning once, when wireframe is
    /// unavailable.
    fn scene_pipeline_name(&mut self, wireframe: bool) -> &'static str {
        if !wireframe {
            return SOLID_PIPELINE;
        }
        if self.supports_wireframe() {
            return WIREFRAME_PIPELINE;
        }
        if !self.warned_no_wireframe {
            warn!("Wireframe pipeline unavailable, drawing solid");
            self.warned_no_wireframe = true;
        }
        SOLID_PIPELINE
    }

    /// Clears the frame and draws the room and current object
    ///
    /// Surface errors are returned so the caller can reconfigure on
    /// `Lost`/`Outdated` and skip the frame on `Timeout`.
    pub fn render_frame(
        &mut self,
        scene: &Scene,
        wireframe: bool,
    ) -> Result<(), wgpu::SurfaceError> {
        let pipeline_name = self.scene_pipeline_name(wireframe);

        let surface_texture = self.surface.get_current_texture()?;
        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(pipeline) = self.pipeline_manager.pipeline(pipeline_name) {
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);
                scene.draw(&mut render_pass);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Uploads the camera matrix
    pub fn update(&mut self, camera_uniform: CameraUniform) {
        self.global_bindings
            .update_camera(&self.queue, camera_uniform);
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    /// Reconfigures the surface at its current size
    pub fn reconfigure(&mut self) {
        self.resize(self.config.width, self.config.height);
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Layout every per-draw bind group must be created with
    pub fn draw_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.draw_bind_group_layout
    }

    /// True when wireframe mode actually draws lines
    pub fn supports_wireframe(&self) -> bool {
        self.pipeline_manager.pipeline(WIREFRAME_PIPELINE).is_some()
    }
}
