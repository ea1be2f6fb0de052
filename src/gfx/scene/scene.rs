use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};
use log::{info, warn};

use crate::{
    assets,
    config::ViewerConfig,
    gfx::{
        geometry::{generate_cube, generate_room, generate_sphere, GeometryError, Mesh},
        rendering::render_pass_ext::DrawMesh,
        resources::draw_bindings::{DrawBinding, DrawUniform},
    },
    simulation::state::{ObjectKind, ViewerState},
};

use super::gpu_mesh::GpuMesh;

/// CPU-side meshes built once at startup
#[derive(Debug, Clone)]
pub struct SceneMeshes {
    pub room: Mesh,
    pub sphere: Mesh,
    pub cube: Mesh,
    /// `None` when no model is configured or loading it failed
    pub imported: Option<Mesh>,
}

impl SceneMeshes {
    /// Generates the room and primitives and imports the configured model
    ///
    /// A model that fails to load is logged and skipped; only invalid
    /// primitive parameters are errors.
    pub fn build(config: &ViewerConfig) -> Result<Self, GeometryError> {
        let (longitude, latitude) = config.sphere_divisions;
        let sphere = generate_sphere(config.sphere_radius, longitude, latitude)?;
        let cube = generate_cube(config.cube_half_extent)?;
        let room = generate_room(&config.bounds);

        let imported = config
            .model_path
            .as_ref()
            .and_then(|path| match assets::load_mesh(path) {
                Ok(mesh) => Some(mesh),
                Err(e) => {
                    warn!("Could not import '{}': {}", path.display(), e);
                    None
                }
            });

        info!(
            "Scene meshes: sphere {} tris, cube {} tris, room {} tris, imported {}",
            sphere.triangle_count(),
            cube.triangle_count(),
            room.triangle_count(),
            imported
                .as_ref()
                .map(|m| format!("{} tris", m.triangle_count()))
                .unwrap_or_else(|| "none".to_string()),
        );

        Ok(Self {
            room,
            sphere,
            cube,
            imported,
        })
    }

    /// Mesh drawn for `kind`, if there is one
    pub fn mesh_for(&self, kind: ObjectKind) -> Option<&Mesh> {
        match kind {
            ObjectKind::Cube => Some(&self.cube),
            ObjectKind::Sphere => Some(&self.sphere),
            ObjectKind::ImportedMesh => self.imported.as_ref(),
        }
    }
}

/// Scale and orientation applied to each object kind when drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransforms {
    pub object_scale: f32,
    pub model_scale: f32,
    pub model_rotation_y: Rad<f32>,
}

impl ObjectTransforms {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            object_scale: config.object_scale,
            model_scale: config.model_scale,
            model_rotation_y: config.model_rotation_y,
        }
    }

    /// Model matrix placing an object of `kind` at `position`
    pub fn model_matrix(&self, kind: ObjectKind, position: Vector3<f32>) -> Matrix4<f32> {
        let translation = Matrix4::from_translation(position);
        match kind {
            ObjectKind::Cube | ObjectKind::Sphere => {
                translation * Matrix4::from_scale(self.object_scale)
            }
            ObjectKind::ImportedMesh => {
                translation
                    * Matrix4::from_angle_y(self.model_rotation_y)
                    * Matrix4::from_scale(self.model_scale)
            }
        }
    }
}

struct SceneGpuResources {
    room: Option<GpuMesh>,
    /// Indexed by [`ObjectKind::index`]
    objects: [Option<GpuMesh>; 3],
    room_binding: DrawBinding,
    object_binding: DrawBinding,
}

/// The room plus the bouncing object, ready to draw
pub struct Scene {
    meshes: SceneMeshes,
    transforms: ObjectTransforms,
    object_kind: ObjectKind,
    gpu: Option<SceneGpuResources>,
}

impl Scene {
    pub fn new(meshes: SceneMeshes, transforms: ObjectTransforms) -> Self {
        Self {
            meshes,
            transforms,
            object_kind: ObjectKind::default(),
            gpu: None,
        }
    }

    /// Builds meshes and transforms from `config`
    pub fn from_config(config: &ViewerConfig) -> Result<Self, GeometryError> {
        Ok(Self::new(
            SceneMeshes::build(config)?,
            ObjectTransforms::from_config(config),
        ))
    }

    pub fn meshes(&self) -> &SceneMeshes {
        &self.meshes
    }

    /// Uploads every mesh and creates the per-draw uniforms
    pub fn init_gpu_resources(
        &mut self,
        device: &wgpu::Device,
        draw_layout: &wgpu::BindGroupLayout,
    ) {
        let upload = |kind: ObjectKind| {
            self.meshes
                .mesh_for(kind)
                .and_then(|mesh| GpuMesh::new(device, mesh, kind.name()))
        };

        let objects = [
            upload(ObjectKind::Cube),
            upload(ObjectKind::Sphere),
            upload(ObjectKind::ImportedMesh),
        ];

        self.gpu = Some(SceneGpuResources {
            room: GpuMesh::new(device, &self.meshes.room, "room"),
            objects,
            room_binding: DrawBinding::new(device, draw_layout, "Room"),
            object_binding: DrawBinding::new(device, draw_layout, "Object"),
        });
    }

    /// Syncs the per-draw uniforms with the current state
    pub fn update(&mut self, queue: &wgpu::Queue, state: &ViewerState) {
        self.object_kind = state.object_kind();
        let model = self
            .transforms
            .model_matrix(state.object_kind(), state.position);

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.room_binding
                .update(queue, DrawUniform::vertex_colored(Matrix4::identity()));
            gpu.object_binding
                .update(queue, DrawUniform::uniform_colored(model, state.color()));
        }
    }

    /// Records the room and the current object into `render_pass`
    ///
    /// The caller sets the pipeline and the global bind group.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        let Some(gpu) = self.gpu.as_ref() else {
            return;
        };

        if let Some(room) = gpu.room.as_ref() {
            render_pass.draw_mesh(room, gpu.room_binding.bind_group());
        }
        if let Some(object) = gpu.objects[self.object_kind.index()].as_ref() {
            render_pass.draw_mesh(object, gpu.object_binding.bind_group());
        }
    }
}
