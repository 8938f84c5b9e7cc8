use std::rc::Rc;
use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};
use painter3d::asset::{Assets, Mesh};
use painter3d::renderer::{MaterialShaderProvider, ShaderKey};
use painter3d::{
    Camera, CubeFace, DrawItem, EngineContext, Environment, HeadlessContext, Material, Painter3D,
    RenderContext, Renderable, ShaderProgram, Skybox, SkyboxShader, Transform,
};

const FRAMES: usize = 3;
const GRID: i32 = 4;
const ASPECT: f32 = 16.0 / 9.0;

/// Stand-in program that reports what a GPU program would be asked to do.
struct LoggingProgram {
    name: String,
    assets: Rc<Assets>,
    view_proj: Mat4,
    indices_this_batch: u32,
    bytes_this_batch: usize,
}

impl ShaderProgram for LoggingProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn activate(&mut self, camera: &Camera, _context: &mut dyn RenderContext) {
        self.indices_this_batch = 0;
        self.bytes_this_batch = 0;
        self.view_proj = camera.view_proj(ASPECT);
        log::debug!("[{}] bind, eye at {:?}", self.name, camera.eye);
    }

    fn draw(&mut self, item: &DrawItem) {
        let Some(mesh) = self.assets.meshes.get(item.renderable.mesh) else {
            log::warn!("[{}] unknown mesh {:?}", self.name, item.renderable.mesh);
            return;
        };
        let mvp = self.view_proj * item.renderable.transform.matrix();
        let origin = mvp.project_point3(Vec3::ZERO);
        log::trace!(
            "[{}] mesh {:?} at ndc {:?}, colour {:?}",
            self.name,
            item.renderable.mesh,
            origin,
            item.renderable.material.color_f32()
        );
        self.indices_this_batch += mesh.index_count();
        self.bytes_this_batch += mesh.vertex_bytes().len();
    }

    fn deactivate(&mut self) {
        log::debug!(
            "[{}] unbind after {} indices, {} vertex bytes",
            self.name,
            self.indices_this_batch,
            self.bytes_this_batch
        );
    }
}

struct LoggingSkyboxShader;

impl SkyboxShader for LoggingSkyboxShader {
    fn render(&mut self, skybox: &Skybox, camera: &Camera) {
        log::info!(
            "Skybox drawn around {:?} ({:?})",
            camera.eye,
            skybox.loaded_faces()
        );
    }
}

fn build_scene(assets: &mut Assets) -> Vec<Renderable> {
    let cube = assets.meshes.insert(Mesh::cube(0.8));
    let mut renderables = Vec::new();
    for x in -GRID..GRID {
        for z in -GRID..GRID {
            let material = match (x + z).rem_euclid(3) {
                0 => Material::rgb(200, 60, 60).with_metallic(0.8).with_roughness(0.3),
                1 => Material::rgb(60, 200, 60).with_alpha(),
                _ => Material::white().unlit(),
            };
            let transform = Transform::from_trs(
                Vec3::new(x as f32, 0.0, z as f32),
                Quat::from_rotation_y((x * z) as f32 * 0.1),
                Vec3::splat(1.0 - 0.05 * z.abs() as f32),
            );
            renderables.push(Renderable::new(cube, material, transform));
        }
    }
    renderables
}

fn main() {
    painter3d::init_logging();

    let mut engine = EngineContext::new("painter3d-demo");
    let settings = engine.load_settings().clone();
    log::info!(
        "{} on {} (assets in {:?})",
        engine.application_name(),
        engine.operating_system(),
        engine.native_path()
    );

    let mut assets = Assets::new();
    let scene = build_scene(&mut assets);
    let assets = Rc::new(assets);

    let provider = {
        let assets = Rc::clone(&assets);
        MaterialShaderProvider::new(move |key: ShaderKey| {
            Box::new(LoggingProgram {
                name: format!("{:?}", key),
                assets: Rc::clone(&assets),
                view_proj: Mat4::IDENTITY,
                indices_this_batch: 0,
                bytes_this_batch: 0,
            }) as Box<dyn ShaderProgram>
        })
    };
    let mut painter = Painter3D::with_settings(
        HeadlessContext::new(),
        provider,
        LoggingSkyboxShader,
        settings,
    );

    let skybox = Arc::new(Skybox::new());
    for face in CubeFace::ALL {
        skybox.request(face);
    }
    painter.set_skybox(Some(Arc::clone(&skybox)));
    painter.set_environment(Some(Environment::default()));

    for frame in 0..FRAMES {
        let angle = frame as f32 * 0.5;
        painter.set_camera(Camera::looking_at(
            Vec3::new(angle.sin() * 10.0, 6.0, angle.cos() * 10.0),
            Vec3::ZERO,
        ));

        // Faces arrive while frames are being drawn.
        if frame == 1 {
            for face in CubeFace::ALL {
                skybox.store_face(face, vec![0; 16]);
            }
        }

        let result = painter
            .begin()
            .and_then(|_| painter.draw_all(&scene))
            .and_then(|_| painter.end());
        match result {
            Ok(stats) => log::info!("Frame {}: {:?}", frame, stats),
            Err(err) => {
                log::error!("Frame {} failed: {}", frame, err);
                return;
            }
        }
    }

    log::info!(
        "{} shader variants compiled, {} passes completed",
        painter.shader_provider().variant_count(),
        painter.context().completed_passes()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use painter3d::asset::Handle;

    #[test]
    fn scene_mixes_metallic_and_rotated_cubes() {
        let mut assets = Assets::new();
        let scene = build_scene(&mut assets);

        assert_eq!(scene.len(), (2 * GRID * 2 * GRID) as usize);
        assert!(scene
            .iter()
            .any(|r| r.material.metallic_factor > 0 && r.material.roughness_factor < 255));
        assert!(scene
            .iter()
            .any(|r| r.transform.rotation != Quat::IDENTITY && r.transform.scale != Vec3::ONE));
    }

    #[test]
    fn logging_program_counts_indices_and_bytes() {
        let mut assets = Assets::new();
        let cube = assets.meshes.insert(Mesh::cube(1.0));
        let mut program = LoggingProgram {
            name: "test".to_string(),
            assets: Rc::new(assets),
            view_proj: Mat4::IDENTITY,
            indices_this_batch: 0,
            bytes_this_batch: 0,
        };
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let item = |mesh| DrawItem {
            renderable: Renderable::new(
                mesh,
                Material::white().with_metallic(0.5),
                Transform::from_trs(Vec3::X, Quat::from_rotation_y(0.3), Vec3::splat(2.0)),
            ),
            shader: Handle::new(0),
            camera,
            environment: Some(Environment::default()),
        };

        let mut context = HeadlessContext::new();
        program.activate(&camera, &mut context);
        program.draw(&item(cube));
        program.draw(&item(Handle::new(7)));

        assert_eq!(program.view_proj, camera.view_proj(ASPECT));
        assert_eq!(program.indices_this_batch, 36);
        assert_eq!(program.bytes_this_batch, Mesh::cube(1.0).vertex_bytes().len());
    }
}
