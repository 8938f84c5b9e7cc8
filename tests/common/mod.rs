#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use painter3d::asset::Handle;
use painter3d::renderer::{ShaderLibrary, ShaderProvider};
use painter3d::{
    Camera, DrawItem, Material, Painter3D, RenderContext, Renderable, ShaderHandle, ShaderProgram,
    Skybox, SkyboxShader, Transform,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ContextBegin,
    ContextEnd,
    Activate { shader: String, eye: Vec3 },
    Draw { shader: String, mesh: usize, eye: Vec3 },
    Deactivate { shader: String },
    Skybox { eye: Vec3 },
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub struct RecordingContext {
    log: EventLog,
}

impl RenderContext for RecordingContext {
    fn begin(&mut self) {
        self.log.borrow_mut().push(Event::ContextBegin);
    }

    fn end(&mut self) {
        self.log.borrow_mut().push(Event::ContextEnd);
    }
}

pub struct RecordingProgram {
    name: String,
    log: EventLog,
}

impl ShaderProgram for RecordingProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn activate(&mut self, camera: &Camera, _context: &mut dyn RenderContext) {
        self.log.borrow_mut().push(Event::Activate {
            shader: self.name.clone(),
            eye: camera.eye,
        });
    }

    fn draw(&mut self, item: &DrawItem) {
        self.log.borrow_mut().push(Event::Draw {
            shader: self.name.clone(),
            mesh: item.renderable.mesh.index(),
            eye: item.camera.eye,
        });
    }

    fn deactivate(&mut self) {
        self.log.borrow_mut().push(Event::Deactivate {
            shader: self.name.clone(),
        });
    }
}

/// Picks the shader by the renderable's base colour: red draws with "A",
/// green with "B", anything else with "C". Programs are registered in the
/// order B, A, C so handle order differs from name order.
pub struct ColorShaderProvider {
    library: ShaderLibrary,
    a: ShaderHandle,
    b: ShaderHandle,
    c: ShaderHandle,
    pub resolved: usize,
}

pub fn recording_program(name: &str, log: &EventLog) -> Box<dyn ShaderProgram> {
    Box::new(RecordingProgram {
        name: name.to_string(),
        log: Rc::clone(log),
    })
}

impl ColorShaderProvider {
    fn new(log: &EventLog) -> Self {
        let mut library = ShaderLibrary::new();
        let program = |name: &str| recording_program(name, log);
        let b = library.insert(program("B"));
        let a = library.insert(program("A"));
        let c = library.insert(program("C"));
        Self {
            library,
            a,
            b,
            c,
            resolved: 0,
        }
    }
}

impl ShaderProvider for ColorShaderProvider {
    fn resolve(&mut self, renderable: &Renderable) -> ShaderHandle {
        self.resolved += 1;
        match renderable.material.base_color {
            [255, 0, 0, _] => self.a,
            [0, 255, 0, _] => self.b,
            _ => self.c,
        }
    }

    fn program_mut(&mut self, handle: ShaderHandle) -> Option<&mut dyn ShaderProgram> {
        self.library.get_mut(handle)
    }
}

pub struct RecordingSkyboxShader {
    log: EventLog,
}

impl SkyboxShader for RecordingSkyboxShader {
    fn render(&mut self, _skybox: &Skybox, camera: &Camera) {
        self.log.borrow_mut().push(Event::Skybox { eye: camera.eye });
    }
}

pub type TestPainter = Painter3D<RecordingContext, ColorShaderProvider, RecordingSkyboxShader>;

pub fn recording_painter() -> (TestPainter, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let painter = Painter3D::new(
        RecordingContext {
            log: Rc::clone(&log),
        },
        ColorShaderProvider::new(&log),
        RecordingSkyboxShader {
            log: Rc::clone(&log),
        },
    );
    (painter, log)
}

pub fn red(mesh: usize) -> Renderable {
    renderable(mesh, Material::rgb(255, 0, 0), Vec3::ZERO)
}

pub fn green(mesh: usize) -> Renderable {
    renderable(mesh, Material::rgb(0, 255, 0), Vec3::ZERO)
}

pub fn blue(mesh: usize) -> Renderable {
    renderable(mesh, Material::rgb(0, 0, 255), Vec3::ZERO)
}

pub fn renderable(mesh: usize, material: Material, position: Vec3) -> Renderable {
    Renderable::new(
        Handle::new(mesh),
        material,
        Transform::from_translation(position),
    )
}

pub fn camera_at(z: f32) -> Camera {
    Camera::looking_at(Vec3::new(0.0, 0.0, z), Vec3::ZERO)
}

pub fn drawn_meshes(log: &EventLog) -> Vec<usize> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Draw { mesh, .. } => Some(*mesh),
            _ => None,
        })
        .collect()
}

pub fn activations(log: &EventLog) -> Vec<String> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Activate { shader, .. } => Some(shader.clone()),
            _ => None,
        })
        .collect()
}
