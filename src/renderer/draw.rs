use super::renderable::Renderable;
use super::shader::ShaderHandle;
use crate::environment::Environment;
use crate::scene::Camera;

/// A renderable waiting for the next flush, with the state the painter
/// attached to it at submission time.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem {
    pub renderable: Renderable,
    pub shader: ShaderHandle,
    pub camera: Camera,
    pub environment: Option<Environment>,
}

impl DrawItem {
    pub fn view_distance_sq(&self) -> f32 {
        self.camera
            .distance_sq(self.renderable.transform.translation)
    }
}
