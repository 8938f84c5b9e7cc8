use super::material::Material;
use crate::asset::{Handle, Mesh};
use crate::scene::Transform;

/// A drawable scene object submitted to the painter for one frame.
///
/// Cheap to copy: geometry lives in an [`AssetCache`](crate::asset::AssetCache)
/// and is referenced by handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub mesh: Handle<Mesh>,
    pub material: Material,
    pub transform: Transform,
}

impl Renderable {
    pub fn new(mesh: Handle<Mesh>, material: Material, transform: Transform) -> Self {
        Self {
            mesh,
            material,
            transform,
        }
    }
}
