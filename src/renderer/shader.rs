use std::collections::HashMap;

use super::draw::DrawItem;
use super::material::{Material, MaterialFlags};
use super::render_context::RenderContext;
use super::renderable::Renderable;
use crate::asset::Handle;
use crate::scene::Camera;

/// A shader program the painter can batch draws under.
///
/// Between `activate` and `deactivate` the painter only calls `draw`.
pub trait ShaderProgram {
    fn name(&self) -> &str;
    fn activate(&mut self, camera: &Camera, context: &mut dyn RenderContext);
    fn draw(&mut self, item: &DrawItem);
    fn deactivate(&mut self);
}

/// Identity of a shader program. Draw sorting orders by it.
pub type ShaderHandle = Handle<dyn ShaderProgram>;

/// Maps a renderable to the program that draws it.
pub trait ShaderProvider {
    /// Must return the same handle for the same renderable configuration.
    fn resolve(&mut self, renderable: &Renderable) -> ShaderHandle;

    fn program_mut(&mut self, handle: ShaderHandle) -> Option<&mut dyn ShaderProgram>;
}

/// Owns compiled programs and hands out handles in insertion order.
#[derive(Default)]
pub struct ShaderLibrary {
    programs: Vec<Box<dyn ShaderProgram>>,
}

impl ShaderLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, program: Box<dyn ShaderProgram>) -> ShaderHandle {
        let index = self.programs.len();
        self.programs.push(program);
        Handle::new(index)
    }

    pub fn get(&self, handle: ShaderHandle) -> Option<&dyn ShaderProgram> {
        let program = self.programs.get(handle.index())?;
        Some(program.as_ref())
    }

    pub fn get_mut(&mut self, handle: ShaderHandle) -> Option<&mut dyn ShaderProgram> {
        let program = self.programs.get_mut(handle.index())?;
        Some(program.as_mut())
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

/// Shader variant selected by material properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderKey {
    pub alpha_blend: bool,
    pub double_sided: bool,
    pub textured: bool,
    pub unlit: bool,
}

impl ShaderKey {
    pub fn for_material(material: &Material) -> Self {
        let flags = material.flags;
        Self {
            alpha_blend: flags.contains(MaterialFlags::ALPHA_BLEND),
            double_sided: flags.contains(MaterialFlags::DOUBLE_SIDED),
            textured: flags.contains(MaterialFlags::USE_BASE_COLOR_TEXTURE),
            unlit: flags.contains(MaterialFlags::UNLIT),
        }
    }
}

/// Provider that compiles one program per [`ShaderKey`] on first use and
/// reuses it afterwards.
pub struct MaterialShaderProvider<F> {
    library: ShaderLibrary,
    variants: HashMap<ShaderKey, ShaderHandle>,
    compile: F,
}

impl<F> MaterialShaderProvider<F>
where
    F: FnMut(ShaderKey) -> Box<dyn ShaderProgram>,
{
    pub fn new(compile: F) -> Self {
        Self {
            library: ShaderLibrary::new(),
            variants: HashMap::new(),
            compile,
        }
    }

    pub fn library(&self) -> &ShaderLibrary {
        &self.library
    }

    pub fn variant(&self, key: ShaderKey) -> Option<ShaderHandle> {
        self.variants.get(&key).copied()
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

impl<F> ShaderProvider for MaterialShaderProvider<F>
where
    F: FnMut(ShaderKey) -> Box<dyn ShaderProgram>,
{
    fn resolve(&mut self, renderable: &Renderable) -> ShaderHandle {
        let key = ShaderKey::for_material(&renderable.material);
        let Self {
            library,
            variants,
            compile,
        } = self;
        *variants.entry(key).or_insert_with(|| {
            let program = compile(key);
            log::debug!("Compiled shader variant {:?} as '{}'", key, program.name());
            library.insert(program)
        })
    }

    fn program_mut(&mut self, handle: ShaderHandle) -> Option<&mut dyn ShaderProgram> {
        self.library.get_mut(handle)
    }
}
