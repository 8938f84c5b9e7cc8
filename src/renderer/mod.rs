pub mod collection;
pub mod draw;
pub mod material;
pub mod painter;
pub mod render_context;
pub mod renderable;
pub mod shader;
pub mod skybox;
pub mod stats;
pub mod vertex;

pub use collection::RenderableCollection;
pub use draw::DrawItem;
pub use material::{Material, MaterialFlags};
pub use painter::Painter3D;
pub use render_context::{HeadlessContext, RenderContext};
pub use renderable::Renderable;
pub use shader::{
    MaterialShaderProvider, ShaderHandle, ShaderKey, ShaderLibrary, ShaderProgram, ShaderProvider,
};
pub use skybox::{CubeFace, CubeFaces, Skybox, SkyboxShader};
pub use stats::{FlushStats, FrameStats};
pub use vertex::Vertex;
