pub mod asset;
pub mod engine;
pub mod environment;
pub mod error;
mod io;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use engine::EngineContext;
pub use environment::Environment;
pub use error::{PainterError, Result};
pub use renderer::{
    CubeFace, DrawItem, FlushStats, FrameStats, HeadlessContext, Material, Painter3D,
    RenderContext, Renderable, ShaderHandle, ShaderProgram, ShaderProvider, Skybox, SkyboxShader,
};
pub use scene::{Camera, Transform};
pub use settings::{PainterSettings, TieBreak};

/// Installs env_logger with an `Info` default. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
