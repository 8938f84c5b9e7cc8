use std::sync::Arc;

use super::collection::RenderableCollection;
use super::draw::DrawItem;
use super::render_context::RenderContext;
use super::renderable::Renderable;
use super::shader::{ShaderHandle, ShaderProvider};
use super::skybox::{Skybox, SkyboxShader};
use super::stats::{FlushStats, FrameStats};
use crate::environment::Environment;
use crate::error::{PainterError, Result};
use crate::scene::Camera;
use crate::settings::PainterSettings;

/// Batches renderables by shader program and draws them between `begin()`
/// and `end()`.
///
/// The painter is either idle or rendering. `begin()` opens the render
/// context, `draw()` queues renderables, `flush()` dispatches the queue
/// grouped by shader, and `end()` flushes, draws the skybox if one is bound
/// and loaded, then closes the context.
///
/// A painter and its context, shaders and skybox shader belong to a single
/// rendering thread. There is no internal locking; callers must not share a
/// painter across threads. Only the bound [`Skybox`] may be updated
/// concurrently.
pub struct Painter3D<C, P, S> {
    context: C,
    shader_provider: P,
    skybox_shader: S,
    renderables: RenderableCollection,
    camera: Option<Camera>,
    environment: Option<Environment>,
    skybox: Option<Arc<Skybox>>,
    is_rendering: bool,
    settings: PainterSettings,
    frame_stats: FrameStats,
}

impl<C, P, S> Painter3D<C, P, S>
where
    C: RenderContext,
    P: ShaderProvider,
    S: SkyboxShader,
{
    pub fn new(context: C, shader_provider: P, skybox_shader: S) -> Self {
        Self::with_settings(
            context,
            shader_provider,
            skybox_shader,
            PainterSettings::default(),
        )
    }

    pub fn with_settings(
        context: C,
        shader_provider: P,
        skybox_shader: S,
        settings: PainterSettings,
    ) -> Self {
        Self {
            context,
            shader_provider,
            skybox_shader,
            renderables: RenderableCollection::with_capacity(settings.pending_capacity),
            camera: None,
            environment: None,
            skybox: None,
            is_rendering: false,
            settings,
            frame_stats: FrameStats::default(),
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.is_rendering
    }

    /// Binds the camera for subsequent draws. Draws already queued in this
    /// frame are flushed first so they keep the camera they were submitted
    /// with.
    pub fn set_camera(&mut self, camera: Camera) {
        if self.is_rendering && !self.renderables.is_empty() {
            self.flush();
        }
        self.camera = Some(camera);
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn set_environment(&mut self, environment: Option<Environment>) {
        self.environment = environment;
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    pub fn set_skybox(&mut self, skybox: Option<Arc<Skybox>>) {
        self.skybox = skybox;
    }

    pub fn skybox(&self) -> Option<&Arc<Skybox>> {
        self.skybox.as_ref()
    }

    pub fn begin(&mut self) -> Result<()> {
        if self.is_rendering {
            return Err(PainterError::InvalidState(
                "already rendering; call end() before begin() again",
            ));
        }
        if self.camera.is_none() {
            return Err(PainterError::Precondition(
                "camera must be set before begin()",
            ));
        }

        self.context.begin();
        self.frame_stats = FrameStats::default();
        self.is_rendering = true;
        log::debug!("Painter frame started");
        Ok(())
    }

    /// Queues a renderable with the current camera, environment and the
    /// shader the provider picks for it.
    pub fn draw(&mut self, renderable: &Renderable) -> Result<()> {
        if !self.is_rendering {
            return Err(PainterError::InvalidState(
                "renderables can only be drawn between begin() and end()",
            ));
        }
        let Some(camera) = self.camera else {
            return Err(PainterError::Precondition(
                "camera must be set before drawing",
            ));
        };

        let environment = self.environment;
        let shader = self.shader_provider.resolve(renderable);
        self.renderables.push(DrawItem {
            renderable: *renderable,
            shader,
            camera,
            environment,
        });
        Ok(())
    }

    pub fn draw_all<'a, I>(&mut self, renderables: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Renderable>,
    {
        for renderable in renderables {
            self.draw(renderable)?;
        }
        Ok(())
    }

    /// Draws everything queued, one shader activation per run of equal
    /// shaders after sorting, and empties the queue.
    pub fn flush(&mut self) -> FlushStats {
        let mut stats = FlushStats::default();
        self.renderables.sort(self.settings.tie_break);

        let provider = &mut self.shader_provider;
        let context = &mut self.context;
        let mut active: Option<ShaderHandle> = None;

        for item in self.renderables.iter() {
            if active != Some(item.shader) {
                if let Some(previous) = active.take() {
                    if let Some(program) = provider.program_mut(previous) {
                        program.deactivate();
                    }
                }

                let Some(program) = provider.program_mut(item.shader) else {
                    log::warn!("No shader program for {:?}; skipping draw", item.shader);
                    stats.skipped += 1;
                    continue;
                };
                log::trace!("Activating shader '{}'", program.name());
                program.activate(&item.camera, &mut *context);
                stats.shader_activations += 1;
                active = Some(item.shader);
            }

            if let Some(program) = provider.program_mut(item.shader) {
                program.draw(item);
                stats.draw_calls += 1;
            }
        }

        if let Some(previous) = active {
            if let Some(program) = provider.program_mut(previous) {
                program.deactivate();
            }
        }

        self.renderables.empty();
        if self.is_rendering {
            self.frame_stats.record(stats);
        }
        stats
    }

    pub fn end(&mut self) -> Result<FrameStats> {
        if !self.is_rendering {
            return Err(PainterError::InvalidState(
                "not rendering; call begin() before end()",
            ));
        }

        self.flush();

        if let Some(skybox) = self.skybox.as_ref() {
            if !skybox.all_sides_requested() {
                return Err(PainterError::Precondition(
                    "skybox wasn't fully loaded; load all six sides first",
                ));
            }
            if skybox.is_loaded() {
                if let Some(camera) = self.camera.as_ref() {
                    self.skybox_shader.render(skybox, camera);
                    self.frame_stats.skybox_drawn = true;
                }
            } else {
                log::debug!(
                    "Skybox still streaming ({:?} loaded); skipping this frame",
                    skybox.loaded_faces()
                );
            }
        }

        self.context.end();
        self.is_rendering = false;

        let stats = self.frame_stats;
        if self.settings.log_frame_stats {
            log::info!(
                "Frame: {} draws, {} shader activations, {} flushes, skybox: {}",
                stats.draw_calls,
                stats.shader_activations,
                stats.flushes,
                stats.skybox_drawn
            );
        } else {
            log::debug!("Painter frame finished: {:?}", stats);
        }
        Ok(stats)
    }

    pub fn pending(&self) -> &RenderableCollection {
        &self.renderables
    }

    /// Totals of the current frame, or of the last one once `end()` returned.
    pub fn frame_stats(&self) -> FrameStats {
        self.frame_stats
    }

    pub fn settings(&self) -> &PainterSettings {
        &self.settings
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn shader_provider(&self) -> &P {
        &self.shader_provider
    }

    pub fn shader_provider_mut(&mut self) -> &mut P {
        &mut self.shader_provider
    }

    pub fn skybox_shader(&self) -> &S {
        &self.skybox_shader
    }
}
