// src/renderer/render_context.rs

/// Device-level 3D render pass, opened by `Painter3D::begin` and closed by
/// `Painter3D::end`.
pub trait RenderContext {
    fn begin(&mut self);
    fn end(&mut self);
}

/// Render context without a device behind it.
///
/// Tracks pass nesting so tools and tests can run the painter without a GPU.
#[derive(Debug, Default)]
pub struct HeadlessContext {
    open: bool,
    passes: u64,
}

impl HeadlessContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of passes that were opened and closed.
    pub fn completed_passes(&self) -> u64 {
        self.passes
    }
}

impl RenderContext for HeadlessContext {
    fn begin(&mut self) {
        if self.open {
            log::warn!("HeadlessContext::begin called while a pass is already open");
        }
        self.open = true;
    }

    fn end(&mut self) {
        if !self.open {
            log::warn!("HeadlessContext::end called without an open pass");
            return;
        }
        self.open = false;
        self.passes += 1;
        log::trace!("Headless pass {} complete", self.passes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_completed_passes() {
        let mut context = HeadlessContext::new();
        context.begin();
        assert!(context.is_open());
        context.end();
        context.end();
        assert!(!context.is_open());
        assert_eq!(context.completed_passes(), 1);
    }
}
