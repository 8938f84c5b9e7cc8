/// What a single flush dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    pub draw_calls: u32,
    pub shader_activations: u32,
    /// Draws whose shader handle the provider could not resolve to a program.
    pub skipped: u32,
}

impl FlushStats {
    pub fn is_empty(&self) -> bool {
        self.draw_calls == 0 && self.shader_activations == 0 && self.skipped == 0
    }
}

/// Totals for one `begin()`/`end()` bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub flushes: u32,
    pub draw_calls: u32,
    pub shader_activations: u32,
    pub skipped: u32,
    pub skybox_drawn: bool,
}

impl FrameStats {
    pub fn record(&mut self, flush: FlushStats) {
        self.flushes += 1;
        self.draw_calls += flush.draw_calls;
        self.shader_activations += flush.shader_activations;
        self.skipped += flush.skipped;
    }
}
