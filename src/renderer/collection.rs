use super::draw::DrawItem;
use crate::settings::TieBreak;

/// Draws submitted since the last flush.
///
/// Items stay in submission order until [`sort`](Self::sort) groups them by
/// shader. The collection only holds handles, never the meshes themselves.
#[derive(Debug, Default)]
pub struct RenderableCollection {
    items: Vec<DrawItem>,
}

impl RenderableCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    /// Stable sort by shader handle, then by `tie_break` inside each group.
    pub fn sort(&mut self, tie_break: TieBreak) {
        match tie_break {
            TieBreak::SubmissionOrder => self.items.sort_by_key(|item| item.shader),
            TieBreak::FrontToBack => self.items.sort_by(|a, b| {
                a.shader
                    .cmp(&b.shader)
                    .then_with(|| a.view_distance_sq().total_cmp(&b.view_distance_sq()))
            }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[DrawItem] {
        &self.items
    }

    /// Drops every pending draw; capacity is kept for the next cycle.
    pub fn empty(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of shader switches a walk over the current order would make.
    pub fn shader_runs(&self) -> usize {
        let mut runs = 0;
        let mut previous = None;
        for item in &self.items {
            if previous != Some(item.shader) {
                runs += 1;
                previous = Some(item.shader);
            }
        }
        runs
    }
}
