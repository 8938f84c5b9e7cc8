use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PainterSettings {
    #[serde(default)]
    pub tie_break: TieBreak,
    #[serde(default = "PainterSettings::default_pending_capacity")]
    pub pending_capacity: usize,
    #[serde(default)]
    pub log_frame_stats: bool,
}

impl Default for PainterSettings {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            pending_capacity: Self::default_pending_capacity(),
            log_frame_stats: false,
        }
    }
}

impl PainterSettings {
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<PainterSettings>(&contents) {
                Ok(settings) => {
                    info!("Loaded painter settings from {:?}", path);
                    settings.validate()
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default painter settings.",
                        path, err
                    );
                    PainterSettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Painter settings file {:?} not found. Using default settings.",
                    path
                );
                PainterSettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default painter settings.",
                    path, err
                );
                PainterSettings::default()
            }
        }
    }

    fn validate(mut self) -> Self {
        if self.pending_capacity == 0 {
            warn!("Pending capacity must be greater than zero. Using default value.");
            self.pending_capacity = Self::default_pending_capacity();
        }

        self
    }

    const fn default_pending_capacity() -> usize {
        256
    }
}

/// Order of draws that share a shader program.
///
/// Draws are always grouped by shader first; this only decides the order
/// inside a group. Both variants keep submission order for exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    SubmissionOrder,
    /// Nearest to the camera eye first.
    FrontToBack,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::SubmissionOrder
    }
}
