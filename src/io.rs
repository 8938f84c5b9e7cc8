use std::path::Path;

use crate::error::{PainterError, Result};

pub(crate) fn load_binary(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| PainterError::Io {
        path: path.to_path_buf(),
        source,
    })
}
