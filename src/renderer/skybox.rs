use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use bitflags::bitflags;

use crate::error::Result;
use crate::scene::Camera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn flag(self) -> CubeFaces {
        CubeFaces::from_bits_truncate(1 << self.index())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CubeFaces: u8 {
        const POSITIVE_X = 1 << 0;
        const NEGATIVE_X = 1 << 1;
        const POSITIVE_Y = 1 << 2;
        const NEGATIVE_Y = 1 << 3;
        const POSITIVE_Z = 1 << 4;
        const NEGATIVE_Z = 1 << 5;
    }
}

/// Background cubemap drawn after all scene geometry.
///
/// Faces are requested and loaded independently, possibly from a loader
/// thread while the painter keeps rendering, so share it as `Arc<Skybox>`.
/// The flags are re-read on every query.
#[derive(Debug, Default)]
pub struct Skybox {
    requested: AtomicU8,
    loaded: AtomicU8,
    faces: Mutex<[Option<Vec<u8>>; 6]>,
}

impl Skybox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a face as on its way without providing data yet.
    pub fn request(&self, face: CubeFace) {
        self.requested
            .fetch_or(face.flag().bits(), Ordering::AcqRel);
    }

    /// Stores decoded or raw face data and marks the face requested and loaded.
    pub fn store_face(&self, face: CubeFace, data: Vec<u8>) {
        {
            let mut faces = self.faces.lock().unwrap_or_else(|e| e.into_inner());
            faces[face.index()] = Some(data);
        }
        self.request(face);
        self.loaded.fetch_or(face.flag().bits(), Ordering::AcqRel);
    }

    /// Reads a face from disk. On failure the face stays requested but not
    /// loaded, so the skybox is skipped rather than rejected. A failed reload
    /// also drops whatever data the face held before.
    pub fn load_face<P: AsRef<Path>>(&self, face: CubeFace, path: P) -> Result<()> {
        let path = path.as_ref();
        self.request(face);
        match crate::io::load_binary(path) {
            Ok(bytes) => {
                log::debug!("Loaded skybox face {:?} from {:?}", face, path);
                self.store_face(face, bytes);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load skybox face {:?}: {}", face, err);
                self.loaded.fetch_and(!face.flag().bits(), Ordering::AcqRel);
                let mut faces = self.faces.lock().unwrap_or_else(|e| e.into_inner());
                faces[face.index()] = None;
                Err(err)
            }
        }
    }

    /// Loads all six faces in [`CubeFace::ALL`] order, stopping at the first
    /// failure. Every face is requested before any is read.
    pub fn load_faces<P: AsRef<Path>>(&self, paths: [P; 6]) -> Result<()> {
        for face in CubeFace::ALL {
            self.request(face);
        }
        for (face, path) in CubeFace::ALL.into_iter().zip(paths.iter()) {
            self.load_face(face, path)?;
        }
        Ok(())
    }

    pub fn requested_faces(&self) -> CubeFaces {
        CubeFaces::from_bits_truncate(self.requested.load(Ordering::Acquire))
    }

    pub fn loaded_faces(&self) -> CubeFaces {
        CubeFaces::from_bits_truncate(self.loaded.load(Ordering::Acquire))
    }

    pub fn all_sides_requested(&self) -> bool {
        self.requested_faces().is_all()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_faces().is_all()
    }

    /// Copy of a face's data, if it has been loaded.
    pub fn face_data(&self, face: CubeFace) -> Option<Vec<u8>> {
        let faces = self.faces.lock().unwrap_or_else(|e| e.into_inner());
        faces[face.index()].clone()
    }
}

/// Draws a loaded skybox around the camera.
pub trait SkyboxShader {
    fn render(&mut self, skybox: &Skybox, camera: &Camera);
}
