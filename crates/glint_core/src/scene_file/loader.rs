//! Scene file loading.
//!
//! Reads a scene description from disk and runs the lenient parser over it.

use std::path::Path;

use thiserror::Error;

use crate::scene::Scene;
use crate::scene_file::parser::{parse_scene, parse_scene_strict, ParseError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description file.
///
/// Malformed content is not an error: parsing stops at the first bad line
/// and the scene contains everything before it. Only I/O failures are
/// reported.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let content = read_scene_file(path.as_ref())?;
    let scene = parse_scene(&content);

    log::info!(
        "Loaded {}: {} spheres, {} triangles",
        path.as_ref().display(),
        scene.sphere_count(),
        scene.triangle_count()
    );
    Ok(scene)
}

/// Load a scene description file, failing on the first malformed line.
pub fn load_scene_strict<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let content = read_scene_file(path.as_ref())?;
    Ok(parse_scene_strict(&content)?)
}

fn read_scene_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}
