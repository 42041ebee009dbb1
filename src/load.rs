//! Loading of point clouds from NumPy NPZ archives.

use std::io;
use std::path::Path;

use glam::Vec3A;
use npyz::npz::NpzArchive;
use thiserror::Error;

/// The archive field that holds the `N x 3` point coordinates.
const POINTS_FIELD: &str = "points";

/// Errors that can occur while loading a point cloud.
///
/// All load failures are boundary errors: they are reported to the user and
/// end the run before any analysis is attempted.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The archive could not be opened or read.
    #[error("failed to read the archive: {0}")]
    Io(#[from] io::Error),
    /// The archive does not contain the expected array.
    #[error("the archive does not contain a '{POINTS_FIELD}' array")]
    MissingField,
    /// The point array does not have an `N x 3` shape.
    #[error("expected an N x 3 point array, got shape {shape:?}")]
    BadShape {
        /// The shape found in the archive.
        shape: Vec<u64>,
    },
    /// The point array has an unsupported element type.
    #[error("unsupported point element type: {0}")]
    Dtype(#[from] npyz::DTypeError),
}

/// Reads an `N x 3` point cloud from the `points` array of an NPZ archive.
///
/// Both `f64` and `f32` coordinates are accepted; coordinates are narrowed
/// to `f32` for analysis.
pub fn load_point_cloud(path: impl AsRef<Path>) -> Result<Vec<Vec3A>, LoadError> {
    let mut archive = NpzArchive::open(path)?;

    let npy = archive.by_name(POINTS_FIELD)?.ok_or(LoadError::MissingField)?;
    let shape = npy.shape().to_vec();
    if shape.len() != 2 || shape[1] != 3 {
        return Err(LoadError::BadShape { shape });
    }

    let as_f64: Option<Vec<f64>> = match npy.data::<f64>() {
        Ok(data) => Some(data.collect::<io::Result<_>>()?),
        Err(_) => None,
    };
    let coordinates: Vec<f64> = match as_f64 {
        Some(data) => data,
        // NumPy writers produce f64 by default, but accept f32 archives too.
        None => {
            let npy = archive.by_name(POINTS_FIELD)?.ok_or(LoadError::MissingField)?;
            npy.data::<f32>()?
                .map(|value| value.map(f64::from))
                .collect::<io::Result<_>>()?
        }
    };

    Ok(coordinates
        .chunks_exact(3)
        .map(|row| Vec3A::new(row[0] as f32, row[1] as f32, row[2] as f32))
        .collect())
}
