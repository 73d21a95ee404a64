//! NIfTI volume loading and submission discovery
//!
//! Ground truth, mask, and predictions are all binary-valued NIfTI volumes.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::ArrayD;
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
use tracing::debug;

use crate::error::Result;

/// Load a NIfTI file and return its data as an n-dimensional array.
///
/// Handles both `.nii` and `.nii.gz` files; decompression is transparent.
pub fn load_volume<P: AsRef<Path>>(path: P) -> Result<ArrayD<f64>> {
    let path = path.as_ref();
    let object = ReaderOptions::new().read_file(path)?;
    let data = object.into_volume().into_ndarray::<f64>()?;
    debug!("loaded {} with shape {:?}", path.display(), data.shape());
    Ok(data)
}

/// Whether a file name carries one of the two standard volumetric suffixes.
pub fn is_volume_file(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.ends_with(".nii") || name.ends_with(".nii.gz")
}

/// List all NIfTI files in a submission folder, sorted by file name.
///
/// Sorting keeps runs deterministic regardless of directory enumeration
/// order. Non-volume files are ignored.
pub fn list_submissions<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if is_volume_file(name) {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_volume_suffixes() {
        assert!(is_volume_file("sub01.nii"));
        assert!(is_volume_file("sub01.nii.gz"));
        assert!(is_volume_file("SUB01.NII.GZ"));
        assert!(!is_volume_file("sub01.npy"));
        assert!(!is_volume_file("sub01.nii.bak"));
        assert!(!is_volume_file("notes.txt"));
    }

    #[test]
    fn test_list_submissions_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.nii", "a.nii.gz", "readme.txt", "c.NII"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = list_submissions(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, vec!["a.nii.gz", "b.nii", "c.NII"]);
    }
}
