use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::info;

use crate::error::IconError;
use crate::icon::IconSpec;

/// Standard extension icon sizes.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Only the toolbar size needs a disabled variant.
pub const DISABLED_SIZE: u32 = 32;

/// Every icon to generate: one per size in order, then the disabled variant.
pub fn icon_specs(sizes: &[u32]) -> Vec<IconSpec> {
    sizes
        .iter()
        .map(|&size| IconSpec::new(size, false))
        .chain(std::iter::once(IconSpec::new(DISABLED_SIZE, true)))
        .collect()
}

/// Render and write a single icon into `output_dir`, replacing any old file.
pub fn write_icon(output_dir: &Path, spec: IconSpec) -> Result<PathBuf, IconError> {
    let image = spec.render()?;
    let path = output_dir.join(spec.file_name());
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Generate the full icon set into `output_dir`.
///
/// The directory is created first (recursively). The first failure stops the
/// run; files written before it are left in place.
pub fn run(output_dir: &Path, sizes: &[u32]) -> Result<Vec<PathBuf>, IconError> {
    std::fs::create_dir_all(output_dir).map_err(|source| IconError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    info!("Generating icons in: {}", output_dir.display());

    let mut written = Vec::new();
    for spec in icon_specs(sizes) {
        let path = write_icon(output_dir, spec)?;
        info!("Created {}", spec.file_name());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "extension-icons-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_icon_specs_order() {
        let specs = icon_specs(&DEFAULT_SIZES);
        let names: Vec<String> = specs.iter().map(|s| s.file_name()).collect();
        assert_eq!(
            names,
            [
                "icon16.png",
                "icon32.png",
                "icon48.png",
                "icon128.png",
                "icon32-disabled.png"
            ]
        );
    }

    #[test]
    fn test_run_writes_complete_set() {
        let dir = scratch_dir("complete").join("nested");
        let written = run(&dir, &DEFAULT_SIZES).unwrap();
        assert_eq!(written.len(), 5);

        assert_eq!(
            file_names(&dir),
            [
                "icon128.png",
                "icon16.png",
                "icon32-disabled.png",
                "icon32.png",
                "icon48.png"
            ]
        );

        for spec in icon_specs(&DEFAULT_SIZES) {
            let img = image::open(dir.join(spec.file_name())).unwrap().into_rgba8();
            assert_eq!(img.dimensions(), (spec.size, spec.size));
            assert_eq!(img.as_raw(), spec.render().unwrap().as_raw());
        }

        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let dir = scratch_dir("rerun");
        run(&dir, &DEFAULT_SIZES).unwrap();
        let first: Vec<Vec<u8>> = file_names(&dir)
            .iter()
            .map(|n| std::fs::read(dir.join(n)).unwrap())
            .collect();

        run(&dir, &DEFAULT_SIZES).unwrap();
        let second: Vec<Vec<u8>> = file_names(&dir)
            .iter()
            .map(|n| std::fs::read(dir.join(n)).unwrap())
            .collect();

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_output_path_is_a_file() {
        let dir = scratch_dir("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("icons");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = run(&blocker, &DEFAULT_SIZES).unwrap_err();
        assert!(matches!(err, IconError::CreateDir { .. }), "{err}");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_zero_size_stops_run() {
        let dir = scratch_dir("zero");
        let err = run(&dir, &[16, 0, 48]).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize(0)));
        // The icon before the bad size was already written and is kept.
        assert_eq!(file_names(&dir), ["icon16.png"]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_failure_keeps_earlier_icons() {
        let dir = scratch_dir("write-fail");
        std::fs::create_dir_all(dir.join("icon48.png")).unwrap();

        let err = run(&dir, &DEFAULT_SIZES).unwrap_err();
        match &err {
            IconError::Write { path, .. } => assert!(path.ends_with("icon48.png"), "{err}"),
            other => panic!("expected write error, got {other}"),
        }
        assert_eq!(file_names(&dir), ["icon16.png", "icon32.png", "icon48.png"]);
        assert!(dir.join("icon48.png").is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
