//! Sources of the rendered surface that gets paginated.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::RgbaImage;
use log::debug;

use crate::error::{PlanError, Result};

/// Something that can produce the rendered document as an RGBA bitmap.
#[async_trait]
pub trait SurfaceSource: Send + Sync {
    /// Captures the current rendering.
    async fn capture(&self) -> Result<RgbaImage>;
}

#[async_trait]
impl SurfaceSource for RgbaImage {
    async fn capture(&self) -> Result<RgbaImage> {
        Ok(self.clone())
    }
}

/// A surface rendered ahead of time and stored as an image file.
#[derive(Debug, Clone)]
pub struct PngSurface {
    path: PathBuf,
}

impl PngSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SurfaceSource for PngSurface {
    async fn capture(&self) -> Result<RgbaImage> {
        let path = self.path.clone();
        debug!("Loading surface from {}", path.display());

        tokio::task::spawn_blocking(move || {
            image::open(&path)
                .map(|decoded| decoded.to_rgba8())
                .map_err(|e| PlanError::export(format!("Could not read surface {}: {e}", path.display())))
        })
        .await
        .map_err(|e| PlanError::export(format!("Surface task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_png_surface_loads_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("surface.png");
        RgbaImage::from_pixel(4, 6, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let captured = PngSurface::new(&path).capture().await.unwrap();
        assert_eq!(captured.dimensions(), (4, 6));
        assert_eq!(captured.get_pixel(3, 5), &Rgba([10, 20, 30, 255]));
    }

    #[tokio::test]
    async fn test_missing_png_is_export_error() {
        let dir = TempDir::new().unwrap();
        let err = PngSurface::new(dir.path().join("absent.png"))
            .capture()
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Export { .. }));
    }
}
