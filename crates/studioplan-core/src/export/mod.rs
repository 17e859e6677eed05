//! Paginated document export.
//!
//! A rendered plan arrives as one tall bitmap (a [`SurfaceSource`]). The
//! [`Exporter`] captures it, plans the pages with [`PageLayout`], assembles
//! an A4 PDF with header and footer text on every page, and writes it to the
//! configured output directory in one step.
//!
//! ```text
//! ┌───────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────┐
//! │ SurfaceSource │───▶│  PageLayout  │───▶│  pdf::render │───▶│ file.pdf │
//! │   (capture)   │    │ (N slices)   │    │  (in memory) │    │ (write)  │
//! └───────────────┘    └──────────────┘    └──────────────┘    └──────────┘
//! ```

use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::error::{PlanError, Result, ResultExt};

pub mod filename;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod surface;

pub use filename::document_file_name;
pub use layout::{PageGeometry, PageLayout, PageSlice};
pub use pdf::DocumentText;
pub use surface::{PngSurface, SurfaceSource};

/// Footer text used when no brand is configured.
pub const DEFAULT_BRAND: &str = "Generated by Studioplan";

/// Where and how documents are exported.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub brand: String,
    pub geometry: PageGeometry,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            brand: DEFAULT_BRAND.to_string(),
            geometry: PageGeometry::a4(),
        }
    }
}

impl ExportOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the footer brand. A missing or blank brand keeps the default.
    pub fn with_brand(mut self, brand: Option<String>) -> Self {
        if let Some(brand) = brand.filter(|b| !b.trim().is_empty()) {
            self.brand = brand;
        }
        self
    }
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written to this path
    Saved(PathBuf),
    /// Another export was still running; nothing was produced
    Skipped,
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Turns rendered surfaces into paginated PDF files, one at a time.
#[derive(Debug, Default)]
pub struct Exporter {
    options: ExportOptions,
    busy: AtomicBool,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            busy: AtomicBool::new(false),
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// True while an export is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Exports `surface` as `Strategic_Plan_{name}_{year}.pdf`.
    ///
    /// Returns [`ExportOutcome::Skipped`] without touching the surface when
    /// another export on this exporter has not finished yet.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Export` if the surface cannot be captured, is
    /// empty, or the document cannot be built or written. No file is left
    /// behind in that case.
    pub async fn export<S>(&self, surface: &S, name: &str, year: &str) -> Result<ExportOutcome>
    where
        S: SurfaceSource + ?Sized,
    {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            warn!("Export of '{name}' skipped: another export is in progress");
            return Ok(ExportOutcome::Skipped);
        };

        let image = surface
            .capture()
            .await
            .map_err(|e| PlanError::export(format!("Could not capture surface: {e}")))?;
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(PlanError::export(format!(
                "Surface is empty ({width}x{height})"
            )));
        }

        let layout = PageLayout::plan(self.options.geometry, width, height);
        let pages = layout.page_count();
        debug!("Paginating {width}x{height} surface into {pages} pages");

        let text = DocumentText::new(name, year, &self.options.brand);
        let path = self.options.output_dir.join(document_file_name(name, year));
        let target = path.clone();

        tokio::task::spawn_blocking(move || {
            let bytes = pdf::render(&image, &layout, &text)?;
            write_document(&target, &bytes)
        })
        .await
        .export_context("Export task failed")??;

        info!("Saved {pages} page plan to {}", path.display());
        Ok(ExportOutcome::Saved(path))
    }
}

/// Stages the document next to `path` and renames it into place, so a failed
/// write never leaves a truncated file and never clobbers an earlier export.
fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).export_context(format!("Could not create {}", dir.display()))?;

    let mut staged = NamedTempFile::new_in(dir)
        .export_context(format!("Could not stage {}", path.display()))?;
    staged
        .write_all(bytes)
        .export_context(format!("Could not write {}", path.display()))?;
    staged
        .persist(path)
        .export_context(format!("Could not write {}", path.display()))?;
    Ok(())
}
