//! Page geometry and the slicing of a tall surface into pages.

/// Millimetres to PDF points.
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// Physical page geometry in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    /// Top and bottom margin
    pub margin_v: f64,
    /// Left and right margin
    pub margin_h: f64,
}

impl PageGeometry {
    /// Portrait A4 with 20 mm vertical and 15 mm horizontal margins.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_v: 20.0,
            margin_h: 15.0,
        }
    }

    /// Width available to the surface image.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin_h
    }

    /// Height available to the surface image on each page.
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.margin_v
    }

    /// Baseline of the header text, measured from the top of the page.
    pub fn header_baseline(&self) -> f64 {
        self.margin_v - 8.0
    }

    /// Position of the rule under the header, measured from the top.
    pub fn header_rule(&self) -> f64 {
        self.margin_v - 5.0
    }

    /// Baseline of the footer text, measured from the top of the page.
    pub fn footer_baseline(&self) -> f64 {
        self.height - self.margin_v + 10.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// One page's share of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice {
    /// 1-based page number
    pub index: usize,
    /// Total number of pages in the document
    pub total: usize,
    /// First source row drawn on this page
    pub source_y: u32,
    /// Number of source rows drawn on this page
    pub source_rows: u32,
    /// Height in millimetres the rows occupy once scaled to content width
    pub placed_height: f64,
}

impl PageSlice {
    /// Footer label, e.g. `Page 2 of 5`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.index, self.total)
    }

    /// One past the last source row on this page.
    pub fn source_end(&self) -> u32 {
        self.source_y + self.source_rows
    }
}

/// The full pagination plan for one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub geometry: PageGeometry,
    pub surface_width: u32,
    pub surface_height: u32,
    pub pages: Vec<PageSlice>,
}

// Absorbs floating point noise when the scaled height is an exact multiple
// of the content height.
const PAGE_EPSILON: f64 = 1e-9;

impl PageLayout {
    /// Plans the pages for a surface of `width` x `height` pixels.
    ///
    /// The page count is fixed before any slice is computed. Slice `i` starts
    /// at `floor((i - 1) * s)` where `s` is the nominal source height of one
    /// page, and ends where the next one starts; the last slice ends at the
    /// bottom of the surface. A surface with no pixels has no pages.
    ///
    /// ```rust
    /// use studioplan_core::export::{PageGeometry, PageLayout};
    ///
    /// // 900 px wide: one page holds 257 * 900 / 180 = 1285 rows.
    /// let layout = PageLayout::plan(PageGeometry::a4(), 900, 3000);
    /// assert_eq!(layout.page_count(), 3);
    /// assert_eq!(layout.pages[1].source_y, 1285);
    /// assert_eq!(layout.pages[2].source_end(), 3000);
    /// ```
    pub fn plan(geometry: PageGeometry, width: u32, height: u32) -> Self {
        let mut layout = Self {
            geometry,
            surface_width: width,
            surface_height: height,
            pages: Vec::new(),
        };
        if width == 0 || height == 0 {
            return layout;
        }

        let cw = geometry.content_width();
        let ch = geometry.content_height();
        let scale = cw / f64::from(width);

        let total_scaled_height = f64::from(height) * cw / f64::from(width);
        let total = ((total_scaled_height / ch) - PAGE_EPSILON).ceil().max(1.0) as usize;
        let nominal = ch * f64::from(width) / cw;

        let row_at = |page: usize| -> u32 {
            let row = (page as f64 * nominal).floor();
            if row >= f64::from(height) {
                height
            } else {
                row as u32
            }
        };

        layout.pages = (1..=total)
            .map(|index| {
                let source_y = row_at(index - 1);
                let end = if index == total { height } else { row_at(index) };
                let source_rows = end.saturating_sub(source_y);
                PageSlice {
                    index,
                    total,
                    source_y,
                    source_rows,
                    placed_height: f64::from(source_rows) * scale,
                }
            })
            .collect();
        layout
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Footer labels of every page, in order.
    pub fn page_labels(&self) -> Vec<String> {
        self.pages.iter().map(PageSlice::page_label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_pages(width: u32, height: u32) -> usize {
        let g = PageGeometry::a4();
        let scaled = f64::from(height) * g.content_width() / f64::from(width);
        (scaled / g.content_height()).ceil() as usize
    }

    #[test]
    fn test_a4_content_box() {
        let g = PageGeometry::a4();
        assert_eq!(g.content_width(), 180.0);
        assert_eq!(g.content_height(), 257.0);
        assert_eq!(g.header_baseline(), 12.0);
        assert_eq!(g.header_rule(), 15.0);
        assert_eq!(g.footer_baseline(), 287.0);
    }

    #[test]
    fn test_page_count_matches_scaled_height() {
        for (width, height) in [(800, 100), (800, 1142), (800, 1143), (1200, 5000), (375, 9001), (1, 1)] {
            let layout = PageLayout::plan(PageGeometry::a4(), width, height);
            assert_eq!(
                layout.page_count(),
                expected_pages(width, height),
                "{width}x{height}"
            );
        }
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        // 180 px wide maps 1 px to 1 mm, so 514 rows fill exactly two pages.
        let layout = PageLayout::plan(PageGeometry::a4(), 180, 514);
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.pages[1].source_rows, 257);
    }

    #[test]
    fn test_slices_cover_surface_without_gap_or_overlap() {
        for (width, height) in [(800, 3333), (1024, 10_000), (333, 777), (900, 1285)] {
            let layout = PageLayout::plan(PageGeometry::a4(), width, height);
            let mut next = 0;
            for slice in &layout.pages {
                assert_eq!(slice.source_y, next, "{width}x{height} page {}", slice.index);
                assert!(slice.source_rows > 0);
                next = slice.source_end();
            }
            assert_eq!(next, height);
        }
    }

    #[test]
    fn test_final_slice_is_clamped() {
        let layout = PageLayout::plan(PageGeometry::a4(), 900, 3000);
        let last = layout.pages.last().unwrap();
        assert_eq!(last.source_y, 2570);
        assert_eq!(last.source_rows, 430);
        assert!((last.placed_height - 86.0).abs() < 1e-9);
        assert!((layout.pages[0].placed_height - 257.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels_number_every_page() {
        let layout = PageLayout::plan(PageGeometry::a4(), 900, 3000);
        assert_eq!(
            layout.page_labels(),
            vec!["Page 1 of 3", "Page 2 of 3", "Page 3 of 3"]
        );
    }

    #[test]
    fn test_empty_surface_has_no_pages() {
        assert_eq!(PageLayout::plan(PageGeometry::a4(), 0, 100).page_count(), 0);
        assert_eq!(PageLayout::plan(PageGeometry::a4(), 100, 0).page_count(), 0);
    }
}
