//! PDF assembly with lopdf.
//!
//! Every page carries one image XObject holding its slice of the surface,
//! plus header and footer text in the base-14 Helvetica font. The whole
//! document is serialized to memory; writing it out is the caller's job.

use image::RgbaImage;
use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, Stream,
};

use super::{
    layout::{PageLayout, PageSlice, MM_TO_PT},
    metrics::text_width,
};
use crate::error::{PlanError, Result};

const HEADER_SIZE: f32 = 9.0;
const FOOTER_SIZE: f32 = 8.0;
const TEXT_GREY: f32 = 0.4;
const RULE_GREY: f32 = 0.8;
const RULE_WIDTH: f32 = 0.5;

/// Text drawn around the surface on every page.
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// Header, left: the studio name
    pub subject: String,
    /// Header, right
    pub title: String,
    /// Footer, left
    pub brand: String,
}

impl DocumentText {
    pub fn new(subject: &str, year: &str, brand: &str) -> Self {
        Self {
            subject: subject.to_string(),
            title: format!("Strategic Plan {year}").trim_end().to_string(),
            brand: brand.to_string(),
        }
    }
}

/// Page coordinates: millimetres from the top-left in, points from the
/// bottom-left out.
struct Canvas {
    page_height: f64,
}

impl Canvas {
    fn pt(mm: f64) -> f32 {
        (mm * MM_TO_PT) as f32
    }

    fn y(&self, mm_from_top: f64) -> f32 {
        Self::pt(self.page_height - mm_from_top)
    }
}

/// Renders the paginated document and returns the encoded PDF bytes.
pub fn render(image: &RgbaImage, layout: &PageLayout, text: &DocumentText) -> Result<Vec<u8>> {
    if layout.pages.is_empty() {
        return Err(PlanError::export("Surface is empty"));
    }

    let geometry = layout.geometry;
    let canvas = Canvas {
        page_height: geometry.height,
    };
    let rgb = flatten_on_white(image);
    let row_bytes = layout.surface_width as usize * 3;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.page_count());
    for slice in &layout.pages {
        let mut operations = Vec::new();
        let mut xobjects = Dictionary::new();

        if slice.source_rows > 0 {
            let start = slice.source_y as usize * row_bytes;
            let end = slice.source_end() as usize * row_bytes;
            let pixels = rgb
                .get(start..end)
                .ok_or_else(|| PlanError::export(format!("Page {} is out of bounds", slice.index)))?;

            let image_id = doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(layout.surface_width),
                    "Height" => i64::from(slice.source_rows),
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8_i64,
                },
                pixels.to_vec(),
            ));
            xobjects.set("Im1", image_id);
            operations.extend(place_image(&canvas, layout, slice));
        }

        operations.extend(header(&canvas, layout, text));
        operations.extend(footer(&canvas, layout, text, slice));

        let content = Content { operations }
            .encode()
            .map_err(|e| PlanError::export(format!("Could not encode page {}: {e}", slice.index)))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
                "XObject" => xobjects,
            },
            "MediaBox" => vec![
                0_i64.into(),
                0_i64.into(),
                Canvas::pt(geometry.width).into(),
                Canvas::pt(geometry.height).into(),
            ],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PlanError::export(format!("Could not serialize document: {e}")))?;
    Ok(bytes)
}

fn place_image(canvas: &Canvas, layout: &PageLayout, slice: &PageSlice) -> Vec<Operation> {
    let g = layout.geometry;
    let width = Canvas::pt(g.content_width());
    let height = Canvas::pt(slice.placed_height);
    let bottom = canvas.y(g.margin_v + slice.placed_height);

    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                width.into(),
                0_i64.into(),
                0_i64.into(),
                height.into(),
                Canvas::pt(g.margin_h).into(),
                bottom.into(),
            ],
        ),
        Operation::new("Do", vec!["Im1".into()]),
        Operation::new("Q", vec![]),
    ]
}

fn header(canvas: &Canvas, layout: &PageLayout, text: &DocumentText) -> Vec<Operation> {
    let g = layout.geometry;
    let left = g.margin_h;
    let right = g.width - g.margin_h;
    let baseline = canvas.y(g.header_baseline());
    let rule = canvas.y(g.header_rule());

    let mut ops = vec![Operation::new(
        "rg",
        vec![TEXT_GREY.into(), TEXT_GREY.into(), TEXT_GREY.into()],
    )];
    ops.extend(show_text(&text.subject, HEADER_SIZE, Canvas::pt(left), baseline));
    ops.extend(show_text(
        &text.title,
        HEADER_SIZE,
        right_aligned(&text.title, HEADER_SIZE, right),
        baseline,
    ));
    ops.extend([
        Operation::new("q", vec![]),
        Operation::new("RG", vec![RULE_GREY.into(), RULE_GREY.into(), RULE_GREY.into()]),
        Operation::new("w", vec![RULE_WIDTH.into()]),
        Operation::new("m", vec![Canvas::pt(left).into(), rule.into()]),
        Operation::new("l", vec![Canvas::pt(right).into(), rule.into()]),
        Operation::new("S", vec![]),
        Operation::new("Q", vec![]),
    ]);
    ops
}

fn footer(
    canvas: &Canvas,
    layout: &PageLayout,
    text: &DocumentText,
    slice: &PageSlice,
) -> Vec<Operation> {
    let g = layout.geometry;
    let baseline = canvas.y(g.footer_baseline());
    let label = slice.page_label();

    let mut ops = vec![Operation::new(
        "rg",
        vec![TEXT_GREY.into(), TEXT_GREY.into(), TEXT_GREY.into()],
    )];
    ops.extend(show_text(&text.brand, FOOTER_SIZE, Canvas::pt(g.margin_h), baseline));
    ops.extend(show_text(
        &label,
        FOOTER_SIZE,
        right_aligned(&label, FOOTER_SIZE, g.width - g.margin_h),
        baseline,
    ));
    ops
}

/// X position in points that ends `text` at `right_mm`.
fn right_aligned(text: &str, size: f32, right_mm: f64) -> f32 {
    Canvas::pt(right_mm) - text_width(text, f64::from(size)) as f32
}

fn show_text(text: &str, size: f32, x: f32, y: f32) -> [Operation; 5] {
    [
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), size.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Encodes text for the WinAnsi font encoding. Characters it cannot
/// represent become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}

/// Composites RGBA pixels over a white page and drops the alpha channel.
fn flatten_on_white(image: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.width() as usize * image.height() as usize * 3);
    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u16::from(a);
        for channel in [r, g, b] {
            let blended = (u16::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
            rgb.push(blended as u8);
        }
    }
    rgb
}
