//! PDF encoder for laid-out contracts
//!
//! ## Architecture
//!
//! This renderer is a "dumb renderer": it does not make any layout decisions.
//! Positions, page breaks and wrapping come from the `ContractDocument`
//! built by the generator; the renderer only converts millimetre coordinates
//! into PDF user space and writes the objects.
//!
//! ## Object numbering
//!
//! ```text
//! 1 catalog, 2 page tree, 3 Helvetica, 4 Helvetica-Bold, 5 document info,
//! then image XObjects (+ soft masks), then page/content pairs
//! ```

use log::{debug, info};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref, TextStr};

use crate::canvas::PdfCanvas;
use crate::error::{RendererError, RendererResult};
use crate::font_metrics::text_width_mm;
use crate::geometry::{flip_y, media_box, mm, rect_to_pdf};
use crate::image_utils::{add_image_to_pdf, deflate};
use crate::layout::{ContractDocument, DrawCommand, LayoutPage, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::types::{FontWeight, TextAlign};

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");
const PRODUCER: &str = "rental_contract";

/// Image XObject registered for the document
struct ImageResource {
    name: String,
    id: Ref,
}

/// Single-use PDF writer for one contract document
pub struct PdfRenderer {
    pdf: Pdf,
    catalog_id: Ref,
    page_tree_id: Ref,
    regular_font_id: Ref,
    bold_font_id: Ref,
    info_id: Ref,
    next_ref_id: i32,
}

impl PdfRenderer {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // Create references
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let regular_font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let info_id = Ref::new(5);

        // Set up catalog (page tree is written once all pages exist)
        pdf.catalog(catalog_id).pages(page_tree_id);

        for (id, base_font) in [(regular_font_id, Name(b"Helvetica")), (bold_font_id, Name(b"Helvetica-Bold"))] {
            let mut font = pdf.type1_font(id);
            font.base_font(base_font);
            font.pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
        }

        Self {
            pdf,
            catalog_id,
            page_tree_id,
            regular_font_id,
            bold_font_id,
            info_id,
            next_ref_id: 6, // Start from 6 (1-5 reserved above)
        }
    }

    fn next_ref(&mut self) -> Ref {
        let r = Ref::new(self.next_ref_id);
        self.next_ref_id += 1;
        r
    }

    /// Encode the whole document and return the PDF bytes
    pub fn render(mut self, document: &ContractDocument) -> RendererResult<Vec<u8>> {
        if document.pages.is_empty() {
            return Err(RendererError::InvalidLayout("document has no pages".to_string()));
        }
        debug!(
            "rendering {} (catalog {}, {} pages, {} images)",
            document.filename,
            self.catalog_id.get(),
            document.pages.len(),
            document.images.len()
        );

        self.pdf
            .document_info(self.info_id)
            .title(TextStr(&document.title))
            .producer(TextStr(PRODUCER));

        let mut images = Vec::with_capacity(document.images.len());
        for (index, image) in document.images.iter().enumerate() {
            let id = self.next_ref();
            let smask_id = self.next_ref();
            add_image_to_pdf(&mut self.pdf, image, id, smask_id)?;
            images.push(ImageResource { name: format!("Im{}", index + 1), id });
        }

        let mut page_ids = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            page_ids.push(self.render_page(page, &images)?);
        }

        self.pdf
            .pages(self.page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        let pdf_bytes = self.pdf.finish();
        info!(
            "PDF generated: {} bytes ({:.2} MB), {} page(s)",
            pdf_bytes.len(),
            pdf_bytes.len() as f64 / 1_048_576.0,
            page_ids.len()
        );
        Ok(pdf_bytes)
    }

    fn render_page(&mut self, page: &LayoutPage, images: &[ImageResource]) -> RendererResult<Ref> {
        let page_id = self.next_ref();
        let content_id = self.next_ref();

        let mut canvas = PdfCanvas::new();
        let mut used_images: Vec<&ImageResource> = Vec::new();
        for command in &page.commands {
            if let DrawCommand::Image { image, .. } = command {
                let resource = images.get(*image).ok_or_else(|| {
                    RendererError::InvalidLayout(format!("image index {} out of range", image))
                })?;
                if !used_images.iter().any(|r| r.id == resource.id) {
                    used_images.push(resource);
                }
            }
            Self::draw(&mut canvas, command, images);
        }

        let content = deflate(&canvas.finish())?;
        self.pdf.stream(content_id, &content).filter(Filter::FlateDecode);

        let mut pdf_page = self.pdf.page(page_id);
        pdf_page.media_box(media_box(PAGE_WIDTH_MM, PAGE_HEIGHT_MM));
        pdf_page.parent(self.page_tree_id);
        pdf_page.contents(content_id);
        {
            let mut resources = pdf_page.resources();
            resources
                .fonts()
                .pair(REGULAR_FONT, self.regular_font_id)
                .pair(BOLD_FONT, self.bold_font_id);
            if !used_images.is_empty() {
                let mut x_objects = resources.x_objects();
                for resource in &used_images {
                    x_objects.pair(Name(resource.name.as_bytes()), resource.id);
                }
            }
        }
        pdf_page.finish();
        Ok(page_id)
    }

    fn draw(canvas: &mut PdfCanvas, command: &DrawCommand, images: &[ImageResource]) {
        match command {
            DrawCommand::Text { x, y, text, style } => {
                let font = match style.weight {
                    FontWeight::Regular => REGULAR_FONT,
                    FontWeight::Bold => BOLD_FONT,
                };
                let left = match style.align {
                    TextAlign::Left => *x,
                    TextAlign::Center => x - text_width_mm(text, style.size, style.weight) / 2.0,
                };
                canvas.set_fill_color(style.color);
                canvas.set_font(font, style.size as f32);
                canvas.draw_string(mm(left), flip_y(*y, PAGE_HEIGHT_MM), text);
            }
            DrawCommand::Line { x1, y1, x2, y2, color, width } => {
                canvas.set_stroke_color(*color);
                canvas.set_line_width(mm(*width));
                canvas.line(
                    mm(*x1),
                    flip_y(*y1, PAGE_HEIGHT_MM),
                    mm(*x2),
                    flip_y(*y2, PAGE_HEIGHT_MM),
                );
            }
            DrawCommand::Fill { rect, color } => {
                let area = rect_to_pdf(rect, PAGE_HEIGHT_MM);
                canvas.set_fill_color(*color);
                canvas.fill_rect(area.x1, area.y1, area.x2 - area.x1, area.y2 - area.y1);
            }
            DrawCommand::Image { rect, image } => {
                // Index validated by render_page
                if let Some(resource) = images.get(*image) {
                    let area = rect_to_pdf(rect, PAGE_HEIGHT_MM);
                    canvas.draw_image(
                        Name(resource.name.as_bytes()),
                        area.x1,
                        area.y1,
                        area.x2 - area.x1,
                        area.y2 - area.y1,
                    );
                }
            }
        }
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: encode `document` with a fresh renderer
pub fn render_pdf(document: &ContractDocument) -> RendererResult<Vec<u8>> {
    PdfRenderer::new().render(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Section, SectionMark};
    use crate::types::{Color, Rect, TextStyle};
    use image::{Rgba, RgbaImage};

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn document(pages: Vec<LayoutPage>, images: Vec<RgbaImage>) -> ContractDocument {
        ContractDocument {
            contract_id: "excavator-001-1".to_string(),
            filename: "rental-excavator-001-1.pdf".to_string(),
            title: "RENTAL CONTRACT excavator-001-1".to_string(),
            pages,
            images,
            sections: vec![SectionMark { section: Section::Header, page: 1 }],
        }
    }

    fn text_page(text: &str) -> LayoutPage {
        LayoutPage {
            commands: vec![
                DrawCommand::Fill { rect: Rect::new(0.0, 0.0, 210.0, 40.0), color: Color::rgb8(30, 30, 30) },
                DrawCommand::Text {
                    x: 105.0,
                    y: 50.0,
                    text: text.to_string(),
                    style: TextStyle::bold(16.0).centered(),
                },
                DrawCommand::Line { x1: 20.0, y1: 60.0, x2: 190.0, y2: 60.0, color: Color::black(), width: 0.2 },
            ],
        }
    }

    #[test]
    fn test_renders_pdf_with_all_pages() {
        let bytes = render_pdf(&document(vec![text_page("one"), text_page("two")], vec![])).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Count 2"), 1);
        assert_eq!(count(&bytes, b"/Helvetica-Bold"), 1);
        assert_eq!(count(&bytes, b"/WinAnsiEncoding"), 2);
        assert_eq!(count(&bytes, b"/SMask"), 0);
    }

    #[test]
    fn test_image_written_with_soft_mask() {
        let mut signature = RgbaImage::new(8, 4);
        signature.put_pixel(3, 2, Rgba([0, 0, 0, 255]));
        let mut page = text_page("signed");
        page.commands.push(DrawCommand::Image { rect: Rect::new(20.0, 200.0, 70.0, 30.0), image: 0 });
        let bytes = render_pdf(&document(vec![page], vec![signature])).unwrap();
        assert_eq!(count(&bytes, b"/Subtype /Image"), 2);
        assert_eq!(count(&bytes, b"/SMask"), 1);
        assert_eq!(count(&bytes, b"/Im1"), 1);
    }

    #[test]
    fn test_dangling_image_index_is_invalid() {
        let mut page = text_page("broken");
        page.commands.push(DrawCommand::Image { rect: Rect::new(0.0, 0.0, 1.0, 1.0), image: 3 });
        let result = render_pdf(&document(vec![page], vec![]));
        assert!(matches!(result, Err(RendererError::InvalidLayout(_))));
    }

    #[test]
    fn test_empty_document_is_invalid() {
        assert!(matches!(render_pdf(&document(vec![], vec![])), Err(RendererError::InvalidLayout(_))));
    }
}
