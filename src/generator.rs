//! Contract document generator
//!
//! Lays out a `ContractRequest` as pages of draw commands. The output depends
//! only on the request and the template, so the same request always yields the
//! same document.
//!
//! Sections, top to bottom: header band, title, date and contract id,
//! vehicle information, renter information, terms and conditions, signature,
//! and a footer on every page.

use log::{debug, warn};

use crate::contract::ContractRequest;
use crate::layout::{
    ContractDocument, DrawCommand, PageBuilder, Section, CONTENT_WIDTH_MM, FOOTER_BASELINE_MM, MARGIN_MM, PAGE_WIDTH_MM,
};
use crate::template::ContractTemplate;
use crate::text_layout::{format_rate, humanize_label, LineBreaker};
use crate::types::{Color, FontWeight, Rect, TextStyle};

/// Printed instead of the signature image when it cannot be decoded
pub const SIGNATURE_PLACEHOLDER: &str = "[Signature could not be embedded]";

/// Embedded signature size (mm)
pub const SIGNATURE_WIDTH_MM: f64 = 70.0;
pub const SIGNATURE_HEIGHT_MM: f64 = 30.0;

const HEADER_BAND_HEIGHT: f64 = 40.0;
const SPEC_LINE_HEIGHT: f64 = 6.0;
const TERMS_LINE_HEIGHT: f64 = 5.0;
const TERMS_FONT_SIZE: f64 = 10.0;
/// Clause text is indented against the bullet
const TERMS_WRAP_WIDTH: f64 = CONTENT_WIDTH_MM - 5.0;

/// Separator + heading + name line + date line
const RENTER_BLOCK_HEIGHT: f64 = 23.0;
/// Separator + heading + first clause line
const TERMS_HEAD_HEIGHT: f64 = 8.0 + 8.0 + TERMS_LINE_HEIGHT;
/// Separator through the printed date under the signature line
const SIGNATURE_BLOCK_HEIGHT: f64 = 8.0 + 10.0 + 5.0 + SIGNATURE_HEIGHT_MM + 5.0 + 5.0 + 5.0;

fn header_fill() -> Color {
    Color::rgb8(30, 30, 30)
}

fn rule_color() -> Color {
    Color::rgb8(200, 200, 200)
}

fn footer_color() -> Color {
    Color::rgb8(100, 100, 100)
}

fn heading() -> TextStyle {
    TextStyle::bold(14.0)
}

/// Generates contract layouts from requests
#[derive(Debug, Clone, Default)]
pub struct ContractDocumentGenerator {
    template: ContractTemplate,
}

impl ContractDocumentGenerator {
    pub fn new(template: ContractTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &ContractTemplate {
        &self.template
    }

    /// Lay out the complete contract
    ///
    /// Never fails: an undecodable signature is replaced by a placeholder line.
    pub fn generate(&self, request: &ContractRequest) -> ContractDocument {
        let date = request.formatted_date();
        let contract_id = request.contract_id();
        let mut page = PageBuilder::new();

        self.header(&mut page);
        self.title(&mut page);
        Self::identification(&mut page, &date, &contract_id);
        Self::vehicle_information(&mut page, request);
        Self::renter_information(&mut page, request, &date);
        self.terms(&mut page);
        Self::signature(&mut page, request, &date);
        self.footer(&mut page);

        debug!("contract {} laid out on {} page(s)", contract_id, page.page_number());
        let title = format!("{} {}", self.template.title, contract_id);
        page.finish(contract_id, request.filename(), title)
    }

    fn header(&self, page: &mut PageBuilder) {
        page.mark(Section::Header);
        page.fill(Rect::new(0.0, 0.0, PAGE_WIDTH_MM, HEADER_BAND_HEIGHT), header_fill());
        page.text_at(
            MARGIN_MM,
            20.0,
            self.template.company_name.as_str(),
            TextStyle::bold(24.0).colored(Color::white()),
        );
        page.text_at(
            MARGIN_MM,
            30.0,
            self.template.tagline.as_str(),
            TextStyle::regular(12.0).colored(Color::white()),
        );
        page.set_cursor(50.0);
    }

    fn title(&self, page: &mut PageBuilder) {
        page.mark(Section::Title);
        page.text(PAGE_WIDTH_MM / 2.0, self.template.title.as_str(), TextStyle::bold(16.0).centered());
        page.advance(15.0);
    }

    fn identification(page: &mut PageBuilder, date: &str, contract_id: &str) {
        page.mark(Section::Identification);
        page.text(MARGIN_MM, format!("Date: {}", date), TextStyle::default());
        page.advance(7.0);
        page.text(MARGIN_MM, format!("Contract ID: {}", contract_id), TextStyle::default());
        page.advance(15.0);
    }

    fn vehicle_information(page: &mut PageBuilder, request: &ContractRequest) {
        let vehicle = &request.vehicle;
        page.mark(Section::VehicleInformation);
        page.separator(rule_color());
        page.advance(8.0);
        page.text(MARGIN_MM, "VEHICLE INFORMATION", heading());
        page.advance(8.0);
        page.text(MARGIN_MM, format!("Vehicle: {}", vehicle.name), TextStyle::bold(11.0));
        page.advance(7.0);
        page.text(MARGIN_MM, format!("Category: {}", vehicle.category), TextStyle::default());
        page.advance(7.0);
        page.text(
            MARGIN_MM,
            format!("Daily Rental Rate: {}", format_rate(vehicle.daily_rate)),
            TextStyle::default(),
        );
        page.advance(10.0);

        page.text(MARGIN_MM, "Specifications:", TextStyle::bold(11.0));
        page.advance(7.0);
        for (key, value) in vehicle.present_specifications() {
            page.ensure_room(SPEC_LINE_HEIGHT);
            page.text(
                MARGIN_MM,
                format!("  • {}: {}", humanize_label(key), value),
                TextStyle::default(),
            );
            page.advance(SPEC_LINE_HEIGHT);
        }
        page.advance(10.0);
    }

    fn renter_information(page: &mut PageBuilder, request: &ContractRequest, date: &str) {
        page.ensure_room(RENTER_BLOCK_HEIGHT);
        page.mark(Section::RenterInformation);
        page.separator(rule_color());
        page.advance(8.0);
        page.text(MARGIN_MM, "RENTER INFORMATION", heading());
        page.advance(8.0);
        page.text(MARGIN_MM, format!("Name: {}", request.renter.full_name()), TextStyle::bold(11.0));
        page.advance(7.0);
        page.text(MARGIN_MM, format!("Date of Rental: {}", date), TextStyle::default());
        page.advance(15.0);
    }

    fn terms(&self, page: &mut PageBuilder) {
        page.ensure_room(TERMS_HEAD_HEIGHT);
        page.mark(Section::TermsAndConditions);
        page.separator(rule_color());
        page.advance(8.0);
        page.text(MARGIN_MM, "TERMS AND CONDITIONS", heading());
        page.advance(8.0);

        let breaker = LineBreaker::new(TERMS_WRAP_WIDTH);
        let style = TextStyle::regular(TERMS_FONT_SIZE);
        for clause in &self.template.terms {
            let bulleted = format!("• {}", clause);
            for line in breaker.break_text(&bulleted, TERMS_FONT_SIZE, FontWeight::Regular) {
                // Each wrapped line is checked on its own, so a clause may
                // continue on the next page
                page.ensure_room(TERMS_LINE_HEIGHT);
                page.text(MARGIN_MM, line, style);
                page.advance(TERMS_LINE_HEIGHT);
            }
        }
        page.advance(10.0);
    }

    fn signature(page: &mut PageBuilder, request: &ContractRequest, date: &str) {
        page.ensure_room(SIGNATURE_BLOCK_HEIGHT);
        page.mark(Section::Signature);
        page.separator(rule_color());
        page.advance(8.0);
        page.text(MARGIN_MM, "SIGNATURE", heading());
        page.advance(10.0);
        page.text(MARGIN_MM, "Renter Signature:", TextStyle::default());
        page.advance(5.0);

        match request.signature.decode() {
            Ok(image) => {
                let rect = Rect::new(MARGIN_MM, page.cursor(), SIGNATURE_WIDTH_MM, SIGNATURE_HEIGHT_MM);
                page.image(rect, image);
                page.advance(SIGNATURE_HEIGHT_MM + 5.0);
            }
            Err(e) => {
                warn!("Error adding signature to contract {}: {}", request.contract_id(), e);
                page.text(MARGIN_MM, SIGNATURE_PLACEHOLDER, TextStyle::default());
                page.advance(10.0);
            }
        }

        let y = page.cursor();
        page.line(MARGIN_MM, y, MARGIN_MM + SIGNATURE_WIDTH_MM, y, Color::black());
        page.advance(5.0);
        page.text(MARGIN_MM, request.renter.full_name(), TextStyle::regular(10.0));
        page.advance(5.0);
        page.text(MARGIN_MM, date, TextStyle::regular(10.0));
    }

    fn footer(&self, page: &mut PageBuilder) {
        page.mark(Section::Footer);
        let text = self.template.footer.clone();
        let style = TextStyle::regular(9.0).colored(footer_color()).centered();
        page.for_each_page(|layout, _| {
            layout.commands.push(DrawCommand::Text {
                x: PAGE_WIDTH_MM / 2.0,
                y: FOOTER_BASELINE_MM,
                text: text.clone(),
                style,
            });
        });
    }
}
