//! PDF document builder
//!
//! Provides a small fluent API for building single-stream PDF files: US
//! Letter pages, the three base fonts the document needs, filled
//! rectangles and 8-bit grayscale image XObjects. Output is uncompressed
//! PDF 1.4.

/// Page width in points (US Letter)
pub const PAGE_WIDTH: f32 = 612.0;
/// Page height in points (US Letter)
pub const PAGE_HEIGHT: f32 = 792.0;

/// Base-14 fonts available to the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
            Self::Courier => "F3",
        }
    }

    fn base_font(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::Courier => "Courier",
        }
    }

    /// Approximate width of `text` at `size`, used for centering
    ///
    /// Courier is fixed-pitch (0.6 em); the Helvetica average runs close
    /// to 0.52 em for the uppercase-heavy strings this document draws.
    pub fn text_width(&self, size: f32, text: &str) -> f32 {
        let em = match self {
            Self::Courier => 0.6,
            Self::Helvetica | Self::HelveticaBold => 0.52,
        };
        text.chars().count() as f32 * em * size
    }
}

const FONTS: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::Courier];

/// 8-bit grayscale image registered for embedding
struct GrayXObject {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// PDF builder
///
/// Pages are appended with [`start_page`](Self::start_page); drawing
/// operators always target the most recent page.
pub struct PdfBuilder {
    pages: Vec<String>,
    images: Vec<GrayXObject>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Begin a new US Letter page
    pub fn start_page(&mut self) -> &mut Self {
        self.pages.push(String::with_capacity(2048));
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn content(&mut self) -> &mut String {
        if self.pages.is_empty() {
            self.pages.push(String::with_capacity(2048));
        }
        // Above guarantees at least one page.
        self.pages.last_mut().expect("page exists")
    }

    /// Draw `text` with its baseline at (x, y), origin bottom-left
    pub fn text(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) -> &mut Self {
        let escaped = escape_string(text);
        let op = format!(
            "BT /{} {:.1} Tf {:.2} {:.2} Td ({}) Tj ET\n",
            font.resource(),
            size,
            x,
            y,
            escaped
        );
        self.content().push_str(&op);
        self
    }

    /// Draw `text` horizontally centered on `center_x`
    pub fn text_centered(
        &mut self,
        font: Font,
        size: f32,
        center_x: f32,
        y: f32,
        text: &str,
    ) -> &mut Self {
        let x = center_x - font.text_width(size, text) / 2.0;
        self.text(font, size, x, y, text)
    }

    /// Fill a rectangle; `gray` is 0.0 (black) to 1.0 (white)
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, gray: f32) -> &mut Self {
        let op = format!("{gray:.2} g {x:.2} {y:.2} {w:.2} {h:.2} re f 0 g\n");
        self.content().push_str(&op);
        self
    }

    /// Register a raw 8-bit grayscale image; returns its handle
    pub fn add_gray_image(&mut self, width: u32, height: u32, data: Vec<u8>) -> usize {
        self.images.push(GrayXObject { width, height, data });
        self.images.len() - 1
    }

    /// Draw a registered image scaled into the (x, y, w, h) box
    pub fn draw_image(&mut self, handle: usize, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        let op = format!("q {w:.2} 0 0 {h:.2} {x:.2} {y:.2} cm /Im{handle} Do Q\n");
        self.content().push_str(&op);
        self
    }

    /// Serialize the document to PDF bytes
    pub fn build(self) -> Vec<u8> {
        // Object layout: 1 catalog, 2 page tree, 3-5 fonts, then image
        // XObjects, then (page, content) pairs.
        let first_image = 6usize;
        let first_page = first_image + self.images.len();
        let object_count = first_page + 2 * self.pages.len() - 1;

        let kids: Vec<String> = (0..self.pages.len())
            .map(|i| format!("{} 0 R", first_page + 2 * i))
            .collect();

        let mut resources = String::from("/Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R >>");
        if !self.images.is_empty() {
            resources.push_str(" /XObject << ");
            for i in 0..self.images.len() {
                resources.push_str(&format!("/Im{} {} 0 R ", i, first_image + i));
            }
            resources.push_str(">>");
        }

        let mut objects: Vec<Vec<u8>> = Vec::with_capacity(object_count);
        objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
        objects.push(
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                self.pages.len()
            )
            .into_bytes(),
        );
        for font in FONTS {
            objects.push(
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
                    font.base_font()
                )
                .into_bytes(),
            );
        }

        for img in &self.images {
            let mut body = format!(
                "<< /Type /XObject /Subtype /Image /Width {} /Height {} \
                 /ColorSpace /DeviceGray /BitsPerComponent 8 /Length {} >>\nstream\n",
                img.width,
                img.height,
                img.data.len()
            )
            .into_bytes();
            body.extend_from_slice(&img.data);
            body.extend_from_slice(b"\nendstream");
            objects.push(body);
        }

        for (i, content) in self.pages.iter().enumerate() {
            objects.push(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                     /Resources << {} >> /Contents {} 0 R >>",
                    resources,
                    first_page + 2 * i + 1
                )
                .into_bytes(),
            );
            let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            body.extend_from_slice(content.as_bytes());
            body.extend_from_slice(b"\nendstream");
            objects.push(body);
        }

        // Serialize with a classic xref table.
        let mut out = Vec::with_capacity(4096);
        out.extend_from_slice(b"%PDF-1.4\n");

        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );

        out
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a string for a PDF literal string token
///
/// Non-ASCII characters are replaced; the document's text is ASCII by
/// construction except for free-form names, which degrade readably.
fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\\' => out.push_str("\\\\"),
            c if (' '..='~').contains(&c) => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
