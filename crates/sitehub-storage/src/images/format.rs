//! Accepted image formats and content sniffing.

use image::ImageFormat;

/// Image formats the site accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Svg,
    Png,
    Jpeg,
}

impl ImageKind {
    /// Parse a client format tag or file extension (case-insensitive).
    pub fn from_format(format: &str) -> Option<Self> {
        match format.to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// MIME type served for this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Whether `data` looks like an image of this kind.
    ///
    /// Raster formats are sniffed from their magic bytes; SVG must open with
    /// an `<svg` element, optionally behind an XML declaration.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            Self::Svg => looks_like_svg(data),
            Self::Png => image::guess_format(data).ok() == Some(ImageFormat::Png),
            Self::Jpeg => image::guess_format(data).ok() == Some(ImageFormat::Jpeg),
        }
    }
}

fn looks_like_svg(data: &[u8]) -> bool {
    let head = &data[..data.len().min(1024)];
    let Ok(text) = std::str::from_utf8(head).or_else(|e| {
        // A multi-byte character may straddle the cut.
        std::str::from_utf8(&head[..e.valid_up_to()])
    }) else {
        return false;
    };
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}
