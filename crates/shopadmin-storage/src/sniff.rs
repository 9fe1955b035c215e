//! Image format detection from magic bytes.
//!
//! Client-supplied content types are untrusted; the stored format is
//! always determined from the first bytes of the payload.

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Detects the image format from the leading bytes of a payload.
    ///
    /// Returns `None` when the signature matches no supported format.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }
        // RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::Webp);
        }
        None
    }

    /// The canonical MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// The file extension used in generated storage keys.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(ImageFormat::sniff(&data), Some(ImageFormat::Png));
    }

    #[test]
    fn detects_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(ImageFormat::sniff(&data), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn detects_gif_variants() {
        assert_eq!(ImageFormat::sniff(b"GIF87a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
    }

    #[test]
    fn detects_webp() {
        let mut data = Vec::from(*b"RIFF");
        data.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        data.extend_from_slice(b"WEBPVP8 ");
        assert_eq!(ImageFormat::sniff(&data), Some(ImageFormat::Webp));
    }

    #[test]
    fn riff_without_webp_tag_is_rejected() {
        let mut data = Vec::from(*b"RIFF");
        data.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        data.extend_from_slice(b"WAVEfmt ");
        assert_eq!(ImageFormat::sniff(&data), None);
    }

    #[test]
    fn rejects_unknown_and_truncated_payloads() {
        assert_eq!(ImageFormat::sniff(b"<svg xmlns="), None);
        assert_eq!(ImageFormat::sniff(&[0x89, 0x50]), None);
        assert_eq!(ImageFormat::sniff(&[]), None);
    }
}
