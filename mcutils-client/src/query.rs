use mcutils_types::ImageFormat;
use url::form_urlencoded;

/// The default edge length (pixels) of a rendered skin part.
pub const DEFAULT_SKIN_PART_SIZE: u32 = 256;

/// The default edge length (pixels) of a rendered cape part.
pub const DEFAULT_CAPE_PART_SIZE: u32 = 256;

/// The default width (pixels) of a server preview image.
pub const DEFAULT_SERVER_PREVIEW_SIZE: u32 = 768;

/// Builds the query string for the supplied option pairs.
///
/// The pairs are `application/x-www-form-urlencoded` in the order they were supplied. No pairs
/// produce an empty string, otherwise the result starts with `?`.
pub fn build_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return String::new();
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("?{encoded}")
}

/// The render options of a skin part image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinPartOptions {
    /// The image format (and file extension) to request.
    pub format: ImageFormat,
    /// The edge length of the rendered image in pixels.
    pub size: u32,
    /// Whether the overlay (second) skin layer is rendered.
    pub overlays: bool,
}

impl Default for SkinPartOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            size: DEFAULT_SKIN_PART_SIZE,
            overlays: false,
        }
    }
}

impl SkinPartOptions {
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_overlays(mut self, overlays: bool) -> Self {
        self.overlays = overlays;
        self
    }

    /// Returns the query pairs of these options.
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("size", self.size.to_string()),
            ("overlays", self.overlays.to_string()),
        ]
    }
}
