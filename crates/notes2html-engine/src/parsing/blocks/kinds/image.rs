/// An image reference of the form `#file.ext#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    /// The file name between the markers.
    pub file: &'a str,
}

impl<'a> ImageRef<'a> {
    pub const MARKER: char = '#';

    /// Raster formats recognized as images, compared case-insensitively.
    pub const EXTENSIONS: [&'static str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

    /// Parses level-stripped content that consists solely of an image reference.
    pub fn parse(content: &'a str) -> Option<Self> {
        let file = content
            .strip_prefix(Self::MARKER)?
            .strip_suffix(Self::MARKER)?;
        if file.is_empty() || file.contains(Self::MARKER) || file.contains(char::is_whitespace) {
            return None;
        }

        let (stem, ext) = file.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Self::EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
            .then_some(ImageRef { file })
    }
}
