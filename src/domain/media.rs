/// A media submission as it arrives over the wire: base64 text plus the
/// declared kind of the underlying bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPayload {
    pub data: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Image => "image/png",
            Self::Audio => "audio/wav",
        }
    }
}
