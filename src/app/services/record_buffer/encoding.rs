//! Text encodings of SWAT model files
//!
//! SWAT writes its text files in whatever 8-bit code page the generating GUI
//! used. Detection is an external concern: a detector yields a codec name and
//! [`resolve_encoding`] turns it into a [`TextEncoding`], falling back to
//! latin-1 when the name is missing or unusable.

use crate::constants::{FALLBACK_ENCODING, REDIRECTED_ENCODINGS};
use crate::{Error, Result};
use tracing::{debug, warn};

/// Codec used to decode and re-encode a model file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// ISO-8859-1, every byte maps to the code point of the same value
    #[default]
    Latin1,
    /// 7-bit ASCII
    Ascii,
    /// UTF-8
    Utf8,
    /// Any other WHATWG encoding known to `encoding_rs`
    Labelled(&'static encoding_rs::Encoding),
}

impl TextEncoding {
    /// Resolve a codec name such as "latin-1", "utf-8" or "windows-1252"
    ///
    /// Latin-1 labels are kept as a true byte-to-code-point mapping, since
    /// the WHATWG label table aliases them to windows-1252.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Some(TextEncoding::Latin1),
            "ascii" | "us-ascii" => Some(TextEncoding::Ascii),
            "utf-8" | "utf8" => Some(TextEncoding::Utf8),
            other => encoding_rs::Encoding::for_label(other.as_bytes()).map(TextEncoding::Labelled),
        }
    }

    /// Human-readable codec name
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Labelled(encoding) => encoding.name(),
        }
    }

    /// Decode file bytes, failing on sequences invalid under this codec
    pub fn decode(&self, file: &str, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| b as char).collect())
                } else {
                    Err(Error::decode(file, self.name()))
                }
            }
            TextEncoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| Error::decode(file, self.name()))
            }
            TextEncoding::Labelled(encoding) => {
                let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
                if had_errors {
                    Err(Error::decode(file, self.name()))
                } else {
                    Ok(text.into_owned())
                }
            }
        }
    }

    /// Encode text for writing, failing on characters this codec cannot hold
    pub fn encode(&self, file: &str, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| Error::encode(file, self.name())))
                .collect(),
            TextEncoding::Ascii => {
                if text.is_ascii() {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(Error::encode(file, self.name()))
                }
            }
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Labelled(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if had_errors {
                    Err(Error::encode(file, self.name()))
                } else {
                    Ok(bytes.into_owned())
                }
            }
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Source of a codec name for a sample of file bytes
pub trait EncodingDetector {
    /// Guess the codec name of `sample`, `None` when undecided
    fn detect(&self, sample: &[u8]) -> Option<String>;
}

/// Detector that always answers with a configured codec name
#[derive(Debug, Clone, Default)]
pub struct FixedEncoding {
    pub label: Option<String>,
}

impl FixedEncoding {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl EncodingDetector for FixedEncoding {
    fn detect(&self, _sample: &[u8]) -> Option<String> {
        self.label.clone()
    }
}

/// Detector that tells ASCII and UTF-8 apart from everything else
///
/// Pure ASCII answers `ascii`, valid UTF-8 with multi-byte sequences
/// answers `utf-8`, anything else stays undecided.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteHeuristic;

impl EncodingDetector for ByteHeuristic {
    fn detect(&self, sample: &[u8]) -> Option<String> {
        if sample.is_ascii() {
            Some("ascii".to_string())
        } else if std::str::from_utf8(sample).is_ok() {
            Some("utf-8".to_string())
        } else {
            None
        }
    }
}

/// Turn a detected codec name into a usable encoding
///
/// Missing, empty and `ascii` answers are redirected to latin-1, which can
/// decode any byte; unknown names fall back to latin-1 with a warning.
pub fn resolve_encoding(detected: Option<&str>) -> TextEncoding {
    let fallback = TextEncoding::Latin1;

    let Some(label) = detected else {
        warn!("model text encoding unclear, assuming {}", FALLBACK_ENCODING);
        return fallback;
    };

    if REDIRECTED_ENCODINGS.contains(&label.trim().to_ascii_lowercase().as_str()) {
        debug!(
            "model text encoding '{}' unlikely, assuming {}",
            label, FALLBACK_ENCODING
        );
        return fallback;
    }

    match TextEncoding::from_label(label) {
        Some(encoding) => {
            debug!("model text encoding set to {}", encoding);
            encoding
        }
        None => {
            warn!(
                "unknown model text encoding '{}', assuming {}",
                label, FALLBACK_ENCODING
            );
            fallback
        }
    }
}

/// Ask a detector about the bytes of `path` and resolve its answer
pub fn detect_file_encoding(
    detector: &dyn EncodingDetector,
    path: &std::path::Path,
) -> Result<TextEncoding> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    Ok(resolve_encoding(detector.detect(&bytes).as_deref()))
}
