//! Output format resolution from file extensions.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Output encodings we know how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Png,
    Jpeg,
    Bmp,
    Tga,
}

impl FormatTag {
    /// Look up the tag for a file extension, ignoring case.
    ///
    /// `jpg` and `jpeg` both map to [`FormatTag::Jpeg`].
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "tga" => Some(Self::Tga),
            _ => None,
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Bmp => "BMP",
            Self::Tga => "TGA",
        };
        f.write_str(name)
    }
}

/// Resolve the output format from the text after the last `.` in `path`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the path has no `.` or the
/// extension is not one of png, jpg, jpeg, bmp, tga.
pub fn resolve_format<P: AsRef<Path>>(path: P) -> Result<FormatTag> {
    let path = path.as_ref();
    let text = path.to_string_lossy();

    let Some((_, extension)) = text.rsplit_once('.') else {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: "path has no file extension".to_string(),
        });
    };

    FormatTag::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
        reason: format!("unrecognized extension `{extension}`"),
    })
}
