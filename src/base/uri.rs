//! Conversion between filesystem paths and `file://` URIs.
//!
//! Only the scheme prefix is added or stripped; no percent-encoding is
//! applied, so paths containing reserved characters do not round-trip
//! through clients that encode them.

use std::path::{Path, PathBuf};

use super::constants::FILE_URI_PREFIX;
use super::error::{Error, Result};

/// Build a `file://` URI for a path.
pub fn path_to_uri(path: &Path) -> String {
    format!("{FILE_URI_PREFIX}{}", path.display())
}

/// Extract the path of a `file://` URI.
pub fn uri_to_path(uri: &str) -> Result<PathBuf> {
    match uri.strip_prefix(FILE_URI_PREFIX) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(Error::InvalidUri(uri.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_absolute_path() {
        let path = PathBuf::from("/work/rtl/top.sv");
        let uri = path_to_uri(&path);
        assert_eq!(uri, "file:///work/rtl/top.sv");
        assert_eq!(uri_to_path(&uri).unwrap(), path);
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            uri_to_path("untitled:Untitled-1"),
            Err(Error::InvalidUri(_))
        ));
        assert!(uri_to_path("https://example.com/a.sv").is_err());
        assert!(uri_to_path("file://").is_err());
    }
}
