//! URL path derivation.
//!
//! Maps a URL string to the on-disk directory a download lands in: everything
//! between the host and the last two path segments, mirrored under the
//! download root. Pure string work, no parsing library, no I/O.

mod derive;

pub use derive::{derive_output_dir, filename_from_url, InvalidUrlStructure};

/// Scheme prefix stripped before segment counting. Other schemes (including
/// plain `http://`) are left in place, which shifts the segment count by one;
/// callers get the resulting directory as-is.
pub(crate) const STRIPPED_SCHEME: &str = "https://";

/// Minimum `/`-delimited segments after scheme stripping for a URL to be
/// structurally valid (host, at least one directory, extra segment, filename).
pub(crate) const MIN_SEGMENTS: usize = 4;
