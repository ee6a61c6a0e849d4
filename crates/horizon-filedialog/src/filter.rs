//! File type filters.
//!
//! The dialog record stores its filter the way the common dialog API
//! documents it, as alternating description and pattern segments. Segments
//! are separated by `|` for readability, e.g.
//! `"Images (*.png;*.jpg)|*.png;*.jpg|All Files (*.*)|*.*"`, and converted
//! to the null-separated, double-null-terminated form right before the call.

/// Segment separator used in human-readable filter strings.
pub const FILTER_SEPARATOR: char = '|';

/// A single description/pattern pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileFilter {
    /// Text shown in the file type combo box (e.g., "Image Files").
    pub description: String,
    /// Wildcard patterns (e.g., "*.png", "*.jpg").
    pub patterns: Vec<String>,
}

impl FileFilter {
    /// Create a new file filter.
    pub fn new(description: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            description: description.into(),
            patterns: patterns.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Create an "All Files" filter.
    pub fn all_files() -> Self {
        Self::new("All Files (*.*)", &["*.*"])
    }

    /// The pattern segment, with patterns joined by `;`.
    pub fn pattern(&self) -> String {
        self.patterns.join(";")
    }

    /// Build a pipe-separated filter string from a list of filters.
    pub fn join(filters: &[FileFilter]) -> String {
        let mut out = String::new();
        for (i, filter) in filters.iter().enumerate() {
            if i > 0 {
                out.push(FILTER_SEPARATOR);
            }
            out.push_str(&filter.description);
            out.push(FILTER_SEPARATOR);
            out.push_str(&filter.pattern());
        }
        out
    }

    /// Split a pipe-separated filter string into description/pattern pairs.
    ///
    /// A trailing description without a pattern segment is kept with an
    /// empty pattern list.
    pub fn parse(filter: &str) -> Vec<FileFilter> {
        if filter.is_empty() {
            return Vec::new();
        }

        let segments: Vec<&str> = filter.split(FILTER_SEPARATOR).collect();
        segments
            .chunks(2)
            .map(|pair| FileFilter {
                description: pair[0].to_string(),
                patterns: pair
                    .get(1)
                    .map(|p| {
                        p.split(';')
                            .filter(|s| !s.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }
}

/// Encode a pipe-separated filter string for `OPENFILENAMEW::lpstrFilter`.
///
/// Every `|` becomes a null and two nulls terminate the list. Returns `None`
/// for an empty filter so the OS receives a null pointer.
pub fn encode_filter(filter: &str) -> Option<Vec<u16>> {
    if filter.is_empty() {
        return None;
    }

    let separator = FILTER_SEPARATOR as u16;
    let mut wide: Vec<u16> = filter
        .encode_utf16()
        .map(|c| if c == separator { 0 } else { c })
        .collect();
    wide.extend_from_slice(&[0, 0]);
    Some(wide)
}
