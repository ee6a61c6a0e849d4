//! The `lpstrFile` buffer shared with the OS.
//!
//! In single-selection mode the OS writes one null-terminated path. With
//! `OFN_ALLOWMULTISELECT | OFN_EXPLORER` it writes a list of null-terminated
//! segments ending in an empty segment: either one full path, or a directory
//! followed by the selected file names.

use std::path::{Path, PathBuf};

/// Capacity, in UTF-16 code units, of a single-selection buffer.
pub const SINGLE_SELECTION_CAPACITY: usize = 1024;

/// Capacity, in UTF-16 code units, of a multi-selection buffer.
pub const MULTI_SELECTION_CAPACITY: usize = 65536;

/// Owned UTF-16 file name buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameBuffer {
    units: Vec<u16>,
}

impl FileNameBuffer {
    /// A single-selection buffer prefilled with `initial`.
    ///
    /// The path is truncated so that at least one terminating null remains.
    pub fn single(initial: &Path) -> Self {
        let mut units = vec![0u16; SINGLE_SELECTION_CAPACITY];
        let initial = initial.to_string_lossy();
        for (slot, unit) in units[..SINGLE_SELECTION_CAPACITY - 1]
            .iter_mut()
            .zip(initial.encode_utf16())
        {
            *slot = unit;
        }
        Self { units }
    }

    /// An empty multi-selection buffer.
    pub fn multiple() -> Self {
        Self {
            units: vec![0u16; MULTI_SELECTION_CAPACITY],
        }
    }

    /// Wrap raw code units, as written by the OS.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Buffer capacity in code units.
    pub fn capacity(&self) -> usize {
        self.units.len()
    }

    /// The raw code units.
    pub fn as_slice(&self) -> &[u16] {
        &self.units
    }

    /// Mutable access for the backend that hands the buffer to the OS.
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.units
    }

    /// Decode the buffer as one null-terminated path.
    pub fn decode_single(&self) -> PathBuf {
        let end = self
            .units
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(self.units.len());
        PathBuf::from(String::from_utf16_lossy(&self.units[..end]))
    }

    /// Iterate the null-terminated segments up to the first empty one.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            rest: &self.units,
            done: false,
        }
    }

    /// Decode a multi-selection result.
    ///
    /// One segment is a full path. With more, the first is the directory and
    /// the rest are file names inside it.
    pub fn decode_multiple(&self) -> Vec<PathBuf> {
        let parts: Vec<String> = self
            .segments()
            .map(String::from_utf16_lossy)
            .collect();

        match parts.split_first() {
            None => Vec::new(),
            Some((only, [])) => vec![PathBuf::from(only)],
            Some((dir, names)) => {
                let dir = Path::new(dir);
                names.iter().map(|name| dir.join(name)).collect()
            }
        }
    }
}

/// Iterator over the segments of a [`FileNameBuffer`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a [u16],
    done: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // An unterminated tail is not a segment.
        let Some(end) = self.rest.iter().position(|&c| c == 0) else {
            self.done = true;
            return None;
        };

        if end == 0 {
            self.done = true;
            return None;
        }

        let segment = &self.rest[..end];
        self.rest = &self.rest[end + 1..];
        Some(segment)
    }
}
