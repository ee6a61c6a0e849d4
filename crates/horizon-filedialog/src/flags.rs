//! Common dialog `OFN_*` flags.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of `OFN_*` flags passed to `GetOpenFileNameW` / `GetSaveFileNameW`.
///
/// The values match the native constants, so the raw bits can be handed to
/// the OS unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OpenFileNameFlags(u32);

impl OpenFileNameFlags {
    /// `OFN_READONLY`: the read-only check box is (or was) checked.
    pub const READONLY: Self = Self(0x0000_0001);
    /// `OFN_OVERWRITEPROMPT`: confirm before overwriting an existing file.
    pub const OVERWRITEPROMPT: Self = Self(0x0000_0002);
    /// `OFN_HIDEREADONLY`: hide the read-only check box.
    pub const HIDEREADONLY: Self = Self(0x0000_0004);
    /// `OFN_NOCHANGEDIR`: restore the current directory afterwards.
    pub const NOCHANGEDIR: Self = Self(0x0000_0008);
    /// `OFN_SHOWHELP`: show the Help button.
    pub const SHOWHELP: Self = Self(0x0000_0010);
    /// `OFN_NOVALIDATE`: allow invalid characters in the returned name.
    pub const NOVALIDATE: Self = Self(0x0000_0100);
    /// `OFN_ALLOWMULTISELECT`: allow selecting several files.
    pub const ALLOWMULTISELECT: Self = Self(0x0000_0200);
    /// `OFN_EXTENSIONDIFFERENT`: the typed extension differs from the default.
    pub const EXTENSIONDIFFERENT: Self = Self(0x0000_0400);
    /// `OFN_PATHMUSTEXIST`: only accept existing paths.
    pub const PATHMUSTEXIST: Self = Self(0x0000_0800);
    /// `OFN_FILEMUSTEXIST`: only accept existing files.
    pub const FILEMUSTEXIST: Self = Self(0x0000_1000);
    /// `OFN_CREATEPROMPT`: ask before creating a missing file.
    pub const CREATEPROMPT: Self = Self(0x0000_2000);
    /// `OFN_SHAREAWARE`: ignore sharing violations.
    pub const SHAREAWARE: Self = Self(0x0000_4000);
    /// `OFN_NOREADONLYRETURN`: reject read-only files and directories.
    pub const NOREADONLYRETURN: Self = Self(0x0000_8000);
    /// `OFN_NOTESTFILECREATE`: do not probe-create the file.
    pub const NOTESTFILECREATE: Self = Self(0x0001_0000);
    /// `OFN_NONETWORKBUTTON`: hide the Network button.
    pub const NONETWORKBUTTON: Self = Self(0x0002_0000);
    /// `OFN_EXPLORER`: use the Explorer-style dialog.
    pub const EXPLORER: Self = Self(0x0008_0000);
    /// `OFN_NODEREFERENCELINKS`: return shortcut files instead of targets.
    pub const NODEREFERENCELINKS: Self = Self(0x0010_0000);
    /// `OFN_LONGNAMES`: use long file names.
    pub const LONGNAMES: Self = Self(0x0020_0000);
    /// `OFN_ENABLESIZING`: allow resizing the dialog.
    pub const ENABLESIZING: Self = Self(0x0080_0000);
    /// `OFN_DONTADDTORECENT`: do not add the selection to recent documents.
    pub const DONTADDTORECENT: Self = Self(0x0200_0000);
    /// `OFN_FORCESHOWHIDDEN`: show hidden and system files.
    pub const FORCESHOWHIDDEN: Self = Self(0x1000_0000);

    /// An empty flag set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a flag set from raw bits. Unknown bits are kept.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the flags in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for OpenFileNameFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OpenFileNameFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OpenFileNameFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for OpenFileNameFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpenFileNameFlags({:#010x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_values() {
        assert_eq!(OpenFileNameFlags::FILEMUSTEXIST.bits(), 0x1000);
        assert_eq!(OpenFileNameFlags::ALLOWMULTISELECT.bits(), 0x200);
        assert_eq!(OpenFileNameFlags::EXPLORER.bits(), 0x80000);
        assert_eq!(OpenFileNameFlags::NOCHANGEDIR.bits(), 0x8);
        assert_eq!(OpenFileNameFlags::HIDEREADONLY.bits(), 0x4);
    }

    #[test]
    fn test_combine_and_query() {
        let mut flags = OpenFileNameFlags::FILEMUSTEXIST | OpenFileNameFlags::NOCHANGEDIR;
        assert!(flags.contains(OpenFileNameFlags::FILEMUSTEXIST));
        assert!(!flags.contains(OpenFileNameFlags::EXPLORER));

        flags |= OpenFileNameFlags::EXPLORER;
        assert!(flags.contains(OpenFileNameFlags::EXPLORER | OpenFileNameFlags::NOCHANGEDIR));

        flags.remove(OpenFileNameFlags::NOCHANGEDIR);
        assert!(!flags.contains(OpenFileNameFlags::NOCHANGEDIR));
        assert_eq!(flags.bits(), 0x1000 | 0x80000);
    }

    #[test]
    fn test_empty_and_default() {
        assert!(OpenFileNameFlags::empty().is_empty());
        assert_eq!(OpenFileNameFlags::default(), OpenFileNameFlags::empty());
        assert!(OpenFileNameFlags::empty().contains(OpenFileNameFlags::empty()));
    }

    #[test]
    fn test_intersection() {
        let flags = OpenFileNameFlags::from_bits(0x1001);
        assert_eq!(flags & OpenFileNameFlags::READONLY, OpenFileNameFlags::READONLY);
        assert!((flags & OpenFileNameFlags::EXPLORER).is_empty());
    }
}
