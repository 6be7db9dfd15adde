use bitflags::bitflags;

bitflags! {
    /// Selects which kinds of file changes a diff reports
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const REMOVED = 0b0010;
        const MODIFIED = 0b0100;
        const UNCHANGED = 0b1000;
        const CHANGED = Self::ADDED.bits() | Self::REMOVED.bits() | Self::MODIFIED.bits();
    }
}

impl DiffFilter {
    /// Parse a filter from status letters: `A`dded, `D`eleted, `M`odified, `U`nchanged
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'D' => filter |= Self::REMOVED,
                'M' => filter |= Self::MODIFIED,
                'U' => filter |= Self::UNCHANGED,
                _ => return None,
            }
        }

        Some(filter)
    }
}
