//! Regex-literal flag decoding
//!
//! A regex literal like `/abc/gi` carries a run of single-character flags
//! after its closing slash. [`decode_regex_flags`] folds such a run into a
//! [`RegexFlags`] bitmask and returns the unconsumed remainder.
//!
//! Flags split into two categories held in disjoint bit ranges so the
//! combined mask round-trips losslessly:
//! - **Native flags** (bits 0-3) map directly onto common regex-engine
//!   options.
//! - **Synthetic flags** (bits 10-12) describe behaviors no engine option
//!   expresses (`g`lobal, stick`y`, in`d`ices); a match executor has to
//!   honor them out-of-band.

use bitflags::bitflags;

bitflags! {
    /// Decoded regex-literal flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RegexFlags: u32 {
        // === Native flags (bits 0-3) ===

        /// `i` — case-insensitive matching
        const CASE_INSENSITIVE = 1 << 0;
        /// `m` — `^`/`$` match at line boundaries
        const MULTI_LINE = 1 << 1;
        /// `s` — `.` also matches newlines
        const DOT_MATCHES_NEWLINE = 1 << 2;
        /// `u` — treat the pattern as unicode code points
        const UNICODE = 1 << 3;

        // === Synthetic flags (bits 10-12), no native engine equivalent ===

        /// `d` — report indices for substring matches
        const INDICES = 1 << 10;
        /// `g` — global search
        const GLOBAL = 1 << 11;
        /// `y` — sticky search anchored at the current position
        const STICKY = 1 << 12;
    }
}

impl RegexFlags {
    /// Flag bit for a single flag character, if recognized
    pub fn from_char(ch: char) -> Option<RegexFlags> {
        match ch {
            'i' => Some(RegexFlags::CASE_INSENSITIVE),
            'm' => Some(RegexFlags::MULTI_LINE),
            's' => Some(RegexFlags::DOT_MATCHES_NEWLINE),
            'u' => Some(RegexFlags::UNICODE),
            'd' => Some(RegexFlags::INDICES),
            'g' => Some(RegexFlags::GLOBAL),
            'y' => Some(RegexFlags::STICKY),
            _ => None,
        }
    }

    /// True if any set bit has no native engine equivalent
    pub fn has_synthetic(self) -> bool {
        self.intersects(RegexFlags::INDICES | RegexFlags::GLOBAL | RegexFlags::STICKY)
    }
}

/// Consume the maximal leading run of flag characters from `expr`.
///
/// Returns the accumulated bitmask and the remainder starting at the first
/// unrecognized character. An unrecognized character is not an error at
/// this layer; it simply ends the run.
pub fn decode_regex_flags(expr: &str) -> (RegexFlags, &str) {
    let mut flags = RegexFlags::empty();
    for (idx, ch) in expr.char_indices() {
        match RegexFlags::from_char(ch) {
            Some(flag) => flags |= flag,
            None => return (flags, &expr[idx..]),
        }
    }
    (flags, "")
}

#[cfg(test)]
mod tests {
    use super::{decode_regex_flags, RegexFlags};

    #[test]
    fn mixes_native_and_synthetic_bits() {
        let (flags, rest) = decode_regex_flags("gi/abc/");
        assert_eq!(
            flags,
            RegexFlags::GLOBAL | RegexFlags::CASE_INSENSITIVE
        );
        assert!(flags.has_synthetic());
        assert_eq!(rest, "/abc/");
    }

    #[test]
    fn empty_and_flagless_inputs() {
        assert_eq!(decode_regex_flags(""), (RegexFlags::empty(), ""));
        assert_eq!(decode_regex_flags(",x"), (RegexFlags::empty(), ",x"));
    }

    #[test]
    fn consumes_a_full_flag_run() {
        let (flags, rest) = decode_regex_flags("dgimsuy");
        assert_eq!(flags, RegexFlags::all());
        assert_eq!(rest, "");
    }
}
