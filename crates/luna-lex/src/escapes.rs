//! The fixed escape-mnemonic tables consulted by `lex_esc_seq`.
//!
//! Each table is searched by exact match, longest entry first is *not* the
//! rule — shortest-arity-first is: a 1-character mnemonic is tried before a
//! 2-character one, which is tried before a 3-character one, mirroring the
//! grammar's "try arity 1, then 2, then 3" ordering. All three tables are
//! plain linear scans; none of them is large enough to warrant a hash map.

/// Single-character escapes: the usual C-flavored set plus the two quote
/// characters, so `\"` and `\'` work even outside the dedicated quote-run
/// escape rule. A bare `\0` is never reached through this table — a leading
/// decimal digit is always claimed first by the `NumStrEsc` rule.
const ESCAPE_1: &[(&str, u32)] = &[
    ("a", 0x07),
    ("b", 0x08),
    ("f", 0x0C),
    ("n", 0x0A),
    ("r", 0x0D),
    ("t", 0x09),
    ("v", 0x0B),
    ("'", 0x27),
    ("\"", 0x22),
];

/// Two-letter ASCII control mnemonics.
const ESCAPE_2: &[(&str, u32)] = &[
    ("BS", 0x08),
    ("HT", 0x09),
    ("LF", 0x0A),
    ("VT", 0x0B),
    ("FF", 0x0C),
    ("CR", 0x0D),
    ("SO", 0x0E),
    ("SI", 0x0F),
    ("EM", 0x19),
    ("FS", 0x1C),
    ("GS", 0x1D),
    ("RS", 0x1E),
    ("US", 0x1F),
    ("SP", 0x20),
];

/// Three-letter ASCII control mnemonics.
const ESCAPE_3: &[(&str, u32)] = &[
    ("NUL", 0x00),
    ("SOH", 0x01),
    ("STX", 0x02),
    ("ETX", 0x03),
    ("EOT", 0x04),
    ("ENQ", 0x05),
    ("ACK", 0x06),
    ("BEL", 0x07),
    ("DLE", 0x10),
    ("DC1", 0x11),
    ("DC2", 0x12),
    ("DC3", 0x13),
    ("DC4", 0x14),
    ("NAK", 0x15),
    ("SYN", 0x16),
    ("ETB", 0x17),
    ("CAN", 0x18),
    ("SUB", 0x1A),
    ("ESC", 0x1B),
    ("DEL", 0x7F),
];

/// Looks up the mnemonic escape starting at `remaining`, trying a 1-, then
/// 2-, then 3-character match. Returns the number of *characters* consumed
/// (all table entries are ASCII, so this equals the byte count) and the
/// resolved code point.
pub fn lookup_mnemonic(remaining: &str) -> Option<(usize, u32)> {
    let mut boundaries = remaining.char_indices().map(|(i, _)| i).skip(1);
    let b1 = boundaries.next().unwrap_or(remaining.len());
    if b1 == 0 {
        return None;
    }
    if let Some((_, code)) = ESCAPE_1.iter().find(|(k, _)| *k == &remaining[..b1]) {
        return Some((1, *code));
    }

    let b2 = boundaries.next().unwrap_or(remaining.len());
    if b2 > b1 {
        if let Some((_, code)) = ESCAPE_2.iter().find(|(k, _)| *k == &remaining[..b2]) {
            return Some((2, *code));
        }
    } else {
        return None;
    }

    let b3 = boundaries.next().unwrap_or(remaining.len());
    if b3 > b2 {
        if let Some((_, code)) = ESCAPE_3.iter().find(|(k, _)| *k == &remaining[..b3]) {
            return Some((3, *code));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_escape_wins_first() {
        assert_eq!(lookup_mnemonic("n rest"), Some((1, 0x0A)));
    }

    #[test]
    fn two_char_mnemonic_resolves() {
        assert_eq!(lookup_mnemonic("HTx"), Some((2, 0x09)));
    }

    #[test]
    fn three_char_mnemonic_resolves() {
        assert_eq!(lookup_mnemonic("ESCx"), Some((3, 0x1B)));
    }

    #[test]
    fn unknown_mnemonic_misses_entirely() {
        assert_eq!(lookup_mnemonic("Qx"), None);
    }
}
