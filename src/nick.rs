//! Nickname grammar and IRC case mapping.
//!
//! The grammar follows RFC 2812 section 2.3.1: a nickname starts with a
//! letter or special character and continues with letters, digits, specials,
//! or hyphens. Comparison uses the `rfc1459` case mapping, where some
//! characters are considered equivalent (e.g., `[` and `{`).

/// Extension trait for checking whether a string is a valid nickname.
pub trait NickExt {
    /// Check if this string is a valid IRC nickname.
    ///
    /// Valid nicknames:
    /// - First character: ASCII letter or special character `[\]^_`{|}`
    /// - Subsequent characters: letter, digit, special, or hyphen (`-`)
    ///
    /// No length cap is applied here; maximum nickname length is server
    /// policy (ISUPPORT `NICKLEN`), not part of the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use altnick::NickExt;
    ///
    /// assert!("nick".is_valid_nick());
    /// assert!("[cool]".is_valid_nick());
    /// assert!("_under_".is_valid_nick());
    ///
    /// assert!(!"123nick".is_valid_nick()); // can't start with a digit
    /// assert!(!"".is_valid_nick());        // empty
    /// assert!(!"nick name".is_valid_nick()); // contains a space
    /// ```
    fn is_valid_nick(&self) -> bool;
}

/// Check if a character is a "special" character allowed in nicknames.
///
/// Per RFC 2812: `[ ] \ ` ^ _ { | }`
#[inline]
fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '|' | '}')
}

impl NickExt for &str {
    fn is_valid_nick(&self) -> bool {
        let mut chars = self.chars();

        // First character: letter or special
        let Some(first) = chars.next() else {
            return false;
        };
        if !first.is_ascii_alphabetic() && !is_special(first) {
            return false;
        }

        // Rest: letter, digit, special, or hyphen
        chars.all(|c| c.is_ascii_alphanumeric() || is_special(c) || c == '-')
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        self.as_str().is_valid_nick()
    }
}

/// Convert a single character to IRC lowercase using RFC 1459 case mapping.
///
/// In addition to ASCII lowercase conversion, this maps:
/// - `[` → `{`
/// - `]` → `}`
/// - `\` → `|`
/// - `~` → `^`
#[inline]
pub const fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => (c as u8 + 32) as char,
        _ => c,
    }
}

/// Convert a string to IRC lowercase using RFC 1459 case mapping.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Compare two strings using IRC case-insensitive comparison.
pub fn irc_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.chars()
        .zip(b.chars())
        .all(|(ca, cb)| irc_lower_char(ca) == irc_lower_char(cb))
}
