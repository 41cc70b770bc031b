//! String-level algorithms over [`InfraStr`], built from the code-point
//! classifier.
//!
//! Every operation here is total: the empty string, out-of-range cursor
//! positions and lone surrogates are all handled as defined inputs, never
//! as errors.

use crate::{
    code_point::CodePoint,
    infra_str::{infra_str_from_wtf8_unchecked, InfraStr},
    infra_string::InfraString,
};

impl InfraStr {
    /// Returns `true` if every code point of this string satisfies the
    /// predicate. Vacuously true for the empty string; stops at the first
    /// code point that fails.
    pub fn all_code_points<P>(&self, predicate: P) -> bool
    where
        P: FnMut(CodePoint) -> bool,
    {
        self.code_points().all(predicate)
    }

    /// Is every code point an ASCII code point?
    pub fn is_ascii_string(&self) -> bool {
        self.all_code_points(CodePoint::is_ascii)
    }

    /// Is every code point in the range U+0000 NULL to U+00FF (ÿ),
    /// inclusive?
    pub fn is_isomorphic(&self) -> bool {
        self.all_code_points(|cp| cp.is_between(0x00, 0xFF))
    }

    /// Is every code point a Unicode scalar value, that is, does this
    /// string contain no lone surrogates?
    pub fn is_scalar_value_string(&self) -> bool {
        self.all_code_points(CodePoint::is_scalar_value)
    }

    /// Is the first code point of this string in the range `min..=max`?
    ///
    /// The empty string has no code point to test and yields `false` for
    /// any bounds.
    pub fn first_code_point_between(&self, min: u32, max: u32) -> bool {
        self.first_code_point()
            .map_or(false, |cp| cp.is_between(min, max))
    }

    /// Collects the longest run of code points satisfying the predicate,
    /// starting at `position` (a code-point index, not a byte or code-unit
    /// index), and returns it together with the position just past the run.
    ///
    /// A position at or past the end of the string collects nothing and
    /// comes back unchanged. Nothing past the first failing code point is
    /// consumed.
    pub fn collect_code_points<P>(&self, position: usize, mut predicate: P) -> (InfraString, usize)
    where
        P: FnMut(CodePoint) -> bool,
    {
        let mut collected = InfraString::new();
        let mut new_position = position;
        for cp in self.code_points().skip(position) {
            if predicate(cp) {
                collected.push(cp);
                new_position += 1;
            } else {
                break;
            }
        }
        (collected, new_position)
    }

    /// Returns this string with every lone surrogate replaced by U+FFFD
    /// REPLACEMENT CHARACTER. The result is a scalar value string of the
    /// same length in code points.
    pub fn to_scalar_value_string(&self) -> InfraString {
        self.code_points()
            .map(|cp| {
                if cp.is_surrogate() {
                    CodePoint::REPLACEMENT_CHARACTER
                } else {
                    cp
                }
            })
            .collect()
    }

    /// Returns this string with every U+000A LF and U+000D CR removed.
    pub fn strip_newlines(&self) -> InfraString {
        self.code_points()
            .filter(|&cp| cp != '\n' && cp != '\r')
            .collect()
    }

    /// Returns this string with every CR LF pair and every remaining lone
    /// CR replaced by a single U+000A LF.
    pub fn normalize_newlines(&self) -> InfraString {
        let mut normalized = InfraString::new();
        let mut code_points = self.code_points().peekable();
        while let Some(cp) = code_points.next() {
            if cp == '\r' {
                // both halves of a CR LF pair are consumed here, so the LF
                // is never seen again as a code point of its own
                if code_points.peek().map_or(false, |&next| next == '\n') {
                    code_points.next();
                }
                normalized.push_char('\n');
            } else {
                normalized.push(cp);
            }
        }
        normalized
    }

    /// Returns this string with ASCII whitespace removed from both ends.
    /// Interior whitespace is untouched.
    pub fn strip_ascii_whitespace(&self) -> InfraString {
        let mut lead = 0;
        for cp in self.code_points() {
            if cp.is_ascii_whitespace() {
                lead += cp.len_wtf8();
            } else {
                break;
            }
        }
        // an all-whitespace string is consumed entirely by the leading
        // scan; the guard keeps the trailing scan from crossing it
        let mut trail = self.len_bytes();
        for cp in self.code_points().rev() {
            if trail > lead && cp.is_ascii_whitespace() {
                trail -= cp.len_wtf8();
            } else {
                break;
            }
        }
        unsafe { infra_str_from_wtf8_unchecked(&self.0[lead..trail]) }.to_owned()
    }

    /// Returns this string with every maximal run of ASCII whitespace
    /// collapsed to a single U+0020 SPACE and with whitespace then removed
    /// from both ends. Re-applying to the result is a no-op.
    pub fn strip_and_collapse_ascii_whitespace(&self) -> InfraString {
        let mut collapsed = InfraString::new();
        let mut last_seen_whitespace = false;
        for cp in self.code_points() {
            if cp.is_ascii_whitespace() {
                if !last_seen_whitespace {
                    last_seen_whitespace = true;
                    collapsed.push_char(' ');
                }
            } else {
                last_seen_whitespace = false;
                collapsed.push(cp);
            }
        }
        collapsed.strip_ascii_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CodePoint, InfraString};

    fn s(text: &str) -> InfraString {
        InfraString::from(text)
    }

    fn from_units(units: &[u16]) -> InfraString {
        InfraString::from_code_units(units)
    }

    #[test]
    fn test_all_code_points() {
        assert!(s("bbbb").all_code_points(|cp| cp == 'b'));
        assert!(!s("bbba").all_code_points(|cp| cp == 'b'));
        assert!(s("").all_code_points(|_| false));
    }

    #[test]
    fn test_all_code_points_short_circuits() {
        let mut seen = 0;
        s("abcd").all_code_points(|cp| {
            seen += 1;
            cp == 'a'
        });
        assert_eq!(2, seen);
    }

    #[test]
    fn test_is_ascii_string() {
        assert!(s("").is_ascii_string());
        assert!(s("foo").is_ascii_string());
        assert!(s("\u{0000}\u{007F}").is_ascii_string());
        assert!(!s("\u{0080}").is_ascii_string());
        assert!(!s("caf\u{00E9}").is_ascii_string());
    }

    #[test]
    fn test_is_isomorphic() {
        assert!(s("").is_isomorphic());
        assert!(s("\u{0000}\u{00FF}").is_isomorphic());
        assert!(!s("\u{0000}\u{0100}").is_isomorphic());
        assert!(!from_units(&[0xD800]).is_isomorphic());
    }

    #[test]
    fn test_is_scalar_value_string() {
        assert!(s("").is_scalar_value_string());
        assert!(s("\u{0000}\u{007F}").is_scalar_value_string());
        assert!(s("\u{0000}\u{D7FF}").is_scalar_value_string());
        assert!(s("\u{0000}\u{E000}").is_scalar_value_string());
        for unit in [0xD800, 0xDBFF, 0xDC00, 0xDFFF] {
            assert!(!from_units(&[unit]).is_scalar_value_string());
            assert!(!from_units(&[0x61, unit, 0x62]).is_scalar_value_string());
        }
    }

    #[test]
    fn test_first_code_point_between() {
        assert!(!s("").first_code_point_between(0x00, 0x10FFFF));
        assert!(s("\u{0000}").first_code_point_between(0x00, 0x20));
        assert!(s("\u{0020}").first_code_point_between(0x00, 0x20));
        assert!(!s("\u{007F}").first_code_point_between(0x00, 0x20));
        // only the first code point is considered
        assert!(s("a\u{0300}").first_code_point_between(0x61, 0x61));
    }

    #[test]
    fn test_collect_code_points() {
        let (collected, position) = s("test1234").collect_code_points(0, CodePoint::is_ascii_alpha);
        assert_eq!(collected, *"test");
        assert_eq!(4, position);

        let (collected, position) = s("test1234").collect_code_points(4, CodePoint::is_ascii_digit);
        assert_eq!(collected, *"1234");
        assert_eq!(8, position);

        // a position past the end collects nothing
        let (collected, position) = s("test").collect_code_points(5, CodePoint::is_ascii_alpha);
        assert_eq!(collected, *"");
        assert_eq!(5, position);

        let (collected, position) = s("").collect_code_points(0, |_| true);
        assert_eq!(collected, *"");
        assert_eq!(0, position);
    }

    #[test]
    fn test_collect_code_points_counts_code_points_not_units() {
        // four code points, five UTF-16 units; the cursor is a code-point
        // index, so the emoji advances it by one
        let input = from_units(&[0x61, 0xD83D, 0xDE00, 0x62, 0x21]);
        let (collected, position) = input.collect_code_points(0, |cp| cp != '!');
        assert_eq!(3, position);
        assert_eq!(3, collected.code_points().count());
    }

    #[test]
    fn test_to_scalar_value_string() {
        assert_eq!(s("").to_scalar_value_string(), *"");
        assert_eq!(s("test").to_scalar_value_string(), *"test");
        assert_eq!(from_units(&[0xD800]).to_scalar_value_string(), *"\u{FFFD}");
        assert_eq!(from_units(&[0xDFFF]).to_scalar_value_string(), *"\u{FFFD}");

        let input = from_units(&[0x61, 0xDC00, 0xD800, 0x62]);
        let converted = input.to_scalar_value_string();
        assert_eq!(
            input.code_points().count(),
            converted.code_points().count()
        );
        assert!(converted.is_scalar_value_string());
        // idempotent
        assert_eq!(converted, converted.to_scalar_value_string());
    }

    #[test]
    fn test_strip_newlines() {
        assert_eq!(s("").strip_newlines(), *"");
        assert_eq!(s("a\n\n").strip_newlines(), *"a");
        assert_eq!(s("a\r\n\r\n").strip_newlines(), *"a");
        assert_eq!(s("a\r\r").strip_newlines(), *"a");
        assert_eq!(s("apple\nbanana").strip_newlines(), *"applebanana");
    }

    #[test]
    fn test_strip_newlines_joins_exposed_surrogate_halves() {
        // in the UTF-16 source model, removing the newline between the
        // halves leaves a well-formed pair, which reads as one code point
        let stripped = from_units(&[0xD800, 0x0A, 0xDC00]).strip_newlines();
        let values: Vec<u32> = stripped.code_points().map(CodePoint::to_u32).collect();
        assert_eq!(vec![0x10000], values);
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(s("").normalize_newlines(), *"");
        assert_eq!(s("\r").normalize_newlines(), *"\n");
        assert_eq!(s("\r\n\r\n").normalize_newlines(), *"\n\n");
        assert_eq!(s("a\r\ntttt\r").normalize_newlines(), *"a\ntttt\n");
        // every lone CR becomes LF, not just the first
        assert_eq!(s("a\r.\r").normalize_newlines(), *"a\n.\n");
        assert_eq!(s("\n\n").normalize_newlines(), *"\n\n");
    }

    #[test]
    fn test_strip_ascii_whitespace() {
        assert_eq!(s("").strip_ascii_whitespace(), *"");
        assert_eq!(s("  a  ").strip_ascii_whitespace(), *"a");
        assert_eq!(s("\t\n\x0C\r a b \r\n").strip_ascii_whitespace(), *"a b");
        // an all-whitespace string strips to nothing
        assert_eq!(s(" \t\r\n ").strip_ascii_whitespace(), *"");
        // U+000B and non-ASCII whitespace are not in the set
        assert_eq!(s("\x0Ba\x0B").strip_ascii_whitespace(), *"\x0Ba\x0B");
        assert_eq!(s("\u{00A0}a").strip_ascii_whitespace(), *"\u{00A0}a");
    }

    #[test]
    fn test_strip_and_collapse_ascii_whitespace() {
        let strip_collapse = |text: &str| s(text).strip_and_collapse_ascii_whitespace();
        assert_eq!(strip_collapse(""), *"");
        assert_eq!(strip_collapse("    "), *"");
        assert_eq!(strip_collapse("cat dog  hamster \n\r"), *"cat dog hamster");
        assert_eq!(strip_collapse("\r  \n  cat dog  hamster"), *"cat dog hamster");
        assert_eq!(
            strip_collapse("\r  \n  cat dog  hamster \n\r"),
            *"cat dog hamster"
        );
    }

    #[test]
    fn test_strip_and_collapse_is_idempotent() {
        for text in ["", "    ", " a  b\tc ", "\r  \n  cat dog  hamster \n\r"] {
            let once = s(text).strip_and_collapse_ascii_whitespace();
            let twice = once.strip_and_collapse_ascii_whitespace();
            assert_eq!(once, twice);
        }
    }
}
