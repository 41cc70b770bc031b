use crate::{
    code_point::{self, CodePoint},
    infra_str::{infra_str_from_wtf8_unchecked, infra_str_from_wtf8_unchecked_mut, InfraStr},
    wtf8,
};
use std::{borrow, fmt, hash, iter::FromIterator, ops};

/// A growable string of Unicode code points, lone surrogates included.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InfraString(Vec<u8>);

impl hash::Hash for InfraString {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl PartialEq<InfraStr> for InfraString {
    #[inline]
    fn eq(&self, other: &InfraStr) -> bool {
        **self == *other
    }
}

impl PartialEq<str> for InfraString {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Display for InfraString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &**self)
    }
}

impl fmt::Debug for InfraString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &**self)
    }
}

impl ops::Deref for InfraString {
    type Target = InfraStr;

    fn deref(&self) -> &Self::Target {
        unsafe { infra_str_from_wtf8_unchecked(&self.0[..]) }
    }
}

impl ops::DerefMut for InfraString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { infra_str_from_wtf8_unchecked_mut(&mut self.0[..]) }
    }
}

impl borrow::Borrow<InfraStr> for InfraString {
    fn borrow(&self) -> &InfraStr {
        &*self
    }
}

impl borrow::ToOwned for InfraStr {
    type Owned = InfraString;

    #[inline]
    fn to_owned(&self) -> InfraString {
        InfraString(self.0.to_owned())
    }
}

impl From<&str> for InfraString {
    // well-formed UTF-8 is valid canonical WTF-8 as is
    fn from(s: &str) -> Self {
        InfraString(s.as_bytes().to_vec())
    }
}

impl From<String> for InfraString {
    fn from(s: String) -> Self {
        InfraString(s.into_bytes())
    }
}

impl InfraString {
    /// Creates a new empty `InfraString`.
    pub const fn new() -> Self {
        InfraString(Vec::new())
    }

    /// Decodes a sequence of potentially ill-formed UTF-16 code units.
    ///
    /// A lead surrogate directly followed by a trail surrogate becomes the
    /// supplementary-plane code point the pair stands for; every other
    /// surrogate code unit is kept as a lone surrogate code point. This is
    /// the one place where malformed data enters the crate, and it enters
    /// as data, not as an error.
    pub fn from_code_units(units: &[u16]) -> Self {
        let mut string = InfraString::new();
        let mut iter = units.iter().copied().peekable();
        while let Some(unit) = iter.next() {
            if code_point::is_lead_surrogate(unit) {
                if let Some(&next) = iter.peek() {
                    if code_point::is_trail_surrogate(next) {
                        iter.next();
                        string.push(CodePoint::from_surrogate_pair(unit, next));
                        continue;
                    }
                }
            }
            string.push(CodePoint::from_u32(unit.into()).expect("u16 fits in a code point"));
        }
        string
    }

    /// Append the given code point to the end of this string.
    ///
    /// Appending a trail surrogate to a string that ends with a lead
    /// surrogate joins the two halves into one supplementary-plane code
    /// point, the same way the pair would read in the UTF-16 data the
    /// halves came from.
    pub fn push(&mut self, cp: CodePoint) {
        let v = cp.to_u32();
        if (code_point::MIN_TRAIL_SURROGATE..=code_point::MAX_SURROGATE).contains(&v) {
            if let Some(lead) = self.trailing_lead_surrogate() {
                self.0.truncate(self.0.len() - 3);
                let combined = CodePoint::from_surrogate_pair(lead, v as u16);
                self.push_code_point_bytes(combined);
                return;
            }
        }
        self.push_code_point_bytes(cp);
    }

    /// Append the given `char` to the end of this string.
    pub fn push_char(&mut self, ch: char) {
        self.push_code_point_bytes(CodePoint::from_char(ch));
    }

    /// Append the given string slice to the end of this string, joining a
    /// surrogate pair that forms across the boundary.
    pub fn push_infra_str(&mut self, s: &InfraStr) {
        let mut rest = &s.0;
        if let Some(first) = s.first_code_point() {
            let v = first.to_u32();
            if (code_point::MIN_TRAIL_SURROGATE..=code_point::MAX_SURROGATE).contains(&v)
                && self.trailing_lead_surrogate().is_some()
            {
                self.push(first);
                rest = &s.0[first.len_wtf8()..];
            }
        }
        self.0.extend_from_slice(rest);
    }

    /// Truncates this string, removing all contents.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Copies this string into a `String`, with lone surrogates replaced
    /// by U+FFFD REPLACEMENT CHARACTER.
    pub fn to_string_lossy(&self) -> String {
        self.chars_lossy().collect()
    }

    // a lead surrogate is always the last three bytes when present, so
    // this only ever looks at the tail of the buffer
    fn trailing_lead_surrogate(&self) -> Option<u16> {
        match self.code_points().next_back() {
            Some(cp)
                if (code_point::MIN_SURROGATE..code_point::MIN_TRAIL_SURROGATE)
                    .contains(&cp.to_u32()) =>
            {
                Some(cp.to_u32() as u16)
            }
            _ => None,
        }
    }

    fn push_code_point_bytes(&mut self, cp: CodePoint) {
        let mut buf = [0u8; wtf8::MAX_BYTE_COUNT];
        let len = wtf8::encode_wtf8(cp.to_u32(), &mut buf).expect("buffer is large enough");
        self.0.extend_from_slice(&buf[..len]);
    }
}

impl Extend<CodePoint> for InfraString {
    fn extend<T: IntoIterator<Item = CodePoint>>(&mut self, iter: T) {
        for cp in iter {
            self.push(cp);
        }
    }
}

impl FromIterator<CodePoint> for InfraString {
    fn from_iter<T: IntoIterator<Item = CodePoint>>(iter: T) -> Self {
        let mut string = Self::default();
        string.extend(iter);
        string
    }
}

impl Extend<char> for InfraString {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        for ch in iter {
            self.push_char(ch);
        }
    }
}

impl FromIterator<char> for InfraString {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut string = Self::default();
        string.extend(iter);
        string
    }
}

impl<'rhs> ops::AddAssign<&'rhs InfraStr> for InfraString {
    fn add_assign(&mut self, rhs: &'rhs InfraStr) {
        self.push_infra_str(rhs);
    }
}
