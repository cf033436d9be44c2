//! Mutable byte-buffer text type
//!
//! `Text` owns a growable byte sequence with no assumed encoding and no
//! terminator byte; `len()` is always the byte count. The buffer is
//! exclusively owned by the instance and replaced wholesale on
//! reallocation. Case conversion is deliberately scoped to the ASCII
//! range; everything else is encoding-agnostic byte manipulation.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{MemError, MemResult};
use crate::tmpl::{self, TmplValue};

/// Owned, mutable, growable byte buffer
///
/// Always valid (possibly empty) after construction. Content equality is
/// byte-for-byte (`PartialEq`/`Eq`/`Hash` follow content), so `Text` also
/// serves as the map key type.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Text {
    data: Vec<u8>,
}

impl Text {
    /// Create an empty buffer
    pub fn new() -> Self {
        Text { data: Vec::new() }
    }

    /// Create a buffer from a window into `source`
    ///
    /// `len == 0` means "to the end of the source". A window exceeding the
    /// available bytes is silently clamped, never an error; a start past
    /// the end yields an empty buffer.
    pub fn window(source: &[u8], start: usize, len: usize) -> Self {
        let mut text = Text::new();
        text.assign_window(source, start, len);
        text
    }

    /// Byte count, independent of any terminator
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True iff the length is zero
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True iff `text` is absent or has zero length
    pub fn is_none_or_empty(text: Option<&Text>) -> bool {
        match text {
            Some(t) => t.is_empty(),
            None => true,
        }
    }

    /// The current contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte at `index`
    pub fn byte_at(&self, index: usize) -> MemResult<u8> {
        match self.data.get(index) {
            Some(b) => Ok(*b),
            None => Err(MemError::index("Text::byte_at", index, self.data.len())),
        }
    }

    /// Mutable access to the byte at `index`
    pub fn byte_at_mut(&mut self, index: usize) -> MemResult<&mut u8> {
        let size = self.data.len();
        match self.data.get_mut(index) {
            Some(b) => Ok(b),
            None => Err(MemError::index("Text::byte_at_mut", index, size)),
        }
    }

    /// Replace the contents wholesale
    pub fn assign(&mut self, source: impl AsRef<[u8]>) {
        self.data.clear();
        self.data.extend_from_slice(source.as_ref());
    }

    /// Replace the contents with a window into `source`
    ///
    /// Same clamping rules as [`Text::window`].
    pub fn assign_window(&mut self, source: impl AsRef<[u8]>, start: usize, len: usize) {
        let source = source.as_ref();
        let start = start.min(source.len());
        let avail = source.len() - start;
        let take = if len == 0 { avail } else { len.min(avail) };

        self.data.clear();
        self.data.extend_from_slice(&source[start..start + take]);
    }

    /// Replace the contents with those of another buffer
    pub fn copy_from(&mut self, other: &Text) {
        self.assign(&other.data);
    }

    /// Replace the contents by expanding a template against typed values
    ///
    /// Each `{}` in the template consumes the next value; arity mismatches
    /// are signaled failures and leave the buffer untouched.
    pub fn assign_tmpl(
        &mut self,
        template: impl AsRef<[u8]>,
        values: &[TmplValue],
    ) -> MemResult<()> {
        let expanded = tmpl::expand("Text::assign_tmpl", template.as_ref(), values)?;
        self.data = expanded;
        Ok(())
    }

    /// Append the expansion of a template against typed values
    pub fn append_tmpl(
        &mut self,
        template: impl AsRef<[u8]>,
        values: &[TmplValue],
    ) -> MemResult<()> {
        let expanded = tmpl::expand("Text::append_tmpl", template.as_ref(), values)?;
        self.data.extend_from_slice(&expanded);
        Ok(())
    }

    /// Replace the contents with the raw bytes of a file
    ///
    /// An unopenable or unreadable path is a signaled failure, raised
    /// before any mutation; there is no size cap beyond available memory.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> MemResult<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            MemError::unreadable("Text::load_from_file", &path.display().to_string(), &e)
        })?;
        self.data = bytes;
        Ok(())
    }

    /// Byte-wise content equality
    pub fn content_eq(&self, other: impl AsRef<[u8]>) -> bool {
        self.data == other.as_ref()
    }

    /// Byte-wise comparison, optionally limited to the first `max_len` bytes
    pub fn compare(&self, other: impl AsRef<[u8]>, max_len: Option<usize>) -> Ordering {
        let other = other.as_ref();
        match max_len {
            Some(n) => {
                let a = &self.data[..self.data.len().min(n)];
                let b = &other[..other.len().min(n)];
                a.cmp(b)
            }
            None => self.data.as_slice().cmp(other),
        }
    }

    /// True iff the contents begin with `prefix`
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.data.starts_with(prefix.as_ref())
    }

    /// True iff the contents end with `suffix`
    ///
    /// A zero-length suffix is a signaled failure, and a suffix at least
    /// as long as the contents is `false` — even when the bytes match.
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> MemResult<bool> {
        let suffix = suffix.as_ref();
        if suffix.is_empty() {
            return Err(MemError::empty("Text::ends_with", "suffix"));
        }
        if suffix.len() >= self.data.len() {
            return Ok(false);
        }
        Ok(self.data.ends_with(suffix))
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append bytes, growing the buffer as needed
    pub fn append(&mut self, source: impl AsRef<[u8]>) {
        self.data.extend_from_slice(source.as_ref());
    }

    /// Append at most `count` bytes of `source`; `count == 0` appends all
    pub fn append_limited(&mut self, source: impl AsRef<[u8]>, count: usize) {
        let source = source.as_ref();
        let take = if count == 0 {
            source.len()
        } else {
            count.min(source.len())
        };
        self.data.extend_from_slice(&source[..take]);
    }

    /// Push a single byte
    pub fn push(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Insert bytes at `index`, shifting the tail up
    ///
    /// `index == len()` appends; a larger index is a signaled failure,
    /// checked before any mutation.
    pub fn insert(&mut self, index: usize, source: impl AsRef<[u8]>) -> MemResult<()> {
        let source = source.as_ref();
        if index > self.data.len() {
            return Err(MemError::index("Text::insert", index, self.data.len()));
        }
        self.data.splice(index..index, source.iter().copied());
        Ok(())
    }

    /// In-place ASCII uppercase; bytes outside `a-z` are untouched
    pub fn make_uppercase(&mut self) {
        for byte in &mut self.data {
            if byte.is_ascii_lowercase() {
                *byte -= 0x20;
            }
        }
    }

    /// In-place ASCII lowercase; bytes outside `A-Z` are untouched
    pub fn make_lowercase(&mut self) {
        for byte in &mut self.data {
            if byte.is_ascii_uppercase() {
                *byte += 0x20;
            }
        }
    }

    /// Clone the contents with a trailing NUL (for C interop)
    pub fn to_cstr(&self) -> Vec<u8> {
        let mut cstr = self.data.clone();
        cstr.push(0);
        cstr
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text {
            data: s.as_bytes().to_vec(),
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text {
            data: s.into_bytes(),
        }
    }
}

impl From<&[u8]> for Text {
    fn from(b: &[u8]) -> Self {
        Text { data: b.to_vec() }
    }
}

impl From<Vec<u8>> for Text {
    fn from(data: Vec<u8>) -> Self {
        Text { data }
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({})", String::from_utf8_lossy(&self.data))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_is_empty() {
        let text = Text::new();
        assert_eq!(text.len(), 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_is_none_or_empty() {
        assert!(Text::is_none_or_empty(None));
        assert!(Text::is_none_or_empty(Some(&Text::new())));
        assert!(!Text::is_none_or_empty(Some(&Text::from("x"))));
    }

    #[test]
    fn test_assign_and_read() {
        let mut text = Text::new();
        text.assign("hello");
        assert_eq!(text.as_bytes(), b"hello");
        assert_eq!(text.len(), 5);
        assert!(!text.is_empty());
    }

    #[test]
    fn test_assign_arbitrary_bytes() {
        let mut text = Text::new();
        text.assign([0u8, 255, 1, 0]);
        assert_eq!(text.as_bytes(), &[0, 255, 1, 0]);
        assert_eq!(text.len(), 4);
    }

    #[test]
    fn test_byte_at() {
        let text = Text::from("hello");
        assert_eq!(text.byte_at(0).unwrap(), b'h');
        assert_eq!(text.byte_at(1).unwrap(), b'e');
        assert_eq!(text.byte_at(2).unwrap(), b'l');
        let err = text.byte_at(5).unwrap_err();
        assert!(matches!(err, MemError::Index { index: 5, size: 5, .. }));
    }

    #[test]
    fn test_byte_at_mut() {
        let mut text = Text::from("cat");
        *text.byte_at_mut(0).unwrap() = b'b';
        assert_eq!(text.as_bytes(), b"bat");
        assert!(text.byte_at_mut(3).is_err());
    }

    #[test]
    fn test_window_to_end() {
        let text = Text::window(b"hello", 2, 0);
        assert_eq!(text.as_bytes(), b"llo");
    }

    #[test]
    fn test_window_bounded() {
        let text = Text::window(b"hello", 2, 2);
        assert_eq!(text.as_bytes(), b"ll");
    }

    #[test]
    fn test_window_clamped_not_error() {
        assert_eq!(Text::window(b"hello", 2, 99).as_bytes(), b"llo");
        assert_eq!(Text::window(b"hello", 9, 3).as_bytes(), b"");
    }

    #[test]
    fn test_copy_from() {
        let a = Text::from("hello");
        let mut b = Text::new();
        b.copy_from(&a);
        assert_eq!(a, b);
    }

    #[test]
    fn test_content_eq_and_compare() {
        let a = Text::from("hello");
        assert!(a.content_eq("hello"));
        assert!(!a.content_eq("world"));
        assert_eq!(a.compare("hello", None), Ordering::Equal);
        assert_eq!(a.compare("help", None), Ordering::Less);
        assert_eq!(a.compare("help", Some(3)), Ordering::Equal);
    }

    #[test]
    fn test_starts_with() {
        let text = Text::from("hello 1, world");
        assert!(text.starts_with("hello"));
        assert!(!text.starts_with("hi"));
    }

    #[test]
    fn test_ends_with() {
        let text = Text::from("hello 1, world");
        assert!(text.ends_with("world").unwrap());
        assert!(!text.ends_with("planet").unwrap());
    }

    #[test]
    fn test_ends_with_empty_suffix_is_signaled() {
        let text = Text::from("hello");
        let err = text.ends_with("").unwrap_err();
        assert!(matches!(err, MemError::Empty { .. }));
    }

    #[test]
    fn test_ends_with_suffix_as_long_as_subject_is_false() {
        // Equal length is false even when contents match.
        let text = Text::from("hello");
        assert!(!text.ends_with("hello").unwrap());
        assert!(!text.ends_with("xhello").unwrap());
    }

    #[test]
    fn test_append_and_push() {
        let mut text = Text::from("hello");
        text.push(b'!');
        assert_eq!(text.as_bytes(), b"hello!");
        text.append(" world");
        assert_eq!(text.as_bytes(), b"hello! world");
    }

    #[test]
    fn test_append_limited() {
        let mut text = Text::new();
        text.append_limited("123456", 5);
        assert_eq!(text.as_bytes(), b"12345");
        text.append_limited("ab", 0);
        assert_eq!(text.as_bytes(), b"12345ab");
        text.append_limited("xy", 9);
        assert_eq!(text.as_bytes(), b"12345abxy");
    }

    #[test]
    fn test_insert() {
        let mut text = Text::from("held");
        text.insert(3, "lo wor").unwrap();
        assert_eq!(text.as_bytes(), b"hello word");
        text.insert(10, "!").unwrap();
        assert_eq!(text.as_bytes(), b"hello word!");
    }

    #[test]
    fn test_insert_past_end_is_signaled_and_leaves_state() {
        let mut text = Text::from("abc");
        let err = text.insert(4, "x").unwrap_err();
        assert!(matches!(err, MemError::Index { index: 4, size: 3, .. }));
        assert_eq!(text.as_bytes(), b"abc");
    }

    #[test]
    fn test_case_conversion_ascii_only() {
        let mut text = Text::from("Hello, World! 123");
        text.make_uppercase();
        assert_eq!(text.as_bytes(), b"HELLO, WORLD! 123");
        text.make_lowercase();
        assert_eq!(text.as_bytes(), b"hello, world! 123");

        // Bytes outside the ASCII letters are untouched.
        let mut raw = Text::from(vec![0xC3u8, 0xA9, b'a']);
        raw.make_uppercase();
        assert_eq!(raw.as_bytes(), &[0xC3, 0xA9, b'A']);
    }

    #[test]
    fn test_assign_tmpl() {
        let mut text = Text::new();
        text.assign_tmpl("hello {}, {}", &[1i32.into(), "world".into()])
            .unwrap();
        assert_eq!(text.as_bytes(), b"hello 1, world");
    }

    #[test]
    fn test_append_tmpl() {
        let mut text = Text::from("x=");
        text.append_tmpl("{}, y={}", &[3i32.into(), "hi".into()])
            .unwrap();
        assert_eq!(text.as_bytes(), b"x=3, y=hi");
    }

    #[test]
    fn test_tmpl_mismatch_leaves_buffer_untouched() {
        let mut text = Text::from("keep");
        assert!(text.assign_tmpl("{} {}", &[1i32.into()]).is_err());
        assert_eq!(text.as_bytes(), b"keep");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"raw\x00bytes").unwrap();

        let mut text = Text::from("old");
        text.load_from_file(file.path()).unwrap();
        assert_eq!(text.as_bytes(), b"raw\x00bytes");
    }

    #[test]
    fn test_load_from_missing_file_is_signaled() {
        let mut text = Text::from("old");
        let err = text
            .load_from_file("/nonexistent/keel-mem-test")
            .unwrap_err();
        assert!(matches!(err, MemError::Unreadable { .. }));
        // Failed load leaves prior contents untouched.
        assert_eq!(text.as_bytes(), b"old");
    }

    #[test]
    fn test_to_cstr() {
        let text = Text::from("hello");
        let cstr = text.to_cstr();
        assert_eq!(cstr.len(), 6);
        assert_eq!(cstr[5], 0);
    }

    #[test]
    fn test_display_lossy() {
        let text = Text::from("hello");
        assert_eq!(text.to_string(), "hello");
    }
}
