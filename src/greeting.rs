use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt::{self, Debug, Display, Write as _};

/// Text handed back by the native greeting routine.
///
/// Holds the bytes of the C string without its terminating NUL. C gives no
/// encoding guarantee, so the bytes are kept as-is and only interpreted as
/// UTF-8 when rendered.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Greeting {
    bytes: Box<[u8]>,
}

impl Greeting {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Greeting {
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    /// Copies the contents of a borrowed C string.
    pub fn from_c_str(s: &CStr) -> Self {
        Greeting::new(s.to_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the greeting as UTF-8, borrowing when it is already valid and
    /// otherwise replacing each invalid sequence with U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl From<&str> for Greeting {
    fn from(s: &str) -> Self {
        Greeting::new(s)
    }
}

impl From<String> for Greeting {
    fn from(s: String) -> Self {
        Greeting::new(s)
    }
}

impl From<&CStr> for Greeting {
    fn from(s: &CStr) -> Self {
        Greeting::from_c_str(s)
    }
}

impl Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for chunk in self.bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl Debug for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('"')?;
        for chunk in self.bytes.utf8_chunks() {
            for ch in chunk.valid().chars() {
                // Single quotes need no escaping inside a double-quoted string.
                if ch == '\'' {
                    f.write_char(ch)?;
                } else {
                    write!(f, "{}", ch.escape_debug())?;
                }
            }
            for b in chunk.invalid() {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        f.write_char('"')
    }
}
