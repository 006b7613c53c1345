//! JSONP rendering of catalogs.
//!
//! The widget loads catalogs through a script tag, so each file is a call to
//! the callback with the catalog as its argument. The JSON is pretty-printed
//! with a 4-space indent, `": "` between keys and values, and every character
//! outside printable ASCII escaped as `\uXXXX`.

use std::io;

use pkgcat_error::{CatalogError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

/// Callback name the download widget registers.
pub const DEFAULT_CALLBACK: &str = "jsonCallback";

const INDENT: &[u8] = b"    ";

/// Check that `name` can be used as a JSONP callback (a dotted JS identifier).
pub fn validate_callback(name: &str) -> Result<()> {
    let is_identifier = |segment: &str| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    };

    if name.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(CatalogError::Config(format!(
            "Invalid JSONP callback name '{name}'"
        )))
    }
}

/// Pretty formatter that also escapes non-ASCII and DEL characters.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiPrettyFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    // Quotes, backslashes and control characters never reach this method.
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch <= '~' {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize a value as 4-space indented, ASCII-only JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| CatalogError::Other(e.into()))
}

/// Render a value as `<callback>(<json>)`.
///
/// ```
/// use pkgcat::emit::render_jsonp;
/// use pkgcat_types::Catalog;
///
/// let text = render_jsonp("jsonCallback", &Catalog::new()).unwrap();
/// assert_eq!(
///     text,
///     "jsonCallback({\n    \"tabs\": [],\n    \"flavours_captions\": {\n        \"main\": \"Standard\"\n    }\n})"
/// );
/// ```
pub fn render_jsonp<T: Serialize + ?Sized>(callback: &str, value: &T) -> Result<String> {
    Ok(format!("{callback}({})", to_pretty_json(value)?))
}

/// Strip the callback wrapper, returning the JSON text.
///
/// Returns `None` if `text` is not a call to `callback`.
pub fn strip_jsonp<'a>(callback: &str, text: &'a str) -> Option<&'a str> {
    text.strip_prefix(callback)?
        .strip_prefix('(')?
        .strip_suffix(')')
}
