//! Single-pass JSON parser.
//!
//! [`JsonReader`] walks a byte stream once, decoding UTF-8 incrementally and
//! holding at most one character of lookahead plus the current token buffer;
//! memory use is bounded by nesting depth, not document size. Top-level
//! dispatch is on the first non-whitespace character: `"` starts a string,
//! `[` an array, `{` an object, and anything else a literal run.
//!
//! The parser is lenient by design. In the generic (untyped) path a
//! structural violation inside an object (a non-string key, a missing
//! colon) terminates that object early and returns the partial result
//! instead of failing. Unrecognized literals quietly become `Null`. Commas
//! between array elements are consumed when present but never required.
//!
//! One asymmetry with [`crate::builder`] is intentional and preserved from
//! the source behavior this codec reproduces: the string scanner drops every
//! backslash without interpreting it, so named escapes like `\n` are *not*
//! decoded back into control characters (`"a\nb"` parses as `anb`). Do not
//! "fix" this; round trips are only guaranteed for text free of `"`, `\`,
//! and `/`.
//!
//! A reader owns its stream exclusively and is single-use: every entry point
//! consumes the reader, so the stream is released on all exit paths.

use std::collections::HashMap;
use std::io::{self, Read};
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{BindError, Result};
use crate::records::{self, Record};
use crate::value::JsonValue;

/// Parse JSON text into the generic value union.
pub fn parse(text: &str) -> Result<JsonValue> {
    JsonReader::new(text.as_bytes()).to_value()
}

/// Bind JSON text to a record type. The first non-whitespace character must
/// be `{`, otherwise a format error is returned.
pub fn bind<T: Record>(text: &str) -> Result<T> {
    JsonReader::new(text.as_bytes()).bind()
}

/// Bind a JSON array of objects to a list of records. Returns `None` when
/// the first non-whitespace character is not `[` (a quieter outcome than
/// [`bind`]'s hard failure, preserved as observed behavior). Elements that
/// are not objects, or are empty objects, are skipped.
pub fn bind_list<T: Record>(text: &str) -> Result<Option<Vec<T>>> {
    JsonReader::new(text.as_bytes()).bind_list()
}

/// Recursive-descent reader over a byte stream.
pub struct JsonReader<R: Read> {
    src: R,
    peeked: Option<char>,
}

impl<R: Read> JsonReader<R> {
    pub fn new(src: R) -> Self {
        Self { src, peeked: None }
    }

    /// Read one JSON item into the generic value union. Empty input is
    /// `Null`.
    pub fn to_value(mut self) -> Result<JsonValue> {
        self.read_item(None)
    }

    /// Read one JSON object and bind it to `T`.
    pub fn bind<T: Record>(mut self) -> Result<T> {
        match self.next_non_ws()? {
            Some('{') => records::from_map(self.read_object()?),
            _ => Err(BindError::Format("expected a JSON object".into())),
        }
    }

    /// Read a JSON array of objects and bind each to `T`. See [`bind_list`]
    /// for the leniency rules.
    pub fn bind_list<T: Record>(mut self) -> Result<Option<Vec<T>>> {
        match self.next_non_ws()? {
            Some('[') => {
                let mut list = Vec::new();
                self.walk_array(|item| {
                    if let JsonValue::Object(map) = item {
                        if !map.is_empty() {
                            list.push(records::from_map(map)?);
                        }
                    }
                    Ok(())
                })?;
                Ok(Some(list))
            }
            _ => Ok(None),
        }
    }

    fn read_item(&mut self, prev: Option<char>) -> Result<JsonValue> {
        let ch = match prev {
            Some(c) => Some(c),
            None => self.next_non_ws()?,
        };
        match ch {
            None => Ok(JsonValue::Null),
            Some('"') => Ok(JsonValue::String(self.read_string()?)),
            Some('[') => self.read_array().map(JsonValue::Array),
            Some('{') => self.read_object().map(JsonValue::Object),
            Some(c) => self.read_literal(c),
        }
    }

    /// Raw string scan: runs until an unescaped `"`, where "escaped" means
    /// the immediately preceding raw character was `\`. Backslashes are
    /// dropped, never interpreted (see the module docs). An exhausted stream
    /// ends the string.
    fn read_string(&mut self) -> Result<String> {
        let mut out = String::new();
        let mut prev = '\0';
        while let Some(c) = self.next_char()? {
            if c == '"' && prev != '\\' {
                break;
            }
            if c != '\\' {
                out.push(c);
            }
            prev = c;
        }
        Ok(out)
    }

    /// Accumulate a literal run up to the next delimiter, skipping interior
    /// whitespace. The delimiter belongs to the enclosing structure and is
    /// pushed back.
    fn read_literal(&mut self, first: char) -> Result<JsonValue> {
        let mut token = String::new();
        let mut ch = Some(first);
        while let Some(c) = ch {
            if c == ',' || c == '}' || c == ']' {
                self.peeked = Some(c);
                break;
            }
            token.push(c);
            ch = self.next_non_ws()?;
        }
        Ok(classify_literal(&token))
    }

    fn read_array(&mut self) -> Result<Vec<JsonValue>> {
        let mut items = Vec::new();
        self.walk_array(|item| {
            items.push(item);
            Ok(())
        })?;
        Ok(items)
    }

    fn read_object(&mut self) -> Result<HashMap<String, JsonValue>> {
        let mut map = HashMap::new();
        self.walk_object(|key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }

    /// Elements until `]`; a comma after an element is consumed when present.
    fn walk_array(&mut self, mut f: impl FnMut(JsonValue) -> Result<()>) -> Result<()> {
        let mut ch = self.next_non_ws()?;
        while let Some(c) = ch {
            if c == ']' {
                break;
            }
            f(self.read_item(Some(c))?)?;
            ch = self.next_non_ws()?;
            if ch == Some(',') {
                ch = self.next_non_ws()?;
            }
        }
        Ok(())
    }

    /// Alternating `"key"`, `:`, value, optional `,` until `}`. A structural
    /// violation ends the object early with whatever was collected so far.
    fn walk_object(&mut self, mut f: impl FnMut(String, JsonValue)) -> Result<()> {
        let mut ch = self.next_non_ws()?;
        while let Some(c) = ch {
            if c != '"' {
                // `}` is the normal end; any other non-quote is a violation
                // that ends the object early.
                break;
            }
            let key = self.read_string()?;
            if self.next_non_ws()? != Some(':') {
                break;
            }
            let value = self.read_item(None)?;
            f(key, value);
            ch = self.next_non_ws()?;
            if ch == Some(',') {
                ch = self.next_non_ws()?;
            }
        }
        Ok(())
    }

    fn next_non_ws(&mut self) -> Result<Option<char>> {
        loop {
            match self.next_char()? {
                Some(c) if c.is_whitespace() => continue,
                other => return Ok(other),
            }
        }
    }

    /// One character of the stream, honoring the pushback slot and decoding
    /// UTF-8 incrementally. Invalid sequences surface as I/O failures.
    fn next_char(&mut self) -> Result<Option<char>> {
        if let Some(c) = self.peeked.take() {
            return Ok(Some(c));
        }
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };
        if first < 0x80 {
            return Ok(Some(first as char));
        }
        let len = match first {
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => return Err(invalid_utf8()),
        };
        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(len).skip(1) {
            let Some(b) = self.next_byte()? else {
                return Err(invalid_utf8());
            };
            *slot = b;
        }
        match std::str::from_utf8(&buf[..len]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(invalid_utf8()),
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.src.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Classify a literal run: `null`/`true`/`false` case-insensitively, then
/// the first successful parse of i32, i64, and arbitrary-precision decimal,
/// in that fixed order. Anything else quietly becomes `Null`.
fn classify_literal(token: &str) -> JsonValue {
    if token.eq_ignore_ascii_case("null") {
        return JsonValue::Null;
    }
    if token.eq_ignore_ascii_case("true") {
        return JsonValue::Bool(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return JsonValue::Bool(false);
    }
    if let Ok(n) = token.parse::<i32>() {
        return JsonValue::Int(n);
    }
    if let Ok(n) = token.parse::<i64>() {
        return JsonValue::Long(n);
    }
    if let Ok(d) = BigDecimal::from_str(token) {
        return JsonValue::Decimal(d);
    }
    JsonValue::Null
}

fn invalid_utf8() -> BindError {
    BindError::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        "invalid UTF-8 in JSON stream",
    ))
}
