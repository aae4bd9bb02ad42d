//! Streaming JSON serializer.
//!
//! [`JsonBuilder`] appends tokens to an internal buffer while two flags keep
//! commas correctly placed: *pending-comma* records that a sibling was
//! already emitted at the current nesting level, and *after-property* records
//! that a property name was just written (which suppresses the comma the next
//! value would otherwise emit). Output contains no inserted whitespace.
//!
//! The escaping rules are deliberately specific and are relied on by
//! consumers embedding output in HTML contexts:
//!
//! - `\` and `"` are backslash-escaped as-is
//! - `/` is escaped only when the previous character was `<` (so `</script>`
//!   cannot appear verbatim), and emitted bare otherwise
//! - backspace, tab, newline, formfeed, and carriage-return use their named
//!   escapes
//! - anything below `0x20`, in `[0x80,0xA0)`, or in `[0x2000,0x2100)` is
//!   emitted as `\u` plus four lowercase hex digits
//!
//! A builder is single-use: build one document, then take the string out.

use crate::records::{self, Record};
use crate::value::JsonValue;

/// Incremental JSON writer. See the module docs for the comma discipline.
#[derive(Default)]
pub struct JsonBuilder {
    out: String,
    comma: bool,
    prop: bool,
}

impl JsonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document built so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn begin_array(&mut self) {
        if self.comma {
            self.out.push(',');
        }
        self.out.push('[');
        self.comma = false;
        self.prop = false;
    }

    pub fn end_array(&mut self) {
        self.out.push(']');
        self.comma = true;
        self.prop = false;
    }

    pub fn begin_object(&mut self) {
        if self.comma {
            self.out.push(',');
        }
        self.out.push('{');
        self.comma = false;
        self.prop = false;
    }

    pub fn end_object(&mut self) {
        self.out.push('}');
        self.comma = true;
        self.prop = false;
    }

    /// Write a property name. The next [`value`](Self::value) call binds to
    /// it without a separating comma.
    pub fn property(&mut self, name: &str) {
        if self.comma {
            self.out.push(',');
        }
        self.out.push('"');
        escape_into(&mut self.out, name);
        self.out.push('"');
        self.out.push(':');
        self.comma = false;
        self.prop = true;
    }

    /// Write a value, dispatching on its variant: `null` and booleans as
    /// literals, numbers as their raw base-10 form, strings quoted and
    /// escaped, objects and arrays recursively.
    pub fn value(&mut self, v: &JsonValue) {
        if self.comma && !self.prop {
            self.out.push(',');
        }
        // Cleared before dispatch so a nested begin_* cannot emit a second
        // separator for the same sibling position.
        self.comma = false;

        match v {
            JsonValue::Null => self.out.push_str("null"),
            JsonValue::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            JsonValue::Int(n) => self.out.push_str(&n.to_string()),
            JsonValue::Long(n) => self.out.push_str(&n.to_string()),
            JsonValue::Decimal(d) => self.out.push_str(&d.to_string()),
            JsonValue::String(s) => self.string(s),
            JsonValue::Array(items) => {
                self.begin_array();
                for item in items {
                    self.value(item);
                }
                self.end_array();
            }
            JsonValue::Object(map) => {
                self.begin_object();
                for (key, val) in map {
                    self.property(key);
                    self.value(val);
                }
                self.end_object();
            }
        }

        self.comma = true;
        self.prop = false;
    }

    fn string(&mut self, s: &str) {
        self.out.push('"');
        escape_into(&mut self.out, s);
        self.out.push('"');
    }
}

/// Serialize a generic value to JSON text with no inserted whitespace.
pub fn to_json(value: &JsonValue) -> String {
    let mut builder = JsonBuilder::new();
    builder.value(value);
    builder.into_string()
}

/// Serialize a record by flattening it through the binder first, so nested
/// records serialize as nested objects automatically.
pub fn record_to_json<T: Record>(rec: &T) -> String {
    to_json(&JsonValue::Object(records::to_map(rec)))
}

/// The escaping state machine. `b` tracks the previous raw character so the
/// `</` sequence can be broken up.
fn escape_into(out: &mut String, s: &str) {
    let mut b = '\0';
    for c in s.chars() {
        match c {
            '\\' | '"' => {
                out.push('\\');
                out.push(c);
            }
            '/' => {
                if b == '<' {
                    out.push('\\');
                }
                out.push('/');
            }
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            _ => {
                let u = c as u32;
                if u < 0x20 || (0x80..0xa0).contains(&u) || (0x2000..0x2100).contains(&u) {
                    out.push_str(&format!("\\u{u:04x}"));
                } else {
                    out.push(c);
                }
            }
        }
        b = c;
    }
}
