//! Typed template expansion
//!
//! Backs the formatted-assignment operations on [`Text`]. A template is a
//! byte sequence in which each `{}` consumes the next value from a typed,
//! structured value list; `{{` and `}}` emit literal braces. Because every
//! value carries its own type, a template can mismatch its values only in
//! arity, and that is a signaled failure rather than undefined behavior.

use crate::error::{MemError, MemResult};
use crate::shared::Shared;
use crate::text::Text;

/// A typed value substituted for a `{}` placeholder
#[derive(Debug, Clone)]
pub enum TmplValue {
    /// Signed integer, rendered in decimal
    Int(i64),
    /// Unsigned integer, rendered in decimal
    Uint(u64),
    /// Floating-point number, rendered via Rust's shortest form
    Float(f64),
    /// `true` or `false`
    Bool(bool),
    /// A single raw byte, emitted verbatim
    Byte(u8),
    /// UTF-8 text
    Str(String),
    /// Raw bytes, emitted verbatim
    Bytes(Vec<u8>),
    /// A shared text buffer; its current bytes are emitted
    Text(Shared<Text>),
}

impl TmplValue {
    fn render_into(&self, out: &mut Vec<u8>) {
        match self {
            TmplValue::Int(i) => out.extend_from_slice(i.to_string().as_bytes()),
            TmplValue::Uint(u) => out.extend_from_slice(u.to_string().as_bytes()),
            TmplValue::Float(x) => out.extend_from_slice(x.to_string().as_bytes()),
            TmplValue::Bool(b) => out.extend_from_slice(b.to_string().as_bytes()),
            TmplValue::Byte(b) => out.push(*b),
            TmplValue::Str(s) => out.extend_from_slice(s.as_bytes()),
            TmplValue::Bytes(b) => out.extend_from_slice(b),
            TmplValue::Text(t) => out.extend_from_slice(t.borrow().as_bytes()),
        }
    }
}

impl From<i32> for TmplValue {
    fn from(i: i32) -> Self {
        TmplValue::Int(i as i64)
    }
}

impl From<i64> for TmplValue {
    fn from(i: i64) -> Self {
        TmplValue::Int(i)
    }
}

impl From<u32> for TmplValue {
    fn from(u: u32) -> Self {
        TmplValue::Uint(u as u64)
    }
}

impl From<u64> for TmplValue {
    fn from(u: u64) -> Self {
        TmplValue::Uint(u)
    }
}

impl From<f64> for TmplValue {
    fn from(x: f64) -> Self {
        TmplValue::Float(x)
    }
}

impl From<bool> for TmplValue {
    fn from(b: bool) -> Self {
        TmplValue::Bool(b)
    }
}

impl From<&str> for TmplValue {
    fn from(s: &str) -> Self {
        TmplValue::Str(s.to_string())
    }
}

impl From<String> for TmplValue {
    fn from(s: String) -> Self {
        TmplValue::Str(s)
    }
}

impl From<&[u8]> for TmplValue {
    fn from(b: &[u8]) -> Self {
        TmplValue::Bytes(b.to_vec())
    }
}

impl From<&Shared<Text>> for TmplValue {
    fn from(t: &Shared<Text>) -> Self {
        TmplValue::Text(t.retain())
    }
}

/// Expand `template` against `values`, consuming one value per `{}`
///
/// `scope` labels any failure with the calling operation. Fails when a
/// placeholder has no remaining value, when values are left unconsumed,
/// or on a lone `{` / `}`. The output grows as needed; there is no size
/// cap beyond available memory.
pub fn expand(scope: &str, template: &[u8], values: &[TmplValue]) -> MemResult<Vec<u8>> {
    let mut out = Vec::with_capacity(template.len());
    let mut next = 0usize;
    let mut i = 0usize;

    while i < template.len() {
        match template[i] {
            b'{' => match template.get(i + 1) {
                Some(b'{') => {
                    out.push(b'{');
                    i += 2;
                }
                Some(b'}') => {
                    let value = values.get(next).ok_or_else(|| {
                        MemError::template(
                            scope,
                            format!("placeholder {} has no matching value", next + 1),
                        )
                    })?;
                    value.render_into(&mut out);
                    next += 1;
                    i += 2;
                }
                _ => {
                    return Err(MemError::template(scope, "unterminated '{' in template"));
                }
            },
            b'}' => match template.get(i + 1) {
                Some(b'}') => {
                    out.push(b'}');
                    i += 2;
                }
                _ => {
                    return Err(MemError::template(scope, "unmatched '}' in template"));
                }
            },
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    if next < values.len() {
        return Err(MemError::template(
            scope,
            format!("{} of {} values unused", values.len() - next, values.len()),
        ));
    }

    Ok(out)
}
