use crate::value::{Value, number::format_number};

///
/// RenderMode
///
/// Canonical renders JSON-like literals; Legacy flattens arrays into
/// comma-joined element text and collapses objects to a fixed marker.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RenderMode {
    Canonical,
    Legacy,
}

pub(crate) const LEGACY_OBJECT: &str = "[object Object]";

///
/// Piece
///

enum Piece<'a> {
    Value(&'a Value),
    Key(&'a str),
    Raw(&'static str),
}

/// Append the text form of `value` to `out`.
///
/// Top-level strings are quoted in canonical mode; callers that want raw
/// top-level strings handle that case before calling.
pub(crate) fn render_into(value: &Value, mode: RenderMode, out: &mut String) {
    let mut stack = vec![Piece::Value(value)];

    while let Some(piece) = stack.pop() {
        match piece {
            Piece::Raw(text) => out.push_str(text),
            Piece::Key(key) => {
                push_json_string(out, key);
                out.push(':');
            }
            Piece::Value(value) => match value {
                Value::Null => out.push_str("null"),
                Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                Value::Number(n) => out.push_str(&format_number(n.get())),
                Value::String(s) => match mode {
                    RenderMode::Canonical => push_json_string(out, s),
                    RenderMode::Legacy => out.push_str(s),
                },
                Value::Array(items) => {
                    if mode == RenderMode::Canonical {
                        out.push('[');
                        stack.push(Piece::Raw("]"));
                    }
                    for (i, item) in items.iter().enumerate().rev() {
                        stack.push(Piece::Value(item));
                        if i > 0 {
                            stack.push(Piece::Raw(","));
                        }
                    }
                }
                Value::Object(attrs) => match mode {
                    RenderMode::Legacy => out.push_str(LEGACY_OBJECT),
                    RenderMode::Canonical => {
                        out.push('{');
                        stack.push(Piece::Raw("}"));
                        for (i, (key, item)) in attrs.iter().enumerate().rev() {
                            stack.push(Piece::Value(item));
                            stack.push(Piece::Key(key));
                            if i > 0 {
                                stack.push(Piece::Raw(","));
                            }
                        }
                    }
                },
            },
        }
    }
}

#[must_use]
pub(crate) fn render(value: &Value, mode: RenderMode) -> String {
    let mut out = String::new();
    render_into(value, mode, &mut out);

    out
}

// JSON string literal with serde_json escaping rules.
fn push_json_string(out: &mut String, text: &str) {
    out.push_str(&serde_json::Value::from(text).to_string());
}
