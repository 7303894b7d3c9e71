//! JSON rendering for view modules.
//!
//! Bodies are written the way the browser-side plot code expects them: `", "` and `": "`
//! separators, ASCII-only output, every `</` escaped, and a 256-space pad ahead of the
//! payload so old browsers never sniff the body as HTML.

use crate::application::shared::json_response::JsonResponse;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

pub const DEFAULT_MIME_TYPE: &str = "text/json";
pub const PAD_WIDTH: usize = 256;

/// What to serialize: plain data, or a response wrapper that knows its own encoding.
#[derive(Debug)]
pub enum Payload<T> {
    Raw(T),
    Structured(JsonResponse<T>),
}

/// A rendered body together with the content type it must be sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    pub content_type: String,
    pub body: String,
}

impl RenderedBody {
    /// The payload text without the leading pad.
    pub fn payload(&self) -> &str {
        self.body.get(PAD_WIDTH + 1..).unwrap_or("")
    }
}

/// Serialize `payload`, escape `</`, and prepend the whitespace pad.
pub fn render_json<T: Serialize>(
    payload: &Payload<T>,
    mime_type: &str,
) -> Result<RenderedBody, serde_json::Error> {
    let json = match payload {
        Payload::Raw(data) => to_classic_json(data)?,
        Payload::Structured(response) => response.to_json()?,
    };
    let escaped = json.replace("</", "<\\/");

    let mut body = String::with_capacity(PAD_WIDTH + 1 + escaped.len());
    body.extend(std::iter::repeat(' ').take(PAD_WIDTH));
    body.push('\n');
    body.push_str(&escaped);

    Ok(RenderedBody {
        content_type: mime_type.to_string(),
        body,
    })
}

/// Serialize with `", "` / `": "` separators and `\uXXXX` escapes for anything outside
/// printable ASCII.
pub fn to_classic_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, ClassicFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

struct ClassicFormatter;

impl Formatter for ClassicFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::output_record::OutputRecord;
    use serde_json::json;

    fn record(name: &str) -> OutputRecord {
        OutputRecord {
            name: name.to_string(),
            key: "1000".to_string(),
            time: "12:00".to_string(),
            value: "5".to_string(),
        }
    }

    #[test]
    fn given_records_when_rendered_should_match_classic_layout() {
        let rendered = render_json(&Payload::Raw(vec![record("A")]), DEFAULT_MIME_TYPE).unwrap();

        let expected = format!(
            "{}\n{}",
            " ".repeat(256),
            r#"[{"name": "A", "key": "1000", "time": "12:00", "value": "5"}]"#
        );
        assert_eq!(rendered.body, expected);
        assert_eq!(rendered.content_type, "text/json");
    }

    #[test]
    fn given_any_payload_when_rendered_should_start_with_exact_pad() {
        let rendered = render_json(&Payload::Raw(json!([])), "application/json").unwrap();

        assert!(rendered.body.starts_with(&" ".repeat(PAD_WIDTH)));
        assert_eq!(rendered.body.as_bytes()[PAD_WIDTH], b'\n');
        assert_eq!(rendered.payload(), "[]");
        assert_eq!(rendered.content_type, "application/json");
    }

    #[test]
    fn given_closing_tags_when_rendered_should_escape_every_occurrence() {
        let rendered =
            render_json(&Payload::Raw(vec![record("</script><b></b>")]), DEFAULT_MIME_TYPE)
                .unwrap();

        assert!(!rendered.payload().contains("</"));
        assert_eq!(rendered.payload().matches("<\\/").count(), 2);
    }

    #[test]
    fn given_non_ascii_text_when_serialized_should_escape_as_utf16_units() {
        let json = to_classic_json(&json!(["caf\u{e9}", "\u{1f525}", "a\u{7f}b"])).unwrap();
        assert_eq!(json, r#"["caf\u00e9", "\ud83d\udd25", "a\u007fb"]"#);
    }

    #[test]
    fn given_control_characters_when_serialized_should_use_short_escapes() {
        let json = to_classic_json(&json!({"k": "line\n\t\"q\"\u{1}"})).unwrap();
        assert_eq!(json, r#"{"k": "line\n\t\"q\"\u0001"}"#);
    }

    #[test]
    fn given_nested_containers_when_serialized_should_separate_every_level() {
        let json = to_classic_json(&json!({"a": [1, 2, {"b": null}], "c": {}})).unwrap();
        assert_eq!(json, r#"{"a": [1, 2, {"b": null}], "c": {}}"#);
    }

    #[test]
    fn given_same_payload_when_rendered_twice_should_be_byte_identical() {
        let data = vec![record("A"), record("B")];
        let first = render_json(&Payload::Raw(data.clone()), DEFAULT_MIME_TYPE).unwrap();
        let second = render_json(&Payload::Raw(data), DEFAULT_MIME_TYPE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn given_structured_payload_when_rendered_should_use_wrapper_encoding() {
        let response = JsonResponse::success(vec![record("A")]).with_window(0, 1, 1);

        let rendered = render_json(&Payload::Structured(response), DEFAULT_MIME_TYPE).unwrap();

        assert!(rendered.payload().starts_with(r#"{"success": true"#));
        assert!(rendered.payload().contains(r#""data": [{"name": "A""#));
    }
}
