//! Rendering of `/Info` dictionary values as strings.

use lopdf::Object;

/// Render an `/Info` value as a string.
///
/// Strings are decoded as PDF text strings (PDFDocEncoding, or UTF-16 when
/// they carry a byte-order mark). Names, numbers and booleans are rendered as
/// text. Returns `None` for values with no meaningful text form (arrays,
/// dictionaries, streams, null and unresolved references).
pub fn value_to_string(object: &Object) -> Option<String> {
    match object {
        Object::String(..) => lopdf::decode_text_string(object).ok(),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Object::Integer(i) => Some(i.to_string()),
        Object::Real(f) => Some(f.to_string()),
        Object::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::StringFormat;

    #[test]
    fn pdfdoc_encoded_literal_is_decoded() {
        let note = Object::String(b"Caf\xe9".to_vec(), StringFormat::Literal);
        assert_eq!(value_to_string(&note).as_deref(), Some("Café"));
    }

    #[test]
    fn utf16_string_with_bom_is_decoded() {
        let bytes = vec![0xFE, 0xFF, 0x65, 0xE5, 0x67, 0x2C];
        let note = Object::String(bytes, StringFormat::Hexadecimal);
        assert_eq!(value_to_string(&note).as_deref(), Some("日本"));
    }

    #[test]
    fn encoded_text_reads_back_unchanged() {
        for text in ["plain", "Café", "Āččęñtš", "日本語"] {
            assert_eq!(value_to_string(&lopdf::text_string(text)).as_deref(), Some(text));
        }
    }

    #[test]
    fn non_string_values_render_as_text() {
        assert_eq!(value_to_string(&Object::Name(b"False".to_vec())).as_deref(), Some("False"));
        assert_eq!(value_to_string(&Object::Integer(42)).as_deref(), Some("42"));
        assert_eq!(value_to_string(&Object::Boolean(true)).as_deref(), Some("true"));
        assert_eq!(value_to_string(&Object::Null), None);
        assert_eq!(value_to_string(&Object::Array(vec![])), None);
    }
}
