//! @ai:module:intent Encode payloads as browser-downloadable data URIs
//! @ai:module:layer infrastructure
//! @ai:module:public_api data_uri, create_download_link
//! @ai:module:stateless true

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// @ai:intent Encode text as a base64 data URI
/// @ai:post the base64 segment decodes to the UTF-8 bytes of content
/// @ai:effects pure
pub fn data_uri(content: &str, mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(content.as_bytes()))
}

/// @ai:intent Build an HTML anchor that downloads content under filename
/// @ai:effects pure
pub fn create_download_link(content: &str, filename: &str, mime_type: &str) -> String {
    let filename = escape_attribute(filename);
    format!(
        "<a href=\"{}\" download=\"{}\">Download {}</a>",
        data_uri(content, mime_type),
        filename,
        filename
    )
}

/// @ai:intent Escape characters that would break an HTML attribute or text node
/// @ai:effects pure
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_segment(uri: &str) -> String {
        let (_, encoded) = uri.split_once(";base64,").unwrap();
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = data_uri("X", "text/plain");
        assert_eq!(uri, "data:text/plain;base64,WA==");
    }

    #[test]
    fn test_data_uri_decodes_back() {
        for content in ["X", "", "outlet,dish\nA,Biryani\n", "ద్వారా • café → 🍛"] {
            let uri = data_uri(content, "text/csv");
            assert_eq!(decode_segment(&uri), content);
        }
    }

    #[test]
    fn test_download_link() {
        let link = create_download_link("hello", "kkcg_demand_data.csv", "text/csv");
        assert_eq!(
            link,
            "<a href=\"data:text/csv;base64,aGVsbG8=\" download=\"kkcg_demand_data.csv\">Download kkcg_demand_data.csv</a>"
        );
    }

    #[test]
    fn test_download_link_escapes_filename() {
        let link = create_download_link("x", "a\"b<c>.txt", "text/plain");
        assert!(link.contains("download=\"a&quot;b&lt;c&gt;.txt\""));
    }
}
