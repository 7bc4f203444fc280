use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::ApiError;

/// Wire format of a request body and its response.
///
/// Chosen once when an [`ApiRequest`](crate::ApiRequest) is built. The
/// transport never branches on the format itself; it asks the descriptor's
/// `ContentType` to encode and decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    #[default]
    Json,
    Xml,
}

/// Why a response body could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The text is not well-formed in the declared format.
    Malformed,
    /// Well-formed, but its structure does not match the expected type.
    SchemaMismatch,
}

impl ContentType {
    /// MIME type sent in the `Content-Type` header.
    pub fn mime(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
        }
    }

    pub fn serialize<T: Serialize>(self, value: &T) -> Result<String, ApiError> {
        let encoded = match self {
            ContentType::Json => serde_json::to_string(value).map_err(|e| e.to_string()),
            ContentType::Xml => quick_xml::se::to_string(value).map_err(|e| e.to_string()),
        };
        encoded.map_err(|message| ApiError::Serialize {
            format: self,
            message,
        })
    }

    pub fn deserialize<T: DeserializeOwned>(self, content: &str) -> Result<T, ApiError> {
        match self {
            ContentType::Json => serde_json::from_str(content).map_err(|e| ApiError::Deserialize {
                format: self,
                failure: classify_json(&e),
                message: e.to_string(),
            }),
            ContentType::Xml => {
                check_xml_document(content).map_err(|message| ApiError::Deserialize {
                    format: self,
                    failure: DecodeFailure::Malformed,
                    message,
                })?;
                quick_xml::de::from_str(content).map_err(|e| ApiError::Deserialize {
                    format: self,
                    failure: classify_xml(&e),
                    message: e.to_string(),
                })
            }
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Json => f.write_str("JSON"),
            ContentType::Xml => f.write_str("XML"),
        }
    }
}

/// Read `content` to the end as a single well-formed XML document.
///
/// `quick_xml::de` stops once the root element closes, so trailing markup
/// would otherwise go unnoticed.
fn check_xml_document(content: &str) -> Result<(), String> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(content);
    let mut depth = 0usize;
    let mut root_closed = false;
    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        match event {
            Event::Eof if depth == 0 => return Ok(()),
            Event::Eof => return Err(format!("document ends inside {depth} open element(s)")),
            Event::Start(_) | Event::Empty(_) if root_closed => {
                return Err("markup after the root element".to_string());
            }
            Event::Start(_) => depth += 1,
            Event::Empty(_) if depth == 0 => root_closed = true,
            Event::End(_) if depth == 0 => return Err("unmatched end tag".to_string()),
            Event::End(_) => {
                depth -= 1;
                root_closed = depth == 0;
            }
            Event::Text(text) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err("text outside the root element".to_string());
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err("CDATA outside the root element".to_string());
            }
            _ => {}
        }
    }
}

fn classify_json(err: &serde_json::Error) -> DecodeFailure {
    use serde_json::error::Category;
    match err.classify() {
        Category::Data => DecodeFailure::SchemaMismatch,
        Category::Syntax | Category::Eof | Category::Io => DecodeFailure::Malformed,
    }
}

fn classify_xml(err: &quick_xml::DeError) -> DecodeFailure {
    use quick_xml::DeError;
    match err {
        DeError::InvalidXml(_) | DeError::UnexpectedEof => DecodeFailure::Malformed,
        _ => DecodeFailure::SchemaMismatch,
    }
}
