// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@code-box.org>                                                         |
// +-----------------------------------------------------------------------------------------------+

//! Message framing resolution.
//!
//! Once all headers of a message have been parsed, the headers that influence framing are
//! resolved into the body strategy and the connection flags. Resolution is a pure computation and
//! runs exactly once per message.

use crate::byte::trim_space_tab;
use crate::http1::{ FramingConflict, MessageKind, ParserError };

/// Declared body length.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum ContentLength {
    /// `Content-Length` was found with this value.
    Known(u64),

    /// No `Content-Length` applies to the message.
    Unbounded
}

/// Headers that take part in framing resolution.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum FramingHeader {
    /// `Connection`.
    Connection,

    /// `Content-Length`.
    ContentLength,

    /// `Transfer-Encoding`.
    TransferEncoding,

    /// `Upgrade`.
    Upgrade
}

impl FramingHeader {
    /// Classify a header field, ignoring case.
    pub fn from_field(field: &[u8]) -> Option<FramingHeader> {
        if field.eq_ignore_ascii_case(b"content-length") {
            Some(FramingHeader::ContentLength)
        } else if field.eq_ignore_ascii_case(b"transfer-encoding") {
            Some(FramingHeader::TransferEncoding)
        } else if field.eq_ignore_ascii_case(b"connection") {
            Some(FramingHeader::Connection)
        } else if field.eq_ignore_ascii_case(b"upgrade") {
            Some(FramingHeader::Upgrade)
        } else {
            None
        }
    }
}

/// Body strategy.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum BodyFraming {
    /// The message has no body.
    None,

    /// The body uses chunked transfer encoding.
    Chunked,

    /// The body has a known length.
    Length(u64),

    /// The body continues until the end of the stream is signaled.
    UntilEof
}

/// Start line details required for resolution.
#[derive(Clone,Copy,Debug)]
pub struct Head<'a> {
    /// Message kind.
    pub kind: MessageKind,

    /// HTTP major version.
    pub http_major: u16,

    /// HTTP minor version.
    pub http_minor: u16,

    /// Request method. Empty for responses.
    pub method: &'a [u8],

    /// Response status code. Zero for requests.
    pub status_code: u16
}

/// Resolved message framing.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct Framing {
    /// Body strategy.
    pub body: BodyFraming,

    /// Declared body length.
    pub content_length: ContentLength,

    /// Indicates that `chunked` is the final transfer coding.
    pub chunked: bool,

    /// Indicates that the connection may be reused, based on version and `Connection`.
    pub keep_alive: bool,

    /// Indicates that the message requests a protocol upgrade.
    pub upgrade: bool
}

/// Iterate the comma separated elements of a header value, trimmed and without empty elements.
fn elements(value: &[u8]) -> impl Iterator<Item = &[u8]> {
    value.split(|byte| *byte == b',')
         .map(trim_space_tab)
         .filter(|element| !element.is_empty())
}

/// Parse a `Content-Length` value.
fn parse_content_length(value: &[u8]) -> Result<u64, ParserError> {
    let value = trim_space_tab(value);

    if value.is_empty() {
        return Err(ParserError::InvalidContentLength);
    }

    value.iter().try_fold(0u64, |length, byte| {
        if !is_digit!(*byte) {
            return Err(ParserError::InvalidContentLength);
        }

        length.checked_mul(10)
              .and_then(|length| length.checked_add((*byte - b'0') as u64))
              .ok_or(ParserError::InvalidContentLength)
    })
}

/// Indicates that a response with `status_code` never has a body.
fn is_bodiless_status(status_code: u16) -> bool {
    status_code / 100 == 1 || status_code == 204 || status_code == 304
}

/// Resolve message framing from `headers`, in arrival order.
pub fn resolve(head: &Head, headers: &[(FramingHeader, Vec<u8>)], conflict: FramingConflict)
-> Result<Framing, ParserError> {
    let mut close               = false;
    let mut connection_keep     = false;
    let mut connection_upgrade  = false;
    let mut content_length      = None;
    let mut final_coding        = None;
    let mut transfer_encoding   = false;
    let mut upgrade_header      = false;

    for &(header, ref value) in headers {
        match header {
            FramingHeader::Connection => {
                for token in elements(value) {
                    if token.eq_ignore_ascii_case(b"close") {
                        close = true;
                    } else if token.eq_ignore_ascii_case(b"keep-alive") {
                        connection_keep = true;
                    } else if token.eq_ignore_ascii_case(b"upgrade") {
                        connection_upgrade = true;
                    }
                }
            },
            FramingHeader::ContentLength => {
                let length = parse_content_length(value)?;

                if content_length.map_or(false, |previous| previous != length) {
                    return Err(ParserError::InvalidContentLength);
                }

                content_length = Some(length);
            },
            FramingHeader::TransferEncoding => {
                transfer_encoding = true;

                // parameters do not change the coding
                final_coding = elements(value).last().map(|coding| {
                    trim_space_tab(coding.split(|byte| *byte == b';').next().unwrap_or(coding))
                });
            },
            FramingHeader::Upgrade => {
                upgrade_header = true;
            }
        }
    }

    let chunked = final_coding.map_or(false, |coding| coding.eq_ignore_ascii_case(b"chunked"));

    if transfer_encoding && content_length.is_some() && conflict == FramingConflict::Reject {
        return Err(ParserError::AmbiguousFraming);
    }

    if transfer_encoding && !chunked && head.kind == MessageKind::Request {
        return Err(ParserError::InvalidTransferEncoding);
    }

    let body = if head.kind == MessageKind::Response && is_bodiless_status(head.status_code) {
        BodyFraming::None
    } else if chunked {
        BodyFraming::Chunked
    } else if transfer_encoding {
        BodyFraming::UntilEof
    } else if let Some(length) = content_length {
        BodyFraming::Length(length)
    } else if head.kind == MessageKind::Response {
        BodyFraming::UntilEof
    } else {
        BodyFraming::None
    };

    let content_length = match content_length {
        Some(length) if !transfer_encoding => ContentLength::Known(length),
        _                                  => ContentLength::Unbounded
    };

    let keep_alive = if head.http_major > 1 || (head.http_major == 1 && head.http_minor > 0) {
        !close
    } else {
        connection_keep && !close
    };

    let upgrade = (connection_upgrade && upgrade_header)
               || (head.kind == MessageKind::Request && head.method == b"CONNECT");

    Ok(Framing {
        body:           body,
        content_length: content_length,
        chunked:        chunked,
        keep_alive:     keep_alive,
        upgrade:        upgrade
    })
}
