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

//! Parser errors.

use crate::http1::{ Event, ParserState };

/// Parser error messages.
#[derive(Clone,Copy,Debug,PartialEq,Eq,thiserror::Error)]
pub enum ParserError {
    /// Both `Content-Length` and `Transfer-Encoding` are present, and the parser is configured to
    /// reject this.
    #[error("Ambiguous framing: Content-Length and Transfer-Encoding are both present")]
    AmbiguousFraming,

    /// A callback returned `Action::Abort` for `Event`.
    #[error("Callback aborted parsing on {0} event")]
    Callback(Event),

    /// Invalid chunk size on byte `u8`.
    #[error("Invalid chunk size on byte {0}")]
    ChunkSize(u8),

    /// Chunk size overflow.
    #[error("Chunk size overflow")]
    ChunkSizeOverflow,

    /// Invalid CRLF sequence on byte `u8`.
    #[error("Invalid CRLF sequence on byte {0}")]
    CrlfSequence(u8),

    /// Parsing has failed.
    #[error("Parser is dead")]
    Dead,

    /// A method, URL, status phrase, header field or header value exceeds the configured maximum
    /// length.
    #[error("Field exceeds the maximum length")]
    FieldOverflow,

    /// Invalid header field on byte `u8`.
    #[error("Invalid header field on byte {0}")]
    HeaderField(u8),

    /// The message head, or trailer block, exceeds the configured maximum length.
    #[error("Header exceeds the maximum length")]
    HeaderOverflow,

    /// Invalid header value on byte `u8`.
    #[error("Invalid header value on byte {0}")]
    HeaderValue(u8),

    /// Non-numeric, overflowing, or conflicting `Content-Length`.
    #[error("Invalid Content-Length")]
    InvalidContentLength,

    /// Request `Transfer-Encoding` that does not end with `chunked`.
    #[error("Invalid Transfer-Encoding")]
    InvalidTransferEncoding,

    /// Invalid request method on byte `u8`.
    #[error("Invalid method on byte {0}")]
    Method(u8),

    /// The parser is paused and must be resumed before more data is accepted.
    #[error("Parser is paused")]
    Paused,

    /// `Parser::execute()` was called from within a callback.
    #[error("Parser is already executing")]
    Reentrant,

    /// Invalid status on byte `u8`.
    #[error("Invalid status on byte {0}")]
    Status(u8),

    /// Invalid status code on byte `u8`.
    #[error("Invalid status code on byte {0}")]
    StatusCode(u8),

    /// End of stream was signaled in the middle of a message.
    #[error("Unexpected end of stream")]
    UnexpectedEof,

    /// Invalid URL on byte `u8`.
    #[error("Invalid URL on byte {0}")]
    Url(u8),

    /// Invalid HTTP version on byte `u8`.
    #[error("Invalid HTTP version on byte {0}")]
    Version(u8)
}

impl ParserError {
    /// Indicates that the error left the parser dead.
    ///
    /// `ParserError::Paused` and `ParserError::Reentrant` are usage errors that leave the parser
    /// untouched.
    pub fn is_fatal(&self) -> bool {
        !matches!(*self, ParserError::Paused | ParserError::Reentrant)
    }
}

/// Error returned from `Parser::execute()`.
#[derive(Clone,Copy,Debug,PartialEq,Eq,thiserror::Error)]
#[error("{error} in state {state:?} after {consumed} bytes")]
pub struct ExecuteError {
    /// The error.
    pub error: ParserError,

    /// The state the error occurred in.
    pub state: ParserState,

    /// The amount of `stream` bytes processed before the error.
    pub consumed: usize
}
