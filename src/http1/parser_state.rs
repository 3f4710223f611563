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

//! Parser states and state dispatching.

use byte_slice::ByteStream;

use crate::fsm::ParserValue;
use crate::http1::{ Parser, ParserError, Settings };

/// Parser states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
#[repr(u8)]
pub enum ParserState {
    /// An error was returned from a call to `Parser::execute()`.
    Dead,

    /// Stripping CR and LF bytes before the start of a message.
    MessageStart,

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE
    // ---------------------------------------------------------------------------------------------

    /// Parsing request method.
    RequestMethod,

    /// Parsing request URL.
    RequestUrl,

    // ---------------------------------------------------------------------------------------------
    // VERSION
    // ---------------------------------------------------------------------------------------------

    /// Parsing the `HTTP/` literal.
    HttpLiteral,

    /// Parsing HTTP major version.
    VersionMajor,

    /// Parsing HTTP minor version.
    VersionMinor,

    // ---------------------------------------------------------------------------------------------
    // STATUS LINE
    // ---------------------------------------------------------------------------------------------

    /// Parsing response status code.
    ResponseStatusCode,

    /// Parsing the byte after the response status code.
    ResponseStatusCodeEnd,

    /// Parsing response status phrase.
    ResponseStatus,

    /// Parsing line feed after the request line or status line.
    StartLineLf,

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Parsing the first byte of a header line, or the blank line.
    HeaderFieldStart,

    /// Parsing header field.
    HeaderField,

    /// Stripping space and horizontal tab before a header value.
    HeaderValueStart,

    /// Parsing header value.
    HeaderValue,

    /// Parsing line feed after a header value.
    HeaderValueLf,

    /// Parsing line feed of the blank line.
    HeadersLf,

    /// Resolving message framing and executing the headers complete callback.
    HeadersComplete,

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    /// Parsing body with a known length.
    BodyIdentity,

    /// Parsing body until the end of the stream is signaled.
    BodyUntilEof,

    // ---------------------------------------------------------------------------------------------
    // CHUNKED TRANSFER ENCODING
    // ---------------------------------------------------------------------------------------------

    /// Parsing the first byte of a chunk size.
    ChunkSize,

    /// Parsing chunk size byte 2+.
    ChunkSizeMore,

    /// Skipping chunk extensions.
    ChunkExtension,

    /// Parsing line feed after a chunk size.
    ChunkSizeLf,

    /// Parsing chunk data.
    ChunkData,

    /// Parsing carriage return after chunk data.
    ChunkDataCr,

    /// Parsing line feed after chunk data.
    ChunkDataLf,

    // ---------------------------------------------------------------------------------------------
    // FINISHED
    // ---------------------------------------------------------------------------------------------

    /// Executing the message complete callback.
    MessageComplete,

    /// The message requested a protocol upgrade. No further bytes are processed.
    Upgraded
}

impl ParserState {
    /// Indicates that bytes processed in this state count toward the head length.
    ///
    /// Empty lines skipped before a message do not belong to any head.
    pub fn is_head(&self) -> bool {
        matches!(
            *self,
            ParserState::RequestMethod
          | ParserState::RequestUrl
          | ParserState::HttpLiteral
          | ParserState::VersionMajor
          | ParserState::VersionMinor
          | ParserState::ResponseStatusCode
          | ParserState::ResponseStatusCodeEnd
          | ParserState::ResponseStatus
          | ParserState::StartLineLf
          | ParserState::HeaderFieldStart
          | ParserState::HeaderField
          | ParserState::HeaderValueStart
          | ParserState::HeaderValue
          | ParserState::HeaderValueLf
          | ParserState::HeadersLf
        )
    }
}

/// Execute the state function for the current parser state.
#[inline]
pub fn dispatch<C>(parser: &mut Parser<C>, settings: &Settings<C>, context: &mut ByteStream)
-> Result<ParserValue, ParserError> {
    match parser.state {
        ParserState::Dead                  => Err(ParserError::Dead),
        ParserState::MessageStart          => parser.message_start(settings, context),
        ParserState::RequestMethod         => parser.request_method(context),
        ParserState::RequestUrl            => parser.request_url(settings, context),
        ParserState::HttpLiteral           => parser.http_literal(context),
        ParserState::VersionMajor          => parser.version_major(context),
        ParserState::VersionMinor          => parser.version_minor(context),
        ParserState::ResponseStatusCode    => parser.response_status_code(context),
        ParserState::ResponseStatusCodeEnd => parser.response_status_code_end(context),
        ParserState::ResponseStatus        => parser.response_status(settings, context),
        ParserState::StartLineLf           => parser.start_line_lf(context),
        ParserState::HeaderFieldStart      => parser.header_field_start(context),
        ParserState::HeaderField           => parser.header_field(settings, context),
        ParserState::HeaderValueStart      => parser.header_value_start(context),
        ParserState::HeaderValue           => parser.header_value(settings, context),
        ParserState::HeaderValueLf         => parser.header_value_lf(context),
        ParserState::HeadersLf             => parser.headers_lf(context),
        ParserState::HeadersComplete       => parser.headers_complete(settings, context),
        ParserState::BodyIdentity          => parser.body_identity(settings, context),
        ParserState::BodyUntilEof          => parser.body_until_eof(settings, context),
        ParserState::ChunkSize             => parser.chunk_size(context),
        ParserState::ChunkSizeMore         => parser.chunk_size_more(context),
        ParserState::ChunkExtension        => parser.chunk_extension(context),
        ParserState::ChunkSizeLf           => parser.chunk_size_lf(context),
        ParserState::ChunkData             => parser.chunk_data(settings, context),
        ParserState::ChunkDataCr           => parser.chunk_data_cr(context),
        ParserState::ChunkDataLf           => parser.chunk_data_lf(context),
        ParserState::MessageComplete       => parser.message_complete(settings, context),
        ParserState::Upgraded              => parser.upgraded(context)
    }
}
