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

//! Parser configuration.

/// Default maximum length of a message head, or trailer block, in bytes.
pub const DEFAULT_MAX_HEADER_SIZE: usize = 80 * 1024;

/// Default maximum length of a single method, URL, status phrase, header field or header value.
pub const DEFAULT_MAX_FIELD_SIZE: usize = 16 * 1024;

/// Handling of messages carrying both `Content-Length` and `Transfer-Encoding`.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum FramingConflict {
    /// `Transfer-Encoding` wins, and `Content-Length` is ignored.
    PreferChunked,

    /// The message is rejected with `ParserError::AmbiguousFraming`.
    Reject
}

impl Default for FramingConflict {
    fn default() -> FramingConflict {
        FramingConflict::PreferChunked
    }
}

/// Parser limits and policies. These are fixed for the lifetime of a parser.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct ParserConfig {
    /// Handling of conflicting message framing headers.
    pub framing_conflict: FramingConflict,

    /// Maximum length of a single method, URL, status phrase, header field or header value.
    pub max_field_size: usize,

    /// Maximum length of a message head, from the first byte of the start line to the end of the
    /// blank line. The same limit applies to a trailer block.
    pub max_header_size: usize
}

impl ParserConfig {
    /// Create a new `ParserConfig` with default limits.
    pub fn new() -> ParserConfig {
        ParserConfig {
            framing_conflict: FramingConflict::PreferChunked,
            max_field_size:   DEFAULT_MAX_FIELD_SIZE,
            max_header_size:  DEFAULT_MAX_HEADER_SIZE
        }
    }

    /// Create a new `ParserConfig` with default limits that rejects ambiguous framing.
    pub fn strict() -> ParserConfig {
        ParserConfig::new().with_framing_conflict(FramingConflict::Reject)
    }

    /// Set the framing conflict policy.
    pub fn with_framing_conflict(mut self, framing_conflict: FramingConflict) -> ParserConfig {
        self.framing_conflict = framing_conflict;
        self
    }

    /// Set the maximum field length.
    pub fn with_max_field_size(mut self, max_field_size: usize) -> ParserConfig {
        self.max_field_size = max_field_size;
        self
    }

    /// Set the maximum head length.
    pub fn with_max_header_size(mut self, max_header_size: usize) -> ParserConfig {
        self.max_header_size = max_header_size;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig::new()
    }
}
