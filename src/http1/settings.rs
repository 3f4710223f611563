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

//! Callback settings and the events they are executed for.

use crate::http1::Parser;

use std::fmt;

/// Notification callback.
///
/// Executed for `Event::MessageBegin`, `Event::HeadersComplete` and `Event::MessageComplete`.
pub type NotifyCallback<C> = fn(&mut Parser<C>) -> Action;

/// Data callback.
///
/// Executed for `Event::Url`, `Event::Status`, `Event::HeaderField`, `Event::HeaderValue` and
/// `Event::Body`. The slice is only valid for the duration of the call.
pub type DataCallback<C> = fn(&mut Parser<C>, &[u8]) -> Action;

/// Value returned from each callback, instructing the parser how to proceed.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Action {
    /// Continue parsing.
    Continue,

    /// Suspend parsing. `Parser::execute()` returns `Success::Paused` with the amount of bytes
    /// processed, and `Parser::resume()` must be called before more data is accepted.
    Pause,

    /// Do not expect a body for the current message. Only honored when returned from the
    /// headers complete callback, such as for a response to a `HEAD` request. Elsewhere it is
    /// treated as `Action::Continue`.
    SkipBody,

    /// Abort parsing. `Parser::execute()` returns `ParserError::Callback`, and the parser is dead.
    Abort
}

/// Parsing events.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Event {
    /// The first byte of a request line or status line has been found.
    MessageBegin,

    /// Request URL.
    Url,

    /// Response status phrase.
    Status,

    /// Header field.
    HeaderField,

    /// Header value.
    HeaderValue,

    /// All headers have been parsed and the message framing is known.
    HeadersComplete,

    /// Body data.
    Body,

    /// The entire message has been parsed.
    MessageComplete
}

impl fmt::Display for Event {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Event::MessageBegin    => "message begin",
            Event::Url             => "url",
            Event::Status          => "status",
            Event::HeaderField     => "header field",
            Event::HeaderValue     => "header value",
            Event::HeadersComplete => "headers complete",
            Event::Body            => "body",
            Event::MessageComplete => "message complete"
        };

        formatter.write_str(name)
    }
}

/// Callbacks executed by the parser. Absent callbacks are skipped.
///
/// `Settings` carries no state of its own. It can be shared by any amount of parsers, and the
/// per-connection state belongs in the parser context.
pub struct Settings<C> {
    /// Executed when the first byte of a message has been found.
    pub on_message_begin: Option<NotifyCallback<C>>,

    /// Executed with the request URL.
    pub on_url: Option<DataCallback<C>>,

    /// Executed with the response status phrase, when it is not empty.
    pub on_status: Option<DataCallback<C>>,

    /// Executed with each header field, including trailer fields.
    pub on_header_field: Option<DataCallback<C>>,

    /// Executed with each header value, including trailer values.
    pub on_header_value: Option<DataCallback<C>>,

    /// Executed once the headers have been parsed and the message flags are available.
    pub on_headers_complete: Option<NotifyCallback<C>>,

    /// Executed with each span of decoded body data.
    pub on_body: Option<DataCallback<C>>,

    /// Executed once the entire message has been parsed.
    pub on_message_complete: Option<NotifyCallback<C>>
}

impl<C> Settings<C> {
    /// Create a new `Settings` without callbacks.
    pub fn new() -> Settings<C> {
        Settings {
            on_message_begin:    None,
            on_url:              None,
            on_status:           None,
            on_header_field:     None,
            on_header_value:     None,
            on_headers_complete: None,
            on_body:             None,
            on_message_complete: None
        }
    }

    /// Retrieve the notification callback for `event`.
    pub fn notify_callback(&self, event: Event) -> Option<NotifyCallback<C>> {
        match event {
            Event::MessageBegin    => self.on_message_begin,
            Event::HeadersComplete => self.on_headers_complete,
            Event::MessageComplete => self.on_message_complete,
            _                      => None
        }
    }

    /// Retrieve the data callback for `event`.
    pub fn data_callback(&self, event: Event) -> Option<DataCallback<C>> {
        match event {
            Event::Url         => self.on_url,
            Event::Status      => self.on_status,
            Event::HeaderField => self.on_header_field,
            Event::HeaderValue => self.on_header_value,
            Event::Body        => self.on_body,
            _                  => None
        }
    }
}

impl<C> Default for Settings<C> {
    fn default() -> Settings<C> {
        Settings::new()
    }
}

impl<C> Clone for Settings<C> {
    fn clone(&self) -> Settings<C> {
        *self
    }
}

impl<C> Copy for Settings<C> {}

impl<C> fmt::Debug for Settings<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("Settings")
                 .field("on_message_begin", &self.on_message_begin.is_some())
                 .field("on_url", &self.on_url.is_some())
                 .field("on_status", &self.on_status.is_some())
                 .field("on_header_field", &self.on_header_field.is_some())
                 .field("on_header_value", &self.on_header_value.is_some())
                 .field("on_headers_complete", &self.on_headers_complete.is_some())
                 .field("on_body", &self.on_body.is_some())
                 .field("on_message_complete", &self.on_message_complete.is_some())
                 .finish()
    }
}
