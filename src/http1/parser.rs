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

//! HTTP/1.x parser.

use byte_slice::ByteStream;

use crate::byte::{ is_header_value, is_status, is_token, is_url, trim_end_space_tab };
use crate::fsm::{ ParserValue, Success };
use crate::http1::framing::{ self, BodyFraming, ContentLength, FramingHeader, Head };
use crate::http1::parser_state::dispatch;
use crate::http1::{ Action,
                    Event,
                    ExecuteError,
                    ParserConfig,
                    ParserError,
                    ParserState,
                    Settings };

use log::{ debug, trace };
use std::{ cmp, fmt, mem };

// -------------------------------------------------------------------------------------------------
// FLAGS
// -------------------------------------------------------------------------------------------------

/// `chunked` is the final transfer coding.
const F_CHUNKED: u8 = 1;

/// The body is delimited by the end of the stream.
const F_EOF_BODY: u8 = 1 << 1;

/// Keep-alive was requested.
const F_KEEP_ALIVE: u8 = 1 << 2;

/// The body is skipped.
const F_SKIP_BODY: u8 = 1 << 3;

/// Trailer headers are being parsed.
const F_TRAILING: u8 = 1 << 4;

/// Protocol upgrade was requested.
const F_UPGRADE: u8 = 1 << 5;

/// Indicates that `$flag` is set.
macro_rules! has_flag {
    ($parser:expr, $flag:expr) => ({
        $parser.flags & $flag == $flag
    });
}

/// Set `$flag`.
macro_rules! set_flag {
    ($parser:expr, $flag:expr) => ({
        $parser.flags |= $flag;
    });
}

/// Unset `$flag`.
macro_rules! unset_flag {
    ($parser:expr, $flag:expr) => ({
        $parser.flags &= !$flag;
    });
}

/// `HTTP/` literal preceding the version.
const HTTP: &[u8] = b"HTTP/";

/// Maximum amount of digits in each HTTP version number.
const MAX_VERSION_DIGITS: usize = 3;

// -------------------------------------------------------------------------------------------------

/// Message kind.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum MessageKind {
    /// Request messages.
    Request,

    /// Response messages.
    Response
}

// -------------------------------------------------------------------------------------------------

/// HTTP/1.x parser.
///
/// A `Parser` handles one direction of one connection. Data is fed with
/// [`execute()`](#method.execute) as it arrives, split at any location, and each message on the
/// connection is parsed in turn. Per-connection state for callbacks is stored in the parser
/// context.
pub struct Parser<C = ()> {
    /// Body bytes left in the current identity body.
    body_remaining: u64,

    /// Chunk size being parsed, and afterwards the chunk bytes left.
    chunk_length: u64,

    /// Limits and policies.
    config: ParserConfig,

    /// Resolved content length.
    content_length: ContentLength,

    /// Caller owned context.
    context: Option<C>,

    /// Indicates that `execute()` is running.
    executing: bool,

    /// Framing header of the most recent header field.
    field: Option<FramingHeader>,

    /// Message flags.
    flags: u8,

    /// Framing headers of the current message, in arrival order.
    framing_headers: Vec<(FramingHeader, Vec<u8>)>,

    /// Bytes processed in the current head, or trailer block.
    head_length: usize,

    /// HTTP major version.
    http_major: u16,

    /// HTTP minor version.
    http_minor: u16,

    /// Message kind.
    kind: MessageKind,

    /// Progress within literals and digit runs that may be split between calls.
    match_index: usize,

    /// Request method.
    method: Vec<u8>,

    /// Indicates that a callback paused the parser.
    paused: bool,

    /// Token bytes collected during previous calls.
    scratch: Vec<u8>,

    /// Current state.
    pub(crate) state: ParserState,

    /// Response status code.
    status_code: u16
}

impl<C> Parser<C> {
    /// Create a new `Parser` with the default configuration.
    pub fn new(kind: MessageKind) -> Parser<C> {
        Parser::with_config(kind, ParserConfig::default())
    }

    /// Create a new `Parser` with `config`.
    pub fn with_config(kind: MessageKind, config: ParserConfig) -> Parser<C> {
        Parser {
            body_remaining:  0,
            chunk_length:    0,
            config:          config,
            content_length:  ContentLength::Unbounded,
            context:         None,
            executing:       false,
            field:           None,
            flags:           0,
            framing_headers: Vec::new(),
            head_length:     0,
            http_major:      0,
            http_minor:      0,
            kind:            kind,
            match_index:     0,
            method:          Vec::new(),
            paused:          false,
            scratch:         Vec::new(),
            state:           ParserState::MessageStart,
            status_code:     0
        }
    }

    /// Retrieve the configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Retrieve the resolved content length.
    ///
    /// This is valid from the headers complete callback until the next message begins.
    pub fn content_length(&self) -> ContentLength {
        self.content_length
    }

    /// Retrieve the context.
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Retrieve the context mutably.
    pub fn context_mut(&mut self) -> Option<&mut C> {
        self.context.as_mut()
    }

    /// Retrieve the HTTP major version.
    pub fn http_major(&self) -> u16 {
        self.http_major
    }

    /// Retrieve the HTTP minor version.
    pub fn http_minor(&self) -> u16 {
        self.http_minor
    }

    /// Indicates that `chunked` is the final transfer coding of the current message.
    pub fn is_chunked(&self) -> bool {
        has_flag!(self, F_CHUNKED)
    }

    /// Indicates that the parser is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Indicates that the current message requested a protocol upgrade.
    pub fn is_upgrade(&self) -> bool {
        has_flag!(self, F_UPGRADE)
    }

    /// Indicates that the message version and `Connection` header request keep-alive.
    pub fn keep_alive_requested(&self) -> bool {
        has_flag!(self, F_KEEP_ALIVE)
    }

    /// Retrieve the message kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Retrieve the request method.
    pub fn method(&self) -> &[u8] {
        &self.method
    }

    /// Pause the parser.
    ///
    /// This is intended for use outside of callbacks. From within a callback return
    /// `Action::Pause` instead.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Reset the parser to expect a new message, reviving it when it is dead.
    ///
    /// The context is kept.
    pub fn reset(&mut self) {
        self.reset_message();

        self.paused = false;
        self.state  = ParserState::MessageStart;
    }

    /// Resume a paused parser.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the context.
    pub fn set_context(&mut self, context: C) {
        self.context = Some(context);
    }

    /// Indicates that the connection may be reused after the current message.
    ///
    /// This is false when keep-alive was not requested, or when the end of the message is only
    /// known by the end of the stream.
    pub fn should_keep_alive(&self) -> bool {
        has_flag!(self, F_KEEP_ALIVE) && !has_flag!(self, F_EOF_BODY)
    }

    /// Retrieve the current state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Retrieve the response status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Remove and return the context.
    pub fn take_context(&mut self) -> Option<C> {
        self.context.take()
    }

    /// Parse `stream`.
    ///
    /// An empty `stream` signals the end of the stream. This completes a message whose body is
    /// delimited by the end of the stream, is ignored between messages, and is an error anywhere
    /// else.
    ///
    /// # Returns
    ///
    /// **`Success::Eos`**: All of `stream` was processed and more data is expected.
    ///
    /// **`Success::Paused`**: A callback paused the parser. The bytes after the returned length
    /// have not been processed.
    ///
    /// **`Success::Upgrade`**: The message requested a protocol upgrade. The bytes after the
    /// returned length belong to the upgraded protocol.
    ///
    /// # Errors
    ///
    /// Errors other than `ParserError::Paused` and `ParserError::Reentrant` leave the parser
    /// dead.
    pub fn execute(&mut self, settings: &Settings<C>, stream: &[u8])
    -> Result<Success, ExecuteError> {
        if self.executing {
            return Err(self.usage_error(ParserError::Reentrant));
        } else if self.paused {
            return Err(self.usage_error(ParserError::Paused));
        } else if self.state == ParserState::Dead {
            return Err(self.usage_error(ParserError::Dead));
        }

        if stream.is_empty() {
            match self.state {
                ParserState::MessageStart => {
                    return Ok(Success::Eos(0));
                },
                ParserState::Upgraded => {
                    return Ok(Success::Upgrade(0));
                },
                ParserState::BodyUntilEof => {
                    self.state = ParserState::MessageComplete;
                },
                ParserState::MessageComplete => {
                },
                state => {
                    return Err(self.fail(ParserError::UnexpectedEof, state, 0));
                }
            }
        }

        self.executing = true;

        let result = self.parse(settings, &mut ByteStream::new(stream));

        self.executing = false;

        result
    }

    /// Main parser loop.
    fn parse(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<Success, ExecuteError> {
        loop {
            let state = self.state;
            let index = context.stream_index;
            let value = dispatch(self, settings, context);

            if state.is_head() {
                self.head_length += context.stream_index - index;

                if self.head_length > self.config.max_header_size {
                    return Err(self.fail(ParserError::HeaderOverflow, state, context.stream_index));
                }
            }

            match value {
                Ok(ParserValue::Continue) => {
                },
                Ok(ParserValue::Exit(success)) => {
                    return Ok(success);
                },
                Err(error) => {
                    return Err(self.fail(error, state, context.stream_index));
                }
            }
        }
    }

    /// Kill the parser with `error`.
    fn fail(&mut self, error: ParserError, state: ParserState, consumed: usize) -> ExecuteError {
        debug!("http1 parser failed in state {:?} after {} bytes: {}", state, consumed, error);

        self.state = ParserState::Dead;

        ExecuteError {
            error:    error,
            state:    state,
            consumed: consumed
        }
    }

    /// Create an error that leaves the parser untouched.
    fn usage_error(&self, error: ParserError) -> ExecuteError {
        ExecuteError {
            error:    error,
            state:    self.state,
            consumed: 0
        }
    }

    /// Reset all message state.
    fn reset_message(&mut self) {
        self.body_remaining = 0;
        self.chunk_length   = 0;
        self.content_length = ContentLength::Unbounded;
        self.field          = None;
        self.flags          = 0;
        self.head_length    = 0;
        self.http_major     = 0;
        self.http_minor     = 0;
        self.match_index    = 0;
        self.status_code    = 0;

        self.framing_headers.clear();
        self.method.clear();
        self.scratch.clear();
    }

    // ---------------------------------------------------------------------------------------------
    // CALLBACKS
    // ---------------------------------------------------------------------------------------------

    /// Handle the `Action` returned from the callback for `event`.
    pub(crate) fn after_callback(&mut self, action: Action, event: Event, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        bs_mark!(context);

        match action {
            Action::Continue | Action::SkipBody => {
                Ok(ParserValue::Continue)
            },
            Action::Pause => {
                debug!("http1 parser paused on {} event", event);

                self.paused = true;

                Ok(ParserValue::Exit(Success::Paused(context.stream_index)))
            },
            Action::Abort => {
                Err(ParserError::Callback(event))
            }
        }
    }

    /// Collect bytes of a token that continues in the next call.
    fn collect_token(&mut self, data: &[u8]) -> Result<(), ParserError> {
        if self.scratch.len() + data.len() > self.config.max_field_size {
            exit_error!(FieldOverflow);
        }

        self.scratch.extend_from_slice(data);

        Ok(())
    }

    /// Execute the data callback for `event` with the completed token.
    pub(crate) fn emit_token(&mut self, settings: &Settings<C>, event: Event, data: &[u8])
    -> Result<Action, ParserError> {
        if self.scratch.is_empty() {
            if data.len() > self.config.max_field_size {
                exit_error!(FieldOverflow);
            }

            return Ok(self.token(settings, event, data));
        }

        self.collect_token(data)?;

        let mut token = mem::take(&mut self.scratch);
        let action    = self.token(settings, event, &token);

        token.clear();

        self.scratch = token;

        Ok(action)
    }

    /// Execute the notification callback for `event`.
    pub(crate) fn notify(&mut self, settings: &Settings<C>, event: Event) -> Action {
        match settings.notify_callback(event) {
            Some(callback) => callback(self),
            None           => Action::Continue
        }
    }

    /// Execute the data callback for `event`.
    pub(crate) fn notify_data(&mut self, settings: &Settings<C>, event: Event, data: &[u8])
    -> Action {
        match settings.data_callback(event) {
            Some(callback) => callback(self, data),
            None           => Action::Continue
        }
    }

    /// Record framing headers and execute the data callback for a completed token.
    fn token(&mut self, settings: &Settings<C>, event: Event, data: &[u8]) -> Action {
        let data = if event == Event::HeaderValue {
            trim_end_space_tab(data)
        } else {
            data
        };

        if !has_flag!(self, F_TRAILING) {
            if event == Event::HeaderField {
                self.field = FramingHeader::from_field(data);
            } else if event == Event::HeaderValue {
                if let Some(header) = self.field.take() {
                    self.framing_headers.push((header, data.to_vec()));
                }
            }
        }

        if event == Event::Status && data.is_empty() {
            return Action::Continue;
        }

        self.notify_data(settings, event, data)
    }

    // ---------------------------------------------------------------------------------------------
    // MESSAGE START
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn message_start(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if context.byte != b'\r' && context.byte != b'\n' {
                break;
            }
        }

        bs_replay!(context);

        self.reset_message();

        trace!("http1 message begin");

        match self.kind {
            MessageKind::Request => {
                callback_transition!(self, settings, context, MessageBegin, RequestMethod);
            },
            MessageKind::Response => {
                callback_transition!(self, settings, context, MessageBegin, HttpLiteral);
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn request_method(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        bs_collect!(
            context,

            if is_token(context.byte) {
                continue;
            } else if context.byte == b' '
                   && (bs_slice_length!(context) > 1 || !self.method.is_empty()) {
                if self.method.len() + bs_slice_length!(context) - 1 > self.config.max_field_size {
                    exit_error!(FieldOverflow);
                }

                self.method.extend_from_slice(bs_slice_ignore!(context));

                transition!(self, context, RequestUrl);
            } else {
                exit_error!(context, Method);
            },

            {
                if self.method.len() + bs_slice_length!(context) > self.config.max_field_size {
                    exit_error!(FieldOverflow);
                }

                self.method.extend_from_slice(bs_slice!(context));

                exit_eos!(context);
            }
        );
    }

    pub(crate) fn request_url(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        bs_collect!(
            context,

            if is_url(context.byte) {
                continue;
            } else if context.byte == b' '
                   && (bs_slice_length!(context) > 1 || !self.scratch.is_empty()) {
                self.match_index = 0;

                callback_token_transition!(
                    self,
                    settings,
                    context,
                    Url,
                    bs_slice_ignore!(context),
                    HttpLiteral
                );
            } else {
                exit_error!(context, Url);
            },

            {
                self.collect_token(bs_slice!(context))?;

                exit_eos!(context);
            }
        );
    }

    // ---------------------------------------------------------------------------------------------
    // VERSION
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn http_literal(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if context.byte != HTTP[self.match_index] {
                exit_error!(context, Version);
            }

            self.match_index += 1;

            if self.match_index == HTTP.len() {
                self.match_index = 0;

                transition!(self, context, VersionMajor);
            }
        }
    }

    pub(crate) fn version_major(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if is_digit!(context.byte) && self.match_index < MAX_VERSION_DIGITS {
                self.http_major  = self.http_major * 10 + (context.byte - b'0') as u16;
                self.match_index += 1;
            } else if context.byte == b'.' && self.match_index > 0 {
                self.match_index = 0;

                transition!(self, context, VersionMinor);
            } else {
                exit_error!(context, Version);
            }
        }
    }

    pub(crate) fn version_minor(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if is_digit!(context.byte) && self.match_index < MAX_VERSION_DIGITS {
                self.http_minor  = self.http_minor * 10 + (context.byte - b'0') as u16;
                self.match_index += 1;

                continue;
            } else if self.match_index == 0 {
                exit_error!(context, Version);
            }

            self.match_index = 0;

            match (self.kind, context.byte) {
                (MessageKind::Request, b'\r') => {
                    transition!(self, context, StartLineLf);
                },
                (MessageKind::Request, b'\n') => {
                    transition!(self, context, HeaderFieldStart);
                },
                (MessageKind::Response, b' ') => {
                    transition!(self, context, ResponseStatusCode);
                },
                _ => {
                    exit_error!(context, Version);
                }
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // STATUS LINE
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn response_status_code(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if !is_digit!(context.byte) {
                exit_error!(context, StatusCode);
            }

            self.status_code  = self.status_code * 10 + (context.byte - b'0') as u16;
            self.match_index += 1;

            if self.match_index == 3 {
                self.match_index = 0;

                transition!(self, context, ResponseStatusCodeEnd);
            }
        }
    }

    pub(crate) fn response_status_code_end(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        match context.byte {
            b' ' => {
                transition!(self, context, ResponseStatus);
            },
            b'\r' => {
                transition!(self, context, StartLineLf);
            },
            b'\n' => {
                transition!(self, context, HeaderFieldStart);
            },
            _ => {
                exit_error!(context, StatusCode);
            }
        }
    }

    pub(crate) fn response_status(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        bs_collect!(
            context,

            if is_status(context.byte) {
                continue;
            } else if context.byte == b'\r' {
                callback_token_transition!(
                    self,
                    settings,
                    context,
                    Status,
                    bs_slice_ignore!(context),
                    StartLineLf
                );
            } else if context.byte == b'\n' {
                callback_token_transition!(
                    self,
                    settings,
                    context,
                    Status,
                    bs_slice_ignore!(context),
                    HeaderFieldStart
                );
            } else {
                exit_error!(context, Status);
            },

            {
                self.collect_token(bs_slice!(context))?;

                exit_eos!(context);
            }
        );
    }

    pub(crate) fn start_line_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(self, context, HeaderFieldStart);
        }

        exit_error!(context, CrlfSequence);
    }

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn header_field_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\r' {
            transition!(self, context, HeadersLf);
        } else if context.byte == b'\n' {
            return self.headers_end(context);
        } else if is_token(context.byte) {
            bs_replay!(context);

            transition!(self, context, HeaderField);
        }

        exit_error!(context, HeaderField);
    }

    pub(crate) fn header_field(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        bs_collect!(
            context,

            if is_token(context.byte) {
                continue;
            } else if context.byte == b':' {
                callback_token_transition!(
                    self,
                    settings,
                    context,
                    HeaderField,
                    bs_slice_ignore!(context),
                    HeaderValueStart
                );
            } else {
                exit_error!(context, HeaderField);
            },

            {
                self.collect_token(bs_slice!(context))?;

                exit_eos!(context);
            }
        );
    }

    pub(crate) fn header_value_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if !is_space_tab!(context.byte) {
                bs_replay!(context);

                transition!(self, context, HeaderValue);
            }
        }
    }

    pub(crate) fn header_value(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        bs_collect!(
            context,

            if is_header_value(context.byte) {
                continue;
            } else if context.byte == b'\r' {
                callback_token_transition!(
                    self,
                    settings,
                    context,
                    HeaderValue,
                    bs_slice_ignore!(context),
                    HeaderValueLf
                );
            } else if context.byte == b'\n' {
                callback_token_transition!(
                    self,
                    settings,
                    context,
                    HeaderValue,
                    bs_slice_ignore!(context),
                    HeaderFieldStart
                );
            } else {
                exit_error!(context, HeaderValue);
            },

            {
                self.collect_token(bs_slice!(context))?;

                exit_eos!(context);
            }
        );
    }

    pub(crate) fn header_value_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(self, context, HeaderFieldStart);
        }

        exit_error!(context, CrlfSequence);
    }

    pub(crate) fn headers_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            return self.headers_end(context);
        }

        exit_error!(context, CrlfSequence);
    }

    /// Transition after the blank line ending a head or trailer block.
    fn headers_end(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        if has_flag!(self, F_TRAILING) {
            transition!(self, context, MessageComplete);
        }

        transition!(self, context, HeadersComplete);
    }

    pub(crate) fn headers_complete(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let framing = framing::resolve(
            &Head {
                kind:        self.kind,
                http_major:  self.http_major,
                http_minor:  self.http_minor,
                method:      &self.method,
                status_code: self.status_code
            },
            &self.framing_headers,
            self.config.framing_conflict
        )?;

        self.content_length = framing.content_length;

        if framing.chunked {
            set_flag!(self, F_CHUNKED);
        }

        if framing.keep_alive {
            set_flag!(self, F_KEEP_ALIVE);
        }

        if framing.upgrade {
            set_flag!(self, F_UPGRADE);
            set_state!(self, MessageComplete);
        } else {
            match framing.body {
                BodyFraming::None | BodyFraming::Length(0) => {
                    set_state!(self, MessageComplete);
                },
                BodyFraming::Chunked => {
                    set_state!(self, ChunkSize);
                },
                BodyFraming::Length(length) => {
                    self.body_remaining = length;

                    set_state!(self, BodyIdentity);
                },
                BodyFraming::UntilEof => {
                    set_flag!(self, F_EOF_BODY);
                    set_state!(self, BodyUntilEof);
                }
            }
        }

        trace!(
            "http1 headers complete: {:?}, keep-alive {}, upgrade {}",
            framing.body,
            framing.keep_alive,
            framing.upgrade
        );

        let action = self.notify(settings, Event::HeadersComplete);

        if action == Action::SkipBody && !framing.upgrade {
            set_flag!(self, F_SKIP_BODY);
            unset_flag!(self, F_EOF_BODY);
            set_state!(self, MessageComplete);
        }

        self.after_callback(action, Event::HeadersComplete, context)
    }

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn body_identity(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);

        let length = cmp::min(bs_available!(context) as u64, self.body_remaining) as usize;

        bs_jump!(context, length);

        self.body_remaining -= length as u64;

        if self.body_remaining == 0 {
            callback_body_transition!(self, settings, context, bs_slice!(context), MessageComplete);
        }

        callback_body_transition!(self, settings, context, bs_slice!(context), BodyIdentity);
    }

    pub(crate) fn body_until_eof(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);

        bs_jump!(context, bs_available!(context));

        callback_body_transition!(self, settings, context, bs_slice!(context), BodyUntilEof);
    }

    // ---------------------------------------------------------------------------------------------
    // FINISHED
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn message_complete(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        trace!("http1 message complete");

        if has_flag!(self, F_UPGRADE) {
            callback_transition!(self, settings, context, MessageComplete, Upgraded);
        }

        callback_transition!(self, settings, context, MessageComplete, MessageStart);
    }

    pub(crate) fn upgraded(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        debug!("http1 upgrade after {} bytes", context.stream_index);

        Ok(ParserValue::Exit(Success::Upgrade(context.stream_index)))
    }
}

impl<C> fmt::Debug for Parser<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("Parser")
                 .field("kind", &self.kind)
                 .field("state", &self.state)
                 .field("http_major", &self.http_major)
                 .field("http_minor", &self.http_minor)
                 .field("status_code", &self.status_code)
                 .field("content_length", &self.content_length)
                 .field("flags", &self.flags)
                 .field("paused", &self.paused)
                 .finish()
    }
}

mod chunked;
