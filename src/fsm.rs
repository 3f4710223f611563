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

//! Finite state machine macros and enums.

use std::fmt;

/// Execute the notification callback for `$event`, set `$state`, and transition or exit based on
/// the returned `Action`.
///
/// The next state is stored before the callback runs, and a paused parser resumes there.
macro_rules! callback_transition {
    ($parser:expr, $settings:expr, $context:expr, $event:ident, $state:ident) => ({
        set_state!($parser, $state);

        let action = $parser.notify($settings, $crate::http1::Event::$event);

        return $parser.after_callback(action, $crate::http1::Event::$event, $context);
    });
}

/// Execute the data callback for `$event` with a completed token, set `$state`, and transition or
/// exit based on the returned `Action`.
///
/// The token is joined with any bytes collected during previous calls before the callback is
/// executed.
macro_rules! callback_token_transition {
    ($parser:expr, $settings:expr, $context:expr, $event:ident, $data:expr, $state:ident) => ({
        set_state!($parser, $state);

        let action = $parser.emit_token($settings, $crate::http1::Event::$event, $data)?;

        return $parser.after_callback(action, $crate::http1::Event::$event, $context);
    });
}

/// Execute the body callback with `$data`, set `$state`, and transition or exit based on the
/// returned `Action`.
macro_rules! callback_body_transition {
    ($parser:expr, $settings:expr, $context:expr, $data:expr, $state:ident) => ({
        set_state!($parser, $state);

        let action = $parser.notify_data($settings, $crate::http1::Event::Body, $data);

        return $parser.after_callback(action, $crate::http1::Event::Body, $context);
    });
}

/// Exit parser with `Success::Eos`.
macro_rules! exit_eos {
    ($context:expr) => ({
        return Ok($crate::fsm::ParserValue::Exit(
            $crate::fsm::Success::Eos($context.stream_index)
        ));
    });
}

/// Exit parser with `ParserError`.
///
/// When a context is supplied, the offending byte is replayed so that it is not counted as
/// processed, and it is attached to the error.
macro_rules! exit_error {
    ($error:ident) => ({
        return Err($crate::http1::ParserError::$error);
    });

    ($context:expr, $error:ident) => ({
        bs_replay!($context);

        return Err($crate::http1::ParserError::$error($context.byte));
    });
}

/// If the stream is EOS, exit with `Success::Eos`. Otherwise do nothing.
macro_rules! exit_if_eos {
    ($context:expr) => ({
        if bs_is_eos!($context) {
            exit_eos!($context);
        }
    });
}

/// Set state.
macro_rules! set_state {
    ($parser:expr, $state:ident) => ({
        $parser.state = $crate::http1::ParserState::$state;
    });
}

/// Transition to `$state`.
macro_rules! transition {
    ($parser:expr, $context:expr, $state:ident) => ({
        set_state!($parser, $state);

        bs_mark!($context);

        return Ok($crate::fsm::ParserValue::Continue);
    });

    ($parser:expr, $context:expr) => ({
        bs_mark!($context);

        return Ok($crate::fsm::ParserValue::Continue);
    });
}

// -------------------------------------------------------------------------------------------------

/// Parsing function return values.
pub enum ParserValue {
    /// Continue the parser loop.
    Continue,

    /// Exit the parser loop.
    Exit(Success)
}

// -------------------------------------------------------------------------------------------------

/// Parsing function success return values.
#[derive(Clone,Copy,PartialEq,Eq)]
pub enum Success {
    /// Additional `stream` data is expected.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed. This value will always match
    ///          `stream.len()`.
    Eos(usize),

    /// A callback returned `Action::Pause`. The parser must be resumed with
    /// [`Parser::resume()`](../http1/struct.Parser.html#method.resume) before it accepts more
    /// data, and the unprocessed bytes must be fed again afterwards.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed before the parser paused.
    Paused(usize),

    /// The message requested a protocol upgrade and its head has been parsed. Bytes after the
    /// head belong to the upgraded protocol and are not processed.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that belong to the HTTP/1.x message.
    Upgrade(usize)
}

impl Success {
    /// Retrieve the amount of `stream` bytes that were processed.
    pub fn consumed(&self) -> usize {
        match *self {
            Success::Eos(length)
          | Success::Paused(length)
          | Success::Upgrade(length) => length
        }
    }
}

impl fmt::Debug for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Success::Eos(length) => {
                write!(formatter, "Success::Eos({})", length)
            },
            Success::Paused(length) => {
                write!(formatter, "Success::Paused({})", length)
            },
            Success::Upgrade(length) => {
                write!(formatter, "Success::Upgrade({})", length)
            }
        }
    }
}

impl fmt::Display for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.consumed())
    }
}
