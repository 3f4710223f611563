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

//! HTTP/1.x parser, callback settings, and message framing.

mod config;
mod parser;
mod parser_error;
mod parser_state;
mod settings;

pub mod framing;

pub use self::config::{ FramingConflict,
                        ParserConfig,
                        DEFAULT_MAX_FIELD_SIZE,
                        DEFAULT_MAX_HEADER_SIZE };
pub use self::framing::ContentLength;
pub use self::parser::{ MessageKind, Parser };
pub use self::parser_error::{ ExecuteError, ParserError };
pub use self::parser_state::ParserState;
pub use self::settings::{ Action, DataCallback, Event, NotifyCallback, Settings };
