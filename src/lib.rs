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

#![doc = include_str!("../README.md")]

#[macro_use]
extern crate byte_slice;

#[macro_use]
pub mod byte;

#[macro_use]
pub mod fsm;

pub mod http1;


pub use crate::fsm::Success;
pub use crate::http1::{ Action,
                        ContentLength,
                        Event,
                        ExecuteError,
                        FramingConflict,
                        MessageKind,
                        Parser,
                        ParserConfig,
                        ParserError,
                        ParserState,
                        Settings };

/// Crate major version.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Crate minor version.
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Crate patch version.
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
