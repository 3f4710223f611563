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

//! Chunked transfer encoding states.

use byte_slice::ByteStream;

use super::{ Parser, F_TRAILING };

use crate::fsm::ParserValue;
use crate::http1::{ ParserError, Settings };

use std::cmp;

impl<C> Parser<C> {
    pub(crate) fn chunk_size(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        if is_hex!(context.byte) {
            self.chunk_length = 0;

            bs_replay!(context);

            transition!(self, context, ChunkSizeMore);
        }

        exit_error!(context, ChunkSize);
    }

    pub(crate) fn chunk_size_more(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        bs_collect_hex64!(
            context,
            self.chunk_length,
            exit_error!(ChunkSizeOverflow),
            exit_eos!(context)
        );

        match context.byte {
            b'\r' => {
                transition!(self, context, ChunkSizeLf);
            },
            b'\n' => {
                self.chunk_size_end(context)
            },
            b';' | b' ' | b'\t' => {
                transition!(self, context, ChunkExtension);
            },
            _ => {
                exit_error!(context, ChunkSize);
            }
        }
    }

    pub(crate) fn chunk_extension(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if context.byte == b'\r' {
                transition!(self, context, ChunkSizeLf);
            } else if context.byte == b'\n' {
                return self.chunk_size_end(context);
            }
        }
    }

    pub(crate) fn chunk_size_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            return self.chunk_size_end(context);
        }

        exit_error!(context, CrlfSequence);
    }

    /// Transition after a chunk size line. The last chunk starts the trailer block.
    fn chunk_size_end(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        if self.chunk_length == 0 {
            set_flag!(self, F_TRAILING);

            self.head_length = 0;

            transition!(self, context, HeaderFieldStart);
        }

        transition!(self, context, ChunkData);
    }

    pub(crate) fn chunk_data(&mut self, settings: &Settings<C>, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);

        let length = cmp::min(bs_available!(context) as u64, self.chunk_length) as usize;

        bs_jump!(context, length);

        self.chunk_length -= length as u64;

        if self.chunk_length == 0 {
            callback_body_transition!(self, settings, context, bs_slice!(context), ChunkDataCr);
        }

        callback_body_transition!(self, settings, context, bs_slice!(context), ChunkData);
    }

    pub(crate) fn chunk_data_cr(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        match context.byte {
            b'\r' => {
                transition!(self, context, ChunkDataLf);
            },
            b'\n' => {
                transition!(self, context, ChunkSize);
            },
            _ => {
                exit_error!(context, CrlfSequence);
            }
        }
    }

    pub(crate) fn chunk_data_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(self, context, ChunkSize);
        }

        exit_error!(context, CrlfSequence);
    }
}
