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

//! HTTP byte classes built on top of the `byte_slice` macros.

/// Indicates that a byte is a space or horizontal tab.
macro_rules! is_space_tab {
    ($byte:expr) => ({
        $byte == b' ' || $byte == b'\t'
    });
}

/// Indicates that a byte is allowed within a header value.
///
/// This is horizontal tab, every visible 7-bit byte, space, and every byte `0x80` thru `0xFF`.
#[inline]
pub fn is_header_value(byte: u8) -> bool {
    byte == b'\t' || !is_control!(byte)
}

/// Indicates that a byte is allowed within a response status phrase.
#[inline]
pub fn is_status(byte: u8) -> bool {
    is_header_value(byte)
}

/// Indicates that a byte is allowed within a request URL.
///
/// This is every visible 7-bit byte, and every byte `0x80` thru `0xFF`.
#[inline]
pub fn is_url(byte: u8) -> bool {
    is_visible_7bit!(byte) || byte > 0x7F
}

/// Indicates that a byte is a HTTP token.
#[inline]
pub fn is_token(byte: u8) -> bool {
    [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, false,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    false,

    // !   "      #      $      %      &      '      (      )      *
    true,  false, true,  true,  true,  true,  true,  false, false, true,

    // +   ,      -      .      /
    true,  false, true,  true,  false,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    false, false, false, false, false, false, false,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    false, false, false, true,  true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    false, true,  false, true,

    // DEL
    false,

    // 128 - 255
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false

    ][byte as usize]
}

/// Trim trailing space and horizontal tab bytes.
#[inline]
pub fn trim_end_space_tab(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();

    while end > 0 && is_space_tab!(bytes[end - 1]) {
        end -= 1;
    }

    &bytes[..end]
}

/// Trim leading and trailing space and horizontal tab bytes.
#[inline]
pub fn trim_space_tab(bytes: &[u8]) -> &[u8] {
    let mut start = 0;

    while start < bytes.len() && is_space_tab!(bytes[start]) {
        start += 1;
    }

    trim_end_space_tab(&bytes[start..])
}
