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

use crate::http1::*;
use crate::http1::test::*;
use crate::test::*;

macro_rules! setup {
    () => ({
        let (mut p, s) = http1_setup!(Response);

        assert_eos(
            &mut p,
            &s,
            b"HTTP/1.1 200 ",
            ParserState::ResponseStatus,
            b"HTTP/1.1 200 ".len()
        );

        (p, s)
    });
}

#[test]
fn allowed() {
    for b in (0..=255u8).filter(|&x| !control_vec().contains(&x) || x == b'\t') {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            &[b],
            ParserState::ResponseStatus,
            [b].len()
        );

        assert_eos(
            &mut p,
            &s,
            b"\r\n",
            ParserState::HeaderFieldStart,
            b"\r\n".len()
        );

        assert_eq!(data_of(&mut p, Event::Status), vec![vec![b]]);
    }
}

#[test]
fn empty() {
    let (mut p, s) = setup!();

    assert_eos(
        &mut p,
        &s,
        b"\r\n",
        ParserState::HeaderFieldStart,
        b"\r\n".len()
    );

    assert_eq!(count_of(&mut p, Event::Status), 0);
}

#[test]
fn line_feed() {
    let (mut p, s) = setup!();

    assert_eos(
        &mut p,
        &s,
        b"OK\n",
        ParserState::HeaderFieldStart,
        b"OK\n".len()
    );

    assert_eq!(data_of(&mut p, Event::Status), vec![b"OK".to_vec()]);
}

#[test]
fn not_allowed_error() {
    for b in control_vec().iter().filter(|&x| *x != b'\t' && *x != b'\r' && *x != b'\n') {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            b"Not",
            ParserState::ResponseStatus,
            b"Not".len()
        );

        assert_error(
            &mut p,
            &s,
            &[*b],
            ParserError::Status(*b)
        );
    }
}

#[test]
fn split_status() {
    let (mut p, s) = setup!();

    assert_eos(&mut p, &s, b"Not Fo", ParserState::ResponseStatus, 6);
    assert_eos(&mut p, &s, b"und", ParserState::ResponseStatus, 3);
    assert_eos(&mut p, &s, b"\r", ParserState::StartLineLf, 1);
    assert_eos(&mut p, &s, b"\n", ParserState::HeaderFieldStart, 1);

    assert_eq!(data_of(&mut p, Event::Status), vec![b"Not Found".to_vec()]);
}
