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
            b"HTTP/1.1 ",
            ParserState::ResponseStatusCode,
            b"HTTP/1.1 ".len()
        );

        (p, s)
    });
}

#[test]
fn allowed() {
    for b in digit_vec().iter() {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            &[*b],
            ParserState::ResponseStatusCode,
            [*b].len()
        );

        assert_eos(
            &mut p,
            &s,
            &[*b],
            ParserState::ResponseStatusCode,
            [*b].len()
        );

        assert_eos(
            &mut p,
            &s,
            &[*b],
            ParserState::ResponseStatusCodeEnd,
            [*b].len()
        );

        assert_eos(
            &mut p,
            &s,
            b" ",
            ParserState::ResponseStatus,
            b" ".len()
        );

        assert_eq!(
            p.status_code(),
            ((*b - b'0') as u16 * 100) + ((*b - b'0') as u16 * 10) + (*b - b'0') as u16
        );
    }
}

#[test]
fn end_not_allowed_error() {
    for b in (0..=255u8).filter(|&x| x != b' ' && x != b'\r' && x != b'\n') {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            b"200",
            ParserState::ResponseStatusCodeEnd,
            b"200".len()
        );

        assert_error(
            &mut p,
            &s,
            &[b],
            ParserError::StatusCode(b)
        );
    }
}

#[test]
fn entire_iter() {
    let (mut p, s) = setup!();

    iter_assert_eos(&mut p, &s, b"404 ");

    assert_eq!(p.state(), ParserState::ResponseStatus);
    assert_eq!(p.status_code(), 404);
}

#[test]
fn line_break_without_status() {
    let (mut p, s) = setup!();

    assert_eos(
        &mut p,
        &s,
        b"200\r\n",
        ParserState::HeaderFieldStart,
        b"200\r\n".len()
    );

    let (mut p, s) = setup!();

    assert_eos(
        &mut p,
        &s,
        b"200\n",
        ParserState::HeaderFieldStart,
        b"200\n".len()
    );

    assert_eq!(count_of(&mut p, Event::Status), 0);
}

#[test]
fn not_allowed_error1() {
    for b in non_digit_vec().iter() {
        let (mut p, s) = setup!();

        assert_error(
            &mut p,
            &s,
            &[*b],
            ParserError::StatusCode(*b)
        );
    }
}

#[test]
fn not_allowed_error2() {
    for b in non_digit_vec().iter() {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            b"1",
            ParserState::ResponseStatusCode,
            b"1".len()
        );

        assert_error(
            &mut p,
            &s,
            &[*b],
            ParserError::StatusCode(*b)
        );
    }
}

#[test]
fn not_allowed_error3() {
    for b in non_digit_vec().iter() {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            b"12",
            ParserState::ResponseStatusCode,
            b"12".len()
        );

        assert_error(
            &mut p,
            &s,
            &[*b],
            ParserError::StatusCode(*b)
        );
    }
}
