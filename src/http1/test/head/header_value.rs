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
        let (mut p, s) = http1_setup!(Request);

        assert_eos(
            &mut p,
            &s,
            b"GET / HTTP/1.1\r\nX-Value:",
            ParserState::HeaderValueStart,
            b"GET / HTTP/1.1\r\nX-Value:".len()
        );

        (p, s)
    });
}

#[test]
fn allowed() {
    // skip `space` and `\t`, otherwise they are stripped
    for b in (0..=255u8).filter(|&x| !non_header_value_vec().contains(&x))
                        .filter(|&x| x != b' ' && x != b'\t') {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            &[b],
            ParserState::HeaderValue,
            [b].len()
        );

        assert_eos(
            &mut p,
            &s,
            b"\r",
            ParserState::HeaderValueLf,
            b"\r".len()
        );

        assert_eos(
            &mut p,
            &s,
            b"\n",
            ParserState::HeaderFieldStart,
            b"\n".len()
        );

        assert_eq!(data_of(&mut p, Event::HeaderValue), vec![vec![b]]);
    }
}

#[test]
fn crlf_sequence_error() {
    let (mut p, s) = setup!();

    assert_error(
        &mut p,
        &s,
        b" value\r\r",
        ParserError::CrlfSequence(b'\r')
    );
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

    assert_eq!(data_of(&mut p, Event::HeaderValue), vec![b"".to_vec()]);

    let (mut p, s) = setup!();

    assert_eos(
        &mut p,
        &s,
        b" \t \r\n",
        ParserState::HeaderFieldStart,
        b" \t \r\n".len()
    );

    assert_eq!(data_of(&mut p, Event::HeaderValue), vec![b"".to_vec()]);
}

#[test]
fn inner_space() {
    let (mut p, s) = setup!();

    assert_eos(
        &mut p,
        &s,
        b" text/html; q=0.9, */*\r\n",
        ParserState::HeaderFieldStart,
        b" text/html; q=0.9, */*\r\n".len()
    );

    assert_eq!(data_of(&mut p, Event::HeaderValue), vec![b"text/html; q=0.9, */*".to_vec()]);
}

#[test]
fn not_allowed_error() {
    for b in non_header_value_vec().iter().filter(|&x| *x != b'\r' && *x != b'\n') {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            b" value",
            ParserState::HeaderValue,
            b" value".len()
        );

        assert_error(
            &mut p,
            &s,
            &[*b],
            ParserError::HeaderValue(*b)
        );
    }
}

#[test]
fn split_value() {
    let (mut p, s) = setup!();

    assert_eos(&mut p, &s, b" ", ParserState::HeaderValueStart, 1);
    assert_eos(&mut p, &s, b"\t0.0", ParserState::HeaderValue, 4);
    assert_eos(&mut p, &s, b".0.0=", ParserState::HeaderValue, 5);
    assert_eos(&mut p, &s, b"5000 ", ParserState::HeaderValue, 5);
    assert_eos(&mut p, &s, b"\r\n", ParserState::HeaderFieldStart, 2);

    assert_eq!(data_of(&mut p, Event::HeaderValue), vec![b"0.0.0.0=5000".to_vec()]);
}

#[test]
fn trailing_space_trimmed() {
    let (mut p, s) = setup!();

    assert_eos(
        &mut p,
        &s,
        b"  value \t \r\n",
        ParserState::HeaderFieldStart,
        b"  value \t \r\n".len()
    );

    assert_eq!(data_of(&mut p, Event::HeaderValue), vec![b"value".to_vec()]);
}

#[test]
fn value_overflow() {
    let config = ParserConfig::new().with_max_field_size(4);

    let (mut p, s) = http1_setup!(Request, config);

    assert_error(
        &mut p,
        &s,
        b"GET / HTTP/1.1\r\nHost: abcde\r\n",
        ParserError::FieldOverflow
    );
}
