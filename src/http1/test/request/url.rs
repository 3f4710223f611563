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
            b"GET ",
            ParserState::RequestUrl,
            b"GET ".len()
        );

        (p, s)
    });
}

#[test]
fn allowed() {
    for b in (0..=255u8).filter(|&x| !non_url_vec().contains(&x)) {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            &[b],
            ParserState::RequestUrl,
            [b].len()
        );

        assert_eos(
            &mut p,
            &s,
            b" ",
            ParserState::HttpLiteral,
            b" ".len()
        );

        assert_eq!(data_of(&mut p, Event::Url), vec![vec![b]]);
    }
}

#[test]
fn callback_abort() {
    let (mut p, s) = setup!();

    recorder(&mut p).abort_on = Some(Event::Url);

    match p.execute(&s, b"/abort HTTP/1.1\r\n") {
        Err(error) => {
            assert_eq!(error.error, ParserError::Callback(Event::Url));
            assert_eq!(error.state, ParserState::RequestUrl);
            assert_eq!(error.consumed, b"/abort ".len());
        },
        other => panic!("callback_abort() Err() match failed: {:?}", other)
    }

    assert_eq!(p.state(), ParserState::Dead);
}

#[test]
fn callback_pause() {
    let (mut p, s) = setup!();

    recorder(&mut p).pause_on = Some(Event::Url);

    let stream = b"/pause HTTP/1.1\r\n\r\n";

    assert_paused(
        &mut p,
        &s,
        stream,
        ParserState::HttpLiteral,
        b"/pause ".len()
    );

    // paused parsers reject data without dying
    match p.execute(&s, &stream[7..]) {
        Err(error) => {
            assert_eq!(error.error, ParserError::Paused);
            assert!(!error.error.is_fatal());
        },
        other => panic!("callback_pause() Err() match failed: {:?}", other)
    }

    assert_eq!(p.state(), ParserState::HttpLiteral);

    p.resume();

    assert_eos(
        &mut p,
        &s,
        &stream[7..],
        ParserState::MessageStart,
        stream.len() - 7
    );

    assert_eq!(data_of(&mut p, Event::Url), vec![b"/pause".to_vec()]);
    assert_eq!(count_of(&mut p, Event::MessageComplete), 1);
}

#[test]
fn double_space_error() {
    let (mut p, s) = setup!();

    assert_error(
        &mut p,
        &s,
        b" /",
        ParserError::Url(b' ')
    );
}

#[test]
fn not_allowed_error1() {
    for b in non_url_vec().iter() {
        let (mut p, s) = setup!();

        assert_error(
            &mut p,
            &s,
            &[*b],
            ParserError::Url(*b)
        );
    }
}

#[test]
fn not_allowed_error2() {
    for b in non_url_vec().iter().filter(|&x| *x != b' ') {
        let (mut p, s) = setup!();

        assert_eos(
            &mut p,
            &s,
            b"/path",
            ParserState::RequestUrl,
            b"/path".len()
        );

        assert_error(
            &mut p,
            &s,
            &[*b],
            ParserError::Url(*b)
        );
    }
}

#[test]
fn split_url() {
    let (mut p, s) = setup!();

    assert_eos(&mut p, &s, b"/a", ParserState::RequestUrl, 2);
    assert_eos(&mut p, &s, b"?b=", ParserState::RequestUrl, 3);
    assert_eos(&mut p, &s, b"c#d", ParserState::RequestUrl, 3);
    assert_eos(&mut p, &s, b" HT", ParserState::HttpLiteral, 3);

    assert_eq!(data_of(&mut p, Event::Url), vec![b"/a?b=c#d".to_vec()]);
}

#[test]
fn url_overflow() {
    let config = ParserConfig::new().with_max_field_size(8);

    let (mut p, s) = http1_setup!(Request, config);

    assert_eos(
        &mut p,
        &s,
        b"GET /1234567",
        ParserState::RequestUrl,
        b"GET /1234567".len()
    );

    assert_error(
        &mut p,
        &s,
        b"89 HTTP/1.1\r\n",
        ParserError::FieldOverflow
    );
}
