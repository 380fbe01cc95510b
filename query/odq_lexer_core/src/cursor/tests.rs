use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.byte_pos(), 1);
}

#[test]
fn advance_through_entire_input() {
    let mut cursor = Cursor::new("hi");
    assert_eq!(cursor.current(), Some('h'));
    cursor.advance();
    assert_eq!(cursor.current(), Some('i'));
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

#[test]
fn advance_saturates_at_end() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    assert!(cursor.is_eof());
    let pos = cursor.pos();
    let byte_pos = cursor.byte_pos();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), pos);
    assert_eq!(cursor.byte_pos(), byte_pos);
    assert!(cursor.is_eof());
}

#[test]
fn empty_input_is_immediately_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.remaining_chars(), 0);
}

// === Lookahead ===

#[test]
fn peek_returns_next_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(), Some('b'));
}

#[test]
fn peek_at_last_char_returns_none() {
    let mut cursor = Cursor::new("ab");
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), None);
}

#[test]
fn peek_at_eof_returns_none() {
    let mut cursor = Cursor::new("a");
    cursor.advance();
    assert_eq!(cursor.peek(), None);
}

// === Multibyte Characters ===

#[test]
fn char_and_byte_positions_diverge_on_multibyte() {
    let mut cursor = Cursor::new("日本語");
    assert_eq!(cursor.current(), Some('日'));
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.byte_pos(), 3);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.byte_pos(), 9);
    assert!(cursor.is_eof());
}

#[test]
fn peek_across_multibyte() {
    let cursor = Cursor::new("日x");
    assert_eq!(cursor.peek(), Some('x'));
}

// === Slicing ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

#[test]
fn slice_from_on_multibyte_boundaries() {
    let mut cursor = Cursor::new("aé日");
    let start = cursor.byte_pos();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.slice_from(start), "aé");
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching_chars() {
    let mut cursor = Cursor::new("aaabbb");
    cursor.eat_while(|c| c == 'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), Some('b'));
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|c| c == 'a');
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_no_match_does_not_move() {
    let mut cursor = Cursor::new("hello");
    cursor.eat_while(|c| c == 'z');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_while_whitespace() {
    let mut cursor = Cursor::new("  \t x");
    cursor.eat_while(char::is_whitespace);
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.pos(), 4);
}

// === skip_to_delim ===

#[test]
fn skip_to_delim_finds_first_delimiter() {
    let mut cursor = Cursor::new("abc\"def");
    let found = cursor.skip_to_delim(b'"', b'\\');
    assert_eq!(found, Some('"'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.byte_pos(), 3);
}

#[test]
fn skip_to_delim_picks_earliest_of_two() {
    let mut cursor = Cursor::new("ab\\cd\"ef");
    let found = cursor.skip_to_delim(b'"', b'\\');
    assert_eq!(found, Some('\\'));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_delim_counts_multibyte_chars() {
    let mut cursor = Cursor::new("日本語\"x");
    let found = cursor.skip_to_delim(b'"', b'\\');
    assert_eq!(found, Some('"'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.byte_pos(), 9);
}

#[test]
fn skip_to_delim_not_found_lands_at_eof() {
    let mut cursor = Cursor::new("no delimiters here");
    let found = cursor.skip_to_delim(b'"', b'\\');
    assert_eq!(found, None);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 18);
}

#[test]
fn skip_to_delim_at_delimiter_does_not_move() {
    let mut cursor = Cursor::new("\"abc");
    let found = cursor.skip_to_delim(b'"', b'\\');
    assert_eq!(found, Some('"'));
    assert_eq!(cursor.pos(), 0);
}

// === Snapshots ===

#[test]
fn copy_snapshot_restores_state() {
    let mut cursor = Cursor::new("12e&");
    cursor.advance();
    cursor.advance();
    let snapshot = cursor;
    cursor.advance();
    assert_eq!(cursor.current(), Some('&'));
    cursor = snapshot;
    assert_eq!(cursor.current(), Some('e'));
    assert_eq!(cursor.pos(), 2);
}

// === Properties ===

proptest! {
    #[test]
    fn advance_visits_every_char_once(input in ".*") {
        let mut cursor = Cursor::new(&input);
        let mut collected = String::new();
        while let Some(ch) = cursor.current() {
            collected.push(ch);
            cursor.advance();
        }
        prop_assert_eq!(collected, input.clone());
        prop_assert!(cursor.is_eof());
    }

    #[test]
    fn positions_are_monotonic_and_consistent(input in ".*") {
        let mut cursor = Cursor::new(&input);
        let mut chars_seen: u32 = 0;
        loop {
            prop_assert_eq!(cursor.pos(), chars_seen);
            if cursor.is_eof() {
                break;
            }
            let before = cursor.byte_pos();
            cursor.advance();
            prop_assert!(cursor.byte_pos() > before);
            chars_seen += 1;
        }
        prop_assert_eq!(cursor.byte_pos(), input.len());
    }

    #[test]
    fn remaining_chars_decreases_by_one_per_advance(input in ".{0,40}") {
        let mut cursor = Cursor::new(&input);
        let mut remaining = cursor.remaining_chars();
        while !cursor.is_eof() {
            cursor.advance();
            prop_assert_eq!(cursor.remaining_chars(), remaining - 1);
            remaining -= 1;
        }
        prop_assert_eq!(remaining, 0);
    }

    #[test]
    fn skip_to_delim_agrees_with_naive_scan(input in "[a-c\"\\\\ é日]{0,30}") {
        let expected = input.chars().position(|c| c == '"' || c == '\\');
        let mut cursor = Cursor::new(&input);
        let found = cursor.skip_to_delim(b'"', b'\\');
        match expected {
            Some(char_idx) => {
                prop_assert_eq!(found, cursor.current());
                prop_assert_eq!(cursor.pos() as usize, char_idx);
            }
            None => {
                prop_assert_eq!(found, None);
                prop_assert!(cursor.is_eof());
            }
        }
    }
}
