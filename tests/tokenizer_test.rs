// tokenizer_test.rs - Integration tests for the tokenizer and splitter.

use arrayscan::prelude::*;
use pretty_assertions::assert_eq;

fn strings<T: Element>(tk: &mut Tokenizer<'_, T>) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(tok) = tk.advance().unwrap() {
        out.push(tok.to_owned_string());
    }
    out
}

// === Scenario A: signed bytes, Any on [0] ===

#[test]
fn signed_bytes_split_on_zero() {
    let source: [i8; 11] = [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5];
    let mut tk = Tokenizer::new();
    tk.set_source(&source, &[0i8]).unwrap();

    let first = tk.advance().unwrap().unwrap();
    assert_eq!(first.bounds(), Bounds::new(0, 5));
    assert_eq!(first.as_slice(), &[-5i8, -4, -3, -2, -1][..]);

    // [1..5] is not followed by a delimiter, so it is not yielded as a token.
    assert!(tk.advance().unwrap().is_none());
    assert_eq!(tk.remaining(), Ok(Some(Bounds::new(6, 5))));
    assert!(tk.advance().unwrap().is_none());
}

#[test]
fn signed_bytes_split_on_zero_terminated() {
    let source: [i8; 12] = [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 0];
    let mut tk = Tokenizer::new();
    tk.set_source(&source, &[0i8]).unwrap();
    assert_eq!(tk.advance_fast(), Ok(Some(Bounds::new(0, 5))));
    let second = tk.advance().unwrap().unwrap();
    assert_eq!(second.bounds(), Bounds::new(6, 5));
    assert_eq!(second.to_owned_array(), vec![1i8, 2, 3, 4, 5]);
    assert_eq!(tk.advance_fast(), Ok(None));
}

// === Scenario B: Exact on ":" ===

#[test]
fn exact_collapses_doubled_delimiter() {
    let mut tk = Tokenizer::new();
    tk.set_source_with(b"field1:field2::field3", b":", DelimiterMatch::Exact)
        .unwrap();
    assert_eq!(strings(&mut tk), vec!["field1", "field2"]);

    let rest = tk.remaining().unwrap().unwrap();
    let tail = Token::new(rest.index, rest.length, tk.source().unwrap()).unwrap();
    assert_eq!(tail.to_owned_string(), "field3");

    tk.set_source_with(b"field1:field2::field3:", b":", DelimiterMatch::Exact)
        .unwrap();
    assert_eq!(strings(&mut tk), vec!["field1", "field2", "field3"]);
}

#[test]
fn exact_multi_element_delimiter() {
    let src: Vec<char> = "a<>b<><>c<>".chars().collect();
    let delim: Vec<char> = "<>".chars().collect();
    let mut tk: CharTokenizer = Tokenizer::new();
    tk.set_source_with(&src, &delim, DelimiterMatch::Exact).unwrap();
    assert_eq!(strings(&mut tk), vec!["a", "b", "c"]);
}

#[test]
fn exact_versus_any_on_same_delimiters() {
    let src = b"a<b>c<>d<>";
    let mut tk = Tokenizer::new();
    tk.set_source_with(src, b"<>", DelimiterMatch::Any).unwrap();
    assert_eq!(strings(&mut tk), vec!["a", "b", "c", "d"]);
    tk.set_source_with(src, b"<>", DelimiterMatch::Exact).unwrap();
    assert_eq!(strings(&mut tk), vec!["a<b>c", "d"]);
}

#[test]
fn exact_partial_delimiter_belongs_to_token() {
    let mut tk = Tokenizer::new();
    tk.set_source_with(b"a::b:c::", b"::", DelimiterMatch::Exact).unwrap();
    assert_eq!(strings(&mut tk), vec!["a", "b:c"]);
}

#[test]
fn exact_delimiter_found_right_after_partial_match() {
    // The partial "a" at 1 is not a delimiter; "ab" at 2 is.
    let mut tk = Tokenizer::new();
    tk.set_source_with(b"xaab,ab", b"ab", DelimiterMatch::Exact).unwrap();
    assert_eq!(tk.advance_fast(), Ok(Some(Bounds::new(0, 2))));
    assert_eq!(tk.advance_fast(), Ok(Some(Bounds::new(4, 1))));
    assert_eq!(tk.advance_fast(), Ok(None));
}

// === Scenario C: invalid argument and invalid state ===

#[test]
fn invalid_argument_and_state() {
    let err = index_of_in(b"abc", b'a', 2, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let mut tk: ByteTokenizer = Tokenizer::new();
    let err = tk.advance().unwrap_err();
    assert_eq!(err, ScanError::NotInitialized);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(tk.advance_fast().unwrap_err().is_invalid_state());
    assert!(tk.source().is_err());
    assert!(tk.delimiters().is_err());
    assert!(tk.length().is_err());
}

#[test]
fn set_source_rejects_bad_window() {
    let mut tk = Tokenizer::new();
    let err = tk
        .set_source_in(b"abc", b",", DelimiterMatch::Any, 1, 3)
        .unwrap_err();
    assert_eq!(
        err,
        ScanError::OutOfBounds {
            index: 1,
            length: 3,
            len: 3
        }
    );
    // Still uninitialized after the failed call.
    assert!(!tk.is_ready());
}

// === Any policy ===

#[test]
fn any_leading_and_trailing_delimiters() {
    let mut tk = Tokenizer::new();
    tk.set_source(b"  one two   three  ", b" ").unwrap();
    assert_eq!(strings(&mut tk), vec!["one", "two", "three"]);
}

#[test]
fn any_only_delimiters() {
    let mut tk = Tokenizer::new();
    tk.set_source(b",;,;", b",;").unwrap();
    assert_eq!(tk.advance_fast(), Ok(None));
    assert!(tk.is_exhausted());
    assert_eq!(tk.remaining(), Ok(None));
}

#[test]
fn any_without_delimiter_yields_nothing() {
    let mut tk = Tokenizer::new();
    tk.set_source(b"abc", b",").unwrap();
    assert_eq!(tk.advance_fast(), Ok(None));
    assert_eq!(tk.remaining(), Ok(Some(Bounds::new(0, 3))));
}

#[test]
fn empty_source_and_window() {
    let empty: [u8; 0] = [];
    let mut tk = Tokenizer::new();
    tk.set_source(&empty, b",").unwrap();
    assert_eq!(tk.advance_fast(), Ok(None));

    tk.set_source_in(b"a,b,", b",", DelimiterMatch::Any, 2, 0).unwrap();
    assert_eq!(tk.advance_fast(), Ok(None));
}

#[test]
fn window_in_the_middle() {
    let src = b"HDR|a|b|c|TRL";
    let mut tk = Tokenizer::new();
    tk.set_source_in(src, b"|", DelimiterMatch::Any, 4, 6).unwrap();
    let toks: Vec<Bounds> = tk.tokens().unwrap().map(|t| t.bounds()).collect();
    assert_eq!(toks, vec![Bounds::new(4, 1), Bounds::new(6, 1), Bounds::new(8, 1)]);
}

// === Token independence ===

#[test]
fn tokens_outlive_later_advances() {
    let src = b"x,yy,zzz,";
    let mut tk = Tokenizer::new();
    tk.set_source(src, b",").unwrap();
    let a = tk.advance().unwrap().unwrap();
    let b = tk.advance().unwrap().unwrap();
    tk.set_source(src, b",").unwrap();
    let _ = tk.advance().unwrap();
    assert_eq!(a.as_slice(), b"x");
    assert_eq!(b.as_slice(), b"yy");
    assert_eq!(b.source(), src);
}

// === advance and advance_fast agree ===

#[test]
fn advance_and_advance_fast_agree() {
    let src = b"::a:b::c:::d:";
    for policy in [DelimiterMatch::Any, DelimiterMatch::Exact] {
        let mut slow = Tokenizer::new();
        let mut fast = Tokenizer::new();
        slow.set_source_with(src, b":", policy).unwrap();
        fast.set_source_with(src, b":", policy).unwrap();
        loop {
            let t = slow.advance().unwrap().map(|t| t.bounds());
            let b = fast.advance_fast().unwrap();
            assert_eq!(t, b);
            if b.is_none() {
                break;
            }
        }
    }
}

// === Split helpers ===

#[test]
fn fields_on_chars() {
    let src: Vec<char> = "α|β||γ|".chars().collect();
    let f = fields(&src, &['|'], DelimiterMatch::Any).unwrap();
    let got: Vec<String> = f.iter().map(|t| t.to_string()).collect();
    assert_eq!(got, vec!["α", "β", "γ"]);
}

#[test]
fn rejoin_round_trip() {
    let src = b"a  b c   d ";
    let f = fields(src, b" ", DelimiterMatch::Any).unwrap();
    let canonical = rejoin(&f, b" ");
    assert_eq!(canonical, b"a b c d ");
    let again = fields(&canonical, b" ", DelimiterMatch::Any).unwrap();
    assert_eq!(rejoin(&again, b" "), canonical);
}

#[test]
fn rejoin_compares_while_fields_borrow_it() {
    let delim = [b','];
    let f = fields(b"a,,b,", &delim, DelimiterMatch::Any).unwrap();
    let canonical = rejoin(&f, &delim);
    let again = fields(&canonical, &delim, DelimiterMatch::Any).unwrap();
    assert_eq!(&rejoin(&again, &delim), &canonical);
    assert_eq!(again.len(), 2);
}

#[test]
fn tokenizer_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Tokenizer<'static, u8>>();
    assert_send::<Token<'static, char>>();
}
