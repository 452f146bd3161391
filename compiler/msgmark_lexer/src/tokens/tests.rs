use super::*;
use crate::{raw_tokens, tokenize, EmbedKind};
use msgmark_lexer_core::offset_in;
use pretty_assertions::assert_eq;
use uuid::Uuid;

const EMBED: &str =
    r#"!{"raw":"@user","type":"user","id":"11111111-1111-1111-1111-111111111111"}"#;

/// Helper: tokenize and return `(kind, raw)` pairs.
fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source).map(|t| (t.kind(), t.raw())).collect()
}

/// Helper: raw (unmerged) `(kind, raw)` pairs.
fn raw_kinds(source: &str) -> Vec<(TokenKind, &str)> {
    raw_tokens(source).map(|t| (t.kind(), t.raw())).collect()
}

// === Scenarios ===

#[test]
fn plain_text_is_one_token() {
    assert_eq!(kinds("hello world"), vec![(TokenKind::Text, "hello world")]);
    assert_eq!(
        raw_kinds("hello world"),
        vec![
            (TokenKind::Text, "hello"),
            (TokenKind::Text, " "),
            (TokenKind::Text, "world"),
        ]
    );
}

#[test]
fn lone_stamp() {
    let tokens: Vec<_> = tokenize(":smile:").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].stamp_name(), Ok("smile"));
}

#[test]
fn lone_embed() {
    let tokens: Vec<_> = tokenize(EMBED).collect();
    assert_eq!(tokens.len(), 1);
    let embed = tokens[0].embed().unwrap();
    assert_eq!(embed.kind(), EmbedKind::UserMention);
    assert_eq!(
        embed.id(),
        Uuid::from_u128(0x1111_1111_1111_1111_1111_1111_1111_1111)
    );
    assert_eq!(embed.display_text(), "@user");
    assert_eq!(tokens[0].raw(), EMBED);
}

#[test]
fn scheme_less_url_then_text() {
    let tokens: Vec<_> = tokenize("//example.com more").collect();
    assert_eq!(tokens.len(), 2);
    let url = tokens[0].url().unwrap();
    assert!(url.has_no_scheme());
    assert_eq!(url.render("").unwrap().as_str(), "http://example.com/");
    assert_eq!(url.render("https").unwrap().as_str(), "https://example.com/");
    assert_eq!(tokens[1].as_text(), Ok(" more"));
}

#[test]
fn embed_missing_id_is_text() {
    let source = "!{\"raw\":\"x\",\"type\":\"user\"}";
    assert_eq!(kinds(source), vec![(TokenKind::Text, source)]);
}

#[test]
fn embed_missing_field_in_long_literal_is_text() {
    let source = r#"!{"raw":"@user","type":"user","color":"0123456789"} ok"#;
    assert_eq!(kinds(source), vec![(TokenKind::Text, source)]);
}

#[test]
fn mixed_scripts_merge_into_one_text() {
    assert_eq!(
        raw_kinds("abc日本語123"),
        vec![
            (TokenKind::Text, "abc"),
            (TokenKind::Text, "日本語"),
            (TokenKind::Text, "123"),
        ]
    );
    assert_eq!(kinds("abc日本語123"), vec![(TokenKind::Text, "abc日本語123")]);
}

#[test]
fn mixed_message() {
    assert_eq!(
        kinds("hi :wave: //example.com"),
        vec![
            (TokenKind::Text, "hi "),
            (TokenKind::Stamp, ":wave:"),
            (TokenKind::Text, " "),
            (TokenKind::Url, "//example.com"),
        ]
    );
}

#[test]
fn adjacent_markup_is_not_merged() {
    let source = format!(":a::b:{EMBED}{EMBED}");
    assert_eq!(
        kinds(&source),
        vec![
            (TokenKind::Stamp, ":a:"),
            (TokenKind::Stamp, ":b:"),
            (TokenKind::Embed, EMBED),
            (TokenKind::Embed, EMBED),
        ]
    );
}

#[test]
fn embed_after_word() {
    let source = format!("cc{EMBED}!");
    assert_eq!(
        kinds(&source),
        vec![
            (TokenKind::Text, "cc"),
            (TokenKind::Embed, EMBED),
            (TokenKind::Text, "!"),
        ]
    );
}

#[test]
fn url_runs_to_whitespace() {
    assert_eq!(
        kinds("see https://example.com/a:b:c, thanks"),
        vec![
            (TokenKind::Text, "see "),
            (TokenKind::Url, "https://example.com/a:b:c,"),
            (TokenKind::Text, " thanks"),
        ]
    );
}

#[test]
fn escaped_colon_does_not_start_a_stamp() {
    assert_eq!(kinds("a\\:smile:"), vec![(TokenKind::Text, "a\\:smile:")]);
}

#[test]
fn empty_message() {
    assert_eq!(tokenize("").next(), None);
    assert_eq!(raw_tokens("").next(), None);
}

// === Enumerator behavior ===

#[test]
fn tokens_borrow_from_source() {
    let source = String::from("x :y: z");
    for token in tokenize(&source) {
        assert!(offset_in(&source, token.raw()).is_some());
    }
}

#[test]
fn restart_enumerates_again() {
    let source = "hi :wave: there";
    let mut tokens = tokenize(source);
    let first: Vec<_> = tokens.by_ref().collect();
    assert_eq!(tokens.next(), None);

    let again: Vec<_> = tokens.restart().collect();
    assert_eq!(first, again);
    assert_eq!(tokens.source(), source);
}

#[test]
fn exhausted_stream_stays_exhausted() {
    let mut tokens = tokenize("a :b:");
    assert_eq!(tokens.by_ref().count(), 2);
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn raw_tokens_track_position() {
    let mut tokens = raw_tokens("ab cd");
    assert_eq!(tokens.pos(), 0);
    tokens.next();
    assert_eq!(tokens.pos(), 2);
    assert_eq!(tokens.by_ref().count(), 2);
    assert_eq!(tokens.pos(), 5);
    assert_eq!(tokens.source(), "ab cd");
}

// === Wrong-kind accessors ===

#[test]
fn accessor_of_wrong_kind() {
    let tokens: Vec<_> = tokenize("hi :wave:").collect();
    assert_eq!(
        tokens[0].embed().unwrap_err(),
        crate::TokenError::WrongKind {
            expected: TokenKind::Embed,
            found: TokenKind::Text,
        }
    );
    assert_eq!(
        tokens[1].as_text().unwrap_err(),
        crate::TokenError::WrongKind {
            expected: TokenKind::Text,
            found: TokenKind::Stamp,
        }
    );
}

// === Properties ===

#[allow(
    clippy::redundant_clone,
    reason = "proptest macros internally use Arc"
)]
mod proptest_tokens {
    use super::EMBED;
    use crate::{parse_head, raw_tokens, tokenize, TokenKind};
    use proptest::prelude::*;

    /// Messages built from markup-ish fragments, so that stamps, embeds,
    /// and links (valid and broken) actually show up.
    fn markup() -> impl Strategy<Value = String> {
        let fragment = prop_oneof![
            proptest::sample::select(vec![
                ":smile:",
                ":",
                " ",
                "\\",
                "//example.com",
                "https://example.com/x",
                "http://",
                EMBED,
                r#"!{"raw":"x","type":"user"}"#,
                "日本語",
            ])
            .prop_map(str::to_owned),
            "[a-z0-9]{1,4}",
            "[!-/:-@]{1,3}",
            "\\PC{1,3}",
        ];
        proptest::collection::vec(fragment, 0..16).prop_map(|parts| parts.concat())
    }

    fn check_stream(source: &str) -> Result<(), TestCaseError> {
        let tokens: Vec<_> = tokenize(source).collect();

        let rebuilt: String = tokens.iter().map(|t| t.raw()).collect();
        prop_assert_eq!(&rebuilt, source);

        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0].kind() == TokenKind::Text && pair[1].kind() == TokenKind::Text),
                "adjacent text tokens {:?} {:?}",
                pair[0].raw(),
                pair[1].raw()
            );
        }
        for token in &tokens {
            prop_assert!(!token.is_empty());
        }

        let raw: String = raw_tokens(source).map(|t| t.raw()).collect();
        prop_assert_eq!(&raw, source);
        Ok(())
    }

    proptest! {
        #[test]
        fn arbitrary_text_round_trips(source in "\\PC{0,64}") {
            check_stream(&source)?;
        }

        #[test]
        fn markup_round_trips(source in markup()) {
            check_stream(&source)?;
        }

        #[test]
        fn head_parser_makes_progress(source in "\\PC{1,32}") {
            let token = parse_head(&source);
            prop_assert!(token.is_some());
            if let Some(token) = token {
                prop_assert!(!token.is_empty());
                prop_assert!(source.starts_with(token.raw()));
            }
        }
    }
}
