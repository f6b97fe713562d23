//! Lexer for captured declaration text using Logos
//!
//! The pattern recognizers only need word boundaries and the punctuation of a
//! call (`(`, `)`, `,`), so the token set is deliberately tiny.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[regex(r"[^ \t\r\n(),]+")]
    Word,
}

/// Token with text and kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: DeclToken,
    pub text: &'a str,
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = DeclToken::lexer(source);

    while let Some(result) = lexer.next() {
        if let Ok(kind) = result {
            tokens.push(Token {
                kind,
                text: lexer.slice(),
            });
        }
    }

    tokens
}

/// Words of `source` in order, punctuation and whitespace dropped.
pub fn words(source: &str) -> impl Iterator<Item = &str> {
    tokenize(source)
        .into_iter()
        .filter(|token| token.kind == DeclToken::Word)
        .map(|token| token.text)
}
