pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

#[cfg(test)]
mod tests;

/// Tokenize a source string and return a Vec of tokens
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize a source string keeping byte spans.
///
/// Unrecognised input becomes `Token::Error` so the parser can point at it.
pub fn lex_spanned(source: &str) -> Vec<(Token, Range<usize>)> {
    Token::lexer(source)
        .spanned()
        .map(|(t, span)| (t.unwrap_or(Token::Error), span))
        .collect()
}
