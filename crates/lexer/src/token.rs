use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // Ignore spaces, tabs and line breaks automatically
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token {
    // --- Keywords ---
    #[token("new")]
    New,

    #[token("function")]
    Function,

    #[token("class")]
    Class,

    #[token("extends")]
    Extends,

    #[token("async")]
    Async,

    #[token("typeof")]
    Typeof,

    #[token("void")]
    Void,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    // --- Literals ---

    // Identifiers: bindings and globals (ex: "NaN", "Date", "$value")
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Numbers keep their source text; the parser turns them into f64
    // (ex: 42, 3.14, .5, 1e3)
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    // BigInt literals without the trailing `n` (ex: 10n -> "10")
    #[regex(r"[0-9]+n", |lex| lex.slice().trim_end_matches('n').to_string())]
    BigInt(String),

    // Strings with their escapes already decoded (ex: "abc", 'abc')
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| unescape(lex.slice()))]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, |lex| unescape(lex.slice()))]
    String(String),

    // Template literals keep their raw text; interpolations are never evaluated
    #[regex(r"`([^`\\]|\\.)*`", |lex| lex.slice().to_string())]
    Template(String),

    // --- Operators ---
    #[token("!")]
    Not,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("==")]
    DoubleEq,

    #[token("!=")]
    NotEq,

    #[token("===")]
    TripleEq,

    #[token("!==")]
    NotDoubleEq,

    #[token("=>")]
    FatArrow, // Arrow function (x => x)

    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    // Operators with no meaning in fixtures (`=`, `<=`, `&&`, `??`). They only
    // appear inside skipped function and class bodies.
    #[regex(r"[=<>&|?^~]+", |lex| lex.slice().to_string())]
    Punct(String),

    // --- Delimiters ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket, // Array

    #[token("]")]
    RBracket,

    // Placeholder for input the lexer could not recognise
    Error,
}

/// Strip the surrounding quotes of a string literal and decode its escapes.
///
/// Returns `None` for a malformed `\u`/`\x` escape so the lexer reports an error.
fn unescape(raw: &str) -> Option<String> {
    let body = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => out.push(hex_escape(&mut chars, 2)?),
            'u' => out.push(hex_escape(&mut chars, 4)?),
            other => out.push(other),
        }
    }

    Some(out)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let hex: String = chars.take(digits).collect();
    if hex.chars().count() != digits {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}

impl Token {
    /// Human readable description used in diagnostics
    pub fn describe(&self) -> String {
        match self {
            Token::Identifier(name) => format!("identifier '{}'", name),
            Token::Number(n) => format!("number {}", n),
            Token::BigInt(n) => format!("bigint {}n", n),
            Token::String(s) => format!("string {:?}", s),
            Token::Template(_) => "template literal".to_string(),
            Token::Error => "invalid input".to_string(),
            other => format!("'{}'", other),
        }
    }
}

// Prints the token the way it is written in source
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Token::New => "new",
            Token::Function => "function",
            Token::Class => "class",
            Token::Extends => "extends",
            Token::Async => "async",
            Token::Typeof => "typeof",
            Token::Void => "void",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::Identifier(name) => return write!(f, "{}", name),
            Token::Number(n) => return write!(f, "{}", n),
            Token::BigInt(n) => return write!(f, "{}n", n),
            Token::String(s) => return write!(f, "{:?}", s),
            Token::Template(raw) | Token::Punct(raw) => return write!(f, "{}", raw),
            Token::Not => "!",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::DoubleEq => "==",
            Token::NotEq => "!=",
            Token::TripleEq => "===",
            Token::NotDoubleEq => "!==",
            Token::FatArrow => "=>",
            Token::Dot => ".",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Error => "<error>",
        };
        write!(f, "{}", text)
    }
}
