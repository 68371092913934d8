use crate::ast::{BinaryOp, Expr, ExprKind, FunctionDef, Literal, Span, UnaryOp};
use crate::error::ParseError;
use chumsky::prelude::*;
use chumsky::Stream;
use lexer::token::Token;

/// Parser for a single fixture expression, optionally terminated by `;`
pub fn parser() -> impl Parser<Token, Expr, Error = ParseError> {
    expr_parser()
        .then_ignore(just(Token::Semicolon).or_not())
        .then_ignore(end())
}

/// Lex and parse `source`, keeping byte spans for diagnostics
pub fn parse_source(source: &str) -> Result<Expr, Vec<ParseError>> {
    let tokens = lexer::lex_spanned(source);
    let eoi = source.len()..source.len();
    parser().parse(Stream::from_iter(eoi, tokens.into_iter()))
}

// Function and class bodies: balanced braces, contents skipped
fn block_parser() -> impl Parser<Token, (), Error = ParseError> + Clone {
    recursive(|block| {
        block
            .or(none_of(vec![Token::LBrace, Token::RBrace, Token::Error]).ignored())
            .repeated()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .ignored()
    })
}

fn expr_parser() -> impl Parser<Token, Expr, Error = ParseError> + Clone {
    recursive(|expr| {
        let ident = select! { Token::Identifier(name) => name };
        let block = block_parser();

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let params = ident
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let number = select! { Token::Number(n) => n }.try_map(|n: String, span: Span| {
            n.parse::<f64>()
                .map(Literal::Number)
                .map_err(|e| ParseError::custom(span, format!("invalid number literal '{}': {}", n, e)))
        });

        let bigint = select! { Token::BigInt(n) => n }.try_map(|n: String, span: Span| {
            n.parse::<i128>()
                .map(Literal::BigInt)
                .map_err(|_| ParseError::custom(span, format!("BigInt literal {}n is too large", n)))
        });

        let literal = number
            .or(bigint)
            .or(select! {
                Token::String(s) => Literal::String(s),
                Token::True => Literal::Bool(true),
                Token::False => Literal::Bool(false),
                Token::Null => Literal::Null,
            })
            .map_with_span(|lit, span| Expr::new(ExprKind::Literal(lit), span));

        let identifier = ident
            .clone()
            .map_with_span(|name, span| Expr::new(ExprKind::Identifier(name), span));

        let array_literal = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map_with_span(|items, span| Expr::new(ExprKind::Array(items), span));

        // Keys: `a`, "a" or 1 (numeric keys keep their source text)
        let key = ident.clone().or(select! {
            Token::String(s) => s,
            Token::Number(n) => n,
        });

        let object_literal = key
            .then_ignore(just(Token::Colon))
            .then(expr.clone())
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map_with_span(|props, span| Expr::new(ExprKind::Object(props), span));

        // new Date, new Date(), new Set([1, 2])
        let new_expr = just(Token::New)
            .ignore_then(ident.clone())
            .then(args.clone().or_not())
            .map_with_span(|(constructor, args), span| {
                Expr::new(
                    ExprKind::New {
                        constructor,
                        args: args.unwrap_or_default(),
                    },
                    span,
                )
            });

        // function f() {}, function* g() {}, async function* () {}
        let function = just(Token::Async)
            .or_not()
            .then_ignore(just(Token::Function))
            .then(just(Token::Star).or_not())
            .then(ident.clone().or_not())
            .then(params.clone())
            .then_ignore(block.clone())
            .map_with_span(|(((is_async, star), name), params), span| {
                Expr::new(
                    ExprKind::Function(FunctionDef {
                        name,
                        params,
                        is_async: is_async.is_some(),
                        is_generator: star.is_some(),
                        is_arrow: false,
                    }),
                    span,
                )
            });

        let class = just(Token::Class)
            .ignore_then(ident.clone().or_not())
            .then(just(Token::Extends).ignore_then(ident.clone()).or_not())
            .then_ignore(block.clone())
            .map_with_span(|(name, extends), span| Expr::new(ExprKind::Class { name, extends }, span));

        let atom = literal
            .or(new_expr)
            .or(function)
            .or(class)
            .or(array_literal)
            .or(object_literal)
            .or(identifier)
            .or(expr.clone().delimited_by(just(Token::LParen), just(Token::RParen)))
            .boxed();

        let call = atom
            .then(args.map_with_span(|args, span: Span| (args, span)).repeated())
            .foldl(|callee, (args, span)| {
                let span = callee.span.start..span.end;
                Expr::new(
                    ExprKind::Call {
                        callee: Box::new(callee),
                        args,
                    },
                    span,
                )
            });

        // Prefix operators (!x, -x, +x, typeof x, void x), right associative
        let unary = choice((
            just(Token::Not).to(UnaryOp::Not),
            just(Token::Minus).to(UnaryOp::Negate),
            just(Token::Plus).to(UnaryOp::Plus),
            just(Token::Typeof).to(UnaryOp::Typeof),
            just(Token::Void).to(UnaryOp::Void),
        ))
        .map_with_span(|op, span: Span| (op, span))
        .repeated()
        .then(call)
        .foldr(|(op, span), expr| {
            let span = span.start..expr.span.end;
            Expr::new(
                ExprKind::Unary {
                    op,
                    expr: Box::new(expr),
                },
                span,
            )
        })
        .boxed();

        let product = unary
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Mod))
                    .then(unary)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
            .boxed();

        let equality = sum
            .clone()
            .then(
                choice((
                    just(Token::DoubleEq).to(BinaryOp::LooseEq),
                    just(Token::NotEq).to(BinaryOp::LooseNotEq),
                    just(Token::TripleEq).to(BinaryOp::StrictEq),
                    just(Token::NotDoubleEq).to(BinaryOp::StrictNotEq),
                ))
                .then(sum)
                .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
            .boxed();

        // Arrow functions are tried first so `(a) => a` is not read as a
        // parenthesised identifier
        let arrow = just(Token::Async)
            .or_not()
            .then(ident.map(|p| vec![p]).or(params))
            .then_ignore(just(Token::FatArrow))
            .then_ignore(block.or(expr.clone().ignored()))
            .map_with_span(|(is_async, params), span| {
                Expr::new(
                    ExprKind::Function(FunctionDef {
                        name: None,
                        params,
                        is_async: is_async.is_some(),
                        is_generator: false,
                        is_arrow: true,
                    }),
                    span,
                )
            });

        arrow.or(equality)
    })
}
