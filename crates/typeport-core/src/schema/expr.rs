//! Type expressions used by schema files.
//!
//! # Syntax
//!
//! - `*T`: nullable reference to `T`
//! - `[]T`: slice of `T`
//! - `[4]T`: fixed array of `T`
//! - `map[K]V`: map from `K` to `V`
//! - `int64`, `string`, `u8`, ...: primitive
//! - `any`: opaque value
//! - `Name`, `pkg.Name`: declared type

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum Token<'src> {
    #[token("*")]
    Star,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("map")]
    Map,

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<usize>().ok())]
    Number(usize),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*", |lex| lex.slice())]
    Ident(&'src str),
}

/// Parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr<'src> {
    Pointer(Box<TypeExpr<'src>>),
    Slice(Box<TypeExpr<'src>>),
    Array(usize, Box<TypeExpr<'src>>),
    Map(Box<TypeExpr<'src>>, Box<TypeExpr<'src>>),
    /// Primitive, `any`, or declared type key.
    Name(&'src str),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {span:?}")]
pub struct ExprError {
    pub message: String,
    pub span: std::ops::Range<usize>,
}

/// Parse a complete type expression.
pub fn parse_type_expr(input: &str) -> Result<TypeExpr<'_>, ExprError> {
    let mut parser = Parser::new(input)?;
    let expr = parser.parse_expr()?;
    if parser.peek().is_some() {
        return Err(ExprError {
            message: "unexpected trailing input".to_string(),
            span: parser.current_span(),
        });
    }
    Ok(expr)
}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, std::ops::Range<usize>)>,
    pos: usize,
    input: &'src str,
}

impl<'src> Parser<'src> {
    fn new(input: &'src str) -> Result<Self, ExprError> {
        let lexer = Token::lexer(input);
        let mut tokens = Vec::new();

        for (result, span) in lexer.spanned() {
            match result {
                Ok(token) => tokens.push((token, span)),
                Err(_) => {
                    return Err(ExprError {
                        message: format!("unexpected input: {:?}", &input[span.clone()]),
                        span,
                    });
                }
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            input,
        })
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> std::ops::Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, s)| s.clone())
            .unwrap_or(self.input.len()..self.input.len())
    }

    fn expect(&mut self, expected: Token<'src>) -> Result<(), ExprError> {
        let span = self.current_span();
        match self.advance() {
            Some(t) if std::mem::discriminant(&t) == std::mem::discriminant(&expected) => Ok(()),
            Some(t) => Err(ExprError {
                message: format!("expected {:?}, got {:?}", expected, t),
                span,
            }),
            None => Err(ExprError {
                message: format!("expected {:?}, got end of input", expected),
                span,
            }),
        }
    }

    fn parse_expr(&mut self) -> Result<TypeExpr<'src>, ExprError> {
        let span = self.current_span();
        match self.advance() {
            Some(Token::Star) => Ok(TypeExpr::Pointer(Box::new(self.parse_expr()?))),
            Some(Token::LBracket) => self.parse_sequence(),
            Some(Token::Map) => {
                self.expect(Token::LBracket)?;
                let key = self.parse_expr()?;
                self.expect(Token::RBracket)?;
                let value = self.parse_expr()?;
                Ok(TypeExpr::Map(Box::new(key), Box::new(value)))
            }
            Some(Token::Ident(name)) => Ok(TypeExpr::Name(name)),
            Some(t) => Err(ExprError {
                message: format!("expected type, got {:?}", t),
                span,
            }),
            None => Err(ExprError {
                message: "expected type, got end of input".to_string(),
                span,
            }),
        }
    }

    /// After `[`: either `]T` or `N]T`.
    fn parse_sequence(&mut self) -> Result<TypeExpr<'src>, ExprError> {
        if let Some(Token::Number(len)) = self.peek().cloned() {
            self.advance();
            self.expect(Token::RBracket)?;
            let elem = self.parse_expr()?;
            return Ok(TypeExpr::Array(len, Box::new(elem)));
        }

        self.expect(Token::RBracket)?;
        let elem = self.parse_expr()?;
        Ok(TypeExpr::Slice(Box::new(elem)))
    }
}
