//! Recursive-descent parser for the formula language.
//!
//! Precedence, low to high: `||` < `&&` < comparisons < additive <
//! multiplicative < power < unary < atoms. Binary operators at the same
//! level associate left.

use formkit_core::{FormError, FormResult};
use formkit_schema::Value;

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::lexer::{tokenize, Token};

/// Parses a formula string into an expression tree.
///
/// # Errors
///
/// Returns a `Formula` error for lexing failures, malformed expressions,
/// and trailing tokens after a complete expression.
pub fn parse(source: &str) -> FormResult<Expr> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    if let Some(tok) = parser.peek() {
        return Err(FormError::Formula(format!(
            "unexpected trailing token {tok:?}"
        )));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token) -> FormResult<()> {
        match self.advance() {
            Some(ref tok) if tok == expected => Ok(()),
            Some(tok) => Err(FormError::Formula(format!(
                "expected {expected:?}, found {tok:?}"
            ))),
            None => Err(FormError::Formula(format!(
                "expected {expected:?}, found end of input"
            ))),
        }
    }

    fn expression(&mut self) -> FormResult<Expr> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> FormResult<Expr> {
        let mut expr = self.and_expr()?;
        while self.peek() == Some(&Token::OrOr) {
            self.advance();
            let right = self.and_expr()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op: BinaryOp::Or,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn and_expr(&mut self) -> FormResult<Expr> {
        let mut expr = self.comparison_expr()?;
        while self.peek() == Some(&Token::AndAnd) {
            self.advance();
            let right = self.comparison_expr()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op: BinaryOp::And,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn comparison_expr(&mut self) -> FormResult<Expr> {
        let mut expr = self.additive_expr()?;
        while let Some(op) = match self.peek() {
            Some(Token::EqEq) => Some(BinaryOp::Equal),
            Some(Token::NotEq) => Some(BinaryOp::NotEqual),
            Some(Token::Lt) => Some(BinaryOp::LessThan),
            Some(Token::Le) => Some(BinaryOp::LessThanOrEqual),
            Some(Token::Gt) => Some(BinaryOp::GreaterThan),
            Some(Token::Ge) => Some(BinaryOp::GreaterThanOrEqual),
            _ => None,
        } {
            self.advance();
            let right = self.additive_expr()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn additive_expr(&mut self) -> FormResult<Expr> {
        let mut expr = self.multiplicative_expr()?;
        while let Some(op) = match self.peek() {
            Some(Token::Plus) => Some(BinaryOp::Add),
            Some(Token::Minus) => Some(BinaryOp::Subtract),
            _ => None,
        } {
            self.advance();
            let right = self.multiplicative_expr()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn multiplicative_expr(&mut self) -> FormResult<Expr> {
        let mut expr = self.power_expr()?;
        while let Some(op) = match self.peek() {
            Some(Token::Star) => Some(BinaryOp::Multiply),
            Some(Token::Slash) => Some(BinaryOp::Divide),
            _ => None,
        } {
            self.advance();
            let right = self.power_expr()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn power_expr(&mut self) -> FormResult<Expr> {
        let mut expr = self.unary_expr()?;
        while self.peek() == Some(&Token::Caret) {
            self.advance();
            let right = self.unary_expr()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op: BinaryOp::Power,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn unary_expr(&mut self) -> FormResult<Expr> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                let expr = self.unary_expr()?;
                Ok(Expr::Unary {
                    op: UnaryOp::Negate,
                    expr: Box::new(expr),
                })
            }
            Some(Token::Bang) => {
                self.advance();
                let expr = self.unary_expr()?;
                Ok(Expr::Unary {
                    op: UnaryOp::Not,
                    expr: Box::new(expr),
                })
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> FormResult<Expr> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Literal(Value::Number(n))),
            Some(Token::Str(s)) => Ok(Expr::Literal(Value::String(s))),
            Some(Token::Ident(name)) => match name.as_str() {
                "true" => Ok(Expr::Literal(Value::Bool(true))),
                "false" => Ok(Expr::Literal(Value::Bool(false))),
                "null" => Ok(Expr::Literal(Value::Null)),
                _ => {
                    if self.peek() == Some(&Token::LParen) {
                        self.call(name)
                    } else {
                        Ok(Expr::Identifier(name))
                    }
                }
            },
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            }
            Some(tok) => Err(FormError::Formula(format!("unexpected token {tok:?}"))),
            None => Err(FormError::Formula("unexpected end of input".to_string())),
        }
    }

    fn call(&mut self, name: String) -> FormResult<Expr> {
        self.expect(&Token::LParen)?;
        let mut args = Vec::new();
        if self.peek() != Some(&Token::RParen) {
            loop {
                args.push(self.expression()?);
                if self.peek() == Some(&Token::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(&Token::RParen)?;
        Ok(Expr::Call { name, args })
    }
}
