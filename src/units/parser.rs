/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Parser for composite unit expressions
//!
//! Turns strings such as `kJ/(mol*A)`, `Angstrom/ps` or `Angstrom^{-3}` into a
//! [`CompositeUnit`]: a list of numerator terms and a list of denominator terms.
//! The grammar is small enough for a hand-written recursive descent parser:
//!
//! ```text
//! product := factor (('*' | '/') factor)*
//! factor  := (SYMBOL | '(' product ')') ('^' exponent)?
//! ```
//!
//! `/` is left-associative, so `kJ/mol/A` and `kJ/(mol*A)` parse to the same
//! terms. The symbol `1` stands for unity (`1/ps`).

use super::errors::{Result, UnitError};
use std::fmt;

/// A single unit symbol raised to a positive integer power
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTerm {
    pub symbol: String,
    pub power: u32,
}

/// A parsed unit expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeUnit {
    /// Terms that multiply
    pub numerator: Vec<UnitTerm>,
    /// Terms that divide
    pub denominator: Vec<UnitTerm>,
}

impl CompositeUnit {
    fn symbol(symbol: String) -> Self {
        if symbol == "1" {
            return Self::default();
        }
        Self {
            numerator: vec![UnitTerm { symbol, power: 1 }],
            denominator: Vec::new(),
        }
    }

    /// Returns true for an expression with no terms (unity)
    pub fn is_unity(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    /// Returns true if the expression is a bare symbol without powers
    pub fn is_simple(&self) -> bool {
        self.denominator.is_empty() && self.numerator.len() == 1 && self.numerator[0].power == 1
    }

    fn multiply(&mut self, rhs: CompositeUnit) {
        self.numerator.extend(rhs.numerator);
        self.denominator.extend(rhs.denominator);
    }

    fn divide(&mut self, rhs: CompositeUnit) {
        self.numerator.extend(rhs.denominator);
        self.denominator.extend(rhs.numerator);
    }

    fn powi(self, exponent: i32) -> Result<Self> {
        let scale = exponent.unsigned_abs();
        if scale == 0 {
            return Ok(Self::default());
        }
        let scaled = |terms: Vec<UnitTerm>| -> Result<Vec<UnitTerm>> {
            terms
                .into_iter()
                .map(|t| {
                    let power = t.power.checked_mul(scale).ok_or_else(|| {
                        UnitError::ParseError(format!("exponent of '{}' overflows", t.symbol))
                    })?;
                    Ok(UnitTerm {
                        symbol: t.symbol,
                        power,
                    })
                })
                .collect()
        };
        let (numerator, denominator) = if exponent < 0 {
            (scaled(self.denominator)?, scaled(self.numerator)?)
        } else {
            (scaled(self.numerator)?, scaled(self.denominator)?)
        };
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

fn write_terms(f: &mut fmt::Formatter<'_>, terms: &[UnitTerm]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            write!(f, "*")?;
        }
        write!(f, "{}", term.symbol)?;
        if term.power != 1 {
            write!(f, "^{}", term.power)?;
        }
    }
    Ok(())
}

impl fmt::Display for CompositeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator.is_empty() {
            write!(f, "1")?;
        } else {
            write_terms(f, &self.numerator)?;
        }
        match self.denominator.len() {
            0 => Ok(()),
            1 => {
                write!(f, "/")?;
                write_terms(f, &self.denominator)
            }
            _ => {
                write!(f, "/(")?;
                write_terms(f, &self.denominator)?;
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Symbol(String),
    Star,
    Slash,
    LParen,
    RParen,
    Power(i32),
}

fn is_operator(c: char) -> bool {
    matches!(c, '*' | '/' | '(' | ')' | '^')
}

fn read_exponent(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<i32> {
    let braced = chars.peek() == Some(&'{');
    if braced {
        chars.next();
    }
    let mut text = String::new();
    if let Some(&sign) = chars.peek() {
        if sign == '-' || sign == '+' {
            text.push(sign);
            chars.next();
        }
    }
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        text.push(c);
        chars.next();
    }
    if braced && chars.next() != Some('}') {
        return Err(UnitError::ParseError(format!(
            "unterminated exponent '{{{}'",
            text
        )));
    }
    text.parse::<i32>()
        .map_err(|_| UnitError::ParseError(format!("invalid exponent '{}'", text)))
}

fn tokenize(expr: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Power(read_exponent(&mut chars)?));
            }
            _ => {
                let mut symbol = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || is_operator(c) {
                        break;
                    }
                    symbol.push(c);
                    chars.next();
                }
                tokens.push(Token::Symbol(symbol));
            }
        }
    }

    Ok(tokens)
}

/// Deepest parenthesis nesting accepted by the parser
const MAX_DEPTH: usize = 64;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn product(&mut self) -> Result<CompositeUnit> {
        let mut unit = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    let rhs = self.factor()?;
                    unit.multiply(rhs);
                }
                Some(Token::Slash) => {
                    self.advance();
                    let rhs = self.factor()?;
                    unit.divide(rhs);
                }
                _ => return Ok(unit),
            }
        }
    }

    fn factor(&mut self) -> Result<CompositeUnit> {
        let base = match self.advance() {
            Some(Token::Symbol(symbol)) => CompositeUnit::symbol(symbol),
            Some(Token::LParen) => {
                if self.depth >= MAX_DEPTH {
                    return Err(UnitError::ParseError(
                        "expression nested too deeply".to_string(),
                    ));
                }
                self.depth += 1;
                let inner = self.product()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => inner,
                    _ => return Err(UnitError::ParseError("unbalanced parentheses".to_string())),
                }
            }
            Some(token) => {
                return Err(UnitError::ParseError(format!(
                    "unexpected token {:?}",
                    token
                )))
            }
            None => {
                return Err(UnitError::ParseError(
                    "unexpected end of expression".to_string(),
                ))
            }
        };

        if let Some(Token::Power(exponent)) = self.peek() {
            let exponent = *exponent;
            self.advance();
            return base.powi(exponent);
        }
        Ok(base)
    }
}

/// Parse a unit expression into numerator and denominator terms
pub fn parse_unit(expr: &str) -> Result<CompositeUnit> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(UnitError::ParseError("empty unit expression".to_string()));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let unit = parser.product()?;
    if let Some(token) = parser.peek() {
        return Err(UnitError::ParseError(format!(
            "unexpected token {:?} in '{}'",
            token, expr
        )));
    }

    log::trace!("parsed unit '{}' as {:?}", expr, unit);
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(terms: &[UnitTerm]) -> Vec<&str> {
        terms.iter().map(|t| t.symbol.as_str()).collect()
    }

    #[test]
    fn test_parse_simple_symbol() {
        let unit = parse_unit("nm").unwrap();
        assert!(unit.is_simple());
        assert_eq!(symbols(&unit.numerator), vec!["nm"]);
    }

    #[test]
    fn test_parse_parenthesised_denominator() {
        let unit = parse_unit("kJ/(mol*A)").unwrap();
        assert_eq!(symbols(&unit.numerator), vec!["kJ"]);
        assert_eq!(symbols(&unit.denominator), vec!["mol", "A"]);
    }

    #[test]
    fn test_chained_division_is_left_associative() {
        let chained = parse_unit("kJ/mol/A").unwrap();
        let grouped = parse_unit("kJ/(mol*A)").unwrap();
        assert_eq!(chained, grouped);
    }

    #[test]
    fn test_negative_braced_exponent() {
        let unit = parse_unit("Angstrom^{-3}").unwrap();
        assert!(unit.numerator.is_empty());
        assert_eq!(unit.denominator[0].symbol, "Angstrom");
        assert_eq!(unit.denominator[0].power, 3);
    }

    #[test]
    fn test_unity_numerator() {
        let unit = parse_unit("1/ps").unwrap();
        assert!(unit.numerator.is_empty());
        assert_eq!(symbols(&unit.denominator), vec!["ps"]);
        assert!(parse_unit("1").unwrap().is_unity());
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_unit("kJ/(mol*A)").unwrap().to_string(), "kJ/(mol*A)");
        assert_eq!(parse_unit("m^2/s").unwrap().to_string(), "m^2/s");
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| format!("{}A{}", "(".repeat(depth), ")".repeat(depth));
        assert!(parse_unit(&nested(MAX_DEPTH)).is_ok());
        assert_eq!(
            parse_unit(&nested(MAX_DEPTH + 1)),
            Err(UnitError::ParseError("expression nested too deeply".to_string()))
        );
    }

    #[test]
    fn test_group_power_overflow() {
        assert!(matches!(
            parse_unit("(A^70000)^70000"),
            Err(UnitError::ParseError(_))
        ));
    }

    #[test]
    fn test_malformed_expressions() {
        let deep = format!("{}A{}", "(".repeat(200_000), ")".repeat(200_000));
        for expr in ["", "   ", "kJ/", "kJ/(mol*A", "kJ)", "*A", "A^x", "A^{2", "A B", deep.as_str()] {
            assert!(
                matches!(parse_unit(expr), Err(UnitError::ParseError(_))),
                "expected parse error for {:?}",
                expr
            );
        }
    }
}
