//! Textual type expressions used in environment files.
//!
//! ```text
//! type       := annotation* name arguments? '?'?
//! annotation := '@' name ( '(' ident '=' value ( ',' ident '=' value )* ')' )?
//! arguments  := '<' projection ( ',' projection )* '>'
//! projection := '*' | ( 'in' | 'out' )? type
//! name       := ident ( '.' ident )*
//! value      := string | integer | 'true' | 'false'
//! ```
//!
//! Parsing only builds the syntax tree; names are resolved against a
//! declaration store by [`crate::environment`].

use anyhow::{Result, bail};
use fnty_solver::Variance;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeExpr {
    pub annotations: Vec<AnnotationExpr>,
    pub name: String,
    pub arguments: Vec<ProjectionExpr>,
    pub nullable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationExpr {
    pub name: String,
    pub arguments: Vec<(String, ValueExpr)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueExpr {
    String(String),
    Int(i64),
    Bool(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectionExpr {
    Star,
    Type { variance: Variance, ty: TypeExpr },
}

/// Parse a complete type expression; trailing input is an error.
pub fn parse_type_expr(input: &str) -> Result<TypeExpr> {
    let mut parser = Parser { input, pos: 0 };
    let ty = parser.parse_type()?;
    parser.skip_ws();
    if let Some(c) = parser.peek() {
        bail!("{}: unexpected `{c}` after type", parser.location());
    }
    Ok(ty)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn location(&self) -> String {
        format!("`{}` at offset {}", self.input, self.pos)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if !self.eat(expected) {
            bail!("{}: expected `{expected}`", self.location());
        }
        Ok(())
    }

    fn ident(&mut self) -> Result<&'a str> {
        self.skip_ws();
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' => {
                self.bump();
            }
            _ => bail!("{}: expected an identifier", self.location()),
        }
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        Ok(&self.input[start..self.pos])
    }

    fn qualified_name(&mut self) -> Result<String> {
        let mut name = self.ident()?.to_string();
        while self.peek() == Some('.') {
            self.bump();
            name.push('.');
            name.push_str(self.ident()?);
        }
        Ok(name)
    }

    fn parse_type(&mut self) -> Result<TypeExpr> {
        let mut annotations = Vec::new();
        while self.eat('@') {
            annotations.push(self.parse_annotation()?);
        }

        let name = self.qualified_name()?;

        let mut arguments = Vec::new();
        if self.eat('<') {
            loop {
                arguments.push(self.parse_projection()?);
                if self.eat('>') {
                    break;
                }
                self.expect(',')?;
            }
        }

        let nullable = self.eat('?');
        Ok(TypeExpr {
            annotations,
            name,
            arguments,
            nullable,
        })
    }

    fn parse_annotation(&mut self) -> Result<AnnotationExpr> {
        let name = self.qualified_name()?;
        let mut arguments = Vec::new();
        if self.eat('(') {
            loop {
                let key = self.ident()?.to_string();
                self.expect('=')?;
                arguments.push((key, self.parse_value()?));
                if self.eat(')') {
                    break;
                }
                self.expect(',')?;
            }
        }
        Ok(AnnotationExpr { name, arguments })
    }

    fn parse_value(&mut self) -> Result<ValueExpr> {
        self.skip_ws();
        match self.peek() {
            Some('"') => {
                self.bump();
                let mut value = String::new();
                loop {
                    match self.bump() {
                        Some('"') => return Ok(ValueExpr::String(value)),
                        Some('\\') => match self.bump() {
                            Some(c @ ('"' | '\\')) => value.push(c),
                            _ => bail!("{}: invalid escape in string", self.location()),
                        },
                        Some(c) => value.push(c),
                        None => bail!("{}: unterminated string", self.location()),
                    }
                }
            }
            Some(c) if c == '-' || c.is_ascii_digit() => {
                let start = self.pos;
                self.bump();
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.bump();
                }
                let text = &self.input[start..self.pos];
                match text.parse() {
                    Ok(n) => Ok(ValueExpr::Int(n)),
                    Err(_) => bail!("{}: invalid integer `{text}`", self.location()),
                }
            }
            _ => match self.ident()? {
                "true" => Ok(ValueExpr::Bool(true)),
                "false" => Ok(ValueExpr::Bool(false)),
                other => bail!("{}: expected a value, found `{other}`", self.location()),
            },
        }
    }

    fn parse_projection(&mut self) -> Result<ProjectionExpr> {
        if self.eat('*') {
            return Ok(ProjectionExpr::Star);
        }

        // `in T` / `out T`; a bare `in` or `out` is an ordinary name.
        let checkpoint = self.pos;
        self.skip_ws();
        let variance = match self.ident() {
            Ok("in") => Some(Variance::In),
            Ok("out") => Some(Variance::Out),
            _ => None,
        };
        let variance = match variance {
            Some(variance) if self.peek().is_some_and(char::is_whitespace) => variance,
            _ => {
                self.pos = checkpoint;
                Variance::Invariant
            }
        };

        Ok(ProjectionExpr::Type {
            variance,
            ty: self.parse_type()?,
        })
    }
}

#[cfg(test)]
#[path = "../tests/type_expr_tests.rs"]
mod tests;
