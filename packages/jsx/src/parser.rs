//! JSX fragment parser
//!
//! Converts a code-block fragment into a single tree node. The parser is
//! scoped to fragments: exactly one root element or fragment, optionally
//! surrounded by whitespace. Anything else after the root is an error.
//!
//! Expression containers are captured as raw text with brace-depth tracking;
//! the expression grammar itself is not parsed here.

use crate::ast::{
    AttrValue, Attribute, Comment, Element, ExpressionContainer, Fragment, Node, Text,
};
use crate::parse_util::{ParseError, ParseLocation, ParseSpan};

/// Parse a source fragment into a single root node.
///
/// Fails with `ParseError` when the fragment is empty, structurally
/// malformed, or carries trailing content after the root.
pub fn parse_fragment(source: &str) -> Result<Node, ParseError> {
    let mut cursor = Cursor::new(source);
    cursor.skip_whitespace();

    if cursor.peek() != Some('<') {
        return Err(cursor.error_here("expected a single element or fragment"));
    }

    let node = cursor.consume_node()?;

    cursor.skip_whitespace();
    if !cursor.at_end() {
        return Err(cursor.error_here("unexpected content after fragment root"));
    }

    Ok(node)
}

/// Character cursor with line/column tracking.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Cursor {
    fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            pos: 0,
            line: 0,
            col: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn location(&self) -> ParseLocation {
        ParseLocation::new(self.pos, self.line, self.col)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error_here(format!("expected \"{}\"", expected))),
        }
    }

    fn error_here(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(ParseSpan::at(self.location()), msg)
    }

    fn error_from(&self, start: ParseLocation, msg: impl Into<String>) -> ParseError {
        ParseError::new(ParseSpan::new(start, self.location()), msg)
    }

    /// Consume one element or fragment. The cursor must sit on `<`.
    fn consume_node(&mut self) -> Result<Node, ParseError> {
        let start = self.location();
        self.expect('<')?;

        // <>...</>
        if self.peek() == Some('>') {
            self.advance();
            let children = self.consume_children()?;
            if self.at_end() {
                return Err(self.error_from(start, "unclosed fragment"));
            }
            self.advance(); // <
            self.advance(); // /
            self.skip_whitespace();
            self.expect('>')
                .map_err(|_| self.error_here("expected \"</>\" to close fragment"))?;
            return Ok(Node::Fragment(Fragment { children }));
        }

        let name = self.consume_tag_name()?;
        let attrs = self.consume_attributes()?;

        if self.peek() == Some('/') {
            self.advance();
            self.expect('>')?;
            return Ok(Node::Element(Element {
                name,
                attrs,
                children: Vec::new(),
                is_self_closing: true,
            }));
        }

        self.expect('>')?;

        let children = self.consume_children()?;
        if self.at_end() {
            return Err(self.error_from(start, format!("unclosed element \"{}\"", name)));
        }

        self.advance(); // <
        self.advance(); // /
        self.skip_whitespace();
        let close_name = self.consume_tag_name()?;
        self.skip_whitespace();
        self.expect('>')?;

        if close_name != name {
            return Err(self.error_from(
                start,
                format!(
                    "unexpected closing tag \"{}\", expected \"{}\"",
                    close_name, name
                ),
            ));
        }

        Ok(Node::Element(Element {
            name,
            attrs,
            children,
            is_self_closing: false,
        }))
    }

    /// Consume children up to a closing tag (`</`) or end of input. The
    /// closing tag itself is left for the caller.
    fn consume_children(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut children = Vec::new();

        loop {
            match self.peek() {
                None => break,
                Some('<') if self.peek_at(1) == Some('/') => break,
                Some('<') => children.push(self.consume_node()?),
                Some('{') => children.push(self.consume_expression_child()?),
                Some(_) => {
                    let mut value = String::new();
                    while let Some(ch) = self.peek() {
                        if ch == '<' || ch == '{' {
                            break;
                        }
                        value.push(ch);
                        self.advance();
                    }
                    children.push(Node::Text(Text { value }));
                }
            }
        }

        Ok(children)
    }

    /// Consume a `{...}` child: a comment or an expression container.
    fn consume_expression_child(&mut self) -> Result<Node, ParseError> {
        let body = self.consume_braced_text()?;

        if body.starts_with("/*") && body.ends_with("*/") && body.len() >= 4 {
            let value = body[2..body.len() - 2].trim().to_string();
            return Ok(Node::Comment(Comment { value }));
        }

        Ok(Node::ExpressionContainer(ExpressionContainer {
            expression: body,
        }))
    }

    /// Consume balanced braces and return the trimmed inner text. The cursor
    /// must sit on `{`. Braces inside string literals do not count toward
    /// nesting depth.
    fn consume_braced_text(&mut self) -> Result<String, ParseError> {
        let start = self.location();
        self.advance(); // {

        let mut depth = 1usize;
        let mut inner = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '{' => {
                    depth += 1;
                    inner.push(ch);
                    self.advance();
                }
                '}' => {
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        return Ok(inner.trim().to_string());
                    }
                    inner.push(ch);
                }
                '"' | '\'' | '`' => self.consume_string_literal(ch, &mut inner),
                _ => {
                    inner.push(ch);
                    self.advance();
                }
            }
        }

        Err(self.error_from(start, "unterminated expression"))
    }

    /// Copy a quoted string (including quotes and escapes) into `out`.
    fn consume_string_literal(&mut self, quote: char, out: &mut String) {
        out.push(quote);
        self.advance();

        while let Some(ch) = self.peek() {
            if ch == '\\' {
                out.push(ch);
                self.advance();
                if let Some(escaped) = self.advance() {
                    out.push(escaped);
                }
                continue;
            }
            out.push(ch);
            self.advance();
            if ch == quote {
                return;
            }
        }
        // Unterminated string: the enclosing brace scan reports the error.
    }

    fn consume_tag_name(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(ch) if is_name_start(ch) => {}
            _ => return Err(self.error_here("expected tag name")),
        }

        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if !is_name_char(ch) {
                break;
            }
            name.push(ch);
            self.advance();
        }
        Ok(name)
    }

    fn consume_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attrs = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some('/') | Some('>') => break,
                Some(ch) if is_name_start(ch) => {
                    let name = self.consume_attr_name();
                    self.skip_whitespace();

                    if self.peek() != Some('=') {
                        attrs.push(Attribute { name, value: None });
                        continue;
                    }
                    self.advance();
                    self.skip_whitespace();

                    let value = match self.peek() {
                        Some(quote @ ('"' | '\'')) => {
                            AttrValue::Literal(self.consume_quoted(quote)?)
                        }
                        Some('{') => AttrValue::Expression(self.consume_braced_text()?),
                        _ => return Err(self.error_here("expected attribute value")),
                    };
                    attrs.push(Attribute {
                        name,
                        value: Some(value),
                    });
                }
                Some(ch) => {
                    return Err(self.error_here(format!("unexpected character \"{}\" in tag", ch)))
                }
            }
        }

        Ok(attrs)
    }

    fn consume_attr_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if !is_name_char(ch) {
                break;
            }
            name.push(ch);
            self.advance();
        }
        name
    }

    /// Consume a quoted attribute value, returning the text between quotes.
    fn consume_quoted(&mut self, quote: char) -> Result<String, ParseError> {
        let start = self.location();
        self.advance(); // opening quote

        let mut value = String::new();
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == quote {
                return Ok(value);
            }
            value.push(ch);
        }

        Err(self.error_from(start, "unterminated attribute value"))
    }
}

fn is_name_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '$' | '-' | '.' | ':')
}
