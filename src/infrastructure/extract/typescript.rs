//! TypeScript interface extractor
//!
//! Recognizes `[export] [declare] interface Name [extends A, B] { … }` and
//! lifts depth-1 properties and ignore-directive comments into a frontend
//! `TypeDeclaration`. Nested object types, method signatures and index
//! signatures are not fields.

use std::path::Path;

use regex::Regex;

use super::{directive_regex, line_of, parse_directive, Directive, ExtractOptions};
use crate::domain::entities::{FieldDeclaration, TypeDeclaration};
use crate::domain::ports::ExtractError;
use crate::domain::value_objects::Side;

pub struct TypeScriptExtractor {
    header: Regex,
    property: Regex,
    directive: Regex,
}

impl TypeScriptExtractor {
    pub fn new(options: &ExtractOptions) -> Result<Self, ExtractError> {
        let header = Regex::new(
            r"(?m)^[ \t]*(?:export[ \t]+)?(?:default[ \t]+)?(?:declare[ \t]+)?interface[ \t]+([A-Za-z_$][\w$]*)",
        )
        .map_err(|e| invalid_pattern("interface", e))?;
        let property = Regex::new(
            r#"^(?:readonly\s+)?(?:"([^"]+)"|'([^']+)'|([A-Za-z_$][\w$]*))\s*(\?)?\s*:"#,
        )
        .map_err(|e| invalid_pattern("property", e))?;

        Ok(Self {
            header,
            property,
            directive: directive_regex(&options.marker)?,
        })
    }

    pub fn extract(&self, source: &str, path: &Path) -> Result<Vec<TypeDeclaration>, ExtractError> {
        let mut declarations = Vec::new();
        let mut resume = 0;
        let comments = comment_spans(source.as_bytes());

        for caps in self.header.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() < resume || in_spans(&comments, name.start()) {
                continue;
            }
            let Some(head) = scan_header(source.as_bytes(), whole.end()) else {
                continue;
            };
            let name = name.as_str();
            let open = head.open;
            let close = matching_brace(source.as_bytes(), open).ok_or_else(|| {
                ExtractError::Unterminated {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                    line: line_of(source, whole.start()),
                }
            })?;
            resume = close + 1;

            let mut decl = TypeDeclaration::new(name, Side::Frontend).with_origin(path);
            if let Some((start, end)) = head.extends {
                for parent in split_parents(&source[start..end]) {
                    decl = decl.with_extends(parent);
                }
            }
            self.fill_fields(&mut decl, &source[open + 1..close]);
            tracing::trace!(
                r#type = decl.name(),
                fields = decl.own_fields().len(),
                path = %path.display(),
                "extracted interface"
            );
            declarations.push(decl);
        }

        Ok(declarations)
    }

    fn fill_fields(&self, decl: &mut TypeDeclaration, body: &str) {
        let mut directives: Vec<Directive> = Vec::new();

        for token in scan_members(body) {
            match token {
                Token::Member(text) => {
                    let Some(caps) = self.property.captures(&text) else {
                        continue;
                    };
                    let Some(name) = caps.get(1).or(caps.get(2)).or(caps.get(3)) else {
                        continue;
                    };
                    let field = FieldDeclaration::new(name.as_str()).with_optional(caps.get(4).is_some());
                    match decl.field_mut(name.as_str()) {
                        Some(existing) => existing.override_with(&field),
                        None => decl.push_field(field),
                    }
                }
                Token::Comment(text) => {
                    if let Some(directive) = parse_directive(&self.directive, &text) {
                        directives.push(directive);
                    }
                }
            }
        }

        for directive in directives {
            let Some(field_name) = directive.field else {
                tracing::debug!(
                    r#type = decl.name(),
                    "ignore directive without a field name has no effect in an interface"
                );
                continue;
            };
            match decl.field_mut(&field_name) {
                Some(existing) => existing.ignore = existing.ignore.strongest(directive.kind),
                None => decl.push_field(FieldDeclaration::placeholder(field_name, directive.kind)),
            }
        }
    }
}

fn invalid_pattern(what: &str, e: regex::Error) -> ExtractError {
    ExtractError::InvalidMarker {
        marker: what.to_string(),
        message: e.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// Text of a depth-1 member up to `;`, `,` or a line break
    Member(String),
    /// Body of a comment found between members
    Comment(String),
}

/// Split an interface body into members and comments, in source order.
///
/// Text inside nested brackets is collapsed to the bracket pair, so
/// `tags: { a: string }` becomes `tags: {}` and `run(): void` keeps its `(`.
fn scan_members(body: &str) -> Vec<Token> {
    let chars: Vec<char> = body.chars().collect();
    let mut tokens = Vec::new();
    let mut segment = String::new();
    let mut depth = 0usize;
    let mut i = 0;

    let flush = |segment: &mut String, tokens: &mut Vec<Token>| {
        let trimmed = segment.trim();
        if !trimmed.is_empty() {
            tokens.push(Token::Member(trimmed.to_string()));
        }
        segment.clear();
    };

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '/' if next == Some('/') => {
                let end = chars[i..]
                    .iter()
                    .position(|&ch| ch == '\n')
                    .map_or(chars.len(), |p| i + p);
                if depth == 0 {
                    tokens.push(Token::Comment(chars[i + 2..end].iter().collect()));
                }
                i = end;
                continue;
            }
            '/' if next == Some('*') => {
                let close = (i + 2..chars.len().saturating_sub(1))
                    .find(|&k| chars[k] == '*' && chars[k + 1] == '/');
                let (text_end, resume) = match close {
                    Some(k) => (k, k + 2),
                    None => (chars.len(), chars.len()),
                };
                if depth == 0 {
                    tokens.push(Token::Comment(chars[i + 2..text_end].iter().collect()));
                }
                i = resume;
                continue;
            }
            '"' | '\'' | '`' => {
                let end = closing_quote(&chars, i);
                if depth == 0 {
                    segment.extend(&chars[i..=end.min(chars.len() - 1)]);
                }
                i = end + 1;
                continue;
            }
            '{' | '(' | '[' => {
                if depth == 0 {
                    segment.push(c);
                }
                depth += 1;
            }
            '}' | ')' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    segment.push(c);
                }
            }
            ';' | ',' | '\n' if depth == 0 => flush(&mut segment, &mut tokens),
            _ if depth == 0 => segment.push(c),
            _ => {}
        }
        i += 1;
    }
    flush(&mut segment, &mut tokens);

    tokens
}

/// Index of the quote closing the literal opened at `start` (or the last index)
fn closing_quote(chars: &[char], start: usize) -> usize {
    let quote = chars[start];
    let mut k = start + 1;
    while k < chars.len() {
        match chars[k] {
            '\\' => k += 2,
            ch if ch == quote => return k,
            _ => k += 1,
        }
    }
    chars.len().saturating_sub(1)
}

/// What follows `interface Name`: the extends list and the body's `{`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    /// Byte range of the text after `extends`
    extends: Option<(usize, usize)>,
    open: usize,
}

/// Scan type parameters and the extends clause starting at `from`.
///
/// Braces nested in `<…>` (defaults like `T = {}`, arguments like
/// `Base<{ x: string }>`) do not open the body. `None` when the text is not
/// an interface header.
fn scan_header(bytes: &[u8], from: usize) -> Option<Header> {
    let mut i = skip_space(bytes, from);
    if bytes.get(i) == Some(&b'<') {
        i = skip_space(bytes, skip_angles(bytes, i)?);
    }

    let mut extends = None;
    if bytes[i..].starts_with(b"extends")
        && bytes.get(i + 7).is_some_and(|b| b.is_ascii_whitespace())
    {
        let start = i + 7;
        let mut k = start;
        loop {
            match bytes.get(k)? {
                b'<' => k = skip_angles(bytes, k)?,
                b'{' => break,
                b';' | b'}' => return None,
                _ => k += 1,
            }
        }
        extends = Some((start, k));
        i = k;
    }

    (bytes.get(i) == Some(&b'{')).then_some(Header { extends, open: i })
}

/// Index just past the `>` closing the `<` at `open`
fn skip_angles(bytes: &[u8], open: usize) -> Option<usize> {
    let mut angle = 0usize;
    let mut nest = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'(' | b'[' => nest += 1,
            b'}' | b')' | b']' => nest = nest.checked_sub(1)?,
            b'<' if nest == 0 => angle += 1,
            b'>' if nest == 0 && i > 0 && bytes[i - 1] != b'=' => {
                angle -= 1;
                if angle == 0 {
                    return Some(i + 1);
                }
            }
            b';' if nest == 0 => return None,
            quote @ (b'"' | b'\'' | b'`') => i = skip_quoted(bytes, i, quote),
            _ => {}
        }
        i += 1;
    }
    None
}

fn skip_space(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

/// Index of the quote closing the literal opened at `start`
fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() && bytes[i] != quote {
        if bytes[i] == b'\\' {
            i += 1;
        }
        i += 1;
    }
    i
}

/// Byte ranges of `//` and `/* */` comments outside string literals
fn comment_spans(bytes: &[u8]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |p| i + p);
                spans.push((i, end));
                i = end;
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = bytes[i + 2..]
                    .windows(2)
                    .position(|w| w == b"*/")
                    .map_or(bytes.len(), |p| i + 2 + p + 2);
                spans.push((i, end));
                i = end;
                continue;
            }
            quote @ (b'"' | b'\'' | b'`') => i = skip_quoted(bytes, i, quote),
            _ => {}
        }
        i += 1;
    }
    spans
}

fn in_spans(spans: &[(usize, usize)], at: usize) -> bool {
    spans.iter().any(|&(start, end)| start <= at && at < end)
}

/// Byte index of the `}` matching the `{` at `open`
fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |p| i + p);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = bytes[i + 2..]
                    .windows(2)
                    .position(|w| w == b"*/")
                    .map_or(bytes.len(), |p| i + 2 + p + 2);
                continue;
            }
            quote @ (b'"' | b'\'' | b'`') => i = skip_quoted(bytes, i, quote),
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// `A, B<T, U>, C` → `["A", "B", "C"]`
fn split_parents(list: &str) -> Vec<String> {
    let mut parents = Vec::new();
    let mut angle = 0usize;
    let mut current = String::new();

    for c in list.chars() {
        match c {
            '<' => {
                angle += 1;
                current.push(c);
            }
            '>' => {
                angle = angle.saturating_sub(1);
                current.push(c);
            }
            ',' if angle == 0 => {
                parents.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    parents.push(current);

    parents
        .into_iter()
        .filter_map(|p| {
            let base = p.split('<').next().unwrap_or_default().trim().to_string();
            (!base.is_empty()).then_some(base)
        })
        .collect()
}
