//! Django model extractor
//!
//! Reads `class Name(Base):` blocks at module level. A class-body assignment
//! `name = models.XxxField(…)` (or `…Key(…)`) is a field. Whether a class is
//! a model is only decidable across all backend files, so extraction yields
//! `ModelClass` candidates and `resolve_models` settles the final set.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use super::{directive_regex, parse_directive, snake_to_camel, Directive, ExtractOptions};
use crate::domain::entities::{FieldDeclaration, TypeDeclaration};
use crate::domain::ports::ExtractError;
use crate::domain::value_objects::{IgnoreDirective, Side};

/// A module-level class that may turn out to be a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelClass {
    /// Fields and every base class name (last dotted segment)
    pub declaration: TypeDeclaration,
    /// Has a base such as `models.Model` or `TimeStampedModel`
    pub has_model_base: bool,
}

impl ModelClass {
    fn looks_like_model(&self) -> bool {
        self.has_model_base || self.declaration.own_fields().iter().any(|f| !f.placeholder)
    }
}

pub struct DjangoExtractor {
    header: Regex,
    field: Regex,
    optional: Regex,
    directive: Regex,
    camel_case: bool,
}

impl DjangoExtractor {
    pub fn new(options: &ExtractOptions) -> Result<Self, ExtractError> {
        let compile = |what: &str, pattern: &str| {
            Regex::new(pattern).map_err(|e| ExtractError::InvalidMarker {
                marker: what.to_string(),
                message: e.to_string(),
            })
        };

        Ok(Self {
            header: compile("class", r"(?m)^class\s+(\w+)\s*(?:\(([^)]*)\))?\s*:")?,
            field: compile(
                "field",
                r"^(\w+)\s*(?::[^=]*)?=\s*(?:[\w.]*\.)?([A-Z]\w*(?:Field|Key))\s*\(",
            )?,
            optional: compile("optional", r"\b(?:blank|null)\s*=\s*True\b")?,
            directive: directive_regex(&options.marker)?,
            camel_case: options.camel_case_backend,
        })
    }

    pub fn extract(&self, source: &str, path: &Path) -> Vec<ModelClass> {
        let lines: Vec<&str> = source.lines().collect();
        let mut classes = Vec::new();

        for caps in self.header.captures_iter(source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let name = &caps[1];
            let bases: Vec<&str> = caps
                .get(2)
                .map(|m| {
                    m.as_str()
                        .split(',')
                        .map(str::trim)
                        .filter(|b| !b.is_empty() && !b.contains('='))
                        .collect()
                })
                .unwrap_or_default();

            let mut decl = TypeDeclaration::new(name, Side::Backend).with_origin(path);
            let mut has_model_base = false;
            for &base in &bases {
                let short = base.rsplit('.').next().unwrap_or(base);
                has_model_base |= short.ends_with("Model");
                decl = decl.with_extends(short);
            }

            // Header ends on the line holding its ':'; the body starts below it.
            let body_start = source[..whole.end()].matches('\n').count() + 1;
            self.fill_fields(&mut decl, class_body(&lines, body_start));

            tracing::trace!(
                class = name,
                fields = decl.own_fields().len(),
                path = %path.display(),
                "extracted class"
            );
            classes.push(ModelClass {
                declaration: decl,
                has_model_base,
            });
        }

        classes
    }

    fn field_name(&self, raw: &str) -> String {
        if self.camel_case {
            snake_to_camel(raw)
        } else {
            raw.to_string()
        }
    }

    fn fill_fields(&self, decl: &mut TypeDeclaration, body: &[&str]) {
        let Some(indent) = body
            .iter()
            .find(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
            .map(|l| indent_of(l))
        else {
            return;
        };

        let mut standalone: Vec<Directive> = Vec::new();
        let mut docstring: Option<&str> = None;
        let mut i = 0;

        while i < body.len() {
            let line = body[i];
            let trimmed = line.trim_start();
            i += 1;

            if let Some(delim) = docstring {
                if trimmed.contains(delim) {
                    docstring = None;
                }
                continue;
            }
            if let Some(delim) = ["\"\"\"", "'''"].into_iter().find(|d| trimmed.starts_with(d)) {
                if trimmed.matches(delim).count() == 1 {
                    docstring = Some(delim);
                }
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('#') {
                if let Some(directive) = parse_directive(&self.directive, comment) {
                    standalone.push(directive);
                }
                continue;
            }
            if indent_of(line) != indent {
                continue;
            }

            let (code, comment) = split_comment(trimmed);
            let Some(caps) = self.field.captures(code) else {
                continue;
            };

            // Gather continuation lines until the call's parentheses close.
            let mut statement = code.to_string();
            let mut comments: Vec<String> = comment.map(str::to_string).into_iter().collect();
            let mut depth = paren_balance(code);
            while depth > 0 && i < body.len() {
                let (more, more_comment) = split_comment(body[i].trim());
                statement.push(' ');
                statement.push_str(more);
                comments.extend(more_comment.map(str::to_string));
                depth += paren_balance(more);
                i += 1;
            }

            let raw = &caps[1];
            let directives: Vec<Directive> = comments
                .iter()
                .filter_map(|c| parse_directive(&self.directive, c))
                .collect();

            for directive in &directives {
                if let Some(other) = directive.field.as_deref().filter(|f| *f != raw) {
                    standalone.push(Directive {
                        kind: directive.kind,
                        field: Some(other.to_string()),
                    });
                }
            }

            if raw.starts_with('_') {
                tracing::trace!(field = raw, "skipping private attribute");
                continue;
            }

            let ignore = directives
                .iter()
                .filter(|d| d.field.as_deref().map_or(true, |f| f == raw))
                .fold(IgnoreDirective::None, |acc, d| acc.strongest(d.kind));
            let field = FieldDeclaration::new(self.field_name(raw))
                .with_source_name(raw)
                .with_optional(self.optional.is_match(&statement))
                .with_ignore(ignore);

            match decl.field_mut(&field.name) {
                Some(existing) => existing.override_with(&field),
                None => decl.push_field(field),
            }
        }

        for directive in standalone {
            let Some(raw) = directive.field else {
                tracing::debug!(
                    class = decl.name(),
                    "ignore directive without a field name outside an assignment has no effect"
                );
                continue;
            };
            let name = self.field_name(&raw);
            match decl.field_mut(&name) {
                Some(existing) => existing.ignore = existing.ignore.strongest(directive.kind),
                None => decl.push_field(
                    FieldDeclaration::placeholder(name, directive.kind).with_source_name(raw),
                ),
            }
        }
    }
}

/// Lines belonging to the class whose body starts at `start`
fn class_body<'a>(lines: &'a [&'a str], start: usize) -> &'a [&'a str] {
    let start = start.min(lines.len());
    let end = lines[start..]
        .iter()
        .position(|l| {
            !l.trim().is_empty() && !l.starts_with(char::is_whitespace) && !l.starts_with('#')
        })
        .map_or(lines.len(), |p| start + p);
    &lines[start..end]
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Split a line at the first `#` outside a string literal
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (Some(_), _) if escaped => escaped = false,
            (Some(_), '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '#') => return (line[..i].trim_end(), Some(&line[i + 1..])),
            (None, _) => {}
        }
    }
    (line.trim_end(), None)
}

/// Net open parentheses in a line of code (string contents excluded)
fn paren_balance(code: &str) -> i32 {
    let mut quote: Option<char> = None;
    let mut depth = 0;
    for c in code.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[' | '{') => depth += 1,
            (None, ')' | ']' | '}') => depth -= 1,
            (None, _) => {}
        }
    }
    depth
}

/// Settle which classes are models and prune `extends` to declared models.
///
/// A class is a model when it has model fields, has a `…Model` base, or
/// extends another model. The last rule is applied until nothing changes,
/// so abstract bases declared in other files are picked up.
pub fn resolve_models(classes: Vec<ModelClass>) -> Vec<TypeDeclaration> {
    let mut models: HashSet<String> = classes
        .iter()
        .filter(|c| c.looks_like_model())
        .map(|c| c.declaration.name().to_string())
        .collect();

    loop {
        let before = models.len();
        for class in &classes {
            if class
                .declaration
                .extends()
                .iter()
                .any(|parent| models.contains(parent))
            {
                models.insert(class.declaration.name().to_string());
            }
        }
        if models.len() == before {
            break;
        }
    }

    classes
        .into_iter()
        .filter(|c| models.contains(c.declaration.name()))
        .map(|c| {
            let source = c.declaration;
            let mut decl = TypeDeclaration::new(source.name(), Side::Backend);
            for parent in source.extends().iter().filter(|p| models.contains(*p)) {
                decl = decl.with_extends(parent.as_str());
            }
            if let Some(origin) = source.origin() {
                decl = decl.with_origin(origin);
            }
            decl.with_fields(source.own_fields().iter().cloned())
        })
        .collect()
}
