//! Minimal `{{ name }}` substitution templates.
//!
//! Templates are parsed once into literal and placeholder segments. Text
//! outside placeholders is emitted byte for byte; values are inserted
//! verbatim with no escaping.

use crate::utils::error::{DocgenError, Result};
use regex::Regex;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        let re = Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").map_err(|e| DocgenError::TemplateError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in re.captures_iter(source) {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            Self::push_literal(name, source, cursor, whole.start(), &mut segments)?;

            let key = key.as_str();
            if !is_identifier(key) {
                return Err(DocgenError::TemplateError {
                    message: format!(
                        "{}:{}: invalid placeholder name '{}'",
                        name,
                        line_of(source, whole.start()),
                        key
                    ),
                });
            }

            segments.push(Segment::Placeholder(key.to_string()));
            cursor = whole.end();
        }

        Self::push_literal(name, source, cursor, source.len(), &mut segments)?;

        Ok(Self {
            name: name.to_string(),
            segments,
        })
    }

    fn push_literal(
        name: &str,
        source: &str,
        start: usize,
        end: usize,
        segments: &mut Vec<Segment>,
    ) -> Result<()> {
        let text = &source[start..end];

        // anything left that opens an action was never closed
        if let Some(offset) = text.find("{{") {
            return Err(DocgenError::TemplateError {
                message: format!(
                    "{}:{}: unterminated placeholder",
                    name,
                    line_of(source, start + offset)
                ),
            });
        }

        if !text.is_empty() {
            segments.push(Segment::Literal(text.to_string()));
        }
        Ok(())
    }

    pub fn render(&self, values: &HashMap<&str, &str>) -> Result<String> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(key) => {
                    let value = values.get(key.as_str()).ok_or_else(|| DocgenError::TemplateError {
                        message: format!("{}: no value bound for '{}'", self.name, key),
                    })?;
                    out.push_str(value);
                }
            }
        }

        Ok(out)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = Template::parse("item", "<li>{{ name }}{{rest}}</li>").unwrap();
        let values = HashMap::from([("name", "s3"), ("rest", " (or x)")]);

        assert_eq!(template.render(&values).unwrap(), "<li>s3 (or x)</li>");
    }

    #[test]
    fn test_literal_text_is_preserved_verbatim() {
        let source = "\n<div style=\"column-width: 14em;\">\n<ul>}}</ul>\n";
        let template = Template::parse("static", source).unwrap();

        assert_eq!(template.render(&HashMap::new()).unwrap(), source);
    }

    #[test]
    fn test_values_are_not_escaped() {
        let template = Template::parse("raw", "{{ v }}").unwrap();
        let values = HashMap::from([("v", "<b>&</b>")]);

        assert_eq!(template.render(&values).unwrap(), "<b>&</b>");
    }

    #[test]
    fn test_unterminated_placeholder_is_rejected() {
        let err = Template::parse("broken", "line one\n<ul>{{ services </ul>").unwrap_err();

        assert!(matches!(err, DocgenError::TemplateError { .. }));
        assert!(err.to_string().contains("broken:2"));
    }

    #[test]
    fn test_invalid_placeholder_name_is_rejected() {
        assert!(Template::parse("bad", "{{ .Services }}").is_err());
        assert!(Template::parse("bad", "{{}}").is_err());
    }

    #[test]
    fn test_missing_value_is_a_template_error() {
        let template = Template::parse("item", "{{ name }}").unwrap();
        let err = template.render(&HashMap::new()).unwrap_err();

        assert!(err.to_string().contains("no value bound for 'name'"));
    }
}
