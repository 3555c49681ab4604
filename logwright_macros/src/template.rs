use thiserror::Error;

/// One piece of a parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Literal text, with `{{` and `}}` escapes already resolved.
    Literal(String),
    /// A `{name}` substitution point. `offset` is the byte position of the
    /// opening brace in the original template.
    Placeholder { name: String, offset: usize },
}

/// Failure while scanning a template, located by byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub(crate) struct TemplateError {
    pub(crate) kind: TemplateErrorKind,
    pub(crate) offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum TemplateErrorKind {
    #[error("unterminated `{{`")]
    UnterminatedPlaceholder,
    #[error("empty placeholder `{{}}`")]
    EmptyPlaceholder,
    #[error("placeholder `{0}` is not a plain identifier")]
    InvalidPlaceholder(String),
    #[error("unmatched `}}`, escape it as `}}}}`")]
    UnmatchedBrace,
}

/// Scan a template into literal and placeholder segments.
///
/// Escapes follow composite formatting: `{{` is a literal `{`, `}}` a literal
/// `}`, and a lone `}` is malformed. Placeholder bodies must be plain ASCII
/// identifiers; anything else is reported rather than passed through.
pub(crate) fn parse(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let bytes = template.as_bytes();
    let mut at = 0;
    while at < bytes.len() {
        match bytes[at] {
            b'{' if bytes.get(at + 1) == Some(&b'{') => {
                literal.push('{');
                at += 2;
            }
            b'}' if bytes.get(at + 1) == Some(&b'}') => {
                literal.push('}');
                at += 2;
            }
            b'{' => {
                let Some(len) = template[at + 1..].find('}') else {
                    return Err(TemplateError {
                        kind: TemplateErrorKind::UnterminatedPlaceholder,
                        offset: at,
                    });
                };
                let body = &template[at + 1..at + 1 + len];
                if body.is_empty() {
                    return Err(TemplateError {
                        kind: TemplateErrorKind::EmptyPlaceholder,
                        offset: at,
                    });
                }
                if !is_identifier(body) {
                    return Err(TemplateError {
                        kind: TemplateErrorKind::InvalidPlaceholder(body.to_owned()),
                        offset: at + 1,
                    });
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder {
                    name: body.to_owned(),
                    offset: at,
                });
                at += len + 2;
            }
            b'}' => {
                return Err(TemplateError {
                    kind: TemplateErrorKind::UnmatchedBrace,
                    offset: at,
                });
            }
            _ => {
                // Advance one whole character, not one byte.
                let ch = template[at..].chars().next().expect("in-bounds char");
                literal.push(ch);
                at += ch.len_utf8();
            }
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn is_identifier(body: &str) -> bool {
    let mut chars = body.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
