use std::collections::BTreeSet;

use syn::{Ident, Type};

use crate::{
    contract::MessageDeclaration,
    data_type::DataType,
    error::ValidationError,
    ident_generator::ident_text,
    template::{self, Segment},
};

/// A message with its template parsed and its parameters classified.
#[derive(Debug)]
pub(crate) struct AnalyzedMessage {
    pub(crate) segments: Vec<Segment>,
    pub(crate) params: Vec<AnalyzedParam>,
}

/// One parameter of an analyzed message. `referenced` is false for captures
/// that appear in no placeholder; they are still carried structurally.
#[derive(Debug)]
pub(crate) struct AnalyzedParam {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) data_type: Option<DataType>,
    pub(crate) referenced: bool,
}

/// Analysis output with any defects found along the way. Defects ride along
/// instead of aborting so validation can report every message's problems in
/// a single compiler pass.
#[derive(Debug)]
pub(crate) struct MessageAnalysis {
    pub(crate) analyzed: AnalyzedMessage,
    pub(crate) errors: Vec<ValidationError>,
}

/// Parse the message template and resolve each placeholder against the
/// declared parameters, by exact name.
pub(crate) fn analyze(message: &MessageDeclaration) -> MessageAnalysis {
    let mut errors = Vec::new();
    let segments = match template::parse(&message.template.value()) {
        Ok(segments) => segments,
        Err(error) => {
            errors.push(ValidationError::MalformedTemplate {
                error,
                span: message.template.span(),
            });
            Vec::new()
        }
    };

    let mut params: Vec<AnalyzedParam> = message
        .params
        .iter()
        .map(|param| AnalyzedParam {
            ident: param.ident.clone(),
            ty: param.ty.clone(),
            data_type: DataType::from_type(&param.ty),
            referenced: false,
        })
        .collect();

    let mut unresolved = BTreeSet::new();
    for segment in &segments {
        let Segment::Placeholder { name, .. } = segment else {
            continue;
        };
        match params
            .iter_mut()
            .find(|param| ident_text(&param.ident) == *name)
        {
            Some(param) => param.referenced = true,
            None => {
                // Report a repeated unknown placeholder once.
                if unresolved.insert(name.clone()) {
                    errors.push(ValidationError::UnresolvedPlaceholder {
                        name: name.clone(),
                        method: ident_text(&message.method),
                        span: message.template.span(),
                    });
                }
            }
        }
    }

    MessageAnalysis {
        analyzed: AnalyzedMessage { segments, params },
        errors,
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;
    use syn::{parse_quote, Ident, LitStr, Type};

    use super::analyze;
    use crate::{
        contract::{LevelArg, MessageDeclaration, Param},
        data_type::DataType,
        error::ValidationError,
    };

    fn declaration(template: &str, params: Vec<(&str, Type)>) -> MessageDeclaration {
        MessageDeclaration {
            id: 0,
            level: LevelArg::Info,
            template: LitStr::new(template, Span::call_site()),
            name: None,
            method: Ident::new("sample", Span::call_site()),
            params: params
                .into_iter()
                .map(|(name, ty)| Param {
                    ident: Ident::new(name, Span::call_site()),
                    ty,
                })
                .collect(),
            span: Span::call_site(),
        }
    }

    #[test]
    fn placeholders_resolve_regardless_of_order() {
        let declaration = declaration(
            "{bytes} bytes to {host} on {port}",
            vec![
                ("host", parse_quote!(&str)),
                ("port", parse_quote!(u16)),
                ("bytes", parse_quote!(u64)),
            ],
        );
        let analysis = analyze(&declaration);
        assert!(analysis.errors.is_empty());
        assert!(analysis.analyzed.params.iter().all(|param| param.referenced));
        assert_eq!(
            analysis.analyzed.params[0].data_type,
            Some(DataType::String)
        );
    }

    #[test]
    fn unreferenced_parameters_are_recorded_not_rejected() {
        let declaration = declaration(
            "connection pool drained",
            vec![("waiting", parse_quote!(u32))],
        );
        let analysis = analyze(&declaration);
        assert!(analysis.errors.is_empty());
        let unused: Vec<_> = analysis
            .analyzed
            .params
            .iter()
            .filter(|param| !param.referenced)
            .collect();
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].ident.to_string(), "waiting");
    }

    #[test]
    fn unresolved_placeholder_is_an_error() {
        let declaration = declaration("lost {socket}", vec![("host", parse_quote!(&str))]);
        let analysis = analyze(&declaration);
        assert_eq!(analysis.errors.len(), 1);
        assert_eq!(
            analysis.errors[0].to_string(),
            "placeholder `{socket}` does not match any parameter of `sample`"
        );
    }

    #[test]
    fn repeated_unknown_placeholder_reports_once() {
        let declaration = declaration("{ghost} and {ghost}", vec![]);
        let analysis = analyze(&declaration);
        assert_eq!(analysis.errors.len(), 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let declaration = declaration("{HostName}", vec![("hostname", parse_quote!(&str))]);
        let analysis = analyze(&declaration);
        assert_eq!(analysis.errors.len(), 1);
        assert!(!analysis.analyzed.params[0].referenced);
    }

    #[test]
    fn malformed_template_is_carried_with_empty_segments() {
        let declaration = declaration("oops {", vec![]);
        let analysis = analyze(&declaration);
        assert!(analysis.analyzed.segments.is_empty());
        assert!(matches!(
            analysis.errors.as_slice(),
            [ValidationError::MalformedTemplate { .. }]
        ));
    }

    #[test]
    fn unsupported_type_is_classified_but_not_rejected_here() {
        let declaration = declaration("{payload}", vec![("payload", parse_quote!(Vec<u8>))]);
        let analysis = analyze(&declaration);
        assert!(analysis.errors.is_empty());
        assert_eq!(analysis.analyzed.params[0].data_type, None);
        assert!(analysis.analyzed.params[0].referenced);
    }

    #[test]
    fn raw_identifier_parameters_match_their_bare_name() {
        let mut decl = declaration("kind {type}", vec![]);
        decl.params.push(Param {
            ident: parse_quote!(r#type),
            ty: parse_quote!(u8),
        });
        let analysis = analyze(&decl);
        assert!(analysis.errors.is_empty());
        assert!(analysis.analyzed.params[0].referenced);
    }
}
