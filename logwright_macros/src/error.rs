use proc_macro2::Span;
use thiserror::Error;

use crate::template::TemplateError;

/// A single contract defect. Validation gathers every defect it can find
/// before the expansion is rejected, so one compiler pass reports them all.
#[derive(Debug, Clone, Error)]
pub(crate) enum ValidationError {
    #[error("malformed message template: {error}")]
    MalformedTemplate { error: TemplateError, span: Span },
    #[error("placeholder `{{{name}}}` does not match any parameter of `{method}`")]
    UnresolvedPlaceholder {
        name: String,
        method: String,
        span: Span,
    },
    #[error("event id {id} is already used by `{previous}`")]
    DuplicateEventId {
        id: u32,
        previous: String,
        span: Span,
    },
    #[error("event name `{name}` is already used by `{previous}`")]
    DuplicateEventName {
        name: String,
        previous: String,
        span: Span,
    },
    #[error("parameter `{param}` has unsupported type `{ty}`{hint}")]
    UnsupportedParameterType {
        param: String,
        ty: String,
        hint: &'static str,
        span: Span,
    },
}

impl ValidationError {
    /// Where the compiler should point its diagnostic.
    pub(crate) fn span(&self) -> Span {
        match self {
            ValidationError::MalformedTemplate { span, .. }
            | ValidationError::UnresolvedPlaceholder { span, .. }
            | ValidationError::DuplicateEventId { span, .. }
            | ValidationError::DuplicateEventName { span, .. }
            | ValidationError::UnsupportedParameterType { span, .. } => *span,
        }
    }

    pub(crate) fn into_syn_error(self) -> syn::Error {
        syn::Error::new(self.span(), self.to_string())
    }
}

/// Fold every finding into one `syn::Error` so each surfaces as its own
/// compiler diagnostic.
pub(crate) fn combine(errors: Vec<ValidationError>) -> syn::Error {
    let mut errors = errors.into_iter();
    let mut combined = errors
        .next()
        .expect("combine called with at least one error")
        .into_syn_error();
    for error in errors {
        combined.combine(error.into_syn_error());
    }
    combined
}
