use std::collections::btree_map::{BTreeMap, Entry};

use quote::ToTokens;
use syn::spanned::Spanned;

use crate::{
    analyze::{AnalyzedMessage, MessageAnalysis},
    contract::ContractDescriptor,
    data_type::is_owned_string,
    error::ValidationError,
    ident_generator::ident_text,
};

/// Check contract-wide rules over the analyzed messages.
///
/// Every check runs even after one fails, and the error vector follows
/// declaration order. Per message the order is: duplicate id, duplicate
/// name, template defects, unsupported parameter types.
pub(crate) fn validate(
    descriptor: &ContractDescriptor,
    analyses: Vec<MessageAnalysis>,
) -> Result<Vec<AnalyzedMessage>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_ids: BTreeMap<u32, String> = BTreeMap::new();
    let mut seen_names: BTreeMap<String, String> = BTreeMap::new();
    let mut validated = Vec::with_capacity(analyses.len());

    for (message, analysis) in descriptor.messages.iter().zip(analyses) {
        let MessageAnalysis {
            analyzed,
            errors: carried,
        } = analysis;
        let method = ident_text(&message.method);

        match seen_ids.entry(message.id) {
            Entry::Vacant(vacant) => {
                vacant.insert(method.clone());
            }
            Entry::Occupied(occupied) => errors.push(ValidationError::DuplicateEventId {
                id: message.id,
                previous: occupied.get().clone(),
                span: message.span,
            }),
        }
        match seen_names.entry(message.event_name()) {
            Entry::Vacant(vacant) => {
                vacant.insert(method);
            }
            Entry::Occupied(occupied) => errors.push(ValidationError::DuplicateEventName {
                name: occupied.key().clone(),
                previous: occupied.get().clone(),
                span: message.span,
            }),
        }
        errors.extend(carried);
        for param in &analyzed.params {
            if param.data_type.is_none() {
                let hint = if is_owned_string(&param.ty) {
                    "; capture string data as `&str`"
                } else {
                    ""
                };
                errors.push(ValidationError::UnsupportedParameterType {
                    param: ident_text(&param.ident),
                    ty: param.ty.to_token_stream().to_string(),
                    hint,
                    span: param.ty.span(),
                });
            }
        }
        validated.push(analyzed);
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        Err(errors)
    }
}
