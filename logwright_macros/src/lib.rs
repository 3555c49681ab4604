//! Procedural implementation of [`logwright`](https://docs.rs/logwright)'s
//! `#[contract]` attribute.
//!
//! The expansion pipeline is template parsing, contract lowering, analysis,
//! validation, then synthesis. Every stage batches its findings, so a broken
//! contract surfaces all of its defects in a single compile.

mod analyze;
mod codegen;
mod contract;
mod data_type;
mod error;
mod ident_generator;
mod template;
mod validate;

use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemTrait};

/// Turn a trait of `#[event(...)]` methods into a logging contract.
///
/// The trait is re-emitted unchanged, minus the inert `#[event]` attributes,
/// alongside one carrier struct per message and a delegating
/// `{Trait}Logger<S>` adapter. See the `logwright` crate documentation for
/// the declaration surface.
#[proc_macro_attribute]
pub fn contract(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemTrait);
    match expand(args.into(), item) {
        Ok(expansion) => expansion.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(
    args: proc_macro2::TokenStream,
    item: ItemTrait,
) -> syn::Result<proc_macro2::TokenStream> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(
            args,
            "#[contract] takes no arguments",
        ));
    }
    let (descriptor, cleaned) = contract::lower(item)?;
    let analyses = descriptor.messages.iter().map(analyze::analyze).collect();
    let validated = validate::validate(&descriptor, analyses).map_err(error::combine)?;
    Ok(codegen::synthesize(&descriptor, &validated, &cleaned))
}
