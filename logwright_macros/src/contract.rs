use darling::FromMeta;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    spanned::Spanned, FnArg, Ident, ItemTrait, LitStr, Pat, ReturnType, TraitItem, Type,
    Visibility,
};

use crate::ident_generator::ident_text;

/// Arguments of one `#[event(...)]` attribute.
#[derive(Debug, FromMeta)]
struct EventOpts {
    id: u32,
    level: LevelArg,
    message: LitStr,
    #[darling(default)]
    name: Option<String>,
}

/// Severity named in an `#[event]` attribute. Parsed case-insensitively, with
/// `information` and `warning` accepted as spelled-out aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LevelArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl FromMeta for LevelArg {
    fn from_string(value: &str) -> darling::Result<Self> {
        let level = match value.to_ascii_lowercase().as_str() {
            "trace" => LevelArg::Trace,
            "debug" => LevelArg::Debug,
            "info" | "information" => LevelArg::Info,
            "warn" | "warning" => LevelArg::Warn,
            "error" => LevelArg::Error,
            "critical" => LevelArg::Critical,
            _ => return Err(darling::Error::unknown_value(value)),
        };
        Ok(level)
    }
}

impl LevelArg {
    /// Path expression of the matching runtime severity constant.
    pub(crate) fn to_level_tokens(&self) -> TokenStream {
        match self {
            LevelArg::Trace => quote!(::logwright::Level::Trace),
            LevelArg::Debug => quote!(::logwright::Level::Debug),
            LevelArg::Info => quote!(::logwright::Level::Info),
            LevelArg::Warn => quote!(::logwright::Level::Warn),
            LevelArg::Error => quote!(::logwright::Level::Error),
            LevelArg::Critical => quote!(::logwright::Level::Critical),
        }
    }
}

/// A contract trait lowered to the pieces code generation works from.
#[derive(Debug)]
pub(crate) struct ContractDescriptor {
    pub(crate) ident: Ident,
    pub(crate) vis: Visibility,
    pub(crate) messages: Vec<MessageDeclaration>,
}

/// One `#[event]`-annotated method.
#[derive(Debug)]
pub(crate) struct MessageDeclaration {
    pub(crate) id: u32,
    pub(crate) level: LevelArg,
    pub(crate) template: LitStr,
    pub(crate) name: Option<String>,
    pub(crate) method: Ident,
    pub(crate) params: Vec<Param>,
    pub(crate) span: Span,
}

impl MessageDeclaration {
    /// Effective event name: the explicit override, or the method name.
    pub(crate) fn event_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| ident_text(&self.method))
    }
}

/// A declared method parameter, excluding the receiver.
#[derive(Debug)]
pub(crate) struct Param {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
}

/// Lower a contract trait into a descriptor, returning the trait with the
/// inert `#[event]` attributes stripped so it can be re-emitted verbatim.
///
/// Surface defects are batched: every method is inspected even after one
/// fails, and the combined error carries one diagnostic per defect.
pub(crate) fn lower(item: ItemTrait) -> syn::Result<(ContractDescriptor, ItemTrait)> {
    let mut errors: Vec<syn::Error> = Vec::new();
    let mut cleaned = item;

    if let Some(unsafety) = &cleaned.unsafety {
        errors.push(syn::Error::new(
            unsafety.span(),
            "contract traits cannot be unsafe",
        ));
    }
    if let Some(auto_token) = &cleaned.auto_token {
        errors.push(syn::Error::new(
            auto_token.span(),
            "contract traits cannot be auto traits",
        ));
    }
    if !cleaned.generics.params.is_empty() {
        errors.push(syn::Error::new(
            cleaned.generics.span(),
            "contract traits cannot be generic",
        ));
    }
    if let Some(where_clause) = &cleaned.generics.where_clause {
        errors.push(syn::Error::new(
            where_clause.span(),
            "contract traits cannot carry a where clause",
        ));
    }
    if !cleaned.supertraits.is_empty() {
        errors.push(syn::Error::new(
            cleaned.supertraits.span(),
            "contract traits cannot have supertraits",
        ));
    }

    let mut messages = Vec::new();
    for entry in &mut cleaned.items {
        let method = match entry {
            TraitItem::Fn(method) => method,
            other => {
                errors.push(syn::Error::new(
                    other.span(),
                    "contract traits may only declare methods",
                ));
                continue;
            }
        };

        let mut event_attrs = Vec::new();
        method.attrs.retain(|attr| {
            if attr.path().is_ident("event") {
                event_attrs.push(attr.clone());
                false
            } else {
                true
            }
        });
        let attr = match event_attrs.as_slice() {
            [attr] => attr,
            [] => {
                errors.push(syn::Error::new(
                    method.sig.ident.span(),
                    "contract methods need an #[event(id = ..., level = ..., message = ...)] attribute",
                ));
                continue;
            }
            [_, second, ..] => {
                errors.push(syn::Error::new(
                    second.meta.span(),
                    "duplicate #[event] attribute",
                ));
                continue;
            }
        };
        let opts = match EventOpts::from_meta(&attr.meta) {
            Ok(opts) => opts,
            Err(error) => {
                for child in error.flatten() {
                    errors.push(syn::Error::new(child.span(), child.to_string()));
                }
                continue;
            }
        };

        let sig = &method.sig;
        let mut method_ok = true;
        if matches!(&opts.name, Some(name) if name.is_empty()) {
            errors.push(syn::Error::new(
                attr.meta.span(),
                "event name override cannot be empty",
            ));
            method_ok = false;
        }
        match sig.receiver() {
            Some(receiver)
                if receiver.reference.is_some()
                    && receiver.mutability.is_none()
                    && receiver.colon_token.is_none() => {}
            Some(receiver) => {
                errors.push(syn::Error::new(
                    receiver.span(),
                    "contract methods must take `&self`",
                ));
                method_ok = false;
            }
            None => {
                errors.push(syn::Error::new(
                    sig.ident.span(),
                    "contract methods must take `&self`",
                ));
                method_ok = false;
            }
        }
        if let Some(asyncness) = &sig.asyncness {
            errors.push(syn::Error::new(
                asyncness.span(),
                "contract methods cannot be async",
            ));
            method_ok = false;
        }
        if !sig.generics.params.is_empty() {
            errors.push(syn::Error::new(
                sig.generics.span(),
                "contract methods cannot be generic",
            ));
            method_ok = false;
        }
        if let Some(where_clause) = &sig.generics.where_clause {
            errors.push(syn::Error::new(
                where_clause.span(),
                "contract methods cannot carry a where clause",
            ));
            method_ok = false;
        }
        match &sig.output {
            ReturnType::Default => {}
            ReturnType::Type(_, ty) if is_unit(ty) => {}
            ReturnType::Type(_, ty) => {
                errors.push(syn::Error::new(
                    ty.span(),
                    "contract methods cannot return a value",
                ));
                method_ok = false;
            }
        }
        if let Some(default) = &method.default {
            errors.push(syn::Error::new(
                default.span(),
                "contract methods cannot have default bodies",
            ));
            method_ok = false;
        }

        let mut params = Vec::new();
        for input in &sig.inputs {
            let FnArg::Typed(arg) = input else {
                continue;
            };
            match arg.pat.as_ref() {
                Pat::Ident(pat) if pat.subpat.is_none() => params.push(Param {
                    ident: pat.ident.clone(),
                    ty: Type::clone(&arg.ty),
                }),
                other => {
                    errors.push(syn::Error::new(
                        other.span(),
                        "contract method parameters must be plain identifiers",
                    ));
                    method_ok = false;
                }
            }
        }

        if method_ok {
            messages.push(MessageDeclaration {
                id: opts.id,
                level: opts.level,
                template: opts.message,
                name: opts.name,
                method: sig.ident.clone(),
                params,
                span: attr.meta.span(),
            });
        }
    }

    let mut errors = errors.into_iter();
    if let Some(first) = errors.next() {
        let mut combined = first;
        for error in errors {
            combined.combine(error);
        }
        return Err(combined);
    }
    let descriptor = ContractDescriptor {
        ident: cleaned.ident.clone(),
        vis: cleaned.vis.clone(),
        messages,
    };
    Ok((descriptor, cleaned))
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
}
