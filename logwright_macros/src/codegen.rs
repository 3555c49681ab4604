use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{ItemTrait, LitStr, Visibility};

use crate::{
    analyze::{AnalyzedMessage, AnalyzedParam},
    contract::{ContractDescriptor, MessageDeclaration},
    data_type::DataType,
    ident_generator::{ident_text, IdentGenerator},
    template::Segment,
};

/// Assemble the full expansion: the cleaned contract trait, one carrier per
/// message, and the delegating adapter.
pub(crate) fn synthesize(
    descriptor: &ContractDescriptor,
    analyzed: &[AnalyzedMessage],
    contract: &ItemTrait,
) -> TokenStream {
    let messages = descriptor
        .messages
        .iter()
        .zip(analyzed)
        .map(|(message, analyzed)| message_codegen(&descriptor.vis, message, analyzed));
    let adapter = adapter_codegen(descriptor);
    quote! {
        #contract
        #(#messages)*
        #adapter
    }
}

/// Carrier struct, inherent constants, emission function and `Capture` impl
/// for one declared message.
fn message_codegen(
    vis: &Visibility,
    message: &MessageDeclaration,
    analyzed: &AnalyzedMessage,
) -> TokenStream {
    let event_ident = message.method.to_event_ident();
    let needs_lifetime = analyzed
        .params
        .iter()
        .any(|param| data_type(param).is_borrowed());
    let generics = needs_lifetime.then(|| quote!(<'a>));

    let fields = analyzed.params.iter().map(|param| {
        let ident = &param.ident;
        let ty = data_type(param).to_field_ty();
        let doc = format!("Captured `{}`.", ident_text(ident));
        quote! {
            #[doc = #doc]
            #vis #ident: #ty,
        }
    });

    let id = Literal::u32_unsuffixed(message.id);
    let level = message.level.to_level_tokens();
    let name = LitStr::new(&message.event_name(), message.method.span());
    let template = &message.template;

    let emit_params = analyzed.params.iter().map(|param| {
        let ident = &param.ident;
        let ty = data_type(param).to_field_ty();
        quote!(#ident: #ty)
    });
    let construct = analyzed.params.iter().map(|param| &param.ident);

    let struct_doc = format!(
        "Typed carrier for the `{}` event.",
        ident_text(&message.method)
    );
    let len = Literal::usize_unsuffixed(analyzed.params.len());
    let get_fn = get_codegen(analyzed);
    let render = render_codegen(template, analyzed);

    quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, Copy, PartialEq)]
        #vis struct #event_ident #generics {
            #(#fields)*
        }

        impl #generics #event_ident #generics {
            /// Declared event id.
            #vis const ID: u32 = #id;
            /// Declared severity.
            #vis const LEVEL: ::logwright::Level = #level;
            /// Effective event name.
            #vis const NAME: &'static str = #name;
            /// Raw message template, escapes intact.
            #vis const TEMPLATE: &'static str = #template;

            /// Build the carrier and hand it to `sink`. When `sink` does not
            /// observe the severity, nothing is constructed.
            #vis fn emit<S>(sink: &S, #(#emit_params),*)
            where
                S: ::logwright::Sink + ?Sized,
            {
                if !sink.enabled(Self::LEVEL) {
                    return;
                }
                let event = Self { #(#construct),* };
                let record = ::logwright::Record::new(
                    Self::LEVEL,
                    Self::ID,
                    Self::NAME,
                    Self::TEMPLATE,
                    &event,
                );
                sink.emit(&record);
            }
        }

        impl #generics ::logwright::Capture for #event_ident #generics {
            fn len(&self) -> usize {
                #len
            }

            #get_fn

            fn render(&self) -> String {
                #render
            }
        }
    }
}

fn data_type(param: &AnalyzedParam) -> DataType {
    param.data_type.expect("unreachable code")
}

fn get_codegen(analyzed: &AnalyzedMessage) -> TokenStream {
    if analyzed.params.is_empty() {
        return quote! {
            fn get(&self, _index: usize) -> Option<(&'static str, ::logwright::Value<'_>)> {
                None
            }
        };
    }
    let arms = analyzed.params.iter().enumerate().map(|(index, param)| {
        let pattern = Literal::usize_unsuffixed(index);
        let key = LitStr::new(&ident_text(&param.ident), param.ident.span());
        let ident = &param.ident;
        quote!(#pattern => Some((#key, ::logwright::Value::from(self.#ident))),)
    });
    quote! {
        fn get(&self, index: usize) -> Option<(&'static str, ::logwright::Value<'_>)> {
            match index {
                #(#arms)*
                _ => None,
            }
        }
    }
}

/// Body of the carrier's `render`. Placeholder-free messages clone a plain
/// literal; everything else substitutes through `format!`, with literal
/// braces re-escaped.
fn render_codegen(template: &LitStr, analyzed: &AnalyzedMessage) -> TokenStream {
    let span = template.span();
    let has_placeholder = analyzed
        .segments
        .iter()
        .any(|segment| matches!(segment, Segment::Placeholder { .. }));
    if !has_placeholder {
        let mut text = String::new();
        for segment in &analyzed.segments {
            if let Segment::Literal(literal) = segment {
                text.push_str(literal);
            }
        }
        let literal = LitStr::new(&text, span);
        return quote!(#literal.to_owned());
    }

    let mut format_text = String::new();
    let mut args = Vec::new();
    for segment in &analyzed.segments {
        match segment {
            Segment::Literal(literal) => {
                format_text.push_str(&literal.replace('{', "{{").replace('}', "}}"));
            }
            Segment::Placeholder { name, .. } => {
                format_text.push_str("{}");
                let param = analyzed
                    .params
                    .iter()
                    .find(|param| ident_text(&param.ident) == *name)
                    .expect("unreachable code");
                let ident = &param.ident;
                args.push(quote!(self.#ident));
            }
        }
    }
    let format_literal = LitStr::new(&format_text, span);
    quote!(format!(#format_literal, #(#args),*))
}

/// The delegating adapter: a sink-owning struct implementing the contract
/// trait by forwarding each method to its carrier's emission function.
fn adapter_codegen(descriptor: &ContractDescriptor) -> TokenStream {
    let trait_ident = &descriptor.ident;
    let logger_ident = trait_ident.to_logger_ident();
    let vis = &descriptor.vis;
    let methods = descriptor.messages.iter().map(|message| {
        let method = &message.method;
        let event_ident = message.method.to_event_ident();
        let params = message.params.iter().map(|param| {
            let ident = &param.ident;
            let ty = &param.ty;
            quote!(#ident: #ty)
        });
        let args = message.params.iter().map(|param| &param.ident);
        quote! {
            fn #method(&self, #(#params),*) {
                #event_ident::emit(&self.sink, #(#args),*);
            }
        }
    });
    let doc = format!("Delegating [`{trait_ident}`] adapter that forwards every event to its sink.");
    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone)]
        #vis struct #logger_ident<S> {
            sink: S,
        }

        impl<S> #logger_ident<S> {
            /// Wrap a sink in the contract's adapter.
            #vis fn new(sink: S) -> Self {
                Self { sink }
            }

            /// Consume the adapter, returning its sink.
            #vis fn into_inner(self) -> S {
                self.sink
            }
        }

        impl<S> #trait_ident for #logger_ident<S>
        where
            S: ::logwright::Sink,
        {
            #(#methods)*
        }
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use syn::{parse_quote, Item, ItemTrait};

    use super::synthesize;
    use crate::{analyze::analyze, contract::lower, validate::validate};

    fn expand_ok(item: ItemTrait) -> TokenStream {
        let (descriptor, cleaned) = lower(item).expect("lowering should succeed");
        let analyses = descriptor.messages.iter().map(analyze).collect();
        let validated = validate(&descriptor, analyses).expect("validation should succeed");
        synthesize(&descriptor, &validated, &cleaned)
    }

    fn socket_events() -> ItemTrait {
        parse_quote! {
            pub trait SocketEvents {
                #[event(id = 0, level = "critical", message = "Could not open socket to `{host}`")]
                fn connection_failed(&self, host: &str);
                #[event(id = 1, level = "info", message = "{bytes} bytes to {host} on {port}")]
                fn payload_sent(&self, host: &str, port: u16, bytes: u64);
                #[event(id = 2, level = "debug", message = "connection pool drained", name = "PoolDrained")]
                fn pool_drained(&self, waiting: u32);
            }
        }
    }

    #[test]
    fn expansion_is_valid_rust() {
        let expansion = expand_ok(socket_events());
        let file: syn::File = syn::parse2(expansion).expect("expansion should parse");
        // The trait, three items per message, and three adapter items.
        assert_eq!(file.items.len(), 13);
        assert!(file
            .items
            .iter()
            .any(|item| matches!(item, Item::Trait(item) if item.ident == "SocketEvents")));
        assert!(file
            .items
            .iter()
            .any(|item| matches!(item, Item::Struct(item) if item.ident == "ConnectionFailedEvent")));
        assert!(file
            .items
            .iter()
            .any(|item| matches!(item, Item::Struct(item) if item.ident == "SocketEventsLogger")));
    }

    #[test]
    fn expansion_is_deterministic() {
        let first = expand_ok(socket_events()).to_string();
        let second = expand_ok(socket_events()).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn borrowing_captures_get_a_lifetime() {
        let expansion = expand_ok(socket_events()).to_string();
        assert!(expansion.contains("'a"));
        assert!(expansion.contains("ConnectionFailedEvent"));
    }

    #[test]
    fn value_only_contracts_are_lifetime_free() {
        let expansion = expand_ok(parse_quote! {
            trait CounterEvents {
                #[event(id = 0, level = "trace", message = "{count} observed")]
                fn observed(&self, count: u64);
            }
        })
        .to_string();
        assert!(!expansion.contains("'a"));
    }

    #[test]
    fn placeholder_free_render_skips_the_formatter() {
        let expansion = expand_ok(parse_quote! {
            trait PlainEvents {
                #[event(id = 0, level = "info", message = "service started")]
                fn started(&self);
            }
        })
        .to_string();
        assert!(expansion.contains("to_owned"));
        assert!(!expansion.contains("format !"));
    }

    #[test]
    fn substituting_render_uses_the_formatter() {
        let expansion = expand_ok(socket_events()).to_string();
        assert!(expansion.contains("format !"));
    }

    #[test]
    fn inherent_constants_are_generated() {
        let expansion = expand_ok(socket_events()).to_string();
        assert!(expansion.contains("const ID"));
        assert!(expansion.contains("const LEVEL"));
        assert!(expansion.contains("const NAME"));
        assert!(expansion.contains("const TEMPLATE"));
    }
}
