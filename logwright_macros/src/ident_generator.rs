use proc_macro2::Ident;
use syn::ext::IdentExt;

/// Derives the identifiers of generated companion items from declared ones.
pub(crate) trait IdentGenerator {
    /// Carrier struct name for a message method: `connection_failed` becomes
    /// `ConnectionFailedEvent`.
    fn to_event_ident(&self) -> Ident;
    /// Adapter struct name for a contract trait: `NetworkEvents` becomes
    /// `NetworkEventsLogger`.
    fn to_logger_ident(&self) -> Ident;
}

impl IdentGenerator for Ident {
    fn to_event_ident(&self) -> Ident {
        let pascal = to_pascal_case(&self.unraw().to_string());
        Ident::new(&format!("{pascal}Event"), self.span())
    }

    fn to_logger_ident(&self) -> Ident {
        Ident::new(&format!("{}Logger", self.unraw()), self.span())
    }
}

/// The identifier's text with any `r#` prefix stripped.
pub(crate) fn ident_text(ident: &Ident) -> String {
    ident.unraw().to_string()
}

fn to_pascal_case(snake: &str) -> String {
    let mut pascal = String::with_capacity(snake.len());
    for word in snake.split('_').filter(|word| !word.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            pascal.push(first.to_ascii_uppercase());
            pascal.extend(chars);
        }
    }
    pascal
}
