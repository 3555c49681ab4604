use proc_macro2::TokenStream;
use quote::quote;
use syn::{Path, Type};

/// The closed set of capturable parameter types, mirroring the runtime
/// `Value` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DataType {
    Bool,
    Char,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    USize,
    Int8,
    Int16,
    Int32,
    Int64,
    ISize,
    Float32,
    Float64,
    String,
}

impl DataType {
    /// Map a declared parameter type onto the capture set. `None` means the
    /// type cannot be captured and validation must reject it.
    pub(crate) fn from_type(ty: &Type) -> Option<Self> {
        match ty {
            Type::Reference(reference) => {
                if reference.mutability.is_some() {
                    return None;
                }
                match reference.elem.as_ref() {
                    Type::Path(elem) if elem.qself.is_none() && elem.path.is_ident("str") => {
                        Some(DataType::String)
                    }
                    _ => None,
                }
            }
            Type::Path(path) if path.qself.is_none() => Self::from_path(&path.path),
            _ => None,
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        if path.is_ident("bool") {
            Some(DataType::Bool)
        } else if path.is_ident("char") {
            Some(DataType::Char)
        } else if path.is_ident("u8") {
            Some(DataType::UInt8)
        } else if path.is_ident("u16") {
            Some(DataType::UInt16)
        } else if path.is_ident("u32") {
            Some(DataType::UInt32)
        } else if path.is_ident("u64") {
            Some(DataType::UInt64)
        } else if path.is_ident("usize") {
            Some(DataType::USize)
        } else if path.is_ident("i8") {
            Some(DataType::Int8)
        } else if path.is_ident("i16") {
            Some(DataType::Int16)
        } else if path.is_ident("i32") {
            Some(DataType::Int32)
        } else if path.is_ident("i64") {
            Some(DataType::Int64)
        } else if path.is_ident("isize") {
            Some(DataType::ISize)
        } else if path.is_ident("f32") {
            Some(DataType::Float32)
        } else if path.is_ident("f64") {
            Some(DataType::Float64)
        } else {
            None
        }
    }

    /// Tokens of the carrier field type. String data is borrowed into the
    /// carrier's lifetime; everything else is stored by value.
    pub(crate) fn to_field_ty(&self) -> TokenStream {
        match self {
            DataType::Bool => quote!(bool),
            DataType::Char => quote!(char),
            DataType::UInt8 => quote!(u8),
            DataType::UInt16 => quote!(u16),
            DataType::UInt32 => quote!(u32),
            DataType::UInt64 => quote!(u64),
            DataType::USize => quote!(usize),
            DataType::Int8 => quote!(i8),
            DataType::Int16 => quote!(i16),
            DataType::Int32 => quote!(i32),
            DataType::Int64 => quote!(i64),
            DataType::ISize => quote!(isize),
            DataType::Float32 => quote!(f32),
            DataType::Float64 => quote!(f64),
            DataType::String => quote!(&'a str),
        }
    }

    /// Whether the carrier borrows this capture, forcing a lifetime on the
    /// generated struct.
    pub(crate) fn is_borrowed(&self) -> bool {
        matches!(self, DataType::String)
    }
}

/// Detects owned `String` parameters so the rejection can suggest `&str`.
pub(crate) fn is_owned_string(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "String"),
        _ => false,
    }
}
