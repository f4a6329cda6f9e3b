//! A derive macro that builds the field descriptor table behind `BindTarget`.
use darling::{FromDeriveInput, FromField, FromMeta, util::Ignored};
use proc_macro::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::{
    Data, DeriveInput, Fields, GenericArgument, Ident, PathArguments, Type, ext::IdentExt,
    parse_macro_input, spanned::Spanned,
};

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct BindTargetInput {
    data: darling::ast::Data<Ignored, ParsedField>,
    ident: syn::Ident,
}

#[derive(Debug)]
struct ParsedField {
    ident: Ident,
    ty: Type,
    /// The name of the path parameter, if the field is annotated.
    param: Option<String>,
}

// Nested meta for `#[path_param(name = "...")]`
#[derive(Default, Debug, FromMeta)]
#[darling(default, from_word = || Ok(Default::default()))]
struct PathParam {
    name: Option<String>,
}

impl FromField for ParsedField {
    fn from_field(field: &syn::Field) -> darling::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Err(darling::Error::custom("`BindTarget` only supports named fields.")
                .with_span(field));
        };
        let mut params = Vec::new();
        for attr in &field.attrs {
            if !attr.path().is_ident("path_param") {
                continue;
            }
            let param = PathParam::from_meta(&attr.meta)?;
            // `r#type` is bound from `type`.
            let name = param.name.unwrap_or_else(|| ident.unraw().to_string());
            if name.is_empty() {
                return Err(
                    darling::Error::custom("The name of a path parameter can't be empty.")
                        .with_span(attr.path()),
                );
            }
            params.push(name);
        }

        if params.len() > 1 {
            return Err(darling::Error::custom(format!(
                "Field `{}` can only be bound from one path parameter. \
                Remove all `#[path_param]` attributes but one.",
                ident.unraw()
            ))
            .with_span(&ident));
        }
        Ok(Self {
            ident,
            ty: field.ty.clone(),
            param: params.pop(),
        })
    }
}

/// The shapes the binder knows how to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Text,
    TextSequence,
    OptionalTextSequence,
    Unsupported,
}

impl Shape {
    fn of(ty: &Type) -> Self {
        if is_string(ty) {
            return Shape::Text;
        }
        if let Some(inner) = single_type_argument(ty, VEC_PATHS) {
            if is_string(inner) {
                return Shape::TextSequence;
            }
        }
        if let Some(inner) = single_type_argument(ty, OPTION_PATHS) {
            if let Some(inner) = single_type_argument(inner, VEC_PATHS) {
                if is_string(inner) {
                    return Shape::OptionalTextSequence;
                }
            }
        }
        Shape::Unsupported
    }
}

const STRING_PATHS: &[&str] = &["String", "std::string::String", "alloc::string::String"];
const VEC_PATHS: &[&str] = &["Vec", "std::vec::Vec", "alloc::vec::Vec"];
const OPTION_PATHS: &[&str] = &["Option", "std::option::Option", "core::option::Option"];

/// The plain path of `ty`, without generic arguments, if it is a path type.
fn plain_path(ty: &Type) -> Option<(&syn::Path, String)> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let path = &type_path.path;
    let rendered = path
        .segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");
    Some((path, rendered))
}

fn is_string(ty: &Type) -> bool {
    let Some((path, rendered)) = plain_path(ty) else {
        return false;
    };
    path.segments
        .iter()
        .all(|s| matches!(s.arguments, PathArguments::None))
        && STRING_PATHS.contains(&rendered.as_str())
}

/// If `ty` is one of `candidates` with exactly one generic type argument, return that argument.
fn single_type_argument<'a>(ty: &'a Type, candidates: &[&str]) -> Option<&'a Type> {
    let (path, rendered) = plain_path(ty)?;
    if !candidates.contains(&rendered.as_str()) {
        return None;
    }
    let segments: Vec<_> = path.segments.iter().collect();
    let (last, prefix) = segments.split_last()?;
    if prefix
        .iter()
        .any(|s| !matches!(s.arguments, PathArguments::None))
    {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    let mut args = args.args.iter();
    match (args.next(), args.next()) {
        (Some(GenericArgument::Type(inner)), None) => Some(inner),
        _ => None,
    }
}

pub(super) fn derive_bind_target(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match _derive_bind_target(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn _derive_bind_target(input: DeriveInput) -> Result<proc_macro2::TokenStream, darling::Error> {
    reject_invalid_inputs(&input)?;
    let input = BindTargetInput::from_derive_input(&input)?;

    let struct_ident = &input.ident;
    let Some(fields) = input.data.take_struct() else {
        return Err(darling::Error::custom(
            "`BindTarget` can only be derived for structs with named fields.",
        )
        .with_span(struct_ident));
    };

    let descriptors = fields.iter().filter_map(|field| {
        let param = field.param.as_ref()?;
        let field_ident = &field.ident;
        let field_name = field_ident.unraw().to_string();
        let ty = &field.ty;
        let ty_span = ty.span();
        let accessor = |variant: proc_macro2::TokenStream| {
            quote_spanned! { ty_span =>
                ::path_binder::FieldKind::#variant({
                    fn access(target: &mut #struct_ident) -> &mut #ty {
                        &mut target.#field_ident
                    }
                    access
                })
            }
        };
        let kind = match Shape::of(ty) {
            Shape::Text => accessor(quote! { Text }),
            Shape::TextSequence => accessor(quote! { TextSequence }),
            Shape::OptionalTextSequence => accessor(quote! { OptionalTextSequence }),
            Shape::Unsupported => {
                let type_name = ty.to_token_stream().to_string();
                quote! {
                    ::path_binder::FieldKind::Unsupported { type_name: #type_name }
                }
            }
        };
        Some(quote! {
            ::path_binder::FieldDescriptor::new(#field_name, #param, #kind)
        })
    });

    Ok(quote! {
        #[automatically_derived]
        impl ::path_binder::BindTarget for #struct_ident {
            const FIELDS: &'static [::path_binder::FieldDescriptor<Self>] = &[
                #(#descriptors),*
            ];
        }
    })
}

/// Only structs with named fields and no generic parameters can be bound.
fn reject_invalid_inputs(input: &DeriveInput) -> Result<(), darling::Error> {
    let struct_ident = &input.ident;
    let error = |kind: &str| {
        darling::Error::custom(format!(
            "`#[derive(BindTarget)]` can only be applied to structs with named fields, \
            but `{struct_ident}` is {kind}."
        ))
    };
    match &input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(_) => {}
            Fields::Unnamed(_) => return Err(error("a tuple struct").with_span(&data.struct_token)),
            Fields::Unit => return Err(error("a unit struct").with_span(&data.struct_token)),
        },
        Data::Enum(data) => return Err(error("an enum").with_span(&data.enum_token)),
        Data::Union(data) => return Err(error("a union").with_span(&data.union_token)),
    }

    if !input.generics.params.is_empty() {
        return Err(darling::Error::custom(format!(
            "`#[derive(BindTarget)]` can't be applied to `{struct_ident}` because it has generic parameters. \
            Use concrete types instead: only `String`, `Vec<String>` and `Option<Vec<String>>` fields can be bound."
        ))
        .with_span(struct_ident));
    }
    Ok(())
}
