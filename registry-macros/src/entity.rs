use crate::args::MacroArgs;
use crate::derives::merge_derives;
use crate::fields::with_leading_fields;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Fields, Item, Path, Type, parse_macro_input};

/// #[entity] 宏实现
/// - 确保 `id: IdType`、`version: usize` 位于字段最前
/// - 合并派生：Debug（可关闭）、Clone、Default、Serialize、Deserialize
/// - 实现 `::registry_domain::entity::Entity`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match MacroArgs::parse(attr, &["id", "debug"]) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut st = match parse_macro_input!(item as Item) {
        Item::Struct(st) => st,
        other => {
            return syn::Error::new(other.span(), "#[entity] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let id_ty: Type = args
        .id
        .clone()
        .unwrap_or_else(|| syn::parse_quote! { String });

    match &mut st.fields {
        Fields::Named(fields) => with_leading_fields(
            fields,
            &[("id", id_ty.clone()), ("version", syn::parse_quote! { usize })],
        ),
        _ => {
            return syn::Error::new(st.span(), "#[entity] only supports named-field struct")
                .to_compile_error()
                .into();
        }
    }

    let mut required: Vec<Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Default),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if args.derive_debug() {
        required.insert(0, syn::parse_quote!(Debug));
    }
    merge_derives(&mut st.attrs, &required);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    TokenStream::from(quote! {
        #st

        impl #impl_generics ::registry_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_ty;

            fn new(id: Self::Id, version: usize) -> Self {
                Self { id, version, ..::core::default::Default::default() }
            }

            fn id(&self) -> &Self::Id { &self.id }

            fn version(&self) -> usize { self.version }
        }
    })
}
