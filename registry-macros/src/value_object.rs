use crate::args::MacroArgs;
use crate::derives::merge_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, Path, parse_macro_input};

/// #[value_object] 宏实现
/// 合并派生：Debug（可关闭）、Default、Clone、Serialize、Deserialize、PartialEq、Eq
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match MacroArgs::parse(attr, &["debug"]) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut required: Vec<Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
    ];
    if args.derive_debug() {
        required.insert(0, syn::parse_quote!(Debug));
    }

    let mut input = parse_macro_input!(item as Item);
    match &mut input {
        Item::Struct(st) => merge_derives(&mut st.attrs, &required),
        Item::Enum(en) => merge_derives(&mut en.attrs, &required),
        other => {
            return syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
                .to_compile_error()
                .into();
        }
    }

    TokenStream::from(quote! { #input })
}
