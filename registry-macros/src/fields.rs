use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::{Field, FieldsNamed, Ident, Token, Type};

/// 把 `leading` 中的字段按顺序放到最前：已存在则复用原定义，否则按给定类型新建；
/// 其余字段保持原有相对顺序。
pub(crate) fn with_leading_fields(fields: &mut FieldsNamed, leading: &[(&str, Type)]) {
    let is_named = |f: &Field, name: &str| f.ident.as_ref().is_some_and(|i| i == name);

    let old = std::mem::take(&mut fields.named);
    let mut named: Punctuated<Field, Token![,]> = Punctuated::new();

    for (name, ty) in leading {
        match old.iter().find(|f| is_named(f, name)) {
            Some(existing) => named.push(existing.clone()),
            None => {
                let ident = Ident::new(name, Span::call_site());
                named.push(syn::parse_quote! { #ident: #ty });
            }
        }
    }

    for f in old {
        if !leading.iter().any(|(name, _)| is_named(&f, name)) {
            named.push(f);
        }
    }

    fields.named = named;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_fields_are_moved_to_front() {
        let mut fields: FieldsNamed = syn::parse_quote!({ name: String, version: u64 });
        with_leading_fields(
            &mut fields,
            &[
                ("id", syn::parse_quote!(String)),
                ("version", syn::parse_quote!(usize)),
            ],
        );

        let names: Vec<String> = fields
            .named
            .iter()
            .map(|f| f.ident.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["id", "version", "name"]);

        // 既有 version 的类型保持不变
        let version_ty = &fields.named[1].ty;
        assert_eq!(quote::quote!(#version_ty).to_string(), "u64");
    }
}
