use syn::parse::{ParseStream, Parser};
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Ident, Lit, Token, Type};

/// 三个属性宏共用的参数：`id = Type`、`debug = bool`
///
/// 每个宏通过 `allowed` 声明自己接受的键，未声明的键直接报错。
#[derive(Default)]
pub(crate) struct MacroArgs {
    pub(crate) id: Option<Type>,
    pub(crate) debug: Option<bool>,
}

impl MacroArgs {
    pub(crate) fn parse(
        attr: proc_macro::TokenStream,
        allowed: &'static [&'static str],
    ) -> syn::Result<Self> {
        let parser = move |input: ParseStream| Self::parse_stream(input, allowed);
        parser.parse(attr)
    }

    pub(crate) fn derive_debug(&self) -> bool {
        self.debug.unwrap_or(true)
    }

    fn parse_stream(input: ParseStream, allowed: &[&str]) -> syn::Result<Self> {
        let mut args = Self::default();

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            let name = key.to_string();
            if !allowed.contains(&name.as_str()) {
                return Err(syn::Error::new(
                    key.span(),
                    format!("unknown key `{name}`; expected one of: {}", allowed.join(", ")),
                ));
            }
            input.parse::<Token![=]>()?;

            let duplicated = match name.as_str() {
                "id" => args.id.replace(input.parse::<Type>()?).is_some(),
                "debug" => args.debug.replace(parse_bool(input)?).is_some(),
                _ => {
                    return Err(syn::Error::new(key.span(), "unsupported key"));
                }
            };
            if duplicated {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate key `{name}` in attribute"),
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

fn parse_bool(input: ParseStream) -> syn::Result<bool> {
    match input.parse::<Expr>()? {
        Expr::Lit(ExprLit {
            lit: Lit::Bool(b), ..
        }) => Ok(b.value()),
        other => Err(syn::Error::new(other.span(), "expected boolean literal")),
    }
}
