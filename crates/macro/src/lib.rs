//! The `#[boundary]` attribute.
//!
//! This attribute installs a short-circuit boundary around the whole body of
//! a function, so that the raise primitives of the `shortcircuit` crate can be
//! used anywhere inside it.
//!
//! Usage
//!
//! ```ignore
//! #[boundary]
//! fn load(path: &Path) -> Result<Config> {
//!     let text = attempt(fs::read_to_string(path)).or("reading config");
//!     Ok(must(toml::from_str(&text)))
//! }
//! ```
//!
//! The function must return a `Result<_, E>` where `E: From<anyhow::Error>`.
//! When the `shortcircuit` crate is reachable under another name, point the
//! expansion at it with `#[boundary(crate = path::to::shortcircuit)]`.
use proc_macro2::{Spacing, TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{ItemFn, Path, Result, ReturnType, parse_macro_input, parse_quote};

#[proc_macro_attribute]
pub fn boundary(
    attrs: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let mut krate: Path = parse_quote!(::shortcircuit);

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("crate") {
            krate = meta.value()?.parse()?;
            Ok(())
        } else {
            Err(meta.error("unsupported attribute, expected `crate = path`"))
        }
    });

    parse_macro_input!(attrs with parser);

    match expand(&krate, parse_macro_input!(item as ItemFn)) {
        Ok(tok) => tok.into(),
        Err(e) => e.into_compile_error().into(),
    }
}

fn expand(krate: &Path, func: ItemFn) -> Result<TokenStream> {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = func;

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "`#[boundary]` cannot be used on `async fn`",
        ));
    }
    if let Some(constness) = &sig.constness {
        return Err(syn::Error::new_spanned(
            constness,
            "`#[boundary]` cannot be used on `const fn`",
        ));
    }
    let ty = match &sig.output {
        ReturnType::Type(_, ty) => ty,
        ReturnType::Default => {
            return Err(syn::Error::new_spanned(
                &sig.ident,
                "`#[boundary]` functions must return a `Result`",
            ));
        }
    };

    // Closure return annotations can't name `impl Trait` and don't follow
    // function elision rules, so leave those to inference.
    let ret = if needs_inference(ty.to_token_stream()) {
        quote! {}
    } else {
        quote! { -> #ty }
    };

    Ok(quote! {
        #(#attrs)*
        #vis #sig {
            #krate::catch(move || #ret #block)
        }
    })
}

fn needs_inference(tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tt| match tt {
        TokenTree::Ident(ident) => ident == "impl",
        TokenTree::Punct(punct) => {
            punct.as_char() == '&' || (punct.as_char() == '\'' && punct.spacing() == Spacing::Joint)
        }
        TokenTree::Group(group) => needs_inference(group.stream()),
        TokenTree::Literal(_) => false,
    })
}
