//! Wrapping a function body in a rebinding block.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{FnArg, ItemFn, Pat, PatType, Signature, Type};

use crate::args::{ArgError, RebindArgs};

/// Which declarative macro the function body is wrapped in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Rebinding {
    Freeze,
    Poison,
    ReadIn,
}

impl Rebinding {
    fn name(self) -> &'static str {
        match self {
            Rebinding::Freeze => "freeze",
            Rebinding::Poison => "poison",
            Rebinding::ReadIn => "read_in",
        }
    }
}

/// Main entry point shared by the three attributes.
///
/// On error the original item is emitted after the compile error, so the
/// function still exists and callers do not get follow-up errors.
pub(crate) fn rebind(kind: Rebinding, attr: TokenStream, item: TokenStream) -> TokenStream {
    crate::trace::init_tracing();

    let item = TokenStream2::from(item);
    match rebind_impl(kind, attr.into(), item.clone()) {
        Ok(tokens) => tokens.into(),
        Err(err) => {
            let mut tokens = err.to_compile_error();
            tokens.extend(item);
            tokens.into()
        }
    }
}

pub(crate) fn rebind_impl(
    kind: Rebinding,
    attr: TokenStream2,
    item: TokenStream2,
) -> syn::Result<TokenStream2> {
    let args: RebindArgs = syn::parse2(attr)?;
    let mut function: ItemFn = syn::parse2(item)?;

    if let Some(policy) = &args.policy {
        if kind != Rebinding::ReadIn {
            return Err(ArgError::PolicyNotAccepted(kind.name()).at(policy));
        }
    }

    for name in &args.names {
        check_parameter(kind, &function.sig, name)?;
    }

    tracing::debug!(
        function = %function.sig.ident,
        rebinding = kind.name(),
        count = args.names.len(),
        "wrapping function body"
    );

    let names = &args.names;
    let body = &function.block;
    let wrapped = match kind {
        Rebinding::Freeze => quote! {{
            ::umbra::freeze!(#(#names),* => #body)
        }},
        Rebinding::Poison => quote! {{
            #(let _ = &#names;)*
            ::umbra::poison!(#(#names),* => #body)
        }},
        Rebinding::ReadIn => {
            let policy = args.policy.as_ref().map(|path| quote!(policy = #path;));
            quote! {{
                ::umbra::read_in!(#policy #(#names),* => #body)
            }}
        }
    };

    function.block = Box::new(syn::parse2(wrapped)?);
    Ok(function.into_token_stream())
}

/// Find the parameter bound to `name` and check it can be rebound by `kind`.
fn check_parameter(kind: Rebinding, sig: &Signature, name: &syn::Ident) -> syn::Result<()> {
    let Some(param) = find_parameter(sig, name) else {
        return Err(ArgError::NotAParameter(name.to_string()).at(name));
    };

    if kind == Rebinding::ReadIn && !is_reference(&param.ty) {
        return Err(ArgError::NotAReference(name.to_string()).at(&param.ty));
    }

    tracing::trace!(parameter = %name, "parameter accepted");
    Ok(())
}

fn find_parameter<'a>(sig: &'a Signature, name: &syn::Ident) -> Option<&'a PatType> {
    sig.inputs.iter().find_map(|arg| match arg {
        FnArg::Typed(param) => match &*param.pat {
            Pat::Ident(pat) if pat.ident == *name => Some(param),
            _ => None,
        },
        FnArg::Receiver(_) => None,
    })
}

fn is_reference(ty: &Type) -> bool {
    match ty {
        Type::Reference(_) => true,
        Type::Group(group) => is_reference(&group.elem),
        Type::Paren(paren) => is_reference(&paren.elem),
        _ => false,
    }
}
