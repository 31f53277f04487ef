//! Attribute arguments: `name, name, ..., [policy = Path]`.

use proc_macro2::Span;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, Path, Token};

/// Why a rebinding attribute was rejected.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ArgError {
    #[error("expected at least one parameter name")]
    NoNames,
    #[error("`{0}` is listed more than once")]
    Duplicate(String),
    #[error("`self` cannot be rebound")]
    Receiver,
    #[error("unknown option `{0}`; the only option is `policy`")]
    UnknownOption(String),
    #[error("`policy` is given more than once")]
    DuplicatePolicy,
    #[error("`policy` only applies to `read_in`, not `{0}`")]
    PolicyNotAccepted(&'static str),
    #[error("`{0}` is not a parameter of this function")]
    NotAParameter(String),
    #[error("`{0}` must be taken by reference to be read in")]
    NotAReference(String),
}

impl ArgError {
    /// Report this error at the given tokens.
    pub(crate) fn at(self, tokens: impl ToTokens) -> syn::Error {
        syn::Error::new_spanned(tokens, self)
    }

    pub(crate) fn at_span(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}

/// Parsed arguments of `#[freeze(..)]`, `#[poison(..)]` and `#[read_in(..)]`.
#[derive(Debug)]
pub(crate) struct RebindArgs {
    pub names: Vec<Ident>,
    pub policy: Option<Path>,
}

impl Parse for RebindArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut names: Vec<Ident> = Vec::new();
        let mut policy = None;

        while !input.is_empty() {
            // `parse_any` so that `self` reaches the receiver check instead of
            // failing as a keyword.
            let ident = Ident::parse_any(input)?;

            if input.peek(Token![=]) {
                input.parse::<Token![=]>()?;
                if ident != "policy" {
                    return Err(ArgError::UnknownOption(ident.to_string()).at(&ident));
                }
                if policy.is_some() {
                    return Err(ArgError::DuplicatePolicy.at(&ident));
                }
                policy = Some(input.parse::<Path>()?);
            } else if ident == "self" {
                return Err(ArgError::Receiver.at(&ident));
            } else if names.contains(&ident) {
                return Err(ArgError::Duplicate(ident.to_string()).at(&ident));
            } else {
                names.push(ident);
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        if names.is_empty() {
            return Err(ArgError::NoNames.at_span(input.span()));
        }

        Ok(RebindArgs { names, policy })
    }
}
