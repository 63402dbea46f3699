//! Derive macros for RGB component containers.
//!
//! `#[derive(Container)]` turns a struct that owns a container into a
//! container itself, which is how nested containers get their own type:
//!
//! ```ignore
//! #[derive(Default, Container)]
//! struct SubComponent(ComponentContainer<(i32,)>);
//!
//! #[derive(Default, Container)]
//! struct Player {
//!     #[container]
//!     components: ComponentContainer<(Health, SubComponent)>,
//!     name: String,
//! }
//! ```
//!
//! # Field Selection
//!
//! - A struct with a single field delegates to that field.
//! - Otherwise exactly one field must carry `#[container]`.
//!
//! The field may be a `ComponentContainer<S>` or any other `Container`; the
//! generated impl forwards `Slots`, `components()` and `components_mut()`.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{quote, quote_spanned};
use syn::{Data, DeriveInput, Field, Fields, Index, Member, spanned::Spanned};

/// Check if a field has the `#[container]` attribute
fn is_marked(field: &Field) -> bool {
    field
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("container"))
}

/// Pick the field the impl delegates to.
fn select_field(fields: &Fields, span: Span) -> Result<(Member, &Field), proc_macro2::TokenStream> {
    let members: Vec<(Member, &Field)> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let member = field.ident.clone().map_or_else(
                || {
                    Member::Unnamed(Index {
                        index: i as u32,
                        span: field.span(),
                    })
                },
                Member::Named,
            );
            (member, field)
        })
        .collect();

    let marked: Vec<&(Member, &Field)> = members.iter().filter(|(_, f)| is_marked(f)).collect();

    match (marked.as_slice(), members.as_slice()) {
        ([(member, field)], _) => Ok((member.clone(), *field)),
        ([], [(member, field)]) => Ok((member.clone(), *field)),
        ([], []) => Err(quote_spanned! {
            span =>
            compile_error!("Container cannot be derived for a struct without fields.\n\
                           Add a `ComponentContainer<S>` field.");
        }),
        ([], _) => Err(quote_spanned! {
            span =>
            compile_error!("Container derive needs to know which field owns the components.\n\
                           Mark exactly one field with #[container].");
        }),
        ([_, second, ..], _) => {
            let second_span = second.1.span();
            Err(quote_spanned! {
                second_span =>
                compile_error!("Only one field can be marked #[container].");
            })
        }
    }
}

/// Derive macro for component containers.
///
/// # Examples
///
/// ```ignore
/// #[derive(Default, Container)]
/// struct SubComponent(ComponentContainer<(i32,)>);
///
/// #[derive(Default, Container)]
/// struct Entity {
///     #[container]
///     components: ComponentContainer<(SubComponent,)>,
///     label: &'static str,
/// }
/// ```
#[proc_macro_derive(Container, attributes(container))]
pub fn derive_container(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

/// Generate the `Container` impl, or a `compile_error!` for unsupported input.
fn expand(input: &DeriveInput) -> proc_macro2::TokenStream {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return quote_spanned! {
                input.span() =>
                compile_error!("Enums cannot derive Container. Use a struct that owns a ComponentContainer.");
            };
        }
        Data::Union(_) => {
            return quote_spanned! {
                input.span() =>
                compile_error!("Unions cannot derive Container. Use a struct that owns a ComponentContainer.");
            };
        }
    };

    let (member, field) = match select_field(fields, input.ident.span()) {
        Ok(selected) => selected,
        Err(error) => return error,
    };
    let field_ty = &field.ty;

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(#field_ty: ::rgb_components::Container));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::rgb_components::Container for #name #ty_generics #where_clause {
            type Slots = <#field_ty as ::rgb_components::Container>::Slots;

            #[inline]
            fn components(&self) -> &::rgb_components::ComponentContainer<Self::Slots> {
                ::rgb_components::Container::components(&self.#member)
            }

            #[inline]
            fn components_mut(&mut self) -> &mut ::rgb_components::ComponentContainer<Self::Slots> {
                ::rgb_components::Container::components_mut(&mut self.#member)
            }
        }
    };

    expanded
}
