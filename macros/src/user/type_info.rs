use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// `#[derive(TypeInfo)]`: mark the type as a class type and name it through
/// `class_tokens`, which reads the normalized compiler name at runtime.
pub fn expand_derive_type_info(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::declname::type_info::ClassType for #ident #ty_generics #where_clause {}

        impl #impl_generics ::declname::type_info::TypeInfo for #ident #ty_generics #where_clause {
            fn name_tokens<__V: ::declname::visit::Visitor>(visitor: __V) -> __V {
                ::declname::type_info::class_tokens::<Self, __V>(visitor)
            }
        }
    }
}
