use proc_macro::TokenStream;

mod bind_target;

#[proc_macro_derive(BindTarget, attributes(path_param))]
pub fn derive_bind_target(input: TokenStream) -> TokenStream {
    bind_target::derive_bind_target(input)
}
