use proc_macro::TokenStream;
use quote::quote;
use syn::{FnArg, ItemFn, LitStr, Pat, parse_macro_input};

#[proc_macro_attribute]
pub fn get(attr: TokenStream, item: TokenStream) -> TokenStream {
    route_macro("GET", attr, item)
}

#[proc_macro_attribute]
pub fn post(attr: TokenStream, item: TokenStream) -> TokenStream {
    route_macro("POST", attr, item)
}

#[proc_macro_attribute]
pub fn put(attr: TokenStream, item: TokenStream) -> TokenStream {
    route_macro("PUT", attr, item)
}

#[proc_macro_attribute]
pub fn delete(attr: TokenStream, item: TokenStream) -> TokenStream {
    route_macro("DELETE", attr, item)
}

/// Normalizes the handler to the canonical
/// `(Request, PathParams, Arc<AppState>)` signature, extracting typed
/// arguments via `FromRequestParts`, and submits a `RouteDescriptor`
/// so `RouteScope::discover()` finds the route at startup.
fn route_macro(method: &str, attr: TokenStream, item: TokenStream) -> TokenStream {
    let path = parse_macro_input!(attr as LitStr);
    let func = parse_macro_input!(item as ItemFn);

    let func_name = &func.sig.ident;
    let func_block = &func.block;
    let func_output = &func.sig.output;
    let func_vis = &func.vis;
    let handler_name = func_name.to_string();

    let args: Vec<_> = func.sig.inputs.iter().collect();

    let handler = if args.is_empty() {
        quote! {
            #func_vis async fn #func_name(
                _req: routescope::hyper::Request<routescope::hyper::body::Incoming>,
                _params: routescope::extract::PathParams,
                _state: ::std::sync::Arc<routescope::state::AppState>,
            ) #func_output #func_block
        }
    } else {
        let mut extractions = Vec::new();

        for arg in &args {
            if let FnArg::Typed(pat_type) = arg {
                if let Pat::Ident(pat_ident) = &*pat_type.pat {
                    let arg_name = &pat_ident.ident;
                    let arg_type = &pat_type.ty;

                    extractions.push(quote! {
                        let #arg_name = <#arg_type as routescope::extract::FromRequestParts>::from_request_parts(&__parts, &params, &state).await.unwrap();
                    });
                }
            }
        }

        quote! {
            #func_vis async fn #func_name(
                req: routescope::hyper::Request<routescope::hyper::body::Incoming>,
                params: routescope::extract::PathParams,
                state: ::std::sync::Arc<routescope::state::AppState>,
            ) #func_output {
                let (__parts, _body) = req.into_parts();
                #(#extractions)*
                #func_block
            }
        }
    };

    let descriptor = quote! {
        routescope::inventory::submit! {
            routescope::discovery::RouteDescriptor {
                method: #method,
                path: #path,
                handler_name: #handler_name,
                register: |router: routescope::router::Router| {
                    router.discovered(#method, #path, #handler_name, #func_name)
                },
            }
        }
    };

    TokenStream::from(quote! {
        #handler
        #descriptor
    })
}
