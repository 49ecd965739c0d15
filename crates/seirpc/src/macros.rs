/// Declares a typed stub for one service: one async method per RPC, each
/// sending the verbatim method name.
macro_rules! service {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $service:literal {
            $(
                $(#[$fmeta:meta])*
                fn $fn_name:ident = $method:literal ($req:ty) -> $resp:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            client: $crate::client::Client,
        }

        impl $name {
            /// Fully qualified service name.
            pub const SERVICE: &'static str = $service;

            pub fn new(transport: ::std::sync::Arc<dyn $crate::transport::Transport>) -> Self {
                Self { client: $crate::client::Client::new(transport) }
            }

            pub fn from_client(client: $crate::client::Client) -> Self {
                Self { client }
            }

            $(
                $(#[$fmeta])*
                pub async fn $fn_name(&self, req: $req) -> $crate::error::Result<$resp> {
                    self.client.unary(Self::SERVICE, $method, &req).await
                }
            )*
        }
    };
}
