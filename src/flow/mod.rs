/// Flow invocation: request body, target URL, the single POST.
pub mod client;
pub mod errors;
pub mod request;

pub use client::run_flow;
pub use errors::into_response;
