pub mod text;

pub use text::{ascii_lower, snippet, strip_vendor_prefix};
