pub mod constants;
mod hex_prefix;

pub use hex_prefix::strip_hex_prefix;
