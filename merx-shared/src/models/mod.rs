pub mod quote;

pub use quote::{ListingKind, PriceQuote};
