pub mod models;
pub mod money;

pub use models::{ListingKind, PriceQuote};
pub use money::{parse_cost, parse_money, parse_suggested_price, ParsedMoney, RawMoney};
