pub mod dates;
pub mod price;
pub mod query;

pub use dates::{format_iso_date, parse_iso_date, DateRange};
pub use price::{is_real_price, PLACEHOLDER_PRICE};
pub use query::QueryTicket;
