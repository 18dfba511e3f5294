//! Coercion rules turning located text into typed values.
//!
//! Every rule is a pure function returning `None` on failure; nothing here
//! raises.

pub mod amounts;
pub mod dates;
pub mod text;

pub use amounts::{parse_decimal, parse_integer_count};
pub use dates::{parse_date, parse_date_or_timestamp};
pub use text::{capitalize_sentence, ensure_url_scheme};

/// A text-to-value coercion.
pub type Coercion<T> = fn(&str) -> Option<T>;
