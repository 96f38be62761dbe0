pub mod color;
pub mod date;
pub mod icon;
pub mod text;
pub mod validation;

pub use color::{HexColor, InvalidColor, DEFAULT_COLOR};
pub use date::{deserialize_date, deserialize_optional_date, parse_date};
pub use icon::Icon;
pub use text::{normalize_list, optional_text, required_text, UnknownVariant};
pub use validation::{checked_text, Draft, ValidationError};
