//! Small formatting helpers shared by the service and its front ends.

pub mod currency;
pub mod number;
pub mod text;

pub use currency::{FormatError, format_currency, format_currency_with};
pub use number::{add, multiply};
pub use text::capitalize;
