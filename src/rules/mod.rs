//! Built-in policy rules
//!
//! Each module defines one rule of the default password policy.

mod length;
mod letter;
mod number;
mod special;

pub use length::{length_rule, LENGTH_PATTERN, MIN_LENGTH};
pub use letter::{letter_rule, LETTER_PATTERN};
pub use number::{number_rule, NUMBER_PATTERN};
pub use special::{special_char_rule, SPECIAL_CHAR_PATTERN};
