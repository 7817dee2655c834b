// The coarse bounds on the number of digits typed by the user, calling code
// included. Five or six digits can't be a phone number anywhere we support,
// and E.164 caps a full number at 15 digits.
pub const MIN_DIGITS: usize = 7;
pub const MAX_DIGITS: usize = 15;

// Accepted national number length for regions without a required length.
// Product documentation states 4-12, but numbers with a 14 digit national
// part are accepted in practice, so the upper bound follows MAX_DIGITS until
// product settles it.
pub const VARIABLE_MIN_NATIONAL: usize = 4;
pub const VARIABLE_MAX_NATIONAL: usize = 15;

pub const PLUS_SIGN: &'static str = "+";

// Characters users put into phone numbers for readability: any white space,
// parentheses and hyphens. They are removed wherever they appear.
pub const FORMATTING_CHARS: &'static str = r"[\s()\-]+";

pub const ASCII_DIGITS: &'static str = "[0-9]*";
