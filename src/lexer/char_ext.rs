//! Character classes used by the analyzers.
//!
//! The tokenizer works on raw bytes, so every predicate is defined on [`u8`].
//! Anything outside ASCII falls into none of the classes.

pub trait CharExt {
    /// Whitespace separating tokens: space, tab, newline.
    fn is_divider(&self) -> bool;

    /// A letter or underscore.
    fn is_word_start(&self) -> bool;

    /// A letter, digit or underscore.
    fn is_word_continue(&self) -> bool;

    fn is_digit(&self) -> bool;

    fn is_hex_digit(&self) -> bool;

    /// The value of a hexadecimal digit, or [`None`] if this is not one.
    fn hex_value(&self) -> Option<u32>;

    /// A digit or `.`.
    fn is_numeric_literal_start(&self) -> bool;

    /// A character that may open a multi-character operator.
    fn is_combinable_operator(&self) -> bool;

    /// A character that always forms a token on its own.
    fn is_single_symbol(&self) -> bool;

    /// A character that may extend a candidate operator run.
    fn is_second_combinable_operator(&self) -> bool;

    /// A character that may legally follow a completed numeric literal.
    fn can_follow_number(&self) -> bool;
}

impl CharExt for u8 {
    fn is_divider(&self) -> bool {
        matches!(self, b' ' | b'\t' | b'\n')
    }

    fn is_word_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == b'_'
    }

    fn is_word_continue(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == b'_'
    }

    fn is_digit(&self) -> bool {
        self.is_ascii_digit()
    }

    fn is_hex_digit(&self) -> bool {
        self.is_ascii_hexdigit()
    }

    fn hex_value(&self) -> Option<u32> {
        (*self as char).to_digit(16)
    }

    fn is_numeric_literal_start(&self) -> bool {
        self.is_digit() || *self == b'.'
    }

    fn is_combinable_operator(&self) -> bool {
        matches!(
            self,
            b'|' | b'&' | b'+' | b'^' | b'*' | b'/' | b'!' | b'.' | b':' | b'=' | b'<' | b'>'
        )
    }

    fn is_single_symbol(&self) -> bool {
        matches!(
            self,
            b'(' | b')' | b'{' | b'}' | b'[' | b']' | b';' | b',' | b'?'
        )
    }

    fn is_second_combinable_operator(&self) -> bool {
        matches!(
            self,
            b'+' | b'=' | b'|' | b'&' | b'.' | b':' | b'<' | b'>'
        )
    }

    fn can_follow_number(&self) -> bool {
        matches!(
            self,
            b'+' | b'-'
                | b'*'
                | b'/'
                | b')'
                | b']'
                | b'}'
                | b'|'
                | b'&'
                | b'^'
                | b','
                | b':'
                | b';'
        )
    }
}
