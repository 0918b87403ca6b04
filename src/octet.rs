use std::fmt::Display;

/// Largest value that can be encoded as utf-8
pub const MAX_SCALAR: u32 = 0x10FFFF;

/// Range of utf-16 surrogate halves, which are never valid scalar values
pub const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Represents all possible meanings of a utf-8 byte, or the encoded length of a scalar value
///
/// Use [`classify_byte`] (or `OctetType::from(u8)`) for bytes and [`classify_scalar`] for scalar
/// values so that the variant accurately represents the data it was derived from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OctetType {
    /// `0xxxxxxx`, or a scalar in `0x00..=0x7F`
    One,
    /// `110xxxxx`, or a scalar in `0x80..=0x7FF`
    Two,
    /// `1110xxxx`, or a non-surrogate scalar in `0x800..=0xFFFF`
    Three,
    /// `11110xxx`, or a scalar in `0x10000..=0x10FFFF`
    Four,
    /// `10xxxxxx`, a continuation byte. Never produced for a scalar value
    Next,
    /// A byte which can never appear in utf-8, or a scalar which cannot be encoded
    Invalid,
}

impl OctetType {
    /// Number of bytes in a sequence of this type.
    ///
    /// Returns `0` for [`OctetType::Next`] and [`OctetType::Invalid`], which is never a valid
    /// sequence length. Branch on the type before using the count.
    pub const fn byte_count(self) -> usize {
        match self {
            OctetType::One => 1,
            OctetType::Two => 2,
            OctetType::Three => 3,
            OctetType::Four => 4,
            OctetType::Next | OctetType::Invalid => 0,
        }
    }

    /// `true` for the four types which begin a sequence
    pub const fn is_lead(self) -> bool {
        self.byte_count() != 0
    }

    /// Mask selecting the payload bits of a lead byte of this type
    pub(crate) const fn lead_mask(self) -> u8 {
        match self {
            OctetType::One => 0b0111_1111,
            OctetType::Two => 0b0001_1111,
            OctetType::Three => 0b0000_1111,
            OctetType::Four => 0b0000_0111,
            OctetType::Next => 0b0011_1111,
            OctetType::Invalid => 0,
        }
    }

    /// Fixed high bits of a lead byte of this type
    pub(crate) const fn lead_prefix(self) -> u8 {
        match self {
            OctetType::One => 0b0000_0000,
            OctetType::Two => 0b1100_0000,
            OctetType::Three => 0b1110_0000,
            OctetType::Four => 0b1111_0000,
            OctetType::Next => 0b1000_0000,
            OctetType::Invalid => 0b1111_1000,
        }
    }
}

impl From<u8> for OctetType {
    fn from(value: u8) -> Self {
        classify_byte(value)
    }
}

impl Display for OctetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OctetType::One => "one-byte",
            OctetType::Two => "two-byte",
            OctetType::Three => "three-byte",
            OctetType::Four => "four-byte",
            OctetType::Next => "continuation",
            OctetType::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Classify a single byte by its high bits
pub const fn classify_byte(byte: u8) -> OctetType {
    match byte {
        0b0000_0000..=0b0111_1111 => OctetType::One,
        0b1000_0000..=0b1011_1111 => OctetType::Next,
        0b1100_0000..=0b1101_1111 => OctetType::Two,
        0b1110_0000..=0b1110_1111 => OctetType::Three,
        0b1111_0000..=0b1111_0111 => OctetType::Four,
        _ => OctetType::Invalid,
    }
}

/// Classify a scalar value by the minimal number of bytes needed to encode it.
///
/// Surrogates and values above [`MAX_SCALAR`] are [`OctetType::Invalid`]
pub const fn classify_scalar(value: u32) -> OctetType {
    match value {
        0x0000..=0x007F => OctetType::One,
        0x0080..=0x07FF => OctetType::Two,
        0xD800..=0xDFFF => OctetType::Invalid,
        0x0800..=0xFFFF => OctetType::Three,
        0x10000..=MAX_SCALAR => OctetType::Four,
        _ => OctetType::Invalid,
    }
}

/// Free function form of [`OctetType::byte_count`]; `0` for `Next` and `Invalid`
pub const fn byte_count_for(ty: OctetType) -> usize {
    ty.byte_count()
}
