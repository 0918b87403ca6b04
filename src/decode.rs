use crate::{
    error::DecodeError,
    octet::{MAX_SCALAR, OctetType, SURROGATES, classify_byte, classify_scalar},
};

/// A scalar value together with the type of sequence it was decoded from
///
/// On failure `val` is `0` and `ty` is [`OctetType::Invalid`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DecodedCodePoint {
    pub val: u32,
    pub ty: OctetType,
}

impl DecodedCodePoint {
    pub const INVALID: Self = Self {
        val: 0,
        ty: OctetType::Invalid,
    };

    /// Number of bytes consumed, `0` if decoding failed
    pub const fn len(self) -> usize {
        self.ty.byte_count()
    }

    pub const fn is_valid(self) -> bool {
        self.ty.is_lead()
    }

    /// The decoded value as a `char`, if decoding succeeded
    pub fn to_char(self) -> Option<char> {
        if self.is_valid() {
            char::from_u32(self.val)
        } else {
            None
        }
    }
}

impl From<char> for DecodedCodePoint {
    fn from(value: char) -> Self {
        let val = value as u32;
        Self {
            val,
            ty: classify_scalar(val),
        }
    }
}

/// Decode the code point beginning at `start`, explaining any failure.
///
/// Never reads past the end of `buf`. Rejects overlong encodings, surrogates and values above
/// U+10FFFF even when the byte-level grammar matches
pub fn try_decode_next(buf: &[u8], start: usize) -> Result<DecodedCodePoint, DecodeError> {
    let lead = *buf
        .get(start)
        .ok_or(DecodeError::OutOfBounds(start, buf.len()))?;

    let ty = classify_byte(lead);
    match ty {
        OctetType::One => {
            return Ok(DecodedCodePoint {
                val: lead as u32,
                ty,
            });
        }
        OctetType::Two | OctetType::Three | OctetType::Four => {}
        OctetType::Next => return Err(DecodeError::UnexpectedContinuation(lead)),
        OctetType::Invalid => return Err(DecodeError::InvalidLead(lead)),
    }

    let len = ty.byte_count();
    let tail = &buf[start + 1..];
    let mut val = (lead & ty.lead_mask()) as u32;

    // check continuation bytes before truncation so a short buffer ending in a bad byte reports
    // the bad byte
    for (offset, &byte) in tail.iter().take(len - 1).enumerate() {
        if classify_byte(byte) != OctetType::Next {
            return Err(DecodeError::NotContinuation {
                index: start + 1 + offset,
                byte,
            });
        }
        val = (val << 6) | (byte & OctetType::Next.lead_mask()) as u32;
    }

    if tail.len() < len - 1 {
        return Err(DecodeError::Truncated {
            expected: len,
            available: tail.len() + 1,
        });
    }

    match classify_scalar(val) {
        scalar if scalar == ty => Ok(DecodedCodePoint { val, ty }),
        OctetType::Invalid if val > MAX_SCALAR => Err(DecodeError::OutOfRange(val)),
        OctetType::Invalid if SURROGATES.contains(&val) => Err(DecodeError::Surrogate(val)),
        _ => Err(DecodeError::Overlong { val, len }),
    }
}

/// Decode the code point beginning at `start`.
///
/// Returns [`DecodedCodePoint::INVALID`] on any malformed, truncated, overlong, surrogate or
/// out-of-range sequence, and when `start` is not inside `buf`. The number of bytes consumed on
/// success is `byte_count_for(result.ty)`
pub fn decode_next(buf: &[u8], start: usize) -> DecodedCodePoint {
    try_decode_next(buf, start).unwrap_or(DecodedCodePoint::INVALID)
}

/// Count the code points in `buf`.
///
/// Decoding stops at the first malformed sequence; the result is the number of code points
/// decoded before it. A count says nothing about validity, use
/// [`validate_bytes`](crate::validate_bytes) for that
pub fn count_code_points(buf: &[u8]) -> usize {
    let mut pos = 0usize;
    let mut count = 0usize;

    while pos < buf.len() {
        let point = decode_next(buf, pos);
        if !point.is_valid() {
            break;
        }
        pos += point.len();
        count += 1;
    }

    count
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_euro_sign() {
        let bytes = [0xE2, 0x82, 0xAC];
        assert_eq!(
            decode_next(&bytes, 0),
            DecodedCodePoint {
                val: 0x20AC,
                ty: OctetType::Three
            }
        );
        assert_eq!(count_code_points(&bytes), 1);
    }

    #[test]
    fn decodes_hello() {
        let bytes = [0x48, 0x65, 0x6C, 0x6C, 0x6F];
        assert_eq!(count_code_points(&bytes), 5);

        let point = decode_next(&bytes, 1);
        assert_eq!(point.to_char(), Some('e'));
        assert_eq!(point.len(), 1);
    }

    #[test]
    fn decodes_mid_buffer() {
        let bytes = "a€😀".as_bytes();
        assert_eq!(decode_next(bytes, 1).val, 0x20AC);
        assert_eq!(decode_next(bytes, 4).val, 0x1F600);
        assert_eq!(decode_next(bytes, 4).ty, OctetType::Four);
        assert_eq!(decode_next(bytes, 2), DecodedCodePoint::INVALID);
    }

    #[test]
    fn every_scalar_round_trips() {
        let mut buf = [0u8; 4];
        for c in '\0'..=char::MAX {
            let expected = c.encode_utf8(&mut buf).len();
            let point = decode_next(&buf[..expected], 0);
            assert!(
                point == DecodedCodePoint::from(c),
                "{c:?} decoded as {point:?}"
            );
            assert_eq!(point.len(), expected);
        }
    }

    #[test]
    fn rejects_invalid_byte() {
        assert_eq!(decode_next(&[0xFF], 0), DecodedCodePoint::INVALID);
        assert_eq!(try_decode_next(&[0xFF], 0), Err(DecodeError::InvalidLead(0xFF)));
    }

    #[test]
    fn rejects_leading_continuation() {
        assert_eq!(
            try_decode_next(&[0x80, 0x41], 0),
            Err(DecodeError::UnexpectedContinuation(0x80))
        );
    }

    #[test]
    fn rejects_overlong_forms() {
        let forms: [&[u8]; 3] = [
            &[0xC1, 0x81],
            &[0xE0, 0x81, 0x81],
            &[0xF0, 0x80, 0x81, 0x81],
        ];

        for bytes in forms {
            assert_eq!(decode_next(bytes, 0), DecodedCodePoint::INVALID, "{bytes:02X?}");
            assert_eq!(
                try_decode_next(bytes, 0),
                Err(DecodeError::Overlong {
                    val: 0x41,
                    len: bytes.len()
                })
            );
        }

        // overlong NUL
        assert_eq!(decode_next(&[0xC0, 0x80], 0), DecodedCodePoint::INVALID);
    }

    #[test]
    fn rejects_encoded_surrogates() {
        assert_eq!(
            try_decode_next(&[0xED, 0xA0, 0x80], 0),
            Err(DecodeError::Surrogate(0xD800))
        );
        assert_eq!(
            try_decode_next(&[0xED, 0xBF, 0xBF], 0),
            Err(DecodeError::Surrogate(0xDFFF))
        );
        assert_eq!(decode_next(&[0xED, 0x9F, 0xBF], 0).val, 0xD7FF);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            try_decode_next(&[0xF4, 0x90, 0x80, 0x80], 0),
            Err(DecodeError::OutOfRange(0x110000))
        );
        assert_eq!(
            try_decode_next(&[0xF7, 0xBF, 0xBF, 0xBF], 0),
            Err(DecodeError::OutOfRange(0x1FFFFF))
        );
        assert_eq!(decode_next(&[0xF4, 0x8F, 0xBF, 0xBF], 0).val, 0x10FFFF);
    }

    #[test]
    fn truncation_does_not_read_past_length() {
        // the byte past the declared length would complete the sequence
        let backing = [0xE2, 0x82, 0xAC];
        let bytes = &backing[..2];

        assert_eq!(decode_next(bytes, 0), DecodedCodePoint::INVALID);
        assert_eq!(
            try_decode_next(bytes, 0),
            Err(DecodeError::Truncated {
                expected: 3,
                available: 2
            })
        );
        assert_eq!(
            try_decode_next(&[0xF0], 0),
            Err(DecodeError::Truncated {
                expected: 4,
                available: 1
            })
        );
    }

    #[test]
    fn rejects_missing_continuation() {
        assert_eq!(
            try_decode_next(&[0xE2, 0x41, 0xAC], 0),
            Err(DecodeError::NotContinuation {
                index: 1,
                byte: 0x41
            })
        );
        // bad byte is reported even if the buffer is also short
        assert_eq!(
            try_decode_next(&[0x20, 0xF0, 0x90, 0xC0], 1),
            Err(DecodeError::NotContinuation {
                index: 3,
                byte: 0xC0
            })
        );
    }

    #[test]
    fn start_outside_buffer_is_invalid() {
        assert_eq!(decode_next(&[], 0), DecodedCodePoint::INVALID);
        assert_eq!(try_decode_next(&[0x41], 1), Err(DecodeError::OutOfBounds(1, 1)));
    }

    #[test]
    fn count_stops_at_first_failure() {
        assert_eq!(count_code_points(&[]), 0);
        assert_eq!(count_code_points(&[0x41, 0x42, 0xFF, 0x43, 0x44]), 2);
        assert_eq!(count_code_points(&[0xE2, 0x82, 0xAC, 0xE2, 0x82]), 1);
        assert_eq!(count_code_points(&[0x80]), 0);
    }
}
