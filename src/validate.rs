use crate::{
    decode::try_decode_next,
    error::{ScalarError, Utf8Error},
    octet::{OctetType, classify_scalar},
};

/// Walk `buf` from the start, returning the number of code points if every byte belongs to a
/// complete, valid sequence, or the position and reason of the first one that does not
pub fn check_bytes(buf: &[u8]) -> Result<usize, Utf8Error> {
    let mut pos = 0usize;
    let mut count = 0usize;

    while pos < buf.len() {
        let point = try_decode_next(buf, pos).map_err(|source| Utf8Error {
            valid_up_to: pos,
            source,
        })?;
        pos += point.len();
        count += 1;
    }

    Ok(count)
}

/// `true` if `buf` is well-formed utf-8, including that no sequence is cut off by the end of
/// the buffer
pub fn validate_bytes(buf: &[u8]) -> bool {
    check_bytes(buf).is_ok()
}

/// `true` if `value` is in `0..=0x10FFFF` and not a surrogate
pub const fn validate_scalar(value: u32) -> bool {
    !matches!(classify_scalar(value), OctetType::Invalid)
}

/// Find the first value in `values` which is not a scalar value
pub fn check_scalars(values: &[u32]) -> Result<(), ScalarError> {
    match values.iter().position(|&v| !validate_scalar(v)) {
        Some(index) => Err(ScalarError {
            index,
            val: values[index],
        }),
        None => Ok(()),
    }
}

/// `true` if every value in `values` is a scalar value. Empty buffers are valid
pub fn validate_scalars(values: &[u32]) -> bool {
    check_scalars(values).is_ok()
}
