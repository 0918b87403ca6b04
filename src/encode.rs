use crate::{
    decode::DecodedCodePoint,
    error::EncodeError,
    octet::{OctetType, classify_scalar},
};

/// Write `point` at `start`, trusting `point.ty` as its classification.
///
/// `point.ty` must equal `classify_scalar(point.val)`, as it does for anything returned by
/// [`decode_next`](crate::decode_next). Otherwise the output is not utf-8: payload bits beyond
/// the tagged length are masked off and a surrogate tagged `Three` is written as-is.
///
/// All-or-nothing: on failure `dst` is left untouched
pub fn try_write_decoded(
    dst: &mut [u8],
    start: usize,
    point: DecodedCodePoint,
) -> Result<usize, EncodeError> {
    let len = match point.ty {
        OctetType::One | OctetType::Two | OctetType::Three | OctetType::Four => {
            point.ty.byte_count()
        }
        OctetType::Next | OctetType::Invalid => {
            return Err(EncodeError::InvalidOctetType(point.ty));
        }
    };

    let available = dst.len().saturating_sub(start);
    let out = start
        .checked_add(len)
        .and_then(|end| dst.get_mut(start..end))
        .ok_or(EncodeError::Capacity {
            needed: len,
            available,
        })?;

    let (lead, tail) = out.split_at_mut(1);
    let tail_bits = 6 * tail.len() as u32;

    lead[0] = point.ty.lead_prefix() | ((point.val >> tail_bits) as u8 & point.ty.lead_mask());

    // most significant continuation first
    for (i, byte) in tail.iter_mut().enumerate() {
        let shift = tail_bits - 6 * (i as u32 + 1);
        *byte = OctetType::Next.lead_prefix()
            | ((point.val >> shift) as u8 & OctetType::Next.lead_mask());
    }

    Ok(len)
}

/// Classify `value` and write its encoding at `start`
pub fn try_write_code_point(dst: &mut [u8], start: usize, value: u32) -> Result<usize, EncodeError> {
    let ty = classify_scalar(value);
    if ty == OctetType::Invalid {
        return Err(EncodeError::InvalidScalar(value));
    }

    try_write_decoded(dst, start, DecodedCodePoint { val: value, ty })
}

/// Write the utf-8 encoding of `value` into `dst` beginning at `start`.
///
/// Returns the number of bytes written, or `0` if `value` is not a scalar value or the encoding
/// does not fit in `dst[start..]`. Nothing is written when `0` is returned
pub fn write_code_point(dst: &mut [u8], start: usize, value: u32) -> usize {
    try_write_code_point(dst, start, value).unwrap_or(0)
}

/// Write an already classified code point, skipping classification.
///
/// Returns `0` without writing if `point.ty` is not a lead type or the encoding does not fit
pub fn write_decoded(dst: &mut [u8], start: usize, point: DecodedCodePoint) -> usize {
    try_write_decoded(dst, start, point).unwrap_or(0)
}

/// Total bytes required to encode every value in `values`.
///
/// Values which are not scalar values contribute `0`, since they cannot be encoded. Pair with
/// [`validate_scalars`](crate::validate_scalars) to detect them
pub fn encoded_length(values: &[u32]) -> usize {
    values
        .iter()
        .map(|&v| classify_scalar(v).byte_count())
        .sum()
}
