//! # utf8-codec
//!
//! Classification, decoding, encoding and validation of utf-8 over caller supplied buffers.
//!
//! Nothing here allocates or retains a buffer between calls. The plain operations report failure
//! through [`OctetType::Invalid`], a `0` length or `false`; the `try_`/`check_` forms return the
//! same outcome as a [`Result`] explaining what went wrong.

pub mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod octet;
pub mod utf8_cursor;
pub mod validate;

pub use cursor::{Cursor, Seek};
pub use decode::{DecodedCodePoint, count_code_points, decode_next, try_decode_next};
pub use encode::{
    encoded_length, try_write_code_point, try_write_decoded, write_code_point, write_decoded,
};
pub use error::{DecodeError, EncodeError, ScalarError, Utf8Error};
pub use octet::{MAX_SCALAR, OctetType, byte_count_for, classify_byte, classify_scalar};
pub use utf8_cursor::{Utf8Cursor, Utf8File};
pub use validate::{check_bytes, check_scalars, validate_bytes, validate_scalar, validate_scalars};
