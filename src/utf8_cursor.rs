use std::cmp::Ordering;

use anyhow::Context;

use crate::{
    cursor::{Cursor, Seek},
    decode::try_decode_next,
    octet::{OctetType, classify_byte},
};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Exposes a borrowed byte slice as a stream of `char`s, decoding lazily as cursors move
///
/// Holds no state besides the slice; every position lives in a [`Utf8Cursor`]
#[derive(Debug)]
pub struct Utf8File<'a> {
    inner: &'a [u8],
}

/// Byte position of a sequence start within a [`Utf8File`]
#[derive(Debug)]
pub struct Utf8Cursor<'a> {
    file: &'a Utf8File<'a>,
    pos: usize,
}

impl<'a> Utf8File<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { inner: data }
    }

    /// get the cursor at the first code point, or `None` if there are no code points
    ///
    /// a leading utf-8 byte order mark is skipped
    pub fn start(&'a self) -> anyhow::Result<Option<Utf8Cursor<'a>>> {
        if self.inner.is_empty() {
            return Ok(None);
        }

        let start = Utf8Cursor { file: self, pos: 0 };

        match start.data()? {
            BYTE_ORDER_MARK => start.next(),
            _ => Ok(Some(start)),
        }
    }

    /// get a cursor at byte offset `pos`, which must begin a valid sequence
    pub fn cursor_at(&'a self, pos: usize) -> anyhow::Result<Utf8Cursor<'a>> {
        let cursor = Utf8Cursor { file: self, pos };
        cursor.data()?;
        Ok(cursor)
    }

    /// length in bytes of the sequence at `pos`
    fn sequence_len(&self, pos: usize) -> anyhow::Result<usize> {
        try_decode_next(self.inner, pos)
            .map(|point| point.len())
            .with_context(|| format!("Malformed utf-8 sequence at byte {pos}"))
    }

    /// start of the sequence ending immediately before `pos`
    fn sequence_before(&self, pos: usize) -> anyhow::Result<usize> {
        let floor = pos.saturating_sub(OctetType::Four.byte_count());
        let start = (floor..pos)
            .rev()
            .find(|&i| classify_byte(self.inner[i]) != OctetType::Next)
            .ok_or_else(|| anyhow::anyhow!("No sequence start within 4 bytes before byte {pos}"))?;

        let len = self.sequence_len(start)?;
        anyhow::ensure!(
            start + len == pos,
            "Sequence at byte {start} does not end at byte {pos}"
        );

        Ok(start)
    }
}

impl<'a> Utf8Cursor<'a> {
    /// byte offset of this cursor in the underlying slice
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// bytes of the sequence under this cursor
    pub fn as_bytes(&self) -> anyhow::Result<&'a [u8]> {
        let len = self.file.sequence_len(self.pos)?;
        Ok(&self.file.inner[self.pos..self.pos + len])
    }
}

impl<'a> PartialEq for Utf8Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.pos == other.pos
    }
}

impl<'a> Eq for Utf8Cursor<'a> {}

impl<'a> PartialOrd for Utf8Cursor<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if std::ptr::eq(self.file, other.file) {
            self.pos.partial_cmp(&other.pos)
        } else {
            None
        }
    }
}

impl<'a> Clone for Utf8Cursor<'a> {
    fn clone(&self) -> Self {
        Self {
            file: self.file,
            pos: self.pos,
        }
    }
}

impl<'a> Cursor for Utf8Cursor<'a> {
    type Item = char;

    fn data(&self) -> anyhow::Result<Self::Item> {
        let point = try_decode_next(self.file.inner, self.pos)
            .with_context(|| format!("Failed to decode code point at byte {}", self.pos))?;

        char::from_u32(point.val)
            .ok_or_else(|| anyhow::anyhow!("Decoded {:#06X}, which is not a char", point.val))
    }

    fn seek(&self, op: Seek) -> anyhow::Result<Option<Self>> {
        let mut pos = self.pos;

        match op {
            Seek::Right(n) => {
                for _ in 0..n {
                    pos += self.file.sequence_len(pos)?;
                    if pos >= self.file.inner.len() {
                        return Ok(None);
                    }
                }
            }
            Seek::Left(n) => {
                for _ in 0..n {
                    if pos == 0 {
                        return Ok(None);
                    }
                    pos = self.file.sequence_before(pos)?;
                }
            }
        }

        Ok(Some(Self {
            file: self.file,
            pos,
        }))
    }
}
