/// represents a seek operation for traversing a stream with [`Cursor::seek`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seek {
    /// Seek left-ward towards the beginning of the stream
    Left(usize),
    /// Seek right-ward towards the end of the stream
    Right(usize),
}

/// Cheaply clonable representation of a single element in some stream of items.
///
/// A cursor owns no iteration state besides its own position; advancing produces a new cursor
/// rather than mutating the old one.
pub trait Cursor: Clone + Sized {
    type Item;

    /// Get the data associated with this cursor, or an error indicating why this data could not be
    /// resolved
    ///
    /// No guarantee is made that this function is cheap to execute. For a utf-8 stream every call
    /// decodes the sequence under the cursor again.
    fn data(&self) -> anyhow::Result<Self::Item>;

    /// Get a [`Cursor`] at a position relative to this one, or [`None`], indicating that no such
    /// cursor exists, either because the seek would move before the start or past the end of the
    /// stream.
    ///
    /// Errors are reserved for streams which cannot be traversed, such as malformed input between
    /// `self` and the target.
    fn seek(&self, op: Seek) -> anyhow::Result<Option<Self>>;

    fn next(&self) -> anyhow::Result<Option<Self>> {
        self.seek(Seek::Right(1))
    }

    fn prev(&self) -> anyhow::Result<Option<Self>> {
        self.seek(Seek::Left(1))
    }
}
