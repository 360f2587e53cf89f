//! Byte-level cursor with bounded reads, lookahead, and exact stepping.

use crate::error::{CursorError, CursorResult};

/// A forward reading cursor over a borrowed message buffer.
///
/// All multi-byte values are big-endian. Every read is bounds-checked and
/// returns an error instead of panicking on short input. A failed read or
/// step never moves the cursor.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a new `ByteCursor` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the length of the underlying buffer.
    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> CursorResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> CursorResult<u16> {
        self.read_array::<2>().map(u16::from_be_bytes)
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> CursorResult<u32> {
        self.read_array::<4>().map(u32::from_be_bytes)
    }

    /// Reads a big-endian IEEE-754 `f32`.
    pub fn read_f32(&mut self) -> CursorResult<f32> {
        self.read_array::<4>().map(f32::from_be_bytes)
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> CursorResult<[u8; N]> {
        let slice = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Reads `n` bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, n: usize) -> CursorResult<&'a [u8]> {
        self.ensure_bytes(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Reads `n` bytes of ASCII text.
    ///
    /// The cursor does not move if any byte is outside the ASCII range.
    pub fn read_ascii(&mut self, n: usize) -> CursorResult<&'a str> {
        self.ensure_bytes(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        if let Some(idx) = slice.iter().position(|b| !b.is_ascii()) {
            return Err(CursorError::InvalidAscii {
                offset: self.pos + idx,
            });
        }
        self.pos += n;
        // ASCII is valid UTF-8; the fallback is never taken.
        Ok(std::str::from_utf8(slice).unwrap_or_default())
    }

    /// Returns the big-endian `u32` at the current position without consuming it.
    ///
    /// Returns `None` when fewer than four bytes remain.
    #[must_use]
    pub fn peek_u32(&self) -> Option<u32> {
        let bytes = self.data.get(self.pos..self.pos.checked_add(4)?)?;
        bytes.try_into().ok().map(u32::from_be_bytes)
    }

    /// Moves the cursor forward by `n` bytes without reading them.
    ///
    /// Stepping exactly to the end of the buffer is allowed.
    pub fn advance(&mut self, n: usize) -> CursorResult<()> {
        if n > self.remaining() {
            return Err(self.out_of_bounds(n, true));
        }
        self.pos += n;
        Ok(())
    }

    /// Moves the cursor backward by `n` bytes.
    ///
    /// `retreat(n)` after a successful `advance(n)` restores the previous position.
    pub fn retreat(&mut self, n: usize) -> CursorResult<()> {
        if n > self.pos {
            return Err(self.out_of_bounds(n, false));
        }
        self.pos -= n;
        Ok(())
    }

    fn ensure_bytes(&self, n: usize) -> CursorResult<()> {
        let available = self.remaining();
        if n > available {
            return Err(CursorError::UnexpectedEof {
                requested: n,
                available,
            });
        }
        Ok(())
    }

    fn out_of_bounds(&self, n: usize, forward: bool) -> CursorError {
        let magnitude = isize::try_from(n).unwrap_or(isize::MAX);
        CursorError::SeekOutOfBounds {
            position: self.pos,
            delta: if forward { magnitude } else { -magnitude },
            len: self.data.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cursor() {
        let cursor = ByteCursor::new(&[]);
        assert!(cursor.is_empty());
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.peek_u32(), None);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut cursor = ByteCursor::new(&[]);
        let result = cursor.read_u8();
        assert!(matches!(
            result,
            Err(CursorError::UnexpectedEof {
                requested: 1,
                available: 0
            })
        ));
    }

    #[test]
    fn read_integers_big_endian() {
        let mut cursor = ByteCursor::new(&[0x12, 0x34, 0x12, 0x34, 0x56, 0x78, 0xAB]);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_u8().unwrap(), 0xAB);
        assert!(cursor.is_empty());
    }

    #[test]
    fn read_f32_big_endian() {
        let bytes = 1.5f32.to_be_bytes();
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_f32().unwrap(), 1.5);
    }

    #[test]
    fn short_read_does_not_move() {
        let mut cursor = ByteCursor::new(&[1, 2, 3]);
        cursor.read_u8().unwrap();
        let err = cursor.read_u32().unwrap_err();
        assert_eq!(
            err,
            CursorError::UnexpectedEof {
                requested: 4,
                available: 2
            }
        );
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn read_bytes_borrows_buffer() {
        let data = [9u8, 8, 7, 6];
        let mut cursor = ByteCursor::new(&data);
        let slice = cursor.read_bytes(3).unwrap();
        assert_eq!(slice, &[9, 8, 7]);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn read_ascii_tag() {
        let mut cursor = ByteCursor::new(b"DVEL");
        assert_eq!(cursor.read_ascii(1).unwrap(), "D");
        assert_eq!(cursor.read_ascii(3).unwrap(), "VEL");
    }

    #[test]
    fn read_ascii_rejects_high_bytes() {
        let mut cursor = ByteCursor::new(&[b'V', 0xC3, b'L']);
        let err = cursor.read_ascii(3).unwrap_err();
        assert_eq!(err, CursorError::InvalidAscii { offset: 1 });
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn read_ascii_rejects_valid_utf8() {
        let mut cursor = ByteCursor::new("REé".as_bytes());
        let err = cursor.read_ascii(4).unwrap_err();
        assert_eq!(err, CursorError::InvalidAscii { offset: 2 });
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_ascii(2).unwrap(), "RE");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = ByteCursor::new(b"DREF\x01");
        assert_eq!(cursor.peek_u32(), Some(0x4452_4546));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u32().unwrap(), 0x4452_4546);
        assert_eq!(cursor.peek_u32(), None);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn advance_then_retreat_restores_position() {
        let mut cursor = ByteCursor::new(&[0u8; 8]);
        cursor.advance(2).unwrap();
        cursor.advance(3).unwrap();
        cursor.retreat(3).unwrap();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn advance_to_end_is_allowed() {
        let mut cursor = ByteCursor::new(&[0u8; 4]);
        cursor.advance(4).unwrap();
        assert!(cursor.is_empty());
        let err = cursor.advance(1).unwrap_err();
        assert_eq!(
            err,
            CursorError::SeekOutOfBounds {
                position: 4,
                delta: 1,
                len: 4
            }
        );
    }

    #[test]
    fn retreat_past_start_fails() {
        let mut cursor = ByteCursor::new(&[0u8; 4]);
        cursor.advance(1).unwrap();
        let err = cursor.retreat(2).unwrap_err();
        assert_eq!(
            err,
            CursorError::SeekOutOfBounds {
                position: 1,
                delta: -2,
                len: 4
            }
        );
        assert_eq!(cursor.position(), 1);
    }
}
