//! Bounds-checked reads over an in-memory buffer.
//!
//! Container offsets are untrusted. Every read goes through [`ByteView`], which
//! answers `None` instead of panicking when a field would cross the end of the
//! buffer.

/// Read-only view over a byte buffer with checked field accessors.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
	data: &'a [u8],
}

impl<'a> ByteView<'a> {
	/// Wraps a byte slice.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
		}
	}

	/// Underlying bytes.
	pub fn bytes(&self) -> &'a [u8] {
		self.data
	}

	/// Buffer length.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` when the buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns `len` bytes starting at `offset`, or `None` if the range leaves the buffer.
	pub fn slice(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
		let end = offset.checked_add(len)?;
		self.data.get(offset..end)
	}

	fn array<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
		self.slice(offset, N)?.try_into().ok()
	}

	/// Reads one byte.
	pub fn u8_at(&self, offset: usize) -> Option<u8> {
		self.data.get(offset).copied()
	}

	/// Reads a little-endian `u16`.
	pub fn u16_le(&self, offset: usize) -> Option<u16> {
		self.array(offset).map(u16::from_le_bytes)
	}

	/// Reads a little-endian `u32`.
	pub fn u32_le(&self, offset: usize) -> Option<u32> {
		self.array(offset).map(u32::from_le_bytes)
	}

	/// Reads a little-endian `i32`.
	pub fn i32_le(&self, offset: usize) -> Option<i32> {
		self.array(offset).map(i32::from_le_bytes)
	}

	/// Reads a big-endian `u32` (PNG chunk lengths).
	pub fn u32_be(&self, offset: usize) -> Option<u32> {
		self.array(offset).map(u32::from_be_bytes)
	}

	/// Returns `true` when `pattern` occurs at `offset`.
	pub fn matches(&self, offset: usize, pattern: &[u8]) -> bool {
		self.slice(offset, pattern.len()) == Some(pattern)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reads_stop_at_buffer_end() {
		let data = [0x4D, 0x5A, 0x01, 0x02, 0x03];
		let view = ByteView::new(&data);

		assert_eq!(view.u16_le(0), Some(0x5A4D));
		assert_eq!(view.u32_le(1), Some(0x0302_015A));
		assert_eq!(view.u32_le(2), None);
		assert_eq!(view.u8_at(5), None);
		assert_eq!(view.slice(usize::MAX, 2), None);
	}

	#[test]
	fn test_big_endian_and_pattern() {
		let data = [0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R'];
		let view = ByteView::new(&data);

		assert_eq!(view.u32_be(0), Some(13));
		assert!(view.matches(4, b"IHDR"));
		assert!(!view.matches(5, b"IHDR"));
	}
}
