//! Heuristic image ripping from arbitrary binary data.
//!
//! When no resource directory can be found, the buffer is scanned byte by byte
//! for two patterns:
//!
//! - **PNG**: the 8-byte signature, followed by a chunk walk up to `IEND`.
//!   The whole file from signature through the `IEND` CRC becomes one result.
//! - **DIB**: a little-endian `40` (the `BITMAPINFOHEADER` size), accepted only
//!   when the fields after it look like an icon bitmap. The candidate region
//!   is wrapped with [`synthesize_icon`](super::ico::synthesize_icon).
//!
//! # Bitmap Heuristics
//!
//! ```text
//! Field        Accepted values
//! -----------  ---------------------
//! width        1..=512
//! height       1..=1024 (image + mask)
//! planes       1
//! bit_count    1, 4, 8, 24, 32
//! compression  0
//! ```
//!
//! Ripping never fails; a buffer with no matches yields an empty result.

use crate::file::{
	ico::{BitmapInfoHeader, DecodedIcon, IconFormat, constants::PNG_SIGNATURE, synthesize_icon},
	view::ByteView,
};

/// Ripper limits.
pub mod constants {
	/// Bytes that must remain after the cursor for a match to be attempted.
	pub const MIN_TAIL: usize = 16;

	/// Chunk overhead: length + type + CRC.
	pub const PNG_CHUNK_OVERHEAD: usize = 12;

	/// Terminating PNG chunk type.
	pub const PNG_END_CHUNK: [u8; 4] = *b"IEND";

	/// Largest accepted DIB width.
	pub const MAX_DIB_WIDTH: i32 = 512;

	/// Largest accepted DIB height (image and mask combined).
	pub const MAX_DIB_HEIGHT: i32 = 1024;

	/// Accepted bit depths.
	pub const DIB_BIT_COUNTS: [u16; 5] = [1, 4, 8, 24, 32];

	/// Slack added to an estimated pixel size to cover the AND mask and row padding.
	pub const ESTIMATE_MARGIN: usize = 4096;

	/// Upper bound on the pixel data taken for one ripped bitmap.
	pub const MAX_DIB_PAYLOAD: usize = 500_000;
}

/// Iterator yielding every icon found by scanning a buffer.
///
/// # Examples
///
/// ```
/// use iconeko_types::file::rip::RipIter;
///
/// let junk = vec![0u8; 1024];
/// assert_eq!(RipIter::new(&junk).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RipIter<'a> {
	view: ByteView<'a>,
	cursor: usize,
}

impl<'a> RipIter<'a> {
	/// Starts a scan at the beginning of `data`.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			view: ByteView::new(data),
			cursor: 0,
		}
	}

	/// Walks PNG chunks from a signature at `start`, returning the end of the `IEND` chunk.
	fn png_end(&self, start: usize) -> Option<usize> {
		let len = self.view.len();
		let mut offset = start + PNG_SIGNATURE.len();

		loop {
			if offset + constants::PNG_CHUNK_OVERHEAD > len {
				return None;
			}

			let chunk_len = self.view.u32_be(offset)? as usize;
			if self.view.matches(offset + 4, &constants::PNG_END_CHUNK) {
				return Some(offset + constants::PNG_CHUNK_OVERHEAD);
			}

			offset = offset.checked_add(constants::PNG_CHUNK_OVERHEAD + chunk_len)?;
			if offset > len {
				return None;
			}
		}
	}

	/// Checks whether a plausible icon DIB header sits at `start`.
	fn dib_header(&self, start: usize) -> Option<BitmapInfoHeader> {
		let header = BitmapInfoHeader::from_bytes(self.view.bytes().get(start..)?).ok()?;

		let plausible = header.width > 0
			&& header.width <= constants::MAX_DIB_WIDTH
			&& header.height > 0
			&& header.height <= constants::MAX_DIB_HEIGHT
			&& header.planes == 1
			&& constants::DIB_BIT_COUNTS.contains(&header.bit_count)
			&& header.compression == 0;

		plausible.then_some(header)
	}

	/// Size of the pixel data to take after a DIB header.
	fn dib_payload_size(header: &BitmapInfoHeader) -> usize {
		let declared = header.image_size as usize;
		let size = if declared == 0 {
			// Heuristics guarantee positive dimensions, so the product cannot wrap.
			header.width as usize * header.height as usize * header.bit_count as usize / 8
				+ constants::ESTIMATE_MARGIN
		} else {
			declared
		};
		size.min(constants::MAX_DIB_PAYLOAD)
	}

	fn rip_png(&mut self, start: usize) -> Option<DecodedIcon> {
		if !self.view.matches(start, &PNG_SIGNATURE) {
			return None;
		}

		let end = self.png_end(start)?;
		let bytes = self.view.slice(start, end - start)?.to_vec();
		self.cursor = end;
		Some(DecodedIcon::new(bytes, IconFormat::Png))
	}

	fn rip_dib(&mut self, start: usize) -> Option<DecodedIcon> {
		let header = self.dib_header(start)?;
		let payload = Self::dib_payload_size(&header);

		let len = self.view.len();
		if start + payload > len {
			return None;
		}

		let end = (start + payload + BitmapInfoHeader::SIZE).min(len);
		let bytes = synthesize_icon(&self.view.bytes()[start..end]).ok()?;
		self.cursor = start + BitmapInfoHeader::SIZE;
		Some(DecodedIcon::new(bytes, IconFormat::SynthesizedIcon))
	}
}

impl Iterator for RipIter<'_> {
	type Item = DecodedIcon;

	fn next(&mut self) -> Option<Self::Item> {
		while self.cursor + constants::MIN_TAIL < self.view.len() {
			let start = self.cursor;

			if let Some(icon) = self.rip_png(start) {
				log::trace!("Ripped PNG at {:#X} ({} bytes)", start, icon.len());
				return Some(icon);
			}

			if let Some(icon) = self.rip_dib(start) {
				log::trace!("Ripped DIB at {:#X} ({} bytes)", start, icon.len());
				return Some(icon);
			}

			self.cursor += 1;
		}

		None
	}
}

/// Scans `data` for embedded PNG files and icon DIBs.
pub fn rip_icons(data: &[u8]) -> Vec<DecodedIcon> {
	RipIter::new(data).collect()
}
