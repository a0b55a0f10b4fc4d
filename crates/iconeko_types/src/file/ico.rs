//! Icon resource decoding and minimal `.ICO` synthesis.
//!
//! Icon resources inside executables are stored either as complete PNG files or
//! as a bare `BITMAPINFOHEADER` followed by pixel and mask data. The latter is
//! not a standalone image, so it gets wrapped in a single-image icon container.
//!
//! # Synthesized Container Layout
//!
//! ```text
//! Offset  Size  Field          Description
//! ------  ----  -------------  ------------------------------------------
//! 0x00    2     reserved       Always 0
//! 0x02    2     type           1 (icon)
//! 0x04    2     count          1 image
//! 0x06    1     width          Pixel width, 0 means 256
//! 0x07    1     height         Pixel height (DIB height / 2), 0 means 256
//! 0x08    1     color_count    0
//! 0x09    1     reserved       0
//! 0x0A    2     planes         Copied from the DIB header
//! 0x0C    2     bit_count      Copied from the DIB header
//! 0x0E    4     bytes_in_res   Length of the appended DIB
//! 0x12    4     image_offset   22
//! 0x16    ...   DIB            Original resource bytes, verbatim
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::file::{FileType, IconFileError, view::ByteView};

/// Icon container constants.
pub mod constants {
	/// PNG file signature.
	pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

	/// Number of signature bytes checked when classifying a resource.
	pub const PNG_QUICK_CHECK_LEN: usize = 4;

	/// The only accepted `BITMAPINFOHEADER` size.
	pub const BITMAP_INFO_HEADER_SIZE: u32 = 40;

	/// Size of the icon directory header.
	pub const ICON_DIR_SIZE: usize = 6;

	/// Size of one icon directory entry.
	pub const ICON_DIR_ENTRY_SIZE: usize = 16;

	/// Offset of the image data in a single-image container.
	pub const ICON_DATA_OFFSET: usize = ICON_DIR_SIZE + ICON_DIR_ENTRY_SIZE;

	/// Icon directory resource type.
	pub const ICON_TYPE: u16 = 1;
}

/// Format of a decoded icon's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconFormat {
	/// Complete PNG file, passed through untouched
	Png,
	/// Single-image `.ICO` container built around a raw DIB
	SynthesizedIcon,
}

impl IconFormat {
	/// MIME type a display layer would attach to the bytes.
	pub fn mime_type(self) -> &'static str {
		match self {
			Self::Png => "image/png",
			Self::SynthesizedIcon => "image/x-icon",
		}
	}

	/// File extension without the dot.
	pub fn extension(self) -> &'static str {
		match self {
			Self::Png => "png",
			Self::SynthesizedIcon => "ico",
		}
	}
}

impl Display for IconFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Png => write!(f, "PNG"),
			Self::SynthesizedIcon => write!(f, "ICO"),
		}
	}
}

/// One extracted icon image.
///
/// Immutable once produced; the caller owns the bytes and decides how to
/// display or release them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedIcon {
	bytes: Vec<u8>,
	format: IconFormat,
}

impl DecodedIcon {
	/// Wraps bytes already known to be in `format`.
	pub fn new(bytes: Vec<u8>, format: IconFormat) -> Self {
		Self {
			bytes,
			format,
		}
	}

	/// Image bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Consumes the icon, returning its bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Image format.
	pub fn format(&self) -> IconFormat {
		self.format
	}

	/// Length of the image bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Returns `true` if the icon holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// MIME type of the bytes.
	pub fn mime_type(&self) -> &'static str {
		self.format.mime_type()
	}

	/// File extension for the bytes.
	pub fn extension(&self) -> &'static str {
		self.format.extension()
	}

	/// Directory entry of a synthesized container, `None` for PNG icons.
	pub fn dir_entry(&self) -> Option<IconDirEntry> {
		match self.format {
			IconFormat::SynthesizedIcon => IconDirEntry::from_icon_bytes(&self.bytes).ok(),
			IconFormat::Png => None,
		}
	}
}

/// The fields of a `BITMAPINFOHEADER` the decoder looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitmapInfoHeader {
	/// Header size, always 40 once parsed
	pub header_size: u32,
	/// Pixel width
	pub width: i32,
	/// Pixel height; icon DIBs store twice the image height to cover the AND mask
	pub height: i32,
	/// Colour planes
	pub planes: u16,
	/// Bits per pixel
	pub bit_count: u16,
	/// Compression method, 0 for `BI_RGB`
	pub compression: u32,
	/// Declared size of the pixel data, often 0
	pub image_size: u32,
}

impl BitmapInfoHeader {
	/// Size of the header in bytes.
	pub const SIZE: usize = constants::BITMAP_INFO_HEADER_SIZE as usize;

	/// Parses the header at the start of `data`.
	///
	/// # Errors
	///
	/// Returns an error if fewer than 40 bytes are available or if the
	/// header size field is anything but 40.
	pub fn from_bytes(data: &[u8]) -> Result<Self, IconFileError> {
		if data.len() < Self::SIZE {
			return Err(IconFileError::insufficient_data(FileType::Bitmap, Self::SIZE, data.len()));
		}

		let view = ByteView::new(data);
		let field = |offset: usize| {
			view.u32_le(offset)
				.ok_or_else(|| IconFileError::insufficient_data(FileType::Bitmap, offset + 4, data.len()))
		};

		let header_size = field(0)?;
		if header_size != constants::BITMAP_INFO_HEADER_SIZE {
			return Err(IconFileError::InvalidHeader {
				file_type: FileType::Bitmap,
				message: format!("header size {header_size}, expected 40"),
			});
		}

		Ok(Self {
			header_size,
			width: field(4)? as i32,
			height: field(8)? as i32,
			planes: view.u16_le(12).unwrap_or_default(),
			bit_count: view.u16_le(14).unwrap_or_default(),
			compression: field(16)?,
			image_size: field(20)?,
		})
	}

	/// Height of the colour image, excluding the AND mask half.
	pub fn icon_height(&self) -> i32 {
		self.height / 2
	}
}

/// Single icon directory entry as written by [`synthesize_icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconDirEntry {
	/// Width byte, 0 means 256 or more
	pub width: u8,
	/// Height byte, 0 means 256 or more
	pub height: u8,
	/// Palette size, 0 for none
	pub color_count: u8,
	/// Colour planes
	pub planes: u16,
	/// Bits per pixel
	pub bit_count: u16,
	/// Length of the image data
	pub bytes_in_res: u32,
	/// Offset of the image data from the start of the container
	pub image_offset: u32,
}

impl IconDirEntry {
	/// Reads the first directory entry of an `.ICO` container.
	///
	/// # Errors
	///
	/// Returns an error if the buffer is shorter than a header plus one entry
	/// or the header does not describe an icon directory.
	pub fn from_icon_bytes(data: &[u8]) -> Result<Self, IconFileError> {
		let view = ByteView::new(data);
		let (Some(reserved), Some(kind), Some(count), Some(entry)) = (
			view.u16_le(0),
			view.u16_le(2),
			view.u16_le(4),
			view.slice(constants::ICON_DIR_SIZE, constants::ICON_DIR_ENTRY_SIZE),
		) else {
			return Err(IconFileError::insufficient_data(
				FileType::Ico,
				constants::ICON_DATA_OFFSET,
				data.len(),
			));
		};

		if reserved != 0 || kind != constants::ICON_TYPE || count == 0 {
			return Err(IconFileError::InvalidHeader {
				file_type: FileType::Ico,
				message: format!("reserved={reserved} type={kind} count={count}"),
			});
		}

		Ok(Self {
			width: entry[0],
			height: entry[1],
			color_count: entry[2],
			planes: u16::from_le_bytes([entry[4], entry[5]]),
			bit_count: u16::from_le_bytes([entry[6], entry[7]]),
			bytes_in_res: u32::from_le_bytes([entry[8], entry[9], entry[10], entry[11]]),
			image_offset: u32::from_le_bytes([entry[12], entry[13], entry[14], entry[15]]),
		})
	}
}

/// Returns `true` when `data` starts with the PNG magic.
pub fn is_png(data: &[u8]) -> bool {
	data.len() >= constants::PNG_QUICK_CHECK_LEN
		&& data[..constants::PNG_QUICK_CHECK_LEN]
			== constants::PNG_SIGNATURE[..constants::PNG_QUICK_CHECK_LEN]
}

/// Clips a dimension to the single byte an icon directory entry holds.
fn dimension_byte(value: i32) -> u8 {
	if value >= 256 { 0 } else { value as u8 }
}

/// Wraps a raw DIB in a single-image `.ICO` container.
///
/// The DIB is appended verbatim; nothing in it is repaired.
///
/// # Errors
///
/// Returns an error if the DIB header is shorter than 40 bytes or declares a
/// header size other than 40.
///
/// # Examples
///
/// ```
/// use iconeko_types::file::ico::{IconDirEntry, synthesize_icon};
///
/// let mut dib = vec![0u8; 40];
/// dib[0] = 40; // header size
/// dib[4] = 16; // width
/// dib[8] = 32; // height (image + mask)
/// dib[12] = 1; // planes
/// dib[14] = 4; // bits per pixel
///
/// let ico = synthesize_icon(&dib).unwrap();
/// let entry = IconDirEntry::from_icon_bytes(&ico).unwrap();
/// assert_eq!((entry.width, entry.height), (16, 16));
/// assert_eq!(ico.len(), 22 + dib.len());
/// ```
pub fn synthesize_icon(dib: &[u8]) -> Result<Vec<u8>, IconFileError> {
	let header = BitmapInfoHeader::from_bytes(dib)?;
	let image_size = dib.len() as u32;

	let mut ico = Vec::with_capacity(constants::ICON_DATA_OFFSET + dib.len());

	// Directory header
	ico.extend_from_slice(&0u16.to_le_bytes());
	ico.extend_from_slice(&constants::ICON_TYPE.to_le_bytes());
	ico.extend_from_slice(&1u16.to_le_bytes());

	// Directory entry
	ico.push(dimension_byte(header.width));
	ico.push(dimension_byte(header.icon_height()));
	ico.push(0);
	ico.push(0);
	ico.extend_from_slice(&header.planes.to_le_bytes());
	ico.extend_from_slice(&header.bit_count.to_le_bytes());
	ico.extend_from_slice(&image_size.to_le_bytes());
	ico.extend_from_slice(&(constants::ICON_DATA_OFFSET as u32).to_le_bytes());

	ico.extend_from_slice(dib);
	Ok(ico)
}

/// Decodes the raw bytes of one icon resource.
///
/// PNG data passes through unchanged; anything else is treated as a DIB and
/// wrapped with [`synthesize_icon`]. A DIB the synthesizer rejects yields
/// `None`.
pub fn decode_resource(data: &[u8]) -> Option<DecodedIcon> {
	if is_png(data) {
		return Some(DecodedIcon::new(data.to_vec(), IconFormat::Png));
	}

	match synthesize_icon(data) {
		Ok(bytes) => Some(DecodedIcon::new(bytes, IconFormat::SynthesizedIcon)),
		Err(e) => {
			log::debug!("Skipping icon resource of {} bytes: {}", data.len(), e);
			None
		}
	}
}
