//! NE (16-bit) resource table walk.
//!
//! ```text
//! Resource table (at NE header + u16 at 0x24)
//! Offset  Size  Field
//! 0x00    2     rscAlignShift
//! 0x02    ...   Type blocks, terminated by a zero type id
//!
//! Type block (8 bytes + count * 12)
//! 0x00    2     Type id (0x8003 = RT_ICON)
//! 0x02    2     Resource count
//! 0x04    4     Reserved
//! 0x08    12*n  Resource records
//!
//! Resource record (12 bytes)
//! 0x00    2     Offset >> rscAlignShift
//! 0x02    2     Length >> rscAlignShift
//! 0x04    2     Flags
//! 0x06    2     Id
//! 0x08    2     Handle
//! 0x0A    2     Usage
//! ```

use crate::file::{
	ico::{DecodedIcon, decode_resource},
	view::ByteView,
};

use super::constants;

/// Computes the file window of an NE resource record.
///
/// Both fields are stored right-shifted by the table's alignment shift; the
/// window is `[offset << shift, (offset << shift) + (length << shift))`.
/// Shifts too large for the arithmetic yield `None`.
pub fn shifted_window(offset: u16, length: u16, shift: u16) -> Option<(usize, usize)> {
	if shift > constants::NE_MAX_ALIGN_SHIFT {
		return None;
	}

	let start = u64::from(offset) << shift;
	let len = u64::from(length) << shift;
	Some((usize::try_from(start).ok()?, usize::try_from(len).ok()?))
}

/// Decodes the icons of the first `RT_ICON` type block.
pub(super) fn read_icons(view: &ByteView<'_>, header: usize) -> Vec<DecodedIcon> {
	let Some(relative) = view.u16_le(header + constants::NE_RESOURCE_TABLE_OFFSET) else {
		return Vec::new();
	};

	let table = header + relative as usize;
	let Some(align_shift) = view.u16_le(table) else {
		log::debug!("NE resource table at {:#X} is outside the file", table);
		return Vec::new();
	};

	let mut icons = Vec::new();
	let mut type_block = table + 2;

	while type_block < view.len() {
		let Some(type_id) = view.u16_le(type_block) else {
			break;
		};
		if type_id == 0 {
			break;
		}

		let Some(count) = view.u16_le(type_block + 2) else {
			break;
		};

		if type_id == constants::NE_RT_ICON {
			for i in 0..count as usize {
				let record = type_block + constants::NE_TYPE_INFO_SIZE + i * constants::NE_NAME_INFO_SIZE;
				let (Some(offset), Some(length)) = (view.u16_le(record), view.u16_le(record + 2)) else {
					break;
				};

				let data = shifted_window(offset, length, align_shift)
					.filter(|&(start, _)| start > 0)
					.and_then(|(start, len)| view.slice(start, len));

				match data {
					Some(data) => icons.extend(decode_resource(data)),
					None => log::debug!(
						"NE icon record {} ({:#X}+{:#X} << {}) lies outside the file",
						i,
						offset,
						length,
						align_shift
					),
				}
			}

			// All icons of an NE file live in one type block.
			break;
		}

		type_block += constants::NE_TYPE_INFO_SIZE + count as usize * constants::NE_NAME_INFO_SIZE;
	}

	icons
}
