//! PE32/PE32+ resource section lookup.

use crate::file::{
	FileType, IconFileError,
	ico::{DecodedIcon, decode_resource},
	view::ByteView,
};

use super::{ContainerKind, constants, directory::ResourceDirectory};

/// Where the resource section lives, in memory and in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceSection {
	/// RVA of the resource directory, from data directory entry 2
	pub rva: u32,
	/// `VirtualAddress` of the section containing `rva`
	pub virtual_address: u32,
	/// `PointerToRawData` of that section
	pub raw_pointer: u32,
}

impl ResourceSection {
	/// Translates an RVA inside this section into a file offset.
	///
	/// RVAs below the section start are rejected.
	pub fn rva_to_offset(&self, rva: u32) -> Option<usize> {
		let delta = rva.checked_sub(self.virtual_address)?;
		(delta as usize).checked_add(self.raw_pointer as usize)
	}

	/// File offset of the resource directory root.
	pub fn directory_offset(&self) -> Option<usize> {
		self.rva_to_offset(self.rva)
	}
}

/// Reads the optional header magic to pick the 32- or 64-bit layout.
pub(super) fn classify(view: &ByteView<'_>, header: usize) -> ContainerKind {
	match view.u16_le(header + constants::PE_OPTIONAL_HEADER_OFFSET) {
		Some(constants::PE32_PLUS_MAGIC) => ContainerKind::Modern64,
		_ => ContainerKind::Modern32,
	}
}

/// Finds the section that covers the resource data directory RVA.
///
/// Returns `None` when the RVA is zero, when no section covers it, or when the
/// covering section has no raw data.
pub(super) fn locate_resource_section(
	view: &ByteView<'_>,
	header: usize,
	kind: ContainerKind,
) -> Option<ResourceSection> {
	let data_directory = header
		+ constants::PE_OPTIONAL_HEADER_OFFSET
		+ match kind {
			ContainerKind::Modern64 => constants::PE32_PLUS_DATA_DIRECTORY_OFFSET,
			_ => constants::PE32_DATA_DIRECTORY_OFFSET,
		};
	let rva = view.u32_le(
		data_directory
			+ constants::RESOURCE_DATA_DIRECTORY_INDEX * constants::DATA_DIRECTORY_ENTRY_SIZE,
	)?;
	if rva == 0 {
		log::debug!("PE has no resource directory");
		return None;
	}

	let section_count = view.u16_le(header + constants::PE_NUMBER_OF_SECTIONS_OFFSET)?;
	let optional_header_size =
		view.u16_le(header + constants::PE_SIZE_OF_OPTIONAL_HEADER_OFFSET)?;
	let table = header + constants::PE_OPTIONAL_HEADER_OFFSET + optional_header_size as usize;

	for i in 0..section_count as usize {
		let section = table + i * constants::SECTION_HEADER_SIZE;
		let (Some(virtual_size), Some(virtual_address), Some(raw_size), Some(raw_pointer)) = (
			view.u32_le(section + constants::SECTION_VIRTUAL_SIZE_OFFSET),
			view.u32_le(section + constants::SECTION_VIRTUAL_ADDRESS_OFFSET),
			view.u32_le(section + constants::SECTION_RAW_SIZE_OFFSET),
			view.u32_le(section + constants::SECTION_RAW_POINTER_OFFSET),
		) else {
			break;
		};

		// Packed images sometimes leave VirtualSize at 0, so take the larger size.
		let extent = u64::from(virtual_size.max(raw_size));
		if rva >= virtual_address && u64::from(rva) < u64::from(virtual_address) + extent {
			if raw_pointer == 0 {
				log::debug!("Section {} covers the resources but has no raw data", i);
				return None;
			}

			return Some(ResourceSection {
				rva,
				virtual_address,
				raw_pointer,
			});
		}
	}

	log::debug!("No section covers resource RVA {:#X}", rva);
	None
}

/// Decodes every icon resource of a PE image.
pub(super) fn read_icons(
	view: &ByteView<'_>,
	section: &ResourceSection,
) -> Vec<DecodedIcon> {
	let Some(root) = section.directory_offset().filter(|&offset| offset > 0 && offset < view.len())
	else {
		log::debug!("Resource directory RVA {:#X} maps outside the file", section.rva);
		return Vec::new();
	};

	let directory = ResourceDirectory::new(*view, root);
	directory
		.icon_entries()
		.into_iter()
		.filter_map(|entry| {
			let Some(offset) = section.rva_to_offset(entry.rva).filter(|&offset| offset > 0) else {
				log::debug!("Icon {} at RVA {:#X} is not backed by the file", entry.id, entry.rva);
				return None;
			};

			let Some(data) = view.slice(offset, entry.size as usize) else {
				let err =
					IconFileError::out_of_range(FileType::Exe, offset, entry.size as usize, view.len());
				log::debug!("Skipping icon {}: {err}", entry.id);
				return None;
			};

			decode_resource(data)
		})
		.collect()
}
