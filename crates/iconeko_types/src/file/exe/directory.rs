//! PE resource directory traversal.
//!
//! The resource tree has exactly three levels (type, id, language). Every
//! "pointer" is an offset from the start of the resource section, so the walk
//! is a fixed sequence of index lookups into the buffer instead of a recursive
//! structure.
//!
//! ```text
//! Directory table (16 bytes)
//! Offset  Size  Field
//! 0x0C    2     NumberOfNamedEntries
//! 0x0E    2     NumberOfIdEntries
//! 0x10    8*n   Entries
//!
//! Directory entry (8 bytes)
//! 0x00    4     Id (or name offset)
//! 0x04    4     Bit 31: subdirectory flag, bits 0-30: offset from section start
//!
//! Data entry (16 bytes, first 8 used)
//! 0x00    4     RVA of the resource bytes
//! 0x04    4     Size of the resource bytes
//! ```

use crate::file::view::ByteView;

use super::constants;

/// One entry of a resource directory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectoryEntry {
	/// Resource type, id, or language, depending on the level
	pub id: u32,
	/// Top bit of the raw offset field
	pub is_subdirectory: bool,
	/// Lower 31 bits of the raw offset field, relative to the resource section
	pub offset: u32,
}

impl DirectoryEntry {
	/// Splits a raw offset field into its flag and offset.
	pub fn from_raw(id: u32, raw_offset: u32) -> Self {
		Self {
			id,
			is_subdirectory: raw_offset & constants::SUBDIRECTORY_FLAG != 0,
			offset: raw_offset & !constants::SUBDIRECTORY_FLAG,
		}
	}
}

/// Location of one icon's bytes, as named by its data entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataEntry {
	/// Icon resource id
	pub id: u32,
	/// RVA of the resource bytes
	pub rva: u32,
	/// Length of the resource bytes
	pub size: u32,
}

/// Resource directory rooted at a file offset.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDirectory<'a> {
	view: ByteView<'a>,
	base: usize,
}

impl<'a> ResourceDirectory<'a> {
	/// Creates a walker for the tree whose root table sits at file offset `base`.
	pub fn new(view: ByteView<'a>, base: usize) -> Self {
		Self {
			view,
			base,
		}
	}

	/// File offset of the root table.
	pub fn base(&self) -> usize {
		self.base
	}

	/// Reads the entries of the table at `relative` bytes from the root.
	///
	/// A table header that does not fit yields no entries; entries that run
	/// past the buffer end are dropped.
	pub fn entries(&self, relative: u32) -> Vec<DirectoryEntry> {
		let Some(table) = self.base.checked_add(relative as usize) else {
			return Vec::new();
		};

		let (Some(named), Some(ids)) = (
			self.view.u16_le(table + constants::RESOURCE_NAMED_ENTRIES_OFFSET),
			self.view.u16_le(table + constants::RESOURCE_ID_ENTRIES_OFFSET),
		) else {
			return Vec::new();
		};

		let count = named as usize + ids as usize;
		let first = table + constants::RESOURCE_DIRECTORY_HEADER_SIZE;

		(0..count)
			.map(|i| first + i * constants::RESOURCE_DIRECTORY_ENTRY_SIZE)
			.map_while(|offset| {
				let id = self.view.u32_le(offset)?;
				let raw_offset = self.view.u32_le(offset + 4)?;
				Some(DirectoryEntry::from_raw(id, raw_offset))
			})
			.collect()
	}

	/// Reads the data entry at `relative` bytes from the root.
	fn data_entry(&self, id: u32, relative: u32) -> Option<DataEntry> {
		let offset = self.base.checked_add(relative as usize)?;
		self.view.slice(offset, constants::RESOURCE_DATA_ENTRY_SIZE)?;

		Some(DataEntry {
			id,
			rva: self.view.u32_le(offset)?,
			size: self.view.u32_le(offset + 4)?,
		})
	}

	/// Walks type → id → language and returns the data entry of every icon.
	///
	/// Icons come out in ascending id order. Only the first language of each id
	/// is used. Branches with a missing subdirectory flag are dropped without
	/// affecting their siblings.
	pub fn icon_entries(&self) -> Vec<DataEntry> {
		let Some(icon_type) =
			self.entries(0).into_iter().find(|entry| entry.id == constants::RT_ICON)
		else {
			log::debug!("Resource directory at {:#X} has no RT_ICON entry", self.base);
			return Vec::new();
		};

		if !icon_type.is_subdirectory {
			log::debug!("RT_ICON entry at {:#X} is not a subdirectory", self.base);
			return Vec::new();
		}

		let mut ids = self.entries(icon_type.offset);
		ids.sort_by_key(|entry| entry.id);

		let mut icons = Vec::with_capacity(ids.len());
		for id_entry in ids {
			if !id_entry.is_subdirectory {
				log::debug!("Icon {} is not a subdirectory, skipping", id_entry.id);
				continue;
			}

			let Some(language) = self.entries(id_entry.offset).into_iter().next() else {
				log::debug!("Icon {} has no language entries", id_entry.id);
				continue;
			};

			if language.is_subdirectory {
				log::debug!("Icon {} language entry points to a table, skipping", id_entry.id);
				continue;
			}

			match self.data_entry(id_entry.id, language.offset) {
				Some(entry) => icons.push(entry),
				None => log::debug!("Icon {} data entry is out of range", id_entry.id),
			}
		}

		icons
	}
}
