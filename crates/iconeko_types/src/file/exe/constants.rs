//! MZ/PE/NE structure constants.
//!
//! Offsets are relative to the structure they belong to, as noted on each item.

/// `MZ` marker at the start of every DOS-stub executable
pub const DOS_MAGIC: u16 = 0x5A4D;

/// Minimum size of a DOS header
pub const DOS_HEADER_SIZE: usize = 64;

/// DOS header field holding the offset of the extended (PE/NE) header
pub const NEW_HEADER_POINTER_OFFSET: usize = 0x3C;

/// `PE` signature (first two bytes of `PE\0\0`)
pub const PE_SIGNATURE: u16 = 0x4550;

/// `NE` signature
pub const NE_SIGNATURE: u16 = 0x454E;

// PE, relative to the signature

/// COFF `NumberOfSections`
pub const PE_NUMBER_OF_SECTIONS_OFFSET: usize = 6;

/// COFF `SizeOfOptionalHeader`
pub const PE_SIZE_OF_OPTIONAL_HEADER_OFFSET: usize = 20;

/// Start of the optional header
pub const PE_OPTIONAL_HEADER_OFFSET: usize = 24;

/// Optional header magic of a PE32+ image
pub const PE32_PLUS_MAGIC: u16 = 0x20B;

/// Data directory offset inside a PE32 optional header
pub const PE32_DATA_DIRECTORY_OFFSET: usize = 96;

/// Data directory offset inside a PE32+ optional header
pub const PE32_PLUS_DATA_DIRECTORY_OFFSET: usize = 112;

/// Index of the resource table in the data directory
pub const RESOURCE_DATA_DIRECTORY_INDEX: usize = 2;

/// Size of one data directory entry (RVA + size)
pub const DATA_DIRECTORY_ENTRY_SIZE: usize = 8;

/// Size of one section header
pub const SECTION_HEADER_SIZE: usize = 40;

/// Section header `VirtualSize`
pub const SECTION_VIRTUAL_SIZE_OFFSET: usize = 8;

/// Section header `VirtualAddress`
pub const SECTION_VIRTUAL_ADDRESS_OFFSET: usize = 12;

/// Section header `SizeOfRawData`
pub const SECTION_RAW_SIZE_OFFSET: usize = 16;

/// Section header `PointerToRawData`
pub const SECTION_RAW_POINTER_OFFSET: usize = 20;

// PE resource directory, relative to the resource section

/// Size of a resource directory table header
pub const RESOURCE_DIRECTORY_HEADER_SIZE: usize = 16;

/// `NumberOfNamedEntries` inside a directory table header
pub const RESOURCE_NAMED_ENTRIES_OFFSET: usize = 12;

/// `NumberOfIdEntries` inside a directory table header
pub const RESOURCE_ID_ENTRIES_OFFSET: usize = 14;

/// Size of one directory entry (id + offset)
pub const RESOURCE_DIRECTORY_ENTRY_SIZE: usize = 8;

/// Bytes of a data entry that are read (RVA + size)
pub const RESOURCE_DATA_ENTRY_SIZE: usize = 8;

/// High bit of an entry offset marking a subdirectory
pub const SUBDIRECTORY_FLAG: u32 = 0x8000_0000;

/// `RT_ICON`
pub const RT_ICON: u32 = 3;

// NE, relative to the signature

/// Offset of the resource table field in the NE header
pub const NE_RESOURCE_TABLE_OFFSET: usize = 0x24;

/// `RT_ICON` with the integer-id bit set, as stored in NE type blocks
pub const NE_RT_ICON: u16 = 0x8003;

/// Size of a resource type block header (type id, count, reserved)
pub const NE_TYPE_INFO_SIZE: usize = 8;

/// Size of one resource record (offset, length, flags, id, handle, usage)
pub const NE_NAME_INFO_SIZE: usize = 12;

/// Largest alignment shift that still fits a window in 64-bit arithmetic
pub const NE_MAX_ALIGN_SHIFT: u16 = 32;
