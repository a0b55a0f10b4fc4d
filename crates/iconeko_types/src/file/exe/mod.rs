//! Icon extraction from Windows executable containers.
//!
//! This module recognizes the two executable dialects that carry icon
//! resources and falls back to heuristic ripping for everything else.
//!
//! # Container Detection
//!
//! ```text
//! Offset      Size  Field        Description
//! ----------  ----  -----------  ------------------------------------------
//! 0x00        2     e_magic      "MZ" (0x5A4D)
//! 0x3C        4     e_lfanew     Offset of the extended header
//! e_lfanew    2     signature    "PE" → PE32/PE32+, "NE" → 16-bit NE
//! ```
//!
//! Buffers shorter than a DOS header, without the `MZ` marker, or with an
//! unknown extended signature are [`ContainerKind::Unstructured`].
//!
//! # Extraction Strategy
//!
//! 1. Classify the buffer.
//! 2. PE: find the section covering data directory entry 2 and walk the
//!    type → id → language tree (see [`directory`]).
//! 3. NE: walk the flat list of resource type blocks and read the `RT_ICON`
//!    block (see [`ne`]).
//! 4. If the structured walk produced nothing, or the buffer is unstructured,
//!    scan the whole buffer with [`rip_icons`].
//!
//! Nothing in this pipeline fails. Bad offsets skip a single resource, broken
//! directory flags drop one branch, and an empty result is a normal outcome.
//!
//! # Examples
//!
//! ```no_run
//! use iconeko_types::file::exe::{IconSource, extract_icons_from_path};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extraction = extract_icons_from_path("MORICONS.DLL")?;
//! println!("{} container", extraction.container);
//! if extraction.source == IconSource::Ripped {
//!     println!("no resource directory, ripped from raw bytes");
//! }
//! for (i, icon) in extraction.icons.iter().enumerate() {
//!     println!("  [{}] {} ({} bytes)", i, icon.format(), icon.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::file::{IconFileError, ico::DecodedIcon, rip::rip_icons, view::ByteView};

pub mod constants;
pub mod directory;
pub mod ne;
pub mod pe;


pub use directory::{DataEntry, DirectoryEntry, ResourceDirectory};
pub use pe::ResourceSection;

/// Container dialect of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
	/// 16-bit NE executable
	LegacySixteenBit,
	/// PE32 image
	Modern32,
	/// PE32+ image
	Modern64,
	/// Anything else
	Unstructured,
}

impl ContainerKind {
	/// Returns `true` for the two PE layouts.
	pub fn is_modern(self) -> bool {
		matches!(self, Self::Modern32 | Self::Modern64)
	}
}

impl Display for ContainerKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::LegacySixteenBit => write!(f, "NE (16-bit)"),
			Self::Modern32 => write!(f, "PE32"),
			Self::Modern64 => write!(f, "PE32+"),
			Self::Unstructured => write!(f, "Unstructured"),
		}
	}
}

/// Which strategy produced an extraction's icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSource {
	/// Resource directory walk
	Structured,
	/// Heuristic byte scan
	Ripped,
}

/// Classified, immutable view over a candidate executable.
#[derive(Debug, Clone, Copy)]
pub struct Container<'a> {
	view: ByteView<'a>,
	kind: ContainerKind,
	header_offset: Option<usize>,
	resource_section: Option<ResourceSection>,
}

impl<'a> Container<'a> {
	/// Classifies `data` and, for PE images, locates the resource section.
	pub fn classify(data: &'a [u8]) -> Self {
		let view = ByteView::new(data);
		let unstructured = Self {
			view,
			kind: ContainerKind::Unstructured,
			header_offset: None,
			resource_section: None,
		};

		if data.len() < constants::DOS_HEADER_SIZE
			|| view.u16_le(0) != Some(constants::DOS_MAGIC)
		{
			return unstructured;
		}

		let Some(header) = view.u32_le(constants::NEW_HEADER_POINTER_OFFSET).map(|p| p as usize)
		else {
			return unstructured;
		};

		let kind = match view.u16_le(header) {
			Some(constants::PE_SIGNATURE) => pe::classify(&view, header),
			Some(constants::NE_SIGNATURE) => ContainerKind::LegacySixteenBit,
			_ => return unstructured,
		};

		let resource_section = if kind.is_modern() {
			pe::locate_resource_section(&view, header, kind)
		} else {
			None
		};

		Self {
			view,
			kind,
			header_offset: Some(header),
			resource_section,
		}
	}

	/// Container dialect.
	pub fn kind(&self) -> ContainerKind {
		self.kind
	}

	/// File offset of the PE/NE header, if one was recognized.
	pub fn header_offset(&self) -> Option<usize> {
		self.header_offset
	}

	/// Resource section of a PE image, if one covers the resource RVA.
	pub fn resource_section(&self) -> Option<ResourceSection> {
		self.resource_section
	}

	/// Underlying bytes.
	pub fn bytes(&self) -> &'a [u8] {
		self.view.bytes()
	}

	/// Icons found by the structured walk alone, without ripping.
	pub fn icons(&self) -> Vec<DecodedIcon> {
		match (self.kind, self.header_offset) {
			(ContainerKind::Modern32 | ContainerKind::Modern64, Some(_)) => self
				.resource_section
				.map(|section| pe::read_icons(&self.view, &section))
				.unwrap_or_default(),
			(ContainerKind::LegacySixteenBit, Some(header)) => ne::read_icons(&self.view, header),
			_ => Vec::new(),
		}
	}
}

/// Result of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
	/// Detected container dialect
	pub container: ContainerKind,
	/// Strategy that produced `icons`
	pub source: IconSource,
	/// Icons in scan order
	pub icons: Vec<DecodedIcon>,
}

impl Extraction {
	/// Returns `true` if nothing was found.
	pub fn is_empty(&self) -> bool {
		self.icons.is_empty()
	}
}

/// Extracts icons from a buffer, reporting how they were found.
pub fn extract(data: &[u8]) -> Extraction {
	let container = Container::classify(data);

	if container.kind() != ContainerKind::Unstructured {
		let icons = container.icons();
		if !icons.is_empty() {
			log::debug!("{} container yielded {} icons", container.kind(), icons.len());
			return Extraction {
				container: container.kind(),
				source: IconSource::Structured,
				icons,
			};
		}

		log::warn!("{} header found but no icons were parsed, trying raw scan", container.kind());
	}

	Extraction {
		container: container.kind(),
		source: IconSource::Ripped,
		icons: rip_icons(data),
	}
}

/// Extracts icons from a buffer.
///
/// # Examples
///
/// ```
/// use iconeko_types::file::exe::extract_icons;
///
/// // Not an executable and no embedded images: an empty, non-error result.
/// assert!(extract_icons(b"plain text, nothing to see").is_empty());
/// ```
pub fn extract_icons(data: &[u8]) -> Vec<DecodedIcon> {
	extract(data).icons
}

/// Reads a file and extracts its icons.
///
/// # Errors
///
/// Returns an error only if the file cannot be read.
pub fn extract_icons_from_path(
	path: impl AsRef<std::path::Path>,
) -> Result<Extraction, IconFileError> {
	let data = std::fs::read(path)?;
	Ok(extract(&data))
}
