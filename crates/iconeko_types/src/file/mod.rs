//! Icon extraction for `iconeko-rs`.
//!
//! - [`exe`]: MZ/PE/NE container classification and resource walks
//! - [`ico`]: Icon resource decoding and `.ICO` synthesis
//! - [`rip`]: Heuristic PNG/DIB scanning of arbitrary bytes
//! - [`view`]: Bounds-checked field reads shared by all of the above

mod error;

pub mod exe;
pub mod ico;
pub mod rip;
pub mod view;

// Re-export unified error type
pub use error::{FileType, IconFileError};

// Re-export main types
pub use exe::{
	Container, ContainerKind, Extraction, IconSource, extract, extract_icons,
	extract_icons_from_path,
};
pub use ico::{
	BitmapInfoHeader, DecodedIcon, IconDirEntry, IconFormat, decode_resource, synthesize_icon,
};
pub use rip::{RipIter, rip_icons};
pub use view::ByteView;
