//! Benchmark helper utilities for iconeko-rs
//!
//! This module provides generators for synthetic executables and raw blobs so
//! the extraction benchmarks do not depend on real binaries being present.

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// File offset of the generated resource section
const SECTION_RAW: usize = 0x400;

/// RVA of the generated resource section
const SECTION_RVA: u32 = 0x1000;

/// Generates a minimal PNG file with `payload` bytes in a single `IDAT` chunk
pub fn generate_png(side: u32, payload: usize) -> Vec<u8> {
	let mut data = PNG_SIGNATURE.to_vec();

	// IHDR
	data.extend_from_slice(&13u32.to_be_bytes());
	data.extend_from_slice(b"IHDR");
	data.extend_from_slice(&side.to_be_bytes());
	data.extend_from_slice(&side.to_be_bytes());
	data.extend_from_slice(&[8, 6, 0, 0, 0]);
	data.extend_from_slice(&[0; 4]);

	// IDAT
	data.extend_from_slice(&(payload as u32).to_be_bytes());
	data.extend_from_slice(b"IDAT");
	data.extend((0..payload).map(|i| (i * 7 % 251) as u8));
	data.extend_from_slice(&[0; 4]);

	// IEND
	data.extend_from_slice(&0u32.to_be_bytes());
	data.extend_from_slice(b"IEND");
	data.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
	data
}

/// Generates a raw icon DIB (`BITMAPINFOHEADER` + XOR and AND masks)
pub fn generate_dib(side: i32, bit_count: u16) -> Vec<u8> {
	let pixels = (side * side) as usize;
	let payload = pixels * bit_count as usize / 8 + pixels / 8;

	let mut data = Vec::with_capacity(40 + payload);
	data.extend_from_slice(&40u32.to_le_bytes());
	data.extend_from_slice(&side.to_le_bytes());
	data.extend_from_slice(&(side * 2).to_le_bytes());
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&bit_count.to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());
	data.extend_from_slice(&(payload as u32).to_le_bytes());
	data.extend_from_slice(&[0u8; 16]);
	data.extend((0..payload).map(|i| (i % 13) as u8 | 0x80));
	data
}

fn put(data: &mut [u8], offset: usize, bytes: &[u8]) {
	data[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// Generates a PE32 image whose resource section holds `icons`, one id each
pub fn generate_pe(icons: &[Vec<u8>]) -> Vec<u8> {
	let n = icons.len();
	let id_table = 24;
	let lang_tables = id_table + 16 + 8 * n;
	let data_entries = lang_tables + 24 * n;
	let mut blob = data_entries + 16 * n;

	let mut section = vec![0u8; blob + icons.iter().map(Vec::len).sum::<usize>()];
	put(&mut section, 14, &1u16.to_le_bytes());
	put(&mut section, 16, &3u32.to_le_bytes());
	put(&mut section, 20, &(0x8000_0000 | id_table as u32).to_le_bytes());
	put(&mut section, id_table + 14, &(n as u16).to_le_bytes());

	for (i, icon) in icons.iter().enumerate() {
		let lang = lang_tables + 24 * i;
		let entry = data_entries + 16 * i;

		put(&mut section, id_table + 16 + 8 * i, &(i as u32 + 1).to_le_bytes());
		put(&mut section, id_table + 20 + 8 * i, &(0x8000_0000 | lang as u32).to_le_bytes());
		put(&mut section, lang + 14, &1u16.to_le_bytes());
		put(&mut section, lang + 16, &0x409u32.to_le_bytes());
		put(&mut section, lang + 20, &(entry as u32).to_le_bytes());
		put(&mut section, entry, &(SECTION_RVA + blob as u32).to_le_bytes());
		put(&mut section, entry + 4, &(icon.len() as u32).to_le_bytes());
		put(&mut section, blob, icon);
		blob += icon.len();
	}

	let mut image = vec![0u8; SECTION_RAW];
	put(&mut image, 0, b"MZ");
	put(&mut image, 0x3C, &0x80u32.to_le_bytes());
	put(&mut image, 0x80, b"PE\0\0");
	put(&mut image, 0x86, &1u16.to_le_bytes());
	put(&mut image, 0x94, &224u16.to_le_bytes());
	put(&mut image, 0x98, &0x10Bu16.to_le_bytes());
	put(&mut image, 0x98 + 112, &SECTION_RVA.to_le_bytes());
	put(&mut image, 0x98 + 116, &(section.len() as u32).to_le_bytes());

	let header = 0x98 + 224;
	put(&mut image, header, b".rsrc");
	put(&mut image, header + 8, &(section.len() as u32).to_le_bytes());
	put(&mut image, header + 12, &SECTION_RVA.to_le_bytes());
	put(&mut image, header + 16, &(section.len() as u32).to_le_bytes());
	put(&mut image, header + 20, &(SECTION_RAW as u32).to_le_bytes());

	image.extend_from_slice(&section);
	image
}

/// Generates a blob of non-matching filler with `images` embedded at regular intervals
pub fn generate_blob(size: usize, images: &[Vec<u8>]) -> Vec<u8> {
	let mut data: Vec<u8> = (0..size).map(|i| ((i * 31) % 251) as u8 | 0x41).collect();
	if images.is_empty() {
		return data;
	}

	let stride = size / images.len();
	for (i, image) in images.iter().enumerate() {
		let at = i * stride;
		if at + image.len() <= data.len() {
			put(&mut data, at, image);
		}
	}
	data
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Small DLL-sized blob: 64 KiB
	pub const SMALL: usize = 64 * 1024;
	/// Typical shell library: 1 MiB
	pub const MEDIUM: usize = 1024 * 1024;
	/// Large executable: 8 MiB
	pub const LARGE: usize = 8 * 1024 * 1024;
}

#[cfg(test)]
mod tests {
	use super::*;
	use iconeko_types::file::{IconSource, extract};

	#[test]
	fn test_generated_pe_is_structured() {
		let icons = vec![generate_png(16, 64), generate_dib(32, 4), generate_dib(48, 32)];
		let extraction = extract(&generate_pe(&icons));
		assert_eq!(extraction.source, IconSource::Structured);
		assert_eq!(extraction.icons.len(), 3);
	}

	#[test]
	fn test_generated_blob_is_ripped() {
		let images = vec![generate_png(16, 64), generate_dib(16, 8)];
		let extraction = extract(&generate_blob(sizes::SMALL, &images));
		assert_eq!(extraction.source, IconSource::Ripped);
		assert_eq!(extraction.icons.len(), 2);
	}
}
