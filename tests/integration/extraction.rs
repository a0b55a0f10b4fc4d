use iconeko_rs::prelude::*;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn png(tag: u8) -> Vec<u8> {
	let mut data = PNG_SIGNATURE.to_vec();
	data.extend_from_slice(&13u32.to_be_bytes());
	data.extend_from_slice(b"IHDR");
	data.extend_from_slice(&[0, 0, 0, 48, 0, 0, 0, 48, 8, 6, 0, 0, tag]);
	data.extend_from_slice(&[0; 4]);
	data.extend_from_slice(&0u32.to_be_bytes());
	data.extend_from_slice(b"IEND");
	data.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
	data
}

fn dib(width: i32, bpp: u16) -> Vec<u8> {
	let mut data = Vec::new();
	data.extend_from_slice(&40u32.to_le_bytes());
	data.extend_from_slice(&width.to_le_bytes());
	data.extend_from_slice(&(width * 2).to_le_bytes());
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&bpp.to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());
	let payload = (width * width * i32::from(bpp) / 8 + width * width / 8) as u32;
	data.extend_from_slice(&payload.to_le_bytes());
	data.extend_from_slice(&[0u8; 16]);
	data.extend(std::iter::repeat_n(0x3Cu8, payload as usize));
	data
}

fn put(data: &mut [u8], offset: usize, bytes: &[u8]) {
	data[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// PE32 image with one `.rsrc` section at file offset 0x200, RVA 0x2000.
fn pe_with_icon(icon: &[u8]) -> Vec<u8> {
	let mut section = vec![0u8; 88];
	// root: one id entry, RT_ICON -> subdirectory at 0x18
	put(&mut section, 14, &1u16.to_le_bytes());
	put(&mut section, 16, &3u32.to_le_bytes());
	put(&mut section, 20, &0x8000_0018u32.to_le_bytes());
	// ids: icon 1 -> subdirectory at 0x30
	put(&mut section, 0x18 + 14, &1u16.to_le_bytes());
	put(&mut section, 0x18 + 16, &1u32.to_le_bytes());
	put(&mut section, 0x18 + 20, &0x8000_0030u32.to_le_bytes());
	// languages: 0x409 -> data entry at 0x48
	put(&mut section, 0x30 + 14, &1u16.to_le_bytes());
	put(&mut section, 0x30 + 16, &0x409u32.to_le_bytes());
	put(&mut section, 0x30 + 20, &0x48u32.to_le_bytes());
	// data entry: bytes follow at 0x58
	put(&mut section, 0x48, &0x2058u32.to_le_bytes());
	put(&mut section, 0x4C, &(icon.len() as u32).to_le_bytes());
	section.extend_from_slice(icon);

	let mut image = vec![0u8; 0x200];
	put(&mut image, 0, b"MZ");
	put(&mut image, 0x3C, &0x40u32.to_le_bytes());
	put(&mut image, 0x40, b"PE\0\0");
	put(&mut image, 0x46, &1u16.to_le_bytes());
	put(&mut image, 0x54, &224u16.to_le_bytes());
	put(&mut image, 0x58, &0x10Bu16.to_le_bytes());
	// data directory entry 2 at optional header + 96 + 16
	put(&mut image, 0x58 + 112, &0x2000u32.to_le_bytes());
	put(&mut image, 0x58 + 116, &(section.len() as u32).to_le_bytes());
	// section header follows the optional header
	let header = 0x58 + 224;
	put(&mut image, header, b".rsrc");
	put(&mut image, header + 8, &(section.len() as u32).to_le_bytes());
	put(&mut image, header + 12, &0x2000u32.to_le_bytes());
	put(&mut image, header + 16, &(section.len() as u32).to_le_bytes());
	put(&mut image, header + 20, &0x200u32.to_le_bytes());
	image.extend_from_slice(&section);
	image
}

#[test_log::test]
fn test_extract_from_file() {
	let path = std::env::temp_dir().join(format!("iconeko-extract-{}.exe", std::process::id()));
	std::fs::write(&path, pe_with_icon(&dib(32, 8))).unwrap();

	let extraction = extract_icons_from_path(&path).unwrap();
	std::fs::remove_file(&path).unwrap();

	assert_eq!(extraction.container, ContainerKind::Modern32);
	assert_eq!(extraction.source, IconSource::Structured);
	assert_eq!(extraction.icons.len(), 1);

	let icon = &extraction.icons[0];
	assert_eq!(icon.format(), IconFormat::SynthesizedIcon);
	assert_eq!(icon.mime_type(), "image/x-icon");
	let entry = icon.dir_entry().unwrap();
	assert_eq!((entry.width, entry.height, entry.bit_count), (32, 32, 8));
	assert_eq!(entry.image_offset, 22);
}

#[test_log::test]
fn test_missing_file_is_the_only_error() {
	let path = std::env::temp_dir().join("iconeko-definitely-missing.exe");
	let result = extract_icons_from_path(&path);
	assert!(matches!(result, Err(IconFileError::IOError(_))));
}

#[test_log::test]
fn test_structured_png_passes_through() {
	let icon = png(9);
	let icons = extract_icons(&pe_with_icon(&icon));
	assert_eq!(icons.len(), 1);
	assert_eq!(icons[0].bytes(), &icon[..]);
	assert_eq!(icons[0].extension(), "png");
}

#[test_log::test]
fn test_damaged_directory_falls_back_to_ripping() {
	let icon = png(1);
	let mut image = pe_with_icon(&icon);
	// Clear the RT_ICON subdirectory flag.
	put(&mut image, 0x200 + 20, &0x18u32.to_le_bytes());

	let extraction = extract(&image);
	assert_eq!(extraction.container, ContainerKind::Modern32);
	assert_eq!(extraction.source, IconSource::Ripped);
	assert_eq!(extraction.icons.len(), 1);
	assert_eq!(extraction.icons[0].bytes(), &icon[..]);
}

#[test_log::test]
fn test_raw_blob_yields_pngs_and_dibs_in_order() {
	let mut blob = vec![0xEEu8; 100];
	blob.extend_from_slice(&png(2));
	blob.extend_from_slice(&[0xEE; 7]);
	blob.extend_from_slice(&dib(16, 4));
	blob.extend_from_slice(&[0xEE; 50]);
	blob.extend_from_slice(&png(3));
	blob.extend_from_slice(&[0xEE; 50]);

	let extraction = extract(&blob);
	assert_eq!(extraction.container, ContainerKind::Unstructured);

	let formats: Vec<IconFormat> = extraction.icons.iter().map(DecodedIcon::format).collect();
	assert_eq!(formats, vec![IconFormat::Png, IconFormat::SynthesizedIcon, IconFormat::Png]);
	assert_eq!(extraction.icons[0].bytes(), &png(2)[..]);
	assert_eq!(extraction.icons[2].bytes(), &png(3)[..]);
}
