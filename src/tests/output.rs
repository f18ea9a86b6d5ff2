use {
	crate::{
		image::Image,
		output::{encodePreview, picTableEntry, writeAtomically, writePicTable, Staged},
		palette::EGA,
		quantize::IndexBuffer,
		tests::init,
		Error, Result,
	},
	std::{fs, path::Path},
};

#[test]
fn test_write_atomically_reports_the_byte_count() -> Result<()> {
	init();

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("planes.raw");
	assert_eq!(writeAtomically(&path, &[0x55; 4])?, 4);
	assert_eq!(fs::read(&path).unwrap(), [0x55; 4]);

	// replaces, never appends
	assert_eq!(writeAtomically(&path, &[1, 2])?, 2);
	assert_eq!(fs::read(&path).unwrap(), [1, 2]);
	Ok(())
}

#[test]
fn test_write_atomically_leaves_nothing_behind_on_failure() {
	init();

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("no_such_dir").join("planes.raw");
	assert!(matches!(writeAtomically(&path, &[0; 8]), Err(Error::OutputWrite { .. })));
	assert!(!path.exists());
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_staged_files_appear_only_on_commit() -> Result<()> {
	init();

	let dir = tempfile::tempdir().unwrap();
	let (raw, table) = (dir.path().join("planes.raw"), dir.path().join("pictable.bin"));
	fs::write(&raw, b"old").unwrap();

	let mut staged = Staged::new();
	assert_eq!(staged.stage(&raw, &[0x55; 4])?, 4);
	assert_eq!(staged.stage(&table, &[8, 0, 1, 0])?, 4);
	assert_eq!(fs::read(&raw).unwrap(), b"old");
	assert!(!table.exists());

	staged.commit()?;
	assert_eq!(fs::read(&raw).unwrap(), [0x55; 4]);
	assert_eq!(fs::read(&table).unwrap(), [8, 0, 1, 0]);
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
	Ok(())
}

#[test]
fn test_failed_stage_drops_the_files_already_staged() -> Result<()> {
	init();

	let dir = tempfile::tempdir().unwrap();
	let raw = dir.path().join("planes.raw");
	{
		let mut staged = Staged::new();
		staged.stage(&raw, &[0x55; 4])?;
		let result = staged.stage(&dir.path().join("no_such_dir").join("pictable.bin"), &[0; 4]);
		assert!(matches!(result, Err(Error::OutputWrite { .. })));
	}
	assert!(!raw.exists());
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
	Ok(())
}

#[test]
fn test_pictable_entry_is_two_little_endian_words() -> Result<()> {
	init();

	assert_eq!(picTableEntry(320, 200)?, [0x40, 0x01, 0xC8, 0x00]);
	assert!(matches!(picTableEntry(70_000, 8), Err(Error::DimensionsTooLarge { width: 70_000, height: 8 })));

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("pictable.bin");
	assert_eq!(writePicTable(&path, 64, 8)?, 4);
	assert_eq!(fs::read(&path).unwrap(), [64, 0, 8, 0]);
	Ok(())
}

#[test]
fn test_preview_decodes_back_to_the_palette_colors() -> Result<()> {
	init();

	let indices = IndexBuffer { width: 8, height: 1, indices: vec![0, 1, 2, 3, 12, 13, 14, 15] };
	let png = encodePreview(Path::new("preview.png"), &EGA, &indices)?;
	let image = Image::fromPNG(&png[..]).unwrap();
	assert_eq!((image.width(), image.height()), (8, 1));
	let expected: Vec<_> = indices.indices.iter().map(|&index| EGA.color(index)).collect();
	assert_eq!(image.pixels().collect::<Vec<_>>(), expected);
	Ok(())
}
