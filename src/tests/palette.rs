use crate::{
	palette::{squaredDistance, Palette, EGA, PALETTE_LEN, PNG_PAL_LEN},
	tests::{init, BLACK, WHITE},
	Error,
};

#[test]
fn test_ega_palette_has_black_first_and_white_last() {
	init();

	assert_eq!(EGA.color(0), BLACK);
	assert_eq!(EGA.color(15), WHITE);
	assert_eq!(EGA.color(6), [0xAA, 0x55, 0x00]);
	assert_eq!(Palette::default(), EGA);
}

#[test]
fn test_color_uses_only_the_low_nibble() {
	init();

	assert_eq!(EGA.color(0x1F), EGA.color(0x0F));
	assert_eq!(EGA.color(0xF1), EGA.color(0x01));
}

#[test]
fn test_squared_distance_is_euclidean_and_symmetric() {
	init();

	assert_eq!(squaredDistance([10, 20, 30], [10, 20, 30]), 0);
	assert_eq!(squaredDistance([0, 0, 0], [3, 4, 0]), 25);
	assert_eq!(squaredDistance([255, 0, 255], [0, 255, 0]), 3 * 255 * 255);
	assert_eq!(squaredDistance([1, 200, 7], [90, 3, 60]), squaredDistance([90, 3, 60], [1, 200, 7]));
}

#[test]
fn test_from_slice_requires_exactly_sixteen_colors() {
	init();

	let colors = EGA.colors().to_vec();
	assert_eq!(Palette::fromSlice(&colors).unwrap(), EGA);
	assert!(matches!(Palette::fromSlice(&colors[..15]), Err(Error::PaletteLength { len: 15 })));

	let mut tooMany = colors.clone();
	tooMany.push(WHITE);
	assert!(matches!(Palette::fromSlice(&tooMany), Err(Error::PaletteLength { len: 17 })));
}

#[test]
fn test_png_pal_is_flat_rgb_in_index_order() {
	init();

	let pngPAL = EGA.pngPAL();
	assert_eq!(pngPAL.len(), PNG_PAL_LEN);
	for i in 0..PALETTE_LEN {
		assert_eq!(pngPAL[i * 3..][..3], EGA.color(i as u8));
	}
}
