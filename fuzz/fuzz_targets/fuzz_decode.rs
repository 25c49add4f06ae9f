#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic
    let _ = zenbmp24::ImageInfo::from_bytes(data);
    let Ok(bmp) = zenbmp24::decode_bmp(data) else {
        return;
    };

    // Pixel access is total, including off-canvas coordinates
    let (w, h) = (bmp.width() as i32, bmp.height() as i32);
    for (x, y) in [(0, 0), (-1, -1), (w, h), (w - 1, h - 1), (i32::MIN, i32::MAX)] {
        let _ = bmp.get_pixel(x, y);
    }
    let _ = bmp.clip(-1, -1, w, h);
});
