use zenbmp24::*;

#[test]
fn flat_gray_roundtrip() {
    let mut bmp = Bitmap::new(32, 32).unwrap();
    bmp.clear(224, 224, 224);

    let encoded = encode_bmp(&bmp);
    let decoded = decode_bmp(&encoded).unwrap();
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 32);
    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(decoded.get_pixel(x, y), RGB8::new(224, 224, 224));
        }
    }
}

#[test]
fn two_by_two_byte_layout() {
    let mut bmp = Bitmap::new(2, 2).unwrap();
    bmp.set_pixel(0, 0, 10, 20, 30);
    bmp.set_pixel(1, 1, 40, 50, 60);
    assert_eq!(bmp.stride(), 8);

    let encoded = encode_bmp(&bmp);
    assert_eq!(encoded.len(), 70);
    assert_eq!(&encoded[2..6], &70u32.to_le_bytes());
    // Bottom row (y = 1) comes first
    assert_eq!(&encoded[54..62], &[0, 0, 0, 60, 50, 40, 0, 0]);
    assert_eq!(&encoded[62..70], &[30, 20, 10, 0, 0, 0, 0, 0]);

    let decoded = decode_bmp(&encoded).unwrap();
    assert_eq!(decoded.get_pixel(0, 0), RGB8::new(10, 20, 30));
    assert_eq!(decoded.get_pixel(1, 1), RGB8::new(40, 50, 60));
    assert_eq!(decoded.get_pixel(1, 0), RGB8::new(0, 0, 0));
    assert_eq!(decoded.get_pixel(0, 1), RGB8::new(0, 0, 0));
}

#[test]
fn reencode_is_byte_identical() {
    let mut bmp = Bitmap::with_dpi(7, 5, 300).unwrap();
    bmp.clear(1, 2, 3);
    for i in 0..7 {
        bmp.set_pixel(i, i % 5, i * 40, 255 - i * 30, 77);
    }
    let first = encode_bmp(&bmp);
    let second = encode_bmp(&decode_bmp(&first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn reencode_preserves_foreign_resolution() {
    // A resolution that no integer DPI maps to survives decode -> encode
    let mut data = encode_bmp(&Bitmap::new(3, 3).unwrap());
    data[38..42].copy_from_slice(&1234i32.to_le_bytes());
    data[42..46].copy_from_slice(&999i32.to_le_bytes());
    let bmp = decode_bmp(&data).unwrap();
    assert_eq!(bmp.pixels_per_meter(), 1234);
    let out = encode_bmp(&bmp);
    assert_eq!(&out[38..42], &1234i32.to_le_bytes());
    // The vertical field mirrors the horizontal one
    assert_eq!(&out[42..46], &1234i32.to_le_bytes());
}

#[test]
fn set_dpi_of_get_dpi_is_lossy() {
    let mut data = encode_bmp(&Bitmap::new(1, 1).unwrap());
    data[38..42].copy_from_slice(&2834i32.to_le_bytes());
    let mut bmp = decode_bmp(&data).unwrap();
    let dpi = bmp.dpi();
    assert_eq!(dpi, 72);
    bmp.set_dpi(dpi);
    assert_eq!(bmp.pixels_per_meter(), 2835);
}

#[test]
fn decode_error_kinds() {
    let good = encode_bmp(&Bitmap::new(2, 2).unwrap());

    let mut bad = good.clone();
    bad[0] = b'X';
    assert!(matches!(decode_bmp(&bad), Err(BitmapError::InvalidHeader)));

    let mut bad = good.clone();
    bad[2..6].copy_from_slice(&71u32.to_le_bytes());
    assert!(matches!(decode_bmp(&bad), Err(BitmapError::InvalidSize { .. })));

    let mut bad = good.clone();
    bad[10..14].copy_from_slice(&58u32.to_le_bytes());
    assert!(matches!(decode_bmp(&bad), Err(BitmapError::InvalidOffset(58))));

    let mut bad = good.clone();
    bad[28..30].copy_from_slice(&16u16.to_le_bytes());
    assert!(matches!(decode_bmp(&bad), Err(BitmapError::UnsupportedDepth(16))));

    let mut bad = good.clone();
    bad[30..34].copy_from_slice(&3u32.to_le_bytes());
    assert!(matches!(
        decode_bmp(&bad),
        Err(BitmapError::UnsupportedCompression(3))
    ));

    assert!(matches!(decode_bmp(&good[..20]), Err(BitmapError::UnexpectedEof)));
}

#[test]
fn decode_request_with_limits() {
    let encoded = encode_bmp(&Bitmap::new(1, 2).unwrap());

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    assert!(DecodeRequest::new(&encoded).decode().is_ok());
}

#[test]
fn image_info_probe() {
    let encoded = Bitmap::with_dpi(1, 2, 72).unwrap().to_bmp();
    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 1);
    assert_eq!(info.height, 2);
    assert_eq!(info.dpi, 72);
    assert_eq!(info.file_size, 62);
}

#[cfg(feature = "std")]
#[test]
fn file_write_then_read() {
    let path = std::env::temp_dir().join(format!(
        "zenbmp24-roundtrip-{}.bmp",
        std::process::id()
    ));
    let mut bmp = Bitmap::with_dpi(9, 4, 150).unwrap();
    bmp.clear(10, 200, 30);
    bmp.set_pixel(8, 3, 0, 0, 0);
    bmp.write(&path).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, bmp.to_bmp());

    let back = Bitmap::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back, bmp);
    assert_eq!(back.dpi(), 150);
}

#[cfg(feature = "std")]
#[test]
fn read_rejects_non_bmp_file() {
    let path = std::env::temp_dir().join(format!("zenbmp24-not-bmp-{}.txt", std::process::id()));
    std::fs::write(&path, b"hello, this is not a bitmap at all; long enough for a header").unwrap();
    let result = Bitmap::read(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(BitmapError::InvalidHeader)));
}
