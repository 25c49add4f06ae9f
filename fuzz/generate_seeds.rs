#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32, pixel_bytes: u32) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54 + pixel_bytes).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[38..42].copy_from_slice(&3780i32.to_le_bytes()); // 96 dpi
    bmp[42..46].copy_from_slice(&3780i32.to_le_bytes());
    bmp
}

fn main() {
    use std::fs;
    for target in ["fuzz_decode", "fuzz_roundtrip"] {
        let dir = format!("fuzz/corpus/{target}");
        fs::create_dir_all(&dir).unwrap();

        // 1x1: 3 pixel bytes + 1 padding
        let mut bmp = header(1, 1, 4);
        bmp.extend_from_slice(&[0x30, 0x20, 0x10, 0x00]);
        fs::write(format!("{dir}/bmp_1x1.bmp"), &bmp).unwrap();

        // 2x2: stride 8
        let mut bmp = header(2, 2, 16);
        bmp.extend_from_slice(&[0, 0, 0, 60, 50, 40, 0, 0, 30, 20, 10, 0, 0, 0, 0, 0]);
        fs::write(format!("{dir}/bmp_2x2.bmp"), &bmp).unwrap();

        // 4x1 gray, no padding
        let mut bmp = header(4, 1, 12);
        bmp.extend_from_slice(&[224; 12]);
        fs::write(format!("{dir}/bmp_4x1.bmp"), &bmp).unwrap();

        // Header only, pixels truncated
        fs::write(format!("{dir}/bmp_truncated.bmp"), header(8, 8, 0)).unwrap();
    }

    println!("Seed corpus written to fuzz/corpus/");
}
