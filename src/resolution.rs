//! DPI ↔ pixels-per-meter conversion.
//!
//! The header stores resolution in pixels per meter. The conversion factor is
//! the inexact 39.375 (= 315/8) rather than 39.3701, and both directions round
//! half away from zero. Going dpi → ppm → dpi is stable for integer DPI, but a
//! ppm value read from a file does not in general survive ppm → dpi → ppm.
//!
//! Everything is done in exact integer arithmetic so the results do not depend
//! on float rounding and the crate stays usable without `std`.

/// Resolution assigned to newly constructed bitmaps.
pub const DEFAULT_DPI: i32 = 96;

const FACTOR_NUM: i64 = 315;
const FACTOR_DEN: i64 = 8;

/// `round(39.375 * dpi)`, saturated to the `i32` header field.
pub fn ppm_from_dpi(dpi: i32) -> i32 {
    saturate(round_div(i64::from(dpi) * FACTOR_NUM, FACTOR_DEN))
}

/// `round(ppm / 39.375)`.
pub fn dpi_from_ppm(ppm: i32) -> i32 {
    saturate(round_div(i64::from(ppm) * FACTOR_DEN, FACTOR_NUM))
}

/// Integer division rounding half away from zero. `den` must be positive.
fn round_div(num: i64, den: i64) -> i64 {
    if num >= 0 {
        (2 * num + den) / (2 * den)
    } else {
        -((-2 * num + den) / (2 * den))
    }
}

fn saturate(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}
