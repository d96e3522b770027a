const POINTS_PER_INCH: f32 = 72.0;
const MM10_PER_INCH: u64 = 254;

/// Share of the font height above the baseline.
pub(crate) const ASCENT: f32 = 0.8;

pub fn px_to_pt(px: u32, dpi: u32) -> f32 {
    px as f32 * POINTS_PER_INCH / dpi as f32
}

pub fn mm10_to_pt(mm10: u32) -> f32 {
    mm10 as f32 * POINTS_PER_INCH / MM10_PER_INCH as f32
}

/// Device pixels covering `mm10` tenths of a millimetre at `dpi`, truncated.
pub fn mm10_to_px(mm10: u32, dpi: u32) -> u32 {
    let px = u64::from(mm10) * u64::from(dpi) / MM10_PER_INCH;
    u32::try_from(px).unwrap_or(u32::MAX)
}
