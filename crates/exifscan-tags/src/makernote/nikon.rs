//! Nikon MakerNote tag definitions.
//!
//! Two generations: the old E700/E800-era table, and the "type 2" table
//! used by everything since the E99x, which may sit behind an embedded
//! TIFF header with MakerNote-relative offsets.

use crate::str_utils::make_string;
use exifscan_core::{Ratio, TagDecoder, TagDef, TagDict, TagValues};
use phf::phf_map;

/// EV bias rendering: the first value counts steps, the third is the step
/// denominator (usually 6, but 12 for ExposureDifference).
///
/// http://tomtia.plala.jp/DigitalCamera/MakerNote/index.asp
pub fn ev_bias(values: &TagValues) -> String {
    let Some(seq) = values.as_ints() else {
        return String::new();
    };
    if seq.len() < 4 {
        return String::new();
    }
    match &seq[..4] {
        [252, 1, 6, 0] => return "-2/3 EV".to_string(),
        [253, 1, 6, 0] => return "-1/2 EV".to_string(),
        [254, 1, 6, 0] => return "-1/3 EV".to_string(),
        [0, 1, 6, 0] => return "0 EV".to_string(),
        [2, 1, 6, 0] => return "+1/3 EV".to_string(),
        [3, 1, 6, 0] => return "+1/2 EV".to_string(),
        [4, 1, 6, 0] => return "+2/3 EV".to_string(),
        _ => {}
    }
    // combinations not in the table
    let mut steps = seq[0];
    if steps == 0 {
        return "0 EV".to_string();
    }
    let mut out = String::new();
    if steps > 127 {
        steps = 256 - steps;
        out.push('-');
    } else {
        out.push('+');
    }
    let step_size = seq[2];
    if step_size <= 0 {
        // only possible on a mangled MakerNote
        return String::new();
    }
    let whole = steps / step_size;
    let rem = steps % step_size;
    if whole != 0 {
        out.push_str(&format!("{whole} "));
    }
    if rem == 0 {
        out.push_str("EV");
    } else {
        out.push_str(&format!("{} EV", Ratio::new(rem, step_size)));
    }
    out
}

/// Old-style table (E700/E800/E900/E950).
pub static TAGS_OLD: TagDict = phf_map! {
    0x0003_u16 => TagDef::with("Quality", TagDecoder::Map(&[
        (1, "VGA Basic"),
        (2, "VGA Normal"),
        (3, "VGA Fine"),
        (4, "SXGA Basic"),
        (5, "SXGA Normal"),
        (6, "SXGA Fine"),
    ])),
    0x0004_u16 => TagDef::with("ColorMode", TagDecoder::Map(&[
        (1, "Color"),
        (2, "Monochrome"),
    ])),
    0x0005_u16 => TagDef::with("ImageAdjustment", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Bright+"),
        (2, "Bright-"),
        (3, "Contrast+"),
        (4, "Contrast-"),
    ])),
    0x0006_u16 => TagDef::with("CCDSpeed", TagDecoder::Map(&[
        (0, "ISO 80"),
        (2, "ISO 160"),
        (4, "ISO 320"),
        (5, "ISO 100"),
    ])),
    0x0007_u16 => TagDef::with("WhiteBalance", TagDecoder::Map(&[
        (0, "Auto"),
        (1, "Preset"),
        (2, "Daylight"),
        (3, "Incandescent"),
        (4, "Fluorescent"),
        (5, "Cloudy"),
        (6, "Speed Light"),
    ])),
};

/// E99x and later.
pub static TAGS_NEW: TagDict = phf_map! {
    0x0001_u16 => TagDef::with("MakernoteVersion", TagDecoder::Func(make_string)),
    0x0002_u16 => TagDef::with("ISOSetting", TagDecoder::Func(make_string)),
    0x0003_u16 => TagDef::new("ColorMode"),
    0x0004_u16 => TagDef::new("Quality"),
    0x0005_u16 => TagDef::new("Whitebalance"),
    0x0006_u16 => TagDef::new("ImageSharpening"),
    0x0007_u16 => TagDef::new("FocusMode"),
    0x0008_u16 => TagDef::new("FlashSetting"),
    0x0009_u16 => TagDef::new("AutoFlashMode"),
    0x000B_u16 => TagDef::new("WhiteBalanceBias"),
    0x000C_u16 => TagDef::new("WhiteBalanceRBCoeff"),
    0x000D_u16 => TagDef::with("ProgramShift", TagDecoder::Func(ev_bias)),
    // same shape as the other EV values, but the step size is 1/12 EV
    0x000E_u16 => TagDef::with("ExposureDifference", TagDecoder::Func(ev_bias)),
    0x000F_u16 => TagDef::new("ISOSelection"),
    0x0010_u16 => TagDef::new("DataDump"),
    0x0011_u16 => TagDef::new("NikonPreview"),
    0x0012_u16 => TagDef::with("FlashCompensation", TagDecoder::Func(ev_bias)),
    0x0013_u16 => TagDef::new("ISOSpeedRequested"),
    0x0016_u16 => TagDef::new("PhotoCornerCoordinates"),
    0x0018_u16 => TagDef::with("FlashBracketCompensationApplied", TagDecoder::Func(ev_bias)),
    0x0019_u16 => TagDef::new("AEBracketCompensationApplied"),
    0x001A_u16 => TagDef::new("ImageProcessing"),
    0x001B_u16 => TagDef::new("CropHiSpeed"),
    0x001C_u16 => TagDef::new("ExposureTuning"),
    0x001D_u16 => TagDef::new("SerialNumber"),
    0x001E_u16 => TagDef::with("ColorSpace", TagDecoder::Map(&[
        (1, "sRGB"),
        (2, "Adobe RGB"),
    ])),
    0x001F_u16 => TagDef::new("VRInfo"),
    0x0020_u16 => TagDef::new("ImageAuthentication"),
    0x0021_u16 => TagDef::new("FaceDetect"),
    0x0022_u16 => TagDef::with("ActiveDLighting", TagDecoder::Map(&[
        (0, "Off"),
        (1, "Low"),
        (3, "Normal"),
        (5, "High"),
        (7, "Extra High"),
        (8, "Extra High 1"),
        (9, "Extra High 2"),
        (10, "Extra High 3"),
        (11, "Extra High 4"),
        (65535, "Auto"),
    ])),
    0x0023_u16 => TagDef::new("PictureControl"),
    0x0024_u16 => TagDef::new("WorldTime"),
    0x0025_u16 => TagDef::new("ISOInfo"),
    0x002A_u16 => TagDef::new("VignetteControl"),
    0x002B_u16 => TagDef::new("DistortInfo"),
    0x0034_u16 => TagDef::with("ShutterMode", TagDecoder::Map(&[
        (0, "Mechanical"),
        (16, "Electronic"),
        (48, "Electronic Front Curtain"),
        (64, "Electronic (Movie)"),
        (80, "Auto (Mechanical)"),
        (81, "Auto (Electronic Front Curtain)"),
        (96, "Electronic (High Speed)"),
    ])),
    0x0037_u16 => TagDef::new("MechanicalShutterCount"),
    0x0039_u16 => TagDef::new("LocationInfo"),
    0x003D_u16 => TagDef::new("BlackLevel"),
    0x0080_u16 => TagDef::new("ImageAdjustment"),
    0x0081_u16 => TagDef::new("ToneCompensation"),
    0x0082_u16 => TagDef::new("AuxiliaryLens"),
    0x0083_u16 => TagDef::new("LensType"),
    0x0084_u16 => TagDef::new("LensMinMaxFocalMaxAperture"),
    0x0085_u16 => TagDef::new("ManualFocusDistance"),
    0x0086_u16 => TagDef::new("DigitalZoomFactor"),
    0x0087_u16 => TagDef::with("FlashMode", TagDecoder::Map(&[
        (0x00, "Did Not Fire"),
        (0x01, "Fired, Manual"),
        (0x03, "Not Ready"),
        (0x07, "Fired, External"),
        (0x08, "Fired, Commander Mode "),
        (0x09, "Fired, TTL Mode"),
        (0x18, "LED Light"),
    ])),
    0x0088_u16 => TagDef::with("AFFocusPosition", TagDecoder::Map(&[
        (0x0000, "Center"),
        (0x0100, "Top"),
        (0x0200, "Bottom"),
        (0x0300, "Left"),
        (0x0400, "Right"),
    ])),
    0x0089_u16 => TagDef::with("BracketingMode", TagDecoder::Map(&[
        (0x00, "Single frame, no bracketing"),
        (0x01, "Continuous, no bracketing"),
        (0x02, "Timer, no bracketing"),
        (0x10, "Single frame, exposure bracketing"),
        (0x11, "Continuous, exposure bracketing"),
        (0x12, "Timer, exposure bracketing"),
        (0x40, "Single frame, white balance bracketing"),
        (0x41, "Continuous, white balance bracketing"),
        (0x42, "Timer, white balance bracketing"),
    ])),
    0x008A_u16 => TagDef::new("AutoBracketRelease"),
    0x008B_u16 => TagDef::new("LensFStops"),
    0x008C_u16 => TagDef::new("NEFCurve1"),
    0x008D_u16 => TagDef::new("ColorMode"),
    0x008F_u16 => TagDef::new("SceneMode"),
    0x0090_u16 => TagDef::new("LightingType"),
    0x0091_u16 => TagDef::new("ShotInfo"),
    0x0092_u16 => TagDef::new("HueAdjustment"),
    0x0093_u16 => TagDef::with("NEFCompression", TagDecoder::Map(&[
        (1, "Lossy (type 1)"),
        (2, "Uncompressed"),
        (3, "Lossless"),
        (4, "Lossy (type 2)"),
        (5, "Striped packed 12 bits"),
        (6, "Uncompressed (reduced to 12 bit)"),
        (7, "Unpacked 12 bits"),
        (8, "Small"),
        (9, "Packed 12 bits"),
        (10, "Packed 14 bits"),
        (13, "High Efficiency"),
        (14, "High Efficiency*"),
    ])),
    0x0094_u16 => TagDef::new("Saturation"),
    0x0095_u16 => TagDef::new("NoiseReduction"),
    0x0096_u16 => TagDef::new("NEFCurve2"),
    0x0097_u16 => TagDef::new("ColorBalance"),
    0x0098_u16 => TagDef::new("LensData"),
    0x0099_u16 => TagDef::new("RawImageCenter"),
    0x009A_u16 => TagDef::new("SensorPixelSize"),
    0x009C_u16 => TagDef::new("SceneAssist"),
    0x009E_u16 => TagDef::new("RetouchHistory"),
    0x00A0_u16 => TagDef::new("SerialNumber"),
    0x00A2_u16 => TagDef::new("ImageDataSize"),
    0x00A5_u16 => TagDef::new("ImageCount"),
    0x00A6_u16 => TagDef::new("DeletedImageCount"),
    0x00A7_u16 => TagDef::new("TotalShutterReleases"),
    0x00A8_u16 => TagDef::new("FlashInfo"),
    0x00A9_u16 => TagDef::new("ImageOptimization"),
    0x00AA_u16 => TagDef::new("Saturation"),
    0x00AB_u16 => TagDef::new("DigitalVariProgram"),
    0x00AC_u16 => TagDef::new("ImageStabilization"),
    0x00AD_u16 => TagDef::new("AFResponse"),
    0x00B0_u16 => TagDef::new("MultiExposure"),
    0x00B1_u16 => TagDef::new("HighISONoiseReduction"),
    0x00B6_u16 => TagDef::new("PowerUpTime"),
    0x00B7_u16 => TagDef::new("AFInfo2"),
    0x00B8_u16 => TagDef::new("FileInfo"),
    0x00B9_u16 => TagDef::new("AFTune"),
    0x00BB_u16 => TagDef::new("RetouchInfo"),
    0x00BD_u16 => TagDef::new("PictureControlData"),
    0x00BF_u16 => TagDef::with("SilentPhotography", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x0100_u16 => TagDef::new("DigitalICE"),
    0x0201_u16 => TagDef::new("PreviewImageStart"),
    0x0202_u16 => TagDef::new("PreviewImageLength"),
    0x0213_u16 => TagDef::with("PreviewYCbCrPositioning", TagDecoder::Map(&[
        (1, "Centered"),
        (2, "Co-sited"),
    ])),
    0x0E09_u16 => TagDef::new("NikonCaptureVersion"),
    0x0E0E_u16 => TagDef::new("NikonCaptureOffsets"),
    0x0E10_u16 => TagDef::new("NikonScan"),
};

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(seq: &[i64]) -> TagValues {
        TagValues::Int(seq.to_vec())
    }

    #[test]
    fn ev_bias_step_table() {
        assert_eq!(ev_bias(&ints(&[252, 1, 6, 0])), "-2/3 EV");
        assert_eq!(ev_bias(&ints(&[0, 1, 6, 0])), "0 EV");
        assert_eq!(ev_bias(&ints(&[4, 1, 6, 0])), "+2/3 EV");
    }

    #[test]
    fn ev_bias_computed() {
        // -1/6 EV: 255 = -1 step of 1/6
        assert_eq!(ev_bias(&ints(&[255, 1, 6, 0])), "-1/6 EV");
        // +1 1/6 EV: 7 steps of 1/6
        assert_eq!(ev_bias(&ints(&[7, 1, 6, 0])), "+1 1/6 EV");
        // 1/12-EV steps, as used by ExposureDifference
        assert_eq!(ev_bias(&ints(&[6, 1, 12, 0])), "+1/2 EV");
    }

    #[test]
    fn ev_bias_bad_input() {
        assert_eq!(ev_bias(&ints(&[1, 2])), "");
        assert_eq!(ev_bias(&TagValues::Str("junk".into())), "");
        assert_eq!(ev_bias(&ints(&[3, 1, 0, 0])), "");
    }
}
