//! Standard EXIF tag definitions.
//!
//! One flat table covers the root IFDs and the EXIF sub-IFD, matching the
//! TIFF 6.0 / EXIF 2.x tag space. GPS and Interoperability have their own
//! tables and are reached through sub-IFD entries registered here.

use crate::str_utils::{make_string, make_string_uc};
use exifscan_core::{TagDecoder, TagDef, TagDict};
use phf::phf_map;

fn exif_tags() -> &'static TagDict {
    &EXIF_TAGS
}

fn gps_tags() -> &'static TagDict {
    &GPS_TAGS
}

fn interop_tags() -> &'static TagDict {
    &INTEROP_TAGS
}

/// Interoperability IFD, nested inside the EXIF sub-IFD.
pub static INTEROP_TAGS: TagDict = phf_map! {
    0x0001_u16 => TagDef::new("InteroperabilityIndex"),
    0x0002_u16 => TagDef::with("InteroperabilityVersion", TagDecoder::Func(make_string)),
    0x1000_u16 => TagDef::new("RelatedImageFileFormat"),
    0x1001_u16 => TagDef::new("RelatedImageWidth"),
    0x1002_u16 => TagDef::new("RelatedImageLength"),
};

/// GPS IFD tags.
pub static GPS_TAGS: TagDict = phf_map! {
    0x0000_u16 => TagDef::new("GPSVersionID"),
    0x0001_u16 => TagDef::new("GPSLatitudeRef"),
    0x0002_u16 => TagDef::new("GPSLatitude"),
    0x0003_u16 => TagDef::new("GPSLongitudeRef"),
    0x0004_u16 => TagDef::new("GPSLongitude"),
    0x0005_u16 => TagDef::new("GPSAltitudeRef"),
    0x0006_u16 => TagDef::new("GPSAltitude"),
    0x0007_u16 => TagDef::new("GPSTimeStamp"),
    0x0008_u16 => TagDef::new("GPSSatellites"),
    0x0009_u16 => TagDef::new("GPSStatus"),
    0x000A_u16 => TagDef::new("GPSMeasureMode"),
    0x000B_u16 => TagDef::new("GPSDOP"),
    0x000C_u16 => TagDef::new("GPSSpeedRef"),
    0x000D_u16 => TagDef::new("GPSSpeed"),
    0x000E_u16 => TagDef::new("GPSTrackRef"),
    0x000F_u16 => TagDef::new("GPSTrack"),
    0x0010_u16 => TagDef::new("GPSImgDirectionRef"),
    0x0011_u16 => TagDef::new("GPSImgDirection"),
    0x0012_u16 => TagDef::new("GPSMapDatum"),
    0x0013_u16 => TagDef::new("GPSDestLatitudeRef"),
    0x0014_u16 => TagDef::new("GPSDestLatitude"),
    0x0015_u16 => TagDef::new("GPSDestLongitudeRef"),
    0x0016_u16 => TagDef::new("GPSDestLongitude"),
    0x0017_u16 => TagDef::new("GPSDestBearingRef"),
    0x0018_u16 => TagDef::new("GPSDestBearing"),
    0x0019_u16 => TagDef::new("GPSDestDistanceRef"),
    0x001A_u16 => TagDef::new("GPSDestDistance"),
    0x001B_u16 => TagDef::new("GPSProcessingMethod"),
    0x001C_u16 => TagDef::new("GPSAreaInformation"),
    0x001D_u16 => TagDef::new("GPSDate"),
    0x001E_u16 => TagDef::new("GPSDifferential"),
};

/// Root IFD and EXIF sub-IFD tags.
pub static EXIF_TAGS: TagDict = phf_map! {
    0x00FE_u16 => TagDef::with("SubfileType", TagDecoder::Map(&[
        (0, "Full-resolution Image"),
        (1, "Reduced-resolution image"),
        (2, "Single page of multi-page image"),
        (3, "Single page of multi-page reduced-resolution image"),
        (4, "Transparency mask"),
        (5, "Transparency mask of reduced-resolution image"),
        (6, "Transparency mask of multi-page image"),
        (7, "Transparency mask of reduced-resolution multi-page image"),
    ])),
    0x00FF_u16 => TagDef::with("OldSubfileType", TagDecoder::Map(&[
        (1, "Full-resolution image"),
        (2, "Reduced-resolution image"),
        (3, "Single page of multi-page image"),
    ])),
    0x0100_u16 => TagDef::new("ImageWidth"),
    0x0101_u16 => TagDef::new("ImageLength"),
    0x0102_u16 => TagDef::new("BitsPerSample"),
    0x0103_u16 => TagDef::with("Compression", TagDecoder::Map(&[
        (1, "Uncompressed TIFF"),
        (2, "CCITT 1D"),
        (3, "T4/Group 3 Fax"),
        (4, "T6/Group 4 Fax"),
        (5, "LZW"),
        (6, "JPEG (old-style)"),
        (7, "JPEG"),
        (8, "Adobe Deflate"),
        (9, "JBIG B&W"),
        (10, "JBIG Color"),
        (32766, "Next"),
        (32769, "Epson ERF Compressed"),
        (32771, "CCIRLEW"),
        (32773, "PackBits"),
        (32809, "Thunderscan"),
        (32895, "IT8CTPAD"),
        (32896, "IT8LW"),
        (32897, "IT8MP"),
        (32898, "IT8BL"),
        (32908, "PixarFilm"),
        (32909, "PixarLog"),
        (32946, "Deflate"),
        (32947, "DCS"),
        (34661, "JBIG"),
        (34676, "SGILog"),
        (34677, "SGILog24"),
        (34712, "JPEG 2000"),
        (34713, "Nikon NEF Compressed"),
        (65000, "Kodak DCR Compressed"),
        (65535, "Pentax PEF Compressed"),
    ])),
    0x0106_u16 => TagDef::new("PhotometricInterpretation"),
    0x0107_u16 => TagDef::new("Thresholding"),
    0x0108_u16 => TagDef::new("CellWidth"),
    0x0109_u16 => TagDef::new("CellLength"),
    0x010A_u16 => TagDef::new("FillOrder"),
    0x010D_u16 => TagDef::new("DocumentName"),
    0x010E_u16 => TagDef::new("ImageDescription"),
    0x010F_u16 => TagDef::new("Make"),
    0x0110_u16 => TagDef::new("Model"),
    0x0111_u16 => TagDef::new("StripOffsets"),
    0x0112_u16 => TagDef::with("Orientation", TagDecoder::Map(&[
        (1, "Horizontal (normal)"),
        (2, "Mirrored horizontal"),
        (3, "Rotated 180"),
        (4, "Mirrored vertical"),
        (5, "Mirrored horizontal then rotated 90 CCW"),
        (6, "Rotated 90 CW"),
        (7, "Mirrored horizontal then rotated 90 CW"),
        (8, "Rotated 90 CCW"),
    ])),
    0x0115_u16 => TagDef::new("SamplesPerPixel"),
    0x0116_u16 => TagDef::new("RowsPerStrip"),
    0x0117_u16 => TagDef::new("StripByteCounts"),
    0x011A_u16 => TagDef::new("XResolution"),
    0x011B_u16 => TagDef::new("YResolution"),
    0x011C_u16 => TagDef::new("PlanarConfiguration"),
    0x011D_u16 => TagDef::new("PageName"),
    0x0122_u16 => TagDef::with("GrayResponseUnit", TagDecoder::Map(&[
        (1, "0.1"),
        (2, "0.001"),
        (3, "0.0001"),
        (4, "1e-05"),
        (5, "1e-06"),
    ])),
    0x0123_u16 => TagDef::new("GrayResponseCurve"),
    0x0124_u16 => TagDef::new("T4Options"),
    0x0125_u16 => TagDef::new("T6Options"),
    0x0128_u16 => TagDef::with("ResolutionUnit", TagDecoder::Map(&[
        (1, "Not Absolute"),
        (2, "Pixels/Inch"),
        (3, "Pixels/Centimeter"),
    ])),
    0x0129_u16 => TagDef::new("PageNumber"),
    0x012D_u16 => TagDef::new("TransferFunction"),
    0x0131_u16 => TagDef::new("Software"),
    0x0132_u16 => TagDef::new("DateTime"),
    0x013B_u16 => TagDef::new("Artist"),
    0x013C_u16 => TagDef::new("HostComputer"),
    0x013D_u16 => TagDef::new("Predictor"),
    0x013E_u16 => TagDef::new("WhitePoint"),
    0x013F_u16 => TagDef::new("PrimaryChromaticities"),
    0x0141_u16 => TagDef::new("HalftoneHints"),
    0x0142_u16 => TagDef::new("TileWidth"),
    0x0143_u16 => TagDef::new("TileLength"),
    0x0144_u16 => TagDef::new("TileOffsets"),
    0x0145_u16 => TagDef::new("TileByteCounts"),
    0x014A_u16 => TagDef::with("SubIFDs", TagDecoder::SubIfd("SubIFD", exif_tags)),
    0x014C_u16 => TagDef::with("InkSet", TagDecoder::Map(&[
        (1, "CMYK"),
        (2, "Not CMYK"),
    ])),
    0x0151_u16 => TagDef::new("TargetPrinter"),
    0x0156_u16 => TagDef::new("TransferRange"),
    0x0200_u16 => TagDef::new("JPEGProc"),
    0x0201_u16 => TagDef::new("JPEGInterchangeFormat"),
    0x0202_u16 => TagDef::new("JPEGInterchangeFormatLength"),
    0x0211_u16 => TagDef::new("YCbCrCoefficients"),
    0x0212_u16 => TagDef::new("YCbCrSubSampling"),
    0x0213_u16 => TagDef::with("YCbCrPositioning", TagDecoder::Map(&[
        (1, "Centered"),
        (2, "Co-sited"),
    ])),
    0x0214_u16 => TagDef::new("ReferenceBlackWhite"),
    0x02BC_u16 => TagDef::new("ApplicationNotes"),
    0x4746_u16 => TagDef::new("Rating"),
    0x828D_u16 => TagDef::new("CFARepeatPatternDim"),
    0x828E_u16 => TagDef::new("CFAPattern"),
    0x828F_u16 => TagDef::new("BatteryLevel"),
    0x8298_u16 => TagDef::new("Copyright"),
    0x829A_u16 => TagDef::new("ExposureTime"),
    0x829D_u16 => TagDef::new("FNumber"),
    0x83BB_u16 => TagDef::new("IPTC/NAA"),
    0x8769_u16 => TagDef::with("ExifOffset", TagDecoder::SubIfd("EXIF", exif_tags)),
    0x8773_u16 => TagDef::new("InterColorProfile"),
    0x8822_u16 => TagDef::with("ExposureProgram", TagDecoder::Map(&[
        (0, "Unidentified"),
        (1, "Manual"),
        (2, "Program Normal"),
        (3, "Aperture Priority"),
        (4, "Shutter Priority"),
        (5, "Program Creative"),
        (6, "Program Action"),
        (7, "Portrait Mode"),
        (8, "Landscape Mode"),
    ])),
    0x8824_u16 => TagDef::new("SpectralSensitivity"),
    0x8825_u16 => TagDef::with("GPSInfo", TagDecoder::SubIfd("GPS", gps_tags)),
    0x8827_u16 => TagDef::new("ISOSpeedRatings"),
    0x8828_u16 => TagDef::new("OECF"),
    0x8830_u16 => TagDef::with("SensitivityType", TagDecoder::Map(&[
        (0, "Unknown"),
        (1, "Standard Output Sensitivity"),
        (2, "Recommended Exposure Index"),
        (3, "ISO Speed"),
        (4, "Standard Output Sensitivity and Recommended Exposure Index"),
        (5, "Standard Output Sensitivity and ISO Speed"),
        (6, "Recommended Exposure Index and ISO Speed"),
        (7, "Standard Output Sensitivity, Recommended Exposure Index and ISO Speed"),
    ])),
    0x8832_u16 => TagDef::new("RecommendedExposureIndex"),
    0x8833_u16 => TagDef::new("ISOSpeed"),
    0x9000_u16 => TagDef::with("ExifVersion", TagDecoder::Func(make_string)),
    0x9003_u16 => TagDef::new("DateTimeOriginal"),
    0x9004_u16 => TagDef::new("DateTimeDigitized"),
    0x9010_u16 => TagDef::new("OffsetTime"),
    0x9011_u16 => TagDef::new("OffsetTimeOriginal"),
    0x9012_u16 => TagDef::new("OffsetTimeDigitized"),
    0x9101_u16 => TagDef::with("ComponentsConfiguration", TagDecoder::Map(&[
        (0, ""),
        (1, "Y"),
        (2, "Cb"),
        (3, "Cr"),
        (4, "Red"),
        (5, "Green"),
        (6, "Blue"),
    ])),
    0x9102_u16 => TagDef::new("CompressedBitsPerPixel"),
    0x9201_u16 => TagDef::new("ShutterSpeedValue"),
    0x9202_u16 => TagDef::new("ApertureValue"),
    0x9203_u16 => TagDef::new("BrightnessValue"),
    0x9204_u16 => TagDef::new("ExposureBiasValue"),
    0x9205_u16 => TagDef::new("MaxApertureValue"),
    0x9206_u16 => TagDef::new("SubjectDistance"),
    0x9207_u16 => TagDef::with("MeteringMode", TagDecoder::Map(&[
        (0, "Unidentified"),
        (1, "Average"),
        (2, "CenterWeightedAverage"),
        (3, "Spot"),
        (4, "MultiSpot"),
        (5, "Pattern"),
        (6, "Partial"),
        (255, "other"),
    ])),
    0x9208_u16 => TagDef::with("LightSource", TagDecoder::Map(&[
        (0, "Unknown"),
        (1, "Daylight"),
        (2, "Fluorescent"),
        (3, "Tungsten (incandescent light)"),
        (4, "Flash"),
        (9, "Fine weather"),
        (10, "Cloudy weather"),
        (11, "Shade"),
        (12, "Daylight fluorescent (D 5700 - 7100K)"),
        (13, "Day white fluorescent (N 4600 - 5400K)"),
        (14, "Cool white fluorescent (W 3900 - 4500K)"),
        (15, "White fluorescent (WW 3200 - 3700K)"),
        (17, "Standard light A"),
        (18, "Standard light B"),
        (19, "Standard light C"),
        (20, "D55"),
        (21, "D65"),
        (22, "D75"),
        (23, "D50"),
        (24, "ISO studio tungsten"),
        (255, "other light source"),
    ])),
    0x9209_u16 => TagDef::with("Flash", TagDecoder::Map(&[
        (0, "Flash did not fire"),
        (1, "Flash fired"),
        (5, "Strobe return light not detected"),
        (7, "Strobe return light detected"),
        (9, "Flash fired, compulsory flash mode"),
        (13, "Flash fired, compulsory flash mode, return light not detected"),
        (15, "Flash fired, compulsory flash mode, return light detected"),
        (16, "Flash did not fire, compulsory flash mode"),
        (24, "Flash did not fire, auto mode"),
        (25, "Flash fired, auto mode"),
        (29, "Flash fired, auto mode, return light not detected"),
        (31, "Flash fired, auto mode, return light detected"),
        (32, "No flash function"),
        (65, "Flash fired, red-eye reduction mode"),
        (69, "Flash fired, red-eye reduction mode, return light not detected"),
        (71, "Flash fired, red-eye reduction mode, return light detected"),
        (73, "Flash fired, compulsory flash mode, red-eye reduction mode"),
        (77, "Flash fired, compulsory flash mode, red-eye reduction mode, return light not detected"),
        (79, "Flash fired, compulsory flash mode, red-eye reduction mode, return light detected"),
        (89, "Flash fired, auto mode, red-eye reduction mode"),
        (93, "Flash fired, auto mode, return light not detected, red-eye reduction mode"),
        (95, "Flash fired, auto mode, return light detected, red-eye reduction mode"),
    ])),
    0x920A_u16 => TagDef::new("FocalLength"),
    0x9214_u16 => TagDef::new("SubjectArea"),
    0x927C_u16 => TagDef::new("MakerNote"),
    0x9286_u16 => TagDef::with("UserComment", TagDecoder::Func(make_string_uc)),
    0x9290_u16 => TagDef::new("SubSecTime"),
    0x9291_u16 => TagDef::new("SubSecTimeOriginal"),
    0x9292_u16 => TagDef::new("SubSecTimeDigitized"),
    0x9C9B_u16 => TagDef::new("XPTitle"),
    0x9C9C_u16 => TagDef::new("XPComment"),
    0x9C9D_u16 => TagDef::new("XPAuthor"),
    0x9C9E_u16 => TagDef::new("XPKeywords"),
    0x9C9F_u16 => TagDef::new("XPSubject"),
    0xA000_u16 => TagDef::with("FlashPixVersion", TagDecoder::Func(make_string)),
    0xA001_u16 => TagDef::with("ColorSpace", TagDecoder::Map(&[
        (1, "sRGB"),
        (2, "Adobe RGB"),
        (65533, "Wide Gamut RGB"),
        (65534, "ICC Profile"),
        (65535, "Uncalibrated"),
    ])),
    0xA002_u16 => TagDef::new("ExifImageWidth"),
    0xA003_u16 => TagDef::new("ExifImageLength"),
    0xA004_u16 => TagDef::new("RelatedSoundFile"),
    0xA005_u16 => TagDef::with("InteroperabilityOffset", TagDecoder::SubIfd("EXIF Interoperability", interop_tags)),
    0xA20B_u16 => TagDef::new("FlashEnergy"),
    0xA20C_u16 => TagDef::new("SpatialFrequencyResponse"),
    0xA20E_u16 => TagDef::new("FocalPlaneXResolution"),
    0xA20F_u16 => TagDef::new("FocalPlaneYResolution"),
    0xA210_u16 => TagDef::new("FocalPlaneResolutionUnit"),
    0xA214_u16 => TagDef::new("SubjectLocation"),
    0xA215_u16 => TagDef::new("ExposureIndex"),
    0xA217_u16 => TagDef::with("SensingMethod", TagDecoder::Map(&[
        (1, "Not defined"),
        (2, "One-chip color area"),
        (3, "Two-chip color area"),
        (4, "Three-chip color area"),
        (5, "Color sequential area"),
        (7, "Trilinear"),
        (8, "Color sequential linear"),
    ])),
    0xA300_u16 => TagDef::with("FileSource", TagDecoder::Map(&[
        (1, "Film Scanner"),
        (2, "Reflection Print Scanner"),
        (3, "Digital Camera"),
    ])),
    0xA301_u16 => TagDef::with("SceneType", TagDecoder::Map(&[
        (1, "Directly Photographed"),
    ])),
    0xA302_u16 => TagDef::new("CVAPattern"),
    0xA401_u16 => TagDef::with("CustomRendered", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Custom"),
    ])),
    0xA402_u16 => TagDef::with("ExposureMode", TagDecoder::Map(&[
        (0, "Auto Exposure"),
        (1, "Manual Exposure"),
        (2, "Auto Bracket"),
    ])),
    0xA403_u16 => TagDef::with("WhiteBalance", TagDecoder::Map(&[
        (0, "Auto"),
        (1, "Manual"),
    ])),
    0xA404_u16 => TagDef::new("DigitalZoomRatio"),
    0xA405_u16 => TagDef::new("FocalLengthIn35mmFilm"),
    0xA406_u16 => TagDef::with("SceneCaptureType", TagDecoder::Map(&[
        (0, "Standard"),
        (1, "Landscape"),
        (2, "Portrait"),
        (3, "Night"),
    ])),
    0xA407_u16 => TagDef::with("GainControl", TagDecoder::Map(&[
        (0, "None"),
        (1, "Low gain up"),
        (2, "High gain up"),
        (3, "Low gain down"),
        (4, "High gain down"),
    ])),
    0xA408_u16 => TagDef::with("Contrast", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Soft"),
        (2, "Hard"),
    ])),
    0xA409_u16 => TagDef::with("Saturation", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Soft"),
        (2, "Hard"),
    ])),
    0xA40A_u16 => TagDef::with("Sharpness", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Soft"),
        (2, "Hard"),
    ])),
    0xA40B_u16 => TagDef::new("DeviceSettingDescription"),
    0xA40C_u16 => TagDef::with("SubjectDistanceRange", TagDecoder::Map(&[
        (0, "Unknown"),
        (1, "Macro"),
        (2, "Close view"),
        (3, "Distant view"),
    ])),
    0xA420_u16 => TagDef::new("ImageUniqueID"),
    0xA430_u16 => TagDef::new("CameraOwnerName"),
    0xA431_u16 => TagDef::new("BodySerialNumber"),
    0xA432_u16 => TagDef::new("LensSpecification"),
    0xA433_u16 => TagDef::new("LensMake"),
    0xA434_u16 => TagDef::new("LensModel"),
    0xA435_u16 => TagDef::new("LensSerialNumber"),
    0xA500_u16 => TagDef::new("Gamma"),
    0xC4A5_u16 => TagDef::new("PrintIM"),
    0xEA1C_u16 => TagDef::new("Padding"),
    0xEA1D_u16 => TagDef::new("OffsetSchema"),
    0xFDE8_u16 => TagDef::new("OwnerName"),
    0xFDE9_u16 => TagDef::new("SerialNumber"),
};
