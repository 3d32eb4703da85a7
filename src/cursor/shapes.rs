//! GLFW standard cursor shapes

/// Regular arrow
pub const GLFW_ARROW_CURSOR: i32 = 0x0003_6001;
/// Text input I-beam
pub const GLFW_IBEAM_CURSOR: i32 = 0x0003_6002;
/// Crosshair
pub const GLFW_CROSSHAIR_CURSOR: i32 = 0x0003_6003;
/// Pointing hand
pub const GLFW_POINTING_HAND_CURSOR: i32 = 0x0003_6004;
/// Horizontal resize arrow
pub const GLFW_RESIZE_EW_CURSOR: i32 = 0x0003_6005;
/// Vertical resize arrow
pub const GLFW_RESIZE_NS_CURSOR: i32 = 0x0003_6006;
/// Top-left to bottom-right diagonal resize arrow
pub const GLFW_RESIZE_NWSE_CURSOR: i32 = 0x0003_6007;
/// Top-right to bottom-left diagonal resize arrow
pub const GLFW_RESIZE_NESW_CURSOR: i32 = 0x0003_6008;
/// Omni-directional resize arrow
pub const GLFW_RESIZE_ALL_CURSOR: i32 = 0x0003_6009;
/// Operation-not-allowed shape
pub const GLFW_NOT_ALLOWED_CURSOR: i32 = 0x0003_600A;

/// Legacy name of [`GLFW_POINTING_HAND_CURSOR`]
pub const GLFW_HAND_CURSOR: i32 = GLFW_POINTING_HAND_CURSOR;
/// Legacy name of [`GLFW_RESIZE_EW_CURSOR`]
pub const GLFW_HRESIZE_CURSOR: i32 = GLFW_RESIZE_EW_CURSOR;
/// Legacy name of [`GLFW_RESIZE_NS_CURSOR`]
pub const GLFW_VRESIZE_CURSOR: i32 = GLFW_RESIZE_NS_CURSOR;

/// Canonical names, in shape order
const SHAPE_NAMES: [(&str, i32); 10] = [
    ("arrow", GLFW_ARROW_CURSOR),
    ("ibeam", GLFW_IBEAM_CURSOR),
    ("crosshair", GLFW_CROSSHAIR_CURSOR),
    ("hand", GLFW_POINTING_HAND_CURSOR),
    ("resize-ew", GLFW_RESIZE_EW_CURSOR),
    ("resize-ns", GLFW_RESIZE_NS_CURSOR),
    ("resize-nwse", GLFW_RESIZE_NWSE_CURSOR),
    ("resize-nesw", GLFW_RESIZE_NESW_CURSOR),
    ("resize-all", GLFW_RESIZE_ALL_CURSOR),
    ("not-allowed", GLFW_NOT_ALLOWED_CURSOR),
];

/// Every standard shape
pub fn standard_shapes() -> impl Iterator<Item = i32> {
    SHAPE_NAMES.iter().map(|&(_, shape)| shape)
}

/// Canonical name of a standard shape
pub fn shape_name(shape: i32) -> Option<&'static str> {
    SHAPE_NAMES
        .iter()
        .find(|&&(_, s)| s == shape)
        .map(|&(name, _)| name)
}

/// Parse a shape name
///
/// Case-insensitive. Accepts the canonical names, the legacy GLFW aliases
/// (`pointing-hand`, `hresize`, `vresize`), underscores in place of dashes,
/// and raw numbers in decimal or `0x` hex.
pub fn shape_from_name(name: &str) -> Option<i32> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");

    if let Some(hex) = normalized.strip_prefix("0x") {
        return i32::from_str_radix(hex, 16).ok();
    }
    if let Ok(value) = normalized.parse::<i32>() {
        return Some(value);
    }

    let alias = match normalized.as_str() {
        "pointing-hand" => Some(GLFW_POINTING_HAND_CURSOR),
        "hresize" => Some(GLFW_HRESIZE_CURSOR),
        "vresize" => Some(GLFW_VRESIZE_CURSOR),
        _ => None,
    };

    alias.or_else(|| {
        SHAPE_NAMES
            .iter()
            .find(|&&(n, _)| n == normalized)
            .map(|&(_, shape)| shape)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for shape in standard_shapes() {
            let name = shape_name(shape).unwrap();
            assert_eq!(shape_from_name(name), Some(shape));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(shape_from_name("HAND"), Some(GLFW_HAND_CURSOR));
        assert_eq!(shape_from_name("pointing_hand"), Some(GLFW_HAND_CURSOR));
        assert_eq!(shape_from_name("hresize"), Some(GLFW_RESIZE_EW_CURSOR));
        assert_eq!(shape_from_name("vresize"), Some(GLFW_RESIZE_NS_CURSOR));
    }

    #[test]
    fn test_numeric_names() {
        assert_eq!(shape_from_name("0x36003"), Some(GLFW_CROSSHAIR_CURSOR));
        assert_eq!(shape_from_name("221185"), Some(GLFW_ARROW_CURSOR));
        assert_eq!(shape_from_name("0xZZ"), None);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(shape_from_name("spinner"), None);
        assert_eq!(shape_name(0), None);
    }
}
