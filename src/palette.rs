//! Per-group accent colors.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Serialized as a CSS hex string for the HTML report.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Pastel orange, cream, pastel coral, pastel peach.
pub const PALETTE: [Color; 4] = [
    Color::rgb(255, 209, 178),
    Color::rgb(255, 253, 208),
    Color::rgb(249, 213, 211),
    Color::rgb(253, 203, 186),
];

/// Page background used behind the list.
pub const BACKGROUND: Color = Color::rgb(244, 235, 217);

/// Section header text.
pub const HEADER_TEXT: Color = Color::rgb(51, 51, 51);

/// Cycle through [`PALETTE`] by list id. Uses euclidean remainder, so
/// negative ids land in the palette too (-1 -> last entry).
pub fn color_for_group(list_id: i64) -> Color {
    PALETTE[list_id.rem_euclid(PALETTE.len() as i64) as usize]
}
