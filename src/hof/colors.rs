//! Company color identity.
//!
//! The game assigns every company one of 16 palette slots. Presentation
//! layers need a human name and a strong/light hex pair per slot; both
//! lookups are total, out-of-range indices fall back instead of failing.

struct PaletteEntry {
    name: &'static str,
    dark: &'static str,
    light: &'static str,
}

const PALETTE: [PaletteEntry; 16] = [
    PaletteEntry { name: "Dark Blue", dark: "#1c448c", light: "#4898d8" },
    PaletteEntry { name: "Pale Green", dark: "#4c7458", light: "#98c0a8" },
    PaletteEntry { name: "Pink", dark: "#bc546c", light: "#ec9ca4" },
    PaletteEntry { name: "Yellow", dark: "#d49c20", light: "#fcf880" },
    PaletteEntry { name: "Red", dark: "#c40000", light: "#fc6458" },
    PaletteEntry { name: "Light Blue", dark: "#347084", light: "#9cccdc" },
    PaletteEntry { name: "Green", dark: "#548414", light: "#7cc84c" },
    PaletteEntry { name: "Dark Green", dark: "#50683c", light: "#98b06c" },
    PaletteEntry { name: "Blue", dark: "#1878dc", light: "#80c4fc" },
    PaletteEntry { name: "Cream", dark: "#b87050", light: "#e0a880" },
    PaletteEntry { name: "Mauve", dark: "#505074", light: "#acacc0" },
    PaletteEntry { name: "Purple", dark: "#684cc4", light: "#a088fc" },
    PaletteEntry { name: "Orange", dark: "#fc9c00", light: "#fcd898" },
    PaletteEntry { name: "Brown", dark: "#7c6848", light: "#d4bc94" },
    PaletteEntry { name: "Grey", dark: "#737573", light: "#a8a8a8" },
    PaletteEntry { name: "White", dark: "#b8b8b8", light: "#e8e8e8" },
];

fn entry(color: i16) -> Option<&'static PaletteEntry> {
    usize::try_from(color).ok().and_then(|i| PALETTE.get(i))
}

/// Symbolic name of a palette slot; unknown indices echo their decimal
/// value so broken data stays visible in a rendered table.
pub fn color_name(color: i16) -> String {
    match entry(color) {
        Some(e) => e.name.to_string(),
        None => color.to_string(),
    }
}

/// Hex code of a palette slot, light or strong variant. Unknown indices
/// render as plain white.
pub fn color_code(color: i16, light: bool) -> &'static str {
    match entry(color) {
        Some(e) if light => e.light,
        Some(e) => e.dark,
        None => "#ffffff",
    }
}
