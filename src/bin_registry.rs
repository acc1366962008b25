//! Static mapping from class label to disposal bin.

/// Disposal metadata shown for a predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinInfo {
    pub category: &'static str,
    pub bin_name: &'static str,
    pub marker: &'static str,
    pub color: [u8; 3],
    pub description: &'static str,
}

impl BinInfo {
    pub fn color_hex(&self) -> String {
        let [r, g, b] = self.color;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

pub const UNKNOWN: BinInfo = BinInfo {
    category: "Unknown",
    bin_name: "Unknown",
    marker: "?",
    color: [0xbb, 0xbb, 0xbb],
    description: "No bin mapping found for this category.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bin {
    Green,
    Blue,
    Gray,
    Red,
}

impl Bin {
    const fn with_description(self, description: &'static str) -> BinInfo {
        let (category, bin_name, marker, color) = match self {
            Bin::Green => ("Biodegradable", "Green Bin", "🟢", [0x28, 0xa7, 0x45]),
            Bin::Blue => ("Recyclable", "Blue Bin", "🔵", [0x00, 0x7b, 0xff]),
            Bin::Gray => ("Non-Recyclable", "Gray Bin", "⚫", [0x75, 0x75, 0x75]),
            Bin::Red => ("Hazardous", "Red Bin", "🔴", [0xdc, 0x35, 0x45]),
        };
        BinInfo {
            category,
            bin_name,
            marker,
            color,
            description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteClass {
    Biological,
    Cardboard,
    Glass,
    Metal,
    Paper,
    Plastic,
    Trash,
    Clothes,
    Shoes,
    Battery,
}

impl WasteClass {
    pub const ALL: [WasteClass; 10] = [
        WasteClass::Biological,
        WasteClass::Cardboard,
        WasteClass::Glass,
        WasteClass::Metal,
        WasteClass::Paper,
        WasteClass::Plastic,
        WasteClass::Trash,
        WasteClass::Clothes,
        WasteClass::Shoes,
        WasteClass::Battery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WasteClass::Biological => "biological",
            WasteClass::Cardboard => "cardboard",
            WasteClass::Glass => "glass",
            WasteClass::Metal => "metal",
            WasteClass::Paper => "paper",
            WasteClass::Plastic => "plastic",
            WasteClass::Trash => "trash",
            WasteClass::Clothes => "clothes",
            WasteClass::Shoes => "shoes",
            WasteClass::Battery => "battery",
        }
    }

    /// Case-insensitive exact match on the label.
    pub fn from_label(label: &str) -> Option<WasteClass> {
        let lowered = label.to_lowercase();
        WasteClass::ALL
            .into_iter()
            .find(|class| class.label() == lowered)
    }

    pub fn bin(&self) -> Bin {
        match self {
            WasteClass::Biological => Bin::Green,
            WasteClass::Cardboard
            | WasteClass::Glass
            | WasteClass::Metal
            | WasteClass::Paper
            | WasteClass::Plastic
            | WasteClass::Clothes
            | WasteClass::Shoes => Bin::Blue,
            WasteClass::Trash => Bin::Gray,
            WasteClass::Battery => Bin::Red,
        }
    }

    pub fn bin_info(&self) -> BinInfo {
        let description = match self {
            WasteClass::Biological => "Organic waste like food scraps, leaves, etc.",
            WasteClass::Cardboard => "Recyclable: cardboard, paperboard, etc.",
            WasteClass::Glass => "Recyclable: glass bottles, jars, etc.",
            WasteClass::Metal => "Recyclable: cans, tins, metal items.",
            WasteClass::Paper => "Recyclable: paper, magazines, books.",
            WasteClass::Plastic => "Recyclable: plastic bottles, containers, etc.",
            WasteClass::Trash => "General waste: not recyclable or hazardous.",
            WasteClass::Clothes => "Recyclable: old clothes, textiles.",
            WasteClass::Shoes => "Recyclable: shoes, footwear.",
            WasteClass::Battery => "Hazardous: batteries, e-waste, chemicals.",
        };
        self.bin().with_description(description)
    }
}

/// Never fails: labels outside the table resolve to [`UNKNOWN`].
pub fn lookup(label: &str) -> BinInfo {
    WasteClass::from_label(label)
        .map(|class| class.bin_info())
        .unwrap_or(UNKNOWN)
}
