use strum::{EnumString, VariantArray};

/// The palette of cell colors, in rainbow order.
///
/// Parses from the lowercase CSS name it renders with, e.g. `"indigo"`.
#[derive(Copy, Clone, Debug, Default, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    #[default]
    Red,
    Orange,
    Gold,
    Green,
    Blue,
    Indigo,
    Violet,
}

impl Color {
    /// The CSS color name used to render this color.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Gold => "gold",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
        }
    }

    pub(crate) fn glyph(&self) -> char {
        match self {
            Self::Red => 'R',
            Self::Orange => 'O',
            // gold is the rainbow's yellow; green takes G
            Self::Gold => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Indigo => 'I',
            Self::Violet => 'V',
        }
    }
}
