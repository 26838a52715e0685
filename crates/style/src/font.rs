use serde::{de, Deserialize, Deserializer, Serialize};

/// Opaque font family identifier.
///
/// The layout engine only uses this to pick a metric table; mapping to a
/// concrete face name is the renderer's business.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "helvetica" => Ok(FontFamily::Helvetica),
            "times" => Ok(FontFamily::Times),
            "courier" => Ok(FontFamily::Courier),
            _ => Err(format!("Unknown font family: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "regular" | "normal" => Ok(FontWeight::Regular),
            "bold" => Ok(FontWeight::Bold),
            _ => Err(format!("Invalid font weight: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) if n >= 600 => Ok(FontWeight::Bold),
            FontWeightDef::Num(_) => Ok(FontWeight::Regular),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Weight and slant of one text run, independent of the document family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct FontSpec {
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
}

impl FontSpec {
    pub const REGULAR: FontSpec = FontSpec { weight: FontWeight::Regular, style: FontStyle::Normal };
    pub const BOLD: FontSpec = FontSpec { weight: FontWeight::Bold, style: FontStyle::Normal };
    pub const ITALIC: FontSpec = FontSpec { weight: FontWeight::Regular, style: FontStyle::Italic };
}
