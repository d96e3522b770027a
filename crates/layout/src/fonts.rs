//! Font roles used by the templates and their concrete face descriptions.

use serde::{Deserialize, Serialize};

/// The four text styles a document template may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    NormalBold,
    Normal,
    Small,
}

impl FontRole {
    pub fn name(self) -> &'static str {
        match self {
            FontRole::Title => "title",
            FontRole::NormalBold => "normal_bold",
            FontRole::Normal => "normal",
            FontRole::Small => "small",
        }
    }
}

/// A face as the output device understands it: family, cell height in
/// device pixels, and a 100..900 weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub name: String,
    pub height: u32,
    pub weight: u32,
}

impl FontSpec {
    pub fn new(name: impl Into<String>, height: u32, weight: u32) -> Self {
        Self {
            name: name.into(),
            height,
            weight,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontTable {
    pub title: FontSpec,
    pub normal_bold: FontSpec,
    pub normal: FontSpec,
    pub small: FontSpec,
}

impl FontTable {
    pub fn get(&self, role: FontRole) -> &FontSpec {
        match role {
            FontRole::Title => &self.title,
            FontRole::NormalBold => &self.normal_bold,
            FontRole::Normal => &self.normal,
            FontRole::Small => &self.small,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &FontSpec)> {
        [
            FontRole::Title,
            FontRole::NormalBold,
            FontRole::Normal,
            FontRole::Small,
        ]
        .into_iter()
        .map(move |role| (role, self.get(role)))
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self {
            title: FontSpec::new("Tahoma", 36, 700),
            normal_bold: FontSpec::new("Tahoma", 28, 700),
            normal: FontSpec::new("Tahoma", 28, 400),
            small: FontSpec::new("Tahoma", 24, 400),
        }
    }
}
