use serde::{Deserialize, Serialize};

/// A visual-treatment preset. Instances live in the compiled-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefinition {
    pub id: &'static str,
    pub display_name: &'static str,
    pub prompt_fragment: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&StyleDefinition> for StyleSummary {
    fn from(style: &StyleDefinition) -> Self {
        Self {
            id: style.id.to_string(),
            name: style.display_name.to_string(),
            description: style.prompt_fragment.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylesResponse {
    pub styles: Vec<StyleSummary>,
    pub total: usize,
}
