use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A project shown in the graph. Opaque to the simulation apart from its id and name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Item {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ItemId::from(id),
            name: name.to_string(),
            slug: id.to_string(),
            tagline: String::new(),
            url: None,
        }
    }

    pub fn with_tagline(mut self, tagline: &str) -> Self {
        self.tagline = tagline.to_string();
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// External url when set, otherwise the project's detail page.
    pub fn link_target(&self) -> String {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ if self.slug.is_empty() => format!("/projects/{}", self.id),
            _ => format!("/projects/{}", self.slug),
        }
    }

    /// Single-letter node label.
    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    /// Up to two word initials for avatar badges.
    pub fn initials(&self) -> String {
        let s: String = self
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        if s.is_empty() { "?".to_string() } else { s }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/item.rs"]
mod tests;
