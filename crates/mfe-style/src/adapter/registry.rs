//! Component style registry.
//!
//! Each component (`button`, `input`, ...) maps slot keys (`base`,
//! `size-lg`, `variant-primary`) to three parallel representations:
//!
//! | Representation | Used by | Required |
//! |----------------|---------|----------|
//! | `native` | [`StyleMode::Native`](super::StyleMode::Native) | yes |
//! | `precompiled` | [`StyleMode::Precompiled`](super::StyleMode::Precompiled) | yes |
//! | `computed` | [`StyleMode::Computed`](super::StyleMode::Computed) | no, defaults to empty |

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{self, DocumentFormat};
use crate::error::LoadError;

/// A map of style properties (`paddingLeft -> 1rem`).
///
/// Keys use camelCase like inline style objects. Merging is shallow: a later
/// map's value replaces an earlier one key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the map for chaining.
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.0.insert(property.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Copies every property of `other` over this map.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the map as inline CSS declarations.
    ///
    /// ```rust
    /// use mfe_style::adapter::StyleMap;
    ///
    /// let style = StyleMap::new().with("paddingLeft", "1rem").with("color", "red");
    /// assert_eq!(style.to_inline_css(), "color: red; padding-left: 1rem;");
    /// ```
    pub fn to_inline_css(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{}: {};", kebab_case(property), value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StyleMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn kebab_case(property: &str) -> String {
    // Custom properties are passed through untouched.
    if property.starts_with("--") {
        return property.to_string();
    }
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// The three representations of one style slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStyles {
    pub native: String,
    pub precompiled: String,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub computed: StyleMap,
}

impl SlotStyles {
    pub fn new(native: impl Into<String>, precompiled: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            precompiled: precompiled.into(),
            computed: StyleMap::new(),
        }
    }

    pub fn computed(mut self, computed: StyleMap) -> Self {
        self.computed = computed;
        self
    }
}

/// The slots of one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentStyles {
    slots: BTreeMap<String, SlotStyles>,
}

impl ComponentStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot, returning the component for chaining.
    pub fn slot(mut self, key: &str, styles: SlotStyles) -> Self {
        self.slots.insert(key.to_string(), styles);
        self
    }

    pub fn get(&self, key: &str) -> Option<&SlotStyles> {
        self.slots.get(key)
    }

    pub fn slot_keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Style slots for every known component.
///
/// Lookups are advisory: unknown components and slots simply return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ComponentStyles>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry of built-in component styles.
    pub fn builtin() -> &'static ComponentRegistry {
        super::builtin::components()
    }

    /// Adds a component, returning the registry for chaining.
    pub fn component(mut self, name: &str, styles: ComponentStyles) -> Self {
        self.components.insert(name.to_string(), styles);
        self
    }

    pub fn get(&self, component: &str) -> Option<&ComponentStyles> {
        self.components.get(component)
    }

    pub fn slot(&self, component: &str, slot: &str) -> Option<&SlotStyles> {
        self.get(component)?.get(slot)
    }

    pub fn has(&self, component: &str) -> bool {
        self.components.contains_key(component)
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Adds every component of `other`, replacing same-named components.
    pub fn extend(&mut self, other: ComponentRegistry) {
        self.components.extend(other.components);
    }

    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        DocumentFormat::Json.parse(source)
    }

    pub fn from_yaml(source: &str) -> Result<Self, LoadError> {
        DocumentFormat::Yaml.parse(source)
    }

    /// Loads a registry file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        config::load_document(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_map_merge_later_wins() {
        let mut base = StyleMap::new().with("padding", "1rem").with("color", "black");
        base.merge(&StyleMap::new().with("color", "white"));
        assert_eq!(base.get("color"), Some("white"));
        assert_eq!(base.get("padding"), Some("1rem"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_inline_css_kebab_cases_properties() {
        let style: StyleMap = [("borderTopLeftRadius", "4px"), ("--ring", "2px")]
            .into_iter()
            .collect();
        assert_eq!(
            style.to_inline_css(),
            "--ring: 2px; border-top-left-radius: 4px;"
        );
    }

    #[test]
    fn test_registry_slot_lookup() {
        let registry = ComponentRegistry::new().component(
            "button",
            ComponentStyles::new().slot("base", SlotStyles::new("inline-flex", "mfe-btn")),
        );
        assert_eq!(
            registry.slot("button", "base").map(|s| s.precompiled.as_str()),
            Some("mfe-btn")
        );
        assert!(registry.slot("button", "nonexistent-slot").is_none());
        assert!(registry.slot("unknown", "base").is_none());
    }

    #[test]
    fn test_from_yaml_computed_optional() {
        let yaml = r#"
button:
  base:
    native: inline-flex items-center
    precompiled: mfe-btn
    computed:
      display: inline-flex
  size-lg:
    native: h-11 px-8
    precompiled: mfe-btn--lg
"#;
        let registry = ComponentRegistry::from_yaml(yaml).unwrap();
        let button = registry.get("button").unwrap();
        assert_eq!(button.len(), 2);
        assert!(button.get("size-lg").unwrap().computed.is_empty());
        assert_eq!(
            button.get("base").unwrap().computed.get("display"),
            Some("inline-flex")
        );
    }

    #[test]
    fn test_from_json_requires_native_and_precompiled() {
        let json = r#"{"button": {"base": {"native": "inline-flex"}}}"#;
        assert!(matches!(
            ComponentRegistry::from_json(json),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_extend_replaces_components() {
        let mut registry = ComponentRegistry::new()
            .component("badge", ComponentStyles::new().slot("base", SlotStyles::new("a", "b")));
        registry.extend(
            ComponentRegistry::new()
                .component("badge", ComponentStyles::new().slot("base", SlotStyles::new("c", "d"))),
        );
        assert_eq!(registry.slot("badge", "base").unwrap().native, "c");
    }
}
