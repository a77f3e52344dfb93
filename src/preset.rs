//! Decoder output types.

use crate::black::classify::PlanetKind;

/// A string-keyed map that preserves insertion order.
///
/// Keys always come from the fixed recognized-name tables, so they are
/// `&'static str` and the entry count is bounded by those tables; lookups are
/// linear scans over a small `Vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace. A replaced key keeps its original position, so
    /// iteration order is the order keys were first inserted.
    pub fn insert(&mut self, key: &'static str, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for OrderedMap<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One decoded shader preset: the planet material family plus whatever
/// texture bindings and vec4 parameters the heuristic scans recovered.
///
/// Both maps may be empty -- many files simply don't carry the recognized
/// records -- and empty maps are omitted from serialized output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShaderPreset {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PlanetKind,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "OrderedMap::is_empty")
    )]
    pub textures: OrderedMap<String>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "OrderedMap::is_empty")
    )]
    pub parameters: OrderedMap<[f32; 4]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = OrderedMap::new();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn replacing_a_key_keeps_its_position() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 10);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&10));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn missing_keys_are_absent() {
        let map: OrderedMap<i32> = OrderedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("a"), None);
        assert!(!map.contains_key("a"));
    }
}

#[cfg(all(test, feature = "json"))]
mod json_tests {
    use super::*;

    #[test]
    fn empty_maps_are_omitted() {
        let preset = ShaderPreset {
            kind: PlanetKind::Unknown,
            textures: OrderedMap::new(),
            parameters: OrderedMap::new(),
        };
        let value = serde_json::to_value(&preset).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "unknown" }));
    }

    #[test]
    fn kind_serializes_as_type() {
        let mut textures = OrderedMap::new();
        textures.insert("HeightMap", "ice/ice01_h.webp".to_owned());
        let mut parameters = OrderedMap::new();
        parameters.insert("ColorParams", [1.0f32, 0.0, -0.5, 2.0]);

        let preset = ShaderPreset {
            kind: PlanetKind::Ice,
            textures,
            parameters,
        };
        let value = serde_json::to_value(&preset).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "ice",
                "textures": { "HeightMap": "ice/ice01_h.webp" },
                "parameters": { "ColorParams": [1.0, 0.0, -0.5, 2.0] },
            })
        );
    }

    #[test]
    fn map_serialization_preserves_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }
}
