//! Parser for the EVE client's `resfileindex.txt`.
//!
//! The index maps `res:` resource paths to their content-addressed CDN paths,
//! one comma-separated row per resource:
//!
//! ```text
//! res:/dx9/model/worldobject/planet/template/lava.black,b1/b1ff..._1234.black,<md5>,<size>,<compressed>
//! ```
//!
//! Only the first two fields matter here; the trailing checksum/size fields
//! are ignored.

use std::collections::HashMap;

use tracing::debug;

/// Lookup table from `res:` path to CDN hash path.
#[derive(Debug, Clone, Default)]
pub struct ResFileIndex {
    entries: HashMap<String, String>,
}

impl ResFileIndex {
    /// Parse the index from its text contents. Rows with fewer than two
    /// fields are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut entries = HashMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let (Some(res_path), Some(cdn_path)) = (fields.next(), fields.next()) else {
                continue;
            };
            if res_path.is_empty() || cdn_path.is_empty() {
                continue;
            }
            entries.insert(res_path.to_owned(), cdn_path.to_owned());
        }
        debug!(entries = entries.len(), "parsed resfileindex");
        Self { entries }
    }

    /// Look up the CDN path for a `res:` path.
    ///
    /// Tries an exact match first, then a case-insensitive scan: res paths
    /// are case-insensitive in the client, and index rows are usually (but
    /// not always) lower-case.
    pub fn get(&self, res_path: &str) -> Option<&str> {
        if let Some(found) = self.entries.get(res_path) {
            return Some(found);
        }
        let folded = res_path.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == folded)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
res:/dx9/model/worldobject/planet/template/lava.black,b1/b1ff00_1.black,md5,100,90
res:/dx9/model/worldobject/planet/Template/Ice.black,cc/cc0011_2.black,md5,200,180

malformed-line-without-comma
res:/empty-cdn,,md5,1,1
";

    #[test]
    fn parses_well_formed_rows() {
        let index = ResFileIndex::parse(SAMPLE);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("res:/dx9/model/worldobject/planet/template/lava.black"),
            Some("b1/b1ff00_1.black")
        );
    }

    #[test]
    fn falls_back_to_case_insensitive_lookup() {
        let index = ResFileIndex::parse(SAMPLE);
        assert_eq!(
            index.get("res:/dx9/model/worldobject/planet/template/ice.black"),
            Some("cc/cc0011_2.black")
        );
    }

    #[test]
    fn missing_paths_are_absent() {
        let index = ResFileIndex::parse(SAMPLE);
        assert_eq!(index.get("res:/nope.black"), None);
    }

    #[test]
    fn empty_contents_yield_empty_index() {
        assert!(ResFileIndex::parse("").is_empty());
    }
}
