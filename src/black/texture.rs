//! Texture-slot extraction from the string table.
//!
//! Serialized texture bindings place the `res:` path shortly after the slot
//! name token, so a bounded lookahead over the string table recovers the
//! binding without decoding the surrounding records.

use tracing::trace;

use super::names::{TEXTURE_REMAPS, TEXTURE_SLOT_NAMES};
use crate::preset::OrderedMap;

/// How many table entries past a slot name are searched for its `res:` path.
const LOOKAHEAD: usize = 4;

const RES_PREFIX: &str = "res:";

/// Map recognized texture slot names to normalized resource paths.
///
/// Each slot-name occurrence is processed independently; if a slot name occurs
/// more than once, the last occurrence's path wins. A slot with no usable path
/// in its lookahead window simply produces no entry.
pub fn extract(strings: &[String]) -> OrderedMap<String> {
    let mut textures = OrderedMap::new();

    for (i, entry) in strings.iter().enumerate() {
        let Some(slot) = TEXTURE_SLOT_NAMES
            .iter()
            .copied()
            .find(|&name| name == entry.as_str())
        else {
            continue;
        };

        let window = &strings[i + 1..(i + 1 + LOOKAHEAD).min(strings.len())];
        for candidate in window {
            if !candidate.starts_with(RES_PREFIX) {
                continue;
            }
            if let Some(path) = normalize_path(candidate) {
                trace!(slot, path = %path, "matched texture slot");
                textures.insert(slot, path);
                break;
            }
            // fx and other non-planet paths keep the window open
        }
    }

    textures
}

/// Normalize a matched `res:` path to the converted asset layout.
///
/// Planet surface textures keep the suffix after `/worldobject/planet/`;
/// shared textures keep the suffix after `/texture/global/` under a `global/`
/// prefix. Effect textures (`/texture/fx/`) and anything else are not planet
/// surface data and yield `None`.
fn normalize_path(res_path: &str) -> Option<String> {
    let path = if let Some((_, rest)) = res_path.rsplit_once("/worldobject/planet/") {
        rest.to_owned()
    } else if let Some((_, rest)) = res_path.rsplit_once("/texture/global/") {
        format!("global/{rest}")
    } else {
        return None;
    };

    let path = path.replace(".dds", ".webp");

    let base = path.rsplit_once('.').map_or(path.as_str(), |(base, _)| base);
    if let Some((_, target)) = TEXTURE_REMAPS.iter().find(|(alias, _)| *alias == base) {
        return Some(format!("{target}.webp"));
    }

    Some(path)
}
