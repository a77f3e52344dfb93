//! Planet graphic entries from the SDE's `graphics.yaml`.
//!
//! The static data export maps numeric graphic IDs to `.red` template paths.
//! The file runs to hundreds of megabytes of flat two-level YAML, so rather
//! than a full YAML parse this scans lines: a `<graphicID>:` header opens an
//! entry, and a following `graphicFile:` line referencing a planet template
//! records it.

use std::collections::HashMap;

use tracing::debug;

/// Extract graphic ID -> `.red` template path for planet template graphics.
///
/// Only `graphicFile` values mentioning `Planet` and a `Template` path are
/// kept; everything else in the file (ship graphics, effects, icons) is
/// skipped.
pub fn planet_graphics(contents: &str) -> HashMap<u32, String> {
    let mut graphics = HashMap::new();
    let mut current_id: Option<u32> = None;

    for raw in contents.lines() {
        let line = raw.trim_end();
        if let Some(id) = parse_id_header(line) {
            current_id = Some(id);
        } else if let Some(id) = current_id {
            if let Some((_, value)) = line.split_once("graphicFile:") {
                if value.contains("Planet") {
                    let path = value.trim();
                    if path.contains("Template") || path.contains("template") {
                        graphics.insert(id, path.to_owned());
                    }
                    current_id = None;
                }
            }
        }
    }

    debug!(entries = graphics.len(), "scanned graphics.yaml");
    graphics
}

/// A top-level `<graphicID>:` line: starts with a digit, ends with a colon.
/// Indented attribute lines never match because they start with whitespace.
fn parse_id_header(line: &str) -> Option<u32> {
    if !line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    line.strip_suffix(':')?.parse().ok()
}

/// Convert a `.red` template path from graphics.yaml to its `.black` sibling
/// as keyed in `resfileindex.txt`.
pub fn red_to_black(red_path: &str) -> String {
    red_path
        .to_lowercase()
        .replace("template_hi/", "template/")
        .replace(".red", ".black")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1001:
    description: some ship
    graphicFile: res:/dx9/model/ship/hull.red
1002:
    graphicFile: res:/dx9/model/worldobject/planet/Template_HI/Lava.red
1003:
    graphicFile: res:/dx9/model/worldobject/planet/IcePlanet.red
1004:
    sofFactionName: something
    graphicFile: res:/dx9/model/worldobject/planet/template/GasGiant.red
";

    #[test]
    fn keeps_only_planet_template_graphics() {
        let graphics = planet_graphics(SAMPLE);
        assert_eq!(graphics.len(), 2);
        assert_eq!(
            graphics.get(&1002).map(String::as_str),
            Some("res:/dx9/model/worldobject/planet/Template_HI/Lava.red")
        );
        assert_eq!(
            graphics.get(&1004).map(String::as_str),
            Some("res:/dx9/model/worldobject/planet/template/GasGiant.red")
        );
    }

    #[test]
    fn non_planet_graphic_files_are_skipped() {
        let graphics = planet_graphics(SAMPLE);
        assert_eq!(graphics.get(&1001), None);
        // planet path, but not a template
        assert_eq!(graphics.get(&1003), None);
    }

    #[test]
    fn id_headers_require_digit_prefix_and_colon() {
        assert_eq!(parse_id_header("1001:"), Some(1001));
        assert_eq!(parse_id_header("    graphicID:"), None);
        assert_eq!(parse_id_header("1001"), None);
        assert_eq!(parse_id_header(""), None);
    }

    #[test]
    fn red_paths_convert_to_black() {
        assert_eq!(
            red_to_black("res:/dx9/model/worldobject/planet/Template_HI/Lava.red"),
            "res:/dx9/model/worldobject/planet/template/lava.black"
        );
        assert_eq!(
            red_to_black("res:/dx9/model/worldobject/planet/template/gasgiant.red"),
            "res:/dx9/model/worldobject/planet/template/gasgiant.black"
        );
    }
}
