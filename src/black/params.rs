//! Heuristic vec4 parameter extraction from the unstructured data section.
//!
//! The data section has no record delimiters, so it is scanned at every 2-byte
//! alignment for `u16` values matching the string table index of a recognized
//! parameter name. Two serialized layouts for named vector parameters coexist
//! in observed files:
//!
//! - adjacent: `[name index: 2][vec4: 16]`
//! - padded:   `[name index: 2][zero padding: 6][vec4: 16]`
//!
//! Because the scan visits every alignment rather than true record boundaries,
//! index collisions are common; the plausibility check and the informativeness
//! tie-break reject most false positives.

use tracing::trace;
use winnow::Parser;
use winnow::binary::le_f32;

use super::WResult;
use super::names::VEC4_PARAM_NAMES;
use crate::preset::OrderedMap;

/// Bytes a candidate position must have past it: 2 (index) + 6 (pad) + 16 (vec4).
const CANDIDATE_SPAN: usize = 24;

/// Components with magnitude at or below this are treated as noise: they don't
/// count toward informativeness, and a quadruple with nothing above it is a
/// misaligned read, not a parameter value.
const NEAR_ZERO: f32 = 0.0001;

/// Plausible component magnitude bound. Observed shader parameters stay well
/// inside this range; values outside it are index collisions.
const PLAUSIBLE_RANGE: f32 = 1000.0;

/// Map recognized parameter names to plausible vec4 values found in the data
/// section.
///
/// Best-effort: never fails, whatever the data section holds. The first
/// occurrence of a name in scan order wins and is never overwritten -- the
/// inverse of the texture extractor's last-wins policy, which matches how the
/// two record kinds are laid out in observed files.
pub fn extract(strings: &[String], data: &[u8]) -> OrderedMap<[f32; 4]> {
    let names = name_indices(strings);
    let mut params = OrderedMap::new();
    if names.is_empty() {
        return params;
    }

    let end = data.len().saturating_sub(CANDIDATE_SPAN);
    for i in (0..end).step_by(2) {
        let idx = u16::from_le_bytes([data[i], data[i + 1]]);
        let Some(name) = names
            .iter()
            .find(|(_, name_idx)| *name_idx == idx)
            .map(|(name, _)| *name)
        else {
            continue;
        };
        // first occurrence wins
        if params.contains_key(name) {
            continue;
        }

        let adjacent = plausible_vec4(&data[i + 2..i + 18]);
        let padded = if data[i + 2..i + 8].iter().all(|&b| b == 0) {
            plausible_vec4(&data[i + 8..i + CANDIDATE_SPAN])
        } else {
            None
        };

        let value = match (adjacent, padded) {
            // ties go to the padded layout
            (Some(a), Some(b)) => {
                if informative(a) > informative(b) {
                    a
                } else {
                    b
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => continue,
        };

        trace!(name, offset = i, ?value, "accepted vec4 parameter");
        params.insert(name, value);
    }

    params
}

/// Recognized parameter names present in the string table, paired with their
/// table index. Names absent from the table (or at an index too large for the
/// 2-byte encoding) are simply not candidates.
fn name_indices(strings: &[String]) -> Vec<(&'static str, u16)> {
    VEC4_PARAM_NAMES
        .iter()
        .filter_map(|name| {
            let pos = strings.iter().position(|s| s.as_str() == *name)?;
            let idx = u16::try_from(pos).ok()?;
            Some((*name, idx))
        })
        .collect()
}

fn parse_vec4(input: &mut &[u8]) -> WResult<[f32; 4]> {
    Ok([
        le_f32.parse_next(input)?,
        le_f32.parse_next(input)?,
        le_f32.parse_next(input)?,
        le_f32.parse_next(input)?,
    ])
}

/// Decode 16 bytes as four LE floats, keeping the result only if every
/// component is in range and not NaN, and at least one component is
/// non-near-zero.
fn plausible_vec4(mut bytes: &[u8]) -> Option<[f32; 4]> {
    let vec = parse_vec4(&mut bytes).ok()?;
    let in_range = vec
        .iter()
        .all(|v| !v.is_nan() && (-PLAUSIBLE_RANGE..=PLAUSIBLE_RANGE).contains(v));
    (in_range && informative(vec) > 0).then_some(vec)
}

fn informative(vec: [f32; 4]) -> usize {
    vec.iter().filter(|v| v.abs() > NEAR_ZERO).count()
}
