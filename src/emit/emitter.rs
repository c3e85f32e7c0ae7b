//! Serializes a [`DistrictMapping`] into the generated map module.
//!
//! Output is a pure function of the mapping: entries are written in
//! identifier order and every entry is terminated the same way, so
//! regenerating from the same mapping yields identical bytes.

use crate::error::{EmitError, Field};
use crate::prelude::*;
use crate::region::{catalog::District, mapping::DistrictMapping};

const MODULE_HEADER: &str = "/**
 * Sri Lanka District Map - Interactive SVG Map
 * Maps 25 districts with SVG paths for visualization
 *
 * updateDistrictColors takes the instance returned by initializeDistrictMap
 * as its first argument: updateDistrictColors(mapInstance, distribution).
 */

";

const RUNTIME_SOURCE: &str = include_str!("runtime.js");

pub fn emit_module(mapping: &DistrictMapping) -> Result<String, EmitError> {
    let mut output = String::from(MODULE_HEADER);
    output.push_str("const DISTRICT_MAPPING = {\n");
    for (district, entry) in mapping.iter() {
        let name = escape(district, Field::Name, &entry.name, '\'')?;
        let path = escape(district, Field::Path, &entry.path, '"')?;
        output.push_str(&format!(
            "    '{}': {{\n        name: '{}',\n        path: \"{}\"\n    }},\n",
            district.key(),
            name,
            path
        ));
    }
    output.push_str("};\n\n");
    output.push_str(RUNTIME_SOURCE);

    Ok(output)
}

/// Pretty JSON form of the mapping, newline-terminated.
pub fn emit_json(mapping: &DistrictMapping) -> Result<String> {
    let mut json = serde_json::to_string_pretty(mapping)?;
    json.push('\n');
    Ok(json)
}

fn escape(district: District, field: Field, value: &str, quote: char) -> Result<String, EmitError> {
    let mut escaped = String::with_capacity(value.len());
    for (offset, ch) in value.char_indices() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                tracing::error!(
                    "Refusing to emit {} {}: control character {:?} at byte {}",
                    district,
                    field,
                    c,
                    offset
                );
                return Err(EmitError::UnescapableCharacter {
                    district,
                    field,
                    character: c,
                    offset,
                });
            }
            c => escaped.push(c),
        }
    }

    Ok(escaped)
}
