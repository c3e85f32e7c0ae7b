//! In-memory SVG host and surface.
//!
//! Keeps every drawn path with its current attributes and data tags, and
//! renders the whole surface as SVG markup.

use super::surface::{Attributes, ElementId, Host, Surface};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    containers: BTreeSet<String>,
    mounted: Vec<String>,
}

impl SvgDocument {
    pub fn new<I, S>(container_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SvgDocument {
            containers: container_ids.into_iter().map(Into::into).collect(),
            mounted: Vec::new(),
        }
    }

    /// Container ids that have had a surface mounted, in mount order.
    pub fn mounted(&self) -> &[String] {
        &self.mounted
    }
}

impl Host for SvgDocument {
    type Surface = SvgSurface;

    fn mount(&mut self, container_id: &str, width: u32, height: u32) -> Option<SvgSurface> {
        if !self.containers.contains(container_id) {
            return None;
        }

        self.mounted.push(container_id.to_string());
        Some(SvgSurface {
            container_id: container_id.to_string(),
            width,
            height,
            elements: BTreeMap::new(),
            next_id: 0,
            mutations: 0,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub path: String,
    pub attrs: Attributes,
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct SvgSurface {
    container_id: String,
    width: u32,
    height: u32,
    elements: BTreeMap<ElementId, SvgElement>,
    next_id: u32,
    mutations: usize,
}

impl SvgSurface {
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn element(&self, id: ElementId) -> Option<&SvgElement> {
        self.elements.get(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of draw, attribute, data and remove operations applied so far.
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    pub fn to_svg(&self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            self.width, self.height, self.width, self.height
        );
        for element in self.elements.values() {
            out.push_str("  <path");
            out.push_str(&format!(r#" d="{}""#, xml_escape(&element.path)));
            if let Some(fill) = element.attrs.fill {
                out.push_str(&format!(r#" fill="{}""#, fill));
            }
            if let Some(stroke) = element.attrs.stroke {
                out.push_str(&format!(r#" stroke="{}""#, stroke));
            }
            if let Some(width) = element.attrs.stroke_width {
                out.push_str(&format!(r#" stroke-width="{}""#, width));
            }
            if let Some(opacity) = element.attrs.opacity {
                out.push_str(&format!(r#" opacity="{}""#, opacity));
            }
            if let Some(cursor) = element.attrs.cursor {
                out.push_str(&format!(r#" cursor="{}""#, cursor.as_str()));
            }
            for (key, value) in &element.data {
                out.push_str(&format!(r#" data-{}="{}""#, key, xml_escape(value)));
            }
            match &element.attrs.title {
                Some(title) => {
                    out.push_str(&format!("><title>{}</title></path>\n", xml_escape(title)));
                }
                None => out.push_str("/>\n"),
            }
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn draw_path(&mut self, path: &str, attrs: &Attributes) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.mutations += 1;
        self.elements.insert(
            id,
            SvgElement {
                path: path.to_string(),
                attrs: attrs.clone(),
                data: BTreeMap::new(),
            },
        );
        id
    }

    fn set_attributes(&mut self, element: ElementId, attrs: &Attributes) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.attrs.merge(attrs);
            self.mutations += 1;
        }
    }

    fn set_data(&mut self, element: ElementId, key: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.data.insert(key.to_string(), value.to_string());
            self.mutations += 1;
        }
    }

    fn remove(&mut self, element: ElementId) {
        if self.elements.remove(&element).is_some() {
            self.mutations += 1;
        }
    }
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::color::color;

    #[test]
    fn test_mount_requires_known_container() {
        let mut document = SvgDocument::new(["map"]);
        assert!(document.mount("missing", 10, 10).is_none());
        assert!(document.mounted().is_empty());
        let surface = document.mount("map", 10, 20).unwrap();
        assert_eq!(surface.container_id(), "map");
        assert_eq!(document.mounted(), ["map".to_string()]);
    }

    #[test]
    fn test_to_svg_renders_paths_and_data() {
        let mut surface = SvgDocument::new(["map"]).mount("map", 450, 793).unwrap();
        let id = surface.draw_path(
            "M0,0 L1,1",
            &Attributes {
                fill: Some(color(3)),
                title: Some("A & B".to_string()),
                ..Default::default()
            },
        );
        surface.set_data(id, "district", "GALLE");
        let svg = surface.to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="450" height="793""#));
        assert!(svg.contains(r##"<path d="M0,0 L1,1" fill="#E0F2FE" data-district="GALLE"><title>A &amp; B</title></path>"##));
        assert!(svg.ends_with("</title></path>\n</svg>\n"));
    }

    #[test]
    fn test_to_svg_of_empty_surface() {
        let surface = SvgDocument::new(["map"]).mount("map", 2, 3).unwrap();
        assert_eq!(
            surface.to_svg(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"2\" height=\"3\" viewBox=\"0 0 2 3\">\n</svg>\n"
        );
    }

    #[test]
    fn test_operations_on_removed_elements_are_ignored() {
        let mut surface = SvgDocument::new(["map"]).mount("map", 1, 1).unwrap();
        let id = surface.draw_path("M0,0", &Attributes::default());
        surface.remove(id);
        let before = surface.mutations();
        surface.set_attributes(id, &Attributes::fill(color(1)));
        surface.remove(id);
        assert_eq!(surface.mutations(), before);
        assert!(surface.is_empty());
    }
}
