//! Runtime controller for the interactive district map.
//!
//! A [`MapHandle`] owns the mounted surface and the registry of rendered
//! region elements. Host events (pointer enter/leave, click) and statistics
//! updates all go through the handle; nothing else touches its elements.

use super::color::{self, STROKE};
use super::stats::{DistrictCount, RoleFilter};
use super::surface::{Attributes, Cursor, ElementId, Host, Surface};
use crate::region::{catalog::District, mapping::DistrictMapping};
use std::collections::HashMap;

pub const MAP_WIDTH: u32 = 450;
pub const MAP_HEIGHT: u32 = 793;
pub const HOVER_OPACITY: f32 = 0.7;
pub const IDLE_OPACITY: f32 = 1.0;

pub type ClickCallback = Box<dyn FnMut(District, &str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Hovered,
}

#[derive(Debug, Clone)]
pub struct RegionElement {
    id: ElementId,
    district: District,
    name: String,
    phase: Phase,
}

impl RegionElement {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn district(&self) -> District {
        self.district
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

pub struct MapHandle<S: Surface> {
    surface: S,
    elements: Vec<RegionElement>,
    by_element: HashMap<ElementId, usize>,
    by_district: HashMap<District, Vec<usize>>,
    counts: HashMap<District, u64>,
    on_click: ClickCallback,
}

impl<S: Surface> MapHandle<S> {
    /// Mounts a surface in `container_id` and draws one path per mapping entry.
    ///
    /// Returns `None` when the host has no such container.
    pub fn initialize<H>(
        host: &mut H,
        container_id: &str,
        mapping: &DistrictMapping,
        on_region_click: Option<ClickCallback>,
    ) -> Option<Self>
    where
        H: Host<Surface = S>,
    {
        let mut surface = match host.mount(container_id, MAP_WIDTH, MAP_HEIGHT) {
            Some(surface) => surface,
            None => {
                tracing::error!("Map container not found: {}", container_id);
                return None;
            }
        };

        let mut elements = Vec::with_capacity(mapping.len());
        let mut by_element = HashMap::with_capacity(mapping.len());
        let mut by_district: HashMap<District, Vec<usize>> = HashMap::new();
        for (district, entry) in mapping.iter() {
            let id = surface.draw_path(
                &entry.path,
                &Attributes {
                    fill: Some(color::neutral()),
                    stroke: Some(STROKE),
                    stroke_width: Some(1.0),
                    opacity: Some(IDLE_OPACITY),
                    cursor: None,
                    title: Some(entry.name.clone()),
                },
            );
            surface.set_data(id, "district", district.key());
            surface.set_data(id, "name", &entry.name);

            let index = elements.len();
            elements.push(RegionElement {
                id,
                district,
                name: entry.name.clone(),
                phase: Phase::Idle,
            });
            by_element.insert(id, index);
            by_district.entry(district).or_default().push(index);
        }
        tracing::debug!("Initialized {} districts in {}", elements.len(), container_id);

        Some(MapHandle {
            surface,
            elements,
            by_element,
            by_district,
            counts: HashMap::new(),
            on_click: on_region_click.unwrap_or_else(|| Box::new(|_, _| {})),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn elements(&self) -> &[RegionElement] {
        &self.elements
    }

    pub fn elements_for(&self, district: District) -> Vec<&RegionElement> {
        self.by_district
            .get(&district)
            .map(|indices| indices.iter().map(|i| &self.elements[*i]).collect())
            .unwrap_or_default()
    }

    pub fn phase(&self, element: ElementId) -> Option<Phase> {
        self.lookup(element).map(|i| self.elements[i].phase)
    }

    pub fn pointer_enter(&mut self, element: ElementId) {
        let Some(index) = self.lookup(element) else {
            return;
        };
        if self.elements[index].phase == Phase::Hovered {
            return;
        }

        self.elements[index].phase = Phase::Hovered;
        self.surface.set_attributes(
            element,
            &Attributes {
                opacity: Some(HOVER_OPACITY),
                cursor: Some(Cursor::Pointer),
                ..Default::default()
            },
        );
    }

    pub fn pointer_leave(&mut self, element: ElementId) {
        let Some(index) = self.lookup(element) else {
            return;
        };
        if self.elements[index].phase == Phase::Idle {
            return;
        }

        self.elements[index].phase = Phase::Idle;
        self.surface.set_attributes(
            element,
            &Attributes {
                opacity: Some(IDLE_OPACITY),
                ..Default::default()
            },
        );
    }

    pub fn click(&mut self, element: ElementId) {
        let Some(index) = self.lookup(element) else {
            return;
        };
        let region = &self.elements[index];
        (self.on_click)(region.district, &region.name);
    }

    /// Recolors every element of each listed district and replaces the count
    /// snapshot. Districts with no rendered element are skipped.
    pub fn update(&mut self, distribution: &[DistrictCount]) {
        let mut counts = HashMap::with_capacity(distribution.len());
        for item in distribution {
            let indices = match District::from_key(&item.district)
                .and_then(|district| self.by_district.get(&district).map(|i| (district, i)))
            {
                Some((district, indices)) => {
                    counts.insert(district, item.user_count);
                    indices
                }
                None => {
                    tracing::debug!("Skipping unrendered district {}", item.district);
                    continue;
                }
            };

            let fill = Attributes::fill(color::color(item.user_count));
            for index in indices {
                self.surface.set_attributes(self.elements[*index].id, &fill);
            }
        }
        self.counts = counts;
    }

    /// Count from the latest snapshot, 0 when the district was not reported.
    pub fn count_for(&self, district: District) -> u64 {
        self.counts.get(&district).copied().unwrap_or(0)
    }

    pub fn tooltip(&self, element: ElementId, role: RoleFilter) -> Option<String> {
        let region = &self.elements[self.lookup(element)?];
        Some(format!(
            "{}: {} {}",
            region.name,
            self.count_for(region.district),
            role.label()
        ))
    }

    pub fn clear(&mut self) {
        let fill = Attributes::fill(color::neutral());
        for region in &self.elements {
            self.surface.set_attributes(region.id, &fill);
        }
        self.counts.clear();
    }

    /// Removes every rendered element and hands the surface back.
    pub fn dispose(mut self) -> S {
        for region in self.elements.drain(..) {
            self.surface.remove(region.id);
        }
        self.surface
    }

    fn lookup(&self, element: ElementId) -> Option<usize> {
        self.by_element.get(&element).copied()
    }
}
