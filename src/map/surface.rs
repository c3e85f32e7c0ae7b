use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_str(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// A partial attribute update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f32>,
    pub opacity: Option<f32>,
    pub cursor: Option<Cursor>,
    pub title: Option<String>,
}

impl Attributes {
    pub fn fill(color: Color) -> Self {
        Attributes {
            fill: Some(color),
            ..Default::default()
        }
    }

    /// Fields set in `other` overwrite fields in `self`.
    pub fn merge(&mut self, other: &Attributes) {
        if other.fill.is_some() {
            self.fill = other.fill;
        }
        if other.stroke.is_some() {
            self.stroke = other.stroke;
        }
        if other.stroke_width.is_some() {
            self.stroke_width = other.stroke_width;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.cursor.is_some() {
            self.cursor = other.cursor;
        }
        if other.title.is_some() {
            self.title.clone_from(&other.title);
        }
    }
}

/// A drawing surface mounted inside a host container.
pub trait Surface {
    fn draw_path(&mut self, path: &str, attrs: &Attributes) -> ElementId;
    fn set_attributes(&mut self, element: ElementId, attrs: &Attributes);
    fn set_data(&mut self, element: ElementId, key: &str, value: &str);
    fn remove(&mut self, element: ElementId);
}

/// The hosting environment that resolves containers by id.
pub trait Host {
    type Surface: Surface;

    /// `None` when no container with `container_id` exists. Must not mutate
    /// anything in that case.
    fn mount(&mut self, container_id: &str, width: u32, height: u32) -> Option<Self::Surface>;
}
