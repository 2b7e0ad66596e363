use eframe::egui::Color32;

/// The gas species the front end knows how to spawn, draw and chart.
///
/// Particles carry only the numeric [`tag`](Species::tag); this enum is the
/// boundary view of that tag for rendering and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Light,
    Medium,
    Heavy,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Light, Species::Medium, Species::Heavy];

    /// Numeric tag stored in [`crate::core::Particle::kind`].
    pub fn tag(self) -> usize {
        match self {
            Species::Light => 1,
            Species::Medium => 2,
            Species::Heavy => 3,
        }
    }

    pub fn from_tag(tag: usize) -> Option<Species> {
        Species::ALL.into_iter().find(|s| s.tag() == tag)
    }

    pub fn mass(self) -> f32 {
        match self {
            Species::Light => 1.0,
            Species::Medium => 5.0,
            Species::Heavy => 7.0,
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Species::Light => Color32::from_rgb(0x00, 0x00, 0xFF),
            Species::Medium => Color32::from_rgb(0xFF, 0x00, 0x00),
            Species::Heavy => Color32::from_rgb(0x00, 0xFF, 0x00),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Light => "Light",
            Species::Medium => "Medium",
            Species::Heavy => "Heavy",
        }
    }
}

/// Drawing colour for any type tag; tags outside [`Species`] get gray.
pub fn tag_color(tag: usize) -> Color32 {
    Species::from_tag(tag).map_or(Color32::GRAY, Species::color)
}
