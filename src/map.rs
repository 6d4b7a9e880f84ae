//! Marker data for the ski map on the blog page.
//!
//! Drawing the map is left to the mapping library loaded by the page; this
//! module only owns what gets plotted and where the map opens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub title: String,
    #[serde(flatten)]
    pub position: LatLng,
    pub z_index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_view")]
    pub view: MapView,
    #[serde(default = "ski_resorts")]
    pub markers: Vec<Marker>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            view: default_view(),
            markers: ski_resorts(),
        }
    }
}

impl Marker {
    pub fn new(title: &str, lat: f64, lng: f64, z_index: i32) -> Self {
        Self {
            title: title.to_string(),
            position: LatLng { lat, lng },
            z_index,
        }
    }
}

impl MapConfig {
    /// Markers ordered by stacking, lowest first.
    pub fn stacked_markers(&self) -> Vec<&Marker> {
        let mut markers: Vec<&Marker> = self.markers.iter().collect();
        markers.sort_by_key(|m| m.z_index);
        markers
    }
}

fn default_view() -> MapView {
    MapView {
        center: LatLng { lat: 40.0, lng: -97.0 },
        zoom: 4,
    }
}

/// Resorts visited on the skiing trips.
pub fn ski_resorts() -> Vec<Marker> {
    vec![
        Marker::new("Big Sky Resort", 45.28, -111.4, 1),
        Marker::new("Sundance Mountain Resort", 40.393329, -111.588772, 2),
        Marker::new("Badger Pass Ski Area", 37.662217, -119.663344, 3),
        Marker::new("June Mountain Ski Area", 37.767874, -119.090704, 4),
        Marker::new("Mammoth Mountain", 37.651021, -119.026706, 5),
        Marker::new("Ski Santa Fe", 35.796174, -105.802357, 6),
        Marker::new("Killington Ski Area", 43.625918, -72.796370, 7),
        Marker::new("Plattekill Mountain", 42.290269, -74.653214, 8),
        Marker::new("Liberty Mountain Resort", 39.763635, -77.375373, 9),
        Marker::new("Whitetail Resort", 39.741752, -77.933335, 10),
    ]
}
