//! Configuration handed to the map and drawing widgets. Rendering itself belongs
//! to the widget library; this only describes how it should be set up.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureHandling {
    Cooperative,
    Greedy,
    None,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapOptions {
    pub center: MapCenter,
    pub zoom: u8,
    pub gesture_handling: GestureHandling,
    pub map_type_control: bool,
    pub fullscreen_control: bool,
    pub street_view_control: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: MapCenter {
                lat: 41.870072,
                lng: 12.44693,
            },
            zoom: 13,
            gesture_handling: GestureHandling::Greedy,
            map_type_control: false,
            fullscreen_control: false,
            street_view_control: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RectangleOptions {
    pub fill_color: String,
    pub fill_opacity: f64,
    pub stroke_weight: u32,
    pub stroke_color: String,
    pub clickable: bool,
    pub editable: bool,
    pub draggable: bool,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            fill_color: "#FF0000".to_string(),
            fill_opacity: 0.35,
            stroke_weight: 2,
            stroke_color: "#FF0000".to_string(),
            clickable: true,
            editable: true,
            draggable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    Rectangle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub map: MapOptions,
    pub drawing_mode: DrawingMode,
    pub rectangle_options: RectangleOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            map: MapOptions::default(),
            drawing_mode: DrawingMode::Rectangle,
            rectangle_options: RectangleOptions::default(),
        }
    }
}

impl WidgetConfig {
    pub fn validate(&self) -> Result<(), String> {
        let center = self.map.center;
        if !(-90.0..=90.0).contains(&center.lat) || !(-180.0..=180.0).contains(&center.lng) {
            return Err(format!(
                "map center ({}, {}) is not a valid position",
                center.lat, center.lng
            ));
        }
        if !(0.0..=1.0).contains(&self.rectangle_options.fill_opacity) {
            return Err(format!(
                "rectangle fill opacity {} must be within [0, 1]",
                self.rectangle_options.fill_opacity
            ));
        }
        Ok(())
    }
}
