use serde_json::json;

use super::WidgetConfig;

#[test]
fn default_widget_config_matches_drawing_setup() {
    let value = serde_json::to_value(WidgetConfig::default()).expect("serialize widget config");
    assert_eq!(
        value,
        json!({
            "map": {
                "center": {"lat": 41.870072, "lng": 12.44693},
                "zoom": 13,
                "gestureHandling": "greedy",
                "mapTypeControl": false,
                "fullscreenControl": false,
                "streetViewControl": false
            },
            "drawingMode": "rectangle",
            "rectangleOptions": {
                "fillColor": "#FF0000",
                "fillOpacity": 0.35,
                "strokeWeight": 2,
                "strokeColor": "#FF0000",
                "clickable": true,
                "editable": true,
                "draggable": true
            }
        })
    );
}

#[test]
fn partial_widget_config_keeps_defaults() {
    let config: WidgetConfig =
        serde_json::from_value(json!({"map": {"zoom": 9}})).expect("deserialize widget config");
    assert_eq!(config.map.zoom, 9);
    assert_eq!(config.map.center.lat, 41.870072);
    assert!(config.rectangle_options.editable);
    assert!(config.validate().is_ok());
}

#[test]
fn invalid_opacity_is_rejected() {
    let mut config = WidgetConfig::default();
    config.rectangle_options.fill_opacity = 1.5;
    assert!(config.validate().is_err());
}
