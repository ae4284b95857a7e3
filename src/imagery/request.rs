use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

use crate::geometry::BoundingBox;

use super::{ImageryError, Result};

pub const DEFAULT_EVALSCRIPT: &str = "//VERSION=3\n\nfunction setup() {\n  return {\n    input: [\"B02\", \"B03\", \"B04\"],\n    output: { bands: 3 }\n  };\n}\n\nfunction evaluatePixel(sample) {\n  return [2.5 * sample.B04, 2.5 * sample.B03, 2.5 * sample.B02];\n}";

/// Static part of every imagery request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageryParams {
    pub time_from: String,
    pub time_to: String,
    pub data_type: String,
    pub width: f64,
    pub height: f64,
    pub identifier: String,
    pub format: String,
    pub evalscript: String,
}

impl Default for ImageryParams {
    fn default() -> Self {
        Self {
            time_from: "2024-10-23T00:00:00Z".to_string(),
            time_to: "2024-11-18T23:59:59Z".to_string(),
            data_type: "sentinel-2-l2a".to_string(),
            width: 512.0,
            height: 520.193,
            identifier: "default".to_string(),
            format: "image/jpeg".to_string(),
            evalscript: DEFAULT_EVALSCRIPT.to_string(),
        }
    }
}

impl ImageryParams {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ImageryError::InvalidParams(format!(
                    "output {name} must be a positive number, got {value}"
                )));
            }
        }
        let from = parse_timestamp("start", &self.time_from)?;
        let to = parse_timestamp("end", &self.time_to)?;
        if from > to {
            return Err(ImageryError::InvalidParams(format!(
                "time range starts at {} after it ends at {}",
                self.time_from, self.time_to
            )));
        }
        if self.data_type.trim().is_empty() {
            return Err(ImageryError::InvalidParams(
                "data source type is empty".to_string(),
            ));
        }
        if self.evalscript.trim().is_empty() {
            return Err(ImageryError::InvalidParams(
                "evalscript is empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_timestamp(which: &str, raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).map_err(|error| {
        ImageryError::InvalidParams(format!(
            "time range {which} `{raw}` is not an RFC 3339 timestamp: {error}"
        ))
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageryRequest {
    pub input: RequestInput,
    pub output: OutputSpec,
    pub evalscript: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestInput {
    pub bounds: RequestBounds,
    pub data: Vec<DataSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBounds {
    pub bbox: [f64; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSource {
    #[serde(rename = "dataFilter")]
    pub data_filter: DataFilter,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataFilter {
    #[serde(rename = "timeRange")]
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpec {
    #[serde(serialize_with = "whole_or_fractional")]
    pub width: f64,
    #[serde(serialize_with = "whole_or_fractional")]
    pub height: f64,
    pub responses: Vec<OutputResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputResponse {
    pub identifier: String,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

fn whole_or_fractional<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && *value >= 0.0 && *value <= u32::MAX as f64 {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Builds the request body for the captured bounding box. Pure.
pub fn create_api_request_body(bbox: &BoundingBox, params: &ImageryParams) -> ImageryRequest {
    ImageryRequest {
        input: RequestInput {
            bounds: RequestBounds {
                bbox: bbox.flatten(),
            },
            data: vec![DataSource {
                data_filter: DataFilter {
                    time_range: TimeRange {
                        from: params.time_from.clone(),
                        to: params.time_to.clone(),
                    },
                },
                kind: params.data_type.clone(),
            }],
        },
        output: OutputSpec {
            width: params.width,
            height: params.height,
            responses: vec![OutputResponse {
                identifier: params.identifier.clone(),
                format: OutputFormat {
                    kind: params.format.clone(),
                },
            }],
        },
        evalscript: params.evalscript.clone(),
    }
}
