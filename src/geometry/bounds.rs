use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{GeometryError, Result};

/// A geographic position serialised longitude first, as `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat(pub f64, pub f64);

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self(lng, lat)
    }

    pub fn lng(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }

    pub fn validate(&self) -> Result<()> {
        if !(-180.0..=180.0).contains(&self.lng()) {
            return Err(GeometryError::LongitudeOutOfRange(self.lng()));
        }
        if !(-90.0..=90.0).contains(&self.lat()) {
            return Err(GeometryError::LatitudeOutOfRange(self.lat()));
        }
        Ok(())
    }
}

/// Rectangle extent expressed through its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    south_west: LngLat,
    north_east: LngLat,
}

impl LatLngBounds {
    /// Builds bounds from two opposite corners given in any order, so a rectangle
    /// dragged from any corner yields the same extent.
    pub fn from_corners(a: LngLat, b: LngLat) -> Self {
        Self {
            south_west: LngLat::new(a.lng().min(b.lng()), a.lat().min(b.lat())),
            north_east: LngLat::new(a.lng().max(b.lng()), a.lat().max(b.lat())),
        }
    }

    pub fn south_west(&self) -> LngLat {
        self.south_west
    }

    pub fn north_east(&self) -> LngLat {
        self.north_east
    }

    pub fn to_bounding_box(&self) -> BoundingBox {
        BoundingBox(self.south_west, self.north_east)
    }
}

impl FromStr for LatLngBounds {
    type Err = GeometryError;

    /// Parses `minLng,minLat,maxLng,maxLat`.
    fn from_str(raw: &str) -> Result<Self> {
        let values = raw
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|error| GeometryError::InvalidCoordinate {
                        value: part.to_string(),
                        reason: error.to_string(),
                    })
                    .and_then(|value| {
                        if value.is_finite() {
                            Ok(value)
                        } else {
                            Err(GeometryError::InvalidCoordinate {
                                value: part.to_string(),
                                reason: "coordinate must be finite".to_string(),
                            })
                        }
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let [min_lng, min_lat, max_lng, max_lat] = values.as_slice() else {
            return Err(GeometryError::WrongArity(values.len()));
        };
        let first = LngLat::new(*min_lng, *min_lat);
        let second = LngLat::new(*max_lng, *max_lat);
        first.validate()?;
        second.validate()?;
        Ok(Self::from_corners(first, second))
    }
}

/// The captured selection: `[south_west, north_east]`, each corner `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox(pub LngLat, pub LngLat);

impl BoundingBox {
    pub fn to_pairs(&self) -> [[f64; 2]; 2] {
        [[self.0.lng(), self.0.lat()], [self.1.lng(), self.1.lat()]]
    }

    pub fn flatten(&self) -> [f64; 4] {
        [self.0.lng(), self.0.lat(), self.1.lng(), self.1.lat()]
    }
}

impl From<LatLngBounds> for BoundingBox {
    fn from(bounds: LatLngBounds) -> Self {
        bounds.to_bounding_box()
    }
}
