use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("bounding box must have four comma separated values, got {0}")]
    WrongArity(usize),

    #[error("invalid coordinate `{value}`: {reason}")]
    InvalidCoordinate { value: String, reason: String },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}
