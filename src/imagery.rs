mod client;
mod error;
mod request;
mod response;


pub use client::ImageryClient;
pub use error::{ImageryError, Result};
pub use request::{
    DEFAULT_EVALSCRIPT, DataFilter, DataSource, ImageryParams, ImageryRequest, OutputFormat,
    OutputResponse, OutputSpec, RequestBounds, RequestInput, TimeRange, create_api_request_body,
};
pub use response::{ImageryResponse, ResponseItem};
