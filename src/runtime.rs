mod context;
mod error;
mod session;


pub use context::AppContext;
pub use error::{AppError, Result};
pub use session::{
    NO_IMAGE_MESSAGE, NO_SELECTION_MESSAGE, NO_TOKEN_MESSAGE, Rejection, SUBMIT_ERROR_MESSAGE,
    Session, SubmitOutcome,
};
