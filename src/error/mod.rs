//! Error taxonomy for the learning client.
//!
//! - [`ValidationError`]: a required field is missing; raised before any request
//! - [`GatewayError`]: anything that went wrong talking to the store
//! - [`ErrorCategory`]: coarse classification used for logging
//!
//! None of these are fatal. The app turns every one of them into a toast.
//!
//! | Category | Source | Retryable |
//! |----------|--------|-----------|
//! | User | validation | No |
//! | Network | transport failure | Yes |
//! | Server | non-2xx response | Yes |
//! | Client | undecodable body | No |

mod category;
mod gateway;
mod validation;

pub use category::ErrorCategory;
pub use gateway::{GatewayError, GatewayResult};
pub use validation::ValidationError;
