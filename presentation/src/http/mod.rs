//! HTTP surface
//!
//! Two JSON routes under `/api/status`:
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/api/status/questions` | `200` array of `{id, text}` | `500` `{"error": ...}` |
//! | POST | `/api/status/submit` | `200` status ordinal | `400` plain-text message |

mod error;
mod handlers;
mod router;
mod state;

pub use error::ApiError;
pub use router::status_router;
pub use state::AppState;
