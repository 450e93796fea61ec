//! Status classifier strategies
//!
//! | Strategy | Type | Side effects |
//! |----------|------|--------------|
//! | `rule` | [`RuleClassifier`] | none |
//! | `service` | [`ServiceClassifier`] | network call, diagnostic logs |

mod rule;
mod service;

pub use rule::RuleClassifier;
pub use service::ServiceClassifier;
