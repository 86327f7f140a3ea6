//! Contact form pipeline: validate an inquiry, hand it to the email
//! delivery provider once, and report the outcome to the visitor.

mod config;
mod form;
mod inquiry;
mod notice;
mod prefill;
mod provider;
mod state;

pub use config::*;
pub use form::*;
pub use inquiry::*;
pub use notice::*;
pub use prefill::*;
pub use provider::*;
pub use state::*;
