//! Static content for the Jambo Agri website.
//!
//! Everything in this crate is plain data: the pages render it and nothing
//! mutates it.

mod crops;
mod site;

pub use crops::*;
pub use site::*;
