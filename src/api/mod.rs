//! Endpoint methods, grouped the way the remote API groups them.
//!
//! Every method here requires a logged-in client and funnels through the
//! request pipeline in [`crate::client`], so the error classification is
//! uniform across the whole surface.

mod accounts;
mod orders;
mod stocks;
mod watchlists;

pub use orders::MarketAmount;
pub use stocks::{InstrumentQuery, SecurityList};
