#![forbid(unsafe_code)]

pub mod config;
pub mod contract;
pub mod model;
pub mod shop;
pub mod transport;

pub use config::ShopConfig;
pub use contract::{Interaction, MockTransport, Pact, ProviderState};
pub use model::{Item, PurchaseOrder};
pub use shop::{PurchaseOutcome, ShopClient, ShopState, Storefront};
