pub mod facets;
pub mod feed;
pub mod filter;
pub mod record;
pub mod remap;
pub mod resources;
pub mod sort;
pub mod state;
pub mod store;
pub mod teams;
