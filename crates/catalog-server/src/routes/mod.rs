//! Catalog API Routes
//!
//! - /admin/* - Product management (commands and full listing)
//! - /service/get-active-products - Listing for service staff

pub mod product;
pub mod swagger;
