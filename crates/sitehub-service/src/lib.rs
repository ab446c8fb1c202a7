//! # sitehub-service
//!
//! Site-info business logic. [`EntryService`] gives every sub-collection the
//! same add/get/get-all/edit/delete contract, [`HeaderService`] handles the
//! single-value fields, and [`SiteInfoService`] bundles both for one website.
//!
//! Services follow constructor injection: the document store and the image
//! store are handed in as `Arc` trait objects at construction time.
//!
//! Every public operation reports domain failures such as duplicates or
//! missing entries as they are and turns infrastructure failures into a
//! logged, generic internal error.

pub mod entry;
pub mod header;
pub mod site_info;

mod failure;
mod images;
#[cfg(test)]
mod testing;

pub use entry::{CollectionOperations, EntryList, EntryService};
pub use header::HeaderService;
pub use site_info::SiteInfoService;
