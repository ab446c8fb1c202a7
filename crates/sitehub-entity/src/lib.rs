//! # sitehub-entity
//!
//! Domain model for the SiteHub site-info document. One document exists per
//! website; it carries single-value header fields (logo, banner, footer and
//! the "about us" section) and eight ordered sub-collections of bilingual
//! content entries. Entries only ever reference images by URL; raw image
//! bytes exist solely in the [`image::ImagePayload`] values clients send.

pub mod collection;
pub mod entry;
pub mod image;
pub mod site_info;

pub use collection::{Collection, ImageField, ImageFieldKind, Language, UniqueKey};
pub use entry::{
    Advantage, DraftImages, DraftParts, EntryDraft, Member, NewAdvantage, NewMember,
    NewNumberStat, NewProperty, NewSatisfaction, NewService, NewSliderHeader,
    NewSocialNetwork, NumberStat, Property, Satisfaction, Service, SiteEntry, SliderHeader,
    SocialNetwork,
};
pub use image::{ImageInput, ImagePayload};
pub use site_info::{
    AboutUs, AboutUsUpdate, Banner, BannerUpdate, Footer, FooterUpdate, SiteInfo, SiteSnapshot,
};
