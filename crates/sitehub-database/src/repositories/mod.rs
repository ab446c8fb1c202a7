//! Typed repositories over the content document store.

pub mod collection;
pub mod site_info;

pub use collection::{
    AdvantageRepository, CollectionRepository, MemberRepository, NumberStatRepository,
    PropertyRepository, SatisfactionRepository, ServiceRepository, SliderHeaderRepository,
    SocialNetworkRepository,
};
pub use site_info::SiteInfoRepository;
