//! Facade over every site-info service of one website.

use std::sync::Arc;

use tracing::info;

use sitehub_core::result::AppResult;
use sitehub_core::traits::image::ImageStore;
use sitehub_database::SiteInfoStore;
use sitehub_database::repositories::{CollectionRepository, SiteInfoRepository};
use sitehub_entity::{
    Advantage, Collection, Member, NumberStat, Property, Satisfaction, Service, SiteEntry,
    SiteInfo, SiteSnapshot, SliderHeader, SocialNetwork,
};

use crate::entry::{CollectionOperations, EntryService};
use crate::failure::surface;
use crate::header::HeaderService;

/// All content operations of one website, sharing one document store and
/// one image store.
#[derive(Clone)]
pub struct SiteInfoService {
    website: String,
    store: Arc<dyn SiteInfoStore>,
    header: HeaderService,
    advantages: EntryService<Advantage>,
    services: EntryService<Service>,
    members: EntryService<Member>,
    satisfactions: EntryService<Satisfaction>,
    social_networks: EntryService<SocialNetwork>,
    slider_headers: EntryService<SliderHeader>,
    properties: EntryService<Property>,
    numbers: EntryService<NumberStat>,
}

impl SiteInfoService {
    /// Creates the services for `website`.
    pub fn new(
        store: Arc<dyn SiteInfoStore>,
        images: Arc<dyn ImageStore>,
        website: impl Into<String>,
    ) -> Self {
        let website = website.into();
        Self {
            header: HeaderService::new(
                SiteInfoRepository::new(Arc::clone(&store), website.clone()),
                Arc::clone(&images),
            ),
            advantages: entry_service(&store, &images, &website),
            services: entry_service(&store, &images, &website),
            members: entry_service(&store, &images, &website),
            satisfactions: entry_service(&store, &images, &website),
            social_networks: entry_service(&store, &images, &website),
            slider_headers: entry_service(&store, &images, &website),
            properties: entry_service(&store, &images, &website),
            numbers: entry_service(&store, &images, &website),
            website,
            store,
        }
    }

    /// The website served.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Create the document if it does not exist yet.
    pub async fn seed(&self) -> AppResult<SiteInfo> {
        let document = self
            .store
            .ensure_document(&self.website)
            .await
            .map_err(|e| surface(e, "siteInfo.seed"))?;
        info!(website = %self.website, "Site-info document ready");
        Ok(document)
    }

    /// Whether the document store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }

    /// Name of the document store backend.
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub fn header(&self) -> &HeaderService {
        &self.header
    }

    pub fn advantages(&self) -> &EntryService<Advantage> {
        &self.advantages
    }

    pub fn services(&self) -> &EntryService<Service> {
        &self.services
    }

    pub fn members(&self) -> &EntryService<Member> {
        &self.members
    }

    pub fn satisfactions(&self) -> &EntryService<Satisfaction> {
        &self.satisfactions
    }

    pub fn social_networks(&self) -> &EntryService<SocialNetwork> {
        &self.social_networks
    }

    pub fn slider_headers(&self) -> &EntryService<SliderHeader> {
        &self.slider_headers
    }

    pub fn properties(&self) -> &EntryService<Property> {
        &self.properties
    }

    pub fn numbers(&self) -> &EntryService<NumberStat> {
        &self.numbers
    }

    /// The entry service for `collection`, as JSON operations.
    pub fn collection(&self, collection: Collection) -> &dyn CollectionOperations {
        match collection {
            Collection::Advantages => &self.advantages,
            Collection::Services => &self.services,
            Collection::Members => &self.members,
            Collection::Satisfactions => &self.satisfactions,
            Collection::SocialNetworks => &self.social_networks,
            Collection::SliderHeaders => &self.slider_headers,
            Collection::Properties => &self.properties,
            Collection::Numbers => &self.numbers,
        }
    }

    /// Everything the public website renders. A missing document yields an
    /// empty snapshot.
    pub async fn snapshot(&self) -> AppResult<SiteSnapshot> {
        let header = self
            .store
            .find_document(&self.website)
            .await
            .map_err(|e| surface(e, "siteInfo.snapshot"))?
            .unwrap_or_else(|| SiteInfo::empty(self.website.clone()));

        Ok(SiteSnapshot {
            website_name: header.website_name,
            logo: header.logo,
            banner: header.banner,
            footer: header.footer,
            about_us: header.about_us,
            advantages: self.advantages.get_all().await?.items,
            services: self.services.get_all().await?.items,
            members: self.members.get_all().await?.items,
            satisfactions: self.satisfactions.get_all().await?.items,
            social_networks: self.social_networks.get_all().await?.items,
            slider_headers: self.slider_headers.get_all().await?.items,
            properties: self.properties.get_all().await?.items,
            numbers: self.numbers.get_all().await?.items,
        })
    }
}

fn entry_service<E: SiteEntry>(
    store: &Arc<dyn SiteInfoStore>,
    images: &Arc<dyn ImageStore>,
    website: &str,
) -> EntryService<E> {
    EntryService::new(
        CollectionRepository::new(Arc::clone(store), website),
        Arc::clone(images),
    )
}
