//! Assembled read-only view of a website's content.

use serde::{Deserialize, Serialize};

use super::{AboutUs, Banner, Footer};
use crate::entry::{
    Advantage, Member, NumberStat, Property, Satisfaction, Service, SliderHeader, SocialNetwork,
};

/// Everything the public website renders, in one payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    pub website_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub banner: Banner,
    pub footer: Footer,
    pub about_us: AboutUs,
    pub advantages: Vec<Advantage>,
    pub services: Vec<Service>,
    pub members: Vec<Member>,
    pub satisfactions: Vec<Satisfaction>,
    pub social_networks: Vec<SocialNetwork>,
    pub slider_headers: Vec<SliderHeader>,
    pub properties: Vec<Property>,
    pub numbers: Vec<NumberStat>,
}
