//! Logo, banner, footer and "about us" handlers.

use axum::extract::State;
use tracing::debug;

use sitehub_entity::{AboutUsUpdate, BannerUpdate, FooterUpdate};

use crate::dto::request::SetLogoRequest;
use crate::dto::response::Outcome;
use crate::extractors::{AdminUser, ValidatedJson};
use crate::state::AppState;

/// GET /panel/site-info/logo, GET /website/site-info/logo
pub async fn get_logo(State(state): State<AppState>) -> Outcome {
    Outcome::keyed("logo", state.site_info.header().logo().await)
}

/// PUT /panel/site-info/logo
pub async fn set_logo(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<SetLogoRequest>,
) -> Outcome {
    debug!(admin = %admin.sub, format = %req.logo.format, "Replacing logo");
    Outcome::keyed("logo", state.site_info.header().set_logo(req.logo).await)
}

/// GET /panel/site-info/banner, GET /website/site-info/banner
pub async fn get_banner(State(state): State<AppState>) -> Outcome {
    Outcome::keyed("banner", state.site_info.header().banner().await)
}

/// PUT /panel/site-info/banner
pub async fn update_banner(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(update): ValidatedJson<BannerUpdate>,
) -> Outcome {
    debug!(admin = %admin.sub, "Updating banner");
    Outcome::keyed("banner", state.site_info.header().update_banner(update).await)
}

/// GET /panel/site-info/footer, GET /website/site-info/footer
pub async fn get_footer(State(state): State<AppState>) -> Outcome {
    Outcome::keyed("footer", state.site_info.header().footer().await)
}

/// PUT /panel/site-info/footer
pub async fn update_footer(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(update): ValidatedJson<FooterUpdate>,
) -> Outcome {
    debug!(admin = %admin.sub, "Updating footer");
    Outcome::keyed("footer", state.site_info.header().update_footer(update).await)
}

/// GET /panel/site-info/about-us, GET /website/site-info/about-us
pub async fn get_about_us(State(state): State<AppState>) -> Outcome {
    Outcome::keyed("aboutUs", state.site_info.header().about_us().await)
}

/// PUT /panel/site-info/about-us
pub async fn update_about_us(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(update): ValidatedJson<AboutUsUpdate>,
) -> Outcome {
    debug!(admin = %admin.sub, "Updating about us");
    Outcome::keyed(
        "aboutUs",
        state.site_info.header().update_about_us(update).await,
    )
}
