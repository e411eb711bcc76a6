//! Lead domain records.
//!
//! A [`Lead`] is a form submission captured by a landing page. The gateway
//! only reads leads: they are created by the landing page submission flow.
//!
//! The lead is always returned with a [`LandingPageRef`], a projection of
//! the landing page containing only its `title` and `slug`. No other landing
//! page attribute leaves the gateway.
use derive_more::Constructor;
use lead_gateway_primitives::field::FieldValues;

/// A lead and the landing page it was submitted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    /// Opaque lead identifier.
    pub id: String,
    /// Creation timestamp as stored, for example `2024-01-01T00:00:00Z`.
    pub created_at: String,
    /// Opaque identifier of the landing page.
    pub landing_page_id: String,
    /// The landing page projection. `None` when the lead references a page
    /// that no longer exists.
    pub landing_page: Option<LandingPageRef>,
    /// The submitted form values.
    pub data: FieldValues,
}

/// Projection of a landing page exposed together with its leads.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct LandingPageRef {
    pub title: String,
    pub slug: String,
}

/// A landing page record. Only used to seed the persistence drivers.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct LandingPage {
    pub id: String,
    pub title: String,
    pub slug: String,
}

impl LandingPage {
    #[must_use]
    pub fn reference(&self) -> LandingPageRef {
        LandingPageRef::new(self.title.clone(), self.slug.clone())
    }
}

/// The integration settings currently flagged as active.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct ActiveConfiguration {
    /// Shared secret external integrations must send to read leads.
    pub integration_api_key: String,
}
