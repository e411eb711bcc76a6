//! API resources for the [`lead`](crate::servers::apis::v1::context::lead) API context.
use lead_gateway_primitives::field::FieldValues;
use serde::{Deserialize, Serialize};

use crate::core::lead;

/// The landing page projection returned with every lead.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct LandingPage {
    pub title: String,
    pub slug: String,
}

/// A resource that represents a lead.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Lead {
    /// The lead id.
    pub id: String,
    /// The creation timestamp, as stored.
    pub created_at: String,
    /// The id of the landing page the lead was submitted to.
    pub landing_page_id: String,
    /// The landing page title and slug. `null` when the page no longer exists.
    pub landing_page: Option<LandingPage>,
    /// The submitted form values.
    pub data: FieldValues,
}

impl From<lead::LandingPageRef> for LandingPage {
    fn from(landing_page: lead::LandingPageRef) -> Self {
        LandingPage {
            title: landing_page.title,
            slug: landing_page.slug,
        }
    }
}

impl From<lead::Lead> for Lead {
    fn from(lead: lead::Lead) -> Self {
        Lead {
            id: lead.id,
            created_at: lead.created_at,
            landing_page_id: lead.landing_page_id,
            landing_page: lead.landing_page.map(LandingPage::from),
            data: lead.data,
        }
    }
}
