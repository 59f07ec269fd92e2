//! Site-wide content constants.
//!
//! DESIGN
//! ======
//! Navigation, venture listings and metadata are compile-time data. The only
//! runtime input is the form endpoint configuration, which [`SiteConfig::global`]
//! reads once on first access and then shares read-only for the lifetime of
//! the process.

use std::sync::LazyLock;

use serde::Serialize;

use crate::config::FormConfig;

// =============================================================================
// METADATA
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub og_image: &'static str,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "Mayalok Ventures",
    description: "Architecting the Future of Reality",
    url: "https://mayalok.ventures",
    og_image: "/og-image.jpg",
};

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: [NavEntry; 4] = [
    NavEntry { name: "Home", href: "/" },
    NavEntry { name: "Ecosystem", href: "/ventures/" },
    NavEntry { name: "Strategy", href: "/about/" },
    NavEntry { name: "Contact", href: "/contact/" },
];

// =============================================================================
// VENTURES
// =============================================================================

/// Accent color a venture card is themed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VentureColor {
    Blue,
    Red,
    Purple,
    Green,
    Amber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Venture {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub color: VentureColor,
    pub url: &'static str,
}

pub const VENTURES: [Venture; 5] = [
    Venture {
        id: "pramaan",
        name: "Pramaan",
        tagline: "Next-Gen Talent Acquisition",
        description: "Re-engineering how elite talent is identified, verified, and deployed at scale.",
        color: VentureColor::Blue,
        url: "https://pramaan.io",
    },
    Venture {
        id: "riskfortress",
        name: "RiskFortress",
        tagline: "Elite Risk Management & Security",
        description: "Protecting high-value assets, intelligence, and enterprises from modern threats.",
        color: VentureColor::Red,
        url: "https://riskfortress.io",
    },
    Venture {
        id: "mayavi",
        name: "Mayavi Studio",
        tagline: "Visuals Beyond Imagination",
        description: "Cinematic branding, identity systems, and digital storytelling for premium brands.",
        color: VentureColor::Purple,
        url: "https://mayavistudio.in",
    },
    Venture {
        id: "deeplink",
        name: "Deeplink Creators",
        tagline: "Monetizing Influence",
        description: "Transforming creators into scalable, revenue-driven digital assets.",
        color: VentureColor::Green,
        url: "https://deeplinkcreators.com",
    },
    Venture {
        id: "gurumaya",
        name: "GuruMaya",
        tagline: "Wisdom for the Modern Era",
        description: "A digital knowledge ecosystem blending ancient insight with modern execution.",
        color: VentureColor::Amber,
        url: "https://gurumaya.in",
    },
];

/// Look up a venture by its stable id.
#[must_use]
pub fn venture(id: &str) -> Option<&'static Venture> {
    VENTURES.iter().find(|v| v.id == id)
}

// =============================================================================
// TIMING
// =============================================================================

/// Shared animation timing, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDelays {
    pub stagger: f64,
    pub page_transition: f64,
    pub hover: f64,
}

pub const ANIMATION_DELAYS: AnimationDelays = AnimationDelays { stagger: 0.1, page_transition: 0.3, hover: 0.15 };

// =============================================================================
// SITE CONFIG
// =============================================================================

/// Everything a page needs to render, loaded once.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub metadata: SiteMetadata,
    pub navigation: &'static [NavEntry],
    pub ventures: &'static [Venture],
    pub delays: AnimationDelays,
    pub forms: FormConfig,
}

static GLOBAL: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::new(FormConfig::from_env_or_default())
});

impl SiteConfig {
    #[must_use]
    pub fn new(forms: FormConfig) -> Self {
        Self { metadata: SITE_METADATA, navigation: &NAVIGATION, ventures: &VENTURES, delays: ANIMATION_DELAYS, forms }
    }

    /// Process-wide configuration. The environment is read on first call only.
    #[must_use]
    pub fn global() -> &'static SiteConfig {
        &GLOBAL
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
