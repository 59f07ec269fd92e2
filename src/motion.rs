//! Entrance, stagger and hover transition variants.
//!
//! A variant set maps a named state (`hidden`, `visible`, `hover`, ...) to the
//! visual target the element animates toward. The sets are plain data and
//! serialize to the camelCase object shape the page's animation layer
//! consumes, so nothing here depends on how the transition is rendered.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::site::ANIMATION_DELAYS;

/// Cubic-bezier "expo out" curve shared by every transition.
pub const EASE_OUT_EXPO: [f64; 4] = [0.16, 1.0, 0.3, 1.0];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
}

impl Transition {
    fn eased(duration: f64) -> Self {
        Self { duration: Some(duration), ease: Some(EASE_OUT_EXPO), ..Self::default() }
    }
}

/// Visual target for one named state. Unset properties are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl Target {
    fn opacity(opacity: f64) -> Self {
        Self { opacity: Some(opacity), ..Self::default() }
    }

    fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

/// Named states of one variant set.
pub type Variants = BTreeMap<&'static str, Target>;

/// Fade in while rising 20px. `custom` is the element's position in a
/// staggered list and delays it by one stagger step per index.
#[must_use]
pub fn fade_up(custom: f64) -> Variants {
    let hidden = Target { y: Some(20.0), ..Target::opacity(0.0) };
    let visible = Target { y: Some(0.0), ..Target::opacity(1.0) }.with_transition(Transition {
        delay: Some(custom * ANIMATION_DELAYS.stagger),
        ..Transition::eased(0.6)
    });
    Variants::from([("hidden", hidden), ("visible", visible)])
}

#[must_use]
pub fn scale_in() -> Variants {
    let hidden = Target { scale: Some(0.95), ..Target::opacity(0.0) };
    let visible = Target { scale: Some(1.0), ..Target::opacity(1.0) }.with_transition(Transition::eased(0.4));
    Variants::from([("hidden", hidden), ("visible", visible)])
}

#[must_use]
pub fn slide_in() -> Variants {
    let hidden = Target { x: Some(-20.0), ..Target::opacity(0.0) };
    let visible = Target { x: Some(0.0), ..Target::opacity(1.0) }.with_transition(Transition::eased(0.5));
    Variants::from([("hidden", hidden), ("visible", visible)])
}

/// Parent container that reveals its children one stagger step apart.
#[must_use]
pub fn stagger_container() -> Variants {
    let visible = Target::opacity(1.0).with_transition(Transition {
        stagger_children: Some(ANIMATION_DELAYS.stagger),
        delay_children: Some(0.2),
        ..Transition::default()
    });
    Variants::from([("hidden", Target::opacity(0.0)), ("visible", visible)])
}

#[must_use]
pub fn card_hover() -> Variants {
    let initial = Target { scale: Some(1.0), rotate_x: Some(0.0), rotate_y: Some(0.0), ..Target::default() };
    let hover = Target { scale: Some(1.05), rotate_x: Some(1.0), rotate_y: Some(1.0), ..Target::default() }
        .with_transition(Transition::eased(0.3));
    Variants::from([("initial", initial), ("hover", hover)])
}

#[must_use]
pub fn page_transition() -> Variants {
    let animate = Target::opacity(1.0).with_transition(Transition::eased(ANIMATION_DELAYS.page_transition));
    let exit = Target::opacity(0.0).with_transition(Transition::eased(0.2));
    Variants::from([("initial", Target::opacity(0.0)), ("animate", animate), ("exit", exit)])
}

#[cfg(test)]
#[path = "motion_test.rs"]
mod tests;
