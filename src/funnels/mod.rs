pub mod conversation;
pub mod engine;

use std::str::FromStr;
use thiserror::Error;

/// The closed set of marketing funnels. Every lookup is a `match` on this
/// enum, so adding a funnel forces the catalog, the question script and the
/// response generator to be extended together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunnelKind {
    MediterraneanDiet,
    ManifestationJournal,
    FidelityGuide,
}

/// Display data for one catalog card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunnelDescriptor {
    pub kind: FunnelKind,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Error)]
#[error("unknown funnel id {0:?}")]
pub struct UnknownFunnel(pub String);

impl FunnelKind {
    /// Catalog order as shown on the landing page.
    pub const ALL: [FunnelKind; 3] = [
        FunnelKind::MediterraneanDiet,
        FunnelKind::ManifestationJournal,
        FunnelKind::FidelityGuide,
    ];

    /// Stable identifier, also accepted as the `funnel` query parameter.
    pub fn id(self) -> &'static str {
        match self {
            FunnelKind::MediterraneanDiet => "mediterraneanDiet",
            FunnelKind::ManifestationJournal => "manifestationJournal",
            FunnelKind::FidelityGuide => "fidelityGuide",
        }
    }

    pub fn descriptor(self) -> FunnelDescriptor {
        match self {
            FunnelKind::MediterraneanDiet => FunnelDescriptor {
                kind: self,
                title: "Get a Personalized Meal Plan",
                description: "Tailored meal ideas to kickstart your healthy journey.",
                icon: "🥗",
            },
            FunnelKind::ManifestationJournal => FunnelDescriptor {
                kind: self,
                title: "Create Your Self-Actualization Plan",
                description: "A guided session to help you define and achieve your true potential.",
                icon: "✨",
            },
            FunnelKind::FidelityGuide => FunnelDescriptor {
                kind: self,
                title: "Tarot Reading for Relationships",
                description: "Find guidance and clarity on your relationship dynamics.",
                icon: "🔮",
            },
        }
    }

    /// Short title shown in the conversation header.
    pub fn chat_title(self) -> &'static str {
        match self {
            FunnelKind::MediterraneanDiet => "Meal Plan",
            FunnelKind::ManifestationJournal => "Self-Actualization",
            FunnelKind::FidelityGuide => "Relationship Reading",
        }
    }
}

impl FromStr for FunnelKind {
    type Err = UnknownFunnel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunnelKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownFunnel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_round_trip() {
        for kind in FunnelKind::ALL {
            assert_eq!(kind.id().parse::<FunnelKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "weightLifting".parse::<FunnelKind>().unwrap_err();
        assert_eq!(err, UnknownFunnel("weightLifting".to_string()));
        assert_eq!(err.to_string(), "unknown funnel id \"weightLifting\"");
    }

    #[test]
    fn every_funnel_has_card_copy() {
        for kind in FunnelKind::ALL {
            let descriptor = kind.descriptor();
            assert_eq!(descriptor.kind, kind);
            assert!(!descriptor.title.is_empty());
            assert!(!descriptor.description.is_empty());
            assert!(!descriptor.icon.is_empty());
            assert!(!kind.chat_title().is_empty());
        }
    }
}
