//! Keyword router from free text to a construct and a placeholder state.
//!
//! This is substring matching over fixed keyword lists, not language
//! understanding. The inferred state values are fixed heuristics per
//! construct, good enough to pick an equation for interactive use.

use crate::equations::Construct;
use crate::types::state::BioState;
use tracing::debug;

struct Route {
    construct: Construct,
    keywords: &'static [&'static str],
    state: fn() -> BioState,
}

const ROUTES: [Route; 4] = [
    Route {
        construct: Construct::Loneliness,
        keywords: &["lonely", "alone", "girl", "virgin", "missed out"],
        state: lonely_state,
    },
    Route {
        construct: Construct::Regret,
        keywords: &["should have", "mistake", "regret", "idiot", "why did i"],
        state: regret_state,
    },
    Route {
        construct: Construct::Frustration,
        keywords: &["angry", "stuck", "blocked", "fuck", "annoying"],
        state: blocked_state,
    },
    Route {
        construct: Construct::Hopelessness,
        keywords: &["pointless", "never", "always", "give up", "loop"],
        state: helpless_state,
    },
];

fn lonely_state() -> BioState {
    BioState {
        social_req: 0.9,
        social_obs: 0.1,
        ..BioState::default()
    }
}

fn regret_state() -> BioState {
    BioState {
        counterfactual_val: 0.9,
        reward_received: 0.2,
        reversibility: 0.1,
        ..BioState::default()
    }
}

fn blocked_state() -> BioState {
    BioState {
        reward_expected: 0.9,
        reward_received: 0.1,
        ..BioState::default()
    }
}

fn helpless_state() -> BioState {
    BioState {
        agency: 0.1,
        social_req: 0.8,
        social_obs: 0.2,
        ..BioState::default()
    }
}

fn default_state() -> BioState {
    BioState {
        threat_prob: 0.8,
        uncertainty: 0.7,
        coping: 0.3,
        ..BioState::default()
    }
}

/// A routing decision. `keyword` is `None` when nothing matched and the
/// anxiety fallback was used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Routed {
    pub construct: Construct,
    pub state: BioState,
    pub keyword: Option<&'static str>,
}

impl Routed {
    pub fn is_fallback(&self) -> bool {
        self.keyword.is_none()
    }
}

/// Takes the first route whose keyword list matches, anxiety otherwise.
pub fn route(text: &str) -> Routed {
    let lowered = text.to_lowercase();
    for entry in &ROUTES {
        if let Some(keyword) = entry
            .keywords
            .iter()
            .copied()
            .find(|keyword| lowered.contains(keyword))
        {
            debug!(construct = %entry.construct, keyword, "router matched keyword");
            return Routed {
                construct: entry.construct,
                state: (entry.state)(),
                keyword: Some(keyword),
            };
        }
    }
    debug!("router found no keyword; defaulting to anxiety");
    Routed {
        construct: Construct::Anxiety,
        state: default_state(),
        keyword: None,
    }
}

pub fn classify(text: &str) -> (Construct, BioState) {
    let routed = route(text);
    (routed.construct, routed.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::evaluate;

    #[test]
    fn loneliness_wins_over_regret() {
        let (construct, _) = classify("I feel so lonely, it was a mistake to move");
        assert_eq!(construct, Construct::Loneliness);
    }

    #[test]
    fn routes_each_construct() {
        assert_eq!(classify("I should have spoken up").0, Construct::Regret);
        assert_eq!(classify("So ANNOYING, I'm stuck").0, Construct::Frustration);
        assert_eq!(classify("what's the point, I give up").0, Construct::Hopelessness);
    }

    #[test]
    fn unmatched_text_defaults_to_anxiety() {
        let (construct, state) = classify("the interview is tomorrow");
        assert_eq!(construct, Construct::Anxiety);
        assert_eq!(state.threat_prob, 0.8);
        assert!(route("the interview is tomorrow").is_fallback());
        assert_eq!(evaluate(construct, &state).score, 1.0);
    }

    #[test]
    fn routed_loneliness_state_scores_point_eight() {
        let (construct, state) = classify("alone again");
        assert!((evaluate(construct, &state).score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn route_reports_the_matching_keyword() {
        let routed = route("Why did I say that");
        assert_eq!(routed.construct, Construct::Regret);
        assert_eq!(routed.keyword, Some("why did i"));
        assert!(!routed.is_fallback());
        assert_eq!((routed.construct, routed.state), classify("Why did I say that"));
    }
}
