use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Legal,
    Health,
}

impl Scenario {
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Legal => "Legal / Court",
            Scenario::Health => "Health",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Scenario::Legal => &[
                "court",
                "trial",
                "solicitor",
                "judge",
                "case",
                "conviction",
                "sentence",
                "prison",
                "charge",
            ],
            Scenario::Health => &[
                "symptom", "cancer", "doctor", "hospital", "disease", "pain", "scan",
            ],
        }
    }
}

/// Tags calibration context with a coarse life domain, legal checked first.
pub fn classify_scenario(text: &str) -> Option<Scenario> {
    let lowered = text.to_lowercase();
    [Scenario::Legal, Scenario::Health]
        .into_iter()
        .find(|scenario| {
            scenario
                .keywords()
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_legal_and_health() {
        assert_eq!(classify_scenario("My TRIAL is next week"), Some(Scenario::Legal));
        assert_eq!(classify_scenario("waiting on a scan"), Some(Scenario::Health));
        assert_eq!(classify_scenario("the exam"), None);
    }

    #[test]
    fn legal_takes_priority() {
        assert_eq!(
            classify_scenario("the judge asked about my pain"),
            Some(Scenario::Legal)
        );
    }
}
