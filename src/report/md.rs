use crate::types::report::{CalibrationReport, RankedScore, SolveReport};

pub fn ranking(rows: &[RankedScore]) -> String {
    let mut output = String::new();
    output.push_str("# Emotion Ranking\n\n");
    output.push_str("| Emotion | Score | Band | Protocol |\n");
    output.push_str("|---|---|---|---|\n");
    for row in rows {
        output.push_str(&format!(
            "| {} | {:.1} | {} | {} |\n",
            row.name, row.score_0_100, row.band, row.result.protocol
        ));
    }
    output
}

pub fn solve(report: &SolveReport) -> String {
    let ranked = &report.ranked;
    let mut output = String::new();
    output.push_str(&format!(
        "# Detected: {} ({:.1}%)\n\n",
        report.detected.as_str().to_uppercase(),
        ranked.score_0_100
    ));
    output.push_str(&format!("Band: {}\n\n", ranked.band));
    output.push_str("## The Algorithm\n\n");
    output.push_str(&format!("`{}`\n\n", ranked.result.formula));
    output.push_str("## Variables\n\n");
    for variable in &ranked.result.vars {
        output.push_str(&format!("- {}: {:.2}\n", variable.name, variable.value));
    }
    output.push_str(&format!(
        "\n## The Fix: {}\n\n**Correction:** {}\n",
        ranked.result.protocol, ranked.result.fix
    ));
    output
}

pub fn calibration(report: &CalibrationReport) -> String {
    let c = &report.calibration;
    let mut output = String::new();
    output.push_str("# Risk Calibration\n\n");
    if let Some(scenario) = report.scenario {
        output.push_str(&format!("Scenario: {}\n\n", scenario.label()));
    }
    output.push_str(&format!(
        "- expected harm: {:.3}\n- buffers: {:.3}\n- pressure: {:.3} (range {:.3} to {:.3})\n- band: {}\n\n",
        c.expected_harm, c.buffers, c.pressure_mid, c.pressure_low, c.pressure_high, c.band
    ));
    output.push_str("## Dominant Driver\n\n");
    output.push_str(c.driver.explanation());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{calibrate, score_all};
    use crate::types::state::{BioState, CalibrationInput};

    #[test]
    fn markdown_ranking_contains_table() {
        let rendered = ranking(&score_all(&BioState::default()));
        assert!(rendered.contains("# Emotion Ranking"));
        assert!(rendered.contains("| Emotion | Score | Band | Protocol |"));
        assert!(rendered.contains("MICRO_WINS"));
    }

    #[test]
    fn markdown_calibration_names_driver() {
        let report = CalibrationReport {
            scenario: None,
            calibration: calibrate(&CalibrationInput {
                l_low: 0.05,
                l_mid: 0.1,
                l_high: 0.2,
                s: 0.95,
                coping: 0.7,
                rescue: 0.7,
                reversibility: 0.7,
                control: 0.7,
            }),
        };
        let rendered = calibration(&report);
        assert!(rendered.contains("## Dominant Driver"));
        assert!(rendered.contains("rare catastrophe"));
    }
}
