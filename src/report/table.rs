//! Fixed-width plain-text output.

use crate::types::report::{CalibrationReport, RankedScore, SolveReport};

const NAME_WIDTH: usize = 12;
const SCORE_WIDTH: usize = 5;
const BAND_WIDTH: usize = 7;

pub fn ranking(rows: &[RankedScore]) -> String {
    let mut output = format!(
        "{:>NAME_WIDTH$} | {:>SCORE_WIDTH$} | {:>BAND_WIDTH$}\n",
        "EMOTION", "SCORE", "BAND"
    );
    output.push_str(&"-".repeat(NAME_WIDTH + SCORE_WIDTH + BAND_WIDTH + 6));
    output.push('\n');
    for row in rows {
        output.push_str(&format!(
            "{:>NAME_WIDTH$} | {:>SCORE_WIDTH$.1} | {:>BAND_WIDTH$}\n",
            row.name,
            row.score_0_100,
            row.band.as_str()
        ));
    }
    output
}

pub fn solve(report: &SolveReport) -> String {
    let ranked = &report.ranked;
    let mut output = format!(
        "DETECTED: {} ({:.1}%) [{}]\n",
        report.detected.as_str().to_uppercase(),
        ranked.score_0_100,
        ranked.band
    );
    if report.fallback {
        output.push_str("(no keyword matched; anxiety is the default route)\n");
    }
    output.push_str(&format!("formula:  {}\n", ranked.result.formula));
    for variable in &ranked.result.vars {
        output.push_str(&format!("  {:<12} {:.2}\n", variable.name, variable.value));
    }
    output.push_str(&format!("protocol: {}\n", ranked.result.protocol));
    output.push_str(&format!("fix:      {}\n", ranked.result.fix));
    output
}

pub fn calibration(report: &CalibrationReport) -> String {
    let c = &report.calibration;
    let mut output = String::new();
    if let Some(scenario) = report.scenario {
        output.push_str(&format!("scenario:      {}\n", scenario.label()));
    }
    output.push_str(&format!("expected harm: {:.3}\n", c.expected_harm));
    output.push_str(&format!("buffers:       {:.3}\n", c.buffers));
    output.push_str(&format!(
        "pressure:      {:.3} (range {:.3} - {:.3})\n",
        c.pressure_mid, c.pressure_low, c.pressure_high
    ));
    output.push_str(&format!("band:          {}\n", c.band));
    output.push_str(&format!("driver:        {}\n", c.driver.explanation()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::score_all;
    use crate::types::state::BioState;

    #[test]
    fn ranking_table_has_fixed_width_columns() {
        let ranked = score_all(&BioState::default());
        let rendered = ranking(&ranked);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("     EMOTION | SCORE |    BAND"));
        let widths = rendered
            .lines()
            .filter(|line| line.contains('|'))
            .map(str::len)
            .collect::<Vec<_>>();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn ranking_rows_show_percentages() {
        let state = BioState {
            social_req: 0.9,
            social_obs: 0.1,
            ..BioState::default()
        };
        let rendered = ranking(&score_all(&state));
        assert!(rendered.contains("  Loneliness |  80.0 |    High"));
    }
}
