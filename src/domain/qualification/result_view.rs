//! Display mapping for a successful prediction.

use crate::domain::foundation::{format_fraction, Percentage};

use super::prediction::{ConfidenceAnomaly, PredictionLabel, PredictionResponse};

/// Separator used between the three numbers on the confidence line.
const CONFIDENCE_SEPARATOR: &str = " · ";

/// Values rendered for a succeeded submission.
///
/// Percentages are the raw fractions times 100 with one decimal and are not
/// clamped; only the indicator extent is bounded to `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: PredictionLabel,
    pub avg_confidence: String,
    pub lcl: String,
    pub ucl: String,
    /// Progress bar extent on the 0-100 scale.
    pub indicator: Percentage,
    /// Contract violations in the numbers, rendered as warnings.
    pub warnings: Vec<String>,
}

impl ResultView {
    pub fn from_response(response: &PredictionResponse) -> Self {
        Self {
            label: response.label,
            avg_confidence: format_fraction(response.avg_confidence),
            lcl: format_fraction(response.lcl),
            ucl: format_fraction(response.ucl),
            indicator: Percentage::from_fraction(response.avg_confidence),
            warnings: response
                .anomalies()
                .iter()
                .map(ConfidenceAnomaly::to_string)
                .collect(),
        }
    }

    /// `"86.0% · 81.0% · 90.0%"` (average, lower, upper).
    pub fn confidence_line(&self) -> String {
        [
            self.avg_confidence.as_str(),
            self.lcl.as_str(),
            self.ucl.as_str(),
        ]
        .join(CONFIDENCE_SEPARATOR)
    }

    /// Indicator extent rounded to a whole percent.
    pub fn indicator_width(&self) -> u8 {
        // Percentage is already clamped to 0..=100.
        self.indicator.value().round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(avg_confidence: f64) -> PredictionResponse {
        PredictionResponse {
            label: PredictionLabel::ClassicalMl,
            avg_confidence,
            lcl: 0.81,
            ucl: 0.90,
        }
    }

    #[test]
    fn confidence_line_matches_reference_scenario() {
        let view = ResultView::from_response(&response(0.86));
        assert_eq!(view.label, PredictionLabel::ClassicalMl);
        assert_eq!(view.confidence_line(), "86.0% · 81.0% · 90.0%");
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn indicator_clamps_above_hundred() {
        let view = ResultView::from_response(&response(1.4));
        assert_eq!(view.indicator_width(), 100);
        assert_eq!(view.avg_confidence, "140.0%");
    }

    #[test]
    fn indicator_clamps_below_zero() {
        let view = ResultView::from_response(&response(-0.2));
        assert_eq!(view.indicator_width(), 0);
        assert_eq!(view.avg_confidence, "-20.0%");
    }

    #[test]
    fn indicator_tracks_in_range_values() {
        assert_eq!(ResultView::from_response(&response(0.5)).indicator_width(), 50);
    }

    #[test]
    fn out_of_contract_values_become_warnings() {
        let view = ResultView::from_response(&response(1.4));
        assert_eq!(view.warnings.len(), 2);
        assert!(view.warnings[0].contains("avg_confidence"));
    }
}
