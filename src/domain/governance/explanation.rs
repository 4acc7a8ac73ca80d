//! Natural-language summary of an aggregated vote.

use super::VotingVector;

/// Qualitative reading of an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportBand {
    StrongAlignment,
    ModerateSupport,
    MixedFeedback,
    SignificantConcerns,
}

impl SupportBand {
    pub fn for_score(aggregate_score: f64) -> Self {
        if aggregate_score > 0.7 {
            SupportBand::StrongAlignment
        } else if aggregate_score > 0.3 {
            SupportBand::ModerateSupport
        } else if aggregate_score > -0.3 {
            SupportBand::MixedFeedback
        } else {
            SupportBand::SignificantConcerns
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            SupportBand::StrongAlignment => "Strong policy alignment across stakeholders.",
            SupportBand::ModerateSupport => "Moderate support with some concerns.",
            SupportBand::MixedFeedback => "Mixed feedback requires further deliberation.",
            SupportBand::SignificantConcerns => "Significant concerns raised by stakeholders.",
        }
    }
}

/// Vector with the highest score; the earliest one wins ties.
pub fn strongest(vectors: &[VotingVector]) -> Option<&VotingVector> {
    vectors.iter().fold(None, |best: Option<&VotingVector>, v| match best {
        Some(b) if b.score >= v.score => Some(b),
        _ => Some(v),
    })
}

/// Vector with the lowest score; the earliest one wins ties.
pub fn weakest(vectors: &[VotingVector]) -> Option<&VotingVector> {
    vectors.iter().fold(None, |worst: Option<&VotingVector>, v| match worst {
        Some(w) if w.score <= v.score => Some(w),
        _ => Some(v),
    })
}

/// Formats a vector score, keeping one decimal on whole numbers (`1.0`, not `1`).
fn fmt_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

/// Builds the deterministic explanation text for an aggregation.
pub fn explain(
    policy_id: &str,
    vectors: &[VotingVector],
    aggregate_score: f64,
    consensus: f64,
) -> String {
    let mut text = format!(
        "Policy {} analyzed across {} dimensions. ",
        policy_id,
        vectors.len()
    );

    if let Some(top) = strongest(vectors) {
        text.push_str(&format!(
            "Strongest support: {} (score: {}). ",
            top.name,
            fmt_score(top.score)
        ));
    }
    if let Some(bottom) = weakest(vectors) {
        text.push_str(&format!(
            "Weakest area: {} (score: {}). ",
            bottom.name,
            fmt_score(bottom.score)
        ));
    }

    text.push_str(&format!(
        "Overall consensus level: {:.0}% with aggregate score of {:.2} on scale -1 to +1. ",
        consensus * 100.0,
        aggregate_score
    ));
    text.push_str(SupportBand::for_score(aggregate_score).sentence());
    text.push_str(" Recommendation based on multi-vector analysis and stakeholder weights.");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds_are_exclusive() {
        assert_eq!(SupportBand::for_score(0.71), SupportBand::StrongAlignment);
        assert_eq!(SupportBand::for_score(0.7), SupportBand::ModerateSupport);
        assert_eq!(SupportBand::for_score(0.3), SupportBand::MixedFeedback);
        assert_eq!(SupportBand::for_score(-0.3), SupportBand::SignificantConcerns);
        assert_eq!(SupportBand::for_score(-0.29), SupportBand::MixedFeedback);
    }

    #[test]
    fn ties_resolve_to_first_occurrence() {
        let vectors = vec![
            VotingVector::new("first_high", 0.8),
            VotingVector::new("low", -0.2),
            VotingVector::new("second_high", 0.8),
            VotingVector::new("second_low", -0.2),
        ];
        assert_eq!(strongest(&vectors).unwrap().name, "first_high");
        assert_eq!(weakest(&vectors).unwrap().name, "low");
    }

    #[test]
    fn no_vectors_yields_no_extremes() {
        assert!(strongest(&[]).is_none());
        assert!(weakest(&[]).is_none());
    }

    #[test]
    fn explanation_follows_template() {
        let vectors = vec![
            VotingVector::new("environmental_impact", 0.9),
            VotingVector::new("health_benefit", 0.5),
        ];
        let text = explain("city-eco-001", &vectors, 0.7, 0.859);
        assert_eq!(
            text,
            "Policy city-eco-001 analyzed across 2 dimensions. \
             Strongest support: environmental_impact (score: 0.9). \
             Weakest area: health_benefit (score: 0.5). \
             Overall consensus level: 86% with aggregate score of 0.70 on scale -1 to +1. \
             Moderate support with some concerns. \
             Recommendation based on multi-vector analysis and stakeholder weights."
        );
    }

    #[test]
    fn whole_number_scores_keep_one_decimal() {
        let vectors = vec![
            VotingVector::new("environmental_impact", 1.0),
            VotingVector::new("cost", -1.0),
            VotingVector::new("timeline", 0.0),
        ];
        let text = explain("p-001", &vectors, 0.0, 1.0);
        assert!(text.contains("Strongest support: environmental_impact (score: 1.0)."));
        assert!(text.contains("Weakest area: cost (score: -1.0)."));
    }

    #[test]
    fn fractional_scores_print_shortest_form() {
        assert_eq!(fmt_score(0.85), "0.85");
        assert_eq!(fmt_score(-0.4), "-0.4");
        assert_eq!(fmt_score(0.0), "0.0");
    }
}
