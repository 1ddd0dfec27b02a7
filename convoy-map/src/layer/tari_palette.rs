//! fixed ordinal to color mapping for TARI risk scores.
use convoy_core::model::TariScore;

pub const TARI_1: &str = "#10b981";
pub const TARI_2: &str = "#eab308";
pub const TARI_3: &str = "#f97316";
pub const TARI_4: &str = "#ef4444";
pub const TARI_5: &str = "#7f1d1d";

pub fn color_for(score: TariScore) -> &'static str {
    match score.value() {
        1 => TARI_1,
        2 => TARI_2,
        3 => TARI_3,
        4 => TARI_4,
        _ => TARI_5,
    }
}

#[cfg(test)]
mod test {
    use convoy_core::model::TariScore;

    use super::*;

    #[test]
    fn test_every_score_has_a_distinct_color() {
        let colors = (TariScore::MIN..=TariScore::MAX)
            .map(|v| color_for(TariScore::try_from(v).expect("test failed")))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_high_risk_colors() {
        let four = TariScore::try_from(4).expect("test failed");
        assert_eq!(color_for(four), TARI_4);
    }
}
