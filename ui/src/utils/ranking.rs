use payloads::responses::Bidder;

/// Placement badge shown next to a bidder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    First,
    Second,
    Third,
    /// 1-based position from fourth place on.
    Other(usize),
}

impl Rank {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::First,
            1 => Self::Second,
            2 => Self::Third,
            n => Self::Other(n + 1),
        }
    }

    /// Every position past third uses a plain "th" suffix.
    pub fn label(&self) -> String {
        match self {
            Self::First => "1st".to_string(),
            Self::Second => "2nd".to_string(),
            Self::Third => "3rd".to_string(),
            Self::Other(position) => format!("{position}th"),
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Self::First => "text-green-600",
            Self::Second => "text-blue-600",
            Self::Third => "text-yellow-600",
            Self::Other(_) => "text-gray-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedBidder {
    pub rank: Rank,
    pub bidder: Bidder,
}

/// Assign ranks by list position.
///
/// The backend sends bidders highest amount first. When every entry carries
/// an amount and that order doesn't hold, the list is re-sorted (stable, so
/// equal amounts keep their backend order) before ranking.
pub fn standings(bidders: &[Bidder]) -> Vec<RankedBidder> {
    let mut ordered = bidders.to_vec();

    let amounts: Option<Vec<_>> = ordered.iter().map(|b| b.amount).collect();
    if let Some(amounts) = amounts
        && amounts.windows(2).any(|pair| pair[0] < pair[1])
    {
        tracing::warn!(
            "Bidders arrived out of order; sorting {} entries by amount",
            ordered.len()
        );
        ordered.sort_by(|a, b| b.amount.cmp(&a.amount));
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, bidder)| RankedBidder {
            rank: Rank::from_index(index),
            bidder,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{bidder, bidder_with_amount};

    fn labels(ranked: &[RankedBidder]) -> Vec<(String, String)> {
        ranked
            .iter()
            .map(|r| (r.bidder.username.clone(), r.rank.label()))
            .collect()
    }

    #[test]
    fn ranks_follow_list_position() {
        let bidders =
            ["A", "B", "C", "D"].map(bidder).into_iter().collect::<Vec<_>>();

        let ranked = standings(&bidders);

        assert_eq!(
            labels(&ranked),
            [
                ("A".to_string(), "1st".to_string()),
                ("B".to_string(), "2nd".to_string()),
                ("C".to_string(), "3rd".to_string()),
                ("D".to_string(), "4th".to_string()),
            ]
        );
    }

    #[test]
    fn later_positions_use_th() {
        assert_eq!(Rank::from_index(10).label(), "11th");
        assert_eq!(Rank::from_index(21).label(), "22th");
        assert_eq!(Rank::from_index(3), Rank::Other(4));
    }

    #[test]
    fn badge_colours() {
        assert_eq!(Rank::First.text_class(), "text-green-600");
        assert_eq!(Rank::Second.text_class(), "text-blue-600");
        assert_eq!(Rank::Third.text_class(), "text-yellow-600");
        assert_eq!(Rank::Other(7).text_class(), "text-gray-600");
    }

    #[test]
    fn unsorted_amounts_are_reordered() {
        let bidders = vec![
            bidder_with_amount("low", 100),
            bidder_with_amount("high", 900),
            bidder_with_amount("mid", 500),
        ];

        let ranked = standings(&bidders);

        let names: Vec<_> =
            ranked.iter().map(|r| r.bidder.username.as_str()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
        assert_eq!(ranked[0].rank, Rank::First);
    }

    #[test]
    fn ties_keep_backend_order() {
        let bidders = vec![
            bidder_with_amount("first", 300),
            bidder_with_amount("second", 300),
            bidder_with_amount("third", 200),
        ];

        let names: Vec<_> = standings(&bidders)
            .into_iter()
            .map(|r| r.bidder.username)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn missing_amounts_trust_backend_order() {
        let bidders = vec![
            bidder_with_amount("x", 100),
            bidder("y"),
            bidder_with_amount("z", 900),
        ];

        let names: Vec<_> = standings(&bidders)
            .into_iter()
            .map(|r| r.bidder.username)
            .collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn empty_list_has_no_standings() {
        assert!(standings(&[]).is_empty());
    }
}
