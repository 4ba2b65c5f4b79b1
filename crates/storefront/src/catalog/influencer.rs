//! Influencer tier programme.

use inkzaar_core::Rupees;

/// Loyalty tier earned from collaboration points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Self; 3] = [Self::Bronze, Self::Silver, Self::Gold];

    /// The tier a points balance falls in.
    #[must_use]
    pub const fn for_points(points: u32) -> Self {
        match points {
            0..500 => Self::Bronze,
            500..1500 => Self::Silver,
            _ => Self::Gold,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }

    /// Lowest points balance in this tier.
    #[must_use]
    pub const fn min_points(self) -> u32 {
        match self {
            Self::Bronze => 0,
            Self::Silver => 500,
            Self::Gold => 1500,
        }
    }

    /// Highest points balance in this tier; `None` for the open-ended top tier.
    #[must_use]
    pub const fn max_points(self) -> Option<u32> {
        match self {
            Self::Bronze => Some(499),
            Self::Silver => Some(1499),
            Self::Gold => None,
        }
    }

    /// The tier above, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => None,
        }
    }

    #[must_use]
    pub const fn benefits(self) -> &'static [&'static str] {
        match self {
            Self::Bronze => &[
                "Basic collaboration opportunities",
                "Monthly newsletters",
                "Community access",
            ],
            Self::Silver => &[
                "Priority collaboration matching",
                "Exclusive campaigns",
                "Performance analytics",
                "All Bronze benefits",
            ],
            Self::Gold => &[
                "Premium brand partnerships",
                "Higher commission rates",
                "Personal account manager",
                "All Silver benefits",
            ],
        }
    }

    /// Points range label, e.g. `"500 - 1499"` or `"1500 - ∞"`.
    #[must_use]
    pub fn range_label(self) -> String {
        match self.max_points() {
            Some(max) => format!("{} - {max}", self.min_points()),
            None => format!("{} - ∞", self.min_points()),
        }
    }
}

/// Influencer programme figures shown on the user dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfluencerStats {
    pub points: u32,
    pub collaborations: u32,
    pub earnings: Rupees,
}

impl InfluencerStats {
    #[must_use]
    pub const fn tier(&self) -> Tier {
        Tier::for_points(self.points)
    }

    /// Points needed to reach the next tier, if there is one.
    #[must_use]
    pub const fn next_tier_points(&self) -> Option<u32> {
        match self.tier().next() {
            Some(next) => Some(next.min_points()),
            None => None,
        }
    }

    /// Progress toward the next tier as a whole percentage (100 at the top tier).
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        match self.next_tier_points() {
            Some(target) if target > 0 => (self.points.saturating_mul(100) / target).min(100),
            _ => 100,
        }
    }
}

pub(super) const STATS: InfluencerStats = InfluencerStats {
    points: 250,
    collaborations: 3,
    earnings: Rupees::new(2500),
};
