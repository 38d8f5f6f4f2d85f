use std::fmt;

use chrono::NaiveDate;

use crate::mvi::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoopStatus {
    Completed,
    Pending,
    /// Soft-deleted: the record stays in history.
    Deleted,
}

impl BoopStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for BoopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed or attempted redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boop {
    pub id: String,
    pub retailer: String,
    pub date: NaiveDate,
    pub points: u32,
    pub status: BoopStatus,
    pub image: Option<String>,
}

/// The redemption in progress between a scan and its share or abandonment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentBoop {
    pub retailer: String,
    pub discount: String,
    pub images: Vec<String>,
    /// Not checked against `images`; callers pass a value from the offered set.
    pub selected_image: Option<String>,
}

/// Dashboard tab over the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryFilter {
    #[default]
    All,
    Completed,
    Pending,
    Deleted,
}

impl HistoryFilter {
    pub fn matches(&self, boop: &Boop) -> bool {
        match self {
            Self::All => true,
            Self::Completed => boop.status == BoopStatus::Completed,
            Self::Pending => boop.status == BoopStatus::Pending,
            Self::Deleted => boop.status == BoopStatus::Deleted,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "completed" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

/// Snapshot of the reward-flow store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardState {
    /// Newest first, by insertion.
    pub boops: Vec<Boop>,
    pub current_boop: Option<CurrentBoop>,
    /// Number of actions suspended at their simulated round trip.
    pub in_flight: usize,
    pub error: Option<String>,
}

impl Snapshot for RewardState {}

impl RewardState {
    /// Fresh state with the fixed demo history.
    pub fn seeded() -> Self {
        Self {
            boops: seed_history(),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn filtered(&self, filter: HistoryFilter) -> Vec<&Boop> {
        self.boops.iter().filter(|b| filter.matches(b)).collect()
    }

    pub fn find(&self, id: &str) -> Option<&Boop> {
        self.boops.iter().find(|b| b.id == id)
    }
}

fn seed_boop(
    id: &str,
    retailer: &str,
    (year, month, day): (i32, u32, u32),
    points: u32,
    status: BoopStatus,
    image: &str,
) -> Option<Boop> {
    Some(Boop {
        id: id.to_string(),
        retailer: retailer.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day)?,
        points,
        status,
        image: Some(image.to_string()),
    })
}

fn seed_history() -> Vec<Boop> {
    [
        seed_boop(
            "boop-1",
            "Nike",
            (2023, 6, 15),
            50,
            BoopStatus::Completed,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff",
        ),
        seed_boop(
            "boop-2",
            "Adidas",
            (2023, 6, 10),
            30,
            BoopStatus::Completed,
            "https://images.unsplash.com/photo-1608231387042-66d1773070a5",
        ),
        seed_boop(
            "boop-3",
            "Apple",
            (2023, 6, 5),
            100,
            BoopStatus::Pending,
            "https://images.unsplash.com/photo-1611186871348-b1ce696e52c9",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
