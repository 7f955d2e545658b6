use std::convert::Infallible;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sales regions offered by the dashboard's region picker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Region {
    North,
    South,
    East,
    West
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    /// Value as stored in the `region` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::East => "east",
            Region::West => "west"
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West"
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            Region::North => "#2ca02c",
            Region::South => "#d62728",
            Region::East => "#ff7f0e",
            Region::West => "#9467bd"
        }
    }

    fn from_stored(value: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|region| region.as_str() == value)
    }
}

/// Which records an aggregation pass keeps.
///
/// Parsing never fails: a value that names no known region still becomes `Only`,
/// which simply matches nothing.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum RegionSelector {
    #[default]
    All,
    Only(String)
}

impl RegionSelector {
    const ALL_REGIONS: &'static str = "all";
    const ALL_COLOUR: &'static str = "#1f77b4";

    /// The picker values, in display order.
    pub fn options() -> [&'static str; 5] {
        [Self::ALL_REGIONS, "north", "south", "east", "west"]
    }

    /// Exact, case-sensitive comparison against the stored region.
    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionSelector::All => true,
            RegionSelector::Only(selected) => selected == region
        }
    }

    pub fn region(&self) -> Option<Region> {
        match self {
            RegionSelector::All => None,
            RegionSelector::Only(selected) => Region::from_stored(selected)
        }
    }

    pub fn label(&self) -> String {
        match (self, self.region()) {
            (RegionSelector::All, _) => "All Regions".to_string(),
            (_, Some(region)) => region.label().to_string(),
            (RegionSelector::Only(selected), None) => selected.clone()
        }
    }

    pub fn colour(&self) -> &'static str {
        self.region().map_or(Self::ALL_COLOUR, |region| region.colour())
    }
}

impl FromStr for RegionSelector {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value == Self::ALL_REGIONS {
            return Ok(RegionSelector::All);
        }

        Ok(RegionSelector::Only(value.to_string()))
    }
}

impl Display for RegionSelector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RegionSelector::All => write!(formatter, "{}", Self::ALL_REGIONS),
            RegionSelector::Only(selected) => write!(formatter, "{}", selected)
        }
    }
}
