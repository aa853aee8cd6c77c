//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Static intervention catalog: reduction fractions and display metadata."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
//! The catalog is the single source of truth for intervention effects. Both the
//! calculator and every display string (impact labels, AQI badges) read from it.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::errors::CatalogError;

/// The fixed set of interventions the simulator knows about.
///
/// Declaration order is catalog order and drives iteration, serialisation and
/// set ordering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum InterventionKey {
    // Traffic & Transport
    DedicatedBusLanes,
    BikeWalkingInfrastructure,
    SmartTrafficSignals,
    VehicleRestrictions,
    PublicTransportBoost,
    EvChargingIncentives,
    // Urban Design & Environment
    TreeCanopyGreenBuffers,
    LowEmissionZone,
    DustControlMeasures,
    StreetTrees,
    GreenWalls,
    PermeablePavement,
    // Policy & Quick Fixes
    BanOpenBurning,
    ConstructionDustControl,
    WasteManagement,
    IndustrialEmissionControls,
    VehicleEmissionTesting,
    PublicAwareness,
}

impl InterventionKey {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> impl Iterator<Item = InterventionKey> {
        InterventionKey::iter()
    }
}

impl std::fmt::Display for InterventionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    TrafficTransport,
    UrbanDesignEnvironment,
    PolicyQuickFixes,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::TrafficTransport => "Traffic & Transport",
            Category::UrbanDesignEnvironment => "Urban Design & Environment",
            Category::PolicyQuickFixes => "Policy & Quick Fixes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative reduction range quoted on the intervention card, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRange {
    pub min_percent: u8,
    pub max_percent: u8,
}

impl ImpactRange {
    pub const fn new(min_percent: u8, max_percent: u8) -> Self {
        Self {
            min_percent,
            max_percent,
        }
    }

    pub fn label(&self) -> String {
        if self.min_percent == self.max_percent {
            format!("{}% AQI reduction", self.min_percent)
        } else {
            format!(
                "{}-{}% AQI reduction",
                self.min_percent, self.max_percent
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    pub key: InterventionKey,
    pub category: Category,
    pub label: String,
    pub description: String,
    pub impact: ImpactRange,
    /// Fraction of the current AQI removed when adopted alone.
    pub reduction_fraction: f64,
}

impl Intervention {
    pub fn new(
        key: InterventionKey,
        category: Category,
        label: impl Into<String>,
        description: impl Into<String>,
        impact: ImpactRange,
        reduction_fraction: f64,
    ) -> Self {
        Self {
            key,
            category,
            label: label.into(),
            description: description.into(),
            impact,
            reduction_fraction,
        }
    }

    /// AQI points this intervention removes on its own, rounded for the card badge.
    pub fn aqi_badge(&self, aqi: f64) -> i64 {
        (aqi * self.reduction_fraction).round() as i64
    }

    pub fn impact_label(&self) -> String {
        self.impact.label()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let fraction = self.reduction_fraction;
        if !(fraction.is_finite() && fraction > 0.0 && fraction < 1.0) {
            return Err(CatalogError::FractionOutOfRange {
                key: self.key,
                fraction,
            });
        }
        if self.impact.min_percent > self.impact.max_percent {
            return Err(CatalogError::InvalidImpactRange {
                key: self.key,
                min: self.impact.min_percent,
                max: self.impact.max_percent,
            });
        }
        Ok(())
    }
}

static STANDARD: Lazy<InterventionCatalog> = Lazy::new(|| InterventionCatalog {
    entries: standard_entries()
        .into_iter()
        .map(|entry| (entry.key, entry))
        .collect(),
});

/// Read-only mapping from intervention key to effect and display metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterventionCatalog {
    entries: IndexMap<InterventionKey, Intervention>,
}

impl InterventionCatalog {
    /// The process-wide catalog shipped with the simulator.
    pub fn standard() -> &'static InterventionCatalog {
        &STANDARD
    }

    /// Build a custom catalog, rejecting out-of-range fractions and duplicates.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Intervention>,
    {
        let mut map = IndexMap::new();
        for entry in entries {
            entry.validate()?;
            if map.contains_key(&entry.key) {
                return Err(CatalogError::DuplicateKey(entry.key));
            }
            map.insert(entry.key, entry);
        }
        Ok(Self { entries: map })
    }

    pub fn get(&self, key: InterventionKey) -> Option<&Intervention> {
        self.entries.get(&key)
    }

    /// Reduction fraction for `key`; keys missing from the catalog have no effect.
    pub fn fraction(&self, key: InterventionKey) -> f64 {
        self.get(key)
            .map(|entry| entry.reduction_fraction)
            .unwrap_or(0.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Intervention> {
        self.entries.values()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Intervention> {
        self.entries
            .values()
            .filter(move |entry| entry.category == category)
    }

    /// Categories present in the catalog, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for entry in self.entries.values() {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every known intervention key has an entry.
    pub fn is_complete(&self) -> bool {
        self.entries.len() == InterventionKey::COUNT
            && InterventionKey::iter().all(|key| self.entries.contains_key(&key))
    }
}

fn standard_entries() -> Vec<Intervention> {
    use Category::*;
    use InterventionKey::*;

    vec![
        Intervention::new(
            DedicatedBusLanes,
            TrafficTransport,
            "Dedicated Bus Lanes",
            "Priority lanes for buses reduce congestion + emissions",
            ImpactRange::new(10, 15),
            0.12,
        ),
        Intervention::new(
            BikeWalkingInfrastructure,
            TrafficTransport,
            "Bike & Walking Infrastructure",
            "Protected bike lanes, wider footpaths",
            ImpactRange::new(5, 10),
            0.08,
        ),
        Intervention::new(
            SmartTrafficSignals,
            TrafficTransport,
            "Smart Traffic Signals",
            "AI-based adaptive signal timing",
            ImpactRange::new(7, 12),
            0.10,
        ),
        Intervention::new(
            VehicleRestrictions,
            TrafficTransport,
            "Vehicle Restrictions",
            "Odd-even license plate days or no-entry zones",
            ImpactRange::new(10, 20),
            0.15,
        ),
        Intervention::new(
            PublicTransportBoost,
            TrafficTransport,
            "Public Transport Boost",
            "More buses/metro frequency, lower fares",
            ImpactRange::new(10, 15),
            0.12,
        ),
        Intervention::new(
            EvChargingIncentives,
            TrafficTransport,
            "EV Charging & Incentives",
            "Support shift from petrol/diesel to EVs",
            ImpactRange::new(10, 20),
            0.15,
        ),
        Intervention::new(
            TreeCanopyGreenBuffers,
            UrbanDesignEnvironment,
            "Tree Canopy & Green Buffers",
            "Street trees, mini forests, green walls",
            ImpactRange::new(5, 8),
            0.08,
        ),
        Intervention::new(
            LowEmissionZone,
            UrbanDesignEnvironment,
            "Low-Emission Zone (LEZ)",
            "Only EVs, CNG buses, low-emission cars allowed",
            ImpactRange::new(15, 20),
            0.18,
        ),
        Intervention::new(
            DustControlMeasures,
            UrbanDesignEnvironment,
            "Dust Control Measures",
            "Spraying roads, covering construction sites",
            ImpactRange::new(10, 10),
            0.10,
        ),
        Intervention::new(
            StreetTrees,
            UrbanDesignEnvironment,
            "Street Trees",
            "Strategic tree planting along roads",
            ImpactRange::new(5, 6),
            0.06,
        ),
        Intervention::new(
            GreenWalls,
            UrbanDesignEnvironment,
            "Green Walls",
            "Vertical vegetation systems on buildings",
            ImpactRange::new(4, 5),
            0.05,
        ),
        Intervention::new(
            PermeablePavement,
            UrbanDesignEnvironment,
            "Permeable Pavement",
            "Water-absorbing surfaces reduce dust",
            ImpactRange::new(3, 4),
            0.04,
        ),
        Intervention::new(
            BanOpenBurning,
            PolicyQuickFixes,
            "Ban Open Burning",
            "Prevent trash/leaf burning - huge PM2.5 impact",
            ImpactRange::new(15, 25),
            0.20,
        ),
        Intervention::new(
            ConstructionDustControl,
            PolicyQuickFixes,
            "Construction Dust Control",
            "Mandatory dust suppression at construction sites",
            ImpactRange::new(10, 12),
            0.12,
        ),
        Intervention::new(
            WasteManagement,
            PolicyQuickFixes,
            "Waste Management",
            "Proper waste collection and disposal systems",
            ImpactRange::new(6, 8),
            0.08,
        ),
        Intervention::new(
            IndustrialEmissionControls,
            PolicyQuickFixes,
            "Industrial Emission Controls",
            "Strict emission standards for factories",
            ImpactRange::new(18, 22),
            0.22,
        ),
        Intervention::new(
            VehicleEmissionTesting,
            PolicyQuickFixes,
            "Vehicle Emission Testing",
            "Regular testing and maintenance requirements",
            ImpactRange::new(8, 10),
            0.10,
        ),
        Intervention::new(
            PublicAwareness,
            PolicyQuickFixes,
            "Public Awareness",
            "Education campaigns on air quality",
            ImpactRange::new(3, 5),
            0.05,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn standard_catalog_is_complete_and_valid() {
        let catalog = InterventionCatalog::standard();
        assert!(catalog.is_complete());
        assert_eq!(catalog.len(), 18);
        let rebuilt = InterventionCatalog::from_entries(standard_entries()).unwrap();
        assert_eq!(&rebuilt, catalog);
        for category in Category::iter() {
            assert_eq!(catalog.by_category(category).count(), 6);
        }
        assert_eq!(catalog.categories(), Category::iter().collect::<Vec<_>>());
    }

    #[test]
    fn keys_parse_from_camel_case() {
        assert_eq!(
            InterventionKey::from_str("banOpenBurning").unwrap(),
            InterventionKey::BanOpenBurning
        );
        assert_eq!(
            InterventionKey::EvChargingIncentives.as_str(),
            "evChargingIncentives"
        );
        assert!(InterventionKey::from_str("teleportCars").is_err());
        assert_eq!(
            Category::from_str("policy-quick-fixes").unwrap(),
            Category::PolicyQuickFixes
        );
    }

    #[test]
    fn display_text_derives_from_entry() {
        let catalog = InterventionCatalog::standard();
        let lez = catalog.get(InterventionKey::LowEmissionZone).unwrap();
        assert_eq!(lez.impact_label(), "15-20% AQI reduction");
        assert_eq!(lez.aqi_badge(280.0), 50);
        let dust = catalog.get(InterventionKey::DustControlMeasures).unwrap();
        assert_eq!(dust.impact_label(), "10% AQI reduction");
    }

    #[test]
    fn custom_catalog_rejects_bad_entries() {
        let entry = |key, fraction| {
            Intervention::new(
                key,
                Category::PolicyQuickFixes,
                "x",
                "y",
                ImpactRange::new(1, 2),
                fraction,
            )
        };

        let err = InterventionCatalog::from_entries(vec![entry(
            InterventionKey::PublicAwareness,
            1.0,
        )])
        .unwrap_err();
        assert!(matches!(err, CatalogError::FractionOutOfRange { .. }));

        let err = InterventionCatalog::from_entries(vec![
            entry(InterventionKey::PublicAwareness, 0.05),
            entry(InterventionKey::PublicAwareness, 0.06),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateKey(InterventionKey::PublicAwareness)
        );

        let mut inverted = entry(InterventionKey::GreenWalls, 0.05);
        inverted.impact = ImpactRange::new(9, 4);
        assert!(matches!(
            InterventionCatalog::from_entries(vec![inverted]),
            Err(CatalogError::InvalidImpactRange { .. })
        ));
    }

    #[test]
    fn missing_key_has_zero_fraction() {
        let partial = InterventionCatalog::from_entries(vec![Intervention::new(
            InterventionKey::GreenWalls,
            Category::UrbanDesignEnvironment,
            "Green Walls",
            "Vertical vegetation systems on buildings",
            ImpactRange::new(4, 5),
            0.05,
        )])
        .unwrap();
        assert!(!partial.is_complete());
        assert_eq!(partial.fraction(InterventionKey::BanOpenBurning), 0.0);
        assert_eq!(partial.fraction(InterventionKey::GreenWalls), 0.05);
    }
}
