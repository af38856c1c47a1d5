//! Industry catalog with value multipliers and industry insight content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry the assessed organization operates in.
///
/// Keys that are absent or unknown resolve to [`Industry::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Industry {
    FinancialServices,
    Healthcare,
    Manufacturing,
    Retail,
    PublicSector,
    Energy,
    #[default]
    General,
}

impl Industry {
    /// All industries in selector order.
    pub const ALL: [Industry; 7] = [
        Industry::FinancialServices,
        Industry::Healthcare,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::PublicSector,
        Industry::Energy,
        Industry::General,
    ];

    /// Resolves a selector key, falling back to `General`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "financial-services" => Industry::FinancialServices,
            "healthcare" => Industry::Healthcare,
            "manufacturing" => Industry::Manufacturing,
            "retail" => Industry::Retail,
            "public-sector" => Industry::PublicSector,
            "energy" => Industry::Energy,
            _ => Industry::General,
        }
    }

    /// Returns the selector key.
    pub fn key(&self) -> &'static str {
        match self {
            Industry::FinancialServices => "financial-services",
            Industry::Healthcare => "healthcare",
            Industry::Manufacturing => "manufacturing",
            Industry::Retail => "retail",
            Industry::PublicSector => "public-sector",
            Industry::Energy => "energy",
            Industry::General => "general",
        }
    }

    /// Returns the value multipliers for this industry.
    pub fn multipliers(&self) -> IndustryMultipliers {
        match self {
            Industry::FinancialServices => IndustryMultipliers::new(1.2, 0.9, 1.1),
            Industry::Healthcare => IndustryMultipliers::new(1.15, 1.1, 1.25),
            Industry::Manufacturing => IndustryMultipliers::new(1.1, 1.0, 1.2),
            Industry::Retail => IndustryMultipliers::new(1.25, 0.9, 1.15),
            Industry::PublicSector => IndustryMultipliers::new(0.9, 1.3, 1.05),
            Industry::Energy => IndustryMultipliers::new(1.15, 1.1, 1.1),
            Industry::General => IndustryMultipliers::BASELINE,
        }
    }

    /// Returns the insight content shown in the industry selector and report.
    pub fn profile(&self) -> IndustryProfile {
        match self {
            Industry::FinancialServices => IndustryProfile {
                industry: *self,
                name: "Financial Services",
                description: "Banking, insurance, investment management, and fintech companies.",
                key_benefits: [
                    "Compliance oversight and governance",
                    "Fraud detection through advanced analytics",
                    "Real-time transaction data processing",
                    "Customer 360 and personalization",
                ],
                considerations: [
                    "Strict regulatory compliance and data sovereignty",
                    "Transaction processing performance",
                    "Risk management integration",
                    "Legacy system integration",
                ],
            },
            Industry::Healthcare => IndustryProfile {
                industry: *self,
                name: "Healthcare",
                description: "Hospitals, clinics, medical research, pharmaceutical, and health insurance organizations.",
                key_benefits: [
                    "Integration of clinical and operational data",
                    "Protected health information (PHI) security",
                    "Patient population analytics",
                    "Medical research data warehousing",
                ],
                considerations: [
                    "HIPAA compliance and patient privacy",
                    "Integration with healthcare systems (Epic, Cerner)",
                    "Clinical data taxonomies and terminologies",
                    "Longitudinal patient data analytics",
                ],
            },
            Industry::Manufacturing => IndustryProfile {
                industry: *self,
                name: "Manufacturing",
                description: "Industrial manufacturing, equipment, consumer goods, and production companies.",
                key_benefits: [
                    "IoT and sensor data processing",
                    "Predictive maintenance analytics",
                    "Supply chain optimization",
                    "Quality control through data insights",
                ],
                considerations: [
                    "OT/IT integration challenges",
                    "Real-time monitoring requirements",
                    "Machine learning for predictive maintenance",
                    "Geographically distributed facilities",
                ],
            },
            Industry::Retail => IndustryProfile {
                industry: *self,
                name: "Retail",
                description: "Retail chains, e-commerce, consumer products, and distribution companies.",
                key_benefits: [
                    "Customer behavior analysis",
                    "Inventory and supply chain optimization",
                    "Personalized marketing",
                    "Omnichannel customer experience",
                ],
                considerations: [
                    "Point of sale (POS) integration",
                    "Seasonal data variability",
                    "Customer journey analytics",
                    "Multi-channel data integration",
                ],
            },
            Industry::PublicSector => IndustryProfile {
                industry: *self,
                name: "Public Sector",
                description: "Government agencies, municipalities, educational institutions, and non-profits.",
                key_benefits: [
                    "Citizen service optimization",
                    "Transparent reporting and analytics",
                    "Cross-agency data sharing",
                    "Resource allocation optimization",
                ],
                considerations: [
                    "Data sovereignty and security classification",
                    "Compliance with government standards (FedRAMP)",
                    "Legacy system integration",
                    "Budget constraints and procurement cycles",
                ],
            },
            Industry::Energy => IndustryProfile {
                industry: *self,
                name: "Energy & Utilities",
                description: "Oil & gas, electric utilities, renewable energy, and energy service companies.",
                key_benefits: [
                    "Smart grid data analytics",
                    "Energy consumption forecasting",
                    "Asset performance optimization",
                    "Regulatory compliance reporting",
                ],
                considerations: [
                    "SCADA system integration",
                    "IoT sensor data volume and velocity",
                    "Geographical distribution of assets",
                    "Energy market compliance requirements",
                ],
            },
            Industry::General => IndustryProfile {
                industry: *self,
                name: "General Business",
                description: "Cross-industry standard assessment for organizations without specific industry requirements.",
                key_benefits: [
                    "Unified data analytics platform",
                    "Business intelligence integration",
                    "Collaborative data environment",
                    "Reduced total cost of ownership",
                ],
                considerations: [
                    "Standard data integration patterns",
                    "Business process optimization",
                    "General compliance requirements",
                    "IT alignment with business objectives",
                ],
            },
        }
    }
}

impl From<String> for Industry {
    fn from(key: String) -> Self {
        Industry::from_key(&key)
    }
}

impl From<Option<String>> for Industry {
    fn from(key: Option<String>) -> Self {
        key.map(Industry::from).unwrap_or_default()
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        industry.key().to_string()
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-industry scaling applied to value metric base calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryMultipliers {
    pub cost_savings: f64,
    pub time_to_value: f64,
    pub productivity: f64,
}

impl IndustryMultipliers {
    /// Neutral multipliers used for general business.
    pub const BASELINE: Self = Self {
        cost_savings: 1.0,
        time_to_value: 1.0,
        productivity: 1.0,
    };

    /// Creates a multiplier triple.
    pub const fn new(cost_savings: f64, time_to_value: f64, productivity: f64) -> Self {
        Self {
            cost_savings,
            time_to_value,
            productivity,
        }
    }
}

impl Default for IndustryMultipliers {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Static industry insight content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryProfile {
    pub industry: Industry,
    pub name: &'static str,
    pub description: &'static str,
    pub key_benefits: [&'static str; 4],
    pub considerations: [&'static str; 4],
}
