//! Job categories and quadrants.
//!
//! These are the only definitions of the two classification axes used on
//! an opportunity. Anything that refers to a "category" or "quadrant" uses
//! these enums, never a free string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Primary Job-to-be-Done category of an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    ClientAcquisition,
    Positioning,
    PricingStrategy,
    TeamEfficiency,
    ServiceExpansion,
    ClientRetention,
    AgencyScaling,
    ReportingSystems,
    Other,
}

impl JobCategory {
    /// Returns all categories in display order.
    pub fn all() -> &'static [JobCategory] {
        &[
            JobCategory::ClientAcquisition,
            JobCategory::Positioning,
            JobCategory::PricingStrategy,
            JobCategory::TeamEfficiency,
            JobCategory::ServiceExpansion,
            JobCategory::ClientRetention,
            JobCategory::AgencyScaling,
            JobCategory::ReportingSystems,
            JobCategory::Other,
        ]
    }

    /// Returns the stable key used by record stores.
    pub fn key(&self) -> &'static str {
        match self {
            JobCategory::ClientAcquisition => "client_acquisition",
            JobCategory::Positioning => "positioning",
            JobCategory::PricingStrategy => "pricing_strategy",
            JobCategory::TeamEfficiency => "team_efficiency",
            JobCategory::ServiceExpansion => "service_expansion",
            JobCategory::ClientRetention => "client_retention",
            JobCategory::AgencyScaling => "agency_scaling",
            JobCategory::ReportingSystems => "reporting_systems",
            JobCategory::Other => "other",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::ClientAcquisition => "Client Acquisition/Lead Generation",
            JobCategory::Positioning => "Agency Positioning/Differentiation",
            JobCategory::PricingStrategy => "Pricing Strategy/Optimization",
            JobCategory::TeamEfficiency => "Team Efficiency/Workflows",
            JobCategory::ServiceExpansion => "Service Expansion/Development",
            JobCategory::ClientRetention => "Client Retention/Satisfaction",
            JobCategory::AgencyScaling => "Agency Scaling/Growth",
            JobCategory::ReportingSystems => "Reporting/Analytics Systems",
            JobCategory::Other => "Other",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for JobCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        JobCategory::all()
            .iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("job_category", format!("unknown category '{}'", key))
            })
    }
}

/// Classification of the primary job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobQuadrant {
    Functional,
    Emotional,
    Social,
    Strategic,
    Other,
}

impl JobQuadrant {
    /// Returns all quadrants in display order.
    pub fn all() -> &'static [JobQuadrant] {
        &[
            JobQuadrant::Functional,
            JobQuadrant::Emotional,
            JobQuadrant::Social,
            JobQuadrant::Strategic,
            JobQuadrant::Other,
        ]
    }

    /// Returns the stable key used by record stores.
    pub fn key(&self) -> &'static str {
        match self {
            JobQuadrant::Functional => "functional",
            JobQuadrant::Emotional => "emotional",
            JobQuadrant::Social => "social",
            JobQuadrant::Strategic => "strategic",
            JobQuadrant::Other => "other",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            JobQuadrant::Functional => "Functional Job",
            JobQuadrant::Emotional => "Emotional Job",
            JobQuadrant::Social => "Social Job",
            JobQuadrant::Strategic => "Strategic Job",
            JobQuadrant::Other => "Other",
        }
    }
}

impl fmt::Display for JobQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for JobQuadrant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        JobQuadrant::all()
            .iter()
            .find(|q| q.key().eq_ignore_ascii_case(key))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("job_quadrant", format!("unknown quadrant '{}'", key))
            })
    }
}
