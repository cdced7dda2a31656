//! Per-member scalar time series.

/// One member's scalar time series, tagged with the member id and a series
/// name (`x`/`y` for correlation bookkeeping, or a variable name such as
/// `FG_ALT_CO2_AW` for persisted area-weighted residuals).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarSeries {
    member: String,
    name: String,
    values: Vec<f64>,
}

impl ScalarSeries {
    /// Creates a new `ScalarSeries`.
    pub fn new(
        member: impl Into<String>,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            member: member.into(),
            name: name.into(),
            values,
        }
    }

    /// Returns the ensemble-member identifier.
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Returns the series name tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of time steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no time steps.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy of this series under a different name tag.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            member: self.member.clone(),
            name: name.into(),
            values: self.values.clone(),
        }
    }
}
