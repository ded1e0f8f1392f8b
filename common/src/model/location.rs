use serde::{Deserialize, Serialize};

/// A GISAID-style collection location as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NamedLocation {
    /// Display name joined as `region/country/division/location`.
    ///
    /// Absent or blank parts are skipped. When no part is set the explicit
    /// `name` is used, if any.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [&self.region, &self.country, &self.division, &self.location]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            return self
                .name
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string();
        }
        parts.join("/")
    }
}

/// Collection location in either of the two shapes the client sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationValue {
    Name(String),
    Structured(NamedLocation),
}

impl LocationValue {
    pub fn display_name(&self) -> String {
        match self {
            LocationValue::Name(name) => name.clone(),
            LocationValue::Structured(location) => location.display_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alameda() -> NamedLocation {
        NamedLocation {
            id: Some(42),
            region: Some("North America".to_string()),
            country: Some("USA".to_string()),
            division: Some("California".to_string()),
            location: Some("Alameda County".to_string()),
            name: None,
        }
    }

    #[test]
    fn test_display_name_joins_all_parts() {
        assert_eq!(
            alameda().display_name(),
            "North America/USA/California/Alameda County"
        );
    }

    #[test]
    fn test_display_name_skips_absent_and_blank_parts() {
        let location = NamedLocation {
            division: None,
            location: Some("  ".to_string()),
            ..alameda()
        };
        assert_eq!(location.display_name(), "North America/USA");
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        let location = NamedLocation {
            name: Some("Somewhere".to_string()),
            ..Default::default()
        };
        assert_eq!(location.display_name(), "Somewhere");
        assert_eq!(NamedLocation::default().display_name(), "");
    }
}
