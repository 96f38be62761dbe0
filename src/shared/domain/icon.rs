use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use super::text::UnknownVariant;

/// Icons the public site knows how to render next to skills and technologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum Icon {
    #[default]
    Code,
    Server,
    Database,
    Smartphone,
    Cloud,
    Wrench,
    TestTube,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Code => "Code",
            Icon::Server => "Server",
            Icon::Database => "Database",
            Icon::Smartphone => "Smartphone",
            Icon::Cloud => "Cloud",
            Icon::Wrench => "Wrench",
            Icon::TestTube => "TestTube",
        }
    }
}

impl FromStr for Icon {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Code" => Ok(Icon::Code),
            "Server" => Ok(Icon::Server),
            "Database" => Ok(Icon::Database),
            "Smartphone" => Ok(Icon::Smartphone),
            "Cloud" => Ok(Icon::Cloud),
            "Wrench" => Ok(Icon::Wrench),
            "TestTube" => Ok(Icon::TestTube),
            other => Err(UnknownVariant::new("icon", other)),
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_storage_string() {
        for icon in [
            Icon::Code,
            Icon::Server,
            Icon::Database,
            Icon::Smartphone,
            Icon::Cloud,
            Icon::Wrench,
            Icon::TestTube,
        ] {
            assert_eq!(icon.as_str().parse::<Icon>().unwrap(), icon);
        }
    }

    #[test]
    fn rejects_unknown_icon() {
        let err = "Rocket".parse::<Icon>().unwrap_err();
        assert_eq!(err.to_string(), "unknown icon: Rocket");
    }

    #[test]
    fn deserializes_from_source_spelling() {
        let icon: Icon = serde_json::from_str("\"Smartphone\"").unwrap();
        assert_eq!(icon, Icon::Smartphone);
        assert!(serde_json::from_str::<Icon>("\"smartphone\"").is_err());
    }
}
