//! Profile property accumulation for the in-session helper.

/// Separator understood by the `konsoleprofile` helper.
const PROPERTY_SEPARATOR: &str = ";";

/// Ordered list of `key=value` customizations for the new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSettings {
    properties: Vec<String>,
}

impl ProfileSettings {
    /// Validate and collect raw `-p` values; empty input means no customization.
    pub fn parse(raw: &[String]) -> Result<Self, String> {
        for entry in raw {
            match entry.split_once('=') {
                Some((key, _)) if !key.is_empty() => {}
                _ => return Err(format!("invalid profile property `{entry}`: expected PROP=VAL")),
            }
        }
        Ok(Self {
            properties: raw.to_vec(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Join the properties the way the in-session helper expects them.
    pub fn render(&self) -> String {
        self.properties.join(PROPERTY_SEPARATOR)
    }
}
