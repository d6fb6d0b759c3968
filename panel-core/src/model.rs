use chrono::NaiveDateTime;

/// One complete set of current conditions, built fresh on every successful
/// fetch. A snapshot wholly replaces the previous one; no history is kept.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub name: String,
    /// Administrative region, when the provider reports one. An empty string
    /// from the API is normalized to `None` before construction.
    pub region: Option<String>,
    pub temperature_c: f64,
    pub condition: String,
    /// Icon reference as sent by the provider, possibly protocol-relative.
    pub icon: String,
    /// The server's local-time string, verbatim.
    pub localtime_raw: String,
    /// The same instant parsed as a naive local date/time. No timezone
    /// conversion is applied.
    pub localtime: NaiveDateTime,
    pub is_day: bool,
}

impl Snapshot {
    /// `"<name>, <region>"` when a region is present, else `"<name>"`.
    pub fn display_name(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}", self.name, region),
            None => self.name.clone(),
        }
    }

    /// Temperature to one decimal place with a degree-Celsius suffix.
    pub fn temperature_text(&self) -> String {
        format!("{:.1} °C", self.temperature_c)
    }

    /// Icon URL with protocol-relative references pinned to https.
    pub fn icon_url(&self) -> String {
        if self.icon.starts_with("//") {
            format!("https:{}", self.icon)
        } else {
            self.icon.clone()
        }
    }

    /// Text description of the icon, derived from the condition text.
    pub fn icon_alt(&self) -> String {
        format!("{} icon", self.condition)
    }
}
