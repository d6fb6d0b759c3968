/// Coarse visual theme derived from the condition text and the day/night
/// flag. Exactly one theme is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Mist,
    Night,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Sunny => "sunny",
            Theme::Cloudy => "cloudy",
            Theme::Rainy => "rainy",
            Theme::Snowy => "snowy",
            Theme::Mist => "mist",
            Theme::Night => "night",
        }
    }

    pub const fn all() -> &'static [Theme] {
        &[
            Theme::Sunny,
            Theme::Cloudy,
            Theme::Rainy,
            Theme::Snowy,
            Theme::Mist,
            Theme::Night,
        ]
    }

    /// Classify a condition text. Night short-circuits: when `is_day` is
    /// false the condition text is not consulted at all. Daytime matching is
    /// case-insensitive on substrings, first match wins, and anything
    /// unrecognized falls back to `Cloudy`.
    pub fn classify(condition_text: &str, is_day: bool) -> Theme {
        if !is_day {
            return Theme::Night;
        }

        let c = condition_text.to_lowercase();

        if c.contains("sun") || c.contains("clear") {
            Theme::Sunny
        } else if c.contains("cloud") || c.contains("overcast") {
            Theme::Cloudy
        } else if c.contains("rain")
            || c.contains("drizzle")
            || c.contains("shower")
            || c.contains("thunder")
        {
            Theme::Rainy
        } else if c.contains("snow") || c.contains("sleet") || c.contains("blizzard") {
            Theme::Snowy
        } else if c.contains("mist") || c.contains("fog") || c.contains("haze") || c.contains("smoke")
        {
            Theme::Mist
        } else {
            Theme::Cloudy
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_ignores_condition_text() {
        assert_eq!(Theme::classify("Sunny", false), Theme::Night);
        assert_eq!(Theme::classify("Heavy rain", false), Theme::Night);
        assert_eq!(Theme::classify("", false), Theme::Night);
    }

    #[test]
    fn sunny_keywords() {
        assert_eq!(Theme::classify("Sunny", true), Theme::Sunny);
        assert_eq!(Theme::classify("Clear", true), Theme::Sunny);
    }

    #[test]
    fn cloudy_keywords() {
        assert_eq!(Theme::classify("Partly cloudy", true), Theme::Cloudy);
        assert_eq!(Theme::classify("Overcast", true), Theme::Cloudy);
    }

    #[test]
    fn rainy_keywords() {
        assert_eq!(Theme::classify("Light rain", true), Theme::Rainy);
        assert_eq!(Theme::classify("Patchy drizzle", true), Theme::Rainy);
        assert_eq!(Theme::classify("Heavy showers", true), Theme::Rainy);
        assert_eq!(Theme::classify("Thundery outbreaks", true), Theme::Rainy);
    }

    #[test]
    fn snowy_keywords() {
        assert_eq!(Theme::classify("Moderate snow", true), Theme::Snowy);
        assert_eq!(Theme::classify("Light sleet", true), Theme::Snowy);
        assert_eq!(Theme::classify("Blizzard", true), Theme::Snowy);
    }

    #[test]
    fn mist_keywords() {
        assert_eq!(Theme::classify("Mist", true), Theme::Mist);
        assert_eq!(Theme::classify("Freezing fog", true), Theme::Mist);
        assert_eq!(Theme::classify("Haze", true), Theme::Mist);
        assert_eq!(Theme::classify("Smoke", true), Theme::Mist);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Theme::classify("SUNNY", true), Theme::Sunny);
        assert_eq!(Theme::classify("tHuNdEr", true), Theme::Rainy);
    }

    #[test]
    fn first_match_wins_on_mixed_conditions() {
        // "sun" is checked before "rain".
        assert_eq!(Theme::classify("Sunny with a chance of rain", true), Theme::Sunny);
        // "cloud" is checked before "snow".
        assert_eq!(Theme::classify("Cloudy with snow", true), Theme::Cloudy);
    }

    #[test]
    fn unmatched_daytime_text_falls_back_to_cloudy() {
        assert_eq!(Theme::classify("Partly weird", true), Theme::Cloudy);
        assert_eq!(Theme::classify("", true), Theme::Cloudy);
    }
}
