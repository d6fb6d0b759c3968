use crossterm::style::{Color, Stylize};
use panel_core::{PanelView, Theme};

/// Terminal rendition of the panel. Setters buffer field values; `flush`
/// repaints the whole frame when anything changed since the last paint.
#[derive(Debug, Default)]
pub struct TermView {
    temperature: String,
    location: String,
    condition: String,
    icon_url: String,
    icon_alt: String,
    date_line: String,
    status_line: String,
    theme: Option<Theme>,
    error: Option<String>,
    pending: bool,
    dirty: bool,
}

impl TermView {
    pub fn new() -> Self {
        Self::default()
    }

    fn theme_color(theme: Theme) -> Color {
        match theme {
            Theme::Sunny => Color::Yellow,
            Theme::Cloudy => Color::Grey,
            Theme::Rainy => Color::Blue,
            Theme::Snowy => Color::White,
            Theme::Mist => Color::DarkGrey,
            Theme::Night => Color::DarkBlue,
        }
    }

    fn paint(&self) {
        let color = self.theme.map(Self::theme_color).unwrap_or(Color::Grey);
        let label = self.theme.map(|t| t.as_str()).unwrap_or("…");
        let banner = format!("── weatherpanel · {label} {}", "─".repeat(24));

        println!();
        println!("{}", banner.with(color).bold());
        if !self.location.is_empty() {
            println!("  {}", self.location.as_str().bold());
        }
        if !self.temperature.is_empty() {
            println!("  {}   {}", self.temperature, self.condition);
        }
        if !self.date_line.is_empty() {
            println!("  {}", self.date_line);
        }
        if !self.icon_url.is_empty() {
            println!("  {} ({})", self.icon_url, self.icon_alt);
        }
        if !self.status_line.is_empty() {
            println!("  {}", self.status_line.as_str().dim());
        }
        if let Some(message) = &self.error {
            println!("  {}", message.as_str().with(Color::Red));
        }
        let search = if self.pending { "Loading..." } else { "Search" };
        println!("  [{search}] type a location and press Enter");
    }
}

impl PanelView for TermView {
    fn set_temperature(&mut self, text: &str) {
        self.temperature = text.to_string();
        self.dirty = true;
    }

    fn set_location(&mut self, text: &str) {
        self.location = text.to_string();
        self.dirty = true;
    }

    fn set_condition(&mut self, text: &str) {
        self.condition = text.to_string();
        self.dirty = true;
    }

    fn set_icon(&mut self, url: &str, alt: &str) {
        self.icon_url = url.to_string();
        self.icon_alt = alt.to_string();
        self.dirty = true;
    }

    fn set_date_line(&mut self, text: &str) {
        self.date_line = text.to_string();
        self.dirty = true;
    }

    fn set_status_line(&mut self, text: &str) {
        self.status_line = text.to_string();
        self.dirty = true;
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
        self.dirty = true;
    }

    fn set_search_pending(&mut self, pending: bool) {
        self.pending = pending;
        self.dirty = true;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.dirty = true;
    }

    fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.dirty = true;
        }
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.paint();
    }
}
