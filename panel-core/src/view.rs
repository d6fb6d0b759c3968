use crate::theme::Theme;

/// Output surface of the panel.
///
/// The controller writes through these named setters and never talks to a
/// concrete device, so a terminal view, a GUI view, or a recording fake in
/// tests are all interchangeable. Setters are cheap field writes; `flush` is
/// the repaint point for surfaces that need one (a DOM-like view that paints
/// on every setter may leave it a no-op).
pub trait PanelView {
    fn set_temperature(&mut self, text: &str);
    fn set_location(&mut self, text: &str);
    fn set_condition(&mut self, text: &str);
    fn set_icon(&mut self, url: &str, alt: &str);
    fn set_date_line(&mut self, text: &str);
    fn set_status_line(&mut self, text: &str);
    fn set_theme(&mut self, theme: Theme);

    /// True while a fetch is pending; the view should disable and relabel
    /// its search affordance.
    fn set_search_pending(&mut self, pending: bool);

    /// Show an error notice, replacing any existing one. At most one notice
    /// is visible at a time.
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);

    fn flush(&mut self);
}
