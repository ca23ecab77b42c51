use eframe::egui::Color32;

/// Accent palette lifted from the web UI theme.
pub const PRIMARY: Color32 = Color32::from_rgb(0, 229, 255);
pub const SECONDARY: Color32 = Color32::from_rgb(161, 89, 225);
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 150);
pub const ERROR: Color32 = Color32::from_rgb(220, 50, 50);
