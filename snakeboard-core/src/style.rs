use serde::{Deserialize, Serialize};

/// Rendering style knobs. Every field carries a default so a partial
/// settings document deserializes with fallbacks instead of failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub show_coordinate_labels: bool,
    pub square_color: String,
    pub item_color: String,
    pub hazard_color: String,
    pub hazard_opacity: f64,
    /// Slot 0 is reserved for the primary entity; the rest cycle across
    /// non-primary entities in board order.
    pub entity_body_colors: Vec<String>,
    pub entity_head_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            show_coordinate_labels: true,
            square_color: "#a1a1a1".to_string(),
            item_color: "red".to_string(),
            hazard_color: "#616161".to_string(),
            hazard_opacity: 0.35,
            entity_body_colors: ["green", "#E4601B", "#C51BE4", "#1B9FE4"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            entity_head_color: "#5c5c5c".to_string(),
        }
    }
}

/// Body color for the `index`-th non-primary entity. Wraps modulo the
/// non-primary slice of the palette, so any entity count gets a stable,
/// deterministic color. A single-color palette degenerates to that color
/// for everyone.
///
/// Caller must ensure the palette is non-empty (the renderer rejects an
/// empty palette before drawing).
pub fn body_color(index: usize, palette: &[String]) -> &str {
    if palette.len() <= 1 {
        return &palette[0];
    }
    let span = palette.len() - 1;
    &palette[1 + index % span]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        StyleConfig::default().entity_body_colors
    }

    #[test]
    fn cycles_over_non_primary_slots() {
        let p = palette();
        assert_eq!(body_color(0, &p), "#E4601B");
        assert_eq!(body_color(1, &p), "#C51BE4");
        assert_eq!(body_color(2, &p), "#1B9FE4");
        // Fourth non-primary entity wraps back to slot 1, never slot 0.
        assert_eq!(body_color(3, &p), "#E4601B");
        assert_eq!(body_color(30, &p), body_color(0, &p));
    }

    #[test]
    fn single_color_palette_serves_everyone() {
        let p = vec!["teal".to_string()];
        assert_eq!(body_color(0, &p), "teal");
        assert_eq!(body_color(7, &p), "teal");
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let cfg: StyleConfig = serde_json::from_str(r##"{"square_color": "#222222"}"##).unwrap();
        assert_eq!(cfg.square_color, "#222222");
        assert_eq!(cfg.item_color, "red");
        assert!(cfg.show_coordinate_labels);
        assert_eq!(cfg.entity_body_colors.len(), 4);
    }
}
