// ABOUTME: Builds the pane tree bound to a surface from the layout config.
// ABOUTME: Applies names, minimum sizes, styles, splits and widgets recursively.

use termpane_core::PaneConfig;
use termpane_layout::Pane;

use crate::widgets;

/// Shape `pane` after `config`, replacing any children it already has
pub fn build_pane(pane: &mut Pane, config: &PaneConfig) {
    pane.set_name(config.name.as_str());
    pane.set_min_width(config.min_width);
    pane.set_min_height(config.min_height);
    pane.set_style(config.style.as_ref().map(|s| s.to_style()));

    if let Some(split) = &config.split {
        if let Some(widget) = &config.widget {
            tracing::warn!("Pane {} is split, ignoring widget {}", config.name, widget);
        }
        let (first, second) = pane.split(split.kind, split.value, split.unit);
        build_pane(first, &split.first);
        build_pane(second, &split.second);
        return;
    }

    if let Some(widget) = &config.widget {
        if !widgets::attach(pane, widget) {
            tracing::warn!(
                "Unknown widget {} on pane {} (known: {})",
                widget,
                config.name,
                widgets::WIDGETS.join(", ")
            );
        }
    }
}
