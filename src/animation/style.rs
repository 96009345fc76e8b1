//! Pure mappings from scroll progress to style values. No state, no timers.

use std::fmt::Write as _;

use super::scroll::ScrollState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    Enabled,
    Disabled,
}

impl PointerEvents {
    pub fn as_css(self) -> &'static str {
        match self {
            PointerEvents::Enabled => "initial",
            PointerEvents::Disabled => "none",
        }
    }
}

/// Style overrides for one element. `None` fields are left to the stylesheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualOutput {
    pub opacity: Option<f64>,
    pub transform: Option<String>,
    pub pointer_events: Option<PointerEvents>,
}

impl VisualOutput {
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.transform.is_none() && self.pointer_events.is_none()
    }

    /// Inline `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.opacity {
            let _ = write!(css, "opacity: {opacity};");
        }
        if let Some(transform) = &self.transform {
            if !css.is_empty() {
                css.push(' ');
            }
            let _ = write!(css, "transform: {transform};");
        }
        if let Some(pointer_events) = self.pointer_events {
            if !css.is_empty() {
                css.push(' ');
            }
            let _ = write!(css, "pointer-events: {};", pointer_events.as_css());
        }
        css
    }
}

/// Linear fade across the whole track.
pub fn opacity(progress: f64) -> f64 {
    progress
}

/// Four times as fast as `opacity`, full at a quarter of the track.
pub fn fast_opacity(progress: f64) -> f64 {
    (4.0 * progress).clamp(0.0, 1.0)
}

/// Gated at the midpoint: enabled strictly after half way.
pub fn interactivity(progress: f64) -> PointerEvents {
    if progress > 0.5 {
        PointerEvents::Enabled
    } else {
        PointerEvents::Disabled
    }
}

/// `None` at rest, otherwise the centred shape grown by `progress * scale`.
pub fn shape_transform(progress: f64, scale: f64) -> Option<String> {
    (progress > 0.0).then(|| format!("translateY(-50%) scale({})", 1.0 + progress * scale))
}

pub fn glow_opacity(progress: f64) -> f64 {
    1.0 - fast_opacity(progress)
}

pub fn reflection_opacity(progress: f64) -> f64 {
    (1.0 - 2.0 * fast_opacity(progress)).max(0.0)
}

/// Panel of values fading in over the shape.
pub fn values_style(state: ScrollState) -> VisualOutput {
    VisualOutput {
        opacity: Some(opacity(state.progress)),
        transform: None,
        pointer_events: Some(interactivity(state.progress)),
    }
}

/// Background shape. Clickable only until the values panel takes over.
/// Without a scale (unknown viewport) the shape stays at rest.
pub fn shape_style(state: ScrollState, scale: Option<f64>) -> VisualOutput {
    let Some(transform) = scale.and_then(|scale| shape_transform(state.progress, scale)) else {
        return VisualOutput::default();
    };
    let pointer_events = if state.progress <= 0.5 {
        PointerEvents::Enabled
    } else {
        PointerEvents::Disabled
    };
    VisualOutput {
        opacity: None,
        transform: Some(transform),
        pointer_events: Some(pointer_events),
    }
}

pub fn glow_style(state: ScrollState) -> VisualOutput {
    VisualOutput { opacity: Some(glow_opacity(state.progress)), ..VisualOutput::default() }
}

pub fn reflection_style(state: ScrollState) -> VisualOutput {
    VisualOutput { opacity: Some(reflection_opacity(state.progress)), ..VisualOutput::default() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(progress: f64) -> ScrollState {
        ScrollState { progress, is_pinned: progress > 0.0 && progress < 1.0 }
    }

    #[test]
    fn opacity_is_identity() {
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            assert_eq!(opacity(p), p);
        }
    }

    #[test]
    fn fast_opacity_saturates_at_a_quarter() {
        assert_eq!(fast_opacity(0.25), 1.0);
        assert!((fast_opacity(0.1) - 0.4).abs() < 1e-12);
        assert_eq!(fast_opacity(0.9), 1.0);
        assert_eq!(fast_opacity(-0.2), 0.0);
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            assert_eq!(fast_opacity(p), (4.0 * p).max(0.0).min(1.0));
            assert!(fast_opacity(p) >= opacity(p));
        }
    }

    #[test]
    fn interactivity_boundary_is_exclusive() {
        assert_eq!(interactivity(0.5), PointerEvents::Disabled);
        assert_eq!(interactivity(0.51), PointerEvents::Enabled);
        assert_eq!(interactivity(0.0), PointerEvents::Disabled);
    }

    #[test]
    fn shape_transform_only_after_start() {
        assert_eq!(shape_transform(0.0, 3.9), None);
        assert_eq!(
            shape_transform(0.5, 4.0).as_deref(),
            Some("translateY(-50%) scale(3)")
        );
    }

    #[test]
    fn secondary_fades_finish_early() {
        assert_eq!(glow_opacity(0.0), 1.0);
        assert_eq!(glow_opacity(0.25), 0.0);
        assert_eq!(reflection_opacity(0.0), 1.0);
        assert_eq!(reflection_opacity(0.125), 0.0);
        assert_eq!(reflection_opacity(0.5), 0.0);
    }

    #[test]
    fn mapping_is_reproducible() {
        let s = state(0.37);
        assert_eq!(shape_style(s, Some(3.95)), shape_style(s, Some(3.95)));
        assert_eq!(values_style(s), values_style(s));
    }

    #[test]
    fn shape_and_values_swap_interactivity_at_midpoint() {
        let early = state(0.4);
        assert_eq!(values_style(early).pointer_events, Some(PointerEvents::Disabled));
        assert_eq!(shape_style(early, Some(3.0)).pointer_events, Some(PointerEvents::Enabled));

        let late = state(0.6);
        assert_eq!(values_style(late).pointer_events, Some(PointerEvents::Enabled));
        assert_eq!(shape_style(late, Some(3.0)).pointer_events, Some(PointerEvents::Disabled));
    }

    #[test]
    fn resting_or_unscaled_shape_has_no_override() {
        assert!(shape_style(state(0.0), Some(3.0)).is_empty());
        assert!(shape_style(state(0.5), None).is_empty());
        assert_eq!(shape_style(state(0.0), Some(3.0)).to_css(), "");
    }

    #[test]
    fn renders_inline_css() {
        assert_eq!(
            values_style(state(0.75)).to_css(),
            "opacity: 0.75; pointer-events: initial;"
        );
        assert_eq!(
            shape_style(state(0.25), Some(2.0)).to_css(),
            "transform: translateY(-50%) scale(1.5); pointer-events: initial;"
        );
    }
}
