use std::rc::Rc;

use log::{error, warn};
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::animation::browser::BrowserHost;
use crate::animation::{
    Phase, PinRegion, ScrollProgressDriver, ScrollState, TravelDistance, ViewportTracker,
};
use crate::config;
use crate::error::{AnimationError, ConfigError};

#[derive(Properties, PartialEq)]
pub struct StickyProps {
    /// Scroll distance the panel stays pinned for, e.g. `"2200px"`.
    pub height: AttrValue,
    /// Panel fills the viewport while pinned.
    #[prop_or_default]
    pub cover: bool,
    pub render: Callback<ScrollState, Html>,
    /// Told about every tick, outside of rendering.
    #[prop_or_default]
    pub on_change: Option<Callback<ScrollState>>,
    #[prop_or_default]
    pub on_error: Option<Callback<AnimationError>>,
}

fn attach(
    track: &NodeRef,
    travel: Result<TravelDistance, ConfigError>,
    state: UseStateHandle<ScrollState>,
    on_change: Option<Callback<ScrollState>>,
) -> Result<ScrollProgressDriver, AnimationError> {
    let travel = travel?;
    if track.get().is_none() {
        return Err(ConfigError::MissingRegion.into());
    }
    let host = BrowserHost::shared();
    let tracker = ViewportTracker::new(host.clone()).with_debounce(config::RESIZE_DEBOUNCE_MS);
    let region = PinRegion::new(Rc::new(track.clone()), travel);
    Ok(ScrollProgressDriver::start(host, &tracker, region, move |next| {
        state.set(next);
        if let Some(on_change) = &on_change {
            on_change.emit(next);
        }
    }))
}

/// Pins its panel to the viewport for `height` px of scrolling and hands the
/// progress through that distance to `render`.
#[styled_component(Sticky)]
pub fn sticky(props: &StickyProps) -> Html {
    let track = use_node_ref();
    let state = use_state_eq(|| ScrollState::NEUTRAL);
    let travel = TravelDistance::parse(&props.height);

    {
        let track = track.clone();
        let state = state.clone();
        let on_change = props.on_change.clone();
        let on_error = props.on_error.clone();
        use_effect_with_deps(
            move |travel: &Result<TravelDistance, ConfigError>| {
                let driver = match attach(&track, travel.clone(), state, on_change) {
                    Ok(driver) => Some(driver),
                    Err(err) => {
                        if err.is_fatal() {
                            error!("sticky section not animated: {}", err);
                        } else {
                            warn!("sticky section not animated yet: {}", err);
                        }
                        if let Some(on_error) = on_error {
                            on_error.emit(err);
                        }
                        None
                    }
                };
                move || drop(driver)
            },
            travel.clone(),
        );
    }

    let class = css!(
        r#"
        position: relative;
        width: 100%;

        & > .sticky__panel {
            left: 0;
            right: 0;
            width: 100%;
        }

        & > .sticky__panel--cover {
            height: 100vh;
            overflow: hidden;
        }
        "#
    );
    let panel_class = classes!("sticky__panel", props.cover.then_some("sticky__panel--cover"));

    let Ok(travel) = travel else {
        return html! {
            <div class={class}>
                <div class={panel_class}>{ props.render.emit(ScrollState::NEUTRAL) }</div>
            </div>
        };
    };

    let current = *state;
    let position = match current.phase() {
        Phase::Before => "position: absolute; top: 0;",
        Phase::Pinned => "position: fixed; top: 0;",
        Phase::After => "position: absolute; bottom: 0;",
    };
    let track_style = format!("height: calc({} + 100vh);", travel);

    html! {
        <div ref={track} class={class} style={track_style}>
            <div class={panel_class} style={position}>
                { props.render.emit(current) }
            </div>
        </div>
    }
}
