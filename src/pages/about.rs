use log::warn;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::animation::browser::layout_height;
use crate::animation::style;
use crate::animation::{ScaleMemo, ScaleTiers, ScrollState, ViewportMetrics};
use crate::components::sticky::Sticky;
use crate::config;
use crate::content::ValueStatement;
use crate::hooks::{use_site_content, use_viewport};
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct AboutHeadingProps {
    pub heading: Html,
    pub text: AttrValue,
}

#[styled_component(AboutHeading)]
pub fn about_heading(props: &AboutHeadingProps) -> Html {
    let class = css!(
        r#"
        position: relative;
        max-width: 750px;
        margin: 0 auto 60px;
        text-align: center;
        z-index: 1;

        h2 {
            font-size: 48px;
            color: #fff;
            margin-bottom: 25px;
        }

        p {
            font-size: 22px;
            color: ${grey};
        }

        @media (max-width: 735px) {
            h2 { font-size: 32px; }
            p { font-size: 18px; }
            .about-values__mobile-break { display: block; }
        }
        "#,
        grey = theme::GREY,
    );

    html! {
        <header class={class}>
            <h2>{ props.heading.clone() }</h2>
            <p>{ props.text.to_string() }</p>
        </header>
    }
}

fn value_card(value: &ValueStatement) -> Html {
    let illo = match &value.image_ref {
        Some(src) if !src.is_empty() => html! { <img class="value__illo" src={src.clone()} alt="" /> },
        _ => html! { <div class="value__illo" /> },
    };
    html! {
        <div class="value" key={value.heading.clone()}>
            { illo }
            <h3 class="value__heading">{ value.heading.clone() }</h3>
            <p class="value__text">{ value.text.clone() }</p>
        </div>
    }
}

fn contact_button() -> Html {
    html! {
        <div class="values__button">
            <a class="button-pill" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                {"Work with our team"}
            </a>
        </div>
    }
}

/// The "who we choose to be" section. On desktop the background shape grows
/// while the page scrolls through a pinned panel, then the values fade in over
/// it. Narrow screens get a static list.
#[styled_component(AboutValues)]
pub fn about_values() -> Html {
    let content = use_site_content();
    let viewport = use_viewport();
    let shape_ref = use_node_ref();
    let memo = use_memo(|_| ScaleMemo::new(ScaleTiers::default()), ());
    let scale = use_state_eq(|| None::<f64>);
    let started = use_state_eq(|| false);

    // Measured per resize, and once more when scrolling first reaches the
    // section in case the shape was not mounted at resize time.
    {
        let shape_ref = shape_ref.clone();
        let scale = scale.clone();
        use_effect_with_deps(
            move |(viewport, started): &(ViewportMetrics, bool)| {
                if !viewport.is_known() {
                    scale.set(None);
                } else if let Some(shape_height) = layout_height(&shape_ref) {
                    scale.set(memo.get(shape_height, viewport.height));
                } else if *started {
                    warn!("values shape not laid out, shape stays at rest");
                }
                || ()
            },
            (viewport, *started),
        );
    }

    let on_change = {
        let started = started.clone();
        Callback::from(move |state: ScrollState| started.set(state.progress > 0.0))
    };

    let class = css!(
        r#"
        padding: 0 0 10px;

        .values {
            position: absolute;
            width: 100%;
            top: 50%;
            left: 50%;
            transform: translate(-50%, -50%);
            background: ${bg};
            z-index: 5;
        }

        .values__grid {
            max-width: 750px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: 337px 337px;
            justify-content: space-between;
            grid-row-gap: 45px;
        }

        .values__column {
            position: relative;
            max-width: 750px;
            margin: 0 auto;
            padding: 0 20px;
        }

        .values__column .value {
            margin-bottom: 30px;
        }

        .value__illo {
            width: 31px;
            height: 31px;
            background: ${illo};
            margin-bottom: 15px;
        }

        .value__heading {
            color: #fff;
            margin-bottom: 15px;
        }

        .value__text {
            font-size: 22px;
            color: ${grey};
        }

        .values__button {
            display: flex;
            justify-content: center;
            margin: 60px auto 0;
        }

        .button-pill {
            padding: 14px 30px;
            border-radius: 40px;
            background: #fff;
            color: ${bg};
            font-weight: 600;
        }

        .shape {
            position: absolute;
            top: 50%;
            left: 0;
            right: 0;
            width: 100%;
            height: 100%;
            max-width: 750px;
            margin: 0 auto;
            display: flex;
            align-items: center;
            justify-content: center;
            transform: translateY(-50%);
            will-change: transform;
        }

        .shape figure {
            position: absolute;
            top: 50%;
            left: 0;
            right: 0;
            margin: 0 auto;
            transform: translateY(-50%);
        }

        .shape__glow {
            z-index: 3;
            transform: translateY(-50%) scale(1.186);
        }

        .shape__rectangle {
            z-index: 3;
        }

        .shape__reflection {
            top: auto;
            transform: none;
        }

        .reflection {
            position: relative;
            background: linear-gradient(#313338, transparent 50%);
            filter: blur(5px);
            width: 100%;
            min-height: 212px;
            transform: translateY(120%);
            z-index: 4;
        }

        .reflection__mask {
            position: absolute;
            background: ${bg};
            left: 12px;
            top: 12px;
            right: 12px;
            bottom: 0;
        }

        @media (max-width: 1024px) {
            padding: 120px 0;
        }

        @media (max-width: 735px) {
            .value__text { font-size: 18px; }
        }

        @media (max-width: 600px) {
            padding: 90px 0 0;
        }
        "#,
        bg = theme::BG,
        grey = theme::GREY,
        illo = theme::ILLO,
    );

    let heading = html! {
        <AboutHeading
            heading={html! { <><span class="about-values__mobile-break">{"Who we"}</span>{" choose to be"}</> }}
            text="A company's culture isn\u{2019}t something to be passed down as commandments, or enforced like law. It's the choices we make every day that defines who we are, as individuals and as a team. These are our choices."
        />
    };

    let values: Vec<ValueStatement> = content.renderable_values().cloned().collect();

    if !theme::is_desktop(viewport.width) {
        return html! {
            <div class={class}>
                { heading }
                <div class="values__column">
                    { for values.iter().map(value_card) }
                    { contact_button() }
                </div>
            </div>
        };
    }

    let render = {
        let shape_ref = shape_ref.clone();
        let shapes = content.shapes.clone();
        let scale = *scale;
        Callback::from(move |state: ScrollState| {
            let values_style = style::values_style(state).to_css();
            let shape_style = style::shape_style(state, scale).to_css();
            let glow_style = style::glow_style(state).to_css();
            let reflection_style = style::reflection_style(state).to_css();

            html! {
                <>
                    <div class="values" style={values_style}>
                        <div class="values__grid">
                            { for values.iter().map(value_card) }
                        </div>
                        { contact_button() }
                    </div>
                    <div class="shape" style={shape_style}>
                        <figure class="shape__glow" style={glow_style}>
                            <img src={shapes.with_shadow.clone()} alt="" />
                        </figure>
                        <figure class="shape__rectangle" ref={shape_ref.clone()}>
                            <img src={shapes.without_shadow.clone()} alt="" />
                        </figure>
                        <figure class="shape__reflection" style={reflection_style}>
                            <div class="reflection"><div class="reflection__mask" /></div>
                        </figure>
                    </div>
                </>
            }
        })
    };

    html! {
        <div class={class}>
            { heading }
            <Sticky cover=true height={config::VALUES_TRAVEL_DISTANCE} {render} {on_change} />
        </div>
    }
}
