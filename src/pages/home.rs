use stylist::yew::styled_component;
use yew::prelude::*;

use crate::hooks::use_site_content;
use crate::theme;

fn book_icon() -> Html {
    html! {
        <svg width="17" height="18" viewBox="0 0 17 18" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <path
                d="M1 2h4.5c1.4 0 2.6.6 3.5 1.5C9.9 2.6 11.1 2 12.5 2H16v13h-3.5c-1.4 0-2.6.6-3.5 1.5-.9-.9-2.1-1.5-3.5-1.5H1V2zm7.1 3.2C7.5 4.5 6.6 4 5.5 4H3v9h2.5c1 0 1.9.3 2.6.8V5.2zm1.8 8.6c.7-.5 1.6-.8 2.6-.8H15V4h-2.5c-1.1 0-2 .5-2.6 1.2v8.6z"
                fill="white"
                fill-opacity="0.25"
            />
        </svg>
    }
}

/// Testimonial from the first article quote. Renders nothing without one.
#[styled_component(HomeQuote)]
pub fn home_quote() -> Html {
    let content = use_site_content();

    let class = css!(
        r#"
        padding: 250px 0 150px;
        background: linear-gradient(180deg, #101216 0%, #191d23 100%);

        .quote__grid {
            position: relative;
            display: grid;
            grid-template-columns: 132px 675px;
            grid-column-gap: 131px;
            max-width: 1140px;
            margin: 0 auto;
        }

        blockquote {
            font-style: italic;
            font-size: 36px;
            color: #fafafa;
            margin-bottom: 40px;
        }

        blockquote a {
            color: ${gold};
        }

        .quote__link {
            position: relative;
            font-weight: 600;
            font-size: 18px;
            color: rgba(255, 255, 255, 0.3);
            transition: color 0.3s ease-out;
        }

        .quote__link:not(:last-child) {
            margin-right: 60px;
        }

        .quote__link:hover {
            color: #fff;
        }

        .quote__link:focus-visible::after {
            content: '';
            position: absolute;
            left: -10%;
            top: -50%;
            width: 120%;
            height: 200%;
            border: 2px solid ${purple};
            border-radius: 5px;
        }

        .quote__link img,
        .quote__link svg {
            margin-right: 13px;
        }

        @media (max-width: 735px) {
            padding: 50px 0 115px;

            .quote__grid {
                display: block;
                padding: 0 20px;
            }

            .quote__grid > img {
                width: 94.29px;
                height: 25px;
                margin-bottom: 15px;
            }

            blockquote {
                font-size: 24px;
                margin-bottom: 45px;
            }

            .quote__link {
                display: flex;
                justify-content: space-between;
                align-items: center;
                flex-direction: row-reverse;
                padding: 15px 0;
            }

            .quote__link:not(:last-child) {
                margin-right: 0;
                border-bottom: 1px solid rgba(255, 255, 255, 0.25);
            }
        }
        "#,
        gold = theme::GOLD,
        purple = theme::PURPLE,
    );

    let Some(quote) = content.featured_quote() else {
        return html! {};
    };

    html! {
        <div class={class}>
            <div class="quote__grid">
                <img src={quote.large_icon_url.clone()} alt={quote.company.clone()} />
                <div>
                    <blockquote>{ quote.blockquote() }</blockquote>
                    <a class="quote__link" href={quote.article_href()}>
                        <img src={quote.small_icon_url.clone()} alt="" />
                        { format!("More on {}", quote.company) }
                    </a>
                    <a class="quote__link" href="/articles">
                        { book_icon() }
                        {"All articles"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <HomeQuote />
        </div>
    }
}
