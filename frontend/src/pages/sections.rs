use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config::SiteConfig;
use crate::pages::content::{FEATURES, PERKS, STEPS, TIERS};
use crate::reveal::tracker::VisibilityMap;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub visibility: VisibilityMap,
    pub on_lead: Callback<String>,
    pub on_callback: Callback<()>,
}

fn delay(ms: usize) -> String {
    format!("transition-delay: {}ms", ms)
}

#[function_component(Features)]
pub fn features(props: &SectionProps) -> Html {
    let class = props.visibility.class_for("features");

    html! {
        <section id="features" class="section tinted">
            <div class="container">
                <div class={classes!("section-head", class.clone())}>
                    <span class="eyebrow">{"Наш каталог"}</span>
                    <h2 class="gradient-text">{"Для каждого свой транспорт"}</h2>
                    <p class="lead-text">
                        {"От компактных самокатов до мощных трициклов: найдите идеальный электротранспорт под ваши задачи"}
                    </p>
                </div>
                <div class="grid three">
                    { for FEATURES.iter().enumerate().map(|(i, item)| {
                        let on_lead = props.on_lead.clone();
                        let title = item.title;
                        html! {
                            <div
                                class={classes!("feature-card", class.clone())}
                                style={delay(i * 100)}
                                onclick={Callback::from(move |_| on_lead.emit(title.to_string()))}
                            >
                                <div class="icon-box">{ item.icon }</div>
                                <h3>{ item.title }</h3>
                                <p class="muted">{ item.desc }</p>
                                <span class="hover-link">{"Узнать цену →"}</span>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowToBuy)]
pub fn how_to_buy(props: &SectionProps) -> Html {
    let class = props.visibility.class_for("how");

    html! {
        <section id="how" class="section">
            <div class="container">
                <div class={classes!("section-head", class.clone())}>
                    <span class="eyebrow">{"Процесс покупки"}</span>
                    <h2 class="gradient-text">{"Просто и быстро"}</h2>
                </div>
                <div class="grid four">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class={classes!("step-card", class.clone())} style={delay(i * 150)}>
                            <div class="step-num">{ step.num }</div>
                            <h3>{ step.title }</h3>
                            <p class="muted">{ step.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Pricing)]
pub fn pricing(props: &SectionProps) -> Html {
    let class = props.visibility.class_for("pricing");

    html! {
        <section id="pricing" class="section tinted">
            <div class="container narrow">
                <div class={classes!("section-head", class.clone())}>
                    <span class="eyebrow">{"Ценовые категории"}</span>
                    <h2 class="gradient-text">{"На любой бюджет"}</h2>
                </div>
                <div class="grid two">
                    { for TIERS.iter().enumerate().map(|(i, tier)| {
                        let on_lead = props.on_lead.clone();
                        let interest = tier.name;
                        html! {
                            <div
                                class={classes!("tier-card", class.clone(), tier.highlight.then_some("highlight"))}
                                style={delay(i * 200)}
                            >
                                if tier.highlight {
                                    <div class="badge">{"Популярный выбор"}</div>
                                }
                                <h3>{ tier.name }</h3>
                                <p class="price">{ tier.price }</p>
                                <ul>
                                    { for tier.features.iter().map(|f| html! { <li>{"→ "}{ *f }</li> }) }
                                </ul>
                                <button
                                    class={if tier.highlight { "accent-button wide" } else { "outline-button wide" }}
                                    onclick={Callback::from(move |_| on_lead.emit(interest.to_string()))}
                                >
                                    { tier.cta }
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let class = props.visibility.class_for("contact");
    let on_callback = {
        let on_callback = props.on_callback.clone();
        Callback::from(move |_: MouseEvent| on_callback.emit(()))
    };

    html! {
        <section id="contact" class="section">
            <div class="container narrow">
                <div class={classes!("section-head", class.clone())}>
                    <span class="eyebrow">{"Свяжитесь с нами"}</span>
                    <h2 class="gradient-text">{"Мы на связи"}</h2>
                </div>

                <div class={classes!("grid", "three", class.clone())}>
                    <a href={config.tel_href()} class="contact-card">
                        <div class="icon-box">{"📞"}</div>
                        <p class="muted small">{"Телефон"}</p>
                        <p class="strong">{ &config.phone_display }</p>
                        <p class="accent small">{"Ежедневно 9:00–21:00"}</p>
                    </a>
                    <a href={config.telegram_url.clone()} target="_blank" rel="noopener noreferrer" class="contact-card">
                        <div class="icon-box">{"✈"}</div>
                        <p class="muted small">{"Telegram"}</p>
                        <p class="strong">{ &config.phone_raw }</p>
                        <p class="accent small">{"Ответим быстро"}</p>
                    </a>
                    <button class="contact-card highlight" onclick={on_callback}>
                        <div class="icon-box">{"🎧"}</div>
                        <p class="muted small">{"Обратный звонок"}</p>
                        <p class="strong">{"Заказать звонок"}</p>
                        <p class="accent small">{"Перезвоним за 15 минут"}</p>
                    </button>
                </div>

                <div class={classes!("contact-box", class)} style={delay(200)}>
                    <h3>{"Напишите нам"}</h3>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &SectionProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let on_lead = {
        let on_lead = props.on_lead.clone();
        Callback::from(move |_: MouseEvent| on_lead.emit(String::new()))
    };

    html! {
        <section id="cta" class="section tinted">
            <div class={classes!("container", "narrow", "centered", props.visibility.class_for("cta"))}>
                <span class="pill">{"⚡ Бесплатная консультация"}</span>
                <h2>
                    <span class="gradient-text">{"Готовы пересесть"}</span>
                    <br />
                    <span class="accent">{"на электро?"}</span>
                </h2>
                <p class="lead-text">
                    {"Оставьте заявку, и наш специалист перезвонит, поможет с выбором и ответит на все вопросы."}
                </p>
                <div class="button-row">
                    <button class="accent-button large" onclick={on_lead}>{"Оставить заявку →"}</button>
                    <a href={config.tel_href()} class="outline-button large">{"📞 "}{ &config.phone_display }</a>
                </div>
                <div class="perks">
                    { for PERKS.iter().map(|(icon, text)| html! {
                        <div class="perk">
                            <span class="accent">{ *icon }</span>
                            <p class="muted small">{ *text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div class="brand small">
                    <span class="brand-mark">{"⚡"}</span>
                    <p>{ format!("© {} ElectroRide", year) }</p>
                </div>
                <div class="footer-links">
                    <a href={config.tel_href()}>{"📞 "}{ &config.phone_display }</a>
                    <a href={config.telegram_url.clone()} target="_blank" rel="noopener noreferrer">{"Telegram"}</a>
                    <a href="#features">{"Каталог"}</a>
                    <a href="#how">{"Как купить"}</a>
                </div>
            </div>
        </footer>
    }
}
