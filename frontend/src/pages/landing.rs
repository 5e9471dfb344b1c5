use yew::prelude::*;

use crate::components::lead_modal::LeadModal;
use crate::config::SiteConfig;
use crate::lead::model::FormType;
use crate::pages::content::{CATEGORIES, GALLERY};
use crate::pages::sections::{CallToAction, Contact, Features, Footer, HowToBuy, Pricing};
use crate::reveal::observer::use_reveal;
use crate::Nav;

pub const REVEAL_SECTIONS: &[&str] = &["hero", "gallery", "features", "how", "pricing", "contact", "cta"];

#[derive(Clone, PartialEq)]
struct ModalRequest {
    open: bool,
    form_type: FormType,
    title: String,
    interest: String,
}

impl ModalRequest {
    fn closed() -> Self {
        Self {
            open: false,
            form_type: FormType::Lead,
            title: String::new(),
            interest: String::new(),
        }
    }

    fn lead(interest: String) -> Self {
        Self {
            open: true,
            form_type: FormType::Lead,
            title: "Оставить заявку".to_string(),
            interest,
        }
    }

    fn callback() -> Self {
        Self {
            open: true,
            form_type: FormType::Callback,
            title: "Заказать звонок".to_string(),
            interest: String::new(),
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let visibility = use_reveal(REVEAL_SECTIONS, config.reveal_threshold);
    let modal = use_state(ModalRequest::closed);

    let on_lead = {
        let modal = modal.clone();
        Callback::from(move |interest: String| modal.set(ModalRequest::lead(interest)))
    };
    let on_callback = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalRequest::callback()))
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut closed = (*modal).clone();
            closed.open = false;
            modal.set(closed);
        })
    };

    let hero_class = visibility.class_for("hero");
    let open_lead = {
        let on_lead = on_lead.clone();
        Callback::from(move |_: MouseEvent| on_lead.emit(String::new()))
    };
    let open_callback = {
        let on_callback = on_callback.clone();
        Callback::from(move |_: MouseEvent| on_callback.emit(()))
    };

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <Nav on_order={on_lead.reform(|_: ()| String::new())} />

            <section id="hero" class="hero">
                <div class="hero-background">
                    <img src="https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=1600&q=80" alt="Электросамокат" />
                </div>
                <div class="container hero-grid">
                    <div class={classes!("hero-copy", hero_class.clone())}>
                        <span class="pill">{"⚡ Электротранспорт нового поколения"}</span>
                        <h1>
                            <span class="gradient-text">{"Едь тихо."}</span><br />
                            <span class="accent">{"Едь чисто."}</span><br />
                            <span class="gradient-text blue">{"Едь умно."}</span>
                        </h1>
                        <p class="lead-text">
                            {"Широкий выбор электрического транспорта: трициклы, мопеды, велосипеды и самокаты. Быстрая доставка, гарантия, сервисное обслуживание."}
                        </p>
                        <div class="button-row">
                            <button class="accent-button large" onclick={open_lead}>{"Оставить заявку →"}</button>
                            <button class="outline-button large" onclick={open_callback}>{"Заказать звонок"}</button>
                        </div>
                        <div class="stats">
                            <div><div class="stat accent">{"500+"}</div><p class="muted small">{"Моделей в наличии"}</p></div>
                            <div><div class="stat">{"2 000+"}</div><p class="muted small">{"Довольных клиентов"}</p></div>
                            <div><div class="stat accent">{"3 года"}</div><p class="muted small">{"Гарантия на технику"}</p></div>
                        </div>
                    </div>
                    <div class={classes!("category-grid", "zoom", hero_class)}>
                        { for CATEGORIES.iter().map(|cat| {
                            let on_lead = on_lead.clone();
                            let label = cat.label;
                            html! {
                                <button
                                    class={classes!("category-card", cat.tint)}
                                    onclick={Callback::from(move |_| on_lead.emit(label.to_string()))}
                                >
                                    <div class="icon-box">{ cat.icon }</div>
                                    <p class="strong">{ cat.label }</p>
                                    <p class="muted small">{ cat.count }</p>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section id="gallery" class="section short">
                <div class={classes!("container", "gallery", visibility.class_for("gallery"))}>
                    { for GALLERY.iter().enumerate().map(|(i, img)| {
                        let on_lead = on_lead.clone();
                        let label = img.label;
                        html! {
                            <div
                                class="gallery-item"
                                style={format!("transition-delay: {}ms", i * 100)}
                                onclick={Callback::from(move |_| on_lead.emit(label.to_string()))}
                            >
                                <img src={img.src} alt={img.label} loading="lazy" />
                                <div class="gallery-caption"><span>{ img.label }</span></div>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <Features visibility={visibility.clone()} on_lead={on_lead.clone()} on_callback={on_callback.clone()} />
            <HowToBuy visibility={visibility.clone()} on_lead={on_lead.clone()} on_callback={on_callback.clone()} />
            <Pricing visibility={visibility.clone()} on_lead={on_lead.clone()} on_callback={on_callback.clone()} />
            <Contact visibility={visibility.clone()} on_lead={on_lead.clone()} on_callback={on_callback.clone()} />
            <CallToAction visibility={visibility.clone()} on_lead={on_lead.clone()} on_callback={on_callback.clone()} />
            <Footer />

            <LeadModal
                open={modal.open}
                on_close={on_close}
                form_type={modal.form_type}
                title={modal.title.clone()}
                interest={modal.interest.clone()}
            />
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    --accent: #c6ff3d;
    --bg: #07090c;
    --card: #11151b;
    min-height: 100vh;
    background: var(--bg);
    color: #fff;
    font-family: 'Inter', system-ui, sans-serif;
}
.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.container.narrow { max-width: 64rem; }
.centered { text-align: center; }
.section { padding: 8rem 0; }
.section.short { padding: 5rem 0; }
.section.tinted { background: rgba(198, 255, 61, 0.05); }
.section-head { text-align: center; margin-bottom: 5rem; }
.section-head h2, .centered h2 { font-size: clamp(2.5rem, 5vw, 3.75rem); font-weight: 900; letter-spacing: -0.04em; margin: 1rem 0 1.5rem; }
.eyebrow { font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(198, 255, 61, 0.6); }
.pill { display: inline-block; font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(198, 255, 61, 0.8); border: 1px solid rgba(198, 255, 61, 0.3); border-radius: 999px; padding: 0.375rem 1rem; margin-bottom: 2rem; }
.gradient-text { background: linear-gradient(90deg, #fff, #fff, rgba(198, 255, 61, 0.4)); -webkit-background-clip: text; background-clip: text; color: transparent; }
.gradient-text.blue { background: linear-gradient(135deg, #fff, #fff, rgba(96, 165, 250, 0.6)); -webkit-background-clip: text; background-clip: text; }
.accent { color: var(--accent); }
.muted { color: rgba(255, 255, 255, 0.6); }
.small { font-size: 0.875rem; }
.strong { font-weight: 700; }
.lead-text { font-size: 1.25rem; color: rgba(255, 255, 255, 0.75); font-weight: 300; line-height: 1.6; max-width: 42rem; margin: 0 auto 3rem; }
.grid { display: grid; gap: 1.5rem; }
.grid.two { grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 2rem; }
.grid.three { grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
.grid.four { grid-template-columns: repeat(auto-fit, minmax(13rem, 1fr)); }
.button-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: inherit; }
.accent-button, .outline-button { border-radius: 999px; padding: 0.875rem 2rem; font-weight: 600; cursor: pointer; text-decoration: none; transition: all 0.3s; font-size: 1rem; }
.accent-button { background: var(--accent); color: #000; border: none; }
.accent-button:hover { box-shadow: 0 10px 30px rgba(198, 255, 61, 0.35); }
.accent-button:disabled { opacity: 0.6; cursor: default; }
.outline-button { background: transparent; color: #fff; border: 1px solid rgba(198, 255, 61, 0.4); }
.outline-button:hover { background: rgba(198, 255, 61, 0.1); }
.large { padding: 1.125rem 2.5rem; font-size: 1.125rem; }
.wide { width: 100%; border-radius: 0.75rem; }

.reveal { opacity: 0; transform: translateY(2rem); transition: opacity 0.8s ease, transform 0.8s ease; }
.reveal.zoom { transform: scale(0.95); }
.reveal.visible { opacity: 1; transform: none; }

.hero { position: relative; min-height: 100vh; display: flex; align-items: center; padding: 8rem 0 6rem; overflow: hidden; }
.hero-background { position: absolute; inset: 0; }
.hero-background img { width: 100%; height: 100%; object-fit: cover; opacity: 0.25; }
.hero-background::after { content: ''; position: absolute; inset: 0; background: linear-gradient(135deg, #000, rgba(0, 0, 0, 0.8), rgba(23, 37, 84, 0.6)); }
.hero-grid { position: relative; z-index: 1; display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 4rem; align-items: center; width: 100%; }
.hero h1 { font-size: clamp(3rem, 7vw, 4.5rem); font-weight: 900; line-height: 1.1; letter-spacing: -0.04em; margin-bottom: 2rem; }
.hero .lead-text { margin-left: 0; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; padding-top: 2rem; margin-top: 3rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
.stat { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
.category-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; max-width: 28rem; margin: 0 auto; }
.category-card { text-align: left; border: 1px solid rgba(198, 255, 61, 0.2); border-radius: 1rem; padding: 1.5rem; color: #fff; cursor: pointer; transition: all 0.3s; }
.category-card:hover { border-color: rgba(198, 255, 61, 0.5); transform: scale(1.05); }
.tint-accent { background: linear-gradient(135deg, rgba(198, 255, 61, 0.2), rgba(198, 255, 61, 0.05)); }
.tint-blue { background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(59, 130, 246, 0.05)); }
.icon-box { width: 3rem; height: 3rem; border-radius: 0.75rem; background: rgba(198, 255, 61, 0.1); display: flex; align-items: center; justify-content: center; font-size: 1.375rem; margin-bottom: 1.25rem; }

.gallery { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; }
.gallery-item { position: relative; overflow: hidden; border-radius: 1rem; aspect-ratio: 1; cursor: pointer; }
.gallery-item img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
.gallery-item:hover img { transform: scale(1.1); }
.gallery-caption { position: absolute; inset: 0; display: flex; align-items: flex-end; padding: 1rem; background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent); opacity: 0; transition: opacity 0.3s; font-weight: 600; }
.gallery-item:hover .gallery-caption { opacity: 1; }

.feature-card, .step-card, .tier-card, .contact-card, .contact-box { border: 1px solid rgba(198, 255, 61, 0.1); border-radius: 1rem; padding: 2rem; background: rgba(17, 21, 27, 0.5); }
.feature-card { cursor: pointer; }
.feature-card:hover { border-color: rgba(198, 255, 61, 0.4); }
.hover-link { display: block; margin-top: 1.25rem; color: var(--accent); font-size: 0.875rem; opacity: 0; transition: opacity 0.3s; }
.feature-card:hover .hover-link { opacity: 1; }
.step-card { background: rgba(198, 255, 61, 0.1); }
.step-num { font-size: 3rem; font-weight: 900; color: var(--accent); margin-bottom: 1rem; }
.tier-card { padding: 2.5rem; display: flex; flex-direction: column; }
.tier-card.highlight { border-color: rgba(198, 255, 61, 0.4); background: rgba(198, 255, 61, 0.1); }
.tier-card ul { list-style: none; padding: 0; margin: 0 0 2.5rem; flex: 1; }
.tier-card li { margin-bottom: 1rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); }
.badge { align-self: flex-start; font-size: 0.75rem; font-weight: 700; color: #000; background: var(--accent); border-radius: 999px; padding: 0.25rem 0.75rem; margin-bottom: 1rem; text-transform: uppercase; }
.price { font-size: 2.25rem; font-weight: 900; color: var(--accent); margin-bottom: 2rem; }
.contact-card { display: flex; flex-direction: column; align-items: center; text-align: center; color: #fff; text-decoration: none; cursor: pointer; font: inherit; }
.contact-card.highlight { border-color: rgba(198, 255, 61, 0.4); background: rgba(198, 255, 61, 0.1); }
.contact-box { margin-top: 3rem; }
.contact-form { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; }
.contact-form .span-all { grid-column: 1 / -1; }
.contact-done { display: flex; align-items: center; gap: 0.75rem; color: var(--accent); font-weight: 600; padding: 1rem 0; }
.perks { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-top: 4rem; padding-top: 2rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
.perk { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; }

input, textarea { background: var(--bg); color: #fff; border: 1px solid rgba(198, 255, 61, 0.2); border-radius: 0.75rem; padding: 0.75rem 1rem; font-size: 0.875rem; outline: none; resize: none; font-family: inherit; }
input:focus, textarea:focus { border-color: rgba(198, 255, 61, 0.5); }
.form-error { color: #f87171; font-size: 0.875rem; }

.modal-root { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; padding: 1rem; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.7); backdrop-filter: blur(4px); }
.modal-card { position: relative; width: 100%; max-width: 28rem; padding: 2rem; background: var(--card); border: 1px solid rgba(198, 255, 61, 0.2); border-radius: 1rem; }
.modal-close { position: absolute; top: 1rem; right: 1rem; background: none; border: none; color: rgba(255, 255, 255, 0.4); cursor: pointer; font-size: 1.125rem; }
.modal-form { display: flex; flex-direction: column; gap: 1rem; }
.field { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
.modal-done { text-align: center; padding: 2rem 0; }
.done-icon { font-size: 3rem; color: var(--accent); }

.site-footer { border-top: 1px solid rgba(198, 255, 61, 0.1); padding: 3rem 0; font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
.footer-row { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1.5rem; }
.footer-links { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.footer-links a { color: inherit; text-decoration: none; }
.footer-links a:hover { color: var(--accent); }
.brand { display: flex; align-items: center; gap: 0.5rem; }
.brand-mark { width: 2rem; height: 2rem; border-radius: 0.5rem; background: var(--accent); color: #000; display: inline-flex; align-items: center; justify-content: center; }
.brand.small .brand-mark { width: 1.5rem; height: 1.5rem; font-size: 0.75rem; }
"#;
