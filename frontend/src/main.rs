use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod lead {
    pub mod model;
    pub mod error;
    pub mod client;
    pub mod state;
    pub mod hook;
}
mod reveal {
    pub mod tracker;
    pub mod observer;
}
mod components {
    pub mod lead_modal;
    pub mod contact_form;
}
mod pages {
    pub mod content;
    pub mod landing;
    pub mod sections;
}

use config::SiteConfig;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"Страница не найдена"}</p>
                    <Link<Route> to={Route::Home}>{"На главную"}</Link<Route>>
                </div>
            }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_order: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 40.0);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let order = {
        let on_order = props.on_order.clone();
        let close = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close.emit(e);
            on_order.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{ NAV_CSS }</style>
            <div class="nav-content">
                <a href="#hero" class="brand">
                    <span class="brand-mark">{"⚡"}</span>
                    <span class="nav-logo">{"ElectroRide"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Каталог"}</a>
                    <a href="#how" class="nav-link" onclick={close_menu.clone()}>{"Как купить"}</a>
                    <a href="#pricing" class="nav-link" onclick={close_menu.clone()}>{"Цены"}</a>
                    <a href="#contact" class="nav-link" onclick={close_menu}>{"Контакты"}</a>
                    <button class="accent-button" onclick={order}>{"Заказать"}</button>
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
.top-nav { position: fixed; top: 0; width: 100%; z-index: 40; transition: background 0.3s; border-bottom: 1px solid transparent; }
.top-nav.scrolled { background: rgba(7, 9, 12, 0.8); backdrop-filter: blur(24px); border-bottom-color: rgba(198, 255, 61, 0.2); }
.nav-content { max-width: 80rem; margin: 0 auto; padding: 1.25rem 1.5rem; display: flex; justify-content: space-between; align-items: center; }
.nav-content .brand { text-decoration: none; }
.nav-logo { font-weight: 700; font-size: 1.5rem; letter-spacing: -0.04em; color: #fff; }
.nav-right { display: flex; align-items: center; gap: 2.5rem; }
.nav-link { color: rgba(255, 255, 255, 0.6); text-decoration: none; font-size: 0.875rem; font-weight: 500; }
.nav-link:hover { color: #fff; }
.burger-menu { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
.burger-menu span { width: 24px; height: 2px; background: #fff; }
@media (max-width: 768px) {
    .burger-menu { display: flex; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open { display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0; padding: 1.5rem; gap: 1.25rem; background: rgba(7, 9, 12, 0.95); }
}
.not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; }
"#;


#[function_component]
fn App() -> Html {
    let config = SiteConfig::default();
    info!("Lead endpoint: {}", config.lead_endpoint);

    html! {
        <ContextProvider<SiteConfig> context={config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
