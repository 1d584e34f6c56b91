use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::json;

use navbartemp::{
    DisplayState, PluginSettings, SettingsViewModel, TemperatureDisplayModel,
    TemperatureViewModel, ViewModelRegistry, PLUGIN_ID,
};

use crate::push_client::PushClient;

/// Settings blob the host ships to the page before the first bind. The
/// standalone shell seeds it with the plugin defaults.
pub fn bootstrap_settings() -> SettingsViewModel {
    SettingsViewModel::new(json!({
        "plugins": {
            "navbartemp": PluginSettings::default(),
        }
    }))
}

/// Builds the plugin view-model with its collaborators injected in
/// registration order, runs the pre-render hook, wires the published state
/// into `publish` and hands the model to a fresh registry.
pub fn compose_view_models(
    global_settings: Rc<SettingsViewModel>,
    publish: impl Fn(&DisplayState) + 'static,
) -> Rc<RefCell<ViewModelRegistry>> {
    let temperature = Rc::new(TemperatureViewModel::default());

    let mut model = TemperatureDisplayModel::new(temperature, global_settings);
    model.on_before_binding();
    model.subscribe(publish);

    let mut registry = ViewModelRegistry::new();
    registry.register(TemperatureDisplayModel::spec(), model);
    Rc::new(RefCell::new(registry))
}

/// Root component for the application
#[component]
pub fn App() -> impl IntoView {
    // Sets up metadata, stylesheets, etc.
    provide_meta_context();

    let global_settings = Rc::new(bootstrap_settings());
    let plugin_settings = global_settings
        .plugin_settings(PLUGIN_ID)
        .unwrap_or_default();

    // Published display state, bridged into the reactive graph
    let (display, set_display) = create_signal(DisplayState::default());
    let registry = compose_view_models(Rc::clone(&global_settings), move |state| {
        set_display.set(state.clone());
    });

    // Feed the registry from the push channel (no-op off the browser)
    let _push_client = PushClient::new(registry);

    view! {
        <Stylesheet id="leptos" href="/pkg/navbartemp-web.css"/>
        <Meta name="description" content="Enclosure and host device temperatures for the printer navbar"/>
        <Title text="NavbarTemp"/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=move || view! {
                        <HomePage display=display plugin_settings=plugin_settings.clone()/>
                    }/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Standalone shell hosting the two plugin fragments.
#[component]
fn HomePage(display: ReadSignal<DisplayState>, plugin_settings: PluginSettings) -> impl IntoView {
    view! {
        <div class="page">
            <header class="navbar">
                <span class="navbar-brand">"Printer"</span>
                <NavbarTemp display=display/>
            </header>
            <SettingsPanel settings=plugin_settings/>
        </div>
    }
}

/// Navigation-bar fragment: the enclosure reading whenever one arrived, the
/// host reading only while the feed reports a known host device.
#[component]
fn NavbarTemp(display: ReadSignal<DisplayState>) -> impl IntoView {
    view! {
        <div id="navbar_plugin_navbartemp" class="navbar-text">
            {move || display.get().air_temperature_text.map(|text| view! {
                <span class="air-temp">{text}</span>
            })}
            {move || {
                let state = display.get();
                // the flag gates the render; the text alone is not enough
                if state.host_present {
                    state.host_temperature_text.map(|text| view! {
                        <span class="raspi-temp">{text}</span>
                    })
                } else {
                    None
                }
            }}
        </div>
    }
}

/// Settings-panel fragment, rendered from the namespace captured before the
/// first bind.
#[component]
fn SettingsPanel(settings: PluginSettings) -> impl IntoView {
    view! {
        <div id="settings_plugin_navbartemp" class="settings-panel">
            <h2>"Navbar Temperature"</h2>
            <label class="checkbox">
                <input type="checkbox" checked=settings.display_raspi_temp/>
                " Display host device temperature"
            </label>
            <label class="checkbox">
                <input type="checkbox" checked=settings.display_air_temp/>
                " Display enclosure temperature"
            </label>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found | NavbarTemp"/>
        <div class="container not-found">
            <h1>"404 - Not Found"</h1>
            <p>"The page you're looking for doesn't exist"</p>
            <a href="/">"Return to printer"</a>
        </div>
    }
}
