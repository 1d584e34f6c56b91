#[cfg(feature = "hydrate")]
pub fn main() {
    use leptos::*;
    use navbartemp_web::app::App;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing log");

    logging::log!("csr mode - mounting");

    mount_to_body(move || view! { <App/> });
}
