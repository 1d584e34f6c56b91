#[cfg(feature = "hydrate")]
mod client_impl {
    use std::cell::RefCell;
    use std::rc::Rc;

    use log::*;
    use navbartemp::{PluginMessage, ViewModelRegistry};
    use wasm_bindgen::prelude::*;
    use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

    /// Browser half of the push channel.
    ///
    /// Decodes [`PluginMessage`] envelopes off the host's WebSocket and hands
    /// them to the view-model registry; every listener sees every frame.
    #[derive(Clone)]
    pub struct PushClient {
        connection: WebSocket,
    }

    impl PushClient {
        pub fn new(registry: Rc<RefCell<ViewModelRegistry>>) -> Self {
            info!("Creating new PushClient (WebSocket client)");

            // Construct WebSocket URL using current location
            let ws_url = {
                let window = web_sys::window().expect("no global `window` exists");
                let location = window.location();
                let protocol = if location.protocol().unwrap() == "https:" { "wss:" } else { "ws:" };
                let host = location.host().unwrap();
                format!("{}//{}/push", protocol, host)
            };

            info!("Connecting to push channel at {}", ws_url);
            let connection = WebSocket::new(&ws_url).expect("Failed to create WebSocket");

            // Set up message handler
            let onmessage_callback = Closure::<dyn FnMut(_)>::new(move |e: MessageEvent| {
                if let Ok(txt) = e.data().dyn_into::<js_sys::JsString>() {
                    let txt_str = String::from(txt);
                    match serde_json::from_str::<PluginMessage>(&txt_str) {
                        Ok(message) => {
                            debug!("Received push message from plugin: {}", message.plugin);

                            // Hand the frame to every registered view-model;
                            // filtering is each listener's responsibility
                            registry
                                .borrow_mut()
                                .dispatch_plugin_message(&message.plugin, &message.data);
                        }
                        Err(e) => {
                            error!("Failed to parse message as PluginMessage: {}", e);
                            info!("Raw message: {}", txt_str);
                        }
                    }
                }
            });
            connection.set_onmessage(Some(onmessage_callback.as_ref().unchecked_ref()));
            onmessage_callback.forget();

            // Set up open handler
            let onopen_callback = Closure::<dyn FnMut()>::new(move || {
                info!("Push channel connection opened");
            });
            connection.set_onopen(Some(onopen_callback.as_ref().unchecked_ref()));
            onopen_callback.forget();

            // Set up error handler
            let onerror_callback = Closure::<dyn FnMut(_)>::new(move |e: ErrorEvent| {
                error!("Push channel error: {:?}", e);
            });
            connection.set_onerror(Some(onerror_callback.as_ref().unchecked_ref()));
            onerror_callback.forget();

            // Set up close handler
            let connection_clone = connection.clone();
            let onclose_callback = Closure::<dyn FnMut(_)>::new(move |e: CloseEvent| {
                info!(
                    "Push channel connection closed: code={}, reason={}",
                    e.code(),
                    e.reason()
                );

                // Try to reconnect after a delay
                let window = web_sys::window().expect("no global `window` exists");
                let connection = connection_clone.clone();

                let closure = Closure::once_into_js(move || {
                    info!("Attempting to reconnect push channel...");
                    connection.set_onclose(None);
                    connection.set_onerror(None);
                    connection.set_onmessage(None);
                    connection.set_onopen(None);
                    // Reloading the page triggers a fresh connection and a
                    // fresh view-model composition
                    let window = web_sys::window().expect("no global `window` exists");
                    let _ = window.location().reload();
                });

                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    5000, // 5 seconds delay before reconnect
                );
            });
            connection.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
            onclose_callback.forget();

            Self { connection }
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod host_impl {
    use std::cell::RefCell;
    use std::rc::Rc;

    use log::*;
    use navbartemp::ViewModelRegistry;

    /// Stand-in used off the browser so the library target builds natively.
    #[derive(Clone)]
    pub struct PushClient {}

    impl PushClient {
        pub fn new(_registry: Rc<RefCell<ViewModelRegistry>>) -> Self {
            info!("Creating new PushClient (native build - no-op)");
            Self {}
        }
    }
}

// Re-export the appropriate implementation based on feature flags
#[cfg(feature = "hydrate")]
pub use client_impl::PushClient;

#[cfg(not(feature = "hydrate"))]
pub use host_impl::PushClient;
