use serde_json::Value;

/// Push-channel listener half of a view-model.
///
/// The channel delivers every plugin's every message to every listener;
/// claiming or ignoring a message is the listener's responsibility.
pub trait PushListener {
    fn on_plugin_message(&mut self, plugin: &str, data: &Value);
}

/// Registration metadata for one view-model: the collaborator view-models it
/// wants injected, in order, and the DOM anchors it binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelSpec {
    pub dependencies: &'static [&'static str],
    pub anchors: &'static [&'static str],
}

struct Registration {
    spec: ViewModelSpec,
    listener: Box<dyn PushListener>,
}

/// Local view-model registry owned by the composition root.
///
/// Replaces a page-global registration list: view-models are constructed
/// with their collaborators already injected and handed over together with
/// their [`ViewModelSpec`].
#[derive(Default)]
pub struct ViewModelRegistry {
    registrations: Vec<Registration>,
}

impl ViewModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: ViewModelSpec, listener: impl PushListener + 'static) {
        self.registrations.push(Registration {
            spec,
            listener: Box::new(listener),
        });
    }

    /// Deliver one push message to every registered listener.
    pub fn dispatch_plugin_message(&mut self, plugin: &str, data: &Value) {
        for registration in &mut self.registrations {
            registration.listener.on_plugin_message(plugin, data);
        }
    }

    pub fn specs(&self) -> impl Iterator<Item = &ViewModelSpec> {
        self.registrations.iter().map(|registration| &registration.spec)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
