//! Bridge to the hosted Plaid Link widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget script (`link-initialize.js`) is loaded by the app shell and
//! exposes `Plaid.create(config)`. One handler is created per link token;
//! its `onLoad`, `onSuccess` and `onExit` callbacks are forwarded to the page
//! as `WidgetEvent`s, and the flow controller opens it through `LinkWidget`.
//!
//! LIFECYCLE
//! =========
//! The mounted handler lives in a local `StoredValue`, so it is destroyed when
//! the token is cleared, when a new token replaces it, or when the owning page
//! is disposed. During SSR the bridge is inert.

use leptos::prelude::*;
use linkflow::LinkWidget;
use linkflow::widget::WidgetEvent;

use crate::state::bank::WidgetState;

#[cfg(feature = "hydrate")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// Handler returned by `Plaid.create`.
        pub type PlaidHandler;

        #[wasm_bindgen(catch, js_namespace = Plaid, js_name = create)]
        pub fn create(config: &js_sys::Object) -> Result<PlaidHandler, JsValue>;

        #[wasm_bindgen(method)]
        pub fn open(this: &PlaidHandler);

        #[wasm_bindgen(method)]
        pub fn destroy(this: &PlaidHandler);
    }
}

#[cfg(feature = "hydrate")]
struct Mounted {
    handler: ffi::PlaidHandler,
    _on_success: wasm_bindgen::closure::Closure<dyn FnMut(String, wasm_bindgen::JsValue)>,
    _on_exit: wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue, wasm_bindgen::JsValue)>,
    _on_load: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(feature = "hydrate")]
impl Drop for Mounted {
    fn drop(&mut self) {
        self.handler.destroy();
    }
}

/// Handle to the widget instance for the current link token.
#[derive(Clone, Copy)]
pub struct PlaidLink {
    state: RwSignal<WidgetState>,
    #[cfg(feature = "hydrate")]
    mounted: StoredValue<Option<Mounted>, LocalStorage>,
}

impl PlaidLink {
    /// Create an unmounted bridge. Must be called inside a reactive owner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(WidgetState::default()),
            #[cfg(feature = "hydrate")]
            mounted: StoredValue::new_local(None),
        }
    }

    /// Create the widget for `token`, replacing any previous instance.
    pub fn mount(&self, token: &str, on_event: Callback<WidgetEvent>) {
        self.unmount();
        #[cfg(feature = "hydrate")]
        {
            match self.create(token, on_event) {
                Ok(mounted) => self.mounted.set_value(Some(mounted)),
                Err(e) => log::error!("plaid: failed to create link handler: {e:?}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, on_event);
        }
    }

    /// Destroy the current widget instance, if any.
    pub fn unmount(&self) {
        self.state.set(WidgetState::default());
        #[cfg(feature = "hydrate")]
        self.mounted.set_value(None);
    }

    #[cfg(feature = "hydrate")]
    fn create(&self, token: &str, on_event: Callback<WidgetEvent>) -> Result<Mounted, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let state = self.state;
        let on_success = Closure::wrap(Box::new(move |public_token: String, _metadata: JsValue| {
            on_event.run(WidgetEvent::Success { public_token });
        }) as Box<dyn FnMut(String, JsValue)>);
        let on_exit = Closure::wrap(Box::new(move |err: JsValue, _metadata: JsValue| {
            if !err.is_null() && !err.is_undefined() {
                log::warn!("plaid: link exited with {err:?}");
            }
            on_event.run(WidgetEvent::Exit);
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        let on_load = Closure::wrap(Box::new(move || {
            state.set(WidgetState { ready: true });
            on_event.run(WidgetEvent::Ready);
        }) as Box<dyn FnMut()>);

        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &JsValue::from_str("token"), &JsValue::from_str(token))?;
        js_sys::Reflect::set(&config, &JsValue::from_str("onSuccess"), on_success.as_ref())?;
        js_sys::Reflect::set(&config, &JsValue::from_str("onExit"), on_exit.as_ref())?;
        js_sys::Reflect::set(&config, &JsValue::from_str("onLoad"), on_load.as_ref())?;

        let handler = ffi::create(&config)?;
        Ok(Mounted { handler, _on_success: on_success, _on_exit: on_exit, _on_load: on_load })
    }
}

impl Default for PlaidLink {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkWidget for PlaidLink {
    fn ready(&self) -> bool {
        self.state.with_untracked(|s| s.ready)
    }

    fn open(&self) {
        #[cfg(feature = "hydrate")]
        self.mounted.with_value(|mounted| {
            if let Some(mounted) = mounted {
                mounted.handler.open();
            }
        });
    }
}
