use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Текущий маршрут по адресу страницы
fn location_route() -> AppRoute {
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    AppRoute::from_path(&path)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(location_route()),
            left_open: RwSignal::new(true),
        }
    }

    /// Кнопки браузера "назад/вперёд" меняют маршрут
    pub fn init_router_integration(&self) {
        let route = self.route;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let next = location_route();
            log::debug!("popstate -> {}", next.path());
            route.set(next);
        });
    }

    /// Переход с записью в историю
    pub fn navigate(&self, to: AppRoute) {
        let path = to.path();
        log::debug!("navigate -> {}", path);
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&path));
        }
        self.route.set(to);
    }

    /// Переход без новой записи (редиректы guard)
    pub fn redirect(&self, to: AppRoute) {
        let path = to.path();
        log::debug!("redirect -> {}", path);
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
        }
        self.route.set(to);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access navigation state
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
