// ============================================================================
// RENTING CAR - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI de cada vista
// - Services: SOLO comunicación con los endpoints
// - State: Estado local con Rc<RefCell> + notificaciones
// - Models: Registros compartidos con los endpoints
// - Routing: Rutas del cliente + estado de navegación
// ============================================================================

mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(test)]
mod test_support;

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
    static RERENDER_PENDING: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Renting Car - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Atrás/adelante del navegador: re-render con la ruta nueva.
    // Listener global, se registra una sola vez aquí.
    crate::dom::on_window_event("popstate", |_e| rerender_app())?;

    Ok(())
}

/// Re-render inmediato de la ruta actual
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: si ya hay un render en curso, ese pinta el estado nuevo
        let Ok(mut app) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [RERENDER] Render en curso, se omite");
            return;
        };
        match app.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        }
    });
}

/// Programar un re-render en el siguiente tick (agrupa varios cambios de estado)
pub fn schedule_rerender() {
    use gloo_timers::callback::Timeout;
    if RERENDER_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RERENDER_PENDING.with(|pending| pending.set(false));
        rerender_app();
    })
    .forget();
}
