/// Aviso modal al usuario (bloqueante en el navegador)
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert`
#[derive(Clone, Copy, Default)]
pub struct WindowNotifier;

impl Notifier for WindowNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                if let Err(e) = win.alert_with_message(message) {
                    log::warn!("⚠️ [ALERT] No se pudo mostrar el aviso: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [ALERT] Sin window: {}", message),
        }
    }
}
