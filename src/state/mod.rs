// ============================================================================
// STATE MODULE - Estado local por vista con Rc<RefCell> + notificaciones
// ============================================================================
// No hay estado compartido entre vistas: cada vista montada es dueña del suyo.
// ============================================================================

pub mod reactivity;
pub mod fetch_state;
pub mod booking_form;
pub mod mount_scope;

pub use reactivity::*;
pub use fetch_state::*;
pub use booking_form::*;
pub use mount_scope::*;
