// ============================================================================
// MOUNT SCOPE - Peticiones atadas a la vida de una vista montada
// ============================================================================
// Al desmontar la vista (cambio de ruta) se abortan todas sus peticiones
// en curso: ningún resultado llega a tocar el estado después.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use futures::future::{AbortHandle, Abortable};

type Handles = RefCell<Vec<AbortHandle>>;

/// Dueño de las peticiones de una vista; aborta todo en `Drop`
pub struct MountScope {
    label: &'static str,
    handles: Rc<Handles>,
}

/// Referencia débil que guardan los event handlers del DOM
#[derive(Clone)]
pub struct ScopeHandle {
    label: &'static str,
    handles: Weak<Handles>,
}

impl MountScope {
    pub fn new(label: &'static str) -> Self {
        log::debug!("📌 [{}] Vista montada", label);
        Self {
            label,
            handles: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            label: self.label,
            handles: Rc::downgrade(&self.handles),
        }
    }

    /// Envolver un futuro para que se aborte con el scope
    pub fn guard<F: Future>(&self, future: F) -> Abortable<F> {
        register(&self.handles, future)
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        spawn_guarded(self.label, self.guard(future));
    }

    /// Abortar todas las peticiones en curso
    pub fn cancel_all(&self) {
        let handles: Vec<AbortHandle> = self.handles.borrow_mut().drain(..).collect();
        if !handles.is_empty() {
            log::debug!("🛑 [{}] Abortando {} peticiones", self.label, handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }
}

impl Drop for MountScope {
    fn drop(&mut self) {
        self.cancel_all();
        log::debug!("📤 [{}] Vista desmontada", self.label);
    }
}

impl ScopeHandle {
    /// Igual que `MountScope::guard`; `None` si la vista ya se desmontó
    pub fn guard<F: Future>(&self, future: F) -> Option<Abortable<F>> {
        let handles = self.handles.upgrade()?;
        Some(register(&handles, future))
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        match self.guard(future) {
            Some(guarded) => spawn_guarded(self.label, guarded),
            None => log::warn!("⚠️ [{}] Vista desmontada, acción ignorada", self.label),
        }
    }
}

fn register<F: Future>(handles: &Handles, future: F) -> Abortable<F> {
    let (handle, registration) = AbortHandle::new_pair();
    let mut handles = handles.borrow_mut();
    handles.retain(|h| !h.is_aborted());
    handles.push(handle);
    Abortable::new(future, registration)
}

fn spawn_guarded<F>(label: &'static str, guarded: Abortable<F>)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        if guarded.await.is_err() {
            log::debug!("🛑 [{}] Petición cancelada al desmontar", label);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::Aborted;

    #[test]
    fn guarded_future_completes_while_mounted() {
        let scope = MountScope::new("TEST");
        let guarded = scope.guard(async { 7 });
        assert_eq!(block_on(guarded), Ok(7));
    }

    #[test]
    fn dropping_the_scope_aborts_pending_work() {
        let scope = MountScope::new("TEST");
        let applied = Rc::new(RefCell::new(false));
        let guarded = {
            let applied = applied.clone();
            scope.guard(async move {
                *applied.borrow_mut() = true;
            })
        };

        drop(scope);

        assert_eq!(block_on(guarded), Err(Aborted));
        assert!(!*applied.borrow());
    }

    #[test]
    fn handle_stops_accepting_work_after_unmount() {
        let scope = MountScope::new("TEST");
        let handle = scope.handle();
        assert!(handle.guard(async {}).is_some());

        drop(scope);

        assert!(handle.guard(async {}).is_none());
    }

    #[test]
    fn work_guarded_through_a_handle_is_aborted_with_the_scope() {
        let scope = MountScope::new("TEST");
        let guarded = scope.handle().guard(async { "late" }).unwrap();
        scope.cancel_all();
        assert_eq!(block_on(guarded), Err(Aborted));
    }
}
