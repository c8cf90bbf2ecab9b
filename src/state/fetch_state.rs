/// Estado de una petición de datos de referencia
///
/// `Loaded(vacío)` y `Failed` se mantienen distintos aquí aunque la vista
/// decida mostrarlos igual.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_maps_onto_loaded_or_failed() {
        let ok: FetchState<Vec<u8>> = Ok::<_, String>(vec![]).into();
        let err: FetchState<Vec<u8>> = Err::<Vec<u8>, _>("boom").into();

        assert_eq!(ok.loaded(), Some(&vec![]));
        assert!(!ok.is_failed());
        assert_eq!(err, FetchState::Failed("boom".to_string()));
        assert!(FetchState::<()>::default().is_loading());
    }
}
