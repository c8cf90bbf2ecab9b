// ============================================================================
// BOOKING CAR VIEWMODEL - Crear una reserva para el coche recibido
// ============================================================================
// Fases: MissingCar → LoadingDelegations → FormReady → Submitting
//        → éxito (navegar a /bookings) | fallo (FormReady + aviso)
// ============================================================================

use std::rc::Rc;

use chrono::NaiveDate;

use crate::models::{Car, Delegation};
use crate::routing::{NavigationState, Navigator, Route};
use crate::services::{DelegationEndpoint, Notifier, UserEndpoint};
use crate::state::{BookingForm, FetchState, FormError, ReactiveState};
use crate::utils::today;

pub const MISSING_CAR_MESSAGE: &str =
    "Error: Car data not found. Please navigate from the car list.";
pub const BOOKING_FAILED: &str = "Failed to complete booking";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingCarPhase {
    /// Sin coche en el estado de navegación: pantalla terminal
    MissingCar,
    LoadingDelegations,
    FormReady,
    Submitting,
}

/// Resultado de pulsar "Confirm Booking"
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    Invalid(FormError),
    Failed,
    /// Ya había un envío en curso
    Ignored,
}

/// Usuario y etiqueta de operación de las reservas nuevas
#[derive(Clone, Debug)]
pub struct BookingSession {
    pub user_id: String,
    pub operation: String,
}

#[derive(Clone)]
pub struct BookingCarViewModel<E> {
    endpoints: E,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    session: BookingSession,
    id_hash: String,
    car: Option<Car>,
    delegations: ReactiveState<FetchState<Vec<Delegation>>>,
    form: ReactiveState<BookingForm>,
    submitting: ReactiveState<bool>,
}

impl<E> BookingCarViewModel<E>
where
    E: UserEndpoint + DelegationEndpoint,
{
    pub fn new(
        endpoints: E,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
        session: BookingSession,
        id_hash: impl Into<String>,
        navigation_state: Option<NavigationState>,
    ) -> Self {
        Self {
            endpoints,
            notifier,
            navigator,
            session,
            id_hash: id_hash.into(),
            car: navigation_state.map(|state| state.car),
            delegations: ReactiveState::new(FetchState::Loading),
            form: ReactiveState::new(BookingForm::default()),
            submitting: ReactiveState::new(false),
        }
    }

    pub fn id_hash(&self) -> &str {
        &self.id_hash
    }

    pub fn car(&self) -> Option<&Car> {
        self.car.as_ref()
    }

    pub fn phase(&self) -> BookingCarPhase {
        if self.car.is_none() {
            BookingCarPhase::MissingCar
        } else if self.submitting.get() {
            BookingCarPhase::Submitting
        } else if self.delegations.with(FetchState::is_loading) {
            BookingCarPhase::LoadingDelegations
        } else {
            BookingCarPhase::FormReady
        }
    }

    pub fn form(&self) -> BookingForm {
        self.form.get()
    }

    /// Opciones de los selectores; vacías si la carga falló
    pub fn delegations(&self) -> Vec<Delegation> {
        self.delegations
            .with(|state| state.loaded().cloned().unwrap_or_default())
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        let callback = Rc::new(callback);
        {
            let callback = callback.clone();
            self.delegations.subscribe(move || callback());
        }
        {
            let callback = callback.clone();
            self.form.subscribe(move || callback());
        }
        self.submitting.subscribe(move || callback());
    }

    /// Cargar delegaciones al montar; sin coche no se hace ninguna llamada
    pub async fn load_delegations(&self) {
        if self.car.is_none() {
            log::warn!("⚠️ [BOOKING] Sin coche en el estado de navegación");
            return;
        }
        self.delegations.set(FetchState::Loading);
        let result = self.endpoints.get_all_profile_delegations().await;
        if let Err(e) = &result {
            log::error!("❌ [BOOKING] Error loading delegations: {}", e);
        }
        self.delegations.set(result.into());
    }

    // Formulario

    pub fn min_start_date(&self) -> NaiveDate {
        today()
    }

    pub fn min_end_date(&self) -> NaiveDate {
        self.form.with(|form| form.start_date).unwrap_or_else(today)
    }

    pub fn set_start_date(&self, date: Option<NaiveDate>) {
        self.form.update(|form| form.start_date = date);
    }

    pub fn set_end_date(&self, date: Option<NaiveDate>) {
        self.form.update(|form| form.end_date = date);
    }

    pub fn select_pick_up(&self, delegation_id: &str) {
        let delegation = self.find_delegation(delegation_id);
        self.form.update(|form| form.pick_up = delegation);
    }

    pub fn select_deliver(&self, delegation_id: &str) {
        let delegation = self.find_delegation(delegation_id);
        self.form.update(|form| form.deliver = delegation);
    }

    fn find_delegation(&self, delegation_id: &str) -> Option<Delegation> {
        self.delegations.with(|state| {
            state
                .loaded()
                .and_then(|list| list.iter().find(|d| d.id == delegation_id).cloned())
        })
    }

    /// Validar, enviar a `saveBooking` y navegar a `/bookings`
    ///
    /// El formulario no se toca en ningún caso, así que tras un fallo
    /// se puede reintentar sin volver a rellenarlo.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.submitting.get() {
            return SubmitOutcome::Ignored;
        }

        let booking = match self.form.with(|form| {
            form.to_booking(
                self.car.as_ref(),
                &self.session.user_id,
                &self.session.operation,
            )
        }) {
            Ok(booking) => booking,
            Err(e) => {
                log::info!("✋ [BOOKING] Formulario incompleto: {}", e);
                self.notifier.alert(&e.to_string());
                return SubmitOutcome::Invalid(e);
            }
        };

        self.submitting.set(true);
        let result = self.endpoints.save_booking(&booking).await;
        self.submitting.set(false);

        match result {
            Ok(()) => {
                log::info!("✅ [BOOKING] Reserva {} creada", booking.operation);
                self.navigator.navigate(&Route::Bookings, None);
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::error!("❌ [BOOKING] Booking failed: {}", e);
                self.notifier.alert(BOOKING_FAILED);
                SubmitOutcome::Failed
            }
        }
    }
}
