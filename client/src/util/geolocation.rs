//! Device position via the browser Geolocation API.
//!
//! The callback-based browser API is bridged to a future with a oneshot
//! channel. SSR and non-browser builds report the API as unsupported.

use crate::state::location::GeoOutcome;

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

/// Why no position was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoError {
    Unsupported,
    Denied,
}

/// Current device position as `(latitude, longitude)` in degrees.
///
/// # Errors
///
/// [`GeoError::Unsupported`] when the API is missing, [`GeoError::Denied`]
/// when the user or the device refuses.
pub async fn current_position() -> Result<(f64, f64), GeoError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::channel::oneshot;
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let geolocation = web_sys::window()
            .ok_or(GeoError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| GeoError::Unsupported)?;

        let (tx, rx) = oneshot::channel::<Result<(f64, f64), GeoError>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let tx_ok = Rc::clone(&tx);
        let on_success = Closure::once(move |position: web_sys::GeolocationPosition| {
            let coords = position.coords();
            if let Some(tx) = tx_ok.borrow_mut().take() {
                let _ = tx.send(Ok((coords.latitude(), coords.longitude())));
            }
        });
        let tx_err = Rc::clone(&tx);
        let on_error = Closure::once(move |_err: web_sys::GeolocationPositionError| {
            if let Some(tx) = tx_err.borrow_mut().take() {
                let _ = tx.send(Err(GeoError::Denied));
            }
        });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|_| GeoError::Unsupported)?;

        // Closures stay alive until the browser answers.
        let result = rx.await.unwrap_or(Err(GeoError::Denied));
        drop((on_success, on_error));
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GeoError::Unsupported)
    }
}

impl GeoError {
    /// The location outcome this failure maps to.
    pub fn outcome(self) -> GeoOutcome {
        match self {
            Self::Unsupported => GeoOutcome::Unsupported,
            Self::Denied => GeoOutcome::Denied,
        }
    }
}
