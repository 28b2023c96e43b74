//! Background work that outlives the view that started it.
//!
//! Tasks run in the root scope through `spawn_forever`, so switching views
//! never cancels a list, upload or delete halfway. View-owned signals may be
//! gone by the time a task finishes; those writes go through
//! [`update_if_mounted`].

use std::time::{Duration, Instant};

use dioxus::prelude::*;

use jzer_core::library::fetch_videos;

use crate::state::AppState;

/// Shortest time the loading state stays on screen.
pub const MIN_LOADING_DISPLAY: Duration = Duration::from_millis(500);

/// Time still to wait so a load that took `elapsed` is visible long enough.
#[must_use]
pub fn remaining_loading_time(elapsed: Duration) -> Option<Duration> {
    MIN_LOADING_DISPLAY
        .checked_sub(elapsed)
        .filter(|remaining| !remaining.is_zero())
}

/// Apply `update` to a signal owned by a view, unless that view has unmounted.
pub fn update_if_mounted<T: 'static, R>(
    mut signal: Signal<T>,
    update: impl FnOnce(&mut T) -> R,
) -> Option<R> {
    match signal.try_write() {
        Ok(mut value) => Some(update(&mut value)),
        Err(error) => {
            tracing::debug!("View closed before its task finished: {error}");
            None
        }
    }
}

/// List the bucket into `state.library`.
///
/// A newer call supersedes any load still in flight; its result is dropped.
pub fn refresh_library(state: AppState) {
    let mut library = state.library;

    let storage = match state.storage_or_error() {
        Ok(storage) => storage,
        Err(message) => {
            tracing::warn!("Skipping video load: {message}");
            return;
        }
    };

    let request = library.write().begin_load();
    spawn_forever(async move {
        let started = Instant::now();
        let result = fetch_videos(storage.as_ref()).await;

        if let Some(remaining) = remaining_loading_time(started.elapsed()) {
            tokio::time::sleep(remaining).await;
        }

        library.write().apply(request, result);
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fast_loads_wait_out_the_minimum() {
        assert_eq!(
            remaining_loading_time(Duration::from_millis(120)),
            Some(Duration::from_millis(380))
        );
    }

    #[test]
    fn slow_loads_do_not_wait() {
        assert_eq!(remaining_loading_time(MIN_LOADING_DISPLAY), None);
        assert_eq!(remaining_loading_time(Duration::from_secs(2)), None);
    }

    #[test]
    fn updates_skip_signals_of_closed_views() {
        let dom = VirtualDom::new(|| rsx! {});
        dom.in_runtime(|| {
            let signal = Signal::new_in_scope(1_u8, ScopeId::ROOT);

            let bumped = update_if_mounted(signal, |value| {
                *value += 1;
                *value
            });
            assert_eq!(bumped, Some(2));

            signal.manually_drop();
            assert_eq!(update_if_mounted(signal, |value| *value), None);
        });
    }
}
