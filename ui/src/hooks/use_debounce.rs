use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Returns a copy of `value` that only updates after it has been stable for
/// `delay_ms`. A pending update is cancelled when the value changes again.
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timeout = Timeout::new(delay_ms, move || {
                debounced.set(value);
            });
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}
