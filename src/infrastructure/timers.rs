use gloo_timers::callback::Timeout;

/// Run `callback` once after `delay_ms`. The timer is detached: it cannot be
/// cancelled and never re-arms.
pub fn schedule_once<F>(delay_ms: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, callback).forget();
}
