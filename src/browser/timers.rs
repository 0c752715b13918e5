use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::refresh::{TimerDriver, Trigger};

/// A live `setInterval` registration. Dropping it clears the interval.
struct IntervalHandle {
    id: i32,
    _callback: Closure<dyn Fn()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// `TimerDriver` backed by `window.setInterval`.
pub struct BrowserTimers {
    on_fire: Rc<dyn Fn(Trigger)>,
    active: HashMap<Trigger, IntervalHandle>,
}

impl BrowserTimers {
    pub fn new(on_fire: impl Fn(Trigger) + 'static) -> Self {
        Self {
            on_fire: Rc::new(on_fire),
            active: HashMap::new(),
        }
    }
}

impl TimerDriver for BrowserTimers {
    fn schedule(&mut self, trigger: Trigger, period: Duration) {
        self.cancel(trigger);

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_fire = Rc::clone(&self.on_fire);
        let callback = Closure::wrap(Box::new(move || on_fire(trigger)) as Box<dyn Fn()>);
        let timeout = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => {
                self.active.insert(
                    trigger,
                    IntervalHandle {
                        id,
                        _callback: callback,
                    },
                );
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to schedule {:?} timer: {:?}", trigger, e).into(),
                );
            }
        }
    }

    fn cancel(&mut self, trigger: Trigger) {
        self.active.remove(&trigger);
    }

    fn is_scheduled(&self, trigger: Trigger) -> bool {
        self.active.contains_key(&trigger)
    }
}
