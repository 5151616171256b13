use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::countdown::{LaunchClock, Tick, TimeLeft};

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub target: DateTime<Utc>,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let clock = use_mut_ref(|| LaunchClock::new(props.target, Utc::now()));
    let time_left = use_state(|| clock.borrow().time_left());

    {
        let clock = clock.clone();
        let time_left = time_left.clone();
        use_effect_with_deps(move |_| {
            let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

            if clock.borrow().is_finished() {
                log::info!("Launch date already reached, countdown stays at zero");
            } else {
                log::debug!("Countdown started, {}s to launch", clock.borrow().time_left().total_seconds());
                let handle = interval_handle.clone();
                let interval = Interval::new(config::COUNTDOWN_TICK_MS, move || {
                    let tick = clock.borrow_mut().tick(Utc::now());
                    match tick {
                        Tick::Running(left) => time_left.set(left),
                        Tick::Finished => {
                            log::info!("Countdown reached launch date");
                            time_left.set(TimeLeft::default());
                            if let Some(interval) = handle.borrow_mut().take() {
                                drop(interval);
                            }
                        }
                    }
                });
                *interval_handle.borrow_mut() = Some(interval);
            }

            move || {
                // Stop ticking on unmount
                if let Some(interval) = interval_handle.borrow_mut().take() {
                    drop(interval);
                }
            }
        }, ());
    }

    let units = [
        (time_left.days, "Days"),
        (time_left.hours, "Hours"),
        (time_left.minutes, "Minutes"),
        (time_left.seconds, "Seconds"),
    ];

    html! {
        <div class="countdown">
            { for units.iter().map(|(value, label)| html! {
                <div class="countdown-unit">
                    <div class="countdown-value">{value}</div>
                    <div class="countdown-label">{label}</div>
                </div>
            }) }
        </div>
    }
}
