use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::tracker::{RevealTracker, VisibilityMap};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches the given section ids and reveals each one the first time enough
/// of it scrolls into view. All observers are disconnected on unmount.
#[hook]
pub fn use_reveal(section_ids: &'static [&'static str], threshold: f64) -> VisibilityMap {
    let visibility = use_reducer(VisibilityMap::default);

    {
        let dispatcher = visibility.dispatcher();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(RevealTracker::initialize(
                    section_ids.iter().copied(),
                    threshold,
                )));
                let mut watches: Vec<(IntersectionObserver, ObserverCallback)> = Vec::new();

                let document = web_sys::window().and_then(|w| w.document());
                for &id in section_ids {
                    let element = document.as_ref().and_then(|d| d.get_element_by_id(id));
                    let Some(element) = element else {
                        debug!("Section #{} not on page, skipping", id);
                        tracker.borrow_mut().release(id);
                        continue;
                    };

                    let watch_tracker = tracker.clone();
                    let watch_dispatcher = dispatcher.clone();
                    let callback: ObserverCallback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                // The observer only calls back on threshold crossings, so an
                                // intersecting entry is the crossing itself.
                                let fraction = if entry.is_intersecting() {
                                    entry.intersection_ratio().max(threshold)
                                } else {
                                    0.0
                                };
                                if watch_tracker.borrow_mut().record(id, fraction) {
                                    observer.unobserve(&entry.target());
                                    watch_dispatcher.dispatch(id.to_string());
                                }
                            }
                        },
                    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(threshold));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            watches.push((observer, callback));
                        }
                        Err(e) => {
                            info!("IntersectionObserver unavailable for #{}: {:?}", id, e);
                            tracker.borrow_mut().release(id);
                            // Without an observer the section would stay hidden forever.
                            dispatcher.dispatch(id.to_string());
                        }
                    }
                }

                {
                    let tracker = tracker.borrow();
                    info!("Watching {} sections at threshold {}", tracker.watch_count(), tracker.threshold());
                }

                move || {
                    for (observer, _callback) in watches {
                        observer.disconnect();
                    }
                    let mut tracker = tracker.borrow_mut();
                    debug!("Releasing {} pending watches, revealed: {:?}", tracker.watch_count(), tracker.visibility());
                    tracker.release_all();
                }
            },
            (),
        );
    }

    (*visibility).clone()
}
