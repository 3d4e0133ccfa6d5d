//! `window.matchMedia` appearance queries.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use ridge_host::{AppearanceListener, AppearanceListenerId, AppearanceQuery, SystemAppearance};
use wasm_bindgen::{closure::Closure, JsCast};

type ChangeClosure = Closure<dyn FnMut(web_sys::MediaQueryListEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<AppearanceListenerId, (web_sys::MediaQueryList, ChangeClosure)>,
}

#[derive(Clone, Default)]
/// Appearance service over `window.matchMedia`.
///
/// Registered closures are owned by the registry and dropped on removal.
pub struct MediaQueryAppearance {
    registry: Rc<RefCell<Registry>>,
}

fn media_query_list(query: AppearanceQuery) -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media(query.media_query())
        .ok()
        .flatten()
}

impl SystemAppearance for MediaQueryAppearance {
    fn matches(&self, query: AppearanceQuery) -> bool {
        media_query_list(query).is_some_and(|list| list.matches())
    }

    fn add_listener(
        &self,
        query: AppearanceQuery,
        listener: AppearanceListener,
    ) -> Option<AppearanceListenerId> {
        let list = media_query_list(query)?;
        let closure = ChangeClosure::new(move |ev: web_sys::MediaQueryListEvent| {
            listener(ev.matches());
        });
        list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .ok()?;

        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = AppearanceListenerId(registry.next_id);
        registry.listeners.insert(id, (list, closure));
        Some(id)
    }

    fn remove_listener(&self, id: AppearanceListenerId) {
        let Some((list, closure)) = self.registry.borrow_mut().listeners.remove(&id) else {
            return;
        };
        let _ = list
            .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    }
}
