//! Navigation
//!
//! Client-side route changes behind a small trait.

use std::rc::Rc;

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Detail route for a single UMKM
pub fn detail_path(id: i64) -> String {
    format!("/umkms/{}", id)
}

/// Navigator backed by the surrounding `<Router>`
///
/// Must be constructed inside a component rendered under the router.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::info!("[NAV] -> {}", path);
        (self.navigate)(path);
    }
}
