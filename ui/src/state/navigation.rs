use std::rc::Rc;

use leptos_router::{use_navigate, NavigateOptions};
use tracing::warn;

/// Browser navigation capability
pub trait Navigator {
    /// Replace the current history entry with `path` (client-side)
    fn replace(&self, path: &str);

    /// Leave the application and load `url` in the browser
    fn redirect(&self, url: &str);
}

/// Navigator backed by the Leptos router and `window.location`
#[derive(Clone)]
pub struct BrowserNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserNavigator {
    /// Build a navigator for the enclosing `<Router>`.
    ///
    /// Must be called while rendering a component inside the router.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn replace(&self, path: &str) {
        (self.navigate)(
            path,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    }

    fn redirect(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window available, cannot redirect to {}", url);
            return;
        };
        if let Err(e) = window.location().assign(url) {
            warn!("Redirect to {} failed: {:?}", url, e);
        }
    }
}
