//! Fragment router.
//!
//! Maps `/`-delimited path patterns to view-activation handlers. A
//! segment starting with `:` captures the corresponding path segment
//! under that name; every other segment must match literally.
//!
//! Resolution order:
//! 1. a capture-free pattern that matches the fragment exactly wins
//!    outright, so literal routes can never be shadowed;
//! 2. otherwise patterns are tried in registration order, first match
//!    wins — overlapping capture patterns (say `/edit/:id` and
//!    `/:section/:id`) disambiguate by registration order, which is part
//!    of the routing contract for callers;
//! 3. otherwise the `/` handler runs as a fallback, if registered.
//!
//! No nested routers, no query strings, no multi-segment wildcards.

use std::collections::BTreeMap;

use parking_lot::Mutex;

/// Variables bound by capture segments during a match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

type Handler = Box<dyn Fn(&RouteParams) + Send + Sync>;

enum Segment {
    Literal(String),
    Capture(String),
}

struct Route {
    segments: Vec<Segment>,
    has_captures: bool,
    handler: Handler,
}

struct NavState {
    current: String,
    history: Vec<String>,
}

/// Router over application navigation paths.
///
/// Routes are registered up front; navigation afterwards only needs a
/// shared reference, so the router can be handed around behind an `Arc`.
pub struct Router {
    routes: Vec<Route>,
    nav: Mutex<NavState>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            nav: Mutex::new(NavState {
                current: String::new(),
                history: Vec::new(),
            }),
        }
    }

    /// Register a pattern. See the module docs for the matching rules.
    pub fn on(&mut self, pattern: &str, handler: impl Fn(&RouteParams) + Send + Sync + 'static) {
        let segments: Vec<Segment> = split(pattern)
            .into_iter()
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Capture(name.to_string()),
                None => Segment::Literal(seg.to_string()),
            })
            .collect();
        let has_captures = segments
            .iter()
            .any(|s| matches!(s, Segment::Capture(_)));
        self.routes.push(Route {
            segments,
            has_captures,
            handler: Box::new(handler),
        });
    }

    /// Run resolution for `path`; when a handler ran, make it the current
    /// path and record the old one for [`Router::back`]. A path no handler
    /// claimed leaves the current path and history untouched.
    pub fn navigate(&self, path: &str) -> bool {
        let handled = self.dispatch(path);
        if handled {
            let mut nav = self.nav.lock();
            if nav.current != path {
                let previous = std::mem::replace(&mut nav.current, path.to_string());
                nav.history.push(previous);
            }
        }
        handled
    }

    /// Return to the previously resolved path, if any.
    pub fn back(&self) -> bool {
        let target = {
            let mut nav = self.nav.lock();
            match nav.history.pop() {
                Some(path) => {
                    nav.current = path.clone();
                    path
                }
                None => return false,
            }
        };
        self.dispatch(&target)
    }

    /// The most recently navigated path.
    pub fn current(&self) -> String {
        self.nav.lock().current.clone()
    }

    fn dispatch(&self, fragment: &str) -> bool {
        let frag_segs = split(fragment);

        // 1. Exact match against a capture-free pattern.
        for route in &self.routes {
            if !route.has_captures && route.segments.len() == frag_segs.len() {
                let exact = route
                    .segments
                    .iter()
                    .zip(&frag_segs)
                    .all(|(seg, frag)| matches!(seg, Segment::Literal(lit) if lit == frag));
                if exact {
                    (route.handler)(&RouteParams::default());
                    return true;
                }
            }
        }

        // 2. Registration order, segment by segment.
        for route in &self.routes {
            if route.segments.len() != frag_segs.len() {
                continue;
            }
            if let Some(params) = bind(&route.segments, &frag_segs) {
                (route.handler)(&params);
                return true;
            }
        }

        // 3. Fall back to the root handler.
        for route in &self.routes {
            if route.segments.is_empty() {
                (route.handler)(&RouteParams::default());
                return true;
            }
        }
        false
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a path into segments, ignoring empties from leading/trailing
/// slashes and a leading `#`.
fn split(path: &str) -> Vec<&str> {
    path.trim_start_matches('#')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

fn bind(segments: &[Segment], frag_segs: &[&str]) -> Option<RouteParams> {
    let mut params = BTreeMap::new();
    for (seg, frag) in segments.iter().zip(frag_segs) {
        match seg {
            Segment::Literal(lit) => {
                if lit != frag {
                    return None;
                }
            }
            Segment::Capture(name) => {
                params.insert(name.clone(), (*frag).to_string());
            }
        }
    }
    Some(RouteParams(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Records (tag, bound id) pairs as handlers fire.
    type Log = Arc<Mutex<Vec<(&'static str, Option<String>)>>>;

    fn recording(log: &Log, tag: &'static str) -> impl Fn(&RouteParams) + Send + Sync {
        let log = Arc::clone(log);
        move |params| {
            log.lock()
                .push((tag, params.get("id").map(str::to_string)));
        }
    }

    fn app_router(log: &Log) -> Router {
        let mut router = Router::new();
        router.on("/", recording(log, "list"));
        router.on("/add", recording(log, "add"));
        router.on("/edit/:id", recording(log, "edit"));
        router
    }

    #[test]
    fn literal_route_matches_without_params() {
        let log = Log::default();
        let router = app_router(&log);
        assert!(router.navigate("add"));
        assert_eq!(*log.lock(), vec![("add", None)]);
    }

    #[test]
    fn capture_route_binds_variable() {
        let log = Log::default();
        let router = app_router(&log);
        assert!(router.navigate("edit/42"));
        assert_eq!(*log.lock(), vec![("edit", Some("42".to_string()))]);
    }

    #[test]
    fn literal_wins_over_earlier_registered_capture() {
        let log = Log::default();
        let mut router = Router::new();
        // Capture registered first; the literal must still win.
        router.on("/:id", recording(&log, "capture"));
        router.on("/add", recording(&log, "add"));
        router.navigate("add");
        assert_eq!(*log.lock(), vec![("add", None)]);
    }

    #[test]
    fn overlapping_captures_resolve_in_registration_order() {
        let log = Log::default();
        let mut router = Router::new();
        router.on("/edit/:id", recording(&log, "edit"));
        router.on("/:section/:id", recording(&log, "generic"));
        router.navigate("edit/7");
        router.navigate("view/7");
        assert_eq!(
            *log.lock(),
            vec![
                ("edit", Some("7".to_string())),
                ("generic", Some("7".to_string())),
            ]
        );
    }

    #[test]
    fn unmatched_path_falls_back_to_root() {
        let log = Log::default();
        let router = app_router(&log);
        assert!(router.navigate("no/such/route"));
        assert_eq!(*log.lock(), vec![("list", None)]);
    }

    #[test]
    fn unmatched_path_without_root_does_nothing() {
        let log = Log::default();
        let mut router = Router::new();
        router.on("/add", recording(&log, "add"));
        assert!(!router.navigate("missing"));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn unresolved_path_does_not_commit_navigation() {
        let log = Log::default();
        let mut router = Router::new();
        router.on("/add", recording(&log, "add"));
        router.on("/edit/:id", recording(&log, "edit"));
        router.navigate("add");

        assert!(!router.navigate("missing"));
        assert_eq!(router.current(), "add");
        assert_eq!(*log.lock(), vec![("add", None)]);
    }

    #[test]
    fn slashes_and_hash_are_normalized() {
        let log = Log::default();
        let router = app_router(&log);
        router.navigate("#/edit/9/");
        assert_eq!(*log.lock(), vec![("edit", Some("9".to_string()))]);
    }

    #[test]
    fn empty_fragment_matches_root() {
        let log = Log::default();
        let router = app_router(&log);
        router.navigate("");
        assert_eq!(*log.lock(), vec![("list", None)]);
    }

    #[test]
    fn segment_count_must_match() {
        let log = Log::default();
        let mut router = Router::new();
        router.on("/edit/:id", recording(&log, "edit"));
        assert!(!router.navigate("edit"));
        assert!(!router.navigate("edit/1/extra"));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn back_revisits_previous_path() {
        let log = Log::default();
        let router = app_router(&log);
        router.navigate("");
        router.navigate("add");
        assert!(router.back());
        assert_eq!(router.current(), "");
        assert_eq!(
            *log.lock(),
            vec![("list", None), ("add", None), ("list", None)]
        );
        // History exhausted.
        assert!(!router.back());
    }
}
