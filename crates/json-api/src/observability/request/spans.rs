//! Route labels for request logs.

use uuid::Uuid;

/// Replaces UUID path segments so log lines for the same route group together.
pub(super) fn route_for_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut route = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            route.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            route.push_str("{id}");
        } else {
            route.push_str(segment);
        }
    }

    route
}
