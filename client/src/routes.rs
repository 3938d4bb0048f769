//! Static route table for the navigation layer.
//!
//! Five history-mode paths, each bound to a route name and a view
//! identifier. The view components themselves are supplied by the embedding
//! application; this layer only owns the bindings. The table is fixed at
//! compile time: no guards, no redirects, no nesting.

/// Identifier of an externally supplied view component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Authors,
    Category,
    Books,
    Members,
    Borrowing,
}

/// One path-to-view binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// The full navigation table. Authors live at the root path.
pub const ROUTES: [Route; 5] = [
    Route {
        path: "/",
        name: "authors",
        view: View::Authors,
    },
    Route {
        path: "/category",
        name: "category",
        view: View::Category,
    },
    Route {
        path: "/books",
        name: "books",
        view: View::Books,
    },
    Route {
        path: "/members",
        name: "members",
        view: View::Members,
    },
    Route {
        path: "/borrowing",
        name: "borrowing",
        view: View::Borrowing,
    },
];

/// Look up the route for a URL path. Trailing slashes are ignored
/// (`/books/` resolves like `/books`); anything else must match exactly.
pub fn resolve(path: &str) -> Option<&'static Route> {
    let normalized = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    ROUTES.iter().find(|route| route.path == normalized)
}

/// Look up a route by its name.
pub fn by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_declared_path_resolves_to_its_view() {
        assert_eq!(resolve("/").unwrap().view, View::Authors);
        assert_eq!(resolve("/category").unwrap().view, View::Category);
        assert_eq!(resolve("/books").unwrap().view, View::Books);
        assert_eq!(resolve("/members").unwrap().view, View::Members);
        assert_eq!(resolve("/borrowing").unwrap().view, View::Borrowing);
    }

    #[test]
    fn no_overlap_between_entries() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        let names: HashSet<_> = ROUTES.iter().map(|r| r.name).collect();
        let views: HashSet<_> = ROUTES.iter().map(|r| r.view).collect();
        assert_eq!(paths.len(), ROUTES.len());
        assert_eq!(names.len(), ROUTES.len());
        assert_eq!(views.len(), ROUTES.len());
    }

    #[test]
    fn trailing_slash_is_normalized() {
        assert_eq!(resolve("/books/").unwrap().name, "books");
        assert_eq!(resolve("/").unwrap().name, "authors");
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(resolve("/loans").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("/books/1").is_none());
    }

    #[test]
    fn by_name_finds_each_route() {
        assert_eq!(by_name("borrowing").unwrap().path, "/borrowing");
        assert!(by_name("admin").is_none());
    }
}
