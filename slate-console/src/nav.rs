//! Sidebar navigation tree
//!
//! Maps the per-user route forest from `/api/system/router/user` into
//! the flat display shape the sidebar renders.

use shared::client::{NavItem, RouteNode};

/// Build the sidebar tree from the route forest
pub fn build_nav_tree(routes: &[RouteNode]) -> Vec<NavItem> {
    routes
        .iter()
        .map(|route| NavItem {
            path: route.path.clone(),
            name: route.name.clone(),
            title: route.meta.title.clone(),
            icon: route.meta.icon.clone(),
            hidden: route.meta.hidden,
            children: route
                .children
                .as_deref()
                .map(build_nav_tree)
                .unwrap_or_default(),
        })
        .collect()
}

/// Visible items only, recursively
pub fn visible_items(items: &[NavItem]) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| !item.hidden)
        .map(|item| NavItem {
            children: visible_items(&item.children),
            ..item.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::RouteMeta;

    fn route(path: &str, title: &str, hidden: bool, children: Option<Vec<RouteNode>>) -> RouteNode {
        RouteNode {
            path: path.to_string(),
            name: path.trim_start_matches('/').to_string(),
            component: "Layout".to_string(),
            meta: RouteMeta {
                title: title.to_string(),
                icon: "dot".to_string(),
                roles: None,
                permissions: None,
                hidden,
                keep_alive: false,
            },
            children,
        }
    }

    #[test]
    fn test_nav_tree_maps_meta() {
        let routes = vec![route(
            "/system",
            "System",
            false,
            Some(vec![route("/system/menu", "Menus", false, None)]),
        )];
        let nav = build_nav_tree(&routes);

        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].title, "System");
        assert_eq!(nav[0].children.len(), 1);
        assert_eq!(nav[0].children[0].path, "/system/menu");
    }

    #[test]
    fn test_no_children_maps_to_empty() {
        let nav = build_nav_tree(&[route("/home", "Home", false, None)]);
        assert!(nav[0].children.is_empty());
    }

    #[test]
    fn test_hidden_items_filtered() {
        let routes = vec![
            route("/a", "A", false, None),
            route("/b", "B", true, None),
        ];
        let nav = visible_items(&build_nav_tree(&routes));
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].path, "/a");
    }
}
