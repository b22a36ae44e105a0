use crate::error::DashboardError;
use crate::platform::PlatformId;

/// Every addressable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Platform(PlatformId),
}

impl AppRoute {
    /// Maps a location path to a route. A single trailing slash is accepted.
    pub fn resolve(path: &str) -> Result<AppRoute, DashboardError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        if trimmed.is_empty() {
            return Ok(AppRoute::Home);
        }
        trimmed
            .strip_prefix('/')
            .and_then(PlatformId::from_slug)
            .map(AppRoute::Platform)
            .ok_or_else(|| DashboardError::UnknownPlatform(path.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Platform(id) => id.path(),
        }
    }

    /// Home followed by every platform in catalog order.
    pub fn all() -> Vec<AppRoute> {
        std::iter::once(AppRoute::Home)
            .chain(PlatformId::ALL.into_iter().map(AppRoute::Platform))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home() {
        assert_eq!(AppRoute::resolve("/"), Ok(AppRoute::Home));
        assert_eq!(AppRoute::resolve(""), Ok(AppRoute::Home));
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            AppRoute::resolve("/grid-smart-pro/"),
            Ok(AppRoute::Platform(PlatformId::GridSmartPro))
        );
    }

    #[test]
    fn test_unknown_paths() {
        for path in ["/nope", "grid-smart-pro", "/grid-smart-pro/tab/2", "//", "/Grid-Smart-Pro"] {
            assert_eq!(
                AppRoute::resolve(path),
                Err(DashboardError::UnknownPlatform(path.to_string())),
                "{}",
                path
            );
        }
    }

    #[test]
    fn test_fifteen_routes() {
        let routes = AppRoute::all();
        assert_eq!(routes.len(), 15);
        for route in routes {
            assert_eq!(AppRoute::resolve(&route.path()), Ok(route));
        }
    }
}
