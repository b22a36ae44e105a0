use portfolio_common::{
    AppRoute, Catalog, DashboardError, PlatformContent, PlatformId, TabSelection, Trend,
};

fn grid_use_cases() -> Vec<portfolio_common::UseCase> {
    let catalog = Catalog::load().unwrap();
    match AppRoute::resolve("/grid-smart-pro").unwrap() {
        AppRoute::Platform(id) => match &catalog.platform(id).unwrap().content {
            PlatformContent::UseCases(dashboard) => dashboard.use_cases.clone(),
            other => panic!("unexpected content: {:?}", other),
        },
        AppRoute::Home => panic!("resolved to home"),
    }
}

#[test]
fn test_grid_smart_pro_tab_two() {
    let use_cases = grid_use_cases();
    let mut tabs = TabSelection::new(use_cases.len());
    assert_eq!(tabs.select(2), Ok(true));

    let current = tabs.pick(&use_cases).unwrap();
    assert_eq!(current.title, "Smart Grid Management");

    let metrics: Vec<(&str, &str, &str)> = current
        .metrics
        .iter()
        .map(|m| (m.title.as_str(), m.value.as_str(), m.change.as_str()))
        .collect();
    assert_eq!(
        metrics,
        vec![
            ("Smart Meters", "2.4M", "+12%"),
            ("Grid Intelligence", "94.2%", "+3.8%"),
            ("Demand Response", "87.6%", "+5.2%"),
            ("Self-Healing Events", "1,247", "+18%"),
        ]
    );
    assert!(current.metrics.iter().all(|m| m.trend() == Trend::Up));
}

#[test]
fn test_select_yields_exactly_that_use_case() {
    let use_cases = grid_use_cases();
    let mut tabs = TabSelection::new(use_cases.len());
    for k in 0..use_cases.len() {
        tabs.select(k).unwrap();
        assert_eq!(tabs.pick(&use_cases), Some(&use_cases[k]));
    }
}

#[test]
fn test_select_twice_is_idempotent() {
    let use_cases = grid_use_cases();
    let mut tabs = TabSelection::new(use_cases.len());
    tabs.select(3).unwrap();
    let once = tabs;
    assert_eq!(tabs.select(3), Ok(false));
    assert_eq!(tabs, once);
}

#[test]
fn test_out_of_range_tab() {
    let use_cases = grid_use_cases();
    let mut tabs = TabSelection::new(use_cases.len());
    assert_eq!(
        tabs.select(6),
        Err(DashboardError::TabOutOfRange { index: 6, len: 6 })
    );
    assert_eq!(tabs.pick(&use_cases).unwrap().title, "Power Generation");
}

#[test]
fn test_unknown_route_is_an_error() {
    let err = AppRoute::resolve("/grid-smart").unwrap_err();
    assert_eq!(err.to_string(), "no platform at '/grid-smart'");
    assert_eq!(PlatformId::from_slug("grid-smart"), None);
}
