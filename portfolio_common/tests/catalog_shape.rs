use portfolio_common::{AppRoute, Catalog, ChartKind, Metric, PlatformContent, PlatformId, Trend};

#[test]
fn test_catalog_loads() {
    let catalog = Catalog::load();
    assert!(catalog.is_ok(), "catalog failed to build: {:?}", catalog.err());
}

#[test]
fn test_every_platform_has_route_descriptor_and_entry() {
    let catalog = Catalog::load().unwrap();
    assert_eq!(catalog.descriptors().len(), 14);
    assert_eq!(catalog.platforms().len(), 14);

    for id in PlatformId::ALL {
        let descriptor = catalog.descriptor(id).expect("descriptor");
        assert_eq!(descriptor.route(), id.path());
        assert_eq!(AppRoute::resolve(&descriptor.route()), Ok(AppRoute::Platform(id)));
        assert_eq!(catalog.platform(id).unwrap().id, id);
    }
}

#[test]
fn test_platforms_follow_home_order() {
    let catalog = Catalog::load().unwrap();
    let order: Vec<PlatformId> = catalog.platforms().iter().map(|p| p.id).collect();
    assert_eq!(order, PlatformId::ALL.to_vec());
    let home: Vec<PlatformId> = catalog.descriptors().iter().map(|d| d.id).collect();
    assert_eq!(home, PlatformId::ALL.to_vec());
}

#[test]
fn test_use_case_dashboards_have_valid_charts() {
    let catalog = Catalog::load().unwrap();
    let mut dashboards = 0;
    for platform in catalog.platforms() {
        if let PlatformContent::UseCases(dashboard) = &platform.content {
            dashboards += 1;
            assert_eq!(dashboard.use_cases.len(), 6, "{:?}", platform.id);
            for use_case in &dashboard.use_cases {
                assert_eq!(use_case.metrics.len(), 4);
                assert_eq!(use_case.charts.len(), 2);
                assert!(!use_case.alerts.is_empty(), "{} has no alerts", use_case.title);
                for chart in &use_case.charts {
                    assert!(!chart.data.is_empty(), "{} is empty", chart.title);
                    assert!(chart.data.columns().len() >= 2, "{} is too narrow", chart.title);
                    assert_eq!(chart.data.points().len(), chart.data.len());
                }
            }
        }
    }
    assert_eq!(dashboards, 3);
}

#[test]
fn test_chart_kinds_follow_dashboard_rotation() {
    let catalog = Catalog::load().unwrap();
    let kinds = |id| match &catalog.platform(id).unwrap().content {
        PlatformContent::UseCases(dashboard) => dashboard
            .use_cases
            .iter()
            .map(|u| (u.charts[0].kind, u.charts[1].kind))
            .collect::<Vec<_>>(),
        other => panic!("expected a use-case dashboard, got {:?}", other),
    };

    for pair in kinds(PlatformId::PredictiveOilPro) {
        assert_eq!(pair, (ChartKind::Composed, ChartKind::Area));
    }
    for id in [PlatformId::GridSmartPro, PlatformId::RiskGuardPro] {
        for pair in kinds(id) {
            assert_eq!(pair, (ChartKind::Composed, ChartKind::OverlaidArea));
        }
    }
}

#[test]
fn test_only_grid_dashboard_has_load_readout() {
    let catalog = Catalog::load().unwrap();
    for platform in catalog.platforms() {
        if let PlatformContent::UseCases(dashboard) = &platform.content {
            assert_eq!(dashboard.load_readout, platform.id == PlatformId::GridSmartPro);
        }
    }
}

#[test]
fn test_showcases_have_six_tabs() {
    let catalog = Catalog::load().unwrap();
    let showcases: Vec<_> = catalog
        .platforms()
        .iter()
        .filter_map(|p| match &p.content {
            PlatformContent::Showcase(showcase) => Some(showcase),
            _ => None,
        })
        .collect();
    assert_eq!(showcases.len(), 10);
    for showcase in showcases {
        assert_eq!(showcase.tabs.len(), 6, "{}", showcase.title);
        for tab in &showcase.tabs {
            assert!(tab.alert.headline.is_some(), "{} alert has no headline", tab.label);
            assert!(tab.metrics.iter().all(|m| m.color.is_some()));
        }
    }
}

#[test]
fn test_shared_catalog_is_reused() {
    let first = Catalog::shared().unwrap();
    let second = Catalog::shared().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_trend_follows_plus_prefix_for_every_metric() {
    let catalog = Catalog::load().unwrap();
    let mut metrics: Vec<&Metric> = Vec::new();
    for platform in catalog.platforms() {
        match &platform.content {
            PlatformContent::UseCases(dashboard) => {
                metrics.extend(dashboard.use_cases.iter().flat_map(|uc| uc.metrics.iter()));
            }
            PlatformContent::Showcase(showcase) => {
                metrics.extend(showcase.tabs.iter().flat_map(|tab| tab.metrics.iter()));
            }
            PlatformContent::ModelHub(_) => {}
        }
    }
    // 3 dashboards x 6 use cases + 10 showcases x 6 tabs, 4 tiles each
    assert_eq!(metrics.len(), (3 * 6 + 10 * 6) * 4);

    for metric in metrics {
        let expected = if metric.change.starts_with('+') {
            Trend::Up
        } else {
            Trend::Down
        };
        assert_eq!(metric.trend(), expected, "{}: {}", metric.title, metric.change);
        let green = metric.trend().color() == "#059669";
        assert_eq!(green, metric.change.starts_with('+'), "{}", metric.title);
    }
}
