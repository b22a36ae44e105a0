use portfolio_common::{
    filter_models, AiModel, Catalog, CategoryFilter, ModelCategory, ModelStats, PlatformContent,
    PlatformId, TabSelection,
};

fn hub_tabs() -> [&'static [AiModel]; 2] {
    let catalog = Catalog::shared().unwrap();
    match &catalog.platform(PlatformId::AiModelHub).unwrap().content {
        PlatformContent::ModelHub(hub) => [hub.tabs[0].models, hub.tabs[1].models],
        other => panic!("unexpected content: {:?}", other),
    }
}

#[test]
fn test_all_is_identity() {
    for models in hub_tabs() {
        let filtered = filter_models(models, CategoryFilter::All);
        assert_eq!(filtered.len(), models.len());
        assert!(filtered.iter().zip(models).all(|(a, b)| a.id == b.id));
    }
}

#[test]
fn test_filter_is_ordered_subsequence() {
    let [hugging_face, _] = hub_tabs();
    let multimodal = filter_models(hugging_face, CategoryFilter::Only(ModelCategory::Multimodal));
    let ids: Vec<&str> = multimodal.iter().map(|m| m.id).collect();
    assert_eq!(
        ids,
        vec!["qwen3-vl-30b", "gpt-5", "llama-4-scout", "gemini-2-5-pro", "mistral-medium-3"]
    );

    let reasoning = filter_models(hugging_face, CategoryFilter::Only(ModelCategory::Reasoning));
    assert_eq!(reasoning.len(), 1);
    assert_eq!(reasoning[0].name, "DeepSeek V3.1");
}

#[test]
fn test_filter_can_be_empty() {
    let [hugging_face, avix] = hub_tabs();
    assert!(filter_models(hugging_face, CategoryFilter::Only(ModelCategory::Audio)).is_empty());
    assert!(filter_models(avix, CategoryFilter::Only(ModelCategory::Language)).is_empty());
}

#[test]
fn test_stats_per_tab() {
    let [hugging_face, avix] = hub_tabs();
    assert_eq!(
        ModelStats::of(hugging_face),
        ModelStats {
            total: 8,
            trending: 7,
            average_performance: 94,
            open_source: 4,
        }
    );
    assert_eq!(
        ModelStats::of(avix),
        ModelStats {
            total: 2,
            trending: 1,
            average_performance: 86,
            open_source: 0,
        }
    );
}

#[test]
fn test_switching_tabs_resets_filter() {
    let tabs_data = hub_tabs();
    let mut tabs = TabSelection::with_category_filter(tabs_data.len());
    tabs.set_category(CategoryFilter::Only(ModelCategory::Vision)).unwrap();
    assert!(filter_models(tabs_data[tabs.index()], tabs.category()).is_empty());

    tabs.select(1).unwrap();
    assert_eq!(tabs.category(), CategoryFilter::All);
    assert_eq!(filter_models(tabs_data[tabs.index()], tabs.category()).len(), 2);
}
