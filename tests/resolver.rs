use playlist_resolver::resolver::{find_by_video_id, resolve_catalog, resolve_item};
use playlist_resolver::{
    CatalogFile, CatalogItem, ThumbnailRules, TitleKeys, VideoEntry, normalize_title, parse_feed,
    resolve,
};

const SCENARIO_DOC: &str = "<entry><yt:videoId>abc123</yt:videoId><title>Lotus - Live Session</title><published>2024-01-01</published></entry>";

fn playlist() -> Vec<VideoEntry> {
    vec![
        VideoEntry::new("v1", "her egg (Painting Timelapse)", ""),
        VideoEntry::new("v2", "Lotus - 水のほとり", "2025-01-10T09:00:00+00:00"),
        VideoEntry::new("v3", "Lotus (Director's Cut)", ""),
        VideoEntry::new("v4", "Cinema24", ""),
    ]
}

#[test]
fn test_scenario_a_match_found() {
    let entries = parse_feed(SCENARIO_DOC);
    assert_eq!(normalize_title("Lotus"), "lotus");

    let found = resolve("Lotus", &entries).expect("应当匹配");
    assert_eq!(found.video_id, "abc123");
}

#[test]
fn test_scenario_b_no_match() {
    let entries = parse_feed(SCENARIO_DOC);
    assert!(resolve("ruwet", &entries).is_none());
}

#[test]
fn test_first_match_wins() {
    let entries = playlist();
    // v2 和 v3 都能匹配 "lotus"，取前面的
    assert_eq!(resolve("Lotus", &entries).unwrap().video_id, "v2");
    assert_eq!(resolve("LOTUS - anything", &entries).unwrap().video_id, "v2");
}

#[test]
fn test_containment_works_in_both_directions() {
    let entries = playlist();
    // 作品标题比视频标题长
    assert_eq!(resolve("Cinema24 Screening", &entries).unwrap().video_id, "v4");
    // 作品标题是视频标题的一部分
    assert_eq!(resolve("egg", &entries).unwrap().video_id, "v1");
}

#[test]
fn test_empty_sequence_returns_none() {
    assert!(resolve("Lotus", &[]).is_none());
}

#[test]
fn test_title_key_override_by_slug() {
    let entries = playlist();
    let keys = TitleKeys::new().with_override("cinema-24", "Cinema24");

    let item = CatalogItem::new("cinema-24", "シネマ24");
    assert_eq!(keys.key_for_item(&item), "cinema24");
    assert_eq!(resolve_item(&item, &entries, &keys).unwrap().video_id, "v4");

    let untouched = CatalogItem::new("ruwet", "ruwet");
    assert_eq!(keys.key_for_item(&untouched), "ruwet");
    assert!(resolve_item(&untouched, &entries, &keys).is_none());
}

#[test]
fn test_resolve_catalog_keeps_catalog_order() {
    let entries = playlist();
    let items = vec![
        CatalogItem::new("ruwet", "ruwet"),
        CatalogItem::new("lotus", "Lotus"),
        CatalogItem::new("her-egg", "her egg"),
    ];

    let resolutions = resolve_catalog(
        &items,
        &entries,
        &TitleKeys::default(),
        &ThumbnailRules::default(),
    );
    let slugs: Vec<&str> = resolutions.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, ["ruwet", "lotus", "her-egg"]);

    assert!(resolutions[0].entry.is_none());
    assert_eq!(resolutions[1].entry.as_ref().unwrap().video_id, "v2");
    assert_eq!(resolutions[2].entry.as_ref().unwrap().video_id, "v1");
    assert_eq!(resolutions[2].key, "her egg");
}

#[test]
fn test_resolution_serializes_match_field() {
    let entries = playlist();
    let resolutions = resolve_catalog(
        &[CatalogItem::new("ruwet", "ruwet")],
        &entries,
        &TitleKeys::default(),
        &ThumbnailRules::default(),
    );
    let json = serde_json::to_value(&resolutions[0]).unwrap();
    assert_eq!(json["slug"], "ruwet");
    assert!(json["match"].is_null());
    assert!(json["thumbnailUrl"].is_null());
}

#[test]
fn test_thumbnail_quality_per_slug() {
    let entries = playlist();
    let items = vec![
        CatalogItem::new("cinema24", "Cinema24"),
        CatalogItem::new("lotus", "Lotus"),
    ];
    let thumbnails: ThumbnailRules = ["cinema24"].into_iter().collect();

    let resolutions = resolve_catalog(&items, &entries, &TitleKeys::default(), &thumbnails);
    assert_eq!(
        resolutions[0].thumbnail_url.as_deref(),
        Some("https://i.ytimg.com/vi/v4/hqdefault.jpg")
    );
    assert_eq!(
        resolutions[1].thumbnail_url.as_deref(),
        Some("https://i.ytimg.com/vi/v2/maxresdefault.jpg")
    );

    let json = serde_json::to_value(&resolutions[0]).unwrap();
    assert_eq!(json["thumbnailUrl"], "https://i.ytimg.com/vi/v4/hqdefault.jpg");
    // 条目本身的缩略图不变
    assert_eq!(
        json["match"]["thumbnailUrl"],
        "https://i.ytimg.com/vi/v4/maxresdefault.jpg"
    );
}

#[test]
fn test_catalog_file_overrides() {
    let entries = playlist();
    let catalog = CatalogFile::from_json(
        r#"{
            "items": [
                {"slug": "cinema-24", "title": "シネマ24"},
                {"slug": "her-egg", "title": "her egg"}
            ],
            "keys": {"cinema-24": "Cinema24"},
            "thumbnails": {"cinema-24": "hq"}
        }"#,
    )
    .unwrap();

    let resolutions = resolve_catalog(
        &catalog.items,
        &entries,
        &catalog.title_keys(),
        &catalog.thumbnail_rules(ThumbnailRules::default()),
    );
    assert_eq!(resolutions[0].entry.as_ref().unwrap().video_id, "v4");
    assert_eq!(
        resolutions[0].thumbnail_url.as_deref(),
        Some("https://i.ytimg.com/vi/v4/hqdefault.jpg")
    );
    assert_eq!(resolutions[1].entry.as_ref().unwrap().video_id, "v1");
    assert_eq!(
        resolutions[1].thumbnail_url.as_deref(),
        Some("https://i.ytimg.com/vi/v1/maxresdefault.jpg")
    );
}

#[test]
fn test_find_by_video_id() {
    let entries = playlist();
    assert_eq!(find_by_video_id(&entries, "v3").unwrap().title, "Lotus (Director's Cut)");
    assert!(find_by_video_id(&entries, "missing").is_none());
}
