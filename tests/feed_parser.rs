use playlist_resolver::parse_feed;
use playlist_resolver::parser::{scanner, xml_parser};

// 与 YouTube 实际返回的结构一致（精简）
const PLAYLIST_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015" xmlns:media="http://search.yahoo.com/mrss/" xmlns="http://www.w3.org/2005/Atom">
 <link rel="self" href="http://www.youtube.com/feeds/videos.xml?playlist_id=PLLM2ZXSPjDlMVliPsBX7VWxTZQLunGjid"/>
 <id>yt:playlist:PLLM2ZXSPjDlMVliPsBX7VWxTZQLunGjid</id>
 <yt:playlistId>PLLM2ZXSPjDlMVliPsBX7VWxTZQLunGjid</yt:playlistId>
 <title>Artworks</title>
 <published>2023-11-02T08:12:44+00:00</published>
 <entry>
  <id>yt:video:abc123</id>
  <yt:videoId>abc123</yt:videoId>
  <yt:channelId>UCxxxxxxxxxxxxxxxxxxxxxx</yt:channelId>
  <title>Lotus - Live Session</title>
  <link rel="alternate" href="https://www.youtube.com/watch?v=abc123"/>
  <published>2025-01-10T09:00:00+00:00</published>
  <media:group>
   <media:title>Lotus - Live Session</media:title>
   <media:thumbnail url="https://i2.ytimg.com/vi/abc123/hqdefault.jpg" width="480" height="360"/>
  </media:group>
 </entry>
 <entry>
  <id>yt:video:def456</id>
  <yt:videoId>def456</yt:videoId>
  <title>ruwet (short ver.) &amp; more</title>
  <published>2025-02-01T09:00:00+00:00</published>
 </entry>
 <entry>
  <id>yt:video:ghi789</id>
  <yt:videoId>ghi789</yt:videoId>
  <title>Cinema24</title>
 </entry>
</feed>"#;

#[test]
fn test_parse_full_atom_feed() {
    let entries = parse_feed(PLAYLIST_FEED);

    let ids: Vec<&str> = entries.iter().map(|e| e.video_id.as_str()).collect();
    assert_eq!(ids, ["abc123", "def456", "ghi789"]);

    // feed 级别的 title / published 不会混入
    assert_eq!(entries[0].title, "Lotus - Live Session");
    assert_eq!(entries[0].published, "2025-01-10T09:00:00+00:00");
    assert_eq!(entries[1].title, "ruwet (short ver.) & more");
    assert_eq!(entries[2].published, "");
    assert_eq!(
        entries[2].thumbnail_url,
        "https://i.ytimg.com/vi/ghi789/maxresdefault.jpg"
    );
}

#[test]
fn test_scenario_a_single_fragment() {
    let doc = "<entry><yt:videoId>abc123</yt:videoId><title>Lotus - Live Session</title><published>2024-01-01</published></entry>";
    let entries = parse_feed(doc);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].video_id, "abc123");
    assert_eq!(entries[0].title, "Lotus - Live Session");
    assert_eq!(entries[0].published, "2024-01-01");
    assert_eq!(entries[0].url, "https://www.youtube.com/watch?v=abc123");
}

#[test]
fn test_scenario_c_entry_missing_video_id_is_dropped() {
    let doc = "<feed>\
        <entry><title>no id here</title><published>2024-01-01</published></entry>\
        <entry><yt:videoId>ok1</yt:videoId><title>Lotus</title></entry>\
        </feed>";
    let entries = parse_feed(doc);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].video_id, "ok1");
    assert_eq!(entries[0].title, "Lotus");
}

#[test]
fn test_malformed_entries_do_not_affect_neighbours() {
    let doc = "\
        <entry><yt:videoId>a</yt:videoId><title>A</title></entry>\
        <entry><yt:videoId>b</yt:videoId></entry>\
        <entry><yt:videoId>c</yt:videoId><title>C</title></entry>\
        <entry><yt:videoId></yt:videoId><title>empty id</title></entry>\
        <entry><yt:videoId>e</yt:videoId><title>E</title>";
    let entries = parse_feed(doc);

    let ids: Vec<&str> = entries.iter().map(|e| e.video_id.as_str()).collect();
    assert_eq!(ids, ["a", "c", "e"]);
}

#[test]
fn test_n_entries_in_document_order_without_dedup() {
    let mut doc = String::from("<feed><title>feed</title>");
    for i in 0..25 {
        doc.push_str(&format!(
            "<entry><yt:videoId>v{}</yt:videoId><title>Video {}</title></entry>",
            i % 10,
            i
        ));
    }
    doc.push_str("</feed>");

    let entries = parse_feed(&doc);
    assert_eq!(entries.len(), 25);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.title, format!("Video {}", i));
        assert_eq!(entry.video_id, format!("v{}", i % 10));
    }
}

#[test]
fn test_both_strategies_agree_on_plain_feed() {
    let doc = "<feed xmlns:yt=\"http://www.youtube.com/xml/schemas/2015\">\
        <title>feed</title>\
        <entry><yt:videoId>a</yt:videoId><title> A </title><published>p1</published></entry>\
        <entry><title>no id</title></entry>\
        <entry><yt:videoId>b</yt:videoId><title>B</title></entry>\
        </feed>";

    let structured = xml_parser::parse_document(doc).expect("合法 XML");
    let scanned = scanner::scan_entries(doc);
    assert_eq!(structured, scanned);
    assert_eq!(structured.len(), 2);
}

#[test]
fn test_empty_or_garbage_documents() {
    assert!(parse_feed("").is_empty());
    assert!(parse_feed("<html><body>error</body></html>").is_empty());
    assert!(parse_feed("not xml at all <entry>").is_empty());
}
