//! CSV extracts written from a report on disk

use placecheck::config::ExportConfig;
use placecheck::export::{export_report, render_csv};
use placecheck::rules::IssueKind;
use serde_json::json;

mod support;
use support::builders::PlaceBuilder;
use support::harness::CorpusHarness;

fn export(harness: &CorpusHarness) {
    let report = harness.audit().unwrap();
    report.write_to_dir(&harness.dest).unwrap();
    let written = export_report(&harness.report_path(), &ExportConfig::default()).unwrap();
    assert_eq!(written.len(), IssueKind::ALL.len());
}

#[test]
fn test_rows_sorted_numerically() {
    let harness = CorpusHarness::new();
    for id in ["100", "9", "20"] {
        harness.write_record(
            &format!("{}.json", id),
            &PlaceBuilder::new(id).title(&format!("Vicus {}?", id)).build(),
        );
    }
    export(&harness);

    let csv = harness.read_csv("question_mark_titles");
    assert_eq!(
        csv,
        "pid,uri,title\r\n\
         9,https://pleiades.stoa.org/places/9,Vicus 9?\r\n\
         20,https://pleiades.stoa.org/places/20,Vicus 20?\r\n\
         100,https://pleiades.stoa.org/places/100,Vicus 100?\r\n"
    );
}

#[test]
fn test_every_kind_gets_a_file() {
    let harness = CorpusHarness::new();
    harness.write_record("1.json", &PlaceBuilder::new("1").build());
    export(&harness);

    for kind in IssueKind::ALL {
        let csv = harness.read_csv(kind.as_str());
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("pid,uri,title"), "{}: {}", kind, header);
        assert_eq!(csv.lines().count(), 1, "{} should have no rows", kind);
    }
    assert_eq!(
        harness.read_csv("poor_accuracy"),
        "pid,uri,title,minimum,maximum\r\n"
    );
}

#[test]
fn test_detail_columns() {
    let harness = CorpusHarness::new();
    harness.write_record(
        "7.json",
        &PlaceBuilder::new("7")
            .title("Colonia, Agrippina")
            .place_types(&["temple", "fort"])
            .locations(json!([]))
            .location("a", Some(1200.0), "GPS")
            .location("b", Some(4000.5), "GPS")
            .names(json!([
                {"id": "n1", "attested": "", "language": "la", "romanized": "Colonia, Colonia Agrippina", "start": 50},
                {"id": "n2", "attested": "Köln", "language": "de", "romanized": "Koeln", "start": 1600}
            ]))
            .reference("https://www.zotero.org/groups/2533/items/bad", "Broken")
            .description("cited: BAtlas 11 B3")
            .build(),
    );
    export(&harness);

    let uri = "https://pleiades.stoa.org/places/7";
    assert_eq!(
        harness.read_csv("poor_accuracy"),
        format!(
            "pid,uri,title,minimum,maximum\r\n7,{},\"Colonia, Agrippina\",1200.0,4000.5\r\n",
            uri
        )
    );
    assert_eq!(
        harness.read_csv("bad_place_type"),
        format!(
            "pid,uri,title,place_types\r\n7,{},\"Colonia, Agrippina\",fort|temple\r\n",
            uri
        )
    );
    assert_eq!(
        harness.read_csv("names_romanized_only"),
        format!(
            "pid,uri,title,names\r\n7,{},\"Colonia, Agrippina\",:la:Colonia/Colonia Agrippina|Köln:de:Koeln\r\n",
            uri
        )
    );
    assert_eq!(
        harness.read_csv("references_with_invalid_zotero"),
        format!(
            "pid,uri,title,invalid_zotero\r\n7,{},\"Colonia, Agrippina\",\"7:https://www.zotero.org/groups/2533/items/bad>Broken>Broken, p. 1\"\r\n",
            uri
        )
    );
    assert_eq!(
        harness.read_csv("inadequate_description"),
        format!(
            "pid,uri,title,description\r\n7,{},\"Colonia, Agrippina\",cited: BAtlas 11 B3\r\n",
            uri
        )
    );
}

#[test]
fn test_osm_way_and_without_zotero_columns() {
    let harness = CorpusHarness::new();
    harness.write_record(
        "7.json",
        &PlaceBuilder::new("7")
            .locations(json!([]))
            .location("w1", Some(20.0), "OpenStreetMap (Way 4411, version 3)")
            .location("w2", Some(30.0), "OpenStreetMap (Way 4412, version 1)")
            .reference("https://example.org/x", "Ex")
            .build(),
    );
    export(&harness);

    let uri = "https://pleiades.stoa.org/places/7";
    assert_eq!(
        harness.read_csv("bad_osm_way"),
        format!("pid,uri,title,osm_way_ids\r\n7,{},Place 7,w1|w2\r\n", uri)
    );
    assert_eq!(
        harness.read_csv("references_without_zotero"),
        format!(
            "pid,uri,title,without_zotero\r\n7,{},Place 7,\"7:>p. 1>Ex, p. 1\"\r\n",
            uri
        )
    );
}

#[test]
fn test_custom_uri_base() {
    let harness = CorpusHarness::new();
    harness.write_record("3.json", &PlaceBuilder::new("3").description("").build());
    let report = harness.audit().unwrap();

    let config = ExportConfig {
        place_uri_base: "https://gazetteer.example/p/".to_string(),
    };
    let csv = render_csv(&report, IssueKind::EmptyDescription, &config).unwrap();
    assert_eq!(
        csv,
        "pid,uri,title,description\r\n3,https://gazetteer.example/p/3,Place 3,\r\n"
    );
}

#[test]
fn test_missing_report_is_an_error() {
    let harness = CorpusHarness::new();
    let err = export_report(&harness.report_path(), &ExportConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read report"));
}
