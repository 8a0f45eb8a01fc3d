//! Tests for loading catalog exports from disk.

use std::fs;
use std::path::{Path, PathBuf};

use amico_catalog::{Catalog, CatalogEnvironment, CatalogError, DatasetQuery, FileCatalog};
use amico_core::{MatchError, MatchOptions, cross_match};

fn temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("amico_catalog_{name}_{}_{stamp}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write catalog");
    path
}

const JSON_CATALOG: &str = r#"[
  {"ldn": "mc14_13TeV.110401.PowhegPythia_P2012_ttbar_nonallhad.merge.AOD.e2928_s1982_s2008_r5787_r5853",
   "physics_short": "PowhegPythia_P2012_ttbar_nonallhad", "type": "AOD", "events": 19979500},
  {"ldn": "mc14_13TeV.147770.Sherpa_CT10_Zee.merge.AOD.e3059_s1982_s2008_r5787_r5853",
   "physics_short": "Sherpa_CT10_Zee", "type": "AOD", "events": null},
  {"ldn": "mc14_13TeV.147770.Sherpa_CT10_Zee.evgen.EVNT.e3059",
   "physics_short": "Sherpa_CT10_Zee", "type": "EVNT"},
  {"ldn": "mc12_8TeV.117050.PowhegPythia_P2011C_ttbar.merge.AOD.e1728_s1581_s1586_r3658_r3549",
   "physics_short": "PowhegPythia_P2011C_ttbar", "type": "AOD"}
]"#;

#[test]
fn loads_json_export_and_queries_it() {
    let dir = temp_dir("json");
    let path = write(&dir, "catalog.json", JSON_CATALOG);

    let catalog = FileCatalog::load(&path).expect("load catalog");
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.source(), Some(path.as_path()));

    let first = catalog
        .list_datasets(&DatasetQuery::new("%mc14_13TeV%"))
        .expect("query 13TeV");
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].physics_short, "PowhegPythia_P2012_ttbar_nonallhad");
    assert_eq!(first[1].physics_short, "Sherpa_CT10_Zee");

    let second = catalog
        .list_datasets(&DatasetQuery::new("%8TeV%"))
        .expect("query 8TeV");
    assert_eq!(second.len(), 1);

    let with_events = catalog
        .list_datasets(
            &DatasetQuery::new("%ttbar_nonallhad%").with_fields(["ldn", "physics_short", "events"]),
        )
        .expect("query events");
    assert_eq!(with_events[0].field("events"), Some("19979500"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn loads_csv_export() {
    let dir = temp_dir("csv");
    let path = write(
        &dir,
        "catalog.csv",
        "ldn,physics_short,type\n\
         mc14_13TeV.1.ttbar, mc14_13TeV_ttbar ,AOD\n\
         mc12_8TeV.2.ttbar,mc12_8TeV_ttbar,AOD\n",
    );

    let catalog = FileCatalog::load(&path).expect("load catalog");
    let records = catalog
        .list_datasets(&DatasetQuery::new("%"))
        .expect("query all");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].physics_short, "mc14_13TeV_ttbar");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn blank_csv_label_loads_and_fails_matching() {
    let dir = temp_dir("blank");
    let path = write(
        &dir,
        "catalog.csv",
        "ldn,physics_short,type\n\
         mc14_13TeV.1.ttbar,mc14_13TeV_ttbar,AOD\n\
         mc12_8TeV.2.ttbar,,AOD\n",
    );

    let catalog = FileCatalog::load(&path).expect("load catalog");
    let first = catalog
        .list_datasets(&DatasetQuery::new("%13TeV%"))
        .expect("query 13TeV");
    let second = catalog
        .list_datasets(&DatasetQuery::new("%8TeV%"))
        .expect("query 8TeV");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].physics_short, "");

    let error = cross_match(&first, &second, &MatchOptions::default())
        .expect_err("blank label cannot be scored");
    match error {
        MatchError::Pair {
            first,
            second,
            source,
        } => {
            assert_eq!(first, "mc14_13TeV.1.ttbar");
            assert_eq!(second, "mc12_8TeV.2.ttbar");
            assert_eq!(
                *source,
                MatchError::InvalidLabel {
                    label: String::new()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn rejects_unknown_format_and_malformed_json() {
    let dir = temp_dir("bad");
    let text = write(&dir, "catalog.txt", "ldn\n");
    assert!(matches!(
        FileCatalog::load(&text),
        Err(CatalogError::UnsupportedFormat { .. })
    ));

    let broken = write(&dir, "catalog.json", "{\"ldn\": ");
    assert!(matches!(
        FileCatalog::load(&broken),
        Err(CatalogError::Json { .. })
    ));

    let no_ldn = write(&dir, "no_ldn.json", r#"[{"physics_short": "x"}]"#);
    assert!(matches!(
        FileCatalog::load(&no_ldn),
        Err(CatalogError::MissingField { .. })
    ));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn environment_prefers_explicit_path() {
    let dir = temp_dir("env");
    let path = write(&dir, "catalog.json", JSON_CATALOG);

    let environment =
        CatalogEnvironment::resolve_with(Some(&path), |_| Some(PathBuf::from("/nonexistent.json")))
            .expect("resolve explicit");
    assert_eq!(environment.path(), path.as_path());
    assert_eq!(environment.open().expect("open").len(), 4);

    let from_env = CatalogEnvironment::resolve_with(None, |name| {
        assert_eq!(name, amico_catalog::CATALOG_ENV_VAR);
        Some(path.clone())
    })
    .expect("resolve from env");
    assert_eq!(from_env.path(), path.as_path());

    fs::remove_dir_all(&dir).expect("cleanup");
}
