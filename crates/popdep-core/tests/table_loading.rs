//! # Loader and Query Tests Over a Sample INSEE File
//!
//! The fixture mirrors the layout of `estim-pop-dep-2023.csv`: merged group
//! cells on the first header row, space-separated thousands, a national
//! subtotal row and a trailing footnote line.

use std::io::Write;

use popdep_core::{
    is_listed_code, ColumnLabel, PopulationError, PopulationTable, FRANCE_ID, FRANCE_NAME,
};

const FIXTURE: &str = include_str!("fixtures/estim-pop-dep-sample.csv");

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/estim-pop-dep-sample.csv")
}

fn table() -> PopulationTable {
    PopulationTable::from_reader(FIXTURE.as_bytes()).expect("fixture loads")
}

// -- Loading ------------------------------------------------------------------

#[test]
fn loads_from_path() {
    let table = PopulationTable::from_path(fixture_path()).unwrap();
    assert_eq!(table.len(), 8);
    assert_eq!(table.listed_count(), 6);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = PopulationTable::from_path("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, PopulationError::Io { .. }));
}

#[test]
fn header_is_repaired() {
    let table = table();
    let columns = table.columns();
    assert_eq!(columns.len(), 20);
    assert_eq!(columns[0], ColumnLabel::new("Départements", "Code"));
    assert_eq!(columns[1], ColumnLabel::new("Départements", "Nom"));
    assert_eq!(columns[7], ColumnLabel::new("Ensemble", "Total"));
    assert_eq!(columns[8], ColumnLabel::new("Hommes", "0-19"));
    assert_eq!(columns[19], ColumnLabel::new("Femmes", "Total"));
}

#[test]
fn loads_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    let table = PopulationTable::from_path(file.path()).unwrap();
    assert_eq!(table.len(), 8);
}

#[test]
fn header_only_file_loads_empty() {
    let header: String = FIXTURE.lines().take(2).map(|l| format!("{l}\n")).collect();
    let table = PopulationTable::from_reader(header.as_bytes()).unwrap();
    assert!(table.is_empty());
    assert!(table.list_departments().is_empty());
}

// -- List all -----------------------------------------------------------------

#[test]
fn list_keeps_source_order_and_drops_non_departments() {
    let ids: Vec<String> = table().list_departments().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["01", "03", "2A", "2B", "971", "975"]);
}

#[test]
fn every_listed_id_passes_the_allowlist() {
    for record in table().list_departments() {
        assert!(is_listed_code(&record.id), "{}", record.id);
    }
}

#[test]
fn ain_scenario() {
    let ain = table().list_departments().into_iter().next().unwrap();
    let json = serde_json::to_value(&ain).unwrap();

    assert_eq!(json["id"], "01");
    assert_eq!(json["nom"], "Ain");
    assert_eq!(json["ensemble"]["total"], 652_966);
    assert_eq!(json["ensemble"]["0_19"], 165_880);
    assert_eq!(json["hommes"]["75_plus"], 22_000);
    assert_eq!(json["femmes"]["total"], 331_966);
}

#[test]
fn unparseable_cells_are_null() {
    let allier = table().find_department("03").unwrap();
    assert_eq!(allier.ensemble.age_75_plus, None);
    assert_eq!(allier.hommes.age_0_19, None);
    assert_eq!(allier.ensemble.total, Some(335_000));
}

// -- Get by code --------------------------------------------------------------

#[test]
fn get_present_code() {
    let record = table().find_department("01").unwrap();
    assert_eq!(record.id, "01");
    assert_eq!(record.name, "Ain");
}

#[test]
fn get_absent_code() {
    assert!(table().find_department("999").is_none());
}

#[test]
fn row_codes_are_trimmed_before_matching() {
    let record = table().find_department("2B").unwrap();
    assert_eq!(record.id, "2B");
    assert_eq!(record.name, "Haute-Corse");
}

#[test]
fn requested_code_is_not_trimmed() {
    assert!(table().find_department(" 2B ").is_none());
}

#[test]
fn get_reaches_rows_the_listing_filters_out() {
    let table = table();
    let metro = table.find_department("France métropolitaine").unwrap();

    assert_eq!(metro.ensemble.total, Some(65_334_837));
    assert!(metro.hommes.total.is_none());
    assert!(!table.list_departments().iter().any(|r| r.id == metro.id));
}

#[test]
fn listed_records_round_trip_through_get() {
    let table = table();
    for listed in table.list_departments() {
        let fetched = table.find_department(&listed.id).unwrap();
        assert_eq!(fetched, listed);
    }
}

// -- National summary ---------------------------------------------------------

#[test]
fn france_summary_sums_listed_departments() {
    let france = table().france_summary();

    assert_eq!(france.id, FRANCE_ID);
    assert_eq!(france.name, FRANCE_NAME);
    assert_eq!(france.ensemble.total, Some(1_702_966));
    assert_eq!(france.ensemble.age_75_plus, Some(140_453));
    assert_eq!(france.hommes.age_0_19, Some(167_500));
    assert_eq!(france.femmes.total, Some(884_516));
}
