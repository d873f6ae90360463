use std::fs;

use facility_catalog::config::Config;
use facility_catalog::ingest::build_catalog;
use facility_catalog::models::FacilityType;
use facility_catalog::traits::{AdapterRegistry, LoadContext, LoadOutcome};
use facility_catalog::vocabulary::Vocabulary;
use tempfile::TempDir;

const AAS_TWO_ROWS: &str = r#"<VOTABLE><RESOURCE><TABLE>
<FIELD name="ID"/><FIELD name="Name"/><FIELD name="Location"/>
<FIELD name="Gamma-Ray"/><FIELD name="X-Ray"/><FIELD name="Ultraviolet"/><FIELD name="Optical"/>
<FIELD name="Infrared"/><FIELD name="Millimeter"/><FIELD name="Radio"/><FIELD name="Particles"/>
<FIELD name="Solar"/>
<DATA><TABLEDATA>
<TR><TD>Chandra</TD><TD>Chandra X-ray Observatory</TD><TD>Space</TD><TD>&#160;</TD><TD>x</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD></TR>
<TR><TD>VLT</TD><TD>Very Large Telescope</TD><TD>Chile</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>x</TD><TD>x</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD></TR>
</TABLEDATA></DATA></TABLE></RESOURCE></VOTABLE>"#;

const PPI_DUMP: &str = r#"{"response": {"docs": [
    {"SPACECRAFT_NAME": ["Voyager 1"], "MISSION_NAME": "Voyager",
     "INSTRUMENT_NAME": ["Magnetometer"], "INSTRUMENT_ID": ["MAG"],
     "TARGET_NAME": ["Jupiter", "Saturn"]},
    {"SPACECRAFT_NAME": ["Voyager 1"], "MISSION_NAME": "Voyager",
     "INSTRUMENT_NAME": ["Plasma Science"], "INSTRUMENT_ID": ["PLS"],
     "TARGET_NAME": ["Saturn", "Solar Wind"]}
]}}"#;

#[test]
fn aas_space_row_is_spacecraft_and_ground_row_is_observatory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("AAS.xml"), AAS_TWO_ROWS).unwrap();
    let vocabulary = Vocabulary::default();
    let ctx = LoadContext::new(tmp.path(), &vocabulary);

    let registry = AdapterRegistry::builtin();
    let aas = registry.find("aas").unwrap();
    let catalog = aas.load(&ctx).unwrap().into_catalog();

    assert_eq!(catalog.len(), 2);
    let spacecraft: Vec<&String> = catalog
        .iter()
        .filter(|(_, r)| r.facility_type == Some(FacilityType::Spacecraft))
        .map(|(k, _)| k)
        .collect();
    let observatories: Vec<&String> = catalog
        .iter()
        .filter(|(_, r)| r.facility_type == Some(FacilityType::Observatory))
        .map(|(k, _)| k)
        .collect();
    assert_eq!(spacecraft, vec!["aas:Chandra"]);
    assert_eq!(observatories, vec!["aas:VLT"]);
    assert_eq!(catalog["aas:Chandra"].measurement_type, vec!["em.X-ray"]);
    assert_eq!(catalog["aas:VLT"].measurement_type, vec!["em.opt", "em.IR"]);
}

#[test]
fn ppi_documents_for_one_spacecraft_merge() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pds-ppi-spacecraft.json"), PPI_DUMP).unwrap();
    let config = Config::minimal().with_data_dir(tmp.path());

    let (catalog, report) =
        build_catalog(&config, &AdapterRegistry::builtin(), "pds-ppi", None).unwrap();
    assert_eq!(report.loaded, vec![("pds-ppi".to_string(), 1)]);

    let voyager = &catalog["pds-ppi:Voyager 1"];
    assert_eq!(voyager.target_list, vec!["Jupiter", "Saturn", "Solar Wind"]);
    assert_eq!(voyager.instrument_list.len(), 2);
    assert_eq!(voyager.instrument_list[1].id, "PLS");
}

#[test]
fn missing_input_is_absent() {
    let tmp = TempDir::new().unwrap();
    let vocabulary = Vocabulary::default();
    let ctx = LoadContext::new(tmp.path(), &vocabulary);

    for adapter in AdapterRegistry::builtin().adapters() {
        let outcome = adapter.load(&ctx).unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::Absent {
                location: ctx.input_path(adapter.as_ref()).display().to_string()
            },
            "{} should be absent",
            adapter.authority()
        );
    }
}

#[test]
fn present_but_empty_input_is_loaded() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("DSN.txt"), "").unwrap();
    let vocabulary = Vocabulary::default();
    let ctx = LoadContext::new(tmp.path(), &vocabulary);

    let registry = AdapterRegistry::builtin();
    let outcome = registry.find("dsn").unwrap().load(&ctx).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(Default::default()));
}

#[test]
fn build_combines_authorities() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("AAS.xml"), AAS_TWO_ROWS).unwrap();
    fs::write(tmp.path().join("pds-ppi-spacecraft.json"), PPI_DUMP).unwrap();
    fs::write(
        tmp.path().join("IRAF.txt"),
        "observatory = \"lapalma\"\n\tname = \"Roque de los Muchachos\"\n\tlongitude = 17:52.8\n\tlatitude = 28:45.6\n",
    )
    .unwrap();
    let config = Config::minimal().with_data_dir(tmp.path());

    let (catalog, report) =
        build_catalog(&config, &AdapterRegistry::builtin(), "all", None).unwrap();
    assert_eq!(report.total_records, 4);
    assert_eq!(report.absent.len(), 6);
    let keys: Vec<&str> = catalog.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["aas:Chandra", "aas:VLT", "iraf:lapalma", "pds-ppi:Voyager 1"]
    );
}
