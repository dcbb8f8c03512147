use std::fs;
use std::path::PathBuf;

use atmct::prelude::*;

struct DataDir(PathBuf);

impl DataDir {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("atmct-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, name: &str, json: &str) {
        fs::write(self.0.join(name), json).unwrap();
    }
}

impl Drop for DataDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn populated(tag: &str) -> DataDir {
    let dir = DataDir::new(tag);
    dir.write(
        Resolvers::OPERATORS_FILE,
        r#"[{"companyId": 133, "companyName": "EMT Tarragona"}]"#,
    );
    dir.write(
        Resolvers::LINES_FILE,
        r#"[{"lineId": 1445, "lineName": "L54"}, {"lineId": 1445, "lineName": "dup"}]"#,
    );
    dir.write(
        Resolvers::STOPS_FILE,
        r#"[{"stopId": 4660, "stopName": "Imperial Tarraco"}]"#,
    );
    dir.write(Resolvers::TITLES_FILE, r#"[{"id": 17, "name": "T-10"}]"#);
    dir
}

#[test]
fn loads_all_tables_from_dir() {
    let dir = populated("load");
    let names = Resolvers::from_dir(&dir.0).unwrap();

    assert_eq!(names.operator(133), "EMT Tarragona");
    assert_eq!(names.line(1445), "L54");
    assert_eq!(names.stop(4660), "Imperial Tarraco");
    assert_eq!(names.title(17), "T-10");
    assert_eq!(names.lines.len(), 1);
}

#[test]
fn unknown_codes_use_table_fallbacks() {
    let dir = populated("fallback");
    let names = Resolvers::from_dir(&dir.0).unwrap();

    assert_eq!(names.operator(7), "Not found (7)");
    assert_eq!(names.stop(1), "Not found (1)");
    assert_eq!(names.title(0), "Not found (0)");
    assert_eq!(names.line(291), "291");
}

#[test]
fn missing_table_is_io_error() {
    let dir = DataDir::new("missing");
    dir.write(Resolvers::OPERATORS_FILE, "[]");
    assert!(matches!(Resolvers::from_dir(&dir.0), Err(Error::Io(_))));
}

#[test]
fn malformed_table_is_format_error() {
    let dir = populated("malformed");
    dir.write(Resolvers::STOPS_FILE, r#"{"stopId": 1}"#);
    assert!(matches!(
        Resolvers::from_dir(&dir.0),
        Err(Error::LookupFormat(_))
    ));
}

#[test]
fn lookup_trait_reports_misses() {
    let json = r#"[{"titleId": 3, "titleName": "T-Mes"}]"#;
    let table = NameTable::from_json_str(json, Fallback::NotFound).unwrap();
    assert_eq!(table.lookup(3), Some("T-Mes"));
    assert_eq!(table.lookup(4), None);
}
