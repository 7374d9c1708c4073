use chrono::NaiveDate;
use rfab::{CatalogConfig, LibraryCatalog, LoadError};
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn load() -> LibraryCatalog {
    LibraryCatalog::from_files(fixture("catalog.csv"), fixture("users.csv"), CatalogConfig::new())
        .expect("fixtures should load")
}

#[test]
fn test_constructed_from_files() {
    let lc = load();
    assert_eq!(lc.book_catalog().len(), 8);
    assert_eq!(lc.users().len(), 5);

    let cookbook = lc.find_book(8).unwrap();
    assert!(cookbook.checked_out, "TRUE should parse as checked out");
    assert_eq!(cookbook.last_check_out, date(2023, 1, 1));
}

#[test]
fn test_user_book_lists() {
    let lc = load();
    let lists: Vec<Vec<u32>> = lc.users().iter().map(|u| u.checked_out.clone()).collect();
    assert_eq!(lists, vec![vec![2, 4], vec![], vec![5], vec![6], vec![]]);
}

#[test]
fn test_add_book() {
    let mut lc = load();
    assert_eq!(lc.add_book("My Personal Biography", "G Bonilla", "Classics"), 9);
    assert_eq!(lc.add_book("Coder's Guide to Failing", "G Bonilla", "Adventure"), 10);

    let book = lc.find_book(10).unwrap();
    assert_eq!(book.title, "Coder's Guide to Failing");
    assert_eq!(book.author, "G Bonilla");
    assert_eq!(book.genre, "Adventure");
    assert_eq!(book.last_check_out, date(2023, 9, 15));
    assert!(!book.checked_out);
}

#[test]
fn test_remove_book() {
    let mut lc = load();
    assert!(lc.find_book(4).is_some());
    assert!(lc.remove_book(4).is_some());
    assert!(lc.find_book(4).is_none());
}

#[test]
fn test_check_out_return_availability() {
    let mut lc = load();
    assert!(lc.get_book_availability(1));
    assert!(!lc.get_book_availability(2));

    assert!(lc.check_out_book(1));
    assert!(!lc.check_out_book(2));
    assert!(lc.return_book(2));
    assert!(!lc.return_book(3));

    assert!(!lc.get_book_availability(1));
    assert!(lc.get_book_availability(2));
}

#[test]
fn test_book_count_and_display() {
    let lc = load();
    assert_eq!(lc.book_count("the little prince"), 2);
    assert_eq!(
        lc.find_book(3).unwrap().to_string(),
        "THE LITTLE PRINCE BY ANTOINE DE SAINT-EXUPERY"
    );
}

#[test]
fn test_fees() {
    let lc = load();
    let today = lc.config().today;
    assert_eq!(lc.find_book(4).unwrap().calculate_fees(today), 389.5);
    assert_eq!(lc.find_book(6).unwrap().calculate_fees(today), 77.5);
}

#[test]
fn test_search_functions() {
    let lc = load();
    let adventure = lc.search_for_book(|b| b.genre == "Adventure");
    assert_eq!(adventure.len(), 2);
    assert!(adventure.iter().all(|b| b.genre == "Adventure"));

    let by_id = lc.search_for_book(|b| b.id == 2);
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].title, "Pride and Prejudice");

    let single = lc.search_for_users(|u| u.checked_out.len() == 1);
    let names: Vec<&str> = single.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Kevin Li", "Sofia Diaz"]);
}

#[test]
fn test_report_and_write() {
    let lc = load();
    let expected = concat!(
        "\t\t\t\tREPORT\n\n",
        "\t\tSUMMARY OF BOOKS\n",
        "GENRE\t\t\t\t\t\tAMOUNT\n",
        "Adventure\t\t\t\t\t2\n",
        "Fiction\t\t\t\t\t\t2\n",
        "Classics\t\t\t\t\t1\n",
        "Mystery\t\t\t\t\t\t1\n",
        "Science Fiction\t\t\t\t\t1\n",
        "====================================================\n",
        "\t\t\tTOTAL AMOUNT OF BOOKS\t7\n\n",
        "\t\t\tBOOKS CURRENTLY CHECKED OUT\n\n",
        "PRIDE AND PREJUDICE BY JANE AUSTEN\n",
        "DUNE BY FRANK HERBERT\n",
        "THE HOUND OF THE BASKERVILLES BY ARTHUR CONAN DOYLE\n",
        "THE LITTLE PRINCE BY ANTOINE DE SAINT-EXUPERY\n",
        "COOKBOOK BASICS BY ANN SMITH\n",
        "====================================================\n",
        "\t\t\tTOTAL AMOUNT OF BOOKS\t5\n\n",
        "\n\n\t\tUSERS THAT OWE BOOK FEES\n\n",
        "William Brown\t\t\t\t\t$401.0\n",
        "Kevin Li\t\t\t\t\t$0.0\n",
        "Sofia Diaz\t\t\t\t\t$77.5\n",
        "====================================================\n",
        "\t\t\t\tTOTAL DUE\t$478.5\n\n\n",
        "\n\n",
    );
    assert_eq!(lc.generate_report(), expected);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report").join("actual_report.txt");
    lc.write_report(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_today_moves_fees() {
    let config = CatalogConfig::new().with_today(date(2023, 9, 20));
    let lc = LibraryCatalog::from_files(fixture("catalog.csv"), fixture("users.csv"), config).unwrap();
    // Five more days on book 2 (32 -> 37 days out)
    assert_eq!(lc.find_book(2).unwrap().calculate_fees(lc.config().today), 19.0);
}

#[test]
fn test_bad_date_is_rejected() {
    let mut catalog = tempfile::NamedTempFile::new().unwrap();
    writeln!(catalog, "id,title,author,genre,lastCheckOut,checkedOut").unwrap();
    writeln!(catalog, "1,Emma,Jane Austen,Classics,15/09/2023,false").unwrap();
    catalog.flush().unwrap();

    let result = LibraryCatalog::from_files(catalog.path(), fixture("users.csv"), CatalogConfig::new());
    assert!(matches!(
        result,
        Err(LoadError::InvalidField { field: "last_check_out", line: 2, .. })
    ));
}
