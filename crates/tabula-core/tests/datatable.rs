//! End-to-end table tests.
//!
//! Covers:
//! - Building a time-series table with metadata and editing it in place
//! - Out-of-range row and column access
//! - Flattening every composite element shape, with and without suffixes
//! - Metadata validation failures

use approx::assert_abs_diff_eq;
use rstest::rstest;
use tabula_core::table::LABELS;
use tabula_core::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

/// Five rows keyed `0.00, 0.25, .., 1.00`; row `i` is `[0, 1, 2, 3, 4] + i`.
fn scenario() -> TimeSeriesTable {
    let mut dependents = MetadataStore::new();
    dependents.set_value_array_for_key(LABELS, vec!["1", "2", "3", "4", "5"]);
    dependents.set_value_array_for_key("column-index", vec![1_u64, 2, 3, 4, 5]);

    let mut independent = MetadataStore::new();
    independent.set_value_for_key(LABELS, "0");
    independent.set_value_for_key("column-index", 0_u64);

    let mut table = TimeSeriesTable::new();
    table.set_column_labels(["0", "1", "2", "3"]).unwrap();
    table.set_dependents_meta_data(dependents).unwrap();
    table.set_independent_meta_data(independent).unwrap();

    for i in 0..5 {
        let row: Vec<f64> = (0..5).map(|j| f64::from(i + j)).collect();
        table.append_row(0.25 * f64::from(i), row).unwrap();
    }
    table
}

fn shifted_rows<E: Element>(rows: [[E; 3]; 3]) -> Vec<(f64, [E; 3])> {
    rows.into_iter()
        .enumerate()
        .map(|(r, row)| (0.1 * (r as f64 + 1.0), row))
        .collect()
}

/// Rows used for every flattening case: each column cycles through the
/// element built from 1, 2 and 3.
fn cycled<E: Element>(make: impl Fn(f64) -> E) -> Vec<(f64, [E; 3])> {
    let (a, b, c) = (make(1.0), make(2.0), make(3.0));
    shifted_rows([[a, b, c], [c, a, b], [b, c, a]])
}

fn flatten_case<E: Composite>(make: impl Fn(f64) -> E, suffixes: &[&str]) -> DataTable {
    let mut table = DataTable::<f64, E, AcceptAll>::new();
    table.set_column_labels(["col0", "col1", "col2"]).unwrap();
    for (key, row) in cycled(make) {
        table.append_row(key, row).unwrap();
    }
    table.flatten_with_suffixes(suffixes).unwrap()
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn scenario_rows_and_metadata() {
    let mut table = scenario();
    assert_eq!(table.num_rows(), 5);
    assert_eq!(table.num_columns(), 5);
    assert_eq!(table.column_labels().unwrap(), ["1", "2", "3", "4", "5"]);

    for i in 0..5 {
        let mut row = table.upd_row_at_index(i).unwrap();
        row += 1.0;
    }
    for i in 0..5 {
        let mut row = table.upd_row(&(0.25 * i as f64)).unwrap();
        row -= 1.0;
    }

    // Time must increase.
    assert!(matches!(
        table.append_row(0.5, [0.0; 5]),
        Err(TableError::InvalidRow { .. })
    ));

    table.upd_matrix().apply(|x| x + 2.0);
    let (r, c) = (table.num_rows(), table.num_columns());
    let mut block = table.upd_matrix_block(0, 0, r, c).unwrap();
    block -= 2.0;

    table.upd_table_meta_data().set_value_for_key("DataRate", 600);
    table
        .upd_table_meta_data()
        .set_value_for_key("Filename", "/path/to/file");

    table.upd_dependent_column_at_index(0).unwrap().apply(|x| x + 2.0);
    table.upd_dependent_column_at_index(2).unwrap().apply(|x| x + 2.0);
    table.upd_dependent_column("1").unwrap().apply(|x| x - 2.0);
    table.upd_dependent_column("3").unwrap().apply(|x| x - 2.0);

    for i in 0..5 {
        let by_index = table.get_row_at_index(i).unwrap();
        let by_key = table.get_row(&(0.25 * i as f64)).unwrap();
        let column = table.get_dependent_column_at_index(i).unwrap();
        for j in 0..5 {
            let expected = (i + j) as f64;
            assert_abs_diff_eq!(by_index[j], expected);
            assert_abs_diff_eq!(by_key[j], expected);
            assert_abs_diff_eq!(column[j], j as f64 + i as f64);
        }
    }
    assert!(table.get_dependent_column_at_index(0).unwrap() == [0.0, 1.0, 2.0, 3.0, 4.0]);

    let dependents = table.dependents_meta_data();
    let indices = dependents
        .get_value_array_for_key("column-index")
        .unwrap()
        .to_vec::<u64>()
        .unwrap();
    assert_eq!(indices, [1, 2, 3, 4, 5]);

    let independent = table.independent_meta_data();
    assert_eq!(
        independent.get_value_for_key(LABELS).unwrap().get::<String>().unwrap(),
        "0"
    );
    assert_eq!(
        *independent
            .get_value_for_key("column-index")
            .unwrap()
            .get::<u64>()
            .unwrap(),
        0
    );

    let meta = table.table_meta_data();
    assert_eq!(*meta.get_value_for_key("DataRate").unwrap().get::<i64>().unwrap(), 600);
    assert!(matches!(
        meta.get_value_for_key("DataRate").unwrap().get::<String>(),
        Err(TableError::BadCast { .. })
    ));
    assert_eq!(
        meta.get_value_for_key("Filename").unwrap().get::<String>().unwrap(),
        "/path/to/file"
    );

    assert!(table.has_column_at_index(0));
    assert!(table.has_column_at_index(2));
    assert!(!table.has_column_at_index(100));
}

#[test]
fn scenario_matrix_round_trip() {
    let mut table = scenario();
    let before = table.get_matrix().to_matrix();
    let mut all = table.upd_matrix();
    all += 2.0;
    let (r, c) = (table.num_rows(), table.num_columns());
    let mut block = table.upd_matrix_block(0, 0, r, c).unwrap();
    block -= 2.0;
    assert_eq!(table.get_matrix().to_matrix(), before);
}

#[test]
fn scenario_renders() {
    let table = scenario();
    let text = table.to_string();
    assert!(text.contains("NumRows: 5"));
    assert!(text.contains("Column-Labels: ['1' '2' '3' '4' '5']"));
    assert!(text.contains("0.75 [3 4 5 6 7]"));
}

// =============================================================================
// Bounds
// =============================================================================

#[rstest]
#[case(5)]
#[case(6)]
fn row_index_out_of_range(#[case] index: usize) {
    let table = scenario();
    let err = table.get_row_at_index(index).unwrap_err();
    assert_eq!(err, TableError::RowIndexOutOfRange { index, extent: 5 });
    assert!(err.to_string().contains("[0, 4]"));
}

#[rstest]
#[case(5)]
#[case(6)]
fn column_index_out_of_range(#[case] index: usize) {
    let table = scenario();
    let err = table.get_dependent_column_at_index(index).unwrap_err();
    assert_eq!(err, TableError::ColumnIndexOutOfRange { index, extent: 5 });
}

#[rstest]
#[case((0, 0, 0, 1), "invalid argument")]
#[case((4, 0, 2, 1), "row index 5")]
#[case((0, 3, 1, 3), "column index 5")]
#[case((7, 7, 1, 1), "row index 7")]
fn block_out_of_range(#[case] block: (usize, usize, usize, usize), #[case] message: &str) {
    let table = scenario();
    let (r0, c0, nr, nc) = block;
    let err = table.get_matrix_block(r0, c0, nr, nc).unwrap_err();
    assert!(err.to_string().starts_with(message), "{err}");
}

// =============================================================================
// Flattening
// =============================================================================

#[rstest]
#[case(&[], ["col0_1", "col0_2", "col0_3"])]
#[case(&["_x", "_y", "_z"], ["col0_x", "col0_y", "col0_z"])]
fn flatten_vec3(#[case] suffixes: &[&str], #[case] first_labels: [&str; 3]) {
    let flat = flatten_case(|v| vec3(v, v, v), suffixes);
    assert_eq!(flat.num_rows(), 3);
    assert_eq!(flat.num_columns(), 9);
    assert_eq!(flat.column_labels().unwrap()[..3], first_labels);

    let rows: Vec<_> = (0..3).map(|r| flat.get_row_at_index(r).unwrap()).collect();
    assert_abs_diff_eq!(rows[0][0], 1.0);
    assert_abs_diff_eq!(rows[1][0], 3.0);
    assert_abs_diff_eq!(rows[2][0], 2.0);
    assert_abs_diff_eq!(rows[0][8], 3.0);
    assert_abs_diff_eq!(rows[1][8], 2.0);
    assert_abs_diff_eq!(rows[2][8], 1.0);
}

#[test]
fn flatten_quaternion() {
    let flat = flatten_case(|v| Quaternion::new(v, v, v, v), &[]);
    assert_eq!(flat.column_labels().unwrap().len(), 12);
    assert_eq!(flat.num_rows(), 3);
    assert_eq!(flat.num_columns(), 12);
}

#[test]
fn flatten_spatial_vec() {
    let flat = flatten_case(|v| SpatialVec::splat(vec3(v, v, v)), &[]);
    assert_eq!(flat.column_labels().unwrap().len(), 18);
    assert_eq!(flat.num_rows(), 3);
    assert_eq!(flat.num_columns(), 18);
    assert_eq!(flat.column_label(17).unwrap(), "col2_6");
}

#[test]
fn flatten_time_series_keeps_times() {
    let mut table = TimeSeriesTable::<Vec3>::new();
    table.set_column_labels(["col0", "col1", "col2"]).unwrap();
    for (key, row) in cycled(|v| vec3(v, v, v)) {
        table.append_row(key, row).unwrap();
    }
    let flat: TimeSeriesTable = table.flatten().unwrap();
    for (a, b) in flat
        .independent_column()
        .iter()
        .zip(table.independent_column())
    {
        assert_abs_diff_eq!(*a, *b);
    }
    assert_eq!(flat.column_labels().unwrap().len(), 9);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
fn flatten_rejects_wrong_suffix_count(#[case] count: usize) {
    let mut table = DataTableVec3::new();
    table.set_column_labels(["m"]).unwrap();
    table.append_row(0.0, [vec3(1.0, 2.0, 3.0)]).unwrap();
    let suffixes: Vec<String> = (0..count).map(|i| format!("_{i}")).collect();
    assert!(matches!(
        table.flatten_with_suffixes(&suffixes),
        Err(TableError::InvalidArgument { .. })
    ));
}

// =============================================================================
// Metadata validation
// =============================================================================

#[test]
fn dependents_meta_data_failures() {
    let mut table = scenario();

    let mut missing = MetadataStore::new();
    missing.set_value_array_for_key("units", vec!["m"; 5]);
    assert_eq!(
        table.set_dependents_meta_data(missing).unwrap_err(),
        TableError::MissingMetaData { key: LABELS.into() }
    );

    let mut short = MetadataStore::new();
    short.set_value_array_for_key(LABELS, vec!["a", "b", "c"]);
    assert_eq!(
        table.set_dependents_meta_data(short).unwrap_err(),
        TableError::IncorrectMetaDataLength {
            key: LABELS.into(),
            expected: 5,
            got: 3,
        }
    );

    let mut uneven = MetadataStore::new();
    uneven.set_value_array_for_key(LABELS, vec!["a", "b", "c", "d", "e"]);
    uneven.set_value_array_for_key("units", vec!["m", "m"]);
    assert!(matches!(
        table.set_dependents_meta_data(uneven),
        Err(TableError::IncorrectMetaDataLength { got: 2, expected: 5, .. })
    ));

    // Failed setters leave the previous store in place.
    assert!(table.validate_dependents_meta_data().is_ok());
    assert_eq!(table.column_label(0).unwrap(), "1");
}

#[test]
fn handle_round_trip() {
    let table = scenario();
    let handle: Box<dyn AbstractTable> = Box::new(table.clone());
    assert_eq!(handle.num_rows(), 5);
    assert_eq!(handle.num_components_per_element(), 1);
    let back = TimeSeriesTable::try_from_abstract(handle.clone()).unwrap();
    assert_eq!(back, table);
    assert!(matches!(
        DataTable::<f64, f64, AcceptAll>::try_from_abstract(handle),
        Err(TableError::TypeMismatch { .. })
    ));
}
