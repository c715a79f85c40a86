use proptest::prelude::*;
use rowgrid_table::{Axis, Table, TableError};
use rowgrid_test_utils::{
    apply_writes, dimensions_strategy, read_grid, table_with_row_pair_strategy,
    table_with_writes_strategy, Cell, MAX_EXTENT,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every freshly constructed cell reads back the default value.
    #[test]
    fn prop_construct_yields_defaults((columns, rows) in dimensions_strategy()) {
        let table: Table<Cell> = Table::construct(columns, rows).expect("construct");
        prop_assert_eq!(table.columns(), columns);
        prop_assert_eq!(table.rows(), rows);
        for y in 0..rows {
            for x in 0..columns {
                prop_assert_eq!(table.get_cell(x, y), Ok(None));
            }
        }
    }

    /// Property: a zero dimension is always rejected as an invalid argument.
    #[test]
    fn prop_zero_dimension_rejected(extent in 0..=MAX_EXTENT) {
        let no_columns = Table::<Cell>::construct(0, extent);
        let no_rows = Table::<Cell>::construct(extent, 0);
        let no_columns_is_invalid = matches!(no_columns, Err(TableError::InvalidArgument { .. }));
        let no_rows_is_invalid = matches!(no_rows, Err(TableError::InvalidArgument { .. }));
        prop_assert!(no_columns_is_invalid);
        prop_assert!(no_rows_is_invalid);
    }

    /// Property: a write changes exactly the addressed cell.
    #[test]
    fn prop_set_cell_isolated(((columns, rows), writes) in table_with_writes_strategy(32)) {
        let table: Table<Cell> = Table::construct(columns, rows).expect("construct");
        let expected = apply_writes(&table, &writes);
        prop_assert_eq!(read_grid(&table), expected);

        if let Some(last) = writes.last() {
            prop_assert_eq!(table.get_cell(last.x, last.y), Ok(Some(last.value)));
        }
    }

    /// Property: out-of-bounds requests fail and leave the grid untouched.
    #[test]
    fn prop_out_of_bounds_mutates_nothing(
        ((columns, rows), writes) in table_with_writes_strategy(8),
        overshoot in 0..4usize,
    ) {
        let table: Table<Cell> = Table::construct(columns, rows).expect("construct");
        let expected = apply_writes(&table, &writes);

        let bad_x = columns + overshoot;
        let bad_y = rows + overshoot;
        let mut out = vec![None; columns];

        prop_assert_eq!(
            table.set_cell(bad_x, 0, Some(1)),
            Err(TableError::OutOfBounds { axis: Axis::Column, index: bad_x, extent: columns })
        );
        prop_assert_eq!(
            table.set_cell(0, bad_y, Some(1)),
            Err(TableError::OutOfBounds { axis: Axis::Row, index: bad_y, extent: rows })
        );
        prop_assert!(table.get_cell(bad_x, 0).is_err());
        prop_assert!(table.get_cell(0, bad_y).is_err());
        prop_assert!(table.get_row(bad_y, &mut out).is_err());
        prop_assert!(table.swap_rows(0, bad_y).is_err());
        prop_assert!(table.swap_rows(bad_y, 0).is_err());

        prop_assert_eq!(read_grid(&table), expected);
    }

    /// Property: swapping the same pair twice restores the table.
    #[test]
    fn prop_swap_is_self_inverse(
        ((columns, rows), a, b) in table_with_row_pair_strategy(),
        seed in any::<u32>(),
    ) {
        let table: Table<Cell> = Table::construct(columns, rows).expect("construct");
        for y in 0..rows {
            for x in 0..columns {
                let value = seed.wrapping_add((y * columns + x) as u32);
                table.set_cell(x, y, Some(value)).expect("set");
            }
        }
        let before = read_grid(&table);

        table.swap_rows(a, b).expect("swap");
        let swapped = read_grid(&table);
        prop_assert_eq!(&swapped[a], &before[b]);
        prop_assert_eq!(&swapped[b], &before[a]);

        table.swap_rows(b, a).expect("swap back");
        prop_assert_eq!(read_grid(&table), before);
    }
}
