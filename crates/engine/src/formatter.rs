use crate::fixed_point::{format_tenths, tenths_to_f64};
use crate::stats::{Accumulator, FinalTable};
use serde::Serialize;
use std::fmt::Write;

/// One output row, in a form suitable for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub station: String,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
    pub count: u64,
}

/// Entries sorted by key bytes, ascending.
pub fn sorted_entries(table: &FinalTable) -> Vec<(&[u8], &Accumulator)> {
    let mut entries: Vec<_> = table
        .entries
        .iter()
        .map(|(key, acc)| (key.as_slice(), acc))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Render `{key=min/mean/max, ...}`.
pub fn render(table: &FinalTable) -> String {
    let entries = sorted_entries(table);
    let mut out = String::with_capacity(2 + entries.len() * 24);
    out.push('{');
    for (i, (key, acc)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(
            out,
            "{}={}/{}/{}",
            String::from_utf8_lossy(key),
            format_tenths(acc.min),
            format_tenths(acc.mean_tenths()),
            format_tenths(acc.max),
        );
    }
    out.push('}');
    out
}

pub fn summaries(table: &FinalTable) -> Vec<StationSummary> {
    sorted_entries(table)
        .into_iter()
        .map(|(key, acc)| StationSummary {
            station: String::from_utf8_lossy(key).into_owned(),
            min: tenths_to_f64(acc.min),
            mean: tenths_to_f64(acc.mean_tenths()),
            max: tenths_to_f64(acc.max),
            count: acc.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::process_bytes;

    #[test]
    fn renders_fixed_example() {
        let table = process_bytes(b"A;10.0\nB;-5.5\nA;20.0\n");
        assert_eq!(render(&table), "{A=10.0/15.0/20.0, B=-5.5/-5.5/-5.5}");
    }

    #[test]
    fn empty_table_renders_braces() {
        assert_eq!(render(&FinalTable::new()), "{}");
    }

    #[test]
    fn keys_sort_by_bytes() {
        let table = process_bytes("b;1.0\nZ;1.0\na;1.0\nÅland;1.0\nab;1.0\n".as_bytes());
        assert_eq!(
            render(&table),
            "{Z=1.0/1.0/1.0, a=1.0/1.0/1.0, ab=1.0/1.0/1.0, b=1.0/1.0/1.0, Åland=1.0/1.0/1.0}"
        );
    }

    #[test]
    fn mean_is_rounded_not_truncated() {
        // 0.1 + 0.2 = 0.15 -> 0.2
        let table = process_bytes(b"k;0.1\nk;0.2\n");
        assert_eq!(render(&table), "{k=0.1/0.2/0.2}");
        let table = process_bytes(b"k;-0.1\nk;-0.2\n");
        assert_eq!(render(&table), "{k=-0.2/-0.2/-0.1}");
    }

    #[test]
    fn negative_mean_near_zero_is_unsigned() {
        let table = process_bytes(b"k;-0.1\nk;0.0\nk;0.0\n");
        assert_eq!(render(&table), "{k=-0.1/0.0/0.0}");
    }

    #[test]
    fn summaries_follow_render_order() {
        let table = process_bytes(b"B;-5.5\nA;10.0\nA;20.0\n");
        let rows = summaries(&table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].station, "A");
        assert!((rows[0].mean - 15.0).abs() < f64::EPSILON);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].station, "B");
        assert!((rows[1].min + 5.5).abs() < f64::EPSILON);
    }
}
