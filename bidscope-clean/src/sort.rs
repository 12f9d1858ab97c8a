use bidscope_types::CleanRecord;

/// Most recent sale first. `sort_by` is stable, so same-day sales keep their input order.
pub fn sort_newest_first(records: &mut [CleanRecord]) {
    records.sort_by(|a, b| b.date_sold().cmp(&a.date_sold()));
}
