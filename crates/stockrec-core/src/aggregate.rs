//! Merging repeated mentions of one logical line item.

use std::collections::BTreeMap;

use stockrec_match::normalize;
use stockrec_model::{AggregationKey, ExtractedRecord};

/// The grouping key for a record: normalized code plus its descriptors.
pub fn aggregation_key(record: &ExtractedRecord) -> AggregationKey {
    AggregationKey {
        code: normalize(&record.raw_code),
        size: record.size.clone(),
        category: record.category,
    }
}

/// Merge records sharing an aggregation key into one record each.
///
/// One shipment line can appear several times across a multi-page document
/// (split entries for the same SKU); those mentions must be summed once
/// before mutating inventory, not applied as independent deltas. Quantities
/// are summed into the first-seen record, which keeps its descriptors and
/// position; first-seen ordering is preserved.
pub fn aggregate(records: Vec<ExtractedRecord>) -> Vec<ExtractedRecord> {
    let mut merged: Vec<ExtractedRecord> = Vec::new();
    let mut index_by_key: BTreeMap<AggregationKey, usize> = BTreeMap::new();
    for record in records {
        let key = aggregation_key(&record);
        match index_by_key.get(&key) {
            Some(&index) => {
                merged[index].quantity = merged[index].quantity.saturating_add(record.quantity);
            }
            None => {
                index_by_key.insert(key, merged.len());
                merged.push(record);
            }
        }
    }
    merged
}
