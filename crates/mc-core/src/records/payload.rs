//! Request bodies for step submissions.

use serde_json::{json, Map, Value};

use super::{FormRow, StepRecord};
use crate::ids::MemberId;

pub const MEMBER_ID_KEY: &str = "member_ID";

/// `{ "member_ID": ..., "data": [ ...rows ] }`
pub fn batch_payload<T: StepRecord>(
    member_id: &MemberId,
    rows: &[FormRow<T>],
) -> Result<Value, serde_json::Error> {
    let data = rows
        .iter()
        .map(FormRow::to_json)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({ "member_ID": member_id, "data": data }))
}

/// Flat record object with `member_ID` merged in.
pub fn record_payload<T: StepRecord>(
    member_id: &MemberId,
    row: &FormRow<T>,
) -> Result<Value, serde_json::Error> {
    let mut map = match row.to_json()? {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    map.insert(MEMBER_ID_KEY.to_string(), Value::from(member_id.as_str()));
    Ok(Value::Object(map))
}
