//! Human-readable JSON codec for save slots.
//!
//! Saves are pretty-printed so a slot file can be inspected or hand-edited.
//! Decoding is strict: unknown structure or missing fields surface as
//! [`SaveError::Decode`], which the load path reports without touching the
//! live world.

use crate::save_error::SaveError;
use crate::save_types::SaveData;

/// Serialize a save to pretty-printed JSON.
pub fn encode(save: &SaveData) -> Result<String, SaveError> {
    serde_json::to_string_pretty(save).map_err(|e| SaveError::Encode(e.to_string()))
}

/// Parse a slot file's contents.
pub fn decode(text: &str) -> Result<SaveData, SaveError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save_types::{BusStopRecord, HouseRecord, ServiceRecord};

    fn sample() -> SaveData {
        SaveData {
            slot_number: 1,
            time_of_day: 14.5,
            manager_current_money: 123.25,
            houses: vec![HouseRecord {
                position: [10.0, 0.0, -20.0],
                rotation: [0.0, 90.0, 0.0],
                scale: [1.0, 1.0, 1.0],
                tax_income: 1.0,
                current_happiness: 0.8,
                carbon_emission: 2.0,
            }],
            police_departments: vec![ServiceRecord {
                position: [0.0, 0.0, 0.0],
                rotation: [0.0; 3],
                scale: [1.0; 3],
                happiness_increase: 0.1,
                secondary_happiness_increase: 0.05,
            }],
            bus_stops: vec![BusStopRecord {
                position: [30.0, 0.0, 0.0],
                rotation: [0.0; 3],
                scale: [1.0; 3],
            }],
            hospitals: vec![],
        }
    }

    #[test]
    fn round_trip_preserves_everything() {
        let save = sample();
        let text = encode(&save).unwrap();
        let decoded = decode(&text).unwrap();
        assert_eq!(decoded, save);
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let text = encode(&sample()).unwrap();
        assert!(text.contains("\"slotNumber\""), "got: {text}");
        assert!(text.contains("\"timeOfDay\""), "got: {text}");
        assert!(text.contains("\"managerCurrentMoney\""), "got: {text}");
        assert!(text.contains("\"taxIncome\""), "got: {text}");
        assert!(text.contains("\"currentHappiness\""), "got: {text}");
        assert!(text.contains("\"carbonEmission\""), "got: {text}");
        assert!(text.contains("\"happinessIncrease\""), "got: {text}");
        assert!(text.contains("\"secondaryHappinessIncrease\""), "got: {text}");
        assert!(text.contains("\"policeDepartments\""), "got: {text}");
        assert!(text.contains("\"busStops\""), "got: {text}");
    }

    #[test]
    fn output_is_pretty_printed() {
        let text = encode(&sample()).unwrap();
        assert!(text.contains('\n'));
    }

    #[test]
    fn corrupt_text_is_a_decode_error() {
        let err = decode("{ not json").unwrap_err();
        assert!(matches!(err, SaveError::Decode(_)));
    }

    #[test]
    fn truncated_save_is_a_decode_error() {
        let text = encode(&sample()).unwrap();
        let err = decode(&text[..text.len() / 2]).unwrap_err();
        assert!(matches!(err, SaveError::Decode(_)));
    }
}
