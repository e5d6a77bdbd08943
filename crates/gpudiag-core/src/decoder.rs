//! Correlates error and info records with result entries.
//!
//! The engine reports errors and info messages in their own arrays, tagged
//! only by entity id. Each entity surfaces at most one error and one info
//! message: the first in array order. Later records for the same entity are
//! dropped.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use gpudiag_engine::{EntityId, RawDiagError, RawDiagResponse};
use tracing::debug;

/// First error recorded for `entity_id`, as `(message, code)`.
///
/// Returns `("", 0)` when the entity has no error record.
pub fn find_error(entity_id: EntityId, response: &RawDiagResponse) -> (&str, u32) {
    response
        .errors()
        .iter()
        .find(|e| e.entity_id == entity_id)
        .map(|e| (e.msg.as_str(), e.code))
        .unwrap_or(("", 0))
}

/// First info message recorded for `entity_id`, or `""`.
pub fn find_info(entity_id: EntityId, response: &RawDiagResponse) -> &str {
    response
        .info()
        .iter()
        .find(|i| i.entity_id == entity_id)
        .map(|i| i.msg.as_str())
        .unwrap_or("")
}

/// Entity -> first error / first info lookup built once per response.
///
/// Gives the same answers as [`find_error`] and [`find_info`] in constant
/// time per lookup.
#[derive(Debug)]
pub struct ResponseIndex<'a> {
    errors: HashMap<EntityId, &'a RawDiagError>,
    info: HashMap<EntityId, &'a str>,
}

impl<'a> ResponseIndex<'a> {
    pub fn new(response: &'a RawDiagResponse) -> Self {
        let mut errors = HashMap::with_capacity(response.errors().len());
        for error in response.errors() {
            match errors.entry(error.entity_id) {
                Entry::Vacant(slot) => {
                    slot.insert(error);
                }
                Entry::Occupied(_) => {
                    debug!(
                        entity_id = %error.entity_id,
                        code = error.code,
                        "dropping additional error record for entity"
                    );
                }
            }
        }

        let mut info = HashMap::with_capacity(response.info().len());
        for record in response.info() {
            match info.entry(record.entity_id) {
                Entry::Vacant(slot) => {
                    slot.insert(record.msg.as_str());
                }
                Entry::Occupied(_) => {
                    debug!(entity_id = %record.entity_id, "dropping additional info record for entity");
                }
            }
        }

        Self { errors, info }
    }

    /// `(message, code)` of the entity's first error, `("", 0)` if none.
    pub fn error_for(&self, entity_id: EntityId) -> (&'a str, u32) {
        self.errors
            .get(&entity_id)
            .map(|e| (e.msg.as_str(), e.code))
            .unwrap_or(("", 0))
    }

    /// The entity's first info message, `""` if none.
    pub fn info_for(&self, entity_id: EntityId) -> &'a str {
        self.info.get(&entity_id).copied().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpudiag_engine::RawDiagResult;

    fn response_with_duplicates() -> RawDiagResponse {
        let mut response = RawDiagResponse::new();
        for entity in [1u32, 2, 3] {
            response
                .push_result(RawDiagResult {
                    entity_id: EntityId(entity),
                    test_id: 0,
                    result: 0,
                })
                .unwrap();
        }
        response.push_error(EntityId(2), 7, "first").unwrap();
        response.push_error(EntityId(1), 9, "other entity").unwrap();
        response.push_error(EntityId(2), 8, "second").unwrap();
        response.push_info(EntityId(3), "info one").unwrap();
        response.push_info(EntityId(3), "info two").unwrap();
        response
    }

    #[test]
    fn test_find_error_none() {
        let response = response_with_duplicates();
        assert_eq!(find_error(EntityId(3), &response), ("", 0));
        assert_eq!(find_error(EntityId(42), &response), ("", 0));
    }

    #[test]
    fn test_find_error_first_match() {
        let response = response_with_duplicates();
        assert_eq!(find_error(EntityId(2), &response), ("first", 7));
        assert_eq!(find_error(EntityId(1), &response), ("other entity", 9));
    }

    #[test]
    fn test_find_info_none() {
        let response = response_with_duplicates();
        assert_eq!(find_info(EntityId(1), &response), "");
    }

    #[test]
    fn test_find_info_first_match() {
        let response = response_with_duplicates();
        assert_eq!(find_info(EntityId(3), &response), "info one");
    }

    #[test]
    fn test_empty_response() {
        let response = RawDiagResponse::new();
        assert_eq!(find_error(EntityId(0), &response), ("", 0));
        assert_eq!(find_info(EntityId(0), &response), "");
    }

    #[test]
    fn test_index_agrees_with_linear_scan() {
        let response = response_with_duplicates();
        let index = ResponseIndex::new(&response);
        for entity in (0..5).map(EntityId) {
            assert_eq!(index.error_for(entity), find_error(entity, &response));
            assert_eq!(index.info_for(entity), find_info(entity, &response));
        }
    }
}
