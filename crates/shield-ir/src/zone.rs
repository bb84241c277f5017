//! Boolean regions.

use serde::{Deserialize, Serialize};

use crate::{BodyId, MaterialId, ZoneId};

/// A region of space filled with one material.
///
/// The region is `base_id` combined left to right with every entry of
/// `construction`, minus the regions of all zones whose `parent_id` points
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Unique zone ID.
    pub id: ZoneId,
    /// Enclosing zone, or [`ROOT_ZONE_PARENT`](crate::ROOT_ZONE_PARENT).
    #[serde(default)]
    pub parent_id: ZoneId,
    /// Body the construction starts from.
    pub base_id: BodyId,
    /// Material filling the zone.
    pub material_id: MaterialId,
    /// Ordered set operations applied to the base body.
    #[serde(default)]
    pub construction: Vec<Operation>,
}

/// One step of a zone construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Body combined with the running result.
    pub body_id: BodyId,
    /// Set operation.
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    /// Intersect with `body_id`.
    pub fn intersect(body_id: BodyId) -> Self {
        Self {
            body_id,
            kind: OperationKind::Intersect,
        }
    }

    /// Union with `body_id`.
    pub fn union(body_id: BodyId) -> Self {
        Self {
            body_id,
            kind: OperationKind::Union,
        }
    }

    /// Subtract `body_id`.
    pub fn subtract(body_id: BodyId) -> Self {
        Self {
            body_id,
            kind: OperationKind::Subtract,
        }
    }
}

/// Set operation kinds available in a zone construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Keep points inside both operands.
    Intersect,
    /// Keep points inside either operand.
    Union,
    /// Keep points inside the left operand only.
    Subtract,
}
