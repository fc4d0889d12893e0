//! Generated unit descriptions handed from procgen to the battle engine.

use serde::{Deserialize, Serialize};

use crate::components::Heading;
use crate::enums::{Side, UnitKind};
use crate::types::FieldPoint;

/// One unit to be spawned at round setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitBlueprint {
    /// Sequence number; a gun and its paired truck share it.
    pub id: u32,
    pub kind: UnitKind,
    pub side: Side,
    pub position: FieldPoint,
    pub heading: Heading,
    pub designation: String,
}
