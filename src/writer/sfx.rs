//! Group 2006: SFX instructions

use super::EventWriter;
use crate::types::Arg;

impl EventWriter {
    /// 2006[01]: erasing only the root allows easy recreation later.
    pub fn delete_map_sfx(&mut self, entity_id: i32, erase_root_only: bool) {
        self.raw(2006, 1, &[entity_id.into(), erase_root_only.into()]);
    }

    /// 2006[02]
    pub fn create_map_sfx(&mut self, entity_id: i32) {
        self.raw(2006, 2, &[entity_id.into()]);
    }

    /// 2006[03]: category: 0 = object, 1 = area, 2 = character.
    pub fn create_oneoff_sfx(&mut self, sfx_type: i32, entity_id: i32, damipoly_id: i32, sfx_id: i32) {
        self.raw(
            2006,
            3,
            &[
                sfx_type.into(),
                entity_id.into(),
                damipoly_id.into(),
                sfx_id.into(),
            ],
        );
    }

    /// 2006[04]
    pub fn create_object_sfx(&mut self, entity_id: i32, damipoly_id: i32, sfx_id: i32) {
        self.raw(
            2006,
            4,
            &[entity_id.into(), damipoly_id.into(), sfx_id.into()],
        );
    }

    /// 2006[05]: note `erase_root` here versus `erase_root_only` for map
    /// SFX; this slot is a full integer in the opcode table.
    pub fn delete_object_sfx(&mut self, entity_id: i32, erase_root: bool) {
        self.raw(2006, 5, &[entity_id.into(), Arg::I32(erase_root as i32)]);
    }
}
