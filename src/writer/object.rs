//! Group 2005: object instructions

use super::EventWriter;

impl EventWriter {
    /// 2005[01]: technically requests the object's destruction.
    pub fn destroy_object(&mut self, entity_id: i32, slot_number: i8) {
        self.raw(2005, 1, &[entity_id.into(), slot_number.into()]);
    }

    /// 2005[02]
    pub fn restore_object(&mut self, entity_id: i32) {
        self.raw(2005, 2, &[entity_id.into()]);
    }

    /// 2005[03]
    pub fn set_object_state(&mut self, entity_id: i32, state: bool) {
        self.raw(2005, 3, &[entity_id.into(), state.into()]);
    }

    pub fn enable_object(&mut self, entity_id: i32) {
        self.set_object_state(entity_id, true);
    }

    pub fn disable_object(&mut self, entity_id: i32) {
        self.set_object_state(entity_id, false);
    }

    /// 2005[04]
    pub fn set_treasure_state(&mut self, entity_id: i32, state: bool) {
        self.raw(2005, 4, &[entity_id.into(), state.into()]);
    }

    pub fn enable_treasure(&mut self, entity_id: i32) {
        self.set_treasure_state(entity_id, true);
    }

    pub fn disable_treasure(&mut self, entity_id: i32) {
        self.set_treasure_state(entity_id, false);
    }

    /// 2005[05]: calls the ObjAct function of the object.
    pub fn start_object_activation(
        &mut self,
        entity_id: i32,
        object_parameter_id: i32,
        relative_idx: i32,
    ) {
        self.raw(
            2005,
            5,
            &[
                entity_id.into(),
                object_parameter_id.into(),
                relative_idx.into(),
            ],
        );
    }

    /// 2005[06]: whether the object can be activated at all.
    pub fn set_object_activation(
        &mut self,
        entity_id: i32,
        object_parameter_id: i32,
        state: bool,
    ) {
        self.raw(
            2005,
            6,
            &[entity_id.into(), object_parameter_id.into(), state.into()],
        );
    }

    pub fn enable_object_activation(&mut self, entity_id: i32, object_parameter_id: i32) {
        self.set_object_activation(entity_id, object_parameter_id, true);
    }

    pub fn disable_object_activation(&mut self, entity_id: i32, object_parameter_id: i32) {
        self.set_object_activation(entity_id, object_parameter_id, false);
    }

    /// 2005[07]: sets the object to its post-activation state.
    pub fn skip_to_end_of_animation(&mut self, entity_id: i32, animation_id: i32) {
        self.raw(2005, 7, &[entity_id.into(), animation_id.into()]);
    }

    /// 2005[08]: sets the object to its post-destruction state.
    pub fn skip_to_end_of_destruction(&mut self, entity_id: i32, slot_number: i8) {
        self.raw(2005, 8, &[entity_id.into(), slot_number.into()]);
    }

    /// 2005[09]: target type: 1 = character, 2 = map, 3 = both.
    #[allow(clippy::too_many_arguments)]
    pub fn create_damaging_object(
        &mut self,
        entity_flag_id: i32,
        entity_id: i32,
        damipoly_id: i32,
        behavior_id: i32,
        target_type: i32,
        radius: f32,
        life: f32,
        repetition_time: f32,
    ) {
        self.raw(
            2005,
            9,
            &[
                entity_flag_id.into(),
                entity_id.into(),
                damipoly_id.into(),
                behavior_id.into(),
                target_type.into(),
                radius.into(),
                life.into(),
                repetition_time.into(),
            ],
        );
    }

    /// 2005[10]
    pub fn register_statue_object(
        &mut self,
        entity_id: i32,
        area_number: u8,
        block_number: u8,
        statue_type: u8,
    ) {
        self.raw(
            2005,
            10,
            &[
                entity_id.into(),
                area_number.into(),
                block_number.into(),
                statue_type.into(),
            ],
        );
    }

    /// 2005[11]
    pub fn warp_object_to_character(
        &mut self,
        entity_id: i32,
        character_entity_id: i32,
        damipoly_id: i16,
    ) {
        self.raw(
            2005,
            11,
            &[
                entity_id.into(),
                character_entity_id.into(),
                damipoly_id.into(),
            ],
        );
    }

    /// 2005[12]
    pub fn remove_object_event_flag(&mut self, event_flag_id: i32) {
        self.raw(2005, 12, &[event_flag_id.into()]);
    }

    /// 2005[13]: 1 = invulnerable.
    pub fn set_object_invulnerability(&mut self, entity_id: i32, state: bool) {
        self.raw(2005, 13, &[entity_id.into(), state.into()]);
    }

    pub fn enable_object_invulnerability(&mut self, entity_id: i32) {
        self.set_object_invulnerability(entity_id, true);
    }

    pub fn disable_object_invulnerability(&mut self, entity_id: i32) {
        self.set_object_invulnerability(entity_id, false);
    }

    /// 2005[14]
    pub fn set_object_activation_with_idx(
        &mut self,
        entity_id: i32,
        object_parameter_id: i32,
        relative_idx: i32,
        state: bool,
    ) {
        self.raw(
            2005,
            14,
            &[
                entity_id.into(),
                object_parameter_id.into(),
                relative_idx.into(),
                state.into(),
            ],
        );
    }

    pub fn activate_object_with_idx(
        &mut self,
        entity_id: i32,
        object_parameter_id: i32,
        relative_idx: i32,
    ) {
        self.set_object_activation_with_idx(entity_id, object_parameter_id, relative_idx, true);
    }

    pub fn deactivate_object_with_idx(
        &mut self,
        entity_id: i32,
        object_parameter_id: i32,
        relative_idx: i32,
    ) {
        self.set_object_activation_with_idx(entity_id, object_parameter_id, relative_idx, false);
    }

    /// 2005[15]
    pub fn enable_treasure_collection(&mut self, entity_id: i32) {
        self.raw(2005, 15, &[entity_id.into()]);
    }
}
