//! Group 2002: cutscene instructions

use super::EventWriter;

impl EventWriter {
    /// 2002[02]
    pub fn play_cutscene_and_warp_player(
        &mut self,
        cutscene_id: i32,
        playback_method: u32,
        point_entity_id: i32,
        area_id: u8,
        block_id: u8,
    ) {
        self.raw(
            2002,
            2,
            &[
                cutscene_id.into(),
                playback_method.into(),
                point_entity_id.into(),
                area_id.into(),
                block_id.into(),
            ],
        );
    }

    /// 2002[03]
    pub fn play_cutscene_to_player(
        &mut self,
        cutscene_id: i32,
        playback_method: u32,
        player_entity_id: i32,
    ) {
        self.raw(
            2002,
            3,
            &[
                cutscene_id.into(),
                playback_method.into(),
                player_entity_id.into(),
            ],
        );
    }

    /// 2002[04]
    pub fn play_cutscene_and_warp_specific_player(
        &mut self,
        cutscene_id: i32,
        playback_method: u32,
        point_entity_id: i32,
        area_id: u8,
        block_id: u8,
        player_entity_id: i32,
    ) {
        self.raw(
            2002,
            4,
            &[
                cutscene_id.into(),
                playback_method.into(),
                point_entity_id.into(),
                area_id.into(),
                block_id.into(),
                player_entity_id.into(),
            ],
        );
    }

    /// 2002[05]
    pub fn play_cutscene_and_rotate_player(
        &mut self,
        cutscene_id: i32,
        playback_method: u32,
        axis_x: f32,
        axis_z: f32,
        rotation: i32,
        translation_y: f32,
        player_entity_id: i32,
    ) {
        self.raw(
            2002,
            5,
            &[
                cutscene_id.into(),
                playback_method.into(),
                axis_x.into(),
                axis_z.into(),
                rotation.into(),
                translation_y.into(),
                player_entity_id.into(),
            ],
        );
    }
}
