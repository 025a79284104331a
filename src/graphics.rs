use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::player::ShotFired;

pub const SHOOT_SOUND_PATH: &str = "audio/laser_shoot.wav";

/// Loaded sound effect handles.  Created by [`load_sound_effects`] at startup.
#[derive(Resource, Default)]
pub struct SoundEffects {
    pub shoot: Handle<AudioSource>,
}

/// Setup camera for 2D rendering.  One world unit is one window pixel, with the
/// playfield centred on the origin.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("Camera spawned");
}

pub fn load_sound_effects(mut sounds: ResMut<SoundEffects>, asset_server: Res<AssetServer>) {
    sounds.shoot = asset_server.load(SHOOT_SOUND_PATH);
    info!("Sound effects queued for loading");
}

/// A sound handle that will eventually reach an audio sink.
///
/// `AudioPlayer` entities whose source never loads are never despawned, so
/// failed and never-requested handles must not be played.
pub fn sound_playable(present: bool, state: &LoadState) -> bool {
    present || matches!(state, LoadState::Loading | LoadState::Loaded)
}

/// One fire-and-forget shoot sound per shot.
pub fn play_shoot_sound_system(
    mut commands: Commands,
    mut shots: MessageReader<ShotFired>,
    sounds: Res<SoundEffects>,
    sources: Res<Assets<AudioSource>>,
    asset_server: Res<AssetServer>,
    mut warned: Local<bool>,
) {
    if shots.is_empty() {
        return;
    }
    let state = asset_server.load_state(&sounds.shoot);
    if !sound_playable(sources.contains(&sounds.shoot), &state) {
        shots.clear();
        if !*warned {
            warn!("Shoot sound unavailable ({state:?}); shots will be silent");
            *warned = true;
        }
        return;
    }
    for _ in shots.read() {
        commands.spawn((AudioPlayer::new(sounds.shoot.clone()), PlaybackSettings::DESPAWN));
    }
}
