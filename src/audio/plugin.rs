//! Audio plugin - plays `SoundCue` events through kira.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::core::SoundCue;

/// Preloaded handle per cue.
#[derive(Resource, Default)]
pub struct SoundLibrary {
    sounds: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn get(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        self.sounds.get(&cue)
    }
}

/// Audio plugin - requires `bevy_kira_audio::AudioPlugin`.
pub struct AudioFxPlugin;

impl Plugin for AudioFxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .add_systems(Startup, load_sounds)
            .add_systems(PostUpdate, play_sound_cues);
    }
}

fn load_sounds(mut library: ResMut<SoundLibrary>, asset_server: Res<AssetServer>) {
    for cue in SoundCue::ALL {
        library.sounds.insert(cue, asset_server.load(cue.path()));
    }
}

fn play_sound_cues(
    mut cues: EventReader<SoundCue>,
    library: Res<SoundLibrary>,
    audio: Res<Audio>,
) {
    for cue in cues.read() {
        match library.get(*cue) {
            Some(sound) => {
                audio.play(sound.clone());
            }
            None => warn!("No sound loaded for {:?}", cue),
        }
    }
}
