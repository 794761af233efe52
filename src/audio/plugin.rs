//! Audio plugin - plays gameplay sound cues through kira.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioSource};

use crate::core::{GameSet, SoundCue, SoundEvent};

/// Plays [`SoundEvent`]s. Expects `bevy_kira_audio::AudioPlugin` to be
/// added by the app.
pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sfx_library)
            .add_systems(Update, play_sound_events.after(GameSet::Bookkeeping));
    }
}

/// One loaded clip per sound cue.
#[derive(Resource, Default)]
pub struct SfxLibrary {
    clips: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SfxLibrary {
    pub fn get(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        self.clips.get(&cue)
    }
}

/// Start loading every clip.
fn load_sfx_library(mut commands: Commands, asset_server: Res<AssetServer>) {
    let clips = SoundCue::ALL
        .into_iter()
        .map(|cue| (cue, asset_server.load(cue.asset_path())))
        .collect();

    commands.insert_resource(SfxLibrary { clips });
}

/// Fire-and-forget playback of the requested cues.
fn play_sound_events(
    mut events: EventReader<SoundEvent>,
    library: Option<Res<SfxLibrary>>,
    audio: Res<Audio>,
) {
    let Some(library) = library else {
        events.clear();
        return;
    };

    for event in events.read() {
        match library.get(event.cue) {
            Some(clip) => {
                audio.play(clip.clone());
            }
            None => warn!("No clip loaded for {:?}", event.cue),
        }
    }
}
