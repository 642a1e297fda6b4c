use tactile_core::{CuePool, CueSink};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start playback and discard any rejection (autoplay policy, missing asset).
pub fn play_swallowed(el: &web::HtmlMediaElement) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[audio] play failed: {:?}", e),
    }
}

/// One pre-loaded `<audio>` element used as a pool slot.
pub struct HtmlAudioCue {
    el: web::HtmlAudioElement,
}

impl HtmlAudioCue {
    pub fn new(src: &str, volume: f64) -> Option<Self> {
        match web::HtmlAudioElement::new_with_src(src) {
            Ok(el) => {
                el.set_volume(volume);
                el.set_preload("auto");
                Some(Self { el })
            }
            Err(e) => {
                log::warn!("[audio] cannot create cue {}: {:?}", src, e);
                None
            }
        }
    }
}

impl CueSink for HtmlAudioCue {
    fn rewind_and_play(&mut self) {
        self.el.set_current_time(0.0);
        play_swallowed(&self.el);
    }
}

/// Slots that fail to construct are dropped; an empty pool stays silent.
pub fn build_cue_pool(src: &str, size: usize, volume: f64) -> CuePool<HtmlAudioCue> {
    let players: Vec<HtmlAudioCue> = (0..size)
        .filter_map(|_| HtmlAudioCue::new(src, volume))
        .collect();
    if players.len() < size {
        log::warn!("[audio] cue pool for {} has {}/{} players", src, players.len(), size);
    }
    CuePool::new(players)
}

/// A single reusable element whose source is swapped per cue, for controls
/// that never overlap their own sounds.
pub struct CuePlayer {
    el: Option<web::HtmlAudioElement>,
}

impl CuePlayer {
    pub fn new() -> Self {
        let el = web::HtmlAudioElement::new()
            .map_err(|e| log::warn!("[audio] cue player unavailable: {:?}", e))
            .ok();
        if let Some(el) = &el {
            el.set_preload("auto");
        }
        Self { el }
    }

    pub fn play(&self, src: &str) {
        if let Some(el) = &self.el {
            el.set_src(src);
            play_swallowed(el);
        }
    }
}

impl Default for CuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh element per call so rapid cues can overlap.
pub fn play_one_shot(src: &str) {
    match web::HtmlAudioElement::new_with_src(src) {
        Ok(el) => play_swallowed(&el),
        Err(e) => log::debug!("[audio] one-shot {} unavailable: {:?}", src, e),
    }
}
