use crate::assets::fonts::{FontBook, TextEngine};
use crate::assets::texture::{DirTextureLoader, TextureLoader};
use crate::config::EditorConfig;
use crate::drive::export::{ExportProgress, GifExport, GifExportOpts, capture_frames};
use crate::drive::playback::{FrameScheduler, ManualScheduler, Playback};
use crate::drive::preview::{PreviewDebouncer, Thumbnail, make_thumbnail};
use crate::editor::state::{Editor, Notice};
use crate::encode::gif::GifSink;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::HaloResult;
use crate::interact::controller::InteractionController;
use crate::interact::hit::HitTarget;
use crate::io::document::DesignDocument;
use crate::io::store::{AvatarSink, DesignStore, PublishRequest};
use crate::model::layers::MotionEffect;
use crate::model::selection::InteractionMode;
use crate::render::compositor::Compositor;
use crate::render::surface::Surface;

/// The editor wired to its compositor, pointer controller, preview loop and exporters.
///
/// All time arguments are host milliseconds from a monotonic clock.
pub struct EditorSession {
    config: EditorConfig,
    editor: Editor,
    compositor: Compositor,
    controller: InteractionController,
    surface: Surface,
    playback: Playback,
    scheduler: Box<dyn FrameScheduler>,
    loader: Box<dyn TextureLoader>,
    preview: PreviewDebouncer,
    thumbnail: Option<Thumbnail>,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("canvas", &self.editor.canvas())
            .field("playing", &self.playback.is_playing())
            .field("gesture", self.controller.gesture())
            .finish()
    }
}

impl EditorSession {
    /// Session from a validated config. Loads fonts; textures resolve under `asset_root`.
    pub fn new(config: EditorConfig) -> HaloResult<Self> {
        config.validate()?;
        let canvas = config.canvas()?;
        let book = FontBook::load(&config.font_files, config.system_fonts);
        Ok(Self {
            editor: Editor::new(canvas),
            compositor: Compositor::new(TextEngine::new(book)),
            controller: InteractionController::new(canvas),
            surface: Surface::new(canvas.size),
            playback: Playback::new(),
            scheduler: Box::new(ManualScheduler::new()),
            loader: Box::new(DirTextureLoader::new(config.asset_root.clone())),
            preview: PreviewDebouncer::new(config.preview_debounce_ms),
            thumbnail: None,
            config,
        })
    }

    /// Use the host's frame scheduler.
    pub fn with_scheduler(mut self, scheduler: Box<dyn FrameScheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Use a custom texture loader.
    pub fn with_texture_loader(mut self, loader: Box<dyn TextureLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Active config.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Editor state.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Mutable editor state. Call [`Self::refresh`] afterwards to redraw.
    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// The compositor, for direct texture and font access.
    pub fn compositor_mut(&mut self) -> &mut Compositor {
        &mut self.compositor
    }

    /// Last drawn frame.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Render `time_ms` into the session surface.
    pub fn draw(&mut self, time_ms: f64) -> HaloResult<&Surface> {
        self.compositor
            .draw(&self.editor.scene(), time_ms, &mut self.surface)?;
        Ok(&self.surface)
    }

    /// Redraw the rest frame after a state change (unless the preview loop owns the surface)
    /// and arm the preview debounce.
    pub fn refresh(&mut self, now_ms: f64) -> HaloResult<()> {
        if !self.playback.is_playing() {
            self.draw(0.0)?;
            self.preview.notify(now_ms);
        }
        Ok(())
    }

    // Pointer input

    /// The canvas element moved or was resized on screen.
    pub fn set_display(&mut self, display: Rect) {
        self.controller.set_display(display);
    }

    /// Pointer pressed at client position `client`.
    pub fn pointer_down(&mut self, client: Point, now_ms: f64) -> HaloResult<Option<HitTarget>> {
        let hit = self.controller.pointer_down(
            &mut self.editor,
            client,
            self.compositor.text_metrics(),
        );
        if hit.is_some() {
            self.refresh(now_ms)?;
        }
        Ok(hit)
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, client: Point, now_ms: f64) -> HaloResult<bool> {
        let changed = self.controller.pointer_move(&mut self.editor, client);
        if changed {
            self.refresh(now_ms)?;
        }
        Ok(changed)
    }

    /// Pointer released, left the canvas, or was cancelled.
    pub fn pointer_up(&mut self, now_ms: f64) -> HaloResult<()> {
        let was_active = self.editor.mode() != InteractionMode::None;
        self.controller.pointer_up(&mut self.editor);
        if was_active {
            self.refresh(now_ms)?;
        }
        Ok(())
    }

    // Playback

    /// Start or stop the live preview loop. Stopping redraws the rest frame.
    pub fn set_playing(&mut self, playing: bool, now_ms: f64) -> HaloResult<()> {
        if playing && self.editor.motion().is_animated() {
            self.playback.start(now_ms, self.scheduler.as_mut());
            self.editor.set_playing(true);
            self.editor.deselect();
            return Ok(());
        }
        self.stop_playback(now_ms)
    }

    /// Change the motion effect. `None` stops a running preview.
    pub fn set_motion(&mut self, effect: MotionEffect, now_ms: f64) -> HaloResult<()> {
        self.editor.set_motion(effect);
        if !effect.is_animated() && self.playback.is_playing() {
            return self.stop_playback(now_ms);
        }
        self.refresh(now_ms)
    }

    fn stop_playback(&mut self, now_ms: f64) -> HaloResult<()> {
        self.playback.stop(self.scheduler.as_mut());
        self.editor.set_playing(false);
        self.refresh(now_ms)
    }

    /// Scheduler callback. Returns the elapsed time drawn, or `None` if the loop has stopped.
    pub fn tick(&mut self, now_ms: f64) -> HaloResult<Option<f64>> {
        let was_playing = self.playback.is_playing();
        match self
            .playback
            .tick(now_ms, self.editor.motion(), self.scheduler.as_mut())
        {
            Some(elapsed) => {
                self.draw(elapsed)?;
                Ok(Some(elapsed))
            }
            None => {
                if was_playing {
                    self.editor.set_playing(false);
                    self.refresh(now_ms)?;
                }
                Ok(None)
            }
        }
    }

    // Preview thumbnail

    /// Sample a thumbnail once the surface has been quiet long enough. Never fires during a
    /// gesture, playback or export.
    pub fn poll_preview(&mut self, now_ms: f64) -> HaloResult<Option<&Thumbnail>> {
        let busy = self.editor.mode() != InteractionMode::None
            || self.editor.is_playing()
            || self.editor.is_recording();
        if !self.preview.poll(now_ms, busy) {
            return Ok(None);
        }
        self.thumbnail = Some(make_thumbnail(&self.surface, self.config.thumbnail_size)?);
        Ok(self.thumbnail.as_ref())
    }

    /// Most recent thumbnail.
    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    // Assets

    /// Perform queued texture loads and redraw if any finished.
    pub fn pump_textures(&mut self, now_ms: f64) -> HaloResult<usize> {
        let loaded = self.compositor.pump_textures(self.loader.as_ref());
        if loaded > 0 {
            self.refresh(now_ms)?;
        }
        Ok(loaded)
    }

    // Export

    /// GIF options from the session config.
    pub fn default_gif_opts(&self) -> HaloResult<GifExportOpts> {
        self.config.gif_opts()
    }

    /// Capture an animated GIF by stepping time manually. Stops live playback first.
    #[tracing::instrument(level = "info", skip(self, progress), fields(frames = opts.frame_count()))]
    pub fn export_gif(
        &mut self,
        opts: &GifExportOpts,
        progress: &mut dyn FnMut(ExportProgress),
    ) -> HaloResult<GifExport> {
        if self.playback.stop(self.scheduler.as_mut()) {
            self.editor.set_playing(false);
        }
        let mut bytes = Vec::new();
        let frame_times_ms = {
            let mut sink = GifSink::new(&mut bytes, opts.sink_opts());
            capture_frames(
                &mut self.editor,
                &mut self.compositor,
                &mut self.surface,
                opts,
                &mut sink,
                progress,
            )?
        };
        Ok(GifExport {
            bytes,
            frame_times_ms,
        })
    }

    fn render_rest(&mut self) -> HaloResult<Surface> {
        let mut scene = self.editor.scene();
        scene.show_selection = false;
        let mut out = Surface::new(scene.canvas.size);
        self.compositor.draw(&scene, 0.0, &mut out)?;
        Ok(out)
    }

    /// Static rest frame at full logical resolution, as PNG, without selection decorations.
    pub fn render_png(&mut self) -> HaloResult<Vec<u8>> {
        self.render_rest()?.encode_png()
    }

    /// Hand the rest frame to a profile-picture collaborator.
    pub fn render_avatar(&mut self, sink: &mut dyn AvatarSink) -> HaloResult<()> {
        let png = self.render_png()?;
        sink.accept_avatar(png)
    }

    // Persistence

    /// Current frame and layers.
    pub fn document(&self) -> DesignDocument {
        DesignDocument::from_editor(&self.editor)
    }

    /// Hydrate from design JSON, tolerating malformed fields (a notice lists them).
    pub fn load_document(&mut self, json: &str, now_ms: f64) -> HaloResult<()> {
        let (doc, repaired) = DesignDocument::from_json_lenient(json);
        doc.apply_to(&mut self.editor);
        if !repaired.is_empty() {
            self.editor.push_notice(Notice::DocumentRepaired(repaired));
        }
        self.refresh(now_ms)
    }

    /// Load design `id` from `store`.
    pub fn load_design(&mut self, store: &dyn DesignStore, id: &str, now_ms: f64) -> HaloResult<()> {
        let json = store.load(id)?;
        self.load_document(&json, now_ms)
    }

    /// Publish the current design with a rendered PNG. Returns the assigned id.
    pub fn publish(
        &mut self,
        store: &mut dyn DesignStore,
        name: &str,
        description: &str,
        tags: &[String],
    ) -> HaloResult<String> {
        let png = self.render_png()?;
        store.publish(&PublishRequest {
            name: name.to_owned(),
            description: description.to_owned(),
            tags: tags.to_vec(),
            document: self.document(),
            png,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;
