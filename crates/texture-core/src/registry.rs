//! Registry of the textures the engine can currently paint.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use tracing::{debug, trace};

use crate::texture::{Texture, TextureId};

/// Owns registered textures and forwards GPU context lifecycle to them.
///
/// Lives on the thread that owns the GPU context.
#[derive(Default)]
pub struct TextureRegistry {
    textures: BTreeMap<TextureId, Box<dyn Texture>>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `texture`. Fails if its id is already registered.
    pub fn register_texture(&mut self, texture: Box<dyn Texture>) -> Result<()> {
        let id = texture.id();
        if self.textures.contains_key(&id) {
            bail!("texture {id} is already registered");
        }
        debug!(texture_id = %id, "registered texture");
        self.textures.insert(id, texture);
        Ok(())
    }

    /// Drop the texture registered under `id`.
    ///
    /// Returns `false` if no such texture exists.
    pub fn unregister_texture(&mut self, id: TextureId) -> bool {
        match self.textures.remove(&id) {
            Some(mut texture) => {
                texture.on_texture_unregistered();
                debug!(texture_id = %id, "unregistered texture");
                true
            }
            None => false,
        }
    }

    pub fn get_texture(&mut self, id: TextureId) -> Option<&mut (dyn Texture + 'static)> {
        self.textures.get_mut(&id).map(|t| t.as_mut())
    }

    pub fn mark_new_frame_available(&self, id: TextureId) {
        match self.textures.get(&id) {
            Some(texture) => texture.mark_new_frame_available(),
            None => trace!(texture_id = %id, "frame signal for unknown texture"),
        }
    }

    pub fn on_gr_context_created(&mut self) {
        for texture in self.textures.values_mut() {
            texture.on_gr_context_created();
        }
    }

    pub fn on_gr_context_destroyed(&mut self) {
        for texture in self.textures.values_mut() {
            texture.on_gr_context_destroyed();
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, GpuContext};
    use crate::geometry::{Rect, SamplingOptions};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(i64, &'static str)>>>;

    struct FakeTexture {
        id: TextureId,
        log: Log,
    }

    impl FakeTexture {
        fn boxed(id: i64, log: &Log) -> Box<dyn Texture> {
            Box::new(Self {
                id: TextureId::new(id).unwrap(),
                log: log.clone(),
            })
        }

        fn push(&self, event: &'static str) {
            self.log.borrow_mut().push((self.id.get(), event));
        }
    }

    impl Texture for FakeTexture {
        fn id(&self) -> TextureId {
            self.id
        }

        fn paint(
            &mut self,
            _canvas: &mut dyn Canvas,
            _bounds: &Rect,
            _freeze: bool,
            _context: &mut dyn GpuContext,
            _sampling: &SamplingOptions,
        ) {
            self.push("paint");
        }

        fn on_gr_context_created(&mut self) {
            self.push("created");
        }

        fn on_gr_context_destroyed(&mut self) {
            self.push("destroyed");
        }

        fn mark_new_frame_available(&self) {
            self.push("frame");
        }

        fn on_texture_unregistered(&mut self) {
            self.push("unregistered");
        }
    }

    impl Drop for FakeTexture {
        fn drop(&mut self) {
            self.push("dropped");
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let log = Log::default();
        let mut registry = TextureRegistry::new();
        registry.register_texture(FakeTexture::boxed(1, &log)).unwrap();
        assert!(registry.register_texture(FakeTexture::boxed(1, &log)).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lifecycle_is_broadcast_in_id_order() {
        let log = Log::default();
        let mut registry = TextureRegistry::new();
        registry.register_texture(FakeTexture::boxed(2, &log)).unwrap();
        registry.register_texture(FakeTexture::boxed(1, &log)).unwrap();

        registry.on_gr_context_created();
        registry.on_gr_context_destroyed();

        assert_eq!(
            *log.borrow(),
            vec![(1, "created"), (2, "created"), (1, "destroyed"), (2, "destroyed")]
        );
    }

    #[test]
    fn unregister_notifies_then_drops() {
        let log = Log::default();
        let mut registry = TextureRegistry::new();
        registry.register_texture(FakeTexture::boxed(4, &log)).unwrap();
        let id = TextureId::new(4).unwrap();

        registry.mark_new_frame_available(id);
        assert!(registry.get_texture(id).is_some());
        assert!(registry.unregister_texture(id));
        assert!(!registry.unregister_texture(id));
        assert!(registry.is_empty());

        assert_eq!(
            *log.borrow(),
            vec![(4, "frame"), (4, "unregistered"), (4, "dropped")]
        );
    }
}
