//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use external_texture::ExternalTextureGl;
use gl::types::GLuint;
use gl_texture::TextureAllocator;
use surface_interop::SurfaceFacade;
use texture_core::{
    BackendTexture, Canvas, DrawOp, GpuContext, Image, ImageInfo, RecordingCanvas, Rect,
    SamplingOptions, Texture, TextureId, TransformMatrix,
};

/// Every GL and producer call, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Generate(GLuint),
    Delete(GLuint),
    Attach(GLuint),
    Detach,
    Update,
    Transform,
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

fn push(log: &EventLog, event: Event) {
    log.lock().unwrap().push(event);
}

pub struct FakeSurface;

pub struct FakeFacade {
    log: EventLog,
    matrix: Mutex<TransformMatrix>,
}

impl FakeFacade {
    pub fn set_matrix(&self, matrix: TransformMatrix) {
        *self.matrix.lock().unwrap() = matrix;
    }
}

impl SurfaceFacade for FakeFacade {
    type Surface = FakeSurface;

    fn attach_to_gl_context(&self, _surface: &FakeSurface, texture_name: GLuint) -> Result<()> {
        push(&self.log, Event::Attach(texture_name));
        Ok(())
    }

    fn detach_from_gl_context(&self, _surface: &FakeSurface) -> Result<()> {
        push(&self.log, Event::Detach);
        Ok(())
    }

    fn update_tex_image(&self, _surface: &FakeSurface) -> Result<()> {
        push(&self.log, Event::Update);
        Ok(())
    }

    fn transform_matrix(&self, _surface: &FakeSurface) -> Result<TransformMatrix> {
        push(&self.log, Event::Transform);
        Ok(*self.matrix.lock().unwrap())
    }
}

pub struct FakeAllocator {
    log: EventLog,
    next: Cell<GLuint>,
    pub fail: Cell<bool>,
}

impl TextureAllocator for FakeAllocator {
    fn generate(&self) -> Result<GLuint> {
        if self.fail.get() {
            bail!("no GL context is current");
        }
        let name = self.next.get() + 1;
        self.next.set(name);
        push(&self.log, Event::Generate(name));
        Ok(name)
    }

    fn delete(&self, name: GLuint) {
        push(&self.log, Event::Delete(name));
    }
}

/// GPU context that wraps every texture unless told to refuse.
#[derive(Default)]
pub struct FakeGpuContext {
    pub refuse: bool,
    pub wrapped: Vec<BackendTexture>,
}

impl GpuContext for FakeGpuContext {
    fn make_image_from_texture(
        &mut self,
        texture: &BackendTexture,
        info: &ImageInfo,
    ) -> Option<Image> {
        if self.refuse {
            return None;
        }
        self.wrapped.push(*texture);
        Some(Image::new(*texture, *info))
    }
}

/// Fields drop in order, so the texture goes before its surface.
pub struct Harness {
    pub texture: ExternalTextureGl<FakeFacade>,
    pub log: EventLog,
    pub facade: Arc<FakeFacade>,
    pub surface: Option<Arc<FakeSurface>>,
    pub allocator: Rc<FakeAllocator>,
    pub context: FakeGpuContext,
}

impl Harness {
    pub fn new(id: i64) -> Self {
        texture_core::logging::init_for_tests();

        let log = EventLog::default();
        let facade = Arc::new(FakeFacade {
            log: log.clone(),
            matrix: Mutex::new(TransformMatrix::IDENTITY),
        });
        let surface = Arc::new(FakeSurface);
        let allocator = Rc::new(FakeAllocator {
            log: log.clone(),
            next: Cell::new(0),
            fail: Cell::new(false),
        });
        let texture = ExternalTextureGl::new(
            TextureId::new(id).unwrap(),
            Arc::downgrade(&surface),
            facade.clone(),
            allocator.clone(),
        );

        Self {
            texture,
            log,
            facade,
            surface: Some(surface),
            allocator,
            context: FakeGpuContext::default(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear_events(&self) {
        self.log.lock().unwrap().clear();
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }

    /// Paint into `bounds` on a fresh canvas and return the recorded ops.
    pub fn paint_into(&mut self, bounds: Rect, freeze: bool) -> Vec<DrawOp> {
        let mut canvas = RecordingCanvas::new();
        self.texture.paint(
            &mut canvas,
            &bounds,
            freeze,
            &mut self.context,
            &SamplingOptions::linear(),
        );
        assert_eq!(canvas.save_count(), 1, "paint left the canvas saved");
        canvas.take_ops()
    }

    pub fn paint(&mut self, freeze: bool) -> Vec<DrawOp> {
        self.paint_into(Rect::from_xywh(0.0, 0.0, 100.0, 100.0), freeze)
    }
}
